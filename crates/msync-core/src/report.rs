//! Reconciliation outcomes.

use serde::{Deserialize, Serialize};

/// Outcome for one local model that was resolved, fetched, and compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintRecord {
    pub name: String,
    pub is_stale: bool,
}

/// A local model that could not be reconciled this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedModel {
    pub name: String,
    pub reason: String,
}

/// Ordered result of reconciling the whole local inventory.
///
/// `records` holds one entry per successfully compared model, in inventory
/// order. Models that failed resolution or fetch appear only in `skipped`
/// and are never reported as stale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StalenessReport {
    pub records: Vec<FingerprintRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedModel>,
}

impl StalenessReport {
    pub fn push_record(&mut self, name: &str, is_stale: bool) {
        self.records.push(FingerprintRecord {
            name: name.to_string(),
            is_stale,
        });
    }

    pub fn push_skipped(&mut self, name: &str, reason: impl ToString) {
        self.skipped.push(SkippedModel {
            name: name.to_string(),
            reason: reason.to_string(),
        });
    }

    /// Names of stale models, in inventory order.
    #[must_use]
    pub fn stale_names(&self) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| record.is_stale)
            .map(|record| record.name.clone())
            .collect()
    }

    #[must_use]
    pub fn stale_count(&self) -> usize {
        self.records.iter().filter(|record| record.is_stale).count()
    }

    /// True when every compared model matched its remote descriptor.
    #[must_use]
    pub fn is_all_current(&self) -> bool {
        self.stale_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stale_names_keep_inventory_order() {
        let mut report = StalenessReport::default();
        report.push_record("c:1", true);
        report.push_record("a:1", false);
        report.push_record("b:1", true);

        assert_eq!(report.stale_names(), vec!["c:1", "b:1"]);
        assert_eq!(report.stale_count(), 2);
        assert!(!report.is_all_current());
    }

    #[test]
    fn skipped_models_are_not_stale() {
        let mut report = StalenessReport::default();
        report.push_record("a:1", false);
        report.push_skipped("b:1", "API error (404): not found");

        assert!(report.is_all_current());
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.skipped[0].name, "b:1");
    }

    #[test]
    fn empty_skipped_list_is_omitted_from_json() {
        let mut report = StalenessReport::default();
        report.push_record("a:1", true);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"records": [{"name": "a:1", "is_stale": true}]})
        );
    }
}
