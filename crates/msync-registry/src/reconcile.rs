//! Reconciliation driver.
//!
//! Walks the local inventory in order, one model at a time:
//! resolve identity → fetch manifest → compare fingerprints. A model that
//! cannot be resolved or fetched is logged and recorded as skipped; it never
//! aborts the batch and is never reported as stale.

use msync_core::{Fingerprint, LocalModel, RemoteIdentity, StalenessReport};

use crate::{ModelClient, error::ReconcileError};

/// Per-model outcome passed to a [`ModelClient::reconcile_with`] observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome<'a> {
    /// Local digest matches the remote manifest.
    Current { name: &'a str },
    /// Local digest differs from the remote manifest.
    Stale { name: &'a str },
    /// The model could not be reconciled.
    Skipped { name: &'a str, reason: &'a str },
}

impl ItemOutcome<'_> {
    #[must_use]
    pub const fn name(&self) -> &str {
        match *self {
            Self::Current { name } | Self::Stale { name } | Self::Skipped { name, .. } => name,
        }
    }
}

impl ModelClient {
    /// Reconcile every local model against the remote registry.
    pub async fn reconcile(&self, models: &[LocalModel]) -> StalenessReport {
        self.reconcile_with(models, |_| {}).await
    }

    /// Reconcile every local model, reporting each outcome to `observer` as
    /// soon as it is known.
    pub async fn reconcile_with<F>(&self, models: &[LocalModel], mut observer: F) -> StalenessReport
    where
        F: FnMut(&ItemOutcome<'_>),
    {
        let mut report = StalenessReport::default();

        for model in models {
            match self.check_model(model).await {
                Ok(is_stale) => {
                    if is_stale {
                        tracing::info!(model = %model.name, "model is out of date");
                        observer(&ItemOutcome::Stale { name: &model.name });
                    } else {
                        tracing::info!(model = %model.name, "model is up to date");
                        observer(&ItemOutcome::Current { name: &model.name });
                    }
                    report.push_record(&model.name, is_stale);
                }
                Err(error) => {
                    let reason = error.to_string();
                    tracing::warn!(model = %model.name, %reason, "skipping model");
                    observer(&ItemOutcome::Skipped {
                        name: &model.name,
                        reason: &reason,
                    });
                    report.push_skipped(&model.name, reason);
                }
            }
        }

        report
    }

    /// Whether one local model is behind the registry.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError::Name`] for a malformed model name and
    /// [`ReconcileError::Fetch`] if the manifest cannot be fetched.
    pub async fn check_model(&self, model: &LocalModel) -> Result<bool, ReconcileError> {
        let identity = RemoteIdentity::resolve(&model.name, self.namespace())?;
        let descriptor = self.fetch_descriptor(&identity).await?;
        let fingerprint = Fingerprint::of(&descriptor);
        tracing::debug!(
            model = %model.name,
            remote = %fingerprint,
            local = %model.digest,
            "compared fingerprints"
        );
        Ok(!fingerprint.matches(&model.digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_name_covers_every_variant() {
        let outcomes = [
            ItemOutcome::Current { name: "a:1" },
            ItemOutcome::Stale { name: "a:1" },
            ItemOutcome::Skipped {
                name: "a:1",
                reason: "boom",
            },
        ];
        assert!(outcomes.iter().all(|o| o.name() == "a:1"));
    }

    #[tokio::test]
    async fn malformed_names_are_skipped_without_network() {
        let client = ModelClient::new(&msync_config::MsyncConfig::default()).unwrap();
        let models = vec![LocalModel::new("no-tag", "x"), LocalModel::new(":1", "y")];

        let mut seen = Vec::new();
        let report = client
            .reconcile_with(&models, |outcome| seen.push(outcome.name().to_string()))
            .await;

        assert!(report.records.is_empty());
        assert_eq!(report.skipped.len(), 2);
        assert!(report.skipped[0].reason.contains("missing ':'"));
        assert_eq!(seen, vec!["no-tag", ":1"]);
    }
}
