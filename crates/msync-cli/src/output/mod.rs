use msync_core::StalenessReport;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui::UiPrefs;

pub mod table;

/// A response that also knows how to lay itself out as table rows.
pub trait Tabular {
    fn headers(&self) -> &'static [&'static str];
    fn rows(&self) -> Vec<Vec<String>>;
    /// Shown instead of an empty table.
    fn empty_message(&self) -> &'static str {
        "(no rows)"
    }
}

/// Render a response to a string in the requested format.
pub fn render<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
    prefs: &UiPrefs,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Table => {
            let rows = value.rows();
            if rows.is_empty() {
                return Ok(value.empty_message().to_string());
            }
            Ok(table::render_table(
                value.headers(),
                &rows,
                table::TableOptions {
                    max_width: prefs.term_width,
                    color: prefs.table_color,
                },
            ))
        }
    }
}

/// Print a response to stdout in the requested format.
pub fn output<T: Serialize + Tabular>(
    value: &T,
    format: OutputFormat,
    prefs: &UiPrefs,
) -> anyhow::Result<()> {
    let rendered = render(value, format, prefs)?;
    println!("{rendered}");
    Ok(())
}

impl Tabular for StalenessReport {
    fn headers(&self) -> &'static [&'static str] {
        &["model", "status", "detail"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let compared = self.records.iter().map(|record| {
            let status = if record.is_stale { "stale" } else { "current" };
            vec![record.name.clone(), status.to_string(), String::new()]
        });
        let skipped = self.skipped.iter().map(|skipped| {
            vec![
                skipped.name.clone(),
                "skipped".to_string(),
                skipped.reason.clone(),
            ]
        });
        compared.chain(skipped).collect()
    }

    fn empty_message(&self) -> &'static str {
        "No local models found."
    }
}
