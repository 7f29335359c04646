use msync_core::StalenessReport;
use msync_registry::ModelClient;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{check, pull};
use crate::output::{Tabular, output};
use crate::ui::UiPrefs;

/// Report and pull results printed as one document for `json` and `raw`.
#[derive(Debug, Serialize)]
pub struct UpdateRun<'a> {
    pub report: &'a StalenessReport,
    pub update: &'a pull::UpdateSummary,
}

impl Tabular for UpdateRun<'_> {
    fn headers(&self) -> &'static [&'static str] {
        self.report.headers()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut rows = self.report.rows();
        rows.extend(self.update.rows());
        rows
    }

    fn empty_message(&self) -> &'static str {
        self.report.empty_message()
    }
}

/// Handle `msync --update`: report, then pull every stale model.
pub async fn run(client: &ModelClient, flags: &GlobalFlags, prefs: &UiPrefs) -> anyhow::Result<()> {
    let report = check::reconcile(client, prefs).await?;
    print_report(&report, flags, prefs)?;

    let stale = report.stale_names();
    let summary = if stale.is_empty() {
        pull::UpdateSummary::default()
    } else {
        pull::pull_all(client, &stale, prefs).await
    };
    finish(&report, &summary, flags, prefs)
}

/// Print the report ahead of any pulls. Only tables are printed early; the
/// JSON formats wait for [`finish`] so stdout holds a single document.
pub fn print_report(
    report: &StalenessReport,
    flags: &GlobalFlags,
    prefs: &UiPrefs,
) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        output(report, flags.format, prefs)?;
        check::print_summary(report, flags);
    }
    Ok(())
}

/// Print the update results and fail the run if any pull failed.
pub fn finish(
    report: &StalenessReport,
    summary: &pull::UpdateSummary,
    flags: &GlobalFlags,
    prefs: &UiPrefs,
) -> anyhow::Result<()> {
    match flags.format {
        OutputFormat::Table if summary.attempted() == 0 => {}
        OutputFormat::Table => output(summary, flags.format, prefs)?,
        OutputFormat::Json | OutputFormat::Raw => output(
            &UpdateRun {
                report,
                update: summary,
            },
            flags.format,
            prefs,
        )?,
    }
    if !summary.failed.is_empty() {
        anyhow::bail!(
            "{} of {} updates failed",
            summary.failed.len(),
            summary.attempted()
        );
    }
    Ok(())
}
