use anyhow::Context;
use msync_core::StalenessReport;
use msync_registry::ModelClient;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;
use crate::ui::UiPrefs;

/// Fetch the local inventory and reconcile it, showing a progress bar.
///
/// The inventory fetch is the only fatal step; per-model failures end up in
/// the report's `skipped` list.
pub async fn reconcile(client: &ModelClient, prefs: &UiPrefs) -> anyhow::Result<StalenessReport> {
    let models = client
        .list_local_models()
        .await
        .context("failed to fetch local models")?;

    let total = u64::try_from(models.len()).unwrap_or(u64::MAX);
    let progress = Progress::bar(prefs, total, "checking models");
    let report = client
        .reconcile_with(&models, |outcome| {
            progress.set_message(outcome.name());
            progress.inc(1);
        })
        .await;
    progress.finish_clear();

    Ok(report)
}

/// Handle `msync --check`.
pub async fn run(client: &ModelClient, flags: &GlobalFlags, prefs: &UiPrefs) -> anyhow::Result<()> {
    let report = reconcile(client, prefs).await?;
    output(&report, flags.format, prefs)?;
    print_summary(&report, flags);
    Ok(())
}

/// One-line verdict on stderr, for humans reading the table.
pub fn print_summary(report: &StalenessReport, flags: &GlobalFlags) {
    if flags.quiet || flags.format != OutputFormat::Table || report.records.is_empty() {
        return;
    }
    match report.stale_count() {
        0 => eprintln!("All models are up to date."),
        1 => eprintln!("1 model is out of date."),
        n => eprintln!("{n} models are out of date."),
    }
}
