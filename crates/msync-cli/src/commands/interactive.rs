use inquire::{InquireError, Select};
use msync_registry::ModelClient;

use crate::checklist::Checklist;
use crate::cli::GlobalFlags;
use crate::commands::{check, pull, update};
use crate::ui::UiPrefs;

/// Handle `msync --interactive`: report, pick stale models, pull them.
pub async fn run(client: &ModelClient, flags: &GlobalFlags, prefs: &UiPrefs) -> anyhow::Result<()> {
    if !prefs.prompts {
        anyhow::bail!("--interactive needs a terminal; use --update to pull every stale model");
    }

    let report = check::reconcile(client, prefs).await?;
    update::print_report(&report, flags, prefs)?;

    let stale = report.stale_names();
    let selected = if stale.is_empty() {
        Vec::new()
    } else {
        let mut checklist = Checklist::new(stale);
        let selected = pick(&mut checklist)?;
        if selected.is_empty() {
            eprintln!("Nothing selected.");
        }
        selected
    };

    let summary = if selected.is_empty() {
        pull::UpdateSummary::default()
    } else {
        pull::pull_all(client, &selected, prefs).await
    };
    update::finish(&report, &summary, flags, prefs)
}

/// Drive the checklist with one prompt per toggle until the user confirms
/// or cancels. Cancelling selects nothing.
fn pick(checklist: &mut Checklist) -> anyhow::Result<Vec<String>> {
    if checklist.is_empty() {
        return Ok(Vec::new());
    }
    loop {
        let mut options = checklist.render_lines();
        let confirm = options.len();
        options.push(format!("→ Update selected ({})", checklist.selected().len()));
        options.push(String::from("→ Cancel"));

        let answer = Select::new("Select models to update", options)
            .with_starting_cursor(checklist.focus())
            .with_page_size(12)
            .with_help_message("↑↓ move  enter toggle  esc cancel")
            .raw_prompt();

        match answer {
            Ok(choice) if choice.index == confirm => return Ok(checklist.selected()),
            Ok(choice) if choice.index > confirm => return Ok(Vec::new()),
            Ok(choice) => {
                checklist.set_focus(choice.index);
                checklist.toggle_focused();
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(Vec::new());
            }
            Err(error) => return Err(error.into()),
        }
    }
}
