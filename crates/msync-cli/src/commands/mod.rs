use msync_registry::ModelClient;

use crate::cli::{GlobalFlags, Mode};
use crate::ui::UiPrefs;

pub mod check;
pub mod interactive;
pub mod pull;
pub mod update;

/// Route a parsed mode to its handler.
pub async fn dispatch(
    mode: Mode,
    client: &ModelClient,
    flags: &GlobalFlags,
    prefs: &UiPrefs,
) -> anyhow::Result<()> {
    match mode {
        Mode::Check => check::run(client, flags, prefs).await,
        Mode::Update => update::run(client, flags, prefs).await,
        Mode::Interactive => interactive::run(client, flags, prefs).await,
    }
}
