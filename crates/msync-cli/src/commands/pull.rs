//! Sequential pulls with per-model failure isolation.

use msync_registry::{ModelClient, ProgressDecoder, ProgressLine, PullStream, RegistryError};
use serde::Serialize;

use crate::output::Tabular;
use crate::progress::Progress;
use crate::ui::UiPrefs;

#[derive(Debug, Serialize)]
pub struct FailedUpdate {
    pub name: String,
    pub error: String,
}

/// Result of pulling a batch of models.
#[derive(Debug, Default, Serialize)]
pub struct UpdateSummary {
    pub updated: Vec<String>,
    pub failed: Vec<FailedUpdate>,
}

impl UpdateSummary {
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.updated.len() + self.failed.len()
    }
}

impl Tabular for UpdateSummary {
    fn headers(&self) -> &'static [&'static str] {
        &["model", "status", "detail"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let updated = self
            .updated
            .iter()
            .map(|name| vec![name.clone(), "updated".to_string(), String::new()]);
        let failed = self
            .failed
            .iter()
            .map(|f| vec![f.name.clone(), "failed".to_string(), f.error.clone()]);
        updated.chain(failed).collect()
    }

    fn empty_message(&self) -> &'static str {
        "Nothing to update."
    }
}

/// Pull each model in order. A failure is logged and recorded, then the next
/// model is pulled.
pub async fn pull_all(client: &ModelClient, names: &[String], prefs: &UiPrefs) -> UpdateSummary {
    let mut summary = UpdateSummary::default();
    for name in names {
        match pull_one(client, name, prefs).await {
            Ok(()) => {
                tracing::info!(model = %name, "model updated");
                summary.updated.push(name.clone());
            }
            Err(error) => {
                tracing::warn!(model = %name, %error, "update failed");
                summary.failed.push(FailedUpdate {
                    name: name.clone(),
                    error: error.to_string(),
                });
            }
        }
    }
    summary
}

/// Pull one model, forwarding its progress output until the stream ends.
///
/// # Errors
///
/// Returns [`RegistryError`] if the pull cannot be started, the stream
/// breaks, or the server reports an error event.
pub async fn pull_one(
    client: &ModelClient,
    name: &str,
    prefs: &UiPrefs,
) -> Result<(), RegistryError> {
    let stream = client.pull(name).await?;
    let progress = Progress::transfer(prefs, name);

    match forward(stream, &progress).await {
        Ok(()) => {
            progress.finish_ok("done");
            Ok(())
        }
        Err(error) => {
            progress.finish_err("failed");
            Err(error)
        }
    }
}

async fn forward(mut stream: PullStream, progress: &Progress) -> Result<(), RegistryError> {
    let mut decoder = ProgressDecoder::new();
    let mut succeeded = false;
    while let Some(chunk) = stream.next_chunk().await? {
        for line in decoder.push(&chunk) {
            succeeded |= show(stream.name(), line, progress)?;
        }
    }
    if let Some(line) = decoder.finish() {
        succeeded |= show(stream.name(), line, progress)?;
    }
    if !succeeded {
        return Err(RegistryError::PullFailed(
            "stream ended before success".to_string(),
        ));
    }
    Ok(())
}

/// Render one progress line. Returns whether it was the final success event.
fn show(name: &str, line: ProgressLine, progress: &Progress) -> Result<bool, RegistryError> {
    match line {
        ProgressLine::Event(event) => {
            if let Some(error) = event.error {
                return Err(RegistryError::PullFailed(error));
            }
            if let Some(total) = event.total {
                progress.set_length(total);
            }
            if let Some(completed) = event.completed {
                progress.set_position(completed);
            }
            if progress.is_visible() {
                progress.set_message(&event.status);
            } else {
                progress.println(&format!("{name}: {}", event.status));
            }
            Ok(event.is_success())
        }
        ProgressLine::Text(text) => {
            progress.println(&format!("{name}: {text}"));
            Ok(false)
        }
    }
}
