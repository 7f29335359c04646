//! Local model server configuration.

use serde::{Deserialize, Serialize};

/// Default address of the local model server.
fn default_base_url() -> String {
    String::from("http://localhost:11434")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalConfig {
    /// Base URL of the local server (inventory at `/api/tags`, pulls at
    /// `/api/pull`).
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl LocalConfig {
    #[must_use]
    pub fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn pull_url(&self) -> String {
        format!("{}/api/pull", self.base_url.trim_end_matches('/'))
    }
}
