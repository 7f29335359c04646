//! Remote registry configuration.

use msync_core::{DEFAULT_NAMESPACE, RemoteIdentity};
use serde::{Deserialize, Serialize};

/// Default remote registry.
fn default_base_url() -> String {
    String::from("https://ollama.ai")
}

fn default_namespace() -> String {
    String::from(DEFAULT_NAMESPACE)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Registry base URL; manifests live under `/v2/`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Namespace for model names without a `/`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            namespace: default_namespace(),
        }
    }
}

impl RegistryConfig {
    /// Full manifest URL for a resolved identity.
    #[must_use]
    pub fn manifest_url(&self, identity: &RemoteIdentity) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            identity.manifest_path()
        )
    }
}
