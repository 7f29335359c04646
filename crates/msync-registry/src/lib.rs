//! # msync-registry
//!
//! HTTP clients for modelsync:
//! - the local model server (inventory at `/api/tags`, pulls at `/api/pull`)
//! - the remote registry (manifests at `/v2/<repository>/manifests/<tag>`)
//!
//! and the reconciliation driver that ties them to the fingerprinting in
//! `msync-core`. Every request is awaited before the next one starts; the
//! crate never fans out.

pub mod inventory;
pub mod manifest;
pub mod progress;
pub mod pull;
pub mod reconcile;

mod error;
mod http;

pub use error::{ReconcileError, RegistryError};
pub use progress::{ProgressDecoder, ProgressLine, PullEvent};
pub use pull::PullStream;
pub use reconcile::ItemOutcome;

use std::time::Duration;

use msync_config::{MsyncConfig, RegistryConfig};

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the local model server and the remote registry.
#[derive(Debug, Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    tags_url: String,
    pull_url: String,
    registry: RegistryConfig,
    request_timeout: Duration,
}

impl ModelClient {
    /// Create a client from loaded configuration.
    ///
    /// The connect timeout applies to every request. The request timeout is
    /// set per request on inventory and manifest fetches only, since a pull
    /// streams for as long as the download runs.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the underlying `reqwest::Client`
    /// fails to build (e.g., the TLS backend cannot initialize).
    pub fn new(config: &MsyncConfig) -> Result<Self, RegistryError> {
        let http = reqwest::Client::builder()
            .user_agent(config.http.user_agent.as_str())
            .connect_timeout(config.http.connect_timeout())
            .build()?;

        Ok(Self {
            http,
            tags_url: config.local.tags_url(),
            pull_url: config.local.pull_url(),
            registry: config.registry.clone(),
            request_timeout: config.http.timeout(),
        })
    }

    /// Namespace applied to model names without a `/`.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.registry.namespace
    }
}
