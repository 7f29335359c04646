//! Cross-cutting error types for modelsync.
//!
//! Network and configuration errors live in their own crates
//! (`RegistryError`, `ConfigError`). The binary converges them through
//! `anyhow`.

use thiserror::Error;

/// Errors raised while interpreting local inventory data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A local model name could not be split into repository and tag.
    #[error("Malformed model name '{name}': {reason}")]
    MalformedName { name: String, reason: String },

    /// A remote descriptor body was not a JSON object.
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),
}

impl CoreError {
    pub(crate) fn malformed(name: &str, reason: &str) -> Self {
        Self::MalformedName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}
