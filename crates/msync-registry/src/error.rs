//! Registry error types.

use msync_core::CoreError;
use thiserror::Error;

/// Errors that can occur when talking to the local server or the remote
/// registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the server.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Failed to encode a request body.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The server returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the server asked us to wait.
        retry_after_secs: u64,
    },

    /// The local server reported a failure inside a pull progress stream.
    #[error("pull failed: {0}")]
    PullFailed(String),
}

/// Why a single model was left out of a reconciliation.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error(transparent)]
    Name(#[from] CoreError),

    #[error(transparent)]
    Fetch(#[from] RegistryError),
}
