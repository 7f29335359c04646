//! Local inventory entries as reported by the local model server.

use serde::{Deserialize, Serialize};

/// A model cached by the local server.
///
/// `name` carries the repository and tag (`llama2:7b`, `myorg/llama2:7b`);
/// `digest` is the opaque fingerprint the server stored when it pulled the
/// model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalModel {
    pub name: String,
    pub digest: String,
}

impl LocalModel {
    #[must_use]
    pub fn new(name: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            digest: digest.into(),
        }
    }
}

/// Wire shape of the local inventory endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryResponse {
    #[serde(default)]
    pub models: Vec<LocalModel>,
}
