//! Local inventory reader.

use msync_core::{InventoryResponse, LocalModel};

use crate::{ModelClient, error::RegistryError, http::check_response};

impl ModelClient {
    /// List the models cached by the local server, in the server's order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the server is unreachable, answers with a
    /// non-success status, or the body is not an inventory document.
    pub async fn list_local_models(&self) -> Result<Vec<LocalModel>, RegistryError> {
        tracing::debug!(url = %self.tags_url, "fetching local inventory");
        let resp = check_response(
            self.http
                .get(&self.tags_url)
                .timeout(self.request_timeout)
                .send()
                .await?,
        )
        .await?;

        let body = resp.bytes().await?;
        let inventory = parse_inventory(&body)?;
        tracing::debug!(count = inventory.models.len(), "local inventory loaded");
        Ok(inventory.models)
    }
}

fn parse_inventory(body: &[u8]) -> Result<InventoryResponse, RegistryError> {
    serde_json::from_slice(body)
        .map_err(|e| RegistryError::Parse(format!("local inventory: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "models": [
            {
                "name": "llama2:7b",
                "model": "llama2:7b",
                "modified_at": "2024-02-01T10:00:00.000000+01:00",
                "size": 3826793677,
                "digest": "78e26419b4469263f75331927a00a0284ef6544c1975b826b15abdaef17bb962",
                "details": { "format": "gguf", "family": "llama" }
            },
            {
                "name": "myorg/coder:latest",
                "digest": "a1b2c3"
            }
        ]
    }"#;

    #[test]
    fn parse_inventory_response() {
        let inventory = parse_inventory(FIXTURE.as_bytes()).unwrap();
        assert_eq!(inventory.models.len(), 2);
        assert_eq!(inventory.models[0].name, "llama2:7b");
        assert_eq!(inventory.models[1], LocalModel::new("myorg/coder:latest", "a1b2c3"));
    }

    #[test]
    fn unparseable_inventory_is_parse_error() {
        let err = parse_inventory(b"not json").unwrap_err();
        assert!(matches!(err, RegistryError::Parse(ref msg) if msg.starts_with("local inventory")));
    }
}
