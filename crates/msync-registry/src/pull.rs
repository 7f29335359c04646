//! Update trigger: ask the local server to re-pull a model.

use serde::Serialize;

use crate::{ModelClient, error::RegistryError, http::check_response};

#[derive(Serialize)]
struct PullRequest<'a> {
    name: &'a str,
}

/// Streamed body of a pull request.
///
/// A finite, single-pass sequence of byte chunks read lazily from the
/// connection. Once [`PullStream::next_chunk`] returns `Ok(None)` or an
/// error, the response is dropped and every later call returns `Ok(None)`.
#[derive(Debug)]
pub struct PullStream {
    name: String,
    response: Option<reqwest::Response>,
}

impl PullStream {
    /// Model this stream belongs to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the next chunk of progress output.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Http`] if the connection fails mid-stream.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>, RegistryError> {
        let Some(response) = self.response.as_mut() else {
            return Ok(None);
        };

        match response.chunk().await {
            Ok(Some(bytes)) => Ok(Some(bytes.to_vec())),
            Ok(None) => {
                self.response = None;
                Ok(None)
            }
            Err(error) => {
                self.response = None;
                Err(error.into())
            }
        }
    }
}

impl ModelClient {
    /// Request a pull of `name` and return its progress stream.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Encode`] if the payload cannot be serialized,
    /// [`RegistryError::Http`] if the request cannot be sent, or
    /// [`RegistryError::Api`] if the server rejects it.
    pub async fn pull(&self, name: &str) -> Result<PullStream, RegistryError> {
        let payload = serde_json::to_vec(&PullRequest { name })?;
        tracing::info!(model = name, url = %self.pull_url, "requesting pull");

        let resp = check_response(
            self.http
                .post(&self.pull_url)
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(payload)
                .send()
                .await?,
        )
        .await?;

        Ok(PullStream {
            name: name.to_string(),
            response: Some(resp),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_name_only() {
        let payload = serde_json::to_string(&PullRequest { name: "llama2:7b" }).unwrap();
        assert_eq!(payload, r#"{"name":"llama2:7b"}"#);
    }

    #[tokio::test]
    async fn stream_yields_body_then_ends() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body("{\"status\":\"success\"}\n")
                .unwrap(),
        );
        let mut stream = PullStream {
            name: "a:1".into(),
            response: Some(resp),
        };

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next_chunk().await.unwrap() {
            collected.extend(chunk);
        }
        assert_eq!(collected, b"{\"status\":\"success\"}\n");
        assert!(stream.next_chunk().await.unwrap().is_none());
        assert_eq!(stream.name(), "a:1");
    }
}
