//! Remote descriptor fetcher.

use msync_core::{RemoteDescriptor, RemoteIdentity};

use crate::{ModelClient, error::RegistryError, http::check_response};

impl ModelClient {
    /// Fetch the manifest the remote registry serves for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the request fails, the registry returns a
    /// non-success status, or the body is not a JSON object.
    pub async fn fetch_descriptor(
        &self,
        identity: &RemoteIdentity,
    ) -> Result<RemoteDescriptor, RegistryError> {
        let url = self.registry.manifest_url(identity);
        tracing::debug!(%url, "fetching remote manifest");

        let resp = check_response(
            self.http
                .get(&url)
                .timeout(self.request_timeout)
                .send()
                .await?,
        )
        .await?;

        let body = resp.bytes().await?;
        RemoteDescriptor::from_slice(&body).map_err(|e| RegistryError::Parse(e.to_string()))
    }
}
