use std::sync::Arc;
use std::time::Duration;

use aqproxy_core::AqError;
use url::Url;

use crate::adapter::{DEFAULT_HTTP_TIMEOUT, MoenvHttp, RealAdapter};
use crate::{DEFAULT_BASE_URL, DEFAULT_RESOURCE_ID, MoenvConnector};

/// Builder for [`MoenvConnector`].
pub struct MoenvConnectorBuilder {
    base_url: String,
    resource_id: String,
    timeout: Duration,
    client: Option<reqwest::Client>,
}

impl Default for MoenvConnectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MoenvConnectorBuilder {
    /// Defaults: [`DEFAULT_BASE_URL`], [`DEFAULT_RESOURCE_ID`], 10s HTTP timeout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource_id: DEFAULT_RESOURCE_ID.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
            client: None,
        }
    }

    /// Override the API root, e.g. to point at a mock server.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the dataset identifier appended to the API root.
    #[must_use]
    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = resource_id.into();
        self
    }

    /// Per-request timeout of the internally built HTTP client.
    ///
    /// Ignored when a custom client is supplied via [`Self::client`].
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a caller-provided `reqwest::Client`.
    #[must_use]
    pub fn client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `AqError::Config` for an unusable base URL or empty resource id,
    /// and `AqError::Other` if the HTTP client cannot be built.
    pub fn build(self) -> Result<MoenvConnector, AqError> {
        let endpoint = endpoint(&self.base_url, &self.resource_id)?;
        let http: Arc<dyn MoenvHttp> = match self.client {
            Some(client) => Arc::new(RealAdapter::new(client)),
            None => Arc::new(RealAdapter::try_with_timeout(self.timeout)?),
        };
        Ok(MoenvConnector::from_parts(http, endpoint))
    }
}

/// Join the API root and the dataset id as path segments.
pub(crate) fn endpoint(base_url: &str, resource_id: &str) -> Result<Url, AqError> {
    let resource_id = resource_id.trim().trim_matches('/');
    if resource_id.is_empty() {
        return Err(AqError::config("upstream resource id is empty"));
    }
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| AqError::config(format!("invalid upstream base URL '{base_url}': {e}")))?;
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| AqError::config(format!("upstream base URL '{base_url}' cannot be a base")))?
        .pop_if_empty()
        .push(resource_id);
    Ok(url)
}
