#[cfg(feature = "test-adapters")]
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use aqproxy_core::AqError;
use url::Url;

/// Default per-request timeout of the production HTTP client.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Status line and body of one upstream exchange, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl RawResponse {
    /// True for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// HTTP abstraction (so we can inject fakes in tests).
///
/// Implementations return `Ok` whenever the upstream answered at all, whatever
/// the status, and `AqError::Transport` only when no response arrived.
#[async_trait]
pub trait MoenvHttp: Send + Sync {
    /// Perform a GET against a fully built URL (query string included).
    async fn get(&self, url: &Url) -> Result<RawResponse, AqError>;
}

/// Production adapter backed by `reqwest`.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
}

impl RealAdapter {
    /// Build a client with [`DEFAULT_HTTP_TIMEOUT`].
    ///
    /// # Errors
    /// Returns `AqError::Other` if the TLS backend cannot be initialised.
    pub fn try_new_default() -> Result<Self, AqError> {
        Self::try_with_timeout(DEFAULT_HTTP_TIMEOUT)
    }

    /// Build a client with a custom per-request timeout.
    ///
    /// # Errors
    /// Returns `AqError::Other` if the TLS backend cannot be initialised.
    pub fn try_with_timeout(timeout: Duration) -> Result<Self, AqError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aqproxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AqError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wrap an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn map_reqwest_err(e: reqwest::Error) -> AqError {
    let timed_out = e.is_timeout();
    // The URL carries the credential in its query string.
    AqError::Transport {
        msg: e.without_url().to_string(),
        timed_out,
    }
}

#[async_trait]
impl MoenvHttp for RealAdapter {
    async fn get(&self, url: &Url) -> Result<RawResponse, AqError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_err)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(map_reqwest_err)?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(feature = "test-adapters")]
impl dyn MoenvHttp {
    /// Build a `MoenvHttp` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn MoenvHttp>
    where
        F: Send + Sync + 'static + Fn(Url) -> Result<RawResponse, AqError>,
    {
        struct FnHttp<F>(F);
        #[async_trait]
        impl<F> MoenvHttp for FnHttp<F>
        where
            F: Send + Sync + 'static + Fn(Url) -> Result<RawResponse, AqError>,
        {
            async fn get(&self, url: &Url) -> Result<RawResponse, AqError> {
                (self.0)(url.clone())
            }
        }
        Arc::new(FnHttp(f))
    }
}
