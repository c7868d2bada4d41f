use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the aqproxy workspace.
///
/// This wraps configuration problems, argument validation errors, upstream
/// responses that were not successful, transport failures where no upstream
/// response arrived at all, and malformed bodies. An absent record is not an
/// error; lookups report it through `Lookup::NotFound`.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AqError {
    /// Process configuration is missing or invalid (credential, reference instant, radius).
    ///
    /// Always detected before any network call is attempted.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid input argument supplied by the caller of a single request.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// The upstream service answered with a non-success status.
    #[error("upstream returned {status}: {body}")]
    Upstream {
        /// HTTP status code reported by the upstream service.
        status: u16,
        /// Response body as received, possibly truncated.
        body: String,
    },

    /// No upstream response was received (connect failure, timeout, TLS, ...).
    #[error("transport failure: {msg}")]
    Transport {
        /// Human-readable error message.
        msg: String,
        /// Whether the failure was the client-side request timeout.
        timed_out: bool,
    },

    /// The upstream body could not be interpreted (not JSON, wrong shape).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl AqError {
    /// Helper: build a `Config` error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Helper: build an `Upstream` error from a status code and body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }

    /// Helper: build a `Transport` error that is not a timeout.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport {
            msg: msg.into(),
            timed_out: false,
        }
    }

    /// Returns true for errors raised before any network activity.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if the error came from the upstream exchange itself
    /// (status, transport, or body), as opposed to local validation.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Transport { .. } | Self::Data(_)
        )
    }
}

impl From<serde_json::Error> for AqError {
    fn from(e: serde_json::Error) -> Self {
        Self::Data(e.to_string())
    }
}

