//! Configuration types shared across the orchestrator and connectors.

use core::fmt;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::AqError;

/// Hours on each side of the reference instant covered by the batch window.
pub const DEFAULT_RADIUS_HOURS: u32 = 36;
/// Upper bound on the radius; one month on each side.
pub const MAX_RADIUS_HOURS: u32 = 24 * 31;
/// Default upstream result-count limit.
pub const DEFAULT_LIMIT: u32 = 1000;
/// Default upstream response-format selector.
pub const DEFAULT_FORMAT: &str = "JSON";
/// Default zone used to resolve "now" when no reference instant is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Taipei;

/// Upstream API credential.
///
/// `Debug` and `Display` never print the secret.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wrap a credential string.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Expose the secret for placing into an outbound request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// True when the credential is empty or whitespace only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Fixed site/region selector sent with every upstream request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSelector {
    /// Monitoring site name, e.g. `新竹`.
    pub site_name: String,
    /// County name, e.g. `新竹市`.
    pub county: String,
}

impl SiteSelector {
    /// Build a selector from a site and county name.
    pub fn new(site_name: impl Into<String>, county: impl Into<String>) -> Self {
        Self {
            site_name: site_name.into(),
            county: county.into(),
        }
    }
}

impl Default for SiteSelector {
    fn default() -> Self {
        Self::new("新竹", "新竹市")
    }
}

/// Process configuration consumed by the `AqProxy` orchestrator.
///
/// Read once at process start and immutable afterwards. Validation of the
/// credential and reference instant happens per request, before any network
/// activity, so a misconfigured process still answers every request with a
/// configuration error instead of refusing to start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Upstream credential; never serialized.
    #[serde(skip_serializing)]
    pub api_key: Option<Credential>,
    /// Reference instant for the batch window as configured (unparsed).
    /// `None` means "the current hour in `timezone`".
    pub reference: Option<String>,
    /// Hours on each side of the reference instant.
    pub radius_hours: u32,
    /// Zone used to resolve "now" and RFC 3339 references.
    pub timezone: Tz,
    /// Site/region selector.
    pub site: SiteSelector,
    /// Upstream result-count limit.
    pub limit: u32,
    /// Upstream response-format selector.
    pub format: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            reference: None,
            radius_hours: DEFAULT_RADIUS_HOURS,
            timezone: DEFAULT_TIMEZONE,
            site: SiteSelector::default(),
            limit: DEFAULT_LIMIT,
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl ProxyConfig {
    /// The configured credential.
    ///
    /// # Errors
    /// Returns `AqError::Config` when the credential is absent or blank.
    pub fn credential(&self) -> Result<&Credential, AqError> {
        match &self.api_key {
            Some(key) if !key.is_blank() => Ok(key),
            _ => Err(AqError::config("missing upstream API key")),
        }
    }

    /// The configured radius.
    ///
    /// # Errors
    /// Returns `AqError::Config` when the radius exceeds [`MAX_RADIUS_HOURS`].
    pub fn radius(&self) -> Result<u32, AqError> {
        if self.radius_hours > MAX_RADIUS_HOURS {
            return Err(AqError::config(format!(
                "radius_hours {} exceeds maximum {MAX_RADIUS_HOURS}",
                self.radius_hours
            )));
        }
        Ok(self.radius_hours)
    }

    /// Parse a time zone name such as `Asia/Taipei`.
    ///
    /// # Errors
    /// Returns `AqError::Config` for unknown zone names.
    pub fn parse_timezone(name: &str) -> Result<Tz, AqError> {
        name.trim()
            .parse::<Tz>()
            .map_err(|e| AqError::config(format!("invalid time zone '{name}': {e}")))
    }
}
