use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use aqproxy::{AqError, AqProxy, Credential, ProxyConfig, SiteSelector};
use aqproxy_core::{DEFAULT_FORMAT, DEFAULT_LIMIT, DEFAULT_RADIUS_HOURS};
use aqproxy_moenv::{DEFAULT_BASE_URL, DEFAULT_RESOURCE_ID, MoenvConnector};
use clap::Parser;

/// Hourly air-quality proxy in front of the MOENV open-data API.
///
/// Every flag can also be set through the environment variable shown in `--help`.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Upstream API key. Without it every data request answers with a configuration error.
    #[arg(long, env = "AQPROXY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Centre of the batch window and default instant for single lookups,
    /// e.g. `2025-11-26T00:00`. Defaults to the current hour.
    #[arg(long, env = "AQPROXY_REFERENCE")]
    pub reference: Option<String>,

    /// Hours on each side of the reference instant.
    #[arg(long, env = "AQPROXY_RADIUS_HOURS", default_value_t = DEFAULT_RADIUS_HOURS)]
    pub radius_hours: u32,

    /// Monitoring site name.
    #[arg(long, env = "AQPROXY_SITE_NAME", default_value = "新竹")]
    pub site_name: String,

    /// County of the monitoring site.
    #[arg(long, env = "AQPROXY_COUNTY", default_value = "新竹市")]
    pub county: String,

    /// Upstream result-count limit per request.
    #[arg(long, env = "AQPROXY_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Upstream API root.
    #[arg(long, env = "AQPROXY_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upstream dataset identifier.
    #[arg(long, env = "AQPROXY_RESOURCE_ID", default_value = DEFAULT_RESOURCE_ID)]
    pub resource_id: String,

    /// Time zone for "now" and for RFC 3339 instants.
    #[arg(long, env = "AQPROXY_TIMEZONE", default_value = "Asia/Taipei")]
    pub timezone: String,

    /// Per-request upstream timeout in seconds.
    #[arg(long, env = "AQPROXY_HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,

    /// Address to listen on.
    #[arg(long, env = "AQPROXY_LISTEN", default_value = "127.0.0.1:3000")]
    pub listen: SocketAddr,

    /// Validate the configuration, print the resolved window and exit.
    #[arg(long)]
    pub check_config: bool,
}

impl Args {
    /// Proxy configuration described by these flags.
    ///
    /// # Errors
    /// Returns `AqError::Config` for an unknown time zone.
    pub fn proxy_config(&self) -> Result<ProxyConfig, AqError> {
        Ok(ProxyConfig {
            api_key: self
                .api_key
                .as_deref()
                .filter(|k| !k.trim().is_empty())
                .map(Credential::new),
            reference: self
                .reference
                .clone()
                .filter(|r| !r.trim().is_empty()),
            radius_hours: self.radius_hours,
            timezone: ProxyConfig::parse_timezone(&self.timezone)?,
            site: SiteSelector::new(self.site_name.trim(), self.county.trim()),
            limit: self.limit,
            format: DEFAULT_FORMAT.to_string(),
        })
    }

    /// Upstream connector described by these flags.
    ///
    /// # Errors
    /// Returns `AqError::Config` for an unusable base URL or resource id.
    pub fn connector(&self) -> Result<MoenvConnector, AqError> {
        if self.http_timeout_secs == 0 {
            return Err(AqError::config("http timeout must be at least one second"));
        }
        MoenvConnector::builder()
            .base_url(&self.base_url)
            .resource_id(&self.resource_id)
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()
    }

    /// Assemble the proxy. Credential and reference are not checked here.
    ///
    /// # Errors
    /// As [`Self::proxy_config`] and [`Self::connector`].
    pub fn build_proxy(&self) -> Result<AqProxy, AqError> {
        AqProxy::builder()
            .source(Arc::new(self.connector()?))
            .config(self.proxy_config()?)
            .build()
    }
}
