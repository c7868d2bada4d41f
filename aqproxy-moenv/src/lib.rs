//! aqproxy-moenv
//!
//! Public connector that implements `RecordSource` on top of the Taiwan
//! Ministry of Environment (MOENV) open-data REST API. One `fetch` is one
//! `GET {base_url}/{resource_id}?api_key=..&limit=..&format=..&sitename=..&county=..&monitordate=..`.
#![warn(missing_docs)]

/// HTTP adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
mod builder;

use std::sync::Arc;

use adapter::{MoenvHttp, RawResponse};
use aqproxy_core::{AqError, Record, RecordQuery, RecordSource};
use async_trait::async_trait;
use serde_json::Value;
use url::Url;

pub use builder::MoenvConnectorBuilder;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://data.moenv.gov.tw/api/v2";
/// Default dataset: hourly per-item monitoring values by site.
pub const DEFAULT_RESOURCE_ID: &str = "aqx_p_488";

/// Upstream bodies longer than this are truncated before being echoed in errors.
const MAX_ECHOED_BODY: usize = 2048;

/// Public connector type. Production users construct with `MoenvConnector::builder()`.
pub struct MoenvConnector {
    http: Arc<dyn MoenvHttp>,
    endpoint: Url,
}

impl std::fmt::Debug for MoenvConnector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoenvConnector")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl MoenvConnector {
    /// Stable connector name used in logs.
    pub const NAME: &'static str = "aqproxy-moenv";

    /// Start configuring a connector against the default endpoint.
    #[must_use]
    pub fn builder() -> MoenvConnectorBuilder {
        MoenvConnectorBuilder::new()
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(http: Arc<dyn MoenvHttp>, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub(crate) fn from_parts(http: Arc<dyn MoenvHttp>, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The dataset endpoint, without query string.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the full request URL for `query`.
    #[must_use]
    pub fn request_url(&self, query: &RecordQuery) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("api_key", query.credential.expose())
            .append_pair("limit", &query.limit.to_string())
            .append_pair("format", &query.format)
            .append_pair("sitename", &query.site.site_name)
            .append_pair("county", &query.site.county)
            .append_pair("monitordate", &query.monitor_date.to_wire());
        url
    }

    fn interpret(raw: RawResponse) -> Result<Vec<Record>, AqError> {
        if !raw.is_success() {
            return Err(AqError::upstream(raw.status, truncate(raw.body)));
        }
        parse_records(&raw.body)
    }
}

/// Decode an upstream body into records.
///
/// - The body must be a JSON object.
/// - A missing or `null` `records` field reads as no records.
/// - `records` must otherwise be an array of objects.
///
/// # Errors
/// Returns `AqError::Data` when the body does not have that shape.
pub fn parse_records(body: &str) -> Result<Vec<Record>, AqError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Object(mut top) = value else {
        return Err(AqError::Data("upstream body is not a JSON object".into()));
    };
    match top.remove("records") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.into_iter().map(Record::try_from).collect(),
        Some(_) => Err(AqError::Data("upstream `records` is not an array".into())),
    }
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_ECHOED_BODY {
        let mut cut = MAX_ECHOED_BODY;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push_str("...");
    }
    body
}

#[async_trait]
impl RecordSource for MoenvConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "MOENV"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "aqproxy_moenv::fetch",
            skip(self, query),
            fields(
                monitor_date = %query.monitor_date,
                site = %query.site.site_name,
                county = %query.site.county,
            ),
        )
    )]
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>, AqError> {
        let url = self.request_url(query);
        let raw = self.http.get(&url).await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(status = raw.status, bytes = raw.body.len(), "upstream responded");
        Self::interpret(raw)
    }
}
