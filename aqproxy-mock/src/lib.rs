use aqproxy_core::{AqError, Record, RecordQuery, RecordSource};
use async_trait::async_trait;

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};

/// Mock record source for CI-safe tests. Provides deterministic data from static fixtures.
///
/// Behaviour is keyed on the requested site name:
/// - `"FAIL"` fails every fetch with a transport error.
/// - `"UPSTREAM"` fails every fetch with an upstream 500.
/// - `"EMPTY"` answers with no records.
/// - anything else answers with one record per fixture pollutant.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn forced_failure(site: &str) -> Result<(), AqError> {
        match site {
            "FAIL" => Err(AqError::transport("aqproxy-mock: forced failure")),
            "UPSTREAM" => Err(AqError::upstream(500, "aqproxy-mock: forced upstream error")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RecordSource for MockSource {
    fn name(&self) -> &'static str {
        "aqproxy-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>, AqError> {
        Self::forced_failure(&query.site.site_name)?;
        if query.site.site_name == "EMPTY" {
            return Ok(Vec::new());
        }
        Ok(fixtures::records::hourly(&query.site, query.monitor_date))
    }
}
