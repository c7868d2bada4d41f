use async_trait::async_trait;

use crate::{AqError, Record, RecordQuery};

/// An upstream service that returns measurement records for one query.
///
/// Implementations perform exactly one upstream exchange per call and never
/// retry. Errors are reported as-is; whether a failure is swallowed or
/// surfaced is the caller's policy, not the source's.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// A stable identifier used in logs and error messages (e.g. "aqproxy-moenv").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the records matching `query`.
    ///
    /// An empty vector is a successful answer, not an error.
    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>, AqError>;
}

