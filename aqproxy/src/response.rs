//! JSON envelopes for every outcome the proxy can produce.
//!
//! Transport-agnostic: a server maps [`ApiResponse::status`] onto its own
//! status type and writes [`ApiResponse::body`] as JSON.

use aqproxy_core::{AqError, BatchReport, Lookup, RecordReport, SnapshotReport};
use serde_json::{Value, json};

/// Placeholder message attached to a batch that merged no records.
pub const EMPTY_BATCH_MESSAGE: &str = "no records available for the requested window";

/// A status code plus a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// JSON body.
    pub body: Value,
}

impl ApiResponse {
    const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 200 with the merged window, its time range and a summary line.
    #[must_use]
    pub fn batch(report: &BatchReport) -> Self {
        let mut body = json!({
            "status": "success",
            "time_range": report.time_range,
            "summary": report.summary(),
            "requested": report.requested,
            "successful_requests": report.successful_requests,
            "records": report.records,
        });
        if report.records.is_empty()
            && let Some(map) = body.as_object_mut()
        {
            map.insert("message".into(), Value::from(EMPTY_BATCH_MESSAGE));
        }
        Self::new(200, body)
    }

    /// 200 with a single matching record, or 404 naming what was missing.
    #[must_use]
    pub fn record(lookup: Lookup<RecordReport>, what: &str) -> Self {
        match lookup {
            Lookup::Found(r) => Self::new(
                200,
                json!({
                    "status": "success",
                    "monitor_date": r.monitor_date,
                    "record": r.record,
                }),
            ),
            Lookup::NotFound => Self::not_found(what),
        }
    }

    /// 200 with every matching record, or 404 naming what was missing.
    #[must_use]
    pub fn records(lookup: Lookup<SnapshotReport>, what: &str) -> Self {
        match lookup {
            Lookup::Found(r) => Self::snapshot(r),
            Lookup::NotFound => Self::not_found(what),
        }
    }

    /// 200 with the records of one instant (possibly none).
    #[must_use]
    pub fn snapshot(report: SnapshotReport) -> Self {
        Self::new(
            200,
            json!({
                "status": "success",
                "monitor_date": report.monitor_date,
                "records": report.records,
            }),
        )
    }

    /// Liveness check body.
    #[must_use]
    pub fn health() -> Self {
        Self::new(200, json!({ "status": "ok" }))
    }

    fn not_found(what: &str) -> Self {
        Self::new(
            404,
            json!({ "status": "not_found", "message": format!("no data found for {what}") }),
        )
    }

    /// Structured error body with a machine-readable tag.
    ///
    /// | error            | tag               | status |
    /// |------------------|-------------------|--------|
    /// | `Config`         | `config_error`    | 500    |
    /// | `InvalidArg`     | `invalid_request` | 400    |
    /// | `Upstream`/`Data`| `upstream_error`  | 502    |
    /// | `Transport`      | `network_error`   | 504 on timeout, else 502 |
    /// | anything else    | `internal_error`  | 500    |
    #[must_use]
    pub fn error(err: &AqError) -> Self {
        let message = err.to_string();
        match err {
            AqError::Config(_) => Self::tagged(500, "config_error", message),
            AqError::InvalidArg(_) => Self::tagged(400, "invalid_request", message),
            AqError::Upstream { status, body } => Self::new(
                502,
                json!({
                    "status": "upstream_error",
                    "message": message,
                    "upstream_status": status,
                    "upstream_body": body,
                }),
            ),
            AqError::Data(_) => Self::tagged(502, "upstream_error", message),
            AqError::Transport { timed_out, .. } => {
                Self::tagged(if *timed_out { 504 } else { 502 }, "network_error", message)
            }
            _ => Self::tagged(500, "internal_error", message),
        }
    }

    fn tagged(status: u16, tag: &str, message: String) -> Self {
        Self::new(status, json!({ "status": tag, "message": message }))
    }

    /// Map any outcome through `ok`, or to [`ApiResponse::error`].
    pub fn from_result<T>(res: Result<T, AqError>, ok: impl FnOnce(T) -> Self) -> Self {
        match res {
            Ok(v) => ok(v),
            Err(e) => Self::error(&e),
        }
    }
}
