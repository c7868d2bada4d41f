//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::instant::MonitorInstant;
use crate::record::Record;

/// First and last requested instant of a batch window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Earliest requested instant.
    pub start: MonitorInstant,
    /// Latest requested instant.
    pub end: MonitorInstant,
}

/// Result of the batch fetch-and-merge aggregation.
///
/// `records` is the union of every per-instant fetch that succeeded, sorted
/// ascending by each record's own timestamp. Failed fetches contribute
/// nothing and leave no other trace here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Window covered by the requests.
    pub time_range: TimeRange,
    /// Number of instants requested (one upstream call each).
    pub requested: usize,
    /// Number of instants that yielded at least one record.
    pub successful_requests: usize,
    /// Merged records.
    pub records: Vec<Record>,
}

impl BatchReport {
    /// Total number of merged records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Human-readable one-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Fetched {} of {} hourly windows with records; {} records total",
            self.successful_requests,
            self.requested,
            self.record_count()
        )
    }
}

/// Unfiltered (or area-filtered) records for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotReport {
    /// Instant that was requested.
    pub monitor_date: MonitorInstant,
    /// Records returned for that instant.
    pub records: Vec<Record>,
}

/// A single matching record for one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordReport {
    /// Instant that was requested.
    pub monitor_date: MonitorInstant,
    /// Matching record.
    pub record: Record,
}

/// Outcome of a filtered lookup: found, or an explicit not-found that is
/// distinct from any transport failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lookup<T> {
    /// At least one record matched.
    Found(T),
    /// The fetch succeeded but nothing matched.
    NotFound,
}

impl<T> Lookup<T> {
    /// `Some` when found.
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(v) => Some(v),
            Self::NotFound => None,
        }
    }

    /// True when nothing matched.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
