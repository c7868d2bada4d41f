use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::{AqError, MonitorInstant, TimeRange, parse_timestamp};

/// Ordered hourly instants spanning `radius_hours` before and after a
/// reference instant, both endpoints included.
///
/// Always holds exactly `2 * radius_hours + 1` instants, strictly ascending
/// by one hour, with the reference (normalised to the hour) in the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    reference: MonitorInstant,
    radius_hours: u32,
    instants: Vec<MonitorInstant>,
}

impl TimeWindow {
    /// Build the window around `reference`.
    ///
    /// # Errors
    /// Returns `AqError::Config` if an endpoint falls outside the representable
    /// calendar range.
    pub fn around(reference: MonitorInstant, radius_hours: u32) -> Result<Self, AqError> {
        let radius = i64::from(radius_hours);
        let instants = (-radius..=radius)
            .map(|offset| {
                reference.checked_add_hours(offset).ok_or_else(|| {
                    AqError::config(format!(
                        "window of {radius_hours}h around {reference} is out of range"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            reference,
            radius_hours,
            instants,
        })
    }

    /// The requested instants, ascending.
    #[must_use]
    pub fn instants(&self) -> &[MonitorInstant] {
        &self.instants
    }

    /// Consume into the instant list.
    #[must_use]
    pub fn into_instants(self) -> Vec<MonitorInstant> {
        self.instants
    }

    /// Middle instant.
    #[must_use]
    pub const fn reference(&self) -> MonitorInstant {
        self.reference
    }

    /// Hours on each side of the reference.
    #[must_use]
    pub const fn radius_hours(&self) -> u32 {
        self.radius_hours
    }

    /// Earliest instant.
    #[must_use]
    pub fn first(&self) -> MonitorInstant {
        self.instants.first().copied().unwrap_or(self.reference)
    }

    /// Latest instant.
    #[must_use]
    pub fn last(&self) -> MonitorInstant {
        self.instants.last().copied().unwrap_or(self.reference)
    }

    /// Number of instants (`2 * radius + 1`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.instants.len()
    }

    /// Never true; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instants.is_empty()
    }

    /// First and last instant as a range.
    #[must_use]
    pub fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.first(),
            end: self.last(),
        }
    }
}

/// Resolve a configured reference instant.
///
/// - `None` → the current hour of `now` in zone `tz`.
/// - RFC 3339 with an offset → converted into `tz` first.
/// - Any other layout accepted by [`parse_timestamp`] → taken as wall-clock
///   time in `tz`.
///
/// # Errors
/// Returns `AqError::Config` when `raw` is present but unparsable.
pub fn resolve_reference(
    raw: Option<&str>,
    tz: Tz,
    now: DateTime<Utc>,
) -> Result<MonitorInstant, AqError> {
    let Some(raw) = raw else {
        return Ok(MonitorInstant::from_naive(
            now.with_timezone(&tz).naive_local(),
        ));
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Ok(MonitorInstant::from_naive(
            dt.with_timezone(&tz).naive_local(),
        ));
    }
    parse_timestamp(raw)
        .map(MonitorInstant::from_naive)
        .ok_or_else(|| AqError::config(format!("invalid reference instant: '{raw}'")))
}
