//! Hour-granular monitoring instants and the shared timestamp parser.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire format used when sending an instant to the upstream API.
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:00";

/// Format used when rendering an instant in JSON responses and logs.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%dT%H:00";

// `%.f` also accepts an absent fractional part.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Parse a timestamp string into a naive wall-clock value.
///
/// Locale-independent: only the fixed numeric layouts above, a bare
/// `YYYY-MM-DD` (midnight) and RFC 3339 are accepted. RFC 3339 input keeps
/// the wall-clock time as written and drops the offset.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a timestamp into an absolute moment.
///
/// RFC 3339 input keeps its own offset. Every other layout accepted by
/// [`parse_timestamp`] is read as wall-clock time in `tz`; a wall-clock time
/// skipped by a DST transition is read as UTC.
#[must_use]
pub fn parse_timestamp_in(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(dt.with_timezone(&Utc));
    }
    let naive = parse_timestamp(raw)?;
    let local = tz
        .from_local_datetime(&naive)
        .earliest()
        .map_or_else(|| Utc.from_utc_datetime(&naive), |dt| dt.with_timezone(&Utc));
    Some(local)
}

/// A naive local timestamp normalised to the start of its hour.
///
/// Upstream monitoring data is reported in the station's local wall-clock
/// time, so no offset is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonitorInstant(NaiveDateTime);

impl MonitorInstant {
    /// Build an instant, zeroing minutes, seconds and sub-seconds.
    #[must_use]
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let hour = NaiveTime::from_hms_opt(dt.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
        Self(dt.date().and_time(hour))
    }

    /// Parse any timestamp accepted by [`parse_timestamp`] and normalise it.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        parse_timestamp(raw).map(Self::from_naive)
    }

    /// The underlying naive timestamp.
    #[must_use]
    pub const fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Shift by a signed number of whole hours; `None` on calendar overflow.
    #[must_use]
    pub fn checked_add_hours(self, hours: i64) -> Option<Self> {
        let delta = TimeDelta::try_hours(hours)?;
        self.0.checked_add_signed(delta).map(Self)
    }

    /// Render as `YYYY-MM-DD HH:00` for upstream query parameters.
    #[must_use]
    pub fn to_wire(&self) -> String {
        self.0.format(WIRE_FORMAT).to_string()
    }
}

impl fmt::Display for MonitorInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

impl From<NaiveDateTime> for MonitorInstant {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}

impl Serialize for MonitorInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonitorInstant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid monitoring instant: {raw}")))
    }
}
