//! Re-export of foundational types from `aqproxy-types`.
// Consolidated re-exports so downstream crates can depend on `aqproxy-core` only

pub use aqproxy_types::{AqError, Credential, ProxyConfig, SiteSelector};
pub use aqproxy_types::{BatchReport, Lookup, RecordReport, SnapshotReport, TimeRange};
pub use aqproxy_types::{MonitorInstant, Record, RecordQuery, parse_timestamp, parse_timestamp_in};
pub use aqproxy_types::{
    AREA_FIELD, COUNTY_FIELD, ITEM_ENG_NAME_FIELD, ITEM_NAME_FIELD, MONITOR_DATE_FIELD,
    SITE_NAME_FIELD,
};
pub use aqproxy_types::{
    DEFAULT_FORMAT, DEFAULT_LIMIT, DEFAULT_RADIUS_HOURS, DEFAULT_TIMEZONE, DISPLAY_FORMAT,
    MAX_RADIUS_HOURS, Tz, WIRE_FORMAT,
};
