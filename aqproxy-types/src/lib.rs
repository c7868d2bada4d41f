//! aqproxy-specific data transfer objects, configuration primitives and the
//! shared error type.
#![warn(missing_docs)]

mod config;
mod error;
mod instant;
mod query;
mod record;
mod reports;

pub use config::{
    Credential, DEFAULT_FORMAT, DEFAULT_LIMIT, DEFAULT_RADIUS_HOURS, DEFAULT_TIMEZONE,
    MAX_RADIUS_HOURS, ProxyConfig, SiteSelector,
};
pub use error::AqError;
pub use instant::{
    DISPLAY_FORMAT, MonitorInstant, WIRE_FORMAT, parse_timestamp, parse_timestamp_in,
};
pub use query::RecordQuery;
pub use record::{
    AREA_FIELD, COUNTY_FIELD, ITEM_ENG_NAME_FIELD, ITEM_NAME_FIELD, MONITOR_DATE_FIELD, Record,
    SITE_NAME_FIELD,
};
pub use reports::{BatchReport, Lookup, RecordReport, SnapshotReport, TimeRange};

pub use chrono_tz::Tz;
