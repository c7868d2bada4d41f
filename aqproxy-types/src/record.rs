//! Opaque upstream measurement records.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AqError;
use crate::instant::{parse_timestamp, parse_timestamp_in};

/// Site-measurement timestamp field, e.g. `"2025-11-26 05:00"`.
pub const MONITOR_DATE_FIELD: &str = "monitordate";
/// Localised pollutant/parameter name.
pub const ITEM_NAME_FIELD: &str = "itemname";
/// English pollutant/parameter name, e.g. `"PM2.5"`.
pub const ITEM_ENG_NAME_FIELD: &str = "itemengname";
/// Air-quality region name.
pub const AREA_FIELD: &str = "area";
/// Monitoring site name.
pub const SITE_NAME_FIELD: &str = "sitename";
/// County the site belongs to.
pub const COUNTY_FIELD: &str = "county";

/// One upstream-reported measurement item tied to a site and pollutant.
///
/// The field set is owned by the upstream service; only the handful of
/// fields needed for ordering and filtering get typed accessors. A record
/// serializes back out exactly as it was received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Wrap an already-decoded JSON object.
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Borrow every field.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the raw field map.
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Raw field lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field lookup; non-string values read as absent.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The record's own measurement timestamp, as reported.
    #[must_use]
    pub fn monitor_date_raw(&self) -> Option<&str> {
        self.str_field(MONITOR_DATE_FIELD)
    }

    /// The record's own measurement timestamp, parsed.
    ///
    /// `None` when the field is absent or not in a recognised layout.
    #[must_use]
    pub fn monitor_date(&self) -> Option<NaiveDateTime> {
        self.monitor_date_raw().and_then(parse_timestamp)
    }

    /// The record's own measurement timestamp as an absolute moment, reading
    /// offset-free layouts as wall-clock time in `tz`.
    #[must_use]
    pub fn monitor_time_in(&self, tz: Tz) -> Option<DateTime<Utc>> {
        self.monitor_date_raw().and_then(|raw| parse_timestamp_in(raw, tz))
    }

    /// Localised pollutant name.
    #[must_use]
    pub fn item_name(&self) -> Option<&str> {
        self.str_field(ITEM_NAME_FIELD)
    }

    /// English pollutant name.
    #[must_use]
    pub fn item_eng_name(&self) -> Option<&str> {
        self.str_field(ITEM_ENG_NAME_FIELD)
    }

    /// Region name.
    #[must_use]
    pub fn area(&self) -> Option<&str> {
        self.str_field(AREA_FIELD)
    }

    /// Site name.
    #[must_use]
    pub fn site_name(&self) -> Option<&str> {
        self.str_field(SITE_NAME_FIELD)
    }

    /// County name.
    #[must_use]
    pub fn county(&self) -> Option<&str> {
        self.str_field(COUNTY_FIELD)
    }

    /// True when either pollutant name field equals `item`.
    #[must_use]
    pub fn matches_item(&self, item: &str) -> bool {
        [self.item_name(), self.item_eng_name()]
            .into_iter()
            .flatten()
            .any(|v| same_name(v, item))
    }

    /// True when the region field equals `area`.
    #[must_use]
    pub fn matches_area(&self, area: &str) -> bool {
        self.area().is_some_and(|v| same_name(v, area))
    }
}

/// Name comparison used by the filters: trimmed, ASCII case-insensitive.
fn same_name(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = AqError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(AqError::Data(format!(
                "expected record object, got {}",
                kind_of(&other)
            ))),
        }
    }
}

pub(crate) const fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
