use aqproxy_core::{
    AREA_FIELD, COUNTY_FIELD, ITEM_ENG_NAME_FIELD, ITEM_NAME_FIELD, MONITOR_DATE_FIELD,
    MonitorInstant, Record, SITE_NAME_FIELD, SiteSelector,
};
use chrono::Timelike;
use serde_json::{Map, Value};

/// (itemname, itemengname, unit, base concentration)
const ITEMS: &[(&str, &str, &str, f64)] = &[
    ("細懸浮微粒", "PM2.5", "μg/m3", 12.0),
    ("懸浮微粒", "PM10", "μg/m3", 28.0),
    ("臭氧", "O3", "ppb", 31.0),
    ("二氧化氮", "NO2", "ppb", 9.5),
    ("二氧化硫", "SO2", "ppb", 1.2),
    ("一氧化碳", "CO", "ppm", 0.3),
];

const AREA: &str = "竹苗空品區";

/// One record per fixture pollutant for `site` at `at`.
///
/// Concentrations vary with the hour of day so that neighbouring windows are
/// distinguishable in assertions.
pub fn hourly(site: &SiteSelector, at: MonitorInstant) -> Vec<Record> {
    let hour = f64::from(at.as_naive().hour());
    ITEMS
        .iter()
        .map(|(name, eng, unit, base)| {
            let mut m = Map::new();
            m.insert(SITE_NAME_FIELD.into(), Value::from(site.site_name.as_str()));
            m.insert(COUNTY_FIELD.into(), Value::from(site.county.as_str()));
            m.insert(AREA_FIELD.into(), Value::from(AREA));
            m.insert(ITEM_NAME_FIELD.into(), Value::from(*name));
            m.insert(ITEM_ENG_NAME_FIELD.into(), Value::from(*eng));
            m.insert("itemunit".into(), Value::from(*unit));
            m.insert(
                "concentration".into(),
                Value::from(format!("{:.1}", base + hour / 4.0)),
            );
            m.insert(MONITOR_DATE_FIELD.into(), Value::from(at.to_wire()));
            Record::new(m)
        })
        .collect()
}
