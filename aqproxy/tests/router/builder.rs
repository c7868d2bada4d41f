use aqproxy::{AqError, AqProxy, ProxyConfig};
use chrono::{TimeZone, Utc};

use crate::helpers::{at, cfg, mocked};

#[test]
fn build_without_source_is_invalid_arg() {
    let err = AqProxy::builder().config(cfg()).build().expect_err("no source");
    assert!(matches!(err, AqError::InvalidArg(_)));
}

#[test]
fn validate_reports_the_window() {
    let (proxy, _c) = mocked(cfg());
    let w = proxy.validate().expect("valid config");
    assert_eq!(w.len(), 73);
    assert_eq!(w.first(), at("2025-11-24T12:00"));
    assert_eq!(w.last(), at("2025-11-27T12:00"));
}

#[test]
fn validate_without_key_is_config_error() {
    let (proxy, _c) = mocked(ProxyConfig::default());
    assert!(proxy.validate().expect_err("no key").is_config());
}

#[test]
fn missing_reference_uses_clock_in_configured_zone() {
    let (source, _c) = aqproxy_mock::DynamicMockSource::new_with_controller("mock");
    let proxy = AqProxy::builder()
        .source(source)
        .config(ProxyConfig {
            reference: None,
            ..cfg()
        })
        // 16:42 UTC is 00:42 the next day in Asia/Taipei.
        .clock(|| Utc.with_ymd_and_hms(2025, 11, 25, 16, 42, 7).unwrap())
        .build()
        .unwrap();
    let w = proxy.validate().unwrap();
    assert_eq!(w.reference(), at("2025-11-26T00:00"));
}
