use aqproxy::{Credential, ProxyConfig};
use aqproxy::response::ApiResponse;

use crate::helpers::{cfg, mocked};

#[tokio::test]
async fn missing_credential_fails_before_any_fetch() {
    let (proxy, controller) = mocked(ProxyConfig {
        api_key: None,
        ..cfg()
    });

    let err = proxy.batch().await.expect_err("config error");

    assert!(err.is_config());
    assert_eq!(controller.calls(), 0);
    let resp = ApiResponse::error(&err);
    assert_eq!(resp.status, 500);
    assert_eq!(resp.body["status"], "config_error");
}

#[tokio::test]
async fn blank_credential_is_missing() {
    let (proxy, controller) = mocked(ProxyConfig {
        api_key: Some(Credential::new("   ")),
        ..cfg()
    });
    assert!(proxy.batch().await.expect_err("config error").is_config());
    assert_eq!(controller.calls(), 0);
}

#[tokio::test]
async fn unparsable_reference_fails_before_any_fetch() {
    let (proxy, controller) = mocked(ProxyConfig {
        reference: Some("yesterday-ish".into()),
        ..cfg()
    });
    assert!(proxy.batch().await.expect_err("config error").is_config());
    assert_eq!(controller.calls(), 0);
}

#[tokio::test]
async fn oversized_radius_fails_before_any_fetch() {
    let (proxy, controller) = mocked(ProxyConfig {
        radius_hours: 10_000,
        ..cfg()
    });
    assert!(proxy.batch().await.expect_err("config error").is_config());
    assert_eq!(controller.calls(), 0);
}

#[tokio::test]
async fn credential_is_checked_before_reference() {
    let (proxy, _controller) = mocked(ProxyConfig {
        api_key: None,
        reference: Some("garbage".into()),
        ..cfg()
    });
    let err = proxy.batch().await.expect_err("config error");
    assert!(err.to_string().contains("API key"), "{err}");
}
