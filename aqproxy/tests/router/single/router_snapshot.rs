use aqproxy::AqError;
use aqproxy_mock::MockBehavior;

use crate::helpers::{at, cfg, mocked};

#[tokio::test]
async fn snapshot_returns_unfiltered_records_for_one_instant() {
    let (proxy, controller) = mocked(cfg());
    let report = proxy.snapshot(Some("2025-11-26T03:00")).await.expect("ok");
    assert_eq!(report.monitor_date, at("2025-11-26T03:00"));
    assert_eq!(report.records.len(), 6);
    assert_eq!(controller.calls(), 1);
}

#[tokio::test]
async fn empty_snapshot_is_success() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Return(Vec::new()))
        .await;
    let report = proxy.snapshot(None).await.expect("ok");
    assert!(report.records.is_empty());
}

#[tokio::test]
async fn rfc3339_instant_is_converted_to_configured_zone() {
    let (proxy, controller) = mocked(cfg());
    proxy
        .snapshot(Some("2025-11-25T16:00:00Z"))
        .await
        .expect("ok");
    assert_eq!(
        controller.requested_instants().await,
        vec![at("2025-11-26T00:00")]
    );
}

#[tokio::test]
async fn snapshot_failure_is_surfaced() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Fail(AqError::transport("refused")))
        .await;
    assert!(matches!(
        proxy.snapshot(None).await,
        Err(AqError::Transport { timed_out: false, .. })
    ));
}
