use aqproxy::response::ApiResponse;
use aqproxy::{AqError, Lookup};
use aqproxy_mock::MockBehavior;

use crate::helpers::{at, cfg, mocked, rec};

#[tokio::test]
async fn area_returns_every_match() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_behavior(
            at("2025-11-26T00:00"),
            MockBehavior::Return(vec![
                rec("2025-11-26 00:00", "PM2.5", "北部空品區"),
                rec("2025-11-26 00:00", "O3", "竹苗空品區"),
                rec("2025-11-26 00:00", "CO", "竹苗空品區"),
            ]),
        )
        .await;

    let report = proxy
        .area("竹苗空品區", None)
        .await
        .expect("ok")
        .found()
        .expect("found");
    assert_eq!(report.records.len(), 2);
    assert!(report.records.iter().all(|r| r.area() == Some("竹苗空品區")));

    let resp = ApiResponse::snapshot(report);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["monitor_date"], "2025-11-26T00:00");
    assert_eq!(resp.body["records"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn area_without_matches_is_not_found() {
    let (proxy, _controller) = mocked(cfg());
    assert_eq!(
        proxy.area("高屏空品區", None).await.expect("ok"),
        Lookup::NotFound
    );
}

#[tokio::test]
async fn area_failure_is_surfaced() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Fail(AqError::Data("not json".into())))
        .await;
    let err = proxy.area("竹苗空品區", None).await.expect_err("surfaced");
    assert_eq!(ApiResponse::error(&err).body["status"], "upstream_error");
}
