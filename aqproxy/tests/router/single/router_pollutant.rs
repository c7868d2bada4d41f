use aqproxy::response::ApiResponse;
use aqproxy::{AqError, Lookup, ProxyConfig};
use aqproxy_mock::MockBehavior;

use crate::helpers::{at, cfg, mocked, rec};

#[tokio::test]
async fn pollutant_matches_english_or_local_name_case_insensitively() {
    let (proxy, controller) = mocked(cfg());

    let found = proxy
        .pollutant(" pm2.5 ", None)
        .await
        .expect("ok")
        .found()
        .expect("fixture has PM2.5");
    assert_eq!(found.monitor_date, at("2025-11-26T00:00"));
    assert_eq!(found.record.item_eng_name(), Some("PM2.5"));

    let local = proxy
        .pollutant("臭氧", None)
        .await
        .expect("ok")
        .found()
        .expect("fixture has O3");
    assert_eq!(local.record.item_eng_name(), Some("O3"));

    assert_eq!(controller.calls(), 2);
}

#[tokio::test]
async fn pollutant_uses_explicit_instant() {
    let (proxy, controller) = mocked(cfg());
    let found = proxy
        .pollutant("CO", Some("2025-11-20 07:15"))
        .await
        .expect("ok")
        .found()
        .expect("found");
    assert_eq!(found.monitor_date, at("2025-11-20T07:00"));
    assert_eq!(
        controller.requested_instants().await,
        vec![at("2025-11-20T07:00")]
    );
}

#[tokio::test]
async fn unknown_pollutant_is_not_found() {
    let (proxy, _controller) = mocked(cfg());
    let res = proxy.pollutant("PM1", None).await.expect("ok");
    assert_eq!(res, Lookup::NotFound);
    let resp = ApiResponse::record(res, "PM1");
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body["status"], "not_found");
}

#[tokio::test]
async fn transport_failure_is_surfaced_not_emptied() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Fail(AqError::Transport {
            msg: "timed out".into(),
            timed_out: true,
        }))
        .await;

    let err = proxy.pollutant("PM2.5", None).await.expect_err("surfaced");
    assert!(matches!(err, AqError::Transport { timed_out: true, .. }));

    let resp = ApiResponse::error(&err);
    assert_eq!(resp.status, 504);
    assert_eq!(resp.body["status"], "network_error");
}

#[tokio::test]
async fn upstream_failure_echoes_status_and_body() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_behavior(
            at("2025-11-26T00:00"),
            MockBehavior::Fail(AqError::upstream(403, "{\"error\":\"bad key\"}")),
        )
        .await;
    let err = proxy.pollutant("PM2.5", None).await.expect_err("surfaced");
    let resp = ApiResponse::error(&err);
    assert_eq!(resp.status, 502);
    assert_eq!(resp.body["upstream_status"], 403);
    assert_eq!(resp.body["upstream_body"], "{\"error\":\"bad key\"}");
}

#[tokio::test]
async fn invalid_arguments_never_fetch() {
    let (proxy, controller) = mocked(cfg());
    let err = proxy.pollutant("  ", None).await.expect_err("blank item");
    assert!(matches!(err, AqError::InvalidArg(_)));
    let err = proxy
        .pollutant("PM2.5", Some("next tuesday"))
        .await
        .expect_err("bad instant");
    assert!(matches!(err, AqError::InvalidArg(_)));
    assert_eq!(ApiResponse::error(&err).status, 400);
    assert_eq!(controller.calls(), 0);
}

#[tokio::test]
async fn missing_credential_wins_over_bad_arguments() {
    let (proxy, controller) = mocked(ProxyConfig {
        api_key: None,
        ..cfg()
    });
    let err = proxy.pollutant("", Some("garbage")).await.expect_err("config");
    assert!(err.is_config());
    assert_eq!(controller.calls(), 0);
}

#[tokio::test]
async fn first_match_wins() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_behavior(
            at("2025-11-26T00:00"),
            MockBehavior::Return(vec![
                rec("2025-11-26 00:00", "NO2", "a"),
                rec("2025-11-26 00:00", "NO2", "b"),
            ]),
        )
        .await;
    let found = proxy.pollutant("no2", None).await.unwrap().found().unwrap();
    assert_eq!(found.record.area(), Some("a"));
}
