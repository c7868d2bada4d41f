use aqproxy::AqError;
use aqproxy::response::{ApiResponse, EMPTY_BATCH_MESSAGE};
use aqproxy_mock::MockBehavior;

use crate::helpers::{at, cfg, mocked, rec};

#[tokio::test]
async fn all_failures_yield_empty_success() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Fail(AqError::transport("down")))
        .await;

    let report = proxy.batch().await.expect("failures are swallowed");

    assert_eq!(controller.calls(), 73);
    assert_eq!(report.successful_requests, 0);
    assert!(report.records.is_empty());

    let resp = ApiResponse::batch(&report);
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body["status"], "success");
    assert_eq!(resp.body["message"], EMPTY_BATCH_MESSAGE);
}

#[tokio::test]
async fn successes_are_counted_and_summed() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Fail(AqError::upstream(500, "boom")))
        .await;
    let hits = [
        ("2025-11-24 12:00", 2),
        ("2025-11-25 09:00", 1),
        ("2025-11-26 00:00", 3),
    ];
    for (hour, n) in hits {
        let records = (0..n).map(|_| rec(hour, "PM2.5", "竹苗空品區")).collect();
        controller
            .set_behavior(at(hour), MockBehavior::Return(records))
            .await;
    }

    let report = proxy.batch().await.expect("batch ok");

    assert_eq!(report.successful_requests, 3);
    assert_eq!(report.record_count(), 6);
    assert_eq!(
        report.summary(),
        "Fetched 3 of 73 hourly windows with records; 6 records total"
    );
}

#[tokio::test]
async fn empty_answers_do_not_count_as_successes() {
    let (proxy, controller) = mocked(cfg());
    controller
        .set_default_behavior(MockBehavior::Return(Vec::new()))
        .await;
    controller
        .set_behavior(
            at("2025-11-26 05:00"),
            MockBehavior::Return(vec![rec("2025-11-26 05:00", "O3", "竹苗空品區")]),
        )
        .await;
    controller
        .set_behavior(
            at("2025-11-26 06:00"),
            MockBehavior::Fail(AqError::Data("not json".into())),
        )
        .await;

    let report = proxy.batch().await.expect("batch ok");
    assert_eq!(report.successful_requests, 1);
    assert_eq!(report.record_count(), 1);
}
