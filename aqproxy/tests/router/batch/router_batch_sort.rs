use aqproxy_mock::MockBehavior;

use crate::helpers::{at, cfg, mocked, rec};

#[tokio::test]
async fn merged_records_are_sorted_by_their_own_timestamp() {
    let mut c = cfg();
    c.radius_hours = 1;
    let (proxy, controller) = mocked(c);
    // Each instant answers with records stamped for other hours, out of order.
    controller
        .set_behavior(
            at("2025-11-25T23:00"),
            MockBehavior::Return(vec![
                rec("2025-11-26 01:00", "A", "x"),
                rec("2025-11-25 22:00", "B", "x"),
            ]),
        )
        .await;
    controller
        .set_behavior(
            at("2025-11-26T00:00"),
            MockBehavior::Return(vec![rec("2025/11/26 00:30", "C", "x")]),
        )
        .await;
    controller
        .set_behavior(
            at("2025-11-26T01:00"),
            MockBehavior::Return(vec![
                rec("not a date", "D", "x"),
                rec("2025-11-25T23:00:00", "E", "x"),
            ]),
        )
        .await;

    let report = proxy.batch().await.expect("batch ok");

    let items: Vec<_> = report
        .records
        .iter()
        .map(|r| r.item_name().unwrap_or_default())
        .collect();
    assert_eq!(items, vec!["B", "E", "C", "A", "D"]);
    assert_eq!(report.successful_requests, 3);
}

#[tokio::test]
async fn fixture_window_is_non_decreasing() {
    let (proxy, _controller) = mocked(cfg());
    let report = proxy.batch().await.expect("batch ok");
    assert_eq!(report.successful_requests, 73);
    let dates: Vec<_> = report.records.iter().map(|r| r.monitor_date()).collect();
    assert!(dates.iter().all(Option::is_some));
    assert!(dates.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn offset_timestamps_sort_by_absolute_moment() {
    let mut c = cfg();
    c.radius_hours = 0;
    let (proxy, controller) = mocked(c);
    controller
        .set_behavior(
            at("2025-11-26T00:00"),
            MockBehavior::Return(vec![
                rec("2025-11-26T00:00:00Z", "a", "x"),
                rec("2025-11-26T01:00:00+08:00", "b", "x"),
            ]),
        )
        .await;

    let report = proxy.batch().await.expect("batch ok");

    let items: Vec<_> = report
        .records
        .iter()
        .map(|r| r.item_name().unwrap_or_default())
        .collect();
    assert_eq!(items, vec!["b", "a"]);
}
