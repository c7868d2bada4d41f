use std::collections::BTreeSet;

use crate::helpers::{at, cfg, mocked};

#[tokio::test]
async fn default_radius_issues_73_fetches_one_per_hour() {
    let (proxy, controller) = mocked(cfg());

    let report = proxy.batch().await.expect("batch ok");

    assert_eq!(controller.calls(), 73);
    let seen: BTreeSet<_> = controller.requested_instants().await.into_iter().collect();
    assert_eq!(seen.len(), 73, "every instant requested exactly once");
    assert_eq!(seen.first().copied(), Some(at("2025-11-24T12:00")));
    assert_eq!(seen.last().copied(), Some(at("2025-11-27T12:00")));

    assert_eq!(report.requested, 73);
    assert_eq!(report.time_range.start, at("2025-11-24T12:00"));
    assert_eq!(report.time_range.end, at("2025-11-27T12:00"));
}

#[tokio::test]
async fn every_query_carries_credential_and_selector() {
    let (proxy, controller) = mocked(cfg());
    proxy.batch().await.expect("batch ok");

    for q in controller.requests().await {
        assert_eq!(q.credential.expose(), "test-key");
        assert_eq!(q.site.site_name, "新竹");
        assert_eq!(q.site.county, "新竹市");
        assert_eq!(q.limit, 1000);
        assert_eq!(q.format, "JSON");
    }
}

#[tokio::test]
async fn zero_radius_fetches_only_the_reference() {
    let mut c = cfg();
    c.radius_hours = 0;
    let (proxy, controller) = mocked(c);
    let report = proxy.batch().await.expect("batch ok");
    assert_eq!(controller.calls(), 1);
    assert_eq!(
        controller.requested_instants().await,
        vec![at("2025-11-26T00:00")]
    );
    assert_eq!(report.successful_requests, 1);
}
