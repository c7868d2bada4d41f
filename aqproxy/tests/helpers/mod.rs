// Shared fixtures for router tests; `use crate::helpers::*;`
use std::sync::Arc;

use aqproxy::{AqProxy, Credential, MonitorInstant, ProxyConfig, Record, RecordSource};
use aqproxy_mock::{DynamicMockController, DynamicMockSource};
use serde_json::json;

/// Reference instant used throughout the suite.
pub const REFERENCE: &str = "2025-11-26T00:00";

pub fn at(raw: &str) -> MonitorInstant {
    MonitorInstant::parse(raw).expect("valid instant")
}

/// Configuration with a credential and a fixed reference.
pub fn cfg() -> ProxyConfig {
    ProxyConfig {
        api_key: Some(Credential::new("test-key")),
        reference: Some(REFERENCE.to_string()),
        ..ProxyConfig::default()
    }
}

pub fn proxy_with(source: Arc<dyn RecordSource>, cfg: ProxyConfig) -> AqProxy {
    AqProxy::builder()
        .source(source)
        .config(cfg)
        .build()
        .expect("proxy builds")
}

/// A proxy over a fresh dynamic mock, plus its controller.
pub fn mocked(cfg: ProxyConfig) -> (AqProxy, DynamicMockController) {
    let (source, controller) = DynamicMockSource::new_with_controller("mock");
    (proxy_with(source, cfg), controller)
}

/// A minimal upstream-shaped record.
pub fn rec(monitordate: &str, item: &str, area: &str) -> Record {
    Record::try_from(json!({
        "sitename": "新竹",
        "county": "新竹市",
        "area": area,
        "itemname": item,
        "itemengname": item,
        "concentration": "1.0",
        "monitordate": monitordate,
    }))
    .expect("object")
}
