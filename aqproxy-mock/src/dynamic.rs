use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use aqproxy_core::{AqError, MonitorInstant, Record, RecordQuery, RecordSource};

use crate::fixtures;

/// Instruction for how a fetch should behave for a given monitoring instant.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided records immediately.
    Return(Vec<Record>),
    /// Return the deterministic fixture records for the requested instant.
    Fixture,
    /// Fail immediately with the provided error.
    Fail(AqError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

struct InternalState {
    rules: HashMap<MonitorInstant, MockBehavior>,
    default: MockBehavior,
    requests: Vec<RecordQuery>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
    calls: Arc<AtomicUsize>,
}

impl DynamicMockController {
    /// Set the behavior for fetches targeting a specific instant.
    pub async fn set_behavior(&self, at: MonitorInstant, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(at, behavior);
    }

    /// Set the behavior for instants without a specific rule.
    pub async fn set_default_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.default = behavior;
    }

    /// Number of `fetch` invocations so far, including ones still pending.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Queries seen so far, in arrival order.
    pub async fn requests(&self) -> Vec<RecordQuery> {
        self.state.lock().await.requests.clone()
    }

    /// Instants requested so far, in arrival order.
    pub async fn requested_instants(&self) -> Vec<MonitorInstant> {
        self.state
            .lock()
            .await
            .requests
            .iter()
            .map(|q| q.monitor_date)
            .collect()
    }
}

/// A record source whose answers are scripted per instant by a [`DynamicMockController`].
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    calls: Arc<AtomicUsize>,
}

impl DynamicMockSource {
    /// Create a source and its controller.
    ///
    /// Instants without a rule answer with [`MockBehavior::Fixture`] until
    /// [`DynamicMockController::set_default_behavior`] says otherwise.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn RecordSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState {
            rules: HashMap::new(),
            default: MockBehavior::Fixture,
            requests: Vec::new(),
        }));
        let calls = Arc::new(AtomicUsize::new(0));
        let source = Arc::new(Self {
            name,
            state: Arc::clone(&state),
            calls: Arc::clone(&calls),
        });
        (source, DynamicMockController { state, calls })
    }
}

#[async_trait]
impl RecordSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, query: &RecordQuery) -> Result<Vec<Record>, AqError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(query.clone());
            guard
                .rules
                .get(&query.monitor_date)
                .cloned()
                .unwrap_or_else(|| guard.default.clone())
        };

        match behavior {
            MockBehavior::Return(records) => Ok(records),
            MockBehavior::Fixture => Ok(fixtures::records::hourly(&query.site, query.monitor_date)),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}
