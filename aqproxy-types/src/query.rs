//! Upstream request description.

use crate::config::{Credential, SiteSelector};
use crate::instant::MonitorInstant;

/// Everything one upstream GET needs: credential, paging/format selectors,
/// the site selector and the target monitoring instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQuery {
    /// Upstream credential.
    pub credential: Credential,
    /// Result-count limit.
    pub limit: u32,
    /// Response-format selector.
    pub format: String,
    /// Site/region selector.
    pub site: SiteSelector,
    /// Target monitoring instant.
    pub monitor_date: MonitorInstant,
}

impl RecordQuery {
    /// Copy of this query targeting another instant.
    #[must_use]
    pub fn at(&self, monitor_date: MonitorInstant) -> Self {
        Self {
            monitor_date,
            ..self.clone()
        }
    }
}
