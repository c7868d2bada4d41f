use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use aqproxy_core::{
    AqError, MonitorInstant, ProxyConfig, RecordQuery, RecordSource, TimeWindow, resolve_reference,
};

/// Source of "now" used to resolve a missing reference instant.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Orchestrator that turns configuration plus a record source into batch and
/// single-instant answers.
pub struct AqProxy {
    pub(crate) source: Arc<dyn RecordSource>,
    pub(crate) cfg: ProxyConfig,
    pub(crate) clock: Clock,
}

impl fmt::Debug for AqProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AqProxy")
            .field("source", &self.source.name())
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing an `AqProxy` with custom configuration.
pub struct AqProxyBuilder {
    source: Option<Arc<dyn RecordSource>>,
    cfg: ProxyConfig,
    clock: Clock,
}

impl Default for AqProxyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AqProxyBuilder {
    /// Create a new builder with default configuration and the system clock.
    ///
    /// No source is registered; [`Self::build`] fails until one is set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: ProxyConfig::default(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Register the record source every fetch goes through.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn RecordSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    ///
    /// The configuration is not validated here; the credential, reference and
    /// radius are checked on every request so that a misconfigured proxy
    /// answers with configuration errors rather than failing to start.
    #[must_use]
    pub fn config(mut self, cfg: ProxyConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the clock used when no reference instant is configured.
    #[must_use]
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// Build the `AqProxy` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source has been registered via [`Self::source`].
    pub fn build(self) -> Result<AqProxy, AqError> {
        let Some(source) = self.source else {
            return Err(AqError::InvalidArg(
                "no record source registered; set one via source(...)".to_string(),
            ));
        };
        Ok(AqProxy {
            source,
            cfg: self.cfg,
            clock: self.clock,
        })
    }
}

impl AqProxy {
    /// Start building a new `AqProxy` instance.
    ///
    /// ```rust,ignore
    /// let proxy = aqproxy::AqProxy::builder()
    ///     .source(Arc::new(MoenvConnector::builder().build()?))
    ///     .config(cfg)
    ///     .build()?;
    /// let report = proxy.batch().await?;
    /// ```
    #[must_use]
    pub fn builder() -> AqProxyBuilder {
        AqProxyBuilder::new()
    }

    /// The configuration this proxy was built with.
    #[must_use]
    pub const fn config(&self) -> &ProxyConfig {
        &self.cfg
    }

    /// Name of the underlying record source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Check everything that can be checked without touching the network and
    /// return the window a batch request would cover right now.
    ///
    /// # Errors
    /// Returns `AqError::Config` for a missing credential, an unparsable
    /// reference instant or an out-of-range radius.
    pub fn validate(&self) -> Result<TimeWindow, AqError> {
        self.cfg.credential()?;
        self.window()
    }

    pub(crate) fn window(&self) -> Result<TimeWindow, AqError> {
        let reference = self.reference()?;
        TimeWindow::around(reference, self.cfg.radius()?)
    }

    pub(crate) fn reference(&self) -> Result<MonitorInstant, AqError> {
        resolve_reference(self.cfg.reference.as_deref(), self.cfg.timezone, (self.clock)())
    }

    /// Instant for a single-path request: the explicit `at` when given,
    /// otherwise the configured reference.
    pub(crate) fn instant_for(&self, at: Option<&str>) -> Result<MonitorInstant, AqError> {
        match at.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => resolve_reference(Some(raw), self.cfg.timezone, (self.clock)())
                .map_err(|_| AqError::InvalidArg(format!("invalid instant: '{raw}'"))),
            None => self.reference(),
        }
    }

    /// Upstream query for `at`, carrying the configured credential and selectors.
    ///
    /// # Errors
    /// Returns `AqError::Config` when the credential is missing.
    pub(crate) fn query_at(&self, at: MonitorInstant) -> Result<RecordQuery, AqError> {
        Ok(RecordQuery {
            credential: self.cfg.credential()?.clone(),
            limit: self.cfg.limit,
            format: self.cfg.format.clone(),
            site: self.cfg.site.clone(),
            monitor_date: at,
        })
    }
}
