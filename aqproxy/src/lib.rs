//! aqproxy fetches hourly air-quality monitoring records from an upstream
//! open-data API through a pluggable [`RecordSource`].
//!
//! Overview
//! - [`AqProxy::batch`] builds a window of hourly instants around a reference
//!   (±36 hours by default, 73 instants), fetches every instant concurrently,
//!   ignores the ones that fail, and merges the rest into one sequence sorted by
//!   each record's own timestamp.
//! - [`AqProxy::pollutant`], [`AqProxy::area`] and [`AqProxy::snapshot`] issue a
//!   single fetch and surface its failure instead of hiding it.
//! - [`response::ApiResponse`] turns every outcome into a status code and a
//!   JSON envelope with a machine-readable `status` tag.
//!
//! Key behaviors
//! - Configuration (credential, reference instant, radius) is checked before
//!   any fetch. A missing credential never reaches the network.
//! - The batch path waits for full settlement; there is no retry, no
//!   concurrency cap, and no deadline other than the source's transport timeout.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use aqproxy::{AqProxy, Credential, ProxyConfig};
//! use aqproxy_moenv::MoenvConnector;
//!
//! let cfg = ProxyConfig {
//!     api_key: Some(Credential::new(std::env::var("AQPROXY_API_KEY")?)),
//!     reference: Some("2025-11-26T00:00".into()),
//!     ..ProxyConfig::default()
//! };
//! let proxy = AqProxy::builder()
//!     .source(Arc::new(MoenvConnector::builder().build()?))
//!     .config(cfg)
//!     .build()?;
//!
//! let report = proxy.batch().await?;
//! println!("{}", report.summary());
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// JSON envelopes for proxy outcomes.
pub mod response;
mod router;

pub use core::{AqProxy, AqProxyBuilder, Clock};

// Re-export core types for convenience
pub use aqproxy_core::{
    AqError, BatchReport, Credential, Lookup, MonitorInstant, ProxyConfig, Record, RecordQuery,
    RecordReport, RecordSource, SiteSelector, SnapshotReport, TimeRange, TimeWindow, Tz,
};
