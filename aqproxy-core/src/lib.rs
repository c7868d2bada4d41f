//! aqproxy-core
//!
//! Core types, traits, and utilities shared across the aqproxy workspace.
//!
//! - `types`: common data structures (records, queries, reports, configuration).
//! - `connector`: the `RecordSource` trait implemented by upstream connectors.
//! - `timeseries`: the hourly window generator and record merge helpers.
//!
//! Sources are driven from async code; the orchestrator assumes a Tokio 1.x
//! runtime, but nothing in this crate spawns tasks itself.
#![warn(missing_docs)]

/// The `RecordSource` trait.
pub mod connector;
/// Time-window generation and record merging.
pub mod timeseries;
pub mod types;

pub use connector::RecordSource;
pub use timeseries::merge::{merge_records, sort_by_monitor_date};
pub use timeseries::window::{TimeWindow, resolve_reference};
pub use types::*;
