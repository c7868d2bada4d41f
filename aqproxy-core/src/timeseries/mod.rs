//! Time-series utilities shared by connectors and orchestrator.
//!
//! Modules include:
//! - `window`: generate the hourly instants around a reference instant
//! - `merge`: concatenate per-instant record batches and order them by their own timestamps
/// Hourly time-window generation and reference resolution.
pub mod window;
/// Merge utilities for joining per-instant record batches.
pub mod merge;
