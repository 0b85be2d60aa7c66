//! Per-annotation overlay orchestration.
//!
//! One surface per annotation index, a decode request per index per pass, and a generation stamp
//! that turns completions from superseded inputs into no-ops.

/// The render-state object and its transitions.
pub mod controller;
/// Controller configuration.
pub mod opts;
