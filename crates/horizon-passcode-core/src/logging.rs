//! Logging facilities for Horizon Passcode.
//!
//! Horizon Passcode uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_passcode=debug")
//!         .init();
//! }
//! ```
//!
//! The constants in [`targets`] can be used in filter directives to narrow
//! output to a single subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_passcode_core";
    /// Timer system target.
    pub const TIMER: &str = "horizon_passcode_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_passcode_core::signal";
    /// Input state machine target.
    pub const INPUT: &str = "horizon_passcode::input";
    /// Error reset policy target.
    pub const RESET: &str = "horizon_passcode::reset";
    /// Field controller target.
    pub const FIELD: &str = "horizon_passcode::field";
    /// Cell styling target.
    pub const STYLE: &str = "horizon_passcode_style";
}

/// A performance tracing span guard.
///
/// Tracks the duration of an operation; the span stays entered until the
/// guard is dropped.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: "horizon_passcode::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
