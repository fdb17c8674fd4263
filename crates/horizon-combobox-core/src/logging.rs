//! Logging facilities for Horizon Combobox.
//!
//! Horizon Combobox uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("horizon_combobox=debug"))
//!         .init();
//! }
//! ```
//!
//! Every event the engine logs uses one of the [`targets`], so a filter such
//! as `horizon_combobox::engine=trace` isolates the state machine.

/// Span names used throughout Horizon Combobox for tracing.
pub mod span_names {
    /// Timing span opened by [`super::TransitionSpan`].
    pub const PERF: &str = "horizon_combobox::perf";
}

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_combobox_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_combobox_core::signal";
    /// Interaction engine target.
    pub const ENGINE: &str = "horizon_combobox::engine";
    /// Filtering and matching target.
    pub const FILTER: &str = "horizon_combobox::filter";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_combobox::config";
}

/// A guard that keeps a tracing span entered for the lifetime of one
/// state transition.
///
/// # Example
///
/// ```
/// use horizon_combobox_core::TransitionSpan;
///
/// let _span = TransitionSpan::new("on_blur");
/// // ... handle the event ...
/// ```
#[derive(Debug)]
pub struct TransitionSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl TransitionSpan {
    /// Create and enter a new span named after the handled event.
    pub fn new(event: &'static str) -> Self {
        let span = tracing::debug_span!(target: span_names::PERF, "transition", event);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with the engine
/// target, so every state transition can be isolated with a single filter.
#[macro_export]
macro_rules! combo_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::ENGINE, $($arg)*)
    };
}

#[macro_export]
macro_rules! combo_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::ENGINE, $($arg)*)
    };
}

#[macro_export]
macro_rules! combo_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::ENGINE, $($arg)*)
    };
}
