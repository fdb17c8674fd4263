//! Core systems for Horizon Combobox.
//!
//! This crate provides the plumbing shared by the combobox crates:
//!
//! - **Signal/Slot System**: Type-safe notifications from the interaction
//!   engine to whatever projects its state onto a UI
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_combobox_core::Signal;
//!
//! let active_changed = Signal::<i32>::new();
//!
//! let conn_id = active_changed.connect(|index| {
//!     println!("active option is now {}", index);
//! });
//!
//! active_changed.emit(2);
//! active_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::TransitionSpan;
pub use signal::{ConnectionId, Signal};
