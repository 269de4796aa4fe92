//! Core systems for Horizon Passcode.
//!
//! This crate provides the foundational plumbing shared by the passcode widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe change notification ([`Signal`])
//! - **Timers**: One-shot timers driven by an injectable [`Clock`]
//! - **Logging**: `tracing` target names for every subsystem
//!
//! Everything here is designed for a single UI thread. Signals invoke their
//! slots directly, and timers only fire when the owner calls
//! [`TimerManager::process_expired`] from its event loop.
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_passcode_core::Signal;
//!
//! let code_changed = Signal::<String>::new();
//!
//! let conn_id = code_changed.connect(|code| {
//!     println!("Code is now: {}", code);
//! });
//!
//! code_changed.emit("12".to_string());
//! code_changed.disconnect(conn_id);
//! ```
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_passcode_core::{ManualClock, TimerManager};
//!
//! let clock = ManualClock::new();
//! let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
//!
//! let id = timers.start_one_shot(Duration::from_millis(300));
//! assert!(timers.process_expired().is_empty());
//!
//! clock.advance(Duration::from_millis(300));
//! assert_eq!(timers.process_expired(), vec![id]);
//! ```

mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use error::{CoreError, Result, TimerError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use timer::{Clock, ManualClock, SystemClock, TimerId, TimerManager};
