//! Horizon Passcode: a fixed-length passcode entry widget core.
//!
//! A passcode field shows N cells that take one glyph each. This crate holds
//! everything except the drawing:
//!
//! - [`InputStateMachine`]: the entered code, the active cell, and per-cell
//!   states, including right-to-left layouts
//! - [`PasscodeField`]: the controller that turns [`InputEvent`]s into state
//!   changes, styles each cell, and emits signals
//! - [`ResetPolicy`] and [`ShakeSpec`]: what happens when the field enters
//!   error mode
//! - [`PasscodeConfig`] / [`PasscodeSettings`]: configuration, the latter
//!   loadable from TOML
//!
//! Cell visuals come from `horizon-passcode-style`; signals and timers from
//! `horizon-passcode-core`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use horizon_passcode::prelude::*;
//! use horizon_passcode_core::ManualClock;
//!
//! let clock = ManualClock::new();
//! let config = PasscodeConfig::new(4)
//!     .with_validator(DigitsValidator)
//!     .with_reset_policy(ResetPolicy::after_delay(Duration::from_millis(500)));
//! let mut field = PasscodeField::with_parts(config, NullRenderer, Arc::new(clock.clone())).unwrap();
//!
//! field.type_text("12a34");
//! assert_eq!(field.code(), "1234");
//!
//! // Wrong code: show the error, then clear it after the delay.
//! field.set_error(true);
//! clock.advance(Duration::from_millis(500));
//! assert!(field.process_timers());
//! assert_eq!(field.code(), "");
//! ```

mod config;
mod direction;
mod error;
mod event;
mod field;
mod input;
mod renderer;
mod reset;
mod shake;
mod strategy;
pub mod validator;

pub use config::{DEFAULT_LENGTH, DEFAULT_SPACING, PasscodeConfig, PasscodeSettings, Theme};
pub use direction::LayoutDirection;
pub use error::{Error, Result};
pub use event::{AnimationId, InputEvent};
pub use field::PasscodeField;
pub use input::{ErrorEdge, InputStateMachine, InsertOutcome, RejectReason};
pub use renderer::{AnimationRenderer, NullRenderer, PlayOutcome};
pub use reset::ResetPolicy;
pub use shake::{SHAKE_DURATION, SHAKE_KEYFRAMES, ShakeSpec};
pub use strategy::ActiveIndexStrategy;

pub use horizon_passcode_style as style;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::validator::{DigitsValidator, FragmentValidator, RegexValidator};
    pub use crate::{
        ActiveIndexStrategy, AnimationRenderer, InputEvent, LayoutDirection, NullRenderer,
        PasscodeConfig, PasscodeField, PasscodeSettings, PlayOutcome, ResetPolicy, ShakeSpec,
    };
    pub use horizon_passcode_style::prelude::*;
}
