//! Animation descriptors for cell decorations.
//!
//! Nothing here runs a clock. [`ColorCycle`] describes a repeating color
//! cross-fade that a renderer plays; [`ease`] shapes progress values.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_passcode_style::animation::ColorCycle;
//! use horizon_passcode_style::Color;
//!
//! let pulse = ColorCycle::new(vec![Color::BLUE, Color::LIGHT_GRAY], Duration::from_secs(2));
//! let frame_color = pulse.sample(Duration::from_millis(250));
//! assert_ne!(frame_color, Color::BLUE);
//! ```

mod cycle;
mod easing;

pub use cycle::{ColorCycle, DEFAULT_CYCLE_PERIOD};
pub use easing::{Easing, ease, lerp_eased};
