//! Built-in cell styles.

mod boxed;
mod underline;

pub use boxed::{BoxedStyle, CARET_BLINK_PERIOD};
pub use underline::{UnderlineStyle, solid_underline};
