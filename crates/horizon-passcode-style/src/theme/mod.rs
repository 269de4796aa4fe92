//! Built-in color themes.

mod palette;

pub use palette::PasscodePalette;
