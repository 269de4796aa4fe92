//! Per-cell styling for Horizon Passcode.
//!
//! This crate turns a cell's semantic state into paint instructions:
//!
//! - **Color sources**: [`CellColor`] resolves the color list for a state
//! - **Style contract**: [`CellStyle`] is the four-operation theme interface
//! - **Appearance**: [`CellAppearance`] is what a renderer reads back
//! - **Animations**: [`animation::ColorCycle`] describes color cycling
//! - **Built-in themes**: [`styles::UnderlineStyle`] and [`styles::BoxedStyle`]
//!
//! # Example
//!
//! ```
//! use horizon_passcode_style::prelude::*;
//!
//! let mut style = UnderlineStyle::from_palette(&PasscodePalette::dark());
//! let mut cell = CellAppearance::new();
//!
//! style.apply(&mut cell, CellState::new(false, true, false));
//! style.bounds_changed(&mut cell, Rect::new(0.0, 0.0, 40.0, 56.0));
//!
//! assert!(cell.is_animating());
//! ```

pub mod animation;
mod appearance;
mod color;
mod state;
mod style;
pub mod styles;
pub mod theme;
mod types;

pub use appearance::{CellAppearance, CellLayer, LayerKind};
pub use color::{CellColor, ColorFn};
pub use state::{CellSemanticState, CellState};
pub use style::{CellStyle, CellStyleFactory, DebugFactory, Decoration, style_factory, text_color};
pub use types::{Color, Point, Rect, Size};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::animation::{ColorCycle, Easing};
    pub use crate::styles::{BoxedStyle, UnderlineStyle};
    pub use crate::theme::PasscodePalette;
    pub use crate::{
        CellAppearance, CellColor, CellLayer, CellSemanticState, CellState, CellStyle,
        CellStyleFactory, Color, Decoration, LayerKind, Rect, style_factory,
    };
}
