//! State-aware color sources.
//!
//! A [`CellColor`] answers "which color(s) apply to this cell state". It is a
//! closed set of variants:
//!
//! - [`CellColor::Clear`]: invisible, yields no color
//! - [`CellColor::Solid`]: one constant color, always visible
//! - [`CellColor::Dynamic`]: a caller-supplied function from state to an
//!   ordered list of colors, always visible
//!
//! A resolved list with more than one color means "animate by cycling through
//! these colors"; a list of zero or one colors means "static".
//!
//! # Example
//!
//! ```
//! use horizon_passcode_style::{CellColor, CellState, Color};
//!
//! let line = CellColor::by_state(Color::GRAY, Color::BLACK, Color::BLUE, Color::RED);
//! let state = CellState::new(true, true, true);
//! assert_eq!(line.colors(state), vec![Color::RED]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::state::{CellSemanticState, CellState};
use crate::types::Color;

/// Function resolving the colors for a cell state.
pub type ColorFn = Arc<dyn Fn(CellState) -> Vec<Color> + Send + Sync>;

/// A color source that resolves per cell state.
#[derive(Clone, Default)]
pub enum CellColor {
    /// Paints nothing.
    #[default]
    Clear,
    /// The same color in every state.
    Solid(Color),
    /// Colors computed from the cell state.
    Dynamic(ColorFn),
}

impl CellColor {
    /// Create a dynamic color from a closure.
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(CellState) -> Vec<Color> + Send + Sync + 'static,
    {
        Self::Dynamic(Arc::new(f))
    }

    /// A dynamic color picking one color per semantic state.
    pub fn by_state(empty: Color, filled: Color, selected: Color, error: Color) -> Self {
        Self::dynamic(move |state| {
            vec![match state.semantic() {
                CellSemanticState::Empty => empty,
                CellSemanticState::Filled => filled,
                CellSemanticState::Selected => selected,
                CellSemanticState::Error => error,
            }]
        })
    }

    /// Whether this source ever paints anything.
    #[inline]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Clear)
    }

    /// Resolve the ordered color list for `state`.
    pub fn colors(&self, state: CellState) -> Vec<Color> {
        match self {
            Self::Clear => Vec::new(),
            Self::Solid(color) => vec![*color],
            Self::Dynamic(f) => f(state),
        }
    }

    /// The first resolved color, if any.
    pub fn primary(&self, state: CellState) -> Option<Color> {
        self.colors(state).into_iter().next()
    }
}

impl From<Color> for CellColor {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clear => write!(f, "Clear"),
            Self::Solid(color) => f.debug_tuple("Solid").field(color).finish(),
            Self::Dynamic(_) => write!(f, "Dynamic(..)"),
        }
    }
}

static_assertions::assert_impl_all!(CellColor: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_is_invisible() {
        let color = CellColor::Clear;
        assert!(!color.is_visible());
        assert!(color.colors(CellState::default()).is_empty());
        assert_eq!(color.primary(CellState::default()), None);
    }

    #[test]
    fn test_solid_ignores_state() {
        let color = CellColor::from(Color::BLUE);
        assert!(color.is_visible());
        assert_eq!(color.colors(CellState::new(true, false, true)), vec![Color::BLUE]);
    }

    #[test]
    fn test_dynamic_is_visible_even_when_empty_list() {
        let color = CellColor::dynamic(|state| {
            if state.selected {
                vec![Color::BLUE, Color::TRANSPARENT]
            } else {
                Vec::new()
            }
        });
        assert!(color.is_visible());
        assert_eq!(color.colors(CellState::new(false, true, false)).len(), 2);
        assert!(color.colors(CellState::default()).is_empty());
    }

    #[test]
    fn test_by_state_precedence() {
        let color = CellColor::by_state(Color::GRAY, Color::BLACK, Color::BLUE, Color::RED);
        assert_eq!(color.primary(CellState::new(false, false, false)), Some(Color::GRAY));
        assert_eq!(color.primary(CellState::new(true, false, false)), Some(Color::BLACK));
        assert_eq!(color.primary(CellState::new(true, true, false)), Some(Color::BLUE));
        assert_eq!(color.primary(CellState::new(false, true, true)), Some(Color::RED));
    }
}
