//! Per-cell semantic state.

use std::fmt;

/// The semantic state used to resolve a cell's colors.
///
/// Never stored: always derived from [`CellState`] through
/// [`CellState::semantic`], which applies the fixed precedence
/// error > selected > empty > filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellSemanticState {
    /// The cell holds no glyph.
    Empty,
    /// The cell holds a glyph.
    Filled,
    /// The cell is the active input target.
    Selected,
    /// The whole field is in error mode.
    Error,
}

impl fmt::Display for CellSemanticState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Filled => write!(f, "filled"),
            Self::Selected => write!(f, "selected"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// The raw flags describing one cell at one moment.
///
/// Styles receive the flags rather than the collapsed [`CellSemanticState`]
/// so dynamic colors can distinguish, say, a selected empty cell from a
/// selected filled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellState {
    /// The cell holds a glyph.
    pub filled: bool,
    /// The cell is the active input target.
    pub selected: bool,
    /// The field is in error mode.
    pub error: bool,
}

impl CellState {
    /// Build a state from its three flags.
    pub const fn new(filled: bool, selected: bool, error: bool) -> Self {
        Self {
            filled,
            selected,
            error,
        }
    }

    /// Collapse the flags into a single semantic state.
    pub fn semantic(&self) -> CellSemanticState {
        if self.error {
            CellSemanticState::Error
        } else if self.selected {
            CellSemanticState::Selected
        } else if !self.filled {
            CellSemanticState::Empty
        } else {
            CellSemanticState::Filled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_wins_over_selection() {
        let state = CellState::new(true, true, true);
        assert_eq!(state.semantic(), CellSemanticState::Error);
    }

    #[test]
    fn test_selected_wins_over_fill() {
        assert_eq!(CellState::new(false, true, false).semantic(), CellSemanticState::Selected);
        assert_eq!(CellState::new(true, true, false).semantic(), CellSemanticState::Selected);
    }

    #[test]
    fn test_plain_cells() {
        assert_eq!(CellState::default().semantic(), CellSemanticState::Empty);
        assert_eq!(CellState::new(true, false, false).semantic(), CellSemanticState::Filled);
    }
}
