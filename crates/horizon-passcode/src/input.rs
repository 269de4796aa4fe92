//! The passcode input state machine.
//!
//! [`InputStateMachine`] owns the entered code and turns keystrokes into code
//! mutations. The code only ever grows or shrinks at its tail, and each cell
//! glyph is written or cleared in the same step as the code change, so the
//! cell arena and the code never disagree.
//!
//! Everything visual is derived on demand: the active index comes from the
//! [`ActiveIndexStrategy`], and per-cell [`CellState`]s from the code length,
//! the active index and the error flag.
//!
//! # Example
//!
//! ```
//! use horizon_passcode::{ActiveIndexStrategy, InputStateMachine, InsertOutcome, LayoutDirection};
//!
//! let mut input = InputStateMachine::new(4, ActiveIndexStrategy::FirstEmpty, LayoutDirection::LeftToRight);
//! for glyph in ["1", "2", "3"] {
//!     input.insert_char(glyph);
//! }
//! assert_eq!(input.insert_char("4"), InsertOutcome::Accepted { completed: true });
//! assert_eq!(input.active_cell(), None);
//! ```

use std::fmt;

use horizon_passcode_style::{CellSemanticState, CellState};
use unicode_segmentation::UnicodeSegmentation;

use crate::direction::LayoutDirection;
use crate::strategy::ActiveIndexStrategy;
use crate::validator::SharedValidator;

/// Why an insert was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Every cell already holds a glyph.
    Full,
    /// User input is currently ignored.
    IgnoringInput,
    /// The input was not exactly one glyph.
    NotSingleGlyph,
    /// The validator refused the glyph.
    Validator,
}

/// Result of [`InputStateMachine::insert_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// The glyph was appended. `completed` is true when this insert filled
    /// the last cell.
    Accepted { completed: bool },
    /// Nothing changed.
    Rejected(RejectReason),
}

impl InsertOutcome {
    /// Whether the glyph was appended.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Whether this insert was the fill event.
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Accepted { completed: true })
    }
}

/// A transition of the error flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorEdge {
    /// false -> true
    Raised,
    /// true -> false
    Cleared,
}

/// Owns the entered code and derives every cell's state from it.
pub struct InputStateMachine {
    length: usize,
    /// Entered glyphs, in entry order.
    code: Vec<String>,
    /// Glyph shown by each cell, by logical index.
    cells: Vec<Option<String>>,
    strategy: ActiveIndexStrategy,
    direction: LayoutDirection,
    ignore_user_input: bool,
    is_error: bool,
    validator: Option<SharedValidator>,
}

impl fmt::Debug for InputStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputStateMachine")
            .field("length", &self.length)
            .field("filled", &self.code.len())
            .field("strategy", &self.strategy)
            .field("direction", &self.direction)
            .field("ignore_user_input", &self.ignore_user_input)
            .field("is_error", &self.is_error)
            .field("has_validator", &self.validator.is_some())
            .finish()
    }
}

impl InputStateMachine {
    /// Create an empty machine with `length` cells.
    pub fn new(length: usize, strategy: ActiveIndexStrategy, direction: LayoutDirection) -> Self {
        Self {
            length,
            code: Vec::with_capacity(length),
            cells: vec![None; length],
            strategy,
            direction,
            ignore_user_input: false,
            is_error: false,
            validator: None,
        }
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The entered code.
    pub fn code(&self) -> String {
        self.code.concat()
    }

    /// Number of entered glyphs.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// Whether no glyph has been entered.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    /// Whether every cell holds a glyph.
    pub fn is_full(&self) -> bool {
        self.code.len() >= self.length
    }

    pub fn strategy(&self) -> ActiveIndexStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: ActiveIndexStrategy) {
        self.strategy = strategy;
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn ignore_user_input(&self) -> bool {
        self.ignore_user_input
    }

    pub fn set_ignore_user_input(&mut self, ignore: bool) {
        self.ignore_user_input = ignore;
    }

    /// Install or remove the fragment validator.
    pub fn set_validator(&mut self, validator: Option<SharedValidator>) {
        self.validator = validator;
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Set the error flag, reporting the edge if the value changed.
    pub fn set_error(&mut self, error: bool) -> Option<ErrorEdge> {
        if self.is_error == error {
            return None;
        }
        self.is_error = error;
        Some(if error {
            ErrorEdge::Raised
        } else {
            ErrorEdge::Cleared
        })
    }

    /// Whether the validator (if any) accepts `fragment`.
    pub fn validates(&self, fragment: &str) -> bool {
        self.validator.as_ref().is_none_or(|v| v.accepts(fragment))
    }

    /// Gate for a pending text replacement.
    ///
    /// An empty candidate is a deletion and is always let through unless
    /// input is ignored. A non-empty candidate is refused while the code is
    /// full, and otherwise goes to the validator.
    pub fn should_accept_replacement(&self, candidate: &str) -> bool {
        if self.ignore_user_input {
            return false;
        }
        if candidate.is_empty() {
            return true;
        }
        !self.is_full() && self.validates(candidate)
    }

    /// Append one glyph.
    pub fn insert_char(&mut self, glyph: &str) -> InsertOutcome {
        let outcome = self.try_insert(glyph);
        match outcome {
            InsertOutcome::Accepted { completed } => {
                tracing::debug!(target: "horizon_passcode::input", filled = self.code.len(), completed, "glyph inserted");
            }
            InsertOutcome::Rejected(reason) => {
                tracing::trace!(target: "horizon_passcode::input", ?reason, "insert rejected");
            }
        }
        outcome
    }

    fn try_insert(&mut self, glyph: &str) -> InsertOutcome {
        if self.ignore_user_input {
            return InsertOutcome::Rejected(RejectReason::IgnoringInput);
        }
        if self.is_full() {
            return InsertOutcome::Rejected(RejectReason::Full);
        }
        let mut graphemes = glyph.graphemes(true);
        if graphemes.next().is_none() || graphemes.next().is_some() {
            return InsertOutcome::Rejected(RejectReason::NotSingleGlyph);
        }
        if !self.validates(glyph) {
            return InsertOutcome::Rejected(RejectReason::Validator);
        }

        let index = self.code.len();
        self.code.push(glyph.to_owned());
        self.cells[index] = Some(glyph.to_owned());

        InsertOutcome::Accepted {
            completed: self.code.len() == self.length,
        }
    }

    /// Remove the last glyph, clearing its cell. Returns `None` when empty.
    pub fn delete_last(&mut self) -> Option<String> {
        let glyph = self.code.pop()?;
        self.cells[self.code.len()] = None;
        tracing::debug!(target: "horizon_passcode::input", filled = self.code.len(), "glyph deleted");
        Some(glyph)
    }

    /// Clear the code, every cell glyph, and the error flag.
    pub fn reset(&mut self) {
        self.code.clear();
        self.cells.iter_mut().for_each(|cell| *cell = None);
        self.is_error = false;
        tracing::debug!(target: "horizon_passcode::input", "input reset");
    }

    /// Change the cell count. The code and all cells are cleared.
    pub fn set_length(&mut self, length: usize) {
        self.length = length;
        self.code.clear();
        self.cells = vec![None; length];
        tracing::debug!(target: "horizon_passcode::input", length, "cells rebuilt");
    }

    /// The logical active index, in `0..=length`.
    ///
    /// A value equal to [`length`](Self::length) means no cell is active.
    pub fn active_index(&self) -> usize {
        self.strategy.active_index(self.code.len(), self.length)
    }

    /// The logical active index, or `None` when no cell is active.
    pub fn active_cell(&self) -> Option<usize> {
        let index = self.active_index();
        (index < self.length).then_some(index)
    }

    /// Map a logical index to its visual position.
    pub fn visual_index(&self, logical: usize) -> usize {
        self.direction.visual_index(logical, self.length)
    }

    /// Map a visual position to its logical index.
    pub fn logical_index(&self, visual: usize) -> usize {
        self.direction.visual_index(visual, self.length)
    }

    fn flags_at(&self, logical: usize, active: Option<usize>) -> CellState {
        CellState {
            filled: self.cells[logical].is_some(),
            selected: active == Some(logical),
            error: self.is_error,
        }
    }

    /// Flags for each cell, in visual order.
    pub fn cell_flags(&self) -> Vec<CellState> {
        let active = self.active_cell();
        (0..self.length)
            .map(|visual| self.flags_at(self.logical_index(visual), active))
            .collect()
    }

    /// Semantic state of each cell, in visual order.
    pub fn cell_states(&self) -> Vec<CellSemanticState> {
        self.cell_flags().iter().map(CellState::semantic).collect()
    }

    /// Glyph shown by each cell, in visual order.
    pub fn glyphs(&self) -> Vec<Option<&str>> {
        (0..self.length)
            .map(|visual| self.cells[self.logical_index(visual)].as_deref())
            .collect()
    }
}
