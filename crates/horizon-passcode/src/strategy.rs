//! Active-cell selection policies.

use serde::{Deserialize, Serialize};

/// How the active (highlighted) cell follows the entered code.
///
/// The active index is a pure function of the code length and the cell count;
/// nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveIndexStrategy {
    /// The most recently filled cell, or the first cell when empty.
    LastFilledOrFirst,
    /// The next empty cell, or the last cell once full.
    #[default]
    FirstEmptyOrLast,
    /// Always the next empty cell. Once full this equals the cell count,
    /// meaning no cell is active.
    FirstEmpty,
}

impl ActiveIndexStrategy {
    /// The active index for `filled` entered glyphs out of `length` cells.
    ///
    /// The result is in `0..=length`; `length` means "no active cell".
    ///
    /// ```
    /// use horizon_passcode::ActiveIndexStrategy;
    ///
    /// assert_eq!(ActiveIndexStrategy::LastFilledOrFirst.active_index(2, 4), 1);
    /// assert_eq!(ActiveIndexStrategy::FirstEmptyOrLast.active_index(4, 4), 3);
    /// assert_eq!(ActiveIndexStrategy::FirstEmpty.active_index(4, 4), 4);
    /// ```
    pub fn active_index(self, filled: usize, length: usize) -> usize {
        match self {
            Self::LastFilledOrFirst => filled.saturating_sub(1),
            Self::FirstEmptyOrLast => {
                if filled >= length {
                    length.saturating_sub(1)
                } else {
                    filled
                }
            }
            Self::FirstEmpty => filled,
        }
    }
}
