//! Layout direction for the cell row.
//!
//! The direction is decided once when a field is built and only remaps a
//! logical cell index to a visual one: in a right-to-left layout the first
//! entered glyph appears in the rightmost cell.

use serde::{Deserialize, Serialize};

/// Direction in which cells are filled on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Left-to-right (e.g., English, French, German)
    #[default]
    LeftToRight,
    /// Right-to-left (e.g., Arabic, Hebrew)
    RightToLeft,
}

impl LayoutDirection {
    /// Detect the direction of a string from its first strong character.
    ///
    /// ```
    /// use horizon_passcode::LayoutDirection;
    ///
    /// assert_eq!(LayoutDirection::detect("Hello"), LayoutDirection::LeftToRight);
    /// assert_eq!(LayoutDirection::detect("שלום"), LayoutDirection::RightToLeft);
    /// ```
    pub fn detect(text: &str) -> Self {
        use unicode_bidi::{BidiClass, bidi_class};

        for ch in text.chars() {
            match bidi_class(ch) {
                BidiClass::L => return Self::LeftToRight,
                BidiClass::R | BidiClass::AL => return Self::RightToLeft,
                _ => continue,
            }
        }

        // No strong directional character found, default to LTR
        Self::LeftToRight
    }

    /// The conventional direction for a locale identifier like `"ar-SA"`.
    pub fn for_locale(locale: &str) -> Self {
        let lang = locale.split(['-', '_']).next().unwrap_or(locale);

        match lang.to_lowercase().as_str() {
            "ar" | "he" | "fa" | "ur" | "yi" | "ps" | "sd" | "ug" | "ku" | "ckb" | "dv" | "arc"
            | "syr" => Self::RightToLeft,
            _ => Self::LeftToRight,
        }
    }

    /// The direction of the current system locale.
    #[cfg(feature = "localization")]
    pub fn system() -> Self {
        match sys_locale::get_locale() {
            Some(locale) => Self::for_locale(&locale),
            None => Self::LeftToRight,
        }
    }

    /// The direction of the current system locale.
    #[cfg(not(feature = "localization"))]
    pub fn system() -> Self {
        Self::LeftToRight
    }

    /// Returns true if this is right-to-left direction.
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::RightToLeft)
    }

    /// Map a logical index to its visual position among `length` cells.
    ///
    /// The mapping is its own inverse.
    pub fn visual_index(self, index: usize, length: usize) -> usize {
        match self {
            Self::LeftToRight => index,
            Self::RightToLeft => length.saturating_sub(1).saturating_sub(index),
        }
    }
}
