//! Color palette definitions.

use crate::types::Color;

/// The colors the built-in cell styles draw from.
#[derive(Debug, Clone, PartialEq)]
pub struct PasscodePalette {
    /// Glyph color.
    pub text: Color,
    /// Accent for the active cell.
    pub accent: Color,
    /// Lighter accent, the second stop of the selection pulse.
    pub accent_light: Color,
    /// Error color.
    pub error: Color,
    /// Decoration color for cells holding a glyph.
    pub filled: Color,
    /// Decoration color for empty cells.
    pub empty: Color,
    /// Cell box fill.
    pub surface: Color,
}

impl PasscodePalette {
    /// Create a light theme palette.
    pub fn light() -> Self {
        Self {
            text: Color::from_rgb8(0x21, 0x25, 0x29),
            accent: Color::from_rgb8(0x00, 0x7A, 0xFF),
            accent_light: Color::from_rgb8(0x4D, 0xA3, 0xFF),
            error: Color::from_rgb8(0xDC, 0x35, 0x45),
            filled: Color::from_rgb8(0x49, 0x50, 0x57),
            empty: Color::from_rgb8(0xCE, 0xD4, 0xDA),
            surface: Color::from_rgb8(0xF8, 0xF9, 0xFA),
        }
    }

    /// Create a dark theme palette.
    pub fn dark() -> Self {
        Self {
            text: Color::from_rgb8(0xF8, 0xF9, 0xFA),
            accent: Color::from_rgb8(0x0A, 0x84, 0xFF),
            accent_light: Color::from_rgb8(0x64, 0xB5, 0xFF),
            error: Color::from_rgb8(0xFF, 0x45, 0x3A),
            filled: Color::from_rgb8(0xAD, 0xB5, 0xBD),
            empty: Color::from_rgb8(0x49, 0x50, 0x57),
            surface: Color::from_rgb8(0x2C, 0x2C, 0x2E),
        }
    }
}

impl Default for PasscodePalette {
    fn default() -> Self {
        Self::light()
    }
}
