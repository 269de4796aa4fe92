//! Glyph over a single underline.

use crate::appearance::{CellAppearance, LayerKind};
use crate::color::CellColor;
use crate::state::CellState;
use crate::style::{CellStyle, Decoration, text_color};
use crate::theme::PasscodePalette;
use crate::types::{Color, Rect};

/// A cell drawn as a glyph above a horizontal line.
///
/// The line pulses between two accent colors while its cell is selected
/// (unless animation is disabled) and turns to the error color in error mode.
#[derive(Debug, Clone)]
pub struct UnderlineStyle {
    /// Glyph color source.
    pub text: CellColor,
    /// The underline decoration.
    pub line: Decoration,
    /// Line thickness.
    pub thickness: f32,
    /// Horizontal inset of the line from each cell edge.
    pub inset: f32,
}

impl UnderlineStyle {
    /// Build the style from a palette.
    pub fn from_palette(palette: &PasscodePalette) -> Self {
        let p = palette.clone();
        let line = CellColor::dynamic(move |state| {
            if state.error {
                vec![p.error]
            } else if state.selected {
                vec![p.accent, p.accent_light]
            } else if state.filled {
                vec![p.filled]
            } else {
                vec![p.empty]
            }
        });

        Self {
            text: CellColor::by_state(palette.text, palette.text, palette.text, palette.error),
            line: Decoration::new(line),
            thickness: 2.0,
            inset: 2.0,
        }
    }

    /// Enable or suppress the selection pulse.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.line.animate = animate;
        self
    }

    /// Replace the line color source.
    pub fn with_line_color(mut self, color: impl Into<CellColor>) -> Self {
        self.line.color = color.into();
        self
    }

    fn restyle(&self, cell: &mut CellAppearance, state: CellState) {
        cell.text_color = text_color(&self.text, state);
        self.line.paint(cell.layer_mut(LayerKind::Underline), state);
    }
}

impl Default for UnderlineStyle {
    fn default() -> Self {
        Self::from_palette(&PasscodePalette::default())
    }
}

impl CellStyle for UnderlineStyle {
    fn apply(&mut self, cell: &mut CellAppearance, state: CellState) {
        cell.corner_radius = 0.0;
        cell.border_width = 0.0;
        self.restyle(cell, state);
        let bounds = cell.bounds;
        self.bounds_changed(cell, bounds);
    }

    fn selection_changed(&mut self, cell: &mut CellAppearance, state: CellState) {
        self.restyle(cell, state);
    }

    fn bounds_changed(&mut self, cell: &mut CellAppearance, bounds: Rect) {
        cell.bounds = bounds;
        let local = bounds.local();
        let thickness = self.thickness.min(local.height());
        cell.layer_mut(LayerKind::Underline).frame = Rect::new(
            self.inset,
            local.height() - thickness,
            (local.width() - 2.0 * self.inset).max(0.0),
            thickness,
        );
    }
}

/// A plain solid-color underline, handy for tests and minimal themes.
pub fn solid_underline(text: Color, line: Color) -> UnderlineStyle {
    UnderlineStyle {
        text: CellColor::Solid(text),
        line: Decoration::new(line),
        thickness: 1.0,
        inset: 0.0,
    }
}
