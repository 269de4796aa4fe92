//! Rounded box with a blinking caret.

use std::time::Duration;

use crate::appearance::{CellAppearance, LayerKind};
use crate::color::CellColor;
use crate::state::CellState;
use crate::style::{CellStyle, Decoration, text_color};
use crate::theme::PasscodePalette;
use crate::types::{Color, Rect, Size};

/// Default blink period of the caret.
pub const CARET_BLINK_PERIOD: Duration = Duration::from_secs(1);

/// A cell drawn as a filled, bordered box. The active empty cell shows a
/// blinking caret.
#[derive(Debug, Clone)]
pub struct BoxedStyle {
    /// Glyph color source.
    pub text: CellColor,
    /// Box fill.
    pub background: Decoration,
    /// Box outline.
    pub border: Decoration,
    /// Caret bar.
    pub caret: Decoration,
    /// Outline stroke width.
    pub border_width: f32,
    /// Box corner radius.
    pub corner_radius: f32,
    /// Caret bar width.
    pub caret_width: f32,
    /// Caret height as a fraction of the cell height.
    pub caret_height_ratio: f32,
}

impl BoxedStyle {
    /// Build the style from a palette.
    pub fn from_palette(palette: &PasscodePalette) -> Self {
        let border = CellColor::by_state(palette.empty, palette.filled, palette.accent, palette.error);

        let p = palette.clone();
        let caret = CellColor::dynamic(move |state| {
            if state.selected && !state.filled && !state.error {
                vec![p.accent, Color::TRANSPARENT]
            } else {
                Vec::new()
            }
        });

        Self {
            text: CellColor::by_state(palette.text, palette.text, palette.text, palette.error),
            background: Decoration::new(palette.surface),
            border: Decoration::new(border),
            caret: Decoration::new(caret).with_period(CARET_BLINK_PERIOD),
            border_width: 1.5,
            corner_radius: 6.0,
            caret_width: 2.0,
            caret_height_ratio: 0.5,
        }
    }

    /// Enable or suppress the caret blink.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.caret.animate = animate;
        self
    }

    fn restyle(&self, cell: &mut CellAppearance, state: CellState) {
        cell.text_color = text_color(&self.text, state);
        self.background.paint(cell.layer_mut(LayerKind::Background), state);
        self.border.paint(cell.layer_mut(LayerKind::Border), state);
        self.caret.paint(cell.layer_mut(LayerKind::Caret), state);
    }
}

impl Default for BoxedStyle {
    fn default() -> Self {
        Self::from_palette(&PasscodePalette::default())
    }
}

impl CellStyle for BoxedStyle {
    fn apply(&mut self, cell: &mut CellAppearance, state: CellState) {
        cell.corner_radius = self.corner_radius;
        cell.border_width = self.border_width;
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
        cell.layer_mut(LayerKind::Background).frame = local;
        cell.layer_mut(LayerKind::Border).frame = local;

        let caret = Size::new(self.caret_width, local.height() * self.caret_height_ratio);
        cell.layer_mut(LayerKind::Caret).frame = Rect::from_center(local.center(), caret);
    }
}
