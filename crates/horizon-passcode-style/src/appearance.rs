//! Retained paint description for one cell.
//!
//! A [`CellStyle`](crate::CellStyle) never draws. It writes into a
//! [`CellAppearance`], and the host's renderer reads the appearance after
//! every update: text color, box paint, and a list of decoration layers, each
//! with its own frame, color and optional running animation.

use crate::animation::ColorCycle;
use crate::types::{Color, Rect};

/// Identifies a decoration layer within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// A line under the glyph.
    Underline,
    /// A text caret shown in the active cell.
    Caret,
    /// A border around the cell box.
    Border,
    /// The filled cell box behind the glyph.
    Background,
}

/// One decoration layer.
#[derive(Debug, Clone, PartialEq)]
pub struct CellLayer {
    /// Which decoration this is.
    pub kind: LayerKind,
    /// Frame in the cell's local coordinate space.
    pub frame: Rect,
    /// Static color, `None` when the layer paints nothing.
    pub color: Option<Color>,
    /// Running color animation, if any.
    pub animation: Option<ColorCycle>,
}

impl CellLayer {
    /// Create an empty, unpainted layer.
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            frame: Rect::ZERO,
            color: None,
            animation: None,
        }
    }

    /// Whether the layer paints anything at all.
    pub fn is_visible(&self) -> bool {
        self.animation.is_some() || self.color.is_some_and(|c| !c.is_transparent())
    }
}

/// Everything a renderer needs to paint one cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellAppearance {
    /// Glyph color; `None` hides the glyph.
    pub text_color: Option<Color>,
    /// Corner radius applied to box-shaped layers.
    pub corner_radius: f32,
    /// Stroke width for [`LayerKind::Border`].
    pub border_width: f32,
    /// Current cell bounds, in the parent's coordinate space.
    pub bounds: Rect,
    layers: Vec<CellLayer>,
}

impl CellAppearance {
    /// Create a blank appearance.
    pub fn new() -> Self {
        Self::default()
    }

    /// All layers, in paint order.
    pub fn layers(&self) -> &[CellLayer] {
        &self.layers
    }

    /// Look up a layer.
    pub fn layer(&self, kind: LayerKind) -> Option<&CellLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    /// Look up a layer, appending an empty one if it does not exist yet.
    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut CellLayer {
        let index = match self.layers.iter().position(|l| l.kind == kind) {
            Some(index) => index,
            None => {
                self.layers.push(CellLayer::new(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }

    /// Whether any layer currently runs an animation.
    pub fn is_animating(&self) -> bool {
        self.layers.iter().any(|l| l.animation.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_mut_creates_once() {
        let mut appearance = CellAppearance::new();
        appearance.layer_mut(LayerKind::Caret).color = Some(Color::BLUE);
        appearance.layer_mut(LayerKind::Caret).frame = Rect::new(0.0, 0.0, 2.0, 10.0);

        assert_eq!(appearance.layers().len(), 1);
        let caret = appearance.layer(LayerKind::Caret).map(|l| l.color);
        assert_eq!(caret, Some(Some(Color::BLUE)));
        assert!(appearance.layer(LayerKind::Underline).is_none());
    }

    #[test]
    fn test_transparent_layer_is_invisible() {
        let mut layer = CellLayer::new(LayerKind::Underline);
        assert!(!layer.is_visible());
        layer.color = Some(Color::TRANSPARENT);
        assert!(!layer.is_visible());
        layer.color = Some(Color::BLACK);
        assert!(layer.is_visible());
    }
}
