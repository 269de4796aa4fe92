//! The cell style contract.
//!
//! A visual theme is any type implementing [`CellStyle`]. The passcode field
//! creates one style per cell through a [`CellStyleFactory`] and calls the
//! four operations as the cell's situation changes:
//!
//! | Operation | Called when |
//! |-----------|-------------|
//! | [`apply`](CellStyle::apply) | the cell is (re)built |
//! | [`selection_changed`](CellStyle::selection_changed) | the cell gains or loses selection or its glyph |
//! | [`error_changed`](CellStyle::error_changed) | the field enters or leaves error mode |
//! | [`bounds_changed`](CellStyle::bounds_changed) | the cell is laid out at new bounds |
//!
//! Styles only write into the [`CellAppearance`] they are handed; they never
//! see the entered code.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::{ColorCycle, DEFAULT_CYCLE_PERIOD};
use crate::appearance::{CellAppearance, CellLayer};
use crate::color::CellColor;
use crate::state::CellState;
use crate::types::{Color, Rect};

/// A pluggable per-cell visual theme.
pub trait CellStyle: Send {
    /// Set up the appearance for a freshly attached cell.
    fn apply(&mut self, cell: &mut CellAppearance, state: CellState);

    /// Update colors after the selection or fill flag changed.
    fn selection_changed(&mut self, cell: &mut CellAppearance, state: CellState);

    /// Update colors after the error flag changed.
    fn error_changed(&mut self, cell: &mut CellAppearance, state: CellState) {
        self.selection_changed(cell, state);
    }

    /// Recompute geometry for new bounds. Must not depend on the cell state.
    fn bounds_changed(&mut self, cell: &mut CellAppearance, bounds: Rect);
}

/// Creates one [`CellStyle`] per cell.
pub type CellStyleFactory = Arc<dyn Fn() -> Box<dyn CellStyle> + Send + Sync>;

/// Wrap a closure as a [`CellStyleFactory`].
pub fn style_factory<F, S>(f: F) -> CellStyleFactory
where
    F: Fn() -> S + Send + Sync + 'static,
    S: CellStyle + 'static,
{
    Arc::new(move || Box::new(f()) as Box<dyn CellStyle>)
}

/// Resolve the glyph color for `state`.
pub fn text_color(color: &CellColor, state: CellState) -> Option<Color> {
    color.primary(state)
}

/// A decorative element: its own color source plus animation settings.
///
/// Each decoration resolves independently, so an underline and a caret in the
/// same cell may animate differently.
#[derive(Debug, Clone)]
pub struct Decoration {
    /// Color source for this element.
    pub color: CellColor,
    /// Loop period when the resolved colors cycle.
    pub period: Duration,
    /// When `false`, the element never animates, even if its colors would
    /// cycle. Only the first resolved color is painted.
    pub animate: bool,
}

impl Decoration {
    /// A decoration using the default cycle period.
    pub fn new(color: impl Into<CellColor>) -> Self {
        Self {
            color: color.into(),
            period: DEFAULT_CYCLE_PERIOD,
            animate: true,
        }
    }

    /// Set the cycle period.
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Enable or suppress animation.
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Resolve colors for `state` into `layer`.
    ///
    /// More than one color starts (or keeps) a [`ColorCycle`]; anything else
    /// removes a running animation before painting the static color.
    pub fn paint(&self, layer: &mut CellLayer, state: CellState) {
        let colors = self.color.colors(state);
        layer.color = colors.first().copied();

        if self.animate && colors.len() > 1 {
            let cycle = ColorCycle::new(colors, self.period);
            if layer.animation.as_ref() != Some(&cycle) {
                tracing::trace!(target: "horizon_passcode_style", kind = ?layer.kind, "animation started");
                layer.animation = Some(cycle);
            }
        } else if layer.animation.take().is_some() {
            tracing::trace!(target: "horizon_passcode_style", kind = ?layer.kind, "animation removed");
        }
    }
}

/// Wrapper so factories show up in `Debug` output of configuration types.
pub struct DebugFactory<'a>(pub &'a CellStyleFactory);

impl fmt::Debug for DebugFactory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellStyleFactory({:p})", Arc::as_ptr(self.0))
    }
}
