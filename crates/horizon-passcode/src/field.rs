//! The passcode field controller.
//!
//! [`PasscodeField`] connects the host to the [`InputStateMachine`]: it takes
//! [`InputEvent`]s, keeps one [`CellStyle`] and [`CellAppearance`] per cell in
//! sync with the derived cell states, drives the error reset policy and the
//! shake animation, and reports changes through signals.
//!
//! The field never draws. After handling an event the host reads
//! [`appearances`](PasscodeField::appearances) and
//! [`glyphs`](PasscodeField::glyphs) and paints them.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_passcode::{PasscodeConfig, PasscodeField};
//! use parking_lot::Mutex;
//!
//! let mut field = PasscodeField::new(PasscodeConfig::new(4)).unwrap();
//!
//! let entered = Arc::new(Mutex::new(None));
//! let sink = entered.clone();
//! field.completed.connect(move |code| *sink.lock() = Some(code.clone()));
//!
//! field.type_text("1234");
//! assert_eq!(entered.lock().as_deref(), Some("1234"));
//! ```

use std::sync::Arc;
use std::time::Duration;

use horizon_passcode_core::{Clock, PerfSpan, Signal, SystemClock, TimerManager};
use horizon_passcode_style::theme::PasscodePalette;
use horizon_passcode_style::{
    CellAppearance, CellSemanticState, CellState, CellStyle, CellStyleFactory, Rect,
};
use slotmap::SlotMap;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::{PasscodeConfig, default_style_factory};
use crate::direction::LayoutDirection;
use crate::error::{Error, Result};
use crate::event::{AnimationId, InputEvent};
use crate::input::{ErrorEdge, InputStateMachine};
use crate::renderer::{AnimationRenderer, NullRenderer, PlayOutcome};
use crate::reset::{PendingReset, ResetPolicy};
use crate::shake::ShakeSpec;
use crate::strategy::ActiveIndexStrategy;
use crate::validator::SharedValidator;

/// One cell: its style, what the style painted, and the state it painted.
struct CellView {
    style: Box<dyn CellStyle>,
    appearance: CellAppearance,
    state: CellState,
}

/// A fixed-length passcode entry field.
pub struct PasscodeField {
    input: InputStateMachine,

    /// Cells in visual order.
    cells: Vec<CellView>,

    /// Custom style factory; `None` uses the default underline style.
    style_factory: Option<CellStyleFactory>,
    palette: PasscodePalette,
    animate_selected_cell: bool,

    spacing: f32,
    bounds: Rect,

    reset_policy: ResetPolicy,
    shake_on_error: bool,

    timers: TimerManager,
    pending_reset: PendingReset,

    renderer: Box<dyn AnimationRenderer>,
    /// Shakes the renderer is still playing.
    shakes: SlotMap<AnimationId, ()>,

    // Signals

    /// Signal emitted with the new code after every change.
    pub code_changed: Signal<String>,

    /// Signal emitted with the full code when the last cell is filled.
    pub completed: Signal<String>,

    /// Signal emitted when editing begins.
    pub begin_editing: Signal<()>,

    /// Signal emitted with each shake animation before it is played.
    pub shake_animation_created: Signal<ShakeSpec>,

    /// Signal emitted with the new error flag when it changes.
    pub error_changed: Signal<bool>,
}

static_assertions::assert_impl_all!(PasscodeField: Send);

impl std::fmt::Debug for PasscodeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasscodeField")
            .field("input", &self.input)
            .field("bounds", &self.bounds)
            .field("spacing", &self.spacing)
            .field("reset_policy", &self.reset_policy)
            .field("shake_on_error", &self.shake_on_error)
            .field("reset_pending", &self.pending_reset.is_armed())
            .field("running_shakes", &self.shakes.len())
            .finish_non_exhaustive()
    }
}

impl PasscodeField {
    /// Create a field using the system clock and no animation support.
    pub fn new(config: PasscodeConfig) -> Result<Self> {
        Self::with_parts(config, NullRenderer, Arc::new(SystemClock))
    }

    /// Create a field with a host renderer and clock.
    pub fn with_parts(
        config: PasscodeConfig,
        renderer: impl AnimationRenderer + 'static,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        config.validate()?;
        let direction = config.resolved_direction();

        let mut input = InputStateMachine::new(config.length, config.strategy, direction);
        input.set_ignore_user_input(config.ignore_user_input);
        input.set_validator(config.validator.clone());
        input.set_error(config.is_error);

        let mut field = Self {
            input,
            cells: Vec::new(),
            style_factory: config.style_factory,
            palette: config.palette,
            animate_selected_cell: config.animate_selected_cell,
            spacing: config.spacing,
            bounds: Rect::ZERO,
            reset_policy: config.reset_policy,
            shake_on_error: config.shake_on_error,
            timers: TimerManager::with_clock(clock),
            pending_reset: PendingReset::default(),
            renderer: Box::new(renderer),
            shakes: SlotMap::with_key(),
            code_changed: Signal::new(),
            completed: Signal::new(),
            begin_editing: Signal::new(),
            shake_animation_created: Signal::new(),
            error_changed: Signal::new(),
        };
        field.rebuild_cells();

        tracing::debug!(
            target: "horizon_passcode::field",
            length = field.input.length(),
            ?direction,
            "passcode field created"
        );
        Ok(field)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Handle one event from the host.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::TextChanged { old, new } => self.text_changed(&old, &new),
            InputEvent::BeginEditing => {
                self.user_interaction();
                self.begin_editing.emit(());
            }
            InputEvent::AnimationFinished { id } => {
                if self.shakes.remove(id).is_some() {
                    self.shake_finished();
                } else {
                    tracing::trace!(target: "horizon_passcode::field", ?id, "finish for unknown animation ignored");
                }
            }
            InputEvent::Resized { bounds } => {
                self.bounds = bounds;
                self.layout();
            }
            InputEvent::CellBoundsChanged { index, bounds } => match self.cells.get_mut(index) {
                Some(cell) => cell.style.bounds_changed(&mut cell.appearance, bounds),
                None => {
                    tracing::trace!(target: "horizon_passcode::field", index, "bounds for missing cell ignored");
                }
            },
        }
    }

    fn text_changed(&mut self, old: &str, new: &str) {
        let old_count = old.graphemes(true).count();
        let new_count = new.graphemes(true).count();

        if new_count > old_count {
            let added: String = new.graphemes(true).skip(old_count).collect();
            self.type_text(&added);
        } else if new_count < old_count {
            self.delete_backward();
        }
    }

    /// Whether the host should let a pending text replacement through.
    ///
    /// Deletions (empty candidates) pass unless input is ignored. Anything
    /// else is refused once the code is full, and is otherwise up to the
    /// validator.
    pub fn should_accept_replacement(&self, candidate: &str) -> bool {
        self.input.should_accept_replacement(candidate)
    }

    /// Enter glyphs as if typed, one grapheme at a time.
    ///
    /// Returns the number of glyphs accepted.
    pub fn type_text(&mut self, text: &str) -> usize {
        self.user_interaction();

        let mut accepted = 0;
        for glyph in text.graphemes(true) {
            let outcome = self.input.insert_char(glyph);
            if !outcome.is_accepted() {
                continue;
            }
            accepted += 1;
            self.refresh_cells();

            let code = self.input.code();
            if outcome.is_completed() {
                self.invalidate_reset();
                self.code_changed.emit(code.clone());
                tracing::debug!(target: "horizon_passcode::field", "passcode completed");
                self.completed.emit(code);
            } else {
                self.code_changed.emit(code);
            }
        }
        accepted
    }

    /// Delete the last glyph, as if backspace was pressed.
    ///
    /// Returns the removed glyph.
    pub fn delete_backward(&mut self) -> Option<String> {
        self.user_interaction();
        if self.input.ignore_user_input() {
            return None;
        }

        let glyph = self.input.delete_last()?;
        self.refresh_cells();
        self.code_changed.emit(self.input.code());
        Some(glyph)
    }

    fn user_interaction(&mut self) {
        if self.reset_policy.resets_on_interaction()
            && self.input.is_error()
            && !self.input.ignore_user_input()
        {
            tracing::debug!(target: "horizon_passcode::reset", "error cleared by user interaction");
            self.reset();
        }
    }

    // =========================================================================
    // Error Mode
    // =========================================================================

    /// Whether the field is in error mode.
    pub fn is_error(&self) -> bool {
        self.input.is_error()
    }

    /// Enter or leave error mode.
    ///
    /// Entering error mode plays the shake (when enabled) and, under
    /// [`ResetPolicy::AfterDelay`], arms the reset once the shake has finished.
    /// A new error replaces any reset still pending from an earlier one.
    pub fn set_error(&mut self, error: bool) {
        let Some(edge) = self.input.set_error(error) else {
            return;
        };

        self.invalidate_reset();
        self.refresh_cells();
        self.error_changed.emit(error);

        if edge == ErrorEdge::Raised {
            tracing::debug!(target: "horizon_passcode::field", "error raised");
            if self.shake_on_error {
                self.play_shake();
            } else {
                self.shake_finished();
            }
        } else {
            tracing::debug!(target: "horizon_passcode::field", "error cleared");
        }
    }

    fn play_shake(&mut self) {
        let shake = ShakeSpec::new();
        let id = self.shakes.insert(());
        self.shake_animation_created.emit(shake.clone());

        match self.renderer.play_shake(id, &shake) {
            PlayOutcome::Finished => {
                self.shakes.remove(id);
                self.shake_finished();
            }
            PlayOutcome::Running => {
                tracing::trace!(target: "horizon_passcode::field", ?id, "shake running");
            }
        }
    }

    fn shake_finished(&mut self) {
        if !self.input.is_error() {
            return;
        }
        if let Some(delay) = self.reset_policy.delay() {
            self.pending_reset.arm(&mut self.timers, delay);
        }
    }

    /// Drop the pending timed reset and every running shake, so a late
    /// shake finish cannot arm a new one.
    fn invalidate_reset(&mut self) {
        self.pending_reset.cancel(&mut self.timers);
        for (id, ()) in self.shakes.drain() {
            self.renderer.cancel(id);
        }
    }

    /// Clear the code, every cell, and error mode.
    ///
    /// Any pending timed reset is cancelled.
    pub fn reset(&mut self) {
        self.invalidate_reset();

        let had_code = !self.input.is_empty();
        let was_error = self.input.is_error();
        self.input.reset();
        self.refresh_cells();

        if was_error {
            self.error_changed.emit(false);
        }
        if had_code {
            self.code_changed.emit(String::new());
        }
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Fire expired timers. Call from the host's event loop.
    ///
    /// Returns `true` if a timed reset ran.
    pub fn process_timers(&mut self) -> bool {
        let fired = self.timers.process_expired();
        if !self.pending_reset.take_fired(&fired) {
            return false;
        }
        tracing::debug!(target: "horizon_passcode::reset", "timed reset fired");
        self.reset();
        true
    }

    /// Time until the next timer is due, for scheduling the next wakeup.
    pub fn time_until_next_timer(&mut self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Whether a timed reset is waiting to fire.
    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset.is_armed()
    }

    // =========================================================================
    // Cells
    // =========================================================================

    fn resolved_style_factory(&self) -> CellStyleFactory {
        match &self.style_factory {
            Some(factory) => factory.clone(),
            None => default_style_factory(&self.palette, self.animate_selected_cell),
        }
    }

    /// Recreate every cell and its style.
    fn rebuild_cells(&mut self) {
        let _span = PerfSpan::new("passcode_rebuild_cells");

        let factory = self.resolved_style_factory();
        self.cells = self
            .input
            .cell_flags()
            .into_iter()
            .map(|state| {
                let mut cell = CellView {
                    style: factory(),
                    appearance: CellAppearance::new(),
                    state,
                };
                cell.style.apply(&mut cell.appearance, state);
                cell
            })
            .collect();
        self.layout();

        tracing::debug!(target: "horizon_passcode::field", cells = self.cells.len(), "cells rebuilt");
    }

    /// Push changed cell states to their styles.
    fn refresh_cells(&mut self) {
        let flags = self.input.cell_flags();
        for (cell, state) in self.cells.iter_mut().zip(flags) {
            let previous = std::mem::replace(&mut cell.state, state);
            if previous.error != state.error {
                cell.style.error_changed(&mut cell.appearance, state);
            } else if previous != state {
                cell.style.selection_changed(&mut cell.appearance, state);
            }
        }
    }

    /// Lay the cells out in a row inside the field bounds.
    fn layout(&mut self) {
        let frames = cell_frames(self.bounds, self.cells.len(), self.spacing);
        for (cell, frame) in self.cells.iter_mut().zip(frames) {
            cell.style.bounds_changed(&mut cell.appearance, frame);
        }
    }

    /// Change the cell count. Clears the code and rebuilds every cell.
    pub fn set_length(&mut self, length: usize) -> Result<()> {
        if length == 0 {
            return Err(Error::InvalidLength(length));
        }

        self.invalidate_reset();
        let had_code = !self.input.is_empty();
        self.input.set_length(length);
        self.rebuild_cells();

        if had_code {
            self.code_changed.emit(String::new());
        }
        Ok(())
    }

    /// Replace the cell style. Every cell is rebuilt.
    pub fn set_style_factory(&mut self, factory: CellStyleFactory) {
        self.style_factory = Some(factory);
        self.rebuild_cells();
    }

    /// Whether the default style pulses the selected cell.
    ///
    /// Has no visible effect while a custom style factory is installed.
    pub fn set_animate_selected_cell(&mut self, animate: bool) {
        if self.animate_selected_cell == animate {
            return;
        }
        self.animate_selected_cell = animate;
        if self.style_factory.is_none() {
            self.rebuild_cells();
        }
    }

    pub fn animate_selected_cell(&self) -> bool {
        self.animate_selected_cell
    }

    /// Set the gap between cells and lay them out again.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.spacing = spacing;
        self.layout();
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    // =========================================================================
    // Properties
    // =========================================================================

    pub fn set_strategy(&mut self, strategy: ActiveIndexStrategy) {
        self.input.set_strategy(strategy);
        self.refresh_cells();
    }

    pub fn strategy(&self) -> ActiveIndexStrategy {
        self.input.strategy()
    }

    pub fn set_ignore_user_input(&mut self, ignore: bool) {
        self.input.set_ignore_user_input(ignore);
    }

    pub fn ignore_user_input(&self) -> bool {
        self.input.ignore_user_input()
    }

    pub fn set_validator(&mut self, validator: Option<SharedValidator>) {
        self.input.set_validator(validator);
    }

    pub fn set_reset_policy(&mut self, policy: ResetPolicy) {
        self.reset_policy = policy;
    }

    pub fn reset_policy(&self) -> ResetPolicy {
        self.reset_policy
    }

    pub fn set_shake_on_error(&mut self, shake: bool) {
        self.shake_on_error = shake;
    }

    pub fn shake_on_error(&self) -> bool {
        self.shake_on_error
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The entered code.
    pub fn code(&self) -> String {
        self.input.code()
    }

    /// Number of cells.
    pub fn length(&self) -> usize {
        self.input.length()
    }

    /// Whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.input.is_full()
    }

    pub fn direction(&self) -> LayoutDirection {
        self.input.direction()
    }

    /// Logical active index; equals [`length`](Self::length) when none.
    pub fn active_index(&self) -> usize {
        self.input.active_index()
    }

    /// Visual position of the active cell, if any.
    pub fn active_visual_index(&self) -> Option<usize> {
        self.input.active_cell().map(|i| self.input.visual_index(i))
    }

    /// Semantic state of each cell, in visual order.
    pub fn cell_states(&self) -> Vec<CellSemanticState> {
        self.input.cell_states()
    }

    /// Glyph of each cell, in visual order.
    pub fn glyphs(&self) -> Vec<Option<&str>> {
        self.input.glyphs()
    }

    /// Appearance of the cell at a visual position.
    pub fn appearance(&self, index: usize) -> Option<&CellAppearance> {
        self.cells.get(index).map(|c| &c.appearance)
    }

    /// Appearances of all cells, in visual order.
    pub fn appearances(&self) -> impl Iterator<Item = &CellAppearance> {
        self.cells.iter().map(|c| &c.appearance)
    }

    /// The field bounds last received through [`InputEvent::Resized`].
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The state machine, for inspection.
    pub fn input(&self) -> &InputStateMachine {
        &self.input
    }
}

/// Split `bounds` into `count` equal cells separated by `spacing`.
fn cell_frames(bounds: Rect, count: usize, spacing: f32) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let gaps = spacing * (count - 1) as f32;
    let width = ((bounds.width() - gaps) / count as f32).max(0.0);

    (0..count)
        .map(|i| {
            Rect::new(
                bounds.left() + i as f32 * (width + spacing),
                bounds.top(),
                width,
                bounds.height(),
            )
        })
        .collect()
}
