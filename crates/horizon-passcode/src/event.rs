//! Input events delivered to a [`PasscodeField`](crate::PasscodeField).
//!
//! The host's text-input bridge and renderer translate their native
//! callbacks into these events and pass them to
//! [`PasscodeField::handle_event`](crate::PasscodeField::handle_event).

use horizon_passcode_style::Rect;

slotmap::new_key_type! {
    /// Identifies one played shake animation.
    pub struct AnimationId;
}

/// An event from the host.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The hidden text buffer changed from `old` to `new`.
    ///
    /// More glyphs in `new` than in `old` inserts the trailing glyphs; fewer
    /// deletes one glyph.
    TextChanged { old: String, new: String },
    /// The field gained keyboard focus.
    BeginEditing,
    /// The renderer finished playing an animation.
    AnimationFinished { id: AnimationId },
    /// The field was laid out at new bounds. Cells are laid out in a row
    /// inside these bounds using the configured spacing.
    Resized { bounds: Rect },
    /// A single cell was given new bounds by the host's own layout.
    CellBoundsChanged { index: usize, bounds: Rect },
}
