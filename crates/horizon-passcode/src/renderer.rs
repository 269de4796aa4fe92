//! The host animation primitive.

use crate::event::AnimationId;
use crate::shake::ShakeSpec;

/// Whether a started animation already completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayOutcome {
    /// Done; no [`InputEvent::AnimationFinished`](crate::InputEvent::AnimationFinished) follows.
    Finished,
    /// Still running; the host sends `AnimationFinished { id }` when it ends.
    Running,
}

/// Plays declarative animations on the host's view.
pub trait AnimationRenderer: Send {
    /// Start the shake animation.
    fn play_shake(&mut self, id: AnimationId, shake: &ShakeSpec) -> PlayOutcome;

    /// Stop an animation early. No finish event is expected afterwards.
    fn cancel(&mut self, _id: AnimationId) {}
}

/// A renderer without animation support. Every animation finishes at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl AnimationRenderer for NullRenderer {
    fn play_shake(&mut self, _id: AnimationId, _shake: &ShakeSpec) -> PlayOutcome {
        PlayOutcome::Finished
    }
}
