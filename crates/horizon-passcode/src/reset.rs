//! What happens to the entered code after the field enters error mode.

use std::time::Duration;

use horizon_passcode_core::{TimerId, TimerManager};
use serde::{Deserialize, Serialize};

/// Reset behavior following an error.
///
/// In settings files the policy is written as a tagged table:
///
/// ```toml
/// [reset_policy]
/// kind = "after_delay"
/// delay_ms = 1500
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResetPolicy {
    /// The caller clears the error itself.
    #[default]
    None,
    /// The next keystroke or begin-editing clears the code and error first.
    OnNextUserInteraction,
    /// Clear the code and error a fixed time after the error was shown.
    AfterDelay {
        #[serde(rename = "delay_ms", with = "duration_ms")]
        delay: Duration,
    },
}

impl ResetPolicy {
    /// Reset after `delay`.
    pub const fn after_delay(delay: Duration) -> Self {
        Self::AfterDelay { delay }
    }

    /// The configured delay, if this is a timed policy.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::AfterDelay { delay } => Some(delay),
            _ => None,
        }
    }

    /// Whether user interaction clears an error.
    pub fn resets_on_interaction(self) -> bool {
        matches!(self, Self::OnNextUserInteraction)
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Tracks the single outstanding reset timer of a field.
///
/// Every arm or cancel bumps a generation counter. A firing only counts when
/// it belongs to the timer armed by the current generation, so a timer that
/// outlived a manual reset or a newer error edge is ignored.
#[derive(Debug, Default)]
pub(crate) struct PendingReset {
    armed: Option<(TimerId, u64)>,
    generation: u64,
}

impl PendingReset {
    /// Arm a reset in `delay`, replacing any pending one.
    pub fn arm(&mut self, timers: &mut TimerManager, delay: Duration) {
        self.cancel(timers);
        let id = timers.start_one_shot(delay);
        self.armed = Some((id, self.generation));
        tracing::debug!(target: "horizon_passcode::reset", ?delay, generation = self.generation, "reset armed");
    }

    /// Cancel the pending reset, if any.
    pub fn cancel(&mut self, timers: &mut TimerManager) {
        self.generation = self.generation.wrapping_add(1);
        if let Some((id, _)) = self.armed.take() {
            // Already fired timers are gone from the manager.
            let _ = timers.stop(id);
            tracing::trace!(target: "horizon_passcode::reset", "pending reset cancelled");
        }
    }

    /// Whether `fired` contains the current reset timer. Consumes it if so.
    pub fn take_fired(&mut self, fired: &[TimerId]) -> bool {
        match self.armed {
            Some((id, generation)) if generation == self.generation && fired.contains(&id) => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a reset is pending.
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use horizon_passcode_core::ManualClock;

    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    struct Wrapper {
        reset_policy: ResetPolicy,
    }

    #[test]
    fn test_policy_toml() {
        let parsed: Wrapper =
            toml::from_str("[reset_policy]\nkind = \"after_delay\"\ndelay_ms = 1500\n").unwrap();
        assert_eq!(parsed.reset_policy, ResetPolicy::after_delay(Duration::from_millis(1500)));

        let parsed: Wrapper =
            toml::from_str("[reset_policy]\nkind = \"on_next_user_interaction\"\n").unwrap();
        assert!(parsed.reset_policy.resets_on_interaction());

        let text = toml::to_string(&Wrapper {
            reset_policy: ResetPolicy::after_delay(Duration::from_secs(2)),
        })
        .unwrap();
        assert!(text.contains("delay_ms = 2000"));
    }

    #[test]
    fn test_delay() {
        assert_eq!(ResetPolicy::None.delay(), None);
        assert_eq!(
            ResetPolicy::after_delay(Duration::from_millis(10)).delay(),
            Some(Duration::from_millis(10))
        );
    }

    #[test]
    fn test_pending_reset_fires_once() {
        let clock = ManualClock::new();
        let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
        let mut pending = PendingReset::default();

        pending.arm(&mut timers, Duration::from_millis(100));
        assert!(pending.is_armed());

        clock.advance(Duration::from_millis(100));
        let fired = timers.process_expired();
        assert!(pending.take_fired(&fired));
        assert!(!pending.take_fired(&fired));
        assert!(!pending.is_armed());
    }

    #[test]
    fn test_rearm_replaces_previous_timer() {
        let clock = ManualClock::new();
        let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
        let mut pending = PendingReset::default();

        pending.arm(&mut timers, Duration::from_millis(100));
        clock.advance(Duration::from_millis(60));
        pending.arm(&mut timers, Duration::from_millis(100));
        assert_eq!(timers.active_count(), 1);

        clock.advance(Duration::from_millis(60));
        assert!(!pending.take_fired(&timers.process_expired()));

        clock.advance(Duration::from_millis(40));
        assert!(pending.take_fired(&timers.process_expired()));
    }

    #[test]
    fn test_cancel_discards_timer() {
        let clock = ManualClock::new();
        let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
        let mut pending = PendingReset::default();

        pending.arm(&mut timers, Duration::from_millis(100));
        pending.cancel(&mut timers);
        clock.advance(Duration::from_millis(200));

        assert!(timers.process_expired().is_empty());
        assert!(!pending.is_armed());
    }
}
