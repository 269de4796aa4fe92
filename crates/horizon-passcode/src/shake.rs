//! The error shake animation descriptor.

use std::time::Duration;

use horizon_passcode_style::animation::{Easing, lerp_eased};

/// Horizontal offsets, in points, of the error shake.
pub const SHAKE_KEYFRAMES: [f32; 9] = [-15.0, 15.0, -15.0, 15.0, -12.0, 12.0, -10.0, 10.0, 0.0];

/// Total shake duration.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// A declarative keyframe animation played by an
/// [`AnimationRenderer`](crate::AnimationRenderer) when the field enters
/// error mode.
///
/// Keyframes are evenly spaced over [`duration`](Self::duration) and applied
/// additively to the animated property.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeSpec {
    /// Property the offsets apply to.
    pub key_path: &'static str,
    /// Offsets at each keyframe.
    pub keyframes: Vec<f32>,
    /// Total duration.
    pub duration: Duration,
    /// Timing between keyframes.
    pub easing: Easing,
    /// Whether offsets add to the current value instead of replacing it.
    pub additive: bool,
}

impl Default for ShakeSpec {
    fn default() -> Self {
        Self {
            key_path: "position.x",
            keyframes: SHAKE_KEYFRAMES.to_vec(),
            duration: SHAKE_DURATION,
            easing: Easing::Linear,
            additive: true,
        }
    }
}

impl ShakeSpec {
    /// The standard horizontal shake.
    pub fn new() -> Self {
        Self::default()
    }

    /// The offset at `progress` through the animation (clamped to `0..=1`).
    ///
    /// ```
    /// use horizon_passcode::ShakeSpec;
    ///
    /// let shake = ShakeSpec::new();
    /// assert_eq!(shake.offset_at(0.0), -15.0);
    /// assert_eq!(shake.offset_at(1.0), 0.0);
    /// ```
    pub fn offset_at(&self, progress: f32) -> f32 {
        let Some((&last, _)) = self.keyframes.split_last() else {
            return 0.0;
        };
        let segments = self.keyframes.len() - 1;
        if segments == 0 {
            return last;
        }

        let position = progress.clamp(0.0, 1.0) * segments as f32;
        let index = (position.floor() as usize).min(segments - 1);
        let local = position - index as f32;
        lerp_eased(
            self.easing,
            self.keyframes[index],
            self.keyframes[index + 1],
            local,
        )
    }

    /// The offset `elapsed` into the animation.
    pub fn offset_after(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return self.offset_at(1.0);
        }
        self.offset_at(elapsed.as_secs_f32() / self.duration.as_secs_f32())
    }
}
