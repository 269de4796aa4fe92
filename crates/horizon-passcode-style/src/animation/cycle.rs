//! Continuous color-cycle animation descriptor.

use std::time::Duration;

use super::easing::{Easing, ease};
use crate::types::Color;

/// Period used by built-in decorations when none is configured.
pub const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_secs(2);

/// A repeating cross-fade through a list of colors.
///
/// This is a declarative descriptor: renderers with native keyframe support
/// hand it to the platform, others call [`sample`](Self::sample) once per
/// frame. One full period visits every color once and wraps back to the
/// first.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorCycle {
    colors: Vec<Color>,
    period: Duration,
    easing: Easing,
}

impl ColorCycle {
    /// Create a cycle through `colors` taking `period` per full loop.
    pub fn new(colors: Vec<Color>, period: Duration) -> Self {
        Self {
            colors,
            period,
            easing: Easing::Linear,
        }
    }

    /// Use a different easing for each color-to-color fade.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The colors visited, in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Time for one full loop.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Easing applied within each fade.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The color shown `elapsed` after the animation started.
    pub fn sample(&self, elapsed: Duration) -> Color {
        let count = self.colors.len();
        match count {
            0 => return Color::TRANSPARENT,
            1 => return self.colors[0],
            _ => {}
        }
        if self.period.is_zero() {
            return self.colors[0];
        }

        let phase = (elapsed.as_secs_f64() % self.period.as_secs_f64()) / self.period.as_secs_f64();
        let position = phase * count as f64;
        let index = (position.floor() as usize).min(count - 1);
        let t = (position - index as f64) as f32;

        let from = self.colors[index];
        let to = self.colors[(index + 1) % count];
        from.lerp(to, ease(self.easing, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_hits_each_color_at_segment_start() {
        let cycle = ColorCycle::new(vec![Color::BLACK, Color::WHITE], Duration::from_secs(2));
        assert_eq!(cycle.sample(Duration::ZERO), Color::BLACK);
        assert_eq!(cycle.sample(Duration::from_secs(1)), Color::WHITE);
        assert_eq!(cycle.sample(Duration::from_secs(2)), Color::BLACK);
    }

    #[test]
    fn test_sample_cross_fades() {
        let cycle = ColorCycle::new(vec![Color::BLACK, Color::WHITE], Duration::from_secs(2));
        assert_eq!(cycle.sample(Duration::from_millis(500)), Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_degenerate_cycles() {
        let empty = ColorCycle::new(Vec::new(), DEFAULT_CYCLE_PERIOD);
        assert_eq!(empty.sample(Duration::from_secs(1)), Color::TRANSPARENT);

        let single = ColorCycle::new(vec![Color::RED], Duration::ZERO);
        assert_eq!(single.sample(Duration::from_secs(1)), Color::RED);
    }
}
