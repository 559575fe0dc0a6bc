//! A single scalar interpolation advanced by elapsed frame time.

use std::time::Duration;

use crate::util::easing::EasingFunction;

/// Result of advancing a [`Tween`] by one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Still running; carries the eased value for this frame.
    Running(f32),
    /// Reached its end value on this frame.
    Finished(f32),
}

impl TweenStep {
    /// The interpolated value carried by this step.
    #[must_use]
    pub fn value(self) -> f32 {
        match self {
            Self::Running(v) | Self::Finished(v) => v,
        }
    }

    /// Whether the tween reached its end on this step.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Interpolates one scalar from `from` to `to` over a fixed duration.
///
/// Time only moves through [`advance`](Self::advance); there is no
/// internal clock, so the owner decides what a frame is.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    easing: EasingFunction,
    elapsed: Duration,
}

impl Tween {
    /// Tween from `from` to `to` over `duration`, shaped by `easing`.
    #[must_use]
    pub fn new(
        from: f32,
        to: f32,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            easing,
            elapsed: Duration::ZERO,
        }
    }

    /// Linear time fraction (0.0 to 1.0). Monotone regardless of easing.
    #[must_use]
    pub fn linear_t(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Current eased value. Exactly `to` once finished.
    #[must_use]
    pub fn value(&self) -> f32 {
        let t = self.linear_t();
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.evaluate(t)
    }

    /// Whether the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt`, clamping at the end of the tween.
    pub fn advance(&mut self, dt: Duration) -> TweenStep {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        let value = self.value();
        if self.is_finished() {
            TweenStep::Finished(value)
        } else {
            TweenStep::Running(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(from: f32, to: f32, ms: u64) -> Tween {
        Tween::new(
            from,
            to,
            Duration::from_millis(ms),
            EasingFunction::Linear,
        )
    }

    #[test]
    fn test_tween_progress() {
        let mut tween = linear(0.0, 10.0, 100);
        assert_eq!(tween.value(), 0.0);

        let step = tween.advance(Duration::from_millis(50));
        assert_eq!(step, TweenStep::Running(5.0));

        let step = tween.advance(Duration::from_millis(50));
        assert_eq!(step, TweenStep::Finished(10.0));
        assert!(tween.is_finished());
    }

    #[test]
    fn test_tween_overshoot_clamps() {
        let mut tween = linear(1.0, 0.0, 100);
        let step = tween.advance(Duration::from_secs(5));
        assert!(step.is_finished());
        assert_eq!(step.value(), 0.0);
        assert_eq!(tween.linear_t(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut tween = linear(0.0, 1.0, 0);
        assert!(tween.is_finished());
        assert_eq!(tween.advance(Duration::ZERO), TweenStep::Finished(1.0));
    }

    #[test]
    fn test_bounce_out_lands_exactly_on_target() {
        let mut tween = Tween::new(
            0.3,
            1.0,
            Duration::from_millis(2000),
            EasingFunction::BounceOut,
        );
        let mut last = TweenStep::Running(0.3);
        for _ in 0..125 {
            last = tween.advance(Duration::from_millis(16));
        }
        assert_eq!(last, TweenStep::Finished(1.0));
    }

    #[test]
    fn test_linear_t_is_monotone_under_bounce() {
        let mut tween = Tween::new(
            0.0,
            1.0,
            Duration::from_millis(1000),
            EasingFunction::BounceOut,
        );
        let mut previous = tween.linear_t();
        while !tween.is_finished() {
            let _ = tween.advance(Duration::from_millis(7));
            assert!(tween.linear_t() >= previous);
            previous = tween.linear_t();
        }
    }
}
