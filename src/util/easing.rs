//! Easing functions for door swing interpolation.
//!
//! Every curve maps `t` in [0, 1] to an eased value with `f(0) = 0` and
//! `f(1) = 1`. Curves are not required to be monotone: [`BounceOut`]
//! drops back below 1 between its bounces before settling.
//!
//! [`BounceOut`]: EasingFunction::BounceOut

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bounce amplitude coefficient.
const BOUNCE_N: f32 = 7.5625;
/// Bounce segment divisor.
const BOUNCE_D: f32 = 2.75;

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First inner control point.
        c1: f32,
        /// Second inner control point.
        c2: f32,
    },
    /// Three decaying bounces against the end value.
    BounceOut,
}

impl EasingFunction {
    /// Default easing: the bounce-out swing of the opening doors.
    pub const DEFAULT: EasingFunction = EasingFunction::BounceOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
            EasingFunction::BounceOut => bounce_out(t),
        }
    }

    /// Whether the curve never decreases over [0, 1].
    #[must_use]
    pub fn is_monotone(&self) -> bool {
        match self {
            EasingFunction::Linear
            | EasingFunction::QuadraticIn
            | EasingFunction::QuadraticOut => true,
            // Nondecreasing Bernstein coefficients 0, c1, c2, 1
            EasingFunction::CubicHermite { c1, c2 } => {
                0.0 <= *c1 && c1 <= c2 && *c2 <= 1.0
            }
            EasingFunction::BounceOut => false,
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_bounce_out_endpoints() {
        let bounce = EasingFunction::BounceOut;
        assert_eq!(bounce.evaluate(0.0), 0.0);
        assert!((bounce.evaluate(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounce_out_touches_one_at_first_impact() {
        let bounce = EasingFunction::BounceOut;
        assert!((bounce.evaluate(1.0 / BOUNCE_D) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_bounce_out_dips_between_impacts() {
        // Apex of the first rebound sits at t = 1.5 / 2.75 with value 0.75
        let bounce = EasingFunction::BounceOut;
        let apex = bounce.evaluate(1.5 / BOUNCE_D);
        assert!((apex - 0.75).abs() < 1e-5, "apex was {apex}");
        assert!(!bounce.is_monotone());
    }

    #[test]
    fn test_bounce_out_stays_in_unit_range() {
        let bounce = EasingFunction::BounceOut;
        for i in 0..=200 {
            let v = bounce.evaluate(i as f32 / 200.0);
            assert!((0.0..=1.0 + 1e-5).contains(&v), "value {v} at step {i}");
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let bounce = EasingFunction::BounceOut;
        assert_eq!(bounce.evaluate(-0.5), 0.0);
        assert!((bounce.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.0), 0.0);
        assert_eq!(quad_out.evaluate(0.5), 0.75);
        assert_eq!(quad_out.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_cubic_hermite_ease_out_shape() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert!(hermite.evaluate(0.25) > 0.25);
        assert!(hermite.is_monotone());
    }

    #[test]
    fn test_default_is_bounce_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::BounceOut);
    }

    #[test]
    fn test_toml_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let w: Wrapper = toml::from_str("easing = \"bounce_out\"").unwrap();
        assert_eq!(w.easing, EasingFunction::BounceOut);
        let w: Wrapper =
            toml::from_str("easing = { cubic_hermite = { c1 = 0.5, c2 = 1.0 } }")
                .unwrap();
        assert_eq!(w.easing, EasingFunction::CubicHermite { c1: 0.5, c2: 1.0 });
    }
}
