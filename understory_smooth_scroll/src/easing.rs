// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves mapping normalized time to normalized progress.

use kurbo::{CubicBez, ParamCurve};

/// Bisection steps used to invert the x(t) polynomial of a cubic Bézier timing
/// function. 2^-40 is far below one pixel for any realistic scroll distance.
const BEZIER_SOLVE_STEPS: usize = 40;

/// Ease-in-out cubic: slow start, fast middle, slow end.
///
/// For `t < 0.5` this is `4t³`, otherwise `1 - (-2t + 2)³ / 2`. Input is clamped
/// to `[0, 1]` (`NaN` reads as `0`). The curve is point-symmetric around
/// `(0.5, 0.5)`, so `ease(t) + ease(1 - t) == 1`.
///
/// ```
/// use understory_smooth_scroll::ease_in_out_cubic;
///
/// assert_eq!(ease_in_out_cubic(0.0), 0.0);
/// assert_eq!(ease_in_out_cubic(0.25), 0.0625);
/// assert_eq!(ease_in_out_cubic(0.5), 0.5);
/// assert_eq!(ease_in_out_cubic(1.0), 1.0);
/// ```
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = clamp_unit(t);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t > 0.0 { t.min(1.0) } else { 0.0 }
}

/// An easing curve for scroll animations.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// See [`ease_in_out_cubic`].
    #[default]
    EaseInOutCubic,
    /// A CSS-style `cubic-bezier(x1, y1, x2, y2)` timing function.
    ///
    /// The curve runs from `(0, 0)` to `(1, 1)`. `x1` and `x2` are expected in
    /// `[0, 1]`; [`Easing::cubic_bezier`] clamps them. `y` values may overshoot
    /// to produce a bounce.
    CubicBezier {
        /// X of the first control point.
        x1: f64,
        /// Y of the first control point.
        y1: f64,
        /// X of the second control point.
        x2: f64,
        /// Y of the second control point.
        y2: f64,
    },
}

impl Easing {
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::CubicBezier {
        x1: 0.42,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Creates a cubic Bézier timing function, clamping `x1`/`x2` into `[0, 1]`
    /// so the curve stays a function of time.
    #[must_use]
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier {
            x1: clamp_unit(x1),
            y1,
            x2: clamp_unit(x2),
            y2,
        }
    }

    /// Maps normalized time `t` to normalized progress.
    ///
    /// `t` is clamped to `[0, 1]`; the endpoints always map to exactly `0` and `1`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp_unit(t);
        match self {
            Self::Linear => t,
            Self::EaseInOutCubic => ease_in_out_cubic(t),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let curve = CubicBez::new((0.0, 0.0), (x1, y1), (x2, y2), (1.0, 1.0));
                let (mut lo, mut hi) = (0.0, 1.0);
                for _ in 0..BEZIER_SOLVE_STEPS {
                    let mid = (lo + hi) * 0.5;
                    if curve.eval(mid).x < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                curve.eval((lo + hi) * 0.5).y
            }
        }
    }
}
