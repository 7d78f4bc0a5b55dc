// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation options: visibility threshold and root margin.

use kurbo::Rect;

/// Default fraction of a region that must be visible to count as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.15;

/// Default vertical root margin, in pixels.
pub const DEFAULT_VERTICAL_MARGIN: f64 = 40.0;

/// Per-edge adjustment of the viewport test box, in CSS edge order.
///
/// Positive values grow the viewport so regions count as visible slightly
/// before they are on-screen; negative values shrink it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootMargin {
    /// Adjustment applied to the top edge.
    pub top: f64,
    /// Adjustment applied to the right edge.
    pub right: f64,
    /// Adjustment applied to the bottom edge.
    pub bottom: f64,
    /// Adjustment applied to the left edge.
    pub left: f64,
}

impl RootMargin {
    /// No adjustment: the test box is exactly the viewport.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Creates a margin from per-edge values in CSS order (top, right, bottom, left).
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates a margin with the same value on every edge.
    #[must_use]
    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Creates a margin with one value for top/bottom and one for left/right.
    #[must_use]
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Applies the margin to a viewport rectangle.
    ///
    /// Negative margins that would invert the rectangle collapse it to a
    /// zero-area rectangle at the midpoint of the inverted axis.
    #[must_use]
    pub fn apply(self, viewport: Rect) -> Rect {
        let viewport = viewport.abs();
        let (x0, x1) = collapse(viewport.x0 - self.left, viewport.x1 + self.right);
        let (y0, y1) = collapse(viewport.y0 - self.top, viewport.y1 + self.bottom);
        Rect::new(x0, y0, x1, y1)
    }
}

fn collapse(start: f64, end: f64) -> (f64, f64) {
    if end < start {
        let mid = (start + end) * 0.5;
        (mid, mid)
    } else {
        (start, end)
    }
}

/// Options recognized when attaching a region.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserveOptions {
    /// Fraction of the region's area, in `[0, 1]`, that must intersect the
    /// test box for the region to be visible.
    ///
    /// A threshold of `0` means "any overlap at all".
    threshold: f64,
    /// Adjustment applied to the viewport before intersecting.
    pub root_margin: RootMargin,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::symmetric(DEFAULT_VERTICAL_MARGIN, 0.0),
        }
    }
}

impl ObserveOptions {
    /// Creates options with a normalized threshold.
    ///
    /// Thresholds are clamped into `[0, 1]`; non-finite values fall back to
    /// [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new(threshold: f64, root_margin: RootMargin) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            root_margin,
        }
    }

    /// Returns a copy with the given (normalized) threshold.
    #[must_use]
    pub fn with_threshold(self, threshold: f64) -> Self {
        Self {
            threshold: normalize_threshold(threshold),
            ..self
        }
    }

    /// Visible-area fraction required for the region to count as visible.
    ///
    /// Always in `[0, 1]`, even for options that were deserialized.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        normalize_threshold(self.threshold)
    }

    /// Returns a copy with the given root margin.
    #[must_use]
    pub fn with_root_margin(self, root_margin: RootMargin) -> Self {
        Self {
            root_margin,
            ..self
        }
    }

    /// Returns `true` if an intersection ratio counts as visible under these options.
    #[must_use]
    pub fn is_visible_at(&self, ratio: f64) -> bool {
        let threshold = self.threshold();
        if threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= threshold
        }
    }
}

fn normalize_threshold(threshold: f64) -> f64 {
    if threshold.is_finite() {
        threshold.clamp(0.0, 1.0)
    } else {
        DEFAULT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{DEFAULT_THRESHOLD, ObserveOptions, RootMargin};

    #[test]
    fn positive_margin_expands_viewport() {
        let vp = Rect::new(0.0, 100.0, 800.0, 700.0);
        let grown = RootMargin::new(10.0, 20.0, 30.0, 40.0).apply(vp);
        assert_eq!(grown, Rect::new(-40.0, 90.0, 820.0, 730.0));
    }

    #[test]
    fn negative_margin_collapses_instead_of_inverting() {
        let vp = Rect::new(0.0, 0.0, 100.0, 100.0);
        let shrunk = RootMargin::uniform(-80.0).apply(vp);
        assert_eq!(shrunk.area(), 0.0);
        assert_eq!(shrunk.x0, 50.0);
        assert_eq!(shrunk.y0, 50.0);
    }

    #[test]
    fn threshold_is_normalized() {
        let opts = ObserveOptions::new(1.5, RootMargin::ZERO);
        assert_eq!(opts.threshold(), 1.0);
        let opts = opts.with_threshold(-0.2);
        assert_eq!(opts.threshold(), 0.0);
        let opts = opts.with_threshold(f64::NAN);
        assert_eq!(opts.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn unnormalized_threshold_still_crosses() {
        // Field-level construction, as a deserializer would do it.
        let opts = ObserveOptions {
            threshold: f64::NAN,
            root_margin: RootMargin::ZERO,
        };
        assert_eq!(opts.threshold(), DEFAULT_THRESHOLD);
        assert!(opts.is_visible_at(1.0));
        assert!(opts.is_visible_at(DEFAULT_THRESHOLD));
        assert!(!opts.is_visible_at(0.0));

        let opts = ObserveOptions {
            threshold: 4.0,
            root_margin: RootMargin::ZERO,
        };
        assert!(opts.is_visible_at(1.0));
    }

    #[test]
    fn zero_threshold_means_any_overlap() {
        let opts = ObserveOptions::default().with_threshold(0.0);
        assert!(!opts.is_visible_at(0.0));
        assert!(opts.is_visible_at(0.001));
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let opts = ObserveOptions::default();
        assert!(opts.is_visible_at(0.15));
        assert!(!opts.is_visible_at(0.149));
    }
}
