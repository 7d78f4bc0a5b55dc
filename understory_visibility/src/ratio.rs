// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Intersection ratio between a region and a margin-adjusted viewport.

use kurbo::Rect;

use crate::RootMargin;

/// Returns the fraction of `region`'s area that overlaps `viewport` after
/// applying `margin` to the viewport.
///
/// The result is in `[0, 1]`. A zero-area region (for example an empty anchor)
/// reports `1.0` when it lies inside the adjusted viewport, edges included, and
/// `0.0` otherwise.
///
/// ```
/// use kurbo::Rect;
/// use understory_visibility::{RootMargin, intersection_ratio};
///
/// let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
/// // Lower half of the region is on-screen.
/// let region = Rect::new(0.0, 500.0, 800.0, 700.0);
/// assert_eq!(intersection_ratio(region, viewport, RootMargin::ZERO), 0.5);
/// ```
#[must_use]
pub fn intersection_ratio(region: Rect, viewport: Rect, margin: RootMargin) -> f64 {
    let root = margin.apply(viewport);
    let region = region.abs();
    let area = region.area();
    if area <= 0.0 {
        return if contains_inclusive(root, region) {
            1.0
        } else {
            0.0
        };
    }
    let overlap = region.intersect(root).area();
    (overlap / area).clamp(0.0, 1.0)
}

fn contains_inclusive(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 && inner.x1 <= outer.x1 && inner.y0 >= outer.y0 && inner.y1 <= outer.y1
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::intersection_ratio;
    use crate::RootMargin;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1000.0, 800.0);

    #[test]
    fn fully_inside_is_one() {
        let r = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(intersection_ratio(r, VIEWPORT, RootMargin::ZERO), 1.0);
    }

    #[test]
    fn fully_outside_is_zero() {
        let r = Rect::new(0.0, 900.0, 1000.0, 1200.0);
        assert_eq!(intersection_ratio(r, VIEWPORT, RootMargin::ZERO), 0.0);
    }

    #[test]
    fn touching_edge_is_zero_for_non_degenerate_region() {
        let r = Rect::new(0.0, 800.0, 1000.0, 900.0);
        assert_eq!(intersection_ratio(r, VIEWPORT, RootMargin::ZERO), 0.0);
    }

    #[test]
    fn margin_pulls_region_in_early() {
        // Region starts 20px below the fold.
        let r = Rect::new(0.0, 820.0, 1000.0, 920.0);
        assert_eq!(intersection_ratio(r, VIEWPORT, RootMargin::ZERO), 0.0);
        let early = intersection_ratio(r, VIEWPORT, RootMargin::symmetric(40.0, 0.0));
        assert!((early - 0.2).abs() < 1e-9);
    }

    #[test]
    fn negative_margin_delays_visibility() {
        let r = Rect::new(0.0, 750.0, 1000.0, 850.0);
        let ratio = intersection_ratio(r, VIEWPORT, RootMargin::symmetric(-50.0, 0.0));
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn inverted_region_is_normalized() {
        let r = Rect::new(200.0, 200.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(r, VIEWPORT, RootMargin::ZERO), 1.0);
    }

    #[test]
    fn zero_area_region_uses_containment() {
        let inside = Rect::new(10.0, 10.0, 10.0, 10.0);
        let on_edge = Rect::new(0.0, 800.0, 1000.0, 800.0);
        let outside = Rect::new(10.0, 900.0, 10.0, 900.0);
        assert_eq!(intersection_ratio(inside, VIEWPORT, RootMargin::ZERO), 1.0);
        assert_eq!(intersection_ratio(on_edge, VIEWPORT, RootMargin::ZERO), 1.0);
        assert_eq!(intersection_ratio(outside, VIEWPORT, RootMargin::ZERO), 0.0);
    }
}
