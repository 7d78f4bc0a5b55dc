// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from observation options to the strings and values the DOM expects.

use alloc::format;
use alloc::string::String;

use understory_visibility::RootMargin;

use crate::ObserveError;

/// Formats a root margin as a CSS margin list in pixels (`"top right bottom left"`).
///
/// ```
/// use understory_scroll_web::root_margin_css;
/// use understory_visibility::RootMargin;
///
/// assert_eq!(root_margin_css(RootMargin::symmetric(40.0, 0.0)), "40px 0px 40px 0px");
/// ```
#[must_use]
pub fn root_margin_css(margin: RootMargin) -> String {
    format!(
        "{}px {}px {}px {}px",
        margin.top, margin.right, margin.bottom, margin.left
    )
}

/// Checks that a threshold is acceptable to `IntersectionObserver`.
///
/// Unlike [`understory_visibility::ObserveOptions::new`], which clamps, the
/// browser rejects out-of-range thresholds, so they are reported here.
pub fn validate_threshold(threshold: f64) -> Result<f64, ObserveError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ObserveError::InvalidThreshold(threshold))
    }
}
