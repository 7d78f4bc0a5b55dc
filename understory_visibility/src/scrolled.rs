// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scrolled-past toggle for sticky headers.
//!
//! A navigation bar often switches to a more solid style once the page has
//! scrolled a little. [`ScrolledState`] reports that switch as a transition so
//! the style only changes on crossings.
//!
//! ```
//! use understory_visibility::ScrolledState;
//!
//! let mut header = ScrolledState::default(); // 12px
//! assert_eq!(header.update(0.0), None);
//! assert_eq!(header.update(40.0), Some(true));
//! assert_eq!(header.update(300.0), None);
//! assert_eq!(header.update(12.0), Some(false));
//! ```

/// Default scroll distance, in pixels, past which the page counts as scrolled.
pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 12.0;

/// Tracks whether the scroll offset is past a threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrolledState {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrolledState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLLED_THRESHOLD)
    }
}

impl ScrolledState {
    /// Creates a toggle that reports scrolled once the offset is strictly
    /// greater than `threshold`.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Returns the configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Returns `true` if the last offset was past the threshold.
    #[must_use]
    pub const fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Feeds the current scroll offset, returning `Some(scrolled)` on a flip.
    pub fn update(&mut self, offset: f64) -> Option<bool> {
        let scrolled = offset > self.threshold;
        if scrolled == self.scrolled {
            return None;
        }
        self.scrolled = scrolled;
        Some(scrolled)
    }
}
