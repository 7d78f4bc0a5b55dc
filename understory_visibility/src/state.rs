// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-region visibility state: flips on threshold crossings only.
//!
//! ## Minimal example
//!
//! ```
//! use understory_visibility::{ObserveOptions, VisibilityState};
//!
//! let opts = ObserveOptions::default(); // threshold 0.15
//! let mut state = VisibilityState::new();
//!
//! assert_eq!(state.update(0.05, &opts), None);
//! assert_eq!(state.update(0.20, &opts), Some(true));
//! // Still above the threshold: no duplicate flip.
//! assert_eq!(state.update(0.80, &opts), None);
//! assert_eq!(state.update(0.0, &opts), Some(false));
//! ```

use crate::ObserveOptions;

/// Visibility of one tracked region.
///
/// Starts not visible. [`VisibilityState::update`] reports a transition only
/// when the region crosses the threshold, so callers can replay an entrance
/// animation on every re-entry without filtering duplicates themselves.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    is_visible: bool,
}

impl VisibilityState {
    /// Creates a state that is not visible.
    #[must_use]
    pub const fn new() -> Self {
        Self { is_visible: false }
    }

    /// Returns the current visibility.
    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.is_visible
    }

    /// Sets visibility directly, returning `Some(visible)` if it changed.
    pub fn set(&mut self, visible: bool) -> Option<bool> {
        if self.is_visible == visible {
            return None;
        }
        self.is_visible = visible;
        Some(visible)
    }

    /// Feeds a fresh intersection ratio, returning `Some(visible)` on a flip.
    pub fn update(&mut self, ratio: f64, options: &ObserveOptions) -> Option<bool> {
        self.set(options.is_visible_at(ratio))
    }

    /// Returns to the initial, not-visible state without reporting a change.
    pub fn reset(&mut self) {
        self.is_visible = false;
    }
}
