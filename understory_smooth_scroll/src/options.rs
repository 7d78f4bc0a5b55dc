// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Easing;

/// Default animation duration, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 650.0;

/// Options recognized by [`SmoothScroller::scroll_to`](crate::SmoothScroller::scroll_to).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollOptions {
    /// Animation duration in milliseconds.
    pub duration: f64,
    /// Pixels subtracted from the target position, typically the height of a
    /// fixed header.
    pub offset: f64,
    /// Rewrite the navigation fragment in place once the animation completes.
    ///
    /// Only applies when the target was given as a fragment identifier.
    pub update_hash: bool,
    /// Easing curve.
    pub easing: Easing,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION_MS,
            offset: 0.0,
            update_hash: false,
            easing: Easing::EaseInOutCubic,
        }
    }
}

impl ScrollOptions {
    /// Returns a copy with the given duration in milliseconds.
    #[must_use]
    pub fn with_duration(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    /// Returns a copy with the given header offset in pixels.
    #[must_use]
    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// Returns a copy with fragment rewriting enabled or disabled.
    #[must_use]
    pub fn with_update_hash(self, update_hash: bool) -> Self {
        Self {
            update_hash,
            ..self
        }
    }

    /// Returns a copy with the given easing curve.
    #[must_use]
    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }
}
