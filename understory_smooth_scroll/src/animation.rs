// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-sampled scroll animation state.
//!
//! ## Minimal example
//!
//! ```
//! use understory_smooth_scroll::{Easing, ScrollAnimation};
//!
//! // Animate from 500px to 2928px over 650ms, starting at t = 1000ms.
//! let mut anim = ScrollAnimation::new(500.0, 2928.0, 1000.0, 650.0, Easing::EaseInOutCubic);
//!
//! let halfway = anim.sample(1325.0);
//! assert_eq!(halfway.progress, 0.5);
//! assert_eq!(halfway.offset, 500.0 + (2928.0 - 500.0) * 0.5);
//!
//! let last = anim.sample(1650.0);
//! assert!(last.finished);
//! assert_eq!(last.offset, 2928.0);
//! ```

use crate::Easing;

/// One sampled frame of a [`ScrollAnimation`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollFrame {
    /// Scroll offset to apply for this frame.
    pub offset: f64,
    /// Normalized time in `[0, 1]`.
    pub progress: f64,
    /// `true` once `progress` reached `1`; `offset` is then exactly the target.
    pub finished: bool,
}

/// State of one in-flight scroll animation.
///
/// Times are milliseconds on a monotonic clock (for example the timestamp a
/// browser passes to `requestAnimationFrame` callbacks).
///
/// `progress` never decreases: a sample with an earlier timestamp than a
/// previous one repeats the previous progress instead of moving backwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    start_offset: f64,
    target_offset: f64,
    start_time: f64,
    duration: f64,
    easing: Easing,
    progress: f64,
}

impl ScrollAnimation {
    /// Creates an animation from `start_offset` to `target_offset`.
    ///
    /// A `duration` that is zero, negative, or `NaN` finishes on the first sample.
    #[must_use]
    pub fn new(
        start_offset: f64,
        target_offset: f64,
        start_time: f64,
        duration: f64,
        easing: Easing,
    ) -> Self {
        Self {
            start_offset,
            target_offset,
            start_time,
            duration,
            easing,
            progress: 0.0,
        }
    }

    /// Scroll offset at the time the animation was created.
    #[must_use]
    pub fn start_offset(&self) -> f64 {
        self.start_offset
    }

    /// Final scroll offset.
    #[must_use]
    pub fn target_offset(&self) -> f64 {
        self.target_offset
    }

    /// Clock time at which the animation started.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Duration in milliseconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Easing curve applied to progress.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Highest normalized time sampled so far.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Returns `true` once a sample reached the end.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Samples the animation at clock time `now`.
    pub fn sample(&mut self, now: f64) -> ScrollFrame {
        let raw = if self.duration > 0.0 {
            (now - self.start_time) / self.duration
        } else {
            1.0
        };
        let raw = if raw > 0.0 { raw.min(1.0) } else { 0.0 };
        self.progress = self.progress.max(raw);

        let finished = self.is_finished();
        let offset = if finished {
            self.target_offset
        } else {
            let eased = self.easing.apply(self.progress);
            self.start_offset + (self.target_offset - self.start_offset) * eased
        };
        ScrollFrame {
            offset,
            progress: self.progress,
            finished,
        }
    }
}
