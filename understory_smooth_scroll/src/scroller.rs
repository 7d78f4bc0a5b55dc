// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-owner scroll coordinator.
//!
//! ## Usage
//!
//! 1) Call [`SmoothScroller::scroll_to`] when a navigation link is activated.
//! 2) On every rendered frame, call [`SmoothScroller::tick`] with the frame
//!    timestamp and request another frame while it returns [`Tick::Continue`].
//! 3) A newer `scroll_to` supersedes the animation in flight; loops that hold
//!    an older [`AnimationToken`] can notice via [`SmoothScroller::is_current`]
//!    and stop re-scheduling themselves.

use alloc::string::{String, ToString};

use crate::{ScrollAnimation, ScrollHost, ScrollOptions, ScrollTarget};

/// Identifies one accepted [`SmoothScroller::scroll_to`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationToken(u64);

impl AnimationToken {
    /// Raw sequence number; later calls have larger numbers.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Result of one [`SmoothScroller::tick`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No animation is in flight; nothing was written.
    Idle,
    /// A frame was written and the animation needs another frame.
    Continue,
    /// The final frame was written and the animation is gone.
    Finished(AnimationToken),
}

#[derive(Clone, Debug)]
struct Active {
    token: AnimationToken,
    animation: ScrollAnimation,
    fragment: Option<String>,
}

/// Owns the document scroll animation.
///
/// At most one animation is active. A new [`scroll_to`](Self::scroll_to)
/// cancels the previous one before starting, so overlapping requests never
/// interleave their writes.
#[derive(Clone, Debug, Default)]
pub struct SmoothScroller {
    active: Option<Active>,
    next_token: u64,
}

impl SmoothScroller {
    /// Creates an idle scroller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating toward `target`.
    ///
    /// `now` is the current clock time in milliseconds. The target position is
    /// the region's document-relative top minus `options.offset`.
    ///
    /// Returns `None` without touching the host or the animation in flight if
    /// the target cannot be resolved.
    pub fn scroll_to<H: ScrollHost>(
        &mut self,
        host: &H,
        target: ScrollTarget<'_, H::Region>,
        options: &ScrollOptions,
        now: f64,
    ) -> Option<AnimationToken> {
        let (region, fragment) = match target {
            ScrollTarget::Fragment(fragment) => (host.resolve_fragment(fragment), Some(fragment)),
            ScrollTarget::Region(region) => (Some(region), None),
        };
        let Some(top) = region.and_then(|r| host.region_top(&r)) else {
            tracing::debug!(?fragment, "scroll target did not resolve");
            return None;
        };

        let target_offset = top - options.offset;
        let start_offset = host.scroll_offset();

        if let Some(previous) = self.active.take() {
            tracing::debug!(token = previous.token.0, "scroll animation superseded");
        }
        let token = AnimationToken(self.next_token);
        self.next_token += 1;
        tracing::debug!(
            token = token.0,
            start_offset,
            target_offset,
            duration = options.duration,
            "scroll animation started"
        );

        self.active = Some(Active {
            token,
            animation: ScrollAnimation::new(
                start_offset,
                target_offset,
                now,
                options.duration,
                options.easing,
            ),
            fragment: fragment
                .filter(|_| options.update_hash)
                .map(ToString::to_string),
        });
        Some(token)
    }

    /// Writes one frame to `host`.
    ///
    /// When the final frame is written and the animation was started from a
    /// fragment with `update_hash`, the fragment is replaced once, after the
    /// last scroll write.
    pub fn tick<H: ScrollHost>(&mut self, host: &mut H, now: f64) -> Tick {
        let Some(active) = self.active.as_mut() else {
            return Tick::Idle;
        };
        let frame = active.animation.sample(now);
        host.set_scroll_offset(frame.offset);
        if !frame.finished {
            return Tick::Continue;
        }

        let Some(done) = self.active.take() else {
            return Tick::Idle;
        };
        if let Some(fragment) = done.fragment {
            host.replace_fragment(&fragment);
        }
        tracing::debug!(token = done.token.0, offset = frame.offset, "scroll animation finished");
        Tick::Finished(done.token)
    }

    /// Cancels the animation in flight, leaving the scroll offset where the
    /// last frame put it. Returns the cancelled token.
    pub fn cancel(&mut self) -> Option<AnimationToken> {
        let token = self.active.take()?.token;
        tracing::debug!(token = token.0, "scroll animation cancelled");
        Some(token)
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Token of the animation in flight.
    #[must_use]
    pub fn active_token(&self) -> Option<AnimationToken> {
        self.active.as_ref().map(|a| a.token)
    }

    /// Returns `true` if `token` is the animation in flight.
    #[must_use]
    pub fn is_current(&self, token: AnimationToken) -> bool {
        self.active_token() == Some(token)
    }

    /// Target offset of the animation in flight.
    #[must_use]
    pub fn target_offset(&self) -> Option<f64> {
        self.active.as_ref().map(|a| a.animation.target_offset())
    }

    /// The animation in flight.
    #[must_use]
    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.active.as_ref().map(|a| &a.animation)
    }
}
