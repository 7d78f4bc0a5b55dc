// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Smooth Scroll: frame-driven scroll animation primitives.
//!
//! This crate animates a document's vertical scroll offset toward an in-page
//! target over a fixed wall-clock duration. It works even where a platform's
//! native smooth scrolling is disabled, and it stays headless:
//!
//! - [`ease_in_out_cubic`] and [`Easing`]: curves mapping normalized time to
//!   normalized progress.
//! - [`ScrollAnimation`]: start/target offsets, start time, duration, and a
//!   progress value that never decreases.
//! - [`ScrollHost`]: the environment (scroll position, fragment lookup,
//!   in-place fragment rewrite).
//! - [`SmoothScroller`]: owns the single scroll position, tracks at most one
//!   active animation, and supersedes it when a new request arrives.
//!
//! The crate does not schedule frames. Hosts call [`SmoothScroller::tick`] once
//! per rendered frame (for example from `requestAnimationFrame`) and stop when
//! it no longer returns [`Tick::Continue`]. `understory_scroll_web` provides
//! that loop for browsers.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_smooth_scroll::{
//!     ScrollHost, ScrollOptions, ScrollTarget, SmoothScroller, Tick,
//! };
//!
//! struct Page {
//!     scroll_y: f64,
//!     hash: String,
//! }
//!
//! impl ScrollHost for Page {
//!     type Region = f64;
//!     fn scroll_offset(&self) -> f64 { self.scroll_y }
//!     fn set_scroll_offset(&mut self, offset: f64) { self.scroll_y = offset; }
//!     fn resolve_fragment(&self, fragment: &str) -> Option<f64> {
//!         (fragment == "#contato").then_some(3000.0)
//!     }
//!     fn region_top(&self, top: &f64) -> Option<f64> { Some(*top) }
//!     fn replace_fragment(&mut self, fragment: &str) { self.hash = fragment.into(); }
//! }
//!
//! let mut page = Page { scroll_y: 500.0, hash: String::new() };
//! let mut scroller = SmoothScroller::new();
//! let options = ScrollOptions::default().with_offset(72.0).with_update_hash(true);
//!
//! scroller.scroll_to(&page, ScrollTarget::Fragment("#contato"), &options, 0.0);
//!
//! let mut now = 0.0;
//! while scroller.tick(&mut page, now) == Tick::Continue {
//!     now += 16.0;
//! }
//! assert_eq!(page.scroll_y, 2928.0);
//! assert_eq!(page.hash, "#contato");
//! ```
//!
//! Times are `f64` milliseconds on a monotonic clock; offsets are in the
//! host's document units (typically CSS pixels).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod animation;
mod easing;
mod host;
mod options;
mod scroller;

pub use animation::{ScrollAnimation, ScrollFrame};
pub use easing::{Easing, ease_in_out_cubic};
pub use host::{ScrollHost, ScrollTarget};
pub use options::{DEFAULT_DURATION_MS, ScrollOptions};
pub use scroller::{AnimationToken, SmoothScroller, Tick};
