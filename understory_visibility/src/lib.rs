// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Visibility: headless viewport visibility tracking.
//!
//! This crate answers one question continuously: is a region of the page on
//! screen right now? It is meant to drive entrance animations that replay every
//! time a section scrolls back into view, so the signal re-arms on every exit
//! instead of firing once.
//!
//! - [`intersection_ratio`]: fraction of a region overlapping a viewport adjusted
//!   by a [`RootMargin`].
//! - [`ObserveOptions`]: threshold and root margin for one observation.
//! - [`VisibilityState`]: a single-region signal that flips only on threshold
//!   crossings.
//! - [`VisibilityTracker`]: many regions, generational [`ObservationId`]s,
//!   attach/detach, and a queue of [`VisibilityChange`]s.
//! - [`ScrolledState`]: a scrolled-past toggle for sticky headers.
//!
//! The crate does not own layout, a scene graph, or an event loop. Hosts supply
//! region bounds and the current viewport (both in the same document space,
//! typically logical pixels) whenever scroll or layout changes, and decide what
//! visual effect to run on each transition. Browser hosts can use
//! `understory_scroll_web`, which feeds the same state from an
//! `IntersectionObserver`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_visibility::{ObserveOptions, VisibilityTracker};
//!
//! let mut tracker = VisibilityTracker::new();
//! let about = tracker.attach(7_u32, ObserveOptions::default());
//!
//! let bounds = |_: &u32| Some(Rect::new(0.0, 900.0, 1280.0, 1400.0));
//!
//! for scroll_y in [0.0, 400.0, 800.0, 1600.0, 800.0] {
//!     let viewport = Rect::new(0.0, scroll_y, 1280.0, scroll_y + 720.0);
//!     for change in tracker.evaluate(viewport, bounds) {
//!         // Replay or reset the entrance animation for `change.region`.
//!         let _ = change.visible;
//!     }
//! }
//! assert!(tracker.is_visible(about));
//! ```
//!
//! Thresholds and margins follow the conventions of the web
//! `IntersectionObserver`: margins expand the viewport per edge, and a region
//! is visible once `ratio >= threshold` (or any overlap for a zero threshold).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod options;
mod ratio;
mod scrolled;
mod state;
mod tracker;

pub use options::{DEFAULT_THRESHOLD, DEFAULT_VERTICAL_MARGIN, ObserveOptions, RootMargin};
pub use ratio::intersection_ratio;
pub use scrolled::{DEFAULT_SCROLLED_THRESHOLD, ScrolledState};
pub use state::VisibilityState;
pub use tracker::{ObservationId, VisibilityChange, VisibilityTracker};
