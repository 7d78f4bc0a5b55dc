// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser bindings for `understory_visibility` and `understory_smooth_scroll`.
//!
//! When targeting `wasm32`, this crate provides:
//!
//! - `observe`: an `IntersectionObserver`-backed visibility subscription that
//!   drives an [`understory_visibility::VisibilityState`] and calls back on every
//!   enter/exit. The returned `VisibilityObserver` disconnects on `detach` or
//!   drop.
//! - `WindowHost`: a [`ScrollHost`](understory_smooth_scroll::ScrollHost) over
//!   `window.scrollY`, `document.querySelector`, and `history.replaceState`.
//! - `WebScroller`: runs a [`SmoothScroller`](understory_smooth_scroll::SmoothScroller)
//!   from a `requestAnimationFrame` loop; newer calls supersede older ones.
//!
//! On every target it provides the pure conversions those bindings use:
//! [`root_margin_css`] and [`validate_threshold`], plus [`ObserveError`].
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn wire_section(
//!     section: &web_sys::Element,
//! ) -> Result<understory_scroll_web::VisibilityObserver, understory_scroll_web::ObserveError> {
//!     use understory_visibility::ObserveOptions;
//!
//!     understory_scroll_web::observe(section, ObserveOptions::default(), |visible| {
//!         // Toggle the entrance animation class.
//!         let _ = visible;
//!     })
//! }
//!
//! #[cfg(target_arch = "wasm32")]
//! fn on_contact_link() {
//!     use understory_smooth_scroll::ScrollOptions;
//!
//!     if let Some(scroller) = understory_scroll_web::WebScroller::new() {
//!         let options = ScrollOptions::default().with_offset(72.0).with_update_hash(true);
//!         scroller.scroll_to_fragment("#contato", &options);
//!     }
//! }
//! ```

#![no_std]

extern crate alloc;

mod css;
mod error;
#[cfg(target_arch = "wasm32")]
mod observer;
#[cfg(target_arch = "wasm32")]
mod scroll;

pub use css::{root_margin_css, validate_threshold};
pub use error::ObserveError;
#[cfg(target_arch = "wasm32")]
pub use observer::{VisibilityObserver, observe};
#[cfg(target_arch = "wasm32")]
pub use scroll::{WebScroller, WindowHost};
