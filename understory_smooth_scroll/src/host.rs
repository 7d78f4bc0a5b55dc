// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The environment a [`SmoothScroller`](crate::SmoothScroller) drives.
///
/// A host owns the single scroll position of a document, knows how to find
/// regions by fragment identifier, and can rewrite the current navigation
/// fragment without scrolling. Browser hosts map these onto `window.scrollY`,
/// `document.querySelector`, and `history.replaceState`; headless hosts can
/// keep plain fields.
pub trait ScrollHost {
    /// Handle of a region that can be scrolled to.
    type Region;

    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    /// Moves the document to `offset`.
    ///
    /// Hosts may clamp to their scrollable range.
    fn set_scroll_offset(&mut self, offset: f64);

    /// Resolves a fragment identifier such as `"#contato"` to a region.
    fn resolve_fragment(&self, fragment: &str) -> Option<Self::Region>;

    /// Top edge of `region` relative to the document (not the viewport).
    ///
    /// Returns `None` if the region is no longer part of the document.
    fn region_top(&self, region: &Self::Region) -> Option<f64>;

    /// Replaces the current navigation fragment in place.
    ///
    /// Must not create a new history entry and must not scroll.
    fn replace_fragment(&mut self, fragment: &str);
}

/// What a scroll animation should move to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget<'a, R> {
    /// A fragment identifier, including the leading `#`.
    Fragment(&'a str),
    /// A region handle the caller already holds.
    Region(R),
}
