// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory scroll and visibility demos.
//!
//! [`PortfolioPage`] is a headless stand-in for a single-page portfolio: a
//! sticky header, a hero, "about", "projects", and "contact" sections, and a
//! footer, laid out top to bottom. It implements
//! [`ScrollHost`](understory_smooth_scroll::ScrollHost) so demos can drive it
//! with a [`SmoothScroller`](understory_smooth_scroll::SmoothScroller), and it
//! exposes section geometry for a
//! [`VisibilityTracker`](understory_visibility::VisibilityTracker).

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_smooth_scroll::ScrollHost;

/// Height of the sticky navigation bar, in pixels.
pub const HEADER_HEIGHT: f64 = 72.0;

/// Frame interval of a 60 Hz display, in milliseconds.
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Installs a `tracing` subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed when several demos share a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// One anchored section of the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    /// Fragment identifier, including the leading `#`.
    pub anchor: &'static str,
    /// Document-space bounds.
    pub bounds: Rect,
}

/// A simulated single-page portfolio.
#[derive(Clone, Debug)]
pub struct PortfolioPage {
    width: f64,
    viewport_height: f64,
    scroll_y: f64,
    fragment: String,
    sections: Vec<Section>,
    history_writes: usize,
}

impl PortfolioPage {
    /// Lays out the default portfolio for a `width` x `viewport_height` window.
    #[must_use]
    pub fn new(width: f64, viewport_height: f64) -> Self {
        let layout = [
            ("#inicio", 900.0),
            ("#sobre", 1100.0),
            ("#projetos", 1400.0),
            ("#contato", 700.0),
            ("#rodape", 300.0),
        ];
        let mut y = HEADER_HEIGHT;
        let sections = layout
            .into_iter()
            .map(|(anchor, height)| {
                let bounds = Rect::new(0.0, y, width, y + height);
                y += height;
                Section { anchor, bounds }
            })
            .collect();
        Self {
            width,
            viewport_height,
            scroll_y: 0.0,
            fragment: String::new(),
            sections,
            history_writes: 0,
        }
    }

    /// Sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Bounds of the section with `anchor`.
    #[must_use]
    pub fn bounds_of(&self, anchor: &str) -> Option<Rect> {
        self.sections
            .iter()
            .find(|s| s.anchor == anchor)
            .map(|s| s.bounds)
    }

    /// Total document height.
    #[must_use]
    pub fn document_height(&self) -> f64 {
        self.sections.last().map_or(HEADER_HEIGHT, |s| s.bounds.y1)
    }

    /// Largest scroll offset the document allows.
    #[must_use]
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// The currently visible part of the document.
    #[must_use]
    pub fn viewport(&self) -> Rect {
        Rect::new(
            0.0,
            self.scroll_y,
            self.width,
            self.scroll_y + self.viewport_height,
        )
    }

    /// Current navigation fragment (empty before any rewrite).
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Number of in-place fragment rewrites so far.
    #[must_use]
    pub fn history_writes(&self) -> usize {
        self.history_writes
    }
}

impl ScrollHost for PortfolioPage {
    type Region = usize;

    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_y = offset.clamp(0.0, self.max_scroll());
    }

    fn resolve_fragment(&self, fragment: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.anchor == fragment)
    }

    fn region_top(&self, region: &usize) -> Option<f64> {
        self.sections.get(*region).map(|s| s.bounds.y0)
    }

    fn replace_fragment(&mut self, fragment: &str) {
        fragment.clone_into(&mut self.fragment);
        self.history_writes += 1;
    }
}
