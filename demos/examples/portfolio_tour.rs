// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Section entrance animations on a scrolling portfolio page.
//!
//! Scrolls a simulated page down and back up in wheel-sized steps, replaying
//! each section's entrance animation whenever it re-enters the viewport and
//! switching the sticky header style once the page leaves the top.
//!
//! Run:
//! - `cargo run -p understory_demos --example portfolio_tour`
//! - `RUST_LOG=trace cargo run -p understory_demos --example portfolio_tour`

use understory_demos::{PortfolioPage, init_logging};
use understory_smooth_scroll::ScrollHost;
use understory_visibility::{ObserveOptions, ScrolledState, VisibilityTracker};

const WHEEL_STEP: f64 = 120.0;

fn main() {
    init_logging();

    let mut page = PortfolioPage::new(1280.0, 720.0);
    let mut tracker = VisibilityTracker::new();
    let mut header = ScrolledState::default();

    for section in page.sections() {
        tracker.attach(section.anchor, ObserveOptions::default());
    }

    let max = page.max_scroll();
    let mut offsets = Vec::new();
    let mut y = 0.0;
    while y < max {
        offsets.push(y);
        y += WHEEL_STEP;
    }
    offsets.push(max);
    let back: Vec<f64> = offsets.iter().rev().skip(1).copied().collect();
    offsets.extend(back);

    let mut replays = 0_usize;
    for offset in offsets {
        page.set_scroll_offset(offset);

        if let Some(scrolled) = header.update(page.scroll_offset()) {
            let style = if scrolled { "solid" } else { "translucent" };
            tracing::info!(offset, style, "header style changed");
        }

        let geometry = |anchor: &&'static str| page.bounds_of(anchor);
        for change in tracker.evaluate(page.viewport(), geometry) {
            if change.visible {
                replays += 1;
                tracing::info!(section = change.region, offset, "play slide-fade-in");
            } else {
                tracing::info!(section = change.region, offset, "reset entrance animation");
            }
        }
    }

    tracing::info!(replays, "tour finished");
    tracker.clear();
}
