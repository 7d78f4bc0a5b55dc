// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation-bar links with smooth scrolling.
//!
//! Clicks "Contato", then "Sobre" while the first animation is still running,
//! then "Projetos" after everything settles. The second click supersedes the
//! first, so only `#sobre` and `#projetos` end up in the address bar.
//!
//! Run:
//! - `cargo run -p understory_demos --example anchor_navigation`
//! - `RUST_LOG=debug cargo run -p understory_demos --example anchor_navigation`

use understory_demos::{FRAME_MS, HEADER_HEIGHT, PortfolioPage, init_logging};
use understory_smooth_scroll::{ScrollHost, ScrollOptions, ScrollTarget, SmoothScroller, Tick};

fn main() {
    init_logging();

    let mut page = PortfolioPage::new(1280.0, 720.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default()
        .with_offset(HEADER_HEIGHT)
        .with_update_hash(true);

    // (frame index, link) clicks.
    let clicks = [(0_u32, "#contato"), (12, "#sobre"), (90, "#projetos")];

    for frame in 0..150_u32 {
        let now = f64::from(frame) * FRAME_MS;
        for (at, link) in clicks {
            if at == frame {
                match scroller.scroll_to(&page, ScrollTarget::Fragment(link), &options, now) {
                    Some(token) => tracing::info!(link, token = token.get(), "link activated"),
                    None => tracing::warn!(link, "link target not found"),
                }
            }
        }

        match scroller.tick(&mut page, now) {
            Tick::Finished(token) => tracing::info!(
                token = token.get(),
                offset = page.scroll_offset(),
                fragment = page.fragment(),
                "arrived"
            ),
            Tick::Continue => tracing::trace!(offset = page.scroll_offset(), "frame"),
            Tick::Idle => {}
        }
    }

    tracing::info!(
        fragment = page.fragment(),
        history_writes = page.history_writes(),
        "done"
    );
}
