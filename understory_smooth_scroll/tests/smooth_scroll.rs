// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_smooth_scroll` crate.
//!
//! These drive a simulated portfolio page at 60 frames per second and record
//! every scroll and history mutation the scroller performs.

use understory_smooth_scroll::{
    AnimationToken, Easing, ScrollHost, ScrollOptions, ScrollTarget, SmoothScroller, Tick,
    ease_in_out_cubic,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Clone, Debug, PartialEq)]
enum Mutation {
    Scroll(f64),
    Fragment(String),
}

/// Page with a few anchored sections and a scrollable range.
struct Page {
    scroll_y: f64,
    max_scroll: f64,
    sections: Vec<(&'static str, f64)>,
    log: Vec<Mutation>,
}

impl Page {
    fn new(scroll_y: f64) -> Self {
        Self {
            scroll_y,
            max_scroll: 10_000.0,
            sections: vec![("#sobre", 800.0), ("#projetos", 1800.0), ("#contato", 3000.0)],
            log: Vec::new(),
        }
    }

    fn scrolls(&self) -> Vec<f64> {
        self.log
            .iter()
            .filter_map(|m| match m {
                Mutation::Scroll(y) => Some(*y),
                Mutation::Fragment(_) => None,
            })
            .collect()
    }

    fn fragments(&self) -> Vec<&str> {
        self.log
            .iter()
            .filter_map(|m| match m {
                Mutation::Fragment(f) => Some(f.as_str()),
                Mutation::Scroll(_) => None,
            })
            .collect()
    }
}

impl ScrollHost for Page {
    type Region = usize;

    fn scroll_offset(&self) -> f64 {
        self.scroll_y
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_y = offset.clamp(0.0, self.max_scroll);
        self.log.push(Mutation::Scroll(self.scroll_y));
    }

    fn resolve_fragment(&self, fragment: &str) -> Option<usize> {
        self.sections.iter().position(|(id, _)| *id == fragment)
    }

    fn region_top(&self, region: &usize) -> Option<f64> {
        self.sections.get(*region).map(|(_, top)| *top)
    }

    fn replace_fragment(&mut self, fragment: &str) {
        self.log.push(Mutation::Fragment(fragment.to_string()));
    }
}

/// Ticks until the scroller stops asking for frames; returns the last tick and its time.
fn run_frames(scroller: &mut SmoothScroller, page: &mut Page, mut now: f64) -> (Tick, f64) {
    loop {
        now += FRAME_MS;
        let tick = scroller.tick(page, now);
        if tick != Tick::Continue {
            return (tick, now);
        }
    }
}

#[test]
fn contact_link_scenario() {
    let mut page = Page::new(500.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default()
        .with_duration(650.0)
        .with_offset(72.0)
        .with_update_hash(true);

    let token = scroller
        .scroll_to(&page, ScrollTarget::Fragment("#contato"), &options, 0.0)
        .expect("section exists");
    assert_eq!(scroller.target_offset(), Some(2928.0));

    let (tick, end) = run_frames(&mut scroller, &mut page, 0.0);
    assert_eq!(tick, Tick::Finished(token));
    assert!(end >= 650.0 - 1e-6 && end <= 650.0 + FRAME_MS + 1e-6);

    let scrolls = page.scrolls();
    for (i, y) in scrolls.iter().enumerate() {
        let t = ((i + 1) as f64 * FRAME_MS / 650.0).min(1.0);
        let expected = 500.0 + (2928.0 - 500.0) * ease_in_out_cubic(t);
        assert!((y - expected).abs() < 1e-6, "frame {i}: {y} vs {expected}");
    }
    assert!(
        scrolls.windows(2).all(|w| w[0] <= w[1]),
        "scroll moves monotonically toward the target"
    );
    assert_eq!(*scrolls.last().unwrap(), 2928.0);

    // The fragment is written exactly once, after the final scroll.
    assert_eq!(page.fragments(), ["#contato"]);
    assert_eq!(
        page.log.last(),
        Some(&Mutation::Fragment("#contato".to_string()))
    );
    assert!(!scroller.is_active());
}

#[test]
fn unresolvable_target_mutates_nothing() {
    let mut page = Page::new(123.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default().with_update_hash(true);

    assert_eq!(
        scroller.scroll_to(&page, ScrollTarget::Fragment("#missing"), &options, 0.0),
        None
    );
    assert_eq!(
        scroller.scroll_to(&page, ScrollTarget::Region(42), &options, 0.0),
        None
    );
    assert_eq!(scroller.tick(&mut page, 100.0), Tick::Idle);
    assert!(page.log.is_empty());
    assert_eq!(page.scroll_y, 123.0);
}

#[test]
fn unresolvable_target_leaves_animation_in_flight() {
    let mut page = Page::new(0.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default();
    let token = scroller
        .scroll_to(&page, ScrollTarget::Fragment("#sobre"), &options, 0.0)
        .unwrap();
    assert_eq!(scroller.tick(&mut page, 100.0), Tick::Continue);
    assert!(
        scroller
            .scroll_to(&page, ScrollTarget::Fragment("#nope"), &options, 100.0)
            .is_none()
    );
    assert!(scroller.is_current(token));
    let (tick, _) = run_frames(&mut scroller, &mut page, 100.0);
    assert_eq!(tick, Tick::Finished(token));
    assert_eq!(page.scroll_y, 800.0);
}

#[test]
fn endpoint_is_exact_for_any_duration() {
    for duration in [0.0, 1.0, 100.0, 650.0, 1234.5, 4000.0] {
        let mut page = Page::new(2500.0);
        let mut scroller = SmoothScroller::new();
        let options = ScrollOptions::default().with_duration(duration);
        scroller.scroll_to(&page, ScrollTarget::Fragment("#sobre"), &options, 10.0);
        run_frames(&mut scroller, &mut page, 10.0);
        assert!((page.scroll_y - 800.0).abs() <= 1.0, "duration {duration}");
    }
}

#[test]
fn sequential_calls_each_reach_their_target() {
    let mut page = Page::new(0.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default().with_offset(72.0).with_update_hash(true);

    scroller.scroll_to(&page, ScrollTarget::Fragment("#projetos"), &options, 0.0);
    let (_, now) = run_frames(&mut scroller, &mut page, 0.0);
    assert_eq!(page.scroll_y, 1728.0);

    scroller.scroll_to(&page, ScrollTarget::Fragment("#sobre"), &options, now);
    run_frames(&mut scroller, &mut page, now);
    assert_eq!(page.scroll_y, 728.0);

    assert_eq!(page.fragments(), ["#projetos", "#sobre"]);
}

#[test]
fn newer_call_supersedes_animation_in_flight() {
    let mut page = Page::new(0.0);
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default().with_update_hash(true);

    let first: AnimationToken = scroller
        .scroll_to(&page, ScrollTarget::Fragment("#contato"), &options, 0.0)
        .unwrap();
    for i in 1..=10 {
        assert_eq!(scroller.tick(&mut page, f64::from(i) * FRAME_MS), Tick::Continue);
    }
    let midway = page.scroll_y;
    assert!(midway > 0.0 && midway < 3000.0);

    let now = 10.0 * FRAME_MS;
    let second = scroller
        .scroll_to(&page, ScrollTarget::Fragment("#sobre"), &options, now)
        .unwrap();
    assert!(!scroller.is_current(first));
    assert_eq!(scroller.animation().unwrap().start_offset(), midway);

    let (tick, _) = run_frames(&mut scroller, &mut page, now);
    assert_eq!(tick, Tick::Finished(second));
    assert_eq!(page.scroll_y, 800.0);
    assert_eq!(page.fragments(), ["#sobre"]);
}

#[test]
fn hosts_may_clamp_to_scrollable_range() {
    let mut page = Page::new(0.0);
    page.max_scroll = 2000.0;
    let mut scroller = SmoothScroller::new();
    let options = ScrollOptions::default().with_easing(Easing::Linear);
    scroller.scroll_to(&page, ScrollTarget::Fragment("#contato"), &options, 0.0);
    run_frames(&mut scroller, &mut page, 0.0);
    assert_eq!(page.scroll_y, 2000.0);
}
