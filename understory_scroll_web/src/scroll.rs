// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame`-driven smooth scrolling of the browser window.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use understory_smooth_scroll::{
    AnimationToken, ScrollHost, ScrollOptions, ScrollTarget, SmoothScroller, Tick,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Window};

use crate::observer::describe;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// [`ScrollHost`] over the browser window and its document.
#[derive(Clone, Debug)]
pub struct WindowHost {
    window: Window,
    document: Document,
}

impl WindowHost {
    /// Binds to the global window. Returns `None` outside a browsing context.
    #[must_use]
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    /// Current time on the clock `requestAnimationFrame` timestamps use.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.window.performance().map_or(0.0, |p| p.now())
    }
}

impl ScrollHost for WindowHost {
    type Region = Element;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        self.window.scroll_to_with_x_and_y(0.0, offset);
    }

    fn resolve_fragment(&self, fragment: &str) -> Option<Element> {
        // Invalid selectors resolve to nothing, like a missing element.
        self.document.query_selector(fragment).ok().flatten()
    }

    fn region_top(&self, region: &Element) -> Option<f64> {
        if !region.is_connected() {
            return None;
        }
        Some(region.get_bounding_client_rect().top() + self.scroll_offset())
    }

    fn replace_fragment(&mut self, fragment: &str) {
        let result = self
            .window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(fragment)));
        if let Err(err) = result {
            tracing::warn!(fragment, error = %describe(&err), "failed to replace fragment");
        }
    }
}

struct Shared {
    host: WindowHost,
    scroller: SmoothScroller,
}

/// Smooth scroller bound to the browser window.
///
/// Each accepted [`scroll_to`](Self::scroll_to) starts a frame loop that
/// re-schedules itself with `requestAnimationFrame` until the animation
/// finishes. A newer call supersedes the older one; the older loop notices at
/// its next frame and stops without writing.
#[derive(Clone)]
pub struct WebScroller {
    shared: Rc<RefCell<Shared>>,
}

impl fmt::Debug for WebScroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("WebScroller")
            .field("host", &shared.host)
            .field("scroller", &shared.scroller)
            .finish()
    }
}

impl WebScroller {
    /// Creates a scroller for the global window. Returns `None` outside a
    /// browsing context.
    #[must_use]
    pub fn new() -> Option<Self> {
        Some(Self::with_host(WindowHost::new()?))
    }

    /// Creates a scroller for an existing host.
    #[must_use]
    pub fn with_host(host: WindowHost) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                host,
                scroller: SmoothScroller::new(),
            })),
        }
    }

    /// Starts a smooth scroll toward `target`. Fire-and-forget.
    ///
    /// Returns `None`, without scrolling or touching history, if the target
    /// does not resolve to an element in the document.
    pub fn scroll_to(
        &self,
        target: ScrollTarget<'_, Element>,
        options: &ScrollOptions,
    ) -> Option<AnimationToken> {
        let (token, window) = {
            let mut shared = self.shared.borrow_mut();
            let Shared { host, scroller } = &mut *shared;
            let now = host.now();
            let token = scroller.scroll_to(&*host, target, options, now)?;
            (token, host.window.clone())
        };
        self.run_frames(&window, token);
        Some(token)
    }

    /// Convenience for [`scroll_to`](Self::scroll_to) with a fragment such as `"#contato"`.
    pub fn scroll_to_fragment(
        &self,
        fragment: &str,
        options: &ScrollOptions,
    ) -> Option<AnimationToken> {
        self.scroll_to(ScrollTarget::Fragment(fragment), options)
    }

    /// Cancels the animation in flight, if any.
    pub fn cancel(&self) -> Option<AnimationToken> {
        self.shared.borrow_mut().scroller.cancel()
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shared.borrow().scroller.is_active()
    }

    fn run_frames(&self, window: &Window, token: AnimationToken) {
        let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let callback = {
            let shared = Rc::clone(&self.shared);
            let slot = Rc::clone(&slot);
            let window = window.clone();
            FrameCallback::new(move |now: f64| {
                let mut guard = shared.borrow_mut();
                let Shared { host, scroller } = &mut *guard;
                // Tick boundary: a newer call or a cancel owns the scroll position now.
                if !scroller.is_current(token) {
                    let _ = slot.borrow_mut().take();
                    return;
                }
                match scroller.tick(host, now) {
                    Tick::Continue => {
                        let scheduled = slot
                            .borrow()
                            .as_ref()
                            .is_some_and(|cb| request_frame(&window, cb));
                        if !scheduled {
                            scroller.cancel();
                            let _ = slot.borrow_mut().take();
                        }
                    }
                    Tick::Finished(_) | Tick::Idle => {
                        let _ = slot.borrow_mut().take();
                    }
                }
            })
        };

        if request_frame(window, &callback) {
            *slot.borrow_mut() = Some(callback);
        } else {
            self.shared.borrow_mut().scroller.cancel();
        }
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> bool {
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %describe(&err), "requestAnimationFrame failed");
            false
        }
    }
}
