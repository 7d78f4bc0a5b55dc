// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver`-backed visibility subscriptions.

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::Cell;
use core::fmt;

use js_sys::Array;
use understory_visibility::{ObserveOptions, VisibilityState};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::{ObserveError, root_margin_css, validate_threshold};

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live visibility subscription for one element.
///
/// The browser delivers intersection updates asynchronously; each one feeds a
/// [`VisibilityState`], and the change callback runs only when the state flips.
/// The observation is released by [`VisibilityObserver::detach`] or when the
/// value is dropped, whichever happens first.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    state: Rc<Cell<VisibilityState>>,
    live: Rc<Cell<bool>>,
    _callback: EntriesCallback,
}

impl fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("visible", &self.is_visible())
            .field("live", &self.live.get())
            .finish_non_exhaustive()
    }
}

/// Starts observing `element`.
///
/// `on_change` runs on every enter/exit transition with the new visibility. It
/// never runs after the returned observer has been detached or dropped.
///
/// Fails if the threshold is not a finite value in `[0, 1]` or the environment
/// cannot construct an `IntersectionObserver`.
pub fn observe<F>(
    element: &Element,
    options: ObserveOptions,
    mut on_change: F,
) -> Result<VisibilityObserver, ObserveError>
where
    F: FnMut(bool) + 'static,
{
    let threshold = validate_threshold(options.threshold())?;
    let state = Rc::new(Cell::new(VisibilityState::new()));
    let live = Rc::new(Cell::new(true));

    let callback = {
        let state = Rc::clone(&state);
        let live = Rc::clone(&live);
        EntriesCallback::new(move |entries: Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if !live.get() {
                    return;
                }
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                // Edge-adjacent targets intersect with a zero ratio; keep them
                // visible for a zero threshold.
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio().max(f64::MIN_POSITIVE)
                } else {
                    0.0
                };
                let mut current = state.get();
                let flipped = current.update(ratio, &options);
                state.set(current);
                if let Some(visible) = flipped {
                    tracing::trace!(visible, ratio, "element visibility changed");
                    on_change(visible);
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&root_margin_css(options.root_margin));
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| ObserveError::Unavailable(describe(&err)))?;
    observer.observe(element);

    Ok(VisibilityObserver {
        observer,
        state,
        live,
        _callback: callback,
    })
}

impl VisibilityObserver {
    /// Returns the live visibility signal.
    ///
    /// Starts `false` and stays `false` until the browser reports the element
    /// above the threshold.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.get().is_visible()
    }

    /// Returns `true` until the observer is detached.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Stops observing. Idempotent.
    pub fn detach(&mut self) {
        if self.live.replace(false) {
            self.observer.disconnect();
            tracing::trace!("visibility observer detached");
        }
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.detach();
    }
}

pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
