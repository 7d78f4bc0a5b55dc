// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-region visibility tracker with attach/detach and a change queue.
//!
//! ## Usage
//!
//! 1) [`VisibilityTracker::attach`] each region you want to observe. Regions are
//!    identified by an application-chosen handle `K` (a node id, an element key,
//!    a section anchor).
//! 2) Whenever the viewport scrolls or layout changes, call
//!    [`VisibilityTracker::evaluate`] with the current viewport and a closure that
//!    resolves handles to document-space rectangles.
//! 3) Read the returned transitions, poll [`VisibilityTracker::is_visible`], or
//!    use [`VisibilityTracker::evaluate_queued`] and drain the transitions later
//!    with [`VisibilityTracker::drain_changes`].
//! 4) [`VisibilityTracker::detach`] a region when its owner is torn down.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use understory_visibility::{ObserveOptions, RootMargin, VisibilityTracker};
//!
//! let mut tracker = VisibilityTracker::new();
//! let projects = tracker.attach("projetos", ObserveOptions::new(0.15, RootMargin::ZERO));
//!
//! let layout = |key: &&str| match *key {
//!     "projetos" => Some(Rect::new(0.0, 1200.0, 1280.0, 2000.0)),
//!     _ => None,
//! };
//!
//! // Top of the page: the section is below the fold.
//! let changes = tracker.evaluate(Rect::new(0.0, 0.0, 1280.0, 720.0), layout);
//! assert!(changes.is_empty());
//!
//! // Scrolled down: the section enters.
//! let changes = tracker.evaluate(Rect::new(0.0, 900.0, 1280.0, 1620.0), layout);
//! assert_eq!(changes.len(), 1);
//! assert!(changes[0].visible);
//! assert!(tracker.is_visible(projects));
//! ```

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::{ObserveOptions, VisibilityState, intersection_ratio};

/// Generational handle of one attachment inside a [`VisibilityTracker`].
///
/// Ids of detached regions are never reused for a later attachment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObservationId {
    index: usize,
    generation: u32,
}

/// A visibility transition produced by an evaluation tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange<K> {
    /// Attachment that changed.
    pub id: ObservationId,
    /// Region handle the attachment observes.
    pub region: K,
    /// New visibility.
    pub visible: bool,
}

#[derive(Clone, Debug)]
struct Entry<K> {
    region: K,
    options: ObserveOptions,
    state: VisibilityState,
}

#[derive(Clone, Debug)]
struct Slot<K> {
    generation: u32,
    entry: Option<Entry<K>>,
}

/// Tracks the visibility of many regions against one viewport.
///
/// The tracker does not own geometry. Each [`evaluate`](Self::evaluate) call
/// asks the host for current region bounds, so it works with any layout or
/// scene representation.
#[derive(Clone, Debug)]
pub struct VisibilityTracker<K> {
    slots: Vec<Slot<K>>,
    free: Vec<usize>,
    pending: VecDeque<VisibilityChange<K>>,
    len: usize,
}

impl<K> Default for VisibilityTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> VisibilityTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            pending: VecDeque::new(),
            len: 0,
        }
    }

    /// Begins observing `region`.
    ///
    /// The region starts not visible and stays so until an evaluation finds it
    /// above the threshold.
    pub fn attach(&mut self, region: K, options: ObserveOptions) -> ObservationId {
        let entry = Entry {
            region,
            options,
            state: VisibilityState::new(),
        };
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.entry = Some(entry);
            ObservationId {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len();
            self.slots.push(Slot {
                generation: 0,
                entry: Some(entry),
            });
            ObservationId {
                index,
                generation: 0,
            }
        }
    }

    /// Stops observing the region behind `id`.
    ///
    /// Queued changes for `id` are discarded and no further changes are ever
    /// reported for it. Returns the region handle, or `None` if `id` was
    /// already detached.
    pub fn detach(&mut self, id: ObservationId) -> Option<K> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        self.pending.retain(|change| change.id != id);
        Some(entry.region)
    }

    /// Detaches every region and clears the change queue.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(index);
            }
        }
        self.pending.clear();
        self.len = 0;
    }

    /// Returns `true` if `id` refers to a live attachment.
    #[must_use]
    pub fn contains(&self, id: ObservationId) -> bool {
        self.entry(id).is_some()
    }

    /// Returns the live visibility signal for `id`.
    ///
    /// Detached or unknown ids report `false`.
    #[must_use]
    pub fn is_visible(&self, id: ObservationId) -> bool {
        self.entry(id).is_some_and(|e| e.state.is_visible())
    }

    /// Returns the region handle observed by `id`.
    #[must_use]
    pub fn region(&self, id: ObservationId) -> Option<&K> {
        self.entry(id).map(|e| &e.region)
    }

    /// Returns the options `id` was attached with.
    #[must_use]
    pub fn options(&self, id: ObservationId) -> Option<ObserveOptions> {
        self.entry(id).map(|e| e.options)
    }

    /// Replaces the options of a live attachment.
    ///
    /// The current visibility is kept; the new options apply from the next
    /// evaluation.
    pub fn set_options(&mut self, id: ObservationId, options: ObserveOptions) -> bool {
        match self.entry_mut(id) {
            Some(entry) => {
                entry.options = options;
                true
            }
            None => false,
        }
    }

    /// Number of live attachments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drains transitions queued by [`evaluate_queued`](Self::evaluate_queued), oldest first.
    pub fn drain_changes(&mut self) -> impl Iterator<Item = VisibilityChange<K>> + '_ {
        self.pending.drain(..)
    }

    /// Number of queued, undrained transitions.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn entry(&self, id: ObservationId) -> Option<&Entry<K>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_ref())
    }

    fn entry_mut(&mut self, id: ObservationId) -> Option<&mut Entry<K>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.entry.as_mut())
    }
}

impl<K: Clone> VisibilityTracker<K> {
    /// Runs one evaluation tick against `viewport`.
    ///
    /// `geometry` resolves a region handle to its current document-space
    /// bounds. Handles that resolve to `None` keep their current visibility.
    ///
    /// Returns the transitions of this tick, in attachment-slot order. Nothing
    /// is queued; use [`evaluate_queued`](Self::evaluate_queued) when another
    /// consumer reads transitions through [`drain_changes`](Self::drain_changes).
    pub fn evaluate<F>(&mut self, viewport: Rect, geometry: F) -> Vec<VisibilityChange<K>>
    where
        F: FnMut(&K) -> Option<Rect>,
    {
        let mut changes = Vec::new();
        run_tick(&mut self.slots, viewport, geometry, |change| changes.push(change));
        changes
    }

    /// Runs one evaluation tick like [`evaluate`](Self::evaluate), but appends
    /// the transitions to the queue read by
    /// [`drain_changes`](Self::drain_changes) instead of returning them.
    ///
    /// Returns the number of transitions queued by this tick.
    pub fn evaluate_queued<F>(&mut self, viewport: Rect, geometry: F) -> usize
    where
        F: FnMut(&K) -> Option<Rect>,
    {
        let before = self.pending.len();
        let pending = &mut self.pending;
        run_tick(&mut self.slots, viewport, geometry, |change| {
            pending.push_back(change);
        });
        self.pending.len() - before
    }
}

fn run_tick<K, F, E>(slots: &mut [Slot<K>], viewport: Rect, mut geometry: F, mut emit: E)
where
    K: Clone,
    F: FnMut(&K) -> Option<Rect>,
    E: FnMut(VisibilityChange<K>),
{
    for (index, slot) in slots.iter_mut().enumerate() {
        let Some(entry) = slot.entry.as_mut() else {
            continue;
        };
        let Some(bounds) = geometry(&entry.region) else {
            continue;
        };
        let ratio = intersection_ratio(bounds, viewport, entry.options.root_margin);
        if let Some(visible) = entry.state.update(ratio, &entry.options) {
            tracing::trace!(index, visible, ratio, "region visibility changed");
            emit(VisibilityChange {
                id: ObservationId {
                    index,
                    generation: slot.generation,
                },
                region: entry.region.clone(),
                visible,
            });
        }
    }
}
