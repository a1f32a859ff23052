// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout-change subscriptions that drive automatic repositioning.
//!
//! ## Usage
//!
//! 1) Each floating panel subscribes to a [`LayoutEvents`] hub with the kinds
//!    of [`LayoutChange`] it cares about.
//! 2) The host forwards scroll, resize, mutation, and selection events with
//!    [`LayoutEvents::emit`] (or [`LayoutEvents::emit_to`] for a single panel).
//! 3) Once per frame the host calls [`LayoutEvents::drain`] and recomputes
//!    every returned subscription once. Several events between two drains
//!    collapse into one entry carrying the union of their flags; only the
//!    latest layout is ever measured.
//! 4) [`LayoutEvents::unsubscribe`] tears a subscription down immediately.
//!    Pending changes are dropped with it and stale ids are ignored.
//!
//! ```
//! use understory_floating::auto_update::{LayoutChange, LayoutEvents};
//!
//! let mut hub = LayoutEvents::new();
//! let a = hub.subscribe(LayoutChange::all());
//! let b = hub.subscribe(LayoutChange::SELECTION);
//!
//! hub.emit(LayoutChange::SCROLL);
//! hub.emit(LayoutChange::RESIZE);
//! assert_eq!(hub.drain(), vec![(a, LayoutChange::SCROLL | LayoutChange::RESIZE)]);
//!
//! hub.emit(LayoutChange::SELECTION);
//! hub.unsubscribe(a);
//! assert_eq!(hub.drain(), vec![(b, LayoutChange::SELECTION)]);
//! ```

use alloc::vec::Vec;

bitflags::bitflags! {
    /// Kinds of layout change that can move a reference or a floating panel.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayoutChange: u8 {
        /// A scroll container scrolled.
        const SCROLL    = 0b0000_0001;
        /// The viewport or an observed element was resized.
        const RESIZE    = 0b0000_0010;
        /// Content changed under the reference or panel.
        const MUTATION  = 0b0000_0100;
        /// The text selection moved (selection-anchored panels).
        const SELECTION = 0b0000_1000;
        /// An ancestor moved or changed its transform.
        const ANCESTOR  = 0b0001_0000;
    }
}

impl Default for LayoutChange {
    fn default() -> Self {
        Self::SCROLL | Self::RESIZE | Self::MUTATION | Self::ANCESTOR
    }
}

/// Handle for a layout subscription (generational).
///
/// Stale handles never alias a newer subscription that reuses the same slot.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u32, u32);

impl SubscriptionId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "SubscriptionId uses 32-bit indices by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    interest: LayoutChange,
    pending: LayoutChange,
}

/// Hub that collects layout changes for subscribed panels.
#[derive(Clone, Debug, Default)]
pub struct LayoutEvents {
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl LayoutEvents {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to the changes in `interest`.
    pub fn subscribe(&mut self, interest: LayoutChange) -> SubscriptionId {
        let slot = |generation| {
            Some(Slot {
                generation,
                interest,
                pending: LayoutChange::empty(),
            })
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = slot(generation);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(slot(generation));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        SubscriptionId::new(idx, generation)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        if !self.is_subscribed(id) {
            return false;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    /// True if `id` refers to a live subscription.
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        matches!(
            self.slots.get(id.idx()),
            Some(Some(slot)) if slot.generation == id.1
        )
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if there are no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Record `change` for every subscription interested in it.
    pub fn emit(&mut self, change: LayoutChange) {
        for slot in self.slots.iter_mut().flatten() {
            slot.pending |= change & slot.interest;
        }
    }

    /// Record `change` for a single subscription. Stale ids are ignored.
    pub fn emit_to(&mut self, id: SubscriptionId, change: LayoutChange) {
        if let Some(Some(slot)) = self.slots.get_mut(id.idx())
            && slot.generation == id.1
        {
            slot.pending |= change & slot.interest;
        }
    }

    /// True if any subscription has pending changes.
    pub fn has_pending(&self) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|slot| !slot.pending.is_empty())
    }

    /// Take every subscription with pending changes, in subscription slot order,
    /// each once with the union of its changes since the last drain.
    pub fn drain(&mut self) -> Vec<(SubscriptionId, LayoutChange)> {
        let mut out = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(slot) = slot else { continue };
            if slot.pending.is_empty() {
                continue;
            }
            out.push((SubscriptionId::new(idx, slot.generation), slot.pending));
            slot.pending = LayoutChange::empty();
        }
        out
    }
}
