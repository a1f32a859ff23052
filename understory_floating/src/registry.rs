// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registry of open overlays and outside-click / Escape dismissal.
//!
//! Overlays are registered explicitly with [`OverlayRegistry::add`] when they
//! open and removed with [`OverlayRegistry::remove`] when they close. The
//! registry only tracks geometry and stacking order; the owner of each overlay
//! decides what closing means (for example resetting a half-typed URL).
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_floating::registry::{DismissTrigger, OverlayRegistry};
//!
//! let mut overlays = OverlayRegistry::new();
//! let menu = overlays.add();
//! overlays.set_bounds(
//!     menu,
//!     Rect::new(10.0, 10.0, 110.0, 200.0),
//!     Some(Rect::new(10.0, 210.0, 40.0, 240.0)),
//! );
//!
//! // Clicking the trigger button does not dismiss.
//! assert!(overlays.dismiss_for(DismissTrigger::PointerDown(Point::new(20.0, 220.0))).is_empty());
//! // Clicking elsewhere does.
//! assert_eq!(overlays.dismiss_for(DismissTrigger::PointerDown(Point::new(500.0, 500.0))), vec![menu]);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// Identifier for an open overlay (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OverlayId(u32, u32);

impl OverlayId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "OverlayId uses 32-bit indices by design."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// An input that may dismiss overlays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DismissTrigger {
    /// A pointer press at a viewport position.
    PointerDown(Point),
    /// The Escape key.
    Escape,
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    order: u64,
    floating: Rect,
    trigger: Option<Rect>,
}

impl Entry {
    fn contains(&self, pt: Point) -> bool {
        self.floating.contains(pt) || self.trigger.is_some_and(|t| t.contains(pt))
    }
}

/// Open overlays in stacking order.
#[derive(Clone, Debug, Default)]
pub struct OverlayRegistry {
    entries: Vec<Option<Entry>>,
    generations: Vec<u32>,
    free_list: Vec<usize>,
    next_order: u64,
}

impl OverlayRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly opened overlay on top of the stack.
    ///
    /// Its bounds start empty; call [`OverlayRegistry::set_bounds`] once it is positioned.
    pub fn add(&mut self) -> OverlayId {
        let order = self.next_order;
        self.next_order += 1;
        let entry = |generation| {
            Some(Entry {
                generation,
                order,
                floating: Rect::ZERO,
                trigger: None,
            })
        };
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.entries[idx] = entry(generation);
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.entries.push(entry(generation));
            self.generations.push(generation);
            (self.entries.len() - 1, generation)
        };
        OverlayId::new(idx, generation)
    }

    /// Deregister an overlay. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: OverlayId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.entries[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    /// True if `id` is registered.
    pub fn contains(&self, id: OverlayId) -> bool {
        self.entry(id).is_some()
    }

    /// Update the panel rectangle and the optional trigger rectangle of an overlay.
    ///
    /// Presses inside either rectangle do not dismiss the overlay.
    pub fn set_bounds(&mut self, id: OverlayId, floating: Rect, trigger: Option<Rect>) {
        if let Some(Some(entry)) = self.entries.get_mut(id.idx())
            && entry.generation == id.1
        {
            entry.floating = floating;
            entry.trigger = trigger;
        }
    }

    /// Number of registered overlays.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if no overlay is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered overlays from bottom to top.
    pub fn stack(&self) -> Vec<OverlayId> {
        let mut live: Vec<(u64, OverlayId)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(idx, e)| {
                let e = e.as_ref()?;
                Some((e.order, OverlayId::new(idx, e.generation)))
            })
            .collect();
        live.sort_by_key(|(order, _)| *order);
        live.into_iter().map(|(_, id)| id).collect()
    }

    /// The most recently added overlay that is still registered.
    pub fn topmost(&self) -> Option<OverlayId> {
        self.stack().last().copied()
    }

    /// Overlays that `trigger` dismisses, topmost first.
    ///
    /// - `PointerDown` dismisses every overlay whose panel and trigger both miss the point.
    /// - `Escape` dismisses the topmost overlay only.
    ///
    /// The registry is not modified; owners close their overlays and call
    /// [`OverlayRegistry::remove`].
    pub fn dismiss_for(&self, trigger: DismissTrigger) -> Vec<OverlayId> {
        let out: Vec<OverlayId> = match trigger {
            DismissTrigger::Escape => self.topmost().into_iter().collect(),
            DismissTrigger::PointerDown(pt) => self
                .stack()
                .into_iter()
                .rev()
                .filter(|id| self.entry(*id).is_some_and(|e| !e.contains(pt)))
                .collect(),
        };
        #[cfg(feature = "tracing")]
        if !out.is_empty() {
            tracing::debug!(?trigger, count = out.len(), "dismissing overlays");
        }
        out
    }

    fn entry(&self, id: OverlayId) -> Option<&Entry> {
        match self.entries.get(id.idx()) {
            Some(Some(e)) if e.generation == id.1 => Some(e),
            _ => None,
        }
    }
}
