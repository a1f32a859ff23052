// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Load requests for unloaded items near the visible range.
//!
//! After each render the host reports the visible item range. The loader
//! widens it by the threshold, scans for unloaded runs and returns the ones
//! the host should fetch. The same set of runs is requested only once until
//! [`InfiniteLoader::reset_cache`]; nothing is requested while a page is in
//! flight.

use alloc::vec::Vec;
use core::ops::Range;

use crate::config::GridConfig;
use crate::window::GridWindow;

/// Tracks which unloaded runs have already been requested.
#[derive(Clone, Debug, Default)]
pub struct InfiniteLoader {
    threshold: usize,
    minimum_batch_size: usize,
    requested: Vec<Range<usize>>,
    last_rendered: Option<Range<usize>>,
}

impl InfiniteLoader {
    /// Create a loader using the threshold and batch size from `config`.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            threshold: config.load_threshold,
            minimum_batch_size: config.minimum_batch_size.max(1),
            requested: Vec::new(),
            last_rendered: None,
        }
    }

    /// Report the rendered item range; returns the runs to fetch.
    pub fn on_items_rendered(
        &mut self,
        window: &GridWindow,
        visible: Range<usize>,
    ) -> Vec<Range<usize>> {
        self.last_rendered = Some(visible.clone());
        self.ensure_loaded(window, visible)
    }

    /// Forget what has been requested.
    ///
    /// Call when the backing list is replaced or grows, so runs that are
    /// still unloaded are asked for again.
    pub fn reset_cache(&mut self) {
        self.requested.clear();
        #[cfg(feature = "tracing")]
        tracing::trace!("infinite loader cache reset");
    }

    /// [`InfiniteLoader::reset_cache`], then rescan the last rendered range.
    pub fn reset_and_reload(&mut self, window: &GridWindow) -> Vec<Range<usize>> {
        self.reset_cache();
        match self.last_rendered.clone() {
            Some(visible) => self.ensure_loaded(window, visible),
            None => Vec::new(),
        }
    }

    /// Runs requested since the last reset.
    pub fn requested(&self) -> &[Range<usize>] {
        &self.requested
    }

    fn ensure_loaded(&mut self, window: &GridWindow, visible: Range<usize>) -> Vec<Range<usize>> {
        let count = window.item_count();
        if visible.is_empty() || count == 0 || window.page().loading {
            return Vec::new();
        }
        let start = visible.start.saturating_sub(self.threshold).min(count - 1);
        let stop = (visible.end - 1).saturating_add(self.threshold).min(count - 1);
        let runs = scan_unloaded_ranges(
            |i| window.is_item_loaded(i),
            count,
            self.minimum_batch_size,
            start..stop + 1,
        );
        if runs.is_empty() || runs == self.requested {
            return Vec::new();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(runs = ?runs, "requesting items");
        self.requested.clone_from(&runs);
        runs
    }
}

/// Unloaded runs within `scan`, as half-open ranges.
///
/// A run that reaches the end of `scan` is extended forward to
/// `minimum_batch_size` items (stopping at a loaded item or `item_count`).
/// If the first run is still shorter than the batch size it is extended
/// backward the same way.
pub fn scan_unloaded_ranges(
    is_loaded: impl Fn(usize) -> bool,
    item_count: usize,
    minimum_batch_size: usize,
    scan: Range<usize>,
) -> Vec<Range<usize>> {
    let scan = scan.start.min(item_count)..scan.end.min(item_count);
    let mut runs: Vec<Range<usize>> = Vec::new();
    let mut open: Option<Range<usize>> = None;
    for index in scan {
        if is_loaded(index) {
            if let Some(run) = open.take() {
                runs.push(run);
            }
        } else {
            match &mut open {
                Some(run) => run.end = index + 1,
                None => open = Some(index..index + 1),
            }
        }
    }

    if let Some(mut run) = open {
        let target = run.start.saturating_add(minimum_batch_size).min(item_count);
        while run.end < target && !is_loaded(run.end) {
            run.end += 1;
        }
        runs.push(run);
    }

    if let Some(first) = runs.first_mut() {
        while first.len() < minimum_batch_size && first.start > 0 && !is_loaded(first.start - 1) {
            first.start -= 1;
        }
    }
    runs
}
