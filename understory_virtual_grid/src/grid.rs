// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grid window with its loader, scroll offset and query.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::Size;

use crate::config::GridConfig;
use crate::loader::InfiniteLoader;
use crate::window::{GridCell, GridRange, GridWindow, PageState};

/// What to render and fetch after a change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridFrame {
    /// Ranges at the current scroll offset.
    pub range: GridRange,
    /// Cells to render.
    pub cells: Vec<GridCell>,
    /// Item runs to fetch.
    pub load: Vec<Range<usize>>,
}

/// A scrollable, infinitely loading grid.
///
/// The loader cache is reset whenever the query or the loaded count
/// changes, so runs that are still unloaded are requested again.
#[derive(Clone, Debug)]
pub struct VirtualGrid {
    window: GridWindow,
    loader: InfiniteLoader,
    query: String,
    scroll_top: f64,
}

impl VirtualGrid {
    /// Create an empty grid.
    pub fn new(config: GridConfig) -> Self {
        Self {
            loader: InfiniteLoader::new(&config),
            window: GridWindow::new(config),
            query: String::new(),
            scroll_top: 0.0,
        }
    }

    /// The window.
    pub fn window(&self) -> &GridWindow {
        &self.window
    }

    /// The loader.
    pub fn loader(&self) -> &InfiniteLoader {
        &self.loader
    }

    /// Current query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current scroll offset.
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Resize; the scroll offset is clamped to the new content.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.window.set_viewport(viewport);
        self.scroll_top = self.window.clamp_scroll(self.scroll_top);
    }

    /// Replace the query. Returns `true` if it changed.
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query.clear();
        self.query.push_str(query);
        self.loader.reset_cache();
        true
    }

    /// Update the loading state.
    pub fn set_page(&mut self, page: PageState) {
        let grew = page.loaded != self.window.page().loaded;
        self.window.set_page(page);
        if grew {
            self.loader.reset_cache();
        }
        self.scroll_top = self.window.clamp_scroll(self.scroll_top);
    }

    /// Scroll to `scroll_top`, clamped. Returns the applied offset.
    pub fn scroll_to(&mut self, scroll_top: f64) -> f64 {
        self.scroll_top = self.window.clamp_scroll(scroll_top);
        self.scroll_top
    }

    /// Compute the frame at the current offset and report it to the loader.
    pub fn frame(&mut self) -> GridFrame {
        let range = self.window.visible_range(self.scroll_top);
        let cells = self.window.cells(&range);
        let load = self.loader.on_items_rendered(&self.window, range.items.clone());
        GridFrame { range, cells, load }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn grid() -> VirtualGrid {
        let mut g = VirtualGrid::new(GridConfig::default());
        g.set_viewport(Size::new(1300.0, 1000.0));
        g.set_page(PageState::partial(40));
        g
    }

    #[test]
    fn scrolling_to_the_end_requests_the_next_page() {
        let mut g = grid();
        assert!(g.frame().load.is_empty());
        g.scroll_to(f64::INFINITY);
        let frame = g.frame();
        assert_eq!(frame.load, vec![40..41]);
        assert!(frame.cells.last().is_some_and(|c| !c.loaded));
        assert!(g.frame().load.is_empty());
    }

    #[test]
    fn loading_then_growing_requests_again() {
        let mut g = grid();
        g.scroll_to(f64::INFINITY);
        assert_eq!(g.frame().load, vec![40..41]);
        g.set_page(PageState::partial(40).with_loading(true));
        assert!(g.frame().load.is_empty());
        g.set_page(PageState::partial(60));
        g.scroll_to(f64::INFINITY);
        assert_eq!(g.frame().load, vec![60..61]);
    }

    #[test]
    fn query_change_resets_the_cache() {
        let mut g = grid();
        g.scroll_to(f64::INFINITY);
        assert_eq!(g.frame().load, vec![40..41]);
        assert!(!g.set_query(""));
        assert!(g.frame().load.is_empty());
        assert!(g.set_query("ann"));
        assert_eq!(g.query(), "ann");
        assert_eq!(g.frame().load, vec![40..41]);
    }

    #[test]
    fn shrinking_clamps_scroll() {
        let mut g = grid();
        g.scroll_to(3000.0);
        g.set_page(PageState::complete(4));
        assert_eq!(g.scroll_top(), 0.0);
        assert_eq!(g.frame().range.items, 0..4);
    }
}
