// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-cell grid windowing.
//!
//! A [`GridWindow`] lays a flat item list out in rows of equal cells. The
//! column count follows the viewport width; the grid height is the viewport
//! height minus the chrome above the grid. When another page exists, one
//! placeholder item is appended so scrolling to the end reveals an unloaded
//! cell.

use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Rect, Size};

use crate::config::GridConfig;

/// Loading state of the backing list.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PageState {
    /// Items loaded so far.
    pub loaded: usize,
    /// More items can be fetched.
    pub has_next_page: bool,
    /// A page is being fetched.
    pub loading: bool,
}

impl PageState {
    /// A state with `loaded` items and no further pages.
    pub const fn complete(loaded: usize) -> Self {
        Self {
            loaded,
            has_next_page: false,
            loading: false,
        }
    }

    /// A state with `loaded` items and another page available.
    pub const fn partial(loaded: usize) -> Self {
        Self {
            loaded,
            has_next_page: true,
            loading: false,
        }
    }

    /// Mark a fetch in flight.
    #[must_use]
    pub const fn with_loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Row and item ranges for one scroll offset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridRange {
    /// Rows intersecting the grid viewport.
    pub rows: Range<usize>,
    /// `rows` widened by the overscan.
    pub overscan_rows: Range<usize>,
    /// Items in `rows`.
    pub items: Range<usize>,
    /// Items in `overscan_rows`.
    pub overscan_items: Range<usize>,
}

/// One rendered cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridCell {
    /// Item index.
    pub index: usize,
    /// Row.
    pub row: usize,
    /// Column.
    pub column: usize,
    /// Cell bounds in content coordinates.
    pub rect: Rect,
    /// The item has been fetched; otherwise render a placeholder.
    pub loaded: bool,
}

/// Windowing state for a fixed-cell grid.
#[derive(Clone, Debug)]
pub struct GridWindow {
    config: GridConfig,
    viewport: Size,
    page: PageState,
}

impl GridWindow {
    /// Create an empty window with a zero viewport.
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            viewport: Size::ZERO,
            page: PageState::default(),
        }
    }

    /// Configuration.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Update the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Viewport size.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the loading state.
    pub fn set_page(&mut self, page: PageState) {
        self.page = page;
    }

    /// Loading state.
    pub fn page(&self) -> PageState {
        self.page
    }

    /// Viewport height minus chrome, never negative.
    pub fn grid_height(&self) -> f64 {
        let h = self.viewport.height - self.config.chrome_height;
        if h.is_finite() { h.max(0.0) } else { 0.0 }
    }

    /// Columns that fit the viewport width, at least one.
    pub fn column_count(&self) -> usize {
        floor_index(self.viewport.width / self.config.column_width).max(1)
    }

    /// Loaded items plus one placeholder when another page exists.
    pub fn item_count(&self) -> usize {
        self.page.loaded + usize::from(self.page.has_next_page)
    }

    /// Rows needed for [`GridWindow::item_count`] items.
    pub fn row_count(&self) -> usize {
        self.item_count().div_ceil(self.column_count())
    }

    /// True when nothing is loaded; the grid renders nothing.
    pub fn is_empty(&self) -> bool {
        self.page.loaded == 0
    }

    /// True if item `index` has been fetched.
    ///
    /// Every index counts as loaded once there are no further pages.
    pub fn is_item_loaded(&self, index: usize) -> bool {
        !self.page.has_next_page || index < self.page.loaded
    }

    /// Size of the scrollable content.
    pub fn content_size(&self) -> Size {
        let columns = self.column_count() as f64;
        let rows = self.row_count() as f64;
        Size::new(
            columns * self.config.column_width,
            rows * self.config.row_height,
        )
    }

    /// Largest scroll offset.
    pub fn max_scroll_top(&self) -> f64 {
        (self.content_size().height - self.grid_height()).max(0.0)
    }

    /// `scroll_top` limited to the scrollable range.
    pub fn clamp_scroll(&self, scroll_top: f64) -> f64 {
        if scroll_top.is_nan() {
            return 0.0;
        }
        scroll_top.clamp(0.0, self.max_scroll_top())
    }

    /// Item at `row` and `column`, if one exists there.
    pub fn item_at(&self, row: usize, column: usize) -> Option<usize> {
        let columns = self.column_count();
        if column >= columns {
            return None;
        }
        let index = row.checked_mul(columns)?.checked_add(column)?;
        (index < self.item_count()).then_some(index)
    }

    /// Bounds of item `index` in content coordinates.
    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.item_count() {
            return None;
        }
        let columns = self.column_count();
        let (row, column) = (index / columns, index % columns);
        let x = column as f64 * self.config.column_width;
        let y = row as f64 * self.config.row_height;
        Some(Rect::new(
            x,
            y,
            x + self.config.column_width,
            y + self.config.row_height,
        ))
    }

    /// Rows and items visible at `scroll_top`, plus the overscanned ranges.
    ///
    /// `scroll_top` is clamped first. An empty grid yields empty ranges.
    pub fn visible_range(&self, scroll_top: f64) -> GridRange {
        let row_count = self.row_count();
        if self.is_empty() || row_count == 0 {
            return GridRange::default();
        }
        let top = self.clamp_scroll(scroll_top);
        let row_height = self.config.row_height;
        let first = floor_index(top / row_height).min(row_count);
        let end = ceil_index((top + self.grid_height()) / row_height)
            .min(row_count)
            .max(first);
        let overscan = self.config.overscan_rows;
        let overscan_rows =
            first.saturating_sub(overscan)..end.saturating_add(overscan).min(row_count);
        GridRange {
            items: self.items_in(&(first..end)),
            overscan_items: self.items_in(&overscan_rows),
            rows: first..end,
            overscan_rows,
        }
    }

    /// Cells to render for `range`, one per overscanned item.
    pub fn cells(&self, range: &GridRange) -> Vec<GridCell> {
        let columns = self.column_count();
        range
            .overscan_items
            .clone()
            .filter_map(|index| {
                let rect = self.cell_rect(index)?;
                Some(GridCell {
                    index,
                    row: index / columns,
                    column: index % columns,
                    rect,
                    loaded: self.is_item_loaded(index),
                })
            })
            .collect()
    }

    fn items_in(&self, rows: &Range<usize>) -> Range<usize> {
        let columns = self.column_count();
        let count = self.item_count();
        let start = rows.start.saturating_mul(columns).min(count);
        let end = rows.end.saturating_mul(columns).min(count);
        start..end
    }
}

/// `v` rounded down to an index; non-positive and NaN map to zero.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Truncation toward zero is the floor for positive values; the cast saturates."
)]
fn floor_index(v: f64) -> usize {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    v as usize
}

/// `v` rounded up to an index; non-positive and NaN map to zero.
fn ceil_index(v: f64) -> usize {
    let i = floor_index(v);
    if (i as f64) < v { i.saturating_add(1) } else { i }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(width: f64, height: f64, page: PageState) -> GridWindow {
        let mut w = GridWindow::new(GridConfig::default());
        w.set_viewport(Size::new(width, height));
        w.set_page(page);
        w
    }

    #[test]
    fn columns_follow_width() {
        let mut w = window(1300.0, 1000.0, PageState::complete(10));
        assert_eq!(w.column_count(), 4);
        w.set_viewport(Size::new(639.0, 1000.0));
        assert_eq!(w.column_count(), 1);
        w.set_viewport(Size::new(200.0, 1000.0));
        assert_eq!(w.column_count(), 1);
        w.set_viewport(Size::new(f64::NAN, 1000.0));
        assert_eq!(w.column_count(), 1);
    }

    #[test]
    fn placeholder_item_when_more_pages() {
        let w = window(1300.0, 1000.0, PageState::partial(40));
        assert_eq!(w.item_count(), 41);
        assert_eq!(w.row_count(), 11);
        assert!(w.is_item_loaded(39));
        assert!(!w.is_item_loaded(40));
        let done = window(1300.0, 1000.0, PageState::complete(40));
        assert_eq!(done.item_count(), 40);
        assert_eq!(done.row_count(), 10);
        assert!(done.is_item_loaded(40));
    }

    #[test]
    fn ranges_at_top() {
        let w = window(1300.0, 1000.0, PageState::partial(40));
        assert_eq!(w.grid_height(), 880.0);
        let r = w.visible_range(0.0);
        assert_eq!(r.rows, 0..3);
        assert_eq!(r.overscan_rows, 0..4);
        assert_eq!(r.items, 0..12);
        assert_eq!(r.overscan_items, 0..16);
    }

    #[test]
    fn ranges_mid_scroll() {
        let w = window(1300.0, 1000.0, PageState::partial(40));
        let r = w.visible_range(700.0);
        assert_eq!(r.rows, 1..5);
        assert_eq!(r.overscan_rows, 0..6);
        assert_eq!(r.items, 4..20);
    }

    #[test]
    fn scroll_past_end_is_clamped() {
        let w = window(1300.0, 1000.0, PageState::partial(40));
        assert_eq!(w.max_scroll_top(), 11.0 * 365.0 - 880.0);
        let r = w.visible_range(10_000.0);
        assert_eq!(r.rows, 8..11);
        assert_eq!(r.items, 32..41);
        assert_eq!(r.overscan_items, 28..41);
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let w = window(1300.0, 1000.0, PageState::partial(0));
        assert!(w.is_empty());
        assert_eq!(w.visible_range(0.0), GridRange::default());
        assert!(w.cells(&w.visible_range(0.0)).is_empty());
    }

    #[test]
    fn cells_cover_overscan_items() {
        let w = window(700.0, 500.0, PageState::partial(3));
        let r = w.visible_range(0.0);
        let cells = w.cells(&r);
        assert_eq!(cells.len(), 4);
        assert_eq!(cells[3].row, 1);
        assert_eq!(cells[3].column, 1);
        assert_eq!(cells[3].rect, Rect::new(320.0, 365.0, 640.0, 730.0));
        assert!(!cells[3].loaded);
        assert_eq!(w.item_at(1, 1), Some(3));
        assert_eq!(w.item_at(1, 2), None);
        assert_eq!(w.item_at(2, 0), None);
    }
}
