// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinitely loading people directory.
//!
//! This example scrolls a directory grid to the end, serves the load request
//! it produces with a fake page of results, and shows that a new query resets
//! what has been requested.
//!
//! Run:
//! - `cargo run -p understory_demos --example people_grid`

use kurbo::Size;
use understory_virtual_grid::{GridConfig, GridFrame, PageState, VirtualGrid};

const PAGE: usize = 30;

fn describe(label: &str, frame: &GridFrame) {
    let unloaded = frame.cells.iter().filter(|c| !c.loaded).count();
    println!(
        "{label:<18} rows {:?} items {:?} cells {} (placeholders {unloaded}) load {:?}",
        frame.range.rows,
        frame.range.items,
        frame.cells.len(),
        frame.load
    );
}

fn main() {
    let mut grid = VirtualGrid::new(GridConfig::default());
    grid.set_viewport(Size::new(1100.0, 900.0));
    grid.set_page(PageState::partial(PAGE));
    println!(
        "{} columns, {} rows",
        grid.window().column_count(),
        grid.window().row_count()
    );

    describe("top", &grid.frame());
    grid.scroll_to(f64::INFINITY);
    let frame = grid.frame();
    describe("bottom", &frame);
    assert!(!frame.load.is_empty());

    // The fetch is in flight; renders request nothing.
    grid.set_page(PageState::partial(PAGE).with_loading(true));
    describe("bottom (loading)", &grid.frame());

    // The page arrived.
    grid.set_page(PageState::partial(2 * PAGE));
    describe("after page", &grid.frame());
    grid.scroll_to(f64::INFINITY);
    describe("bottom again", &grid.frame());

    grid.set_query("ann");
    grid.set_page(PageState::complete(7));
    describe("query 'ann'", &grid.frame());
    assert_eq!(grid.scroll_top(), 0.0);
}
