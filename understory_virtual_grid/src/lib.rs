// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_grid --heading-base-level=0

//! Understory Virtual Grid: fixed-cell windowing with infinite loading.
//!
//! - [`GridWindow`] turns a viewport and a loading state into column and row
//!   counts, cell bounds and the visible and overscanned ranges.
//! - [`InfiniteLoader`] turns a visible item range into the unloaded runs to
//!   fetch, once per run until its cache is reset.
//! - [`VirtualGrid`] ties both to a scroll offset and a query and resets the
//!   loader when either the query or the loaded count changes.
//!
//! ## Example
//!
//! ```
//! use kurbo::Size;
//! use understory_virtual_grid::{GridConfig, PageState, VirtualGrid};
//!
//! let mut grid = VirtualGrid::new(GridConfig::default());
//! grid.set_viewport(Size::new(1300.0, 1000.0));
//! grid.set_page(PageState::partial(40));
//!
//! // Four 320px columns, 40 loaded people plus a placeholder.
//! assert_eq!(grid.window().column_count(), 4);
//! assert_eq!(grid.window().item_count(), 41);
//!
//! let frame = grid.frame();
//! assert_eq!(frame.range.items, 0..12);
//! assert!(frame.load.is_empty());
//!
//! // Near the end, the placeholder is requested once.
//! grid.scroll_to(f64::INFINITY);
//! assert_eq!(grid.frame().load, vec![40..41]);
//! assert!(grid.frame().load.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod grid;
pub mod loader;
pub mod window;

pub use config::GridConfig;
pub use grid::{GridFrame, VirtualGrid};
pub use loader::{InfiniteLoader, scan_unloaded_ranges};
pub use window::{GridCell, GridRange, GridWindow, PageState};
