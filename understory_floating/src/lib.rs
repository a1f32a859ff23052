// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_floating --heading-base-level=0

//! Understory Floating: Kurbo-native positioning for floating panels.
//!
//! Floating panels are popovers, link editors, dropdowns, and suggestion lists:
//! UI that sits on top of the document, anchored to a reference instead of
//! taking part in layout.
//!
//! - Places a panel next to a reference rectangle at a preferred [`Placement`].
//! - Runs a pipeline of passes ([`Offset`], [`Flip`], [`Shift`], [`Size`]) that
//!   keep the panel inside a boundary, typically the viewport.
//! - Re-runs positioning when layout changes, through explicit
//!   [`auto_update`] subscriptions with deterministic teardown.
//! - Tracks open overlays and decides which ones an outside press or Escape
//!   dismisses ([`registry`]); [`OverlayHost`] keeps subscriptions and
//!   registry entries in step.
//! - Defines the [`KeyHandler`] handle overlays expose to a host's keyboard
//!   dispatch.
//!
//! ## Not a renderer
//!
//! This crate does not measure or draw anything. The host supplies the
//! reference rectangle (or a [`ReferenceSource`](reference::ReferenceSource)
//! that can produce one), the panel's rendered size, and the boundary, and
//! applies the resulting coordinates.
//!
//! ## Degraded input
//!
//! Missing geometry never fails: an unavailable reference resolves to a zero
//! rectangle, and a [`FloatingPanel`] keeps its last good position when the
//! panel is not rendered or the result is not finite.
//!
//! ## Pipeline
//!
//! Passes run in the order they were configured. A pass can ask for a reset
//! with another placement, which restarts the pipeline; bookkeeping in
//! [`MiddlewareData`] survives resets. A [`Flip`] placed before an
//! [`Offset`] checks overflow without the offset.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use understory_floating::{
//!     FloatingConfig, FloatingPanel, Flip, Offset, Placement, Shift, Strategy,
//!     auto_update::{LayoutChange, LayoutEvents},
//! };
//!
//! let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
//! let mut hub = LayoutEvents::new();
//!
//! let mut panel = FloatingPanel::new(
//!     FloatingConfig::new(Placement::TOP_START)
//!         .with_strategy(Strategy::Fixed)
//!         .with_middleware(Flip::default().with_padding(8.0))
//!         .with_middleware(Offset::main_axis(8.0))
//!         .with_middleware(Shift::default()),
//! );
//! panel.mount(&mut hub);
//!
//! let anchor = Rect::new(40.0, 700.0, 60.0, 720.0);
//! let size = Some(Size::new(240.0, 160.0));
//! let first = panel.update(&anchor, size, viewport);
//!
//! // Later: the page scrolled by 100px and the host forwards the event.
//! hub.emit(LayoutChange::SCROLL);
//! let drained = hub.drain();
//! if panel.wants(&drained) {
//!     let moved = panel.update(&anchor.with_origin((40.0, 600.0)), size, viewport);
//!     assert_eq!(moved.y, first.y - 100.0);
//! }
//!
//! panel.unmount(&mut hub);
//! assert!(hub.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod auto_update;
pub mod compute;
pub mod host;
pub mod keyboard;
pub mod middleware;
pub mod panel;
pub mod placement;
pub mod reference;
pub mod registry;

pub use compute::{FloatingConfig, MAX_RESETS, Position, compute_coords, compute_position};
pub use host::OverlayHost;
pub use keyboard::{Key, KeyEvent, KeyHandler, Modifiers};
pub use middleware::{
    FallbackStrategy, Flip, Middleware, MiddlewareData, Offset, Shift, SideOffsets, Size,
    SizeData, detect_overflow,
};
pub use panel::FloatingPanel;
pub use placement::{Alignment, Axis, ParsePlacementError, Placement, Side, Strategy};
pub use reference::{CaretGeometry, ElementAnchor, ReferenceSource, SelectionAnchor};
pub use registry::{DismissTrigger, OverlayId, OverlayRegistry};
