// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_toolbar --heading-base-level=0

//! Understory Toolbar: headless state for a responsive formatting toolbar.
//!
//! - [`WidthObserver`] turns debounced container resizes into [`WidthTier`]s.
//! - [`select_controls`] keeps the prefix of the control sequence that fits
//!   the tier and moves the rest to an overflow menu, without reordering.
//! - [`Toolbar`] combines both with the control catalog ([`formatting`]) and
//!   the heading dropdown, positioned with `understory_floating`.
//! - [`LinkEditor`] holds the link overlay: its draft fields, the edit a
//!   submit produces, and its dismissal.
//!
//! Breakpoints, per-tier counts, and timings live in [`ToolbarConfig`];
//! the defaults are the product constants (640 / 424 px, 9 / 5 / 3 controls,
//! 10 ms debounce).
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_toolbar::{Toolbar, ToolbarConfig, WidthTier};
//!
//! let mut toolbar = Toolbar::new(ToolbarConfig::default(), true);
//! toolbar.mount();
//! assert_eq!(toolbar.split().visible.len(), 9);
//!
//! toolbar.observe_width(400.0, Duration::ZERO);
//! let due = toolbar.next_deadline().unwrap();
//! assert_eq!(toolbar.poll(due), Some(WidthTier::Narrow));
//!
//! let split = toolbar.split();
//! assert_eq!((split.visible.len(), split.overflow.len()), (3, 6));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controls;
pub mod formatting;
pub mod link;
pub mod observer;
pub mod tier;
pub mod toolbar;

pub use config::{Breakpoints, ConfigError, TierCounts, ToolbarConfig};
pub use controls::{
    Control, ControlKind, ControlSplit, ControlState, EditorCommand, EditorCommands,
    FormattingMode, IconRef, LabelDescriptor, Shortcut, select_controls,
};
pub use link::{LinkContext, LinkEdit, LinkEditor, LinkKeyOutcome};
pub use observer::WidthObserver;
pub use tier::WidthTier;
pub use toolbar::{ControlView, Toolbar, ToolbarLayout};
