// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_suggest --heading-base-level=0

//! Understory Suggest: a headless suggestion list for mentions and autocompletion.
//!
//! - [`SuggestionList`] owns the items and the selection, answers arrow keys
//!   and Enter through [`KeyHandler`](understory_floating::KeyHandler), and
//!   commits through a [`SuggestionCommand`].
//! - Selection changes schedule a deferred scroll-into-view
//!   ([`ScrollRequest`]); [`scroll_into_view_nearest`] computes the offset.
//! - [`SuggestionRow`]s interleave group titles with the entries.
//! - [`SuggestionPopup`] floats the list above its decoration using
//!   [`SuggestionConfig::floating_config`], flipping below when needed.
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_floating::{Key, KeyEvent, KeyHandler};
//! use understory_suggest::{SuggestionConfig, SuggestionItem, SuggestionList, SuggestionRow};
//!
//! let ms = Duration::from_millis;
//! let mut list: SuggestionList<(), _> =
//!     SuggestionList::new(SuggestionConfig::default(), |_: &SuggestionItem| {});
//! list.open(
//!     vec![
//!         SuggestionItem::new("u1", "ann").with_category("members"),
//!         SuggestionItem::new("u2", "bob").with_category("members"),
//!         SuggestionItem::new("u3", "cat").with_category("others"),
//!     ],
//!     ms(0),
//! );
//!
//! list.on_key_down(&KeyEvent::new(Key::ArrowDown));
//! let rows = list.rows();
//! assert!(matches!(rows[0], SuggestionRow::GroupTitle { category: "members" }));
//! assert!(matches!(rows[2], SuggestionRow::Item { index: 1, selected: true, .. }));
//!
//! // The scroll request fires 200ms after the selection settled.
//! assert_eq!(list.poll_scroll(ms(150)), None);
//! assert_eq!(list.poll_scroll(ms(200)).map(|r| r.index), Some(1));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod item;
pub mod navigator;
pub mod popup;
pub mod scroll;

pub use config::{SCROLL_INTO_VIEW_DELAY, SuggestionConfig, panel_max_height};
pub use item::{SuggestionItem, SuggestionRow, build_rows, group_title_id};
pub use navigator::{NavigatorState, SuggestionCommand, SuggestionList};
pub use popup::SuggestionPopup;
pub use scroll::{ScrollBehavior, ScrollRequest, ScrollScheduler, scroll_into_view_nearest};
