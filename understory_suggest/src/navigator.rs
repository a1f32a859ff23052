// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation over a suggestion list.
//!
//! ## States
//!
//! - `Closed`: nothing rendered; every key falls through to the host.
//! - `Open { selected }`: `selected` stays in `0..len` and wraps around on
//!   both ends. An open list without items renders nothing and ignores
//!   navigation.
//!
//! ## Keys
//!
//! | Key        | Effect                         |
//! |------------|--------------------------------|
//! | ArrowDown  | `(selected + 1) % len`         |
//! | ArrowUp    | `(selected + len - 1) % len`   |
//! | Enter      | commit the selected item       |
//!
//! Keys are consumed only while the list is open and has items. An open but
//! empty list lets ArrowUp, ArrowDown and Enter reach the editor, so a
//! press moves the caret or inserts a line instead of being swallowed by a
//! list that shows nothing.
//!
//! ## Time
//!
//! Selection changes schedule a scroll-into-view request due one
//! `scroll_delay` after the change. Hosts that know when a key was pressed
//! dispatch it with [`SuggestionList::on_key_down_at`]. A press arriving
//! through [`KeyHandler`] carries no time and is stamped with the latest
//! time the list has seen, so hosts using that path call
//! [`SuggestionList::advance`] before dispatching.

use alloc::vec::Vec;
use core::time::Duration;

use understory_floating::{Key, KeyEvent, KeyHandler};

use crate::config::SuggestionConfig;
use crate::item::{SuggestionItem, SuggestionRow, build_rows};
use crate::scroll::{ScrollRequest, ScrollScheduler};

/// Receives the item the user commits.
pub trait SuggestionCommand<T> {
    /// Insert `item` (for example as a mention node).
    fn commit(&mut self, item: &SuggestionItem<T>);
}

impl<T, F: FnMut(&SuggestionItem<T>)> SuggestionCommand<T> for F {
    fn commit(&mut self, item: &SuggestionItem<T>) {
        self(item);
    }
}

/// Whether the list is shown and which entry is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NavigatorState {
    /// Not shown.
    #[default]
    Closed,
    /// Shown with `selected` highlighted.
    Open {
        /// Selected index; 0 for an empty list.
        selected: usize,
    },
}

/// A suggestion list with keyboard navigation and a commit callback.
///
/// ```
/// use core::time::Duration;
/// use understory_floating::{Key, KeyEvent, KeyHandler};
/// use understory_suggest::{SuggestionConfig, SuggestionItem, SuggestionList};
///
/// let mut picked = Vec::new();
/// let mut list: SuggestionList<(), _> =
///     SuggestionList::new(SuggestionConfig::default(), |item: &SuggestionItem| {
///         picked.push(item.id.clone());
///     });
/// list.open(
///     vec![SuggestionItem::new("u1", "ann"), SuggestionItem::new("u2", "bob")],
///     Duration::ZERO,
/// );
/// assert!(list.on_key_down(&KeyEvent::new(Key::ArrowUp)));
/// assert_eq!(list.selected(), Some(1));
/// assert!(list.on_key_down(&KeyEvent::new(Key::Enter)));
/// drop(list);
/// assert_eq!(picked, ["u2"]);
/// ```
#[derive(Clone, Debug)]
pub struct SuggestionList<T, C> {
    config: SuggestionConfig,
    items: Vec<SuggestionItem<T>>,
    state: NavigatorState,
    scroll: ScrollScheduler,
    clock: Duration,
    command: C,
}

impl<T, C: SuggestionCommand<T>> SuggestionList<T, C> {
    /// Create a closed, empty list that commits through `command`.
    pub fn new(config: SuggestionConfig, command: C) -> Self {
        Self {
            scroll: ScrollScheduler::new(config.scroll_delay),
            config,
            items: Vec::new(),
            state: NavigatorState::Closed,
            clock: Duration::ZERO,
            command,
        }
    }

    /// Configuration.
    pub fn config(&self) -> &SuggestionConfig {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> NavigatorState {
        self.state
    }

    /// True while shown.
    pub fn is_open(&self) -> bool {
        matches!(self.state, NavigatorState::Open { .. })
    }

    /// The items.
    pub fn items(&self) -> &[SuggestionItem<T>] {
        &self.items
    }

    /// Selected index while open with items.
    pub fn selected(&self) -> Option<usize> {
        match self.state {
            NavigatorState::Open { selected } if !self.items.is_empty() => Some(selected),
            _ => None,
        }
    }

    /// Selected item while open with items.
    pub fn selected_item(&self) -> Option<&SuggestionItem<T>> {
        self.selected().and_then(|i| self.items.get(i))
    }

    /// The commit callback.
    pub fn command(&self) -> &C {
        &self.command
    }

    /// The commit callback, mutably.
    pub fn command_mut(&mut self) -> &mut C {
        &mut self.command
    }

    /// Show `items` with the first one selected.
    pub fn open(&mut self, items: Vec<SuggestionItem<T>>, now: Duration) {
        self.items = items;
        self.set_selected(0, now);
    }

    /// Hide the list and cancel the pending scroll.
    pub fn close(&mut self) {
        self.state = NavigatorState::Closed;
        self.scroll.cancel();
    }

    /// Replace the items. The selection goes back to the first item.
    ///
    /// A closed list stays closed.
    pub fn set_items(&mut self, items: Vec<SuggestionItem<T>>, now: Duration) {
        self.items = items;
        if self.is_open() {
            self.set_selected(0, now);
        }
    }

    /// Select the next item, wrapping to the first.
    pub fn next(&mut self, now: Duration) {
        if let Some(i) = self.selected() {
            self.set_selected((i + 1) % self.items.len(), now);
        }
    }

    /// Select the previous item, wrapping to the last.
    pub fn previous(&mut self, now: Duration) {
        if let Some(i) = self.selected() {
            let n = self.items.len();
            self.set_selected((i + n - 1) % n, now);
        }
    }

    /// Commit the selected item. Returns `true` if an item was committed.
    ///
    /// The list stays open; the owner closes it once the command ran.
    pub fn select(&mut self) -> bool {
        match self.selected() {
            Some(i) => self.select_index(i),
            None => false,
        }
    }

    /// Commit the item at `index`, as a pointer click does. Returns `true` if it exists.
    pub fn select_index(&mut self, index: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(item) = self.items.get(index) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(index, id = %item.id, "suggestion committed");
        self.command.commit(item);
        true
    }

    /// Rows to render; empty while closed or without items.
    pub fn rows(&self) -> Vec<SuggestionRow<'_, T>> {
        if !self.is_open() {
            return Vec::new();
        }
        build_rows(&self.items, self.selected(), self.config.render_separators)
    }

    /// Move the list's clock to `now`. The clock never goes backwards.
    pub fn advance(&mut self, now: Duration) {
        self.clock = self.clock.max(now);
    }

    /// Handle a key pressed at `now`. Returns `true` if the press was consumed.
    ///
    /// A selection change schedules its scroll one `scroll_delay` after `now`,
    /// however long the list sat idle before.
    pub fn on_key_down_at(&mut self, event: &KeyEvent, now: Duration) -> bool {
        self.advance(now);
        // Open but empty: let the editor have the key.
        if self.selected().is_none() {
            return false;
        }
        match event.key {
            Key::ArrowDown => self.next(now),
            Key::ArrowUp => self.previous(now),
            Key::Enter => {
                self.select();
            }
            _ => return false,
        }
        true
    }

    /// When the pending scroll request is due.
    pub fn next_scroll_deadline(&self) -> Option<Duration> {
        self.scroll.deadline()
    }

    /// Take the pending scroll request if it is due.
    pub fn poll_scroll(&mut self, now: Duration) -> Option<ScrollRequest> {
        self.advance(now);
        let request = self.scroll.poll(now)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(index = request.index, "scroll suggestion into view");
        Some(request)
    }

    fn set_selected(&mut self, selected: usize, now: Duration) {
        self.advance(now);
        self.state = NavigatorState::Open { selected };
        if self.items.is_empty() {
            self.scroll.cancel();
        } else {
            self.scroll.request(selected, self.clock);
        }
    }
}

impl<T, C: SuggestionCommand<T>> KeyHandler for SuggestionList<T, C> {
    fn on_key_down(&mut self, event: &KeyEvent) -> bool {
        self.on_key_down_at(event, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[derive(Default)]
    struct Recorder(Vec<String>);

    impl SuggestionCommand<()> for Recorder {
        fn commit(&mut self, item: &SuggestionItem<()>) {
            self.0.push(item.id.clone());
        }
    }

    fn items(n: usize) -> Vec<SuggestionItem> {
        (0..n)
            .map(|i| SuggestionItem::new(alloc::format!("id{i}"), alloc::format!("user {i}")))
            .collect()
    }

    fn list(n: usize) -> SuggestionList<(), Recorder> {
        let mut list = SuggestionList::new(SuggestionConfig::default(), Recorder::default());
        list.open(items(n), Duration::ZERO);
        list
    }

    fn key(k: Key) -> KeyEvent {
        KeyEvent::new(k)
    }

    #[test]
    fn opens_at_first_item() {
        let list = list(3);
        assert_eq!(list.state(), NavigatorState::Open { selected: 0 });
        assert_eq!(list.selected_item().map(|i| i.id.as_str()), Some("id0"));
    }

    #[test]
    fn wraps_both_ways() {
        let mut list = list(3);
        assert!(list.on_key_down(&key(Key::ArrowUp)));
        assert_eq!(list.selected(), Some(2));
        assert!(list.on_key_down(&key(Key::ArrowDown)));
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn twelve_items_wrap_exactly_once() {
        let mut list = list(12);
        let mut seen = Vec::new();
        for _ in 0..13 {
            list.on_key_down(&key(Key::ArrowDown));
            seen.push(list.selected());
        }
        // The twelfth press wraps back to the first item; the thirteenth moves on.
        assert_eq!(seen[10], Some(11));
        assert_eq!(seen[11], Some(0));
        assert_eq!(seen[12], Some(1));
        assert_eq!(seen.iter().filter(|s| **s == Some(0)).count(), 1);
    }

    #[test]
    fn enter_commits_selected() {
        let mut list = list(3);
        list.next(Duration::ZERO);
        assert!(list.on_key_down(&key(Key::Enter)));
        assert_eq!(list.command().0, ["id1"]);
        assert!(list.select_index(2));
        assert!(!list.select_index(9));
        assert_eq!(list.command().0, ["id1", "id2"]);
    }

    #[test]
    fn empty_and_closed_lists_ignore_keys() {
        let mut empty = list(0);
        assert!(empty.is_open());
        assert!(!empty.on_key_down(&key(Key::ArrowDown)));
        assert!(!empty.on_key_down(&key(Key::Enter)));
        assert!(empty.rows().is_empty());
        assert_eq!(empty.next_scroll_deadline(), None);

        let mut closed = list(3);
        closed.close();
        assert!(!closed.on_key_down(&key(Key::ArrowDown)));
        assert!(!closed.select());
        assert!(closed.rows().is_empty());
        assert!(closed.command().0.is_empty());
    }

    #[test]
    fn other_keys_fall_through() {
        let mut list = list(3);
        assert!(!list.on_key_down(&key(Key::Escape)));
        assert!(!list.on_key_down(&key(Key::Character('a'))));
    }

    #[test]
    fn set_items_resets_selection() {
        let mut list = list(5);
        list.next(Duration::ZERO);
        list.next(Duration::ZERO);
        list.set_items(items(4), Duration::ZERO);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn selection_changes_defer_scroll() {
        let ms = Duration::from_millis;
        let mut list = list(5);
        assert_eq!(list.next_scroll_deadline(), Some(ms(200)));
        list.poll_scroll(ms(100));
        assert!(list.on_key_down(&key(Key::ArrowDown)));
        // Stamped with the latest time seen (100ms), not the open time.
        assert_eq!(list.next_scroll_deadline(), Some(ms(300)));
        assert_eq!(list.poll_scroll(ms(250)), None);
        assert_eq!(list.poll_scroll(ms(300)).map(|r| r.index), Some(1));
        list.next(ms(400));
        list.close();
        assert_eq!(list.poll_scroll(ms(1000)), None);
    }

    #[test]
    fn idle_key_press_still_defers_scroll() {
        let ms = Duration::from_millis;
        let mut list = list(5);
        assert_eq!(list.poll_scroll(ms(200)).map(|r| r.index), Some(0));
        assert_eq!(list.next_scroll_deadline(), None);

        // Nothing polls while idle; the next press comes ten seconds later.
        assert!(list.on_key_down_at(&key(Key::ArrowDown), ms(10_000)));
        assert_eq!(list.next_scroll_deadline(), Some(ms(10_200)));
        assert_eq!(list.poll_scroll(ms(10_000)), None);
        assert_eq!(list.poll_scroll(ms(10_199)), None);
        assert_eq!(list.poll_scroll(ms(10_200)).map(|r| r.index), Some(1));
    }

    #[test]
    fn advance_stamps_untimed_key_presses() {
        let ms = Duration::from_millis;
        let mut list = list(5);
        list.advance(ms(5_000));
        assert!(list.on_key_down(&key(Key::ArrowDown)));
        assert_eq!(list.next_scroll_deadline(), Some(ms(5_200)));
        // The clock does not run backwards.
        list.advance(ms(10));
        assert!(list.on_key_down(&key(Key::ArrowDown)));
        assert_eq!(list.next_scroll_deadline(), Some(ms(5_200)));
    }

    #[test]
    fn open_empty_list_passes_navigation_to_the_editor() {
        let mut empty = list(0);
        for k in [Key::ArrowDown, Key::ArrowUp, Key::Enter] {
            assert!(!empty.on_key_down_at(&key(k), Duration::ZERO));
        }
        assert!(empty.is_open());
    }

    #[test]
    fn rows_mark_selection() {
        let mut list = list(2);
        list.next(Duration::ZERO);
        let rows = list.rows();
        assert_eq!(rows.len(), 2);
        assert!(matches!(
            rows[1],
            SuggestionRow::Item {
                index: 1,
                selected: true,
                ..
            }
        ));
    }
}
