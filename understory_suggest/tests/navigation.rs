// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for suggestion navigation.
//!
//! 1. `next` N times returns to the starting index.
//! 2. `previous` from the first item selects the last.
//! 3. Replacing the items always resets the selection to the first item.
//! 4. The selection never leaves `0..len`.

use core::time::Duration;

use proptest::prelude::*;
use understory_floating::{Key, KeyEvent, KeyHandler};
use understory_suggest::{SuggestionConfig, SuggestionItem, SuggestionList};

type List = SuggestionList<(), fn(&SuggestionItem)>;

fn ignore(_: &SuggestionItem) {}

fn items(n: usize) -> Vec<SuggestionItem> {
    (0..n)
        .map(|i| SuggestionItem::new(format!("{i}"), format!("item {i}")))
        .collect()
}

fn open(n: usize) -> List {
    let mut list: List =
        SuggestionList::new(SuggestionConfig::default(), ignore as fn(&SuggestionItem));
    list.open(items(n), Duration::ZERO);
    list
}

fn key_strategy() -> impl Strategy<Value = Key> {
    prop_oneof![Just(Key::ArrowUp), Just(Key::ArrowDown), Just(Key::Enter)]
}

proptest! {
    #[test]
    fn next_n_times_returns_to_start(n in 1usize..64, start_steps in 0usize..64) {
        let mut list = open(n);
        for _ in 0..start_steps {
            list.next(Duration::ZERO);
        }
        let start = list.selected();
        for _ in 0..n {
            list.next(Duration::ZERO);
        }
        prop_assert_eq!(list.selected(), start);
    }

    #[test]
    fn previous_from_first_is_last(n in 1usize..64) {
        let mut list = open(n);
        list.previous(Duration::ZERO);
        prop_assert_eq!(list.selected(), Some(n - 1));
    }

    #[test]
    fn replacing_items_resets_selection(
        n in 1usize..32,
        steps in 0usize..40,
        m in 1usize..32,
    ) {
        let mut list = open(n);
        for _ in 0..steps {
            list.next(Duration::ZERO);
        }
        list.set_items(items(m), Duration::ZERO);
        prop_assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn selection_stays_in_bounds(
        n in 1usize..20,
        keys in prop::collection::vec(key_strategy(), 0..50),
    ) {
        let mut list = open(n);
        for key in keys {
            prop_assert!(list.on_key_down(&KeyEvent::new(key)));
            let selected = list.selected().unwrap_or(usize::MAX);
            prop_assert!(selected < n);
        }
    }
}

#[test]
fn twelve_items_wrap_once_in_twelve_downs() {
    let mut list = open(12);
    let mut wraps = 0;
    for _ in 0..13 {
        let before = list.selected();
        list.on_key_down(&KeyEvent::new(Key::ArrowDown));
        if list.selected() < before {
            wraps += 1;
        }
    }
    assert_eq!(wraps, 1);
    assert_eq!(list.selected(), Some(1));
}
