// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mention suggestions above a decoration.
//!
//! This example shows the popup above the `@` decoration, walks the
//! selection with the arrow keys (wrapping at both ends), drains the deferred
//! scroll request, and commits with Enter.
//!
//! Run:
//! - `cargo run -p understory_demos --example suggest_mentions`

use core::time::Duration;

use kurbo::{Rect, Size};
use understory_floating::{Key, KeyEvent, OverlayHost};
use understory_suggest::{
    SuggestionConfig, SuggestionItem, SuggestionPopup, SuggestionRow, scroll_into_view_nearest,
};

const ENTRY_HEIGHT: f64 = 32.0;

fn main() {
    let ms = Duration::from_millis;
    let mut host = OverlayHost::new();
    let mut committed = Vec::new();
    let mut popup = SuggestionPopup::new(SuggestionConfig::default(), |item: &SuggestionItem| {
        committed.push(item.label.clone());
    });

    let items: Vec<SuggestionItem> = ["ann", "ben", "cleo", "dev", "eli"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let category = if i < 3 { "channel_members" } else { "others" };
            SuggestionItem::new(format!("u{i}"), *name).with_category(category)
        })
        .collect();
    popup.show(&mut host, items, ms(0));

    let decoration = Rect::new(120.0, 420.0, 170.0, 440.0);
    let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let origin = popup.place(&mut host, &decoration, Some(Size::new(240.0, 160.0)), viewport);
    println!("popup origin: {origin:?}, max height: {:?}", popup.max_height());

    println!("== Rows ==");
    for row in popup.list().rows() {
        match row {
            SuggestionRow::GroupTitle { category } => println!("  [{category}]"),
            SuggestionRow::Item { item, selected, .. } => {
                println!("  {} {}", if selected { ">" } else { " " }, item.label);
            }
        }
    }

    println!("== Navigation ==");
    let up = KeyEvent::new(Key::ArrowUp);
    popup.on_key_down_at(&up, ms(50));
    println!("  ArrowUp from the first entry -> {:?}", popup.list().selected());
    assert_eq!(popup.list().selected(), Some(4));

    // The scroll request is deferred; the list viewport shows three entries.
    let list_viewport = Rect::new(0.0, 0.0, 240.0, 3.0 * ENTRY_HEIGHT);
    if let Some(request) = popup.list_mut().poll_scroll(ms(250)) {
        let top = request.index as f64 * ENTRY_HEIGHT;
        let entry = Rect::new(0.0, top, 240.0, top + ENTRY_HEIGHT);
        println!(
            "  scroll {:?} -> offset {:?}",
            request,
            scroll_into_view_nearest(list_viewport, entry)
        );
    }

    popup.on_key_down_at(&KeyEvent::new(Key::Enter), ms(300));
    popup.hide(&mut host);
    drop(popup);
    println!("committed: {committed:?}");
    assert_eq!(committed, ["eli"]);
}
