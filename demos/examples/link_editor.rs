// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link editor over a text selection.
//!
//! This example anchors the link editor to a selection synthesized from caret
//! geometry, shows how it flips when there is no room below, and turns the
//! draft into the edit the host applies.
//!
//! Run:
//! - `cargo run -p understory_demos --example link_editor`

use core::ops::Range;

use kurbo::{Rect, Size};
use understory_floating::{CaretGeometry, Key, KeyEvent, OverlayHost, SelectionAnchor};
use understory_toolbar::{LinkContext, LinkEdit, LinkEditor, LinkKeyOutcome, ToolbarConfig};

/// A single line of monospace text at `y`.
struct Line {
    y: f64,
}

impl CaretGeometry for Line {
    fn caret_rect(&self, pos: usize) -> Option<Rect> {
        let x = 8.0 * pos as f64;
        Some(Rect::new(x, self.y, x, self.y + 18.0))
    }

    fn node_rect(&self, _pos: usize) -> Option<Rect> {
        None
    }
}

fn main() {
    let mut host = OverlayHost::new();
    let mut editor = LinkEditor::new(&ToolbarConfig::default());
    let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
    let size = Some(Size::new(280.0, 96.0));

    println!("== New link ==");
    let line = Line { y: 100.0 };
    let ranges: [Range<usize>; 1] = [10..18];
    editor.open(&mut host, LinkContext::new("selected"));
    let anchor = SelectionAnchor::text(&line, &ranges);
    let origin = editor.reposition(&mut host, &anchor, size, viewport, None);
    println!("  flipped below the selection at {origin:?}");

    editor.set_url("https://example.com");
    println!("  save hint: {}", editor.show_save_hint());
    let outcome = editor.handle_key(&mut host, &KeyEvent::new(Key::Enter));
    println!("  Enter -> {outcome:?}");
    assert_eq!(
        outcome,
        LinkKeyOutcome::Submitted(LinkEdit::SetHref {
            href: "https://example.com".into()
        })
    );
    assert!(!editor.is_open());

    println!("== Existing link near the bottom ==");
    let line = Line { y: 560.0 };
    editor.open(
        &mut host,
        LinkContext::new("docs").with_link("https://example.com/docs"),
    );
    let anchor = SelectionAnchor::text(&line, &ranges);
    let origin = editor.reposition(&mut host, &anchor, size, viewport, None);
    println!("  above the selection (primary placement) at {origin:?}");
    editor.set_text("the docs");
    println!("  pending: {:?}", editor.pending_edit());
    println!("  can remove: {}", editor.can_remove());
    let removed = editor.remove(&mut host);
    println!("  remove -> {removed:?}");
    assert_eq!(removed, Some(LinkEdit::Unset));
}
