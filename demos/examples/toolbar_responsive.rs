// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive formatting toolbar.
//!
//! This example feeds a few container widths through the toolbar's debounced
//! observer, prints which controls stay inline and which overflow, then opens
//! the heading dropdown and dismisses it with an outside press.
//!
//! Run:
//! - `cargo run -p understory_demos --example toolbar_responsive`

use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_floating::{Key, KeyEvent, Modifiers, OverlayHost};
use understory_toolbar::{
    EditorCommand, EditorCommands, FormattingMode, Toolbar, ToolbarConfig, ToolbarLayout,
};

#[derive(Default)]
struct Editor {
    bold: bool,
    log: Vec<EditorCommand>,
}

impl EditorCommands for Editor {
    fn is_active(&self, mode: FormattingMode) -> bool {
        mode == FormattingMode::Bold && self.bold
    }

    fn run(&mut self, command: EditorCommand) {
        if command == EditorCommand::ToggleMark(FormattingMode::Bold) {
            self.bold = !self.bold;
        }
        self.log.push(command);
    }
}

fn print_layout(width: f64, layout: &ToolbarLayout<'_>) {
    let names = |views: &[understory_toolbar::ControlView<'_>]| {
        views
            .iter()
            .map(|v| v.control.mode.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    };
    println!(
        "{width:>5}px {:<6} inline: [{}]  overflow: [{}]",
        layout.tier,
        names(&layout.visible),
        names(&layout.overflow)
    );
}

fn main() {
    let ms = Duration::from_millis;
    let mut host = OverlayHost::new();
    let mut editor = Editor::default();
    let mut toolbar = Toolbar::new(ToolbarConfig::default(), true);
    toolbar.mount();

    let mut now = ms(0);
    println!("== Resizes ==");
    for width in [700.0, 650.0, 500.0, 420.0, 300.0] {
        // A burst of intermediate sizes collapses into the last one.
        toolbar.observe_width(width + 40.0, now);
        toolbar.observe_width(width, now + ms(4));
        let due = toolbar.next_deadline().unwrap_or(now);
        toolbar.poll(due);
        now = due + ms(100);
        print_layout(width, &toolbar.layout(&editor));
    }

    println!("== Shortcut ==");
    let ctrl_b = KeyEvent::new(Key::Character('b')).with_modifiers(Modifiers::CTRL);
    let handled = toolbar.handle_shortcut(&ctrl_b, &mut editor);
    println!("  Ctrl+B handled: {handled}, bold active: {}", editor.bold);
    assert!(editor.bold);

    println!("== Heading dropdown ==");
    let button = Rect::new(10.0, 380.0, 40.0, 404.0);
    let viewport = Rect::new(0.0, 0.0, 300.0, 600.0);
    toolbar.open_menu(&mut host);
    let origin = toolbar.place_menu(&mut host, button, Some(Size::new(160.0, 20.0)), viewport);
    println!("  menu origin: {origin:?}");
    for entry in toolbar.heading_entries(&editor) {
        println!("  - {} active={}", entry.control.mode, entry.state.active);
    }
    // A press on the button itself keeps the dropdown open.
    assert!(!toolbar.on_pointer_down(&mut host, Point::new(20.0, 390.0)));
    let closed = toolbar.on_pointer_down(&mut host, Point::new(250.0, 50.0));
    println!("  outside press closed the menu: {closed}");
    assert!(!toolbar.is_menu_open());

    toolbar.unmount(&mut host);
    println!("commands run: {:?}", editor.log);
}
