// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composer's control catalog.

use alloc::vec::Vec;

use understory_floating::Modifiers;

use crate::controls::{
    Control, ControlKind, EditorCommand, FormattingMode, IconRef, LabelDescriptor, Shortcut,
};

const CTRL: Modifiers = Modifiers::CTRL;
const CTRL_SHIFT: Modifiers = Modifiers::CTRL.union(Modifiers::SHIFT);
const CTRL_ALT: Modifiers = Modifiers::CTRL.union(Modifiers::ALT);

const fn leaf(
    mode: FormattingMode,
    icon: &'static str,
    label: LabelDescriptor,
    shortcut: Shortcut,
) -> Control {
    Control {
        mode,
        kind: ControlKind::Leaf,
        command: EditorCommand::ToggleMark(mode),
        icon: IconRef(icon),
        label,
        shortcut: Some(shortcut),
    }
}

const fn block(
    mode: FormattingMode,
    icon: &'static str,
    label: LabelDescriptor,
    shortcut: Option<Shortcut>,
) -> Control {
    Control {
        mode,
        kind: ControlKind::Block,
        command: EditorCommand::ToggleBlock(mode),
        icon: IconRef(icon),
        label,
        shortcut,
    }
}

/// Bold.
pub const BOLD: Control = leaf(
    FormattingMode::Bold,
    "format-bold",
    LabelDescriptor::new("accessibility.button.bold", "bold"),
    Shortcut::new(CTRL, 'b'),
);

/// Italic.
pub const ITALIC: Control = leaf(
    FormattingMode::Italic,
    "format-italic",
    LabelDescriptor::new("accessibility.button.italic", "italic"),
    Shortcut::new(CTRL, 'i'),
);

/// Strike-through.
pub const STRIKE: Control = leaf(
    FormattingMode::Strike,
    "format-strikethrough-variant",
    LabelDescriptor::new("accessibility.button.strike", "strike through"),
    Shortcut::new(CTRL_SHIFT, 'x'),
);

/// Inline code.
pub const CODE: Control = leaf(
    FormattingMode::Code,
    "code-tags",
    LabelDescriptor::new("accessibility.button.code", "code"),
    Shortcut::new(CTRL_ALT, 'c'),
);

/// Link. Opens the link editor instead of toggling a mark.
pub const LINK: Control = Control {
    mode: FormattingMode::Link,
    kind: ControlKind::Leaf,
    command: EditorCommand::OpenLinkEditor,
    icon: IconRef("link-variant"),
    label: LabelDescriptor::new("accessibility.button.link", "link"),
    shortcut: Some(Shortcut::new(CTRL_ALT, 'k')),
};

/// Bulleted list.
pub const BULLET_LIST: Control = block(
    FormattingMode::BulletList,
    "format-list-bulleted",
    LabelDescriptor::new("accessibility.button.bulleted_list", "bulleted list"),
    Some(Shortcut::new(CTRL_SHIFT, '8')),
);

/// Numbered list.
pub const ORDERED_LIST: Control = block(
    FormattingMode::OrderedList,
    "format-list-numbered",
    LabelDescriptor::new("accessibility.button.numbered_list", "numbered list"),
    Some(Shortcut::new(CTRL_SHIFT, '7')),
);

/// Block quote.
pub const BLOCKQUOTE: Control = block(
    FormattingMode::Blockquote,
    "format-quote-open",
    LabelDescriptor::new("accessibility.button.quote", "quote"),
    Some(Shortcut::new(CTRL_SHIFT, 'b')),
);

/// Code block.
pub const CODE_BLOCK: Control = block(
    FormattingMode::CodeBlock,
    "code-block",
    LabelDescriptor::new("accessibility.button.code_block", "code block"),
    None,
);

const fn heading(level: u8, icon: &'static str, label: LabelDescriptor, key: char) -> Control {
    Control {
        mode: FormattingMode::Heading(level),
        kind: ControlKind::Heading,
        command: EditorCommand::ToggleHeading(level),
        icon: IconRef(icon),
        label,
        shortcut: Some(Shortcut::new(CTRL_ALT, key)),
    }
}

/// Paragraph entry of the heading dropdown.
pub const PARAGRAPH: Control = Control {
    mode: FormattingMode::Paragraph,
    kind: ControlKind::Heading,
    command: EditorCommand::SetParagraph,
    icon: IconRef("format-paragraph"),
    label: LabelDescriptor::new("accessibility.button.paragraph", "paragraph"),
    shortcut: Some(Shortcut::new(CTRL_ALT, '0')),
};

/// Inline controls in toolbar order. The link control sits after strike when enabled.
pub fn leaf_controls(links_enabled: bool) -> Vec<Control> {
    let mut controls = alloc::vec![BOLD, ITALIC, STRIKE, CODE];
    if links_enabled {
        controls.insert(3, LINK);
    }
    controls
}

/// Block controls in toolbar order.
pub fn block_controls() -> Vec<Control> {
    alloc::vec![BULLET_LIST, ORDERED_LIST, BLOCKQUOTE, CODE_BLOCK]
}

/// The full toolbar sequence: leaf controls followed by block controls.
pub fn toolbar_controls(links_enabled: bool) -> Vec<Control> {
    let mut controls = leaf_controls(links_enabled);
    controls.extend(block_controls());
    controls
}

/// Entries of the heading dropdown: paragraph, then headings 1 to 3.
pub fn heading_controls() -> Vec<Control> {
    alloc::vec![
        PARAGRAPH,
        heading(
            1,
            "format-header-1",
            LabelDescriptor::new("accessibility.button.heading1", "heading 1"),
            '1',
        ),
        heading(
            2,
            "format-header-2",
            LabelDescriptor::new("accessibility.button.heading2", "heading 2"),
            '2',
        ),
        heading(
            3,
            "format-header-3",
            LabelDescriptor::new("accessibility.button.heading3", "heading 3"),
            '3',
        ),
    ]
}

/// True if a separator is drawn after `mode` in the toolbar.
pub fn separator_after(mode: FormattingMode) -> bool {
    matches!(mode, FormattingMode::Strike | FormattingMode::OrderedList)
}
