// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting controls and responsive truncation.
//!
//! A [`Control`] is immutable data: what it toggles, how it is labelled, and
//! which shortcut triggers it. Activation state and the action itself go
//! through the host's [`EditorCommands`] implementation.
//!
//! [`select_controls`] splits an ordered control sequence into the prefix the
//! current [`WidthTier`] shows and the suffix that goes to the overflow menu.

use core::fmt;

use understory_floating::{Key, KeyEvent, Modifiers};

use crate::config::TierCounts;
use crate::tier::WidthTier;

/// What a control formats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormattingMode {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Struck-through text.
    Strike,
    /// Hyperlink.
    Link,
    /// Inline code.
    Code,
    /// Bulleted list.
    BulletList,
    /// Numbered list.
    OrderedList,
    /// Block quote.
    Blockquote,
    /// Fenced code block.
    CodeBlock,
    /// Plain paragraph.
    Paragraph,
    /// Heading of level 1 to 3.
    Heading(u8),
}

impl FormattingMode {
    /// Stable lowercase name, suitable for element ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Strike => "strike",
            Self::Link => "link",
            Self::Code => "code",
            Self::BulletList => "ul",
            Self::OrderedList => "ol",
            Self::Blockquote => "quote",
            Self::CodeBlock => "code_block",
            Self::Paragraph => "p",
            Self::Heading(1) => "h1",
            Self::Heading(2) => "h2",
            Self::Heading(3) => "h3",
            Self::Heading(_) => "h",
        }
    }
}

impl fmt::Display for FormattingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action a control asks the editor to perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    /// Toggle an inline mark (bold, italic, strike, code).
    ToggleMark(FormattingMode),
    /// Toggle a block type (lists, quote, code block).
    ToggleBlock(FormattingMode),
    /// Turn the current block into a paragraph.
    SetParagraph,
    /// Toggle a heading of the given level.
    ToggleHeading(u8),
    /// Open the link editor over the selection.
    OpenLinkEditor,
}

/// Which group a control belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Inline formatting; disabled inside code blocks.
    Leaf,
    /// Block formatting.
    Block,
    /// Entry of the heading dropdown.
    Heading,
}

/// Name of an icon in the host's icon set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconRef(pub &'static str);

/// A translatable label: message id plus the default text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LabelDescriptor {
    /// Message id looked up in the host's catalog.
    pub id: &'static str,
    /// Text used when the catalog has no entry.
    pub default_message: &'static str,
}

impl LabelDescriptor {
    /// Create a descriptor.
    pub const fn new(id: &'static str, default_message: &'static str) -> Self {
        Self {
            id,
            default_message,
        }
    }
}

/// A keyboard shortcut: modifiers plus a character key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shortcut {
    /// Modifiers that must be held, exactly.
    pub modifiers: Modifiers,
    /// Lowercase character.
    pub key: char,
}

impl Shortcut {
    /// Create a shortcut.
    pub const fn new(modifiers: Modifiers, key: char) -> Self {
        Self { modifiers, key }
    }

    /// True if `event` presses this shortcut.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        match event.key {
            Key::Character(c) => {
                event.modifiers == self.modifiers && c.eq_ignore_ascii_case(&self.key)
            }
            _ => false,
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (Modifiers::CTRL, "Ctrl"),
            (Modifiers::META, "Meta"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
        ] {
            if self.modifiers.contains(flag) {
                write!(f, "{name}+")?;
            }
        }
        write!(f, "{}", self.key.to_ascii_uppercase())
    }
}

/// The editor capability controls are evaluated against.
pub trait EditorCommands {
    /// True if `mode` applies at the current selection.
    fn is_active(&self, mode: FormattingMode) -> bool;

    /// Perform `command`.
    fn run(&mut self, command: EditorCommand);
}

/// Render state of a control at the current selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ControlState {
    /// The control's formatting applies.
    pub active: bool,
    /// The control cannot be used.
    pub disabled: bool,
}

/// A formatting control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Control {
    /// What it formats.
    pub mode: FormattingMode,
    /// Group.
    pub kind: ControlKind,
    /// What invoking it does.
    pub command: EditorCommand,
    /// Icon.
    pub icon: IconRef,
    /// Accessible label.
    pub label: LabelDescriptor,
    /// Keyboard shortcut, if any.
    pub shortcut: Option<Shortcut>,
}

impl Control {
    /// True if the control's formatting applies at the selection.
    pub fn is_active(&self, editor: &impl EditorCommands) -> bool {
        editor.is_active(self.mode)
    }

    /// Active and disabled state. Leaf controls are disabled inside a code block.
    pub fn state(&self, editor: &impl EditorCommands) -> ControlState {
        ControlState {
            active: self.is_active(editor),
            disabled: self.kind == ControlKind::Leaf
                && editor.is_active(FormattingMode::CodeBlock),
        }
    }

    /// Run the control's command unless it is disabled. Returns `true` if it ran.
    pub fn invoke(&self, editor: &mut impl EditorCommands) -> bool {
        if self.state(editor).disabled {
            return false;
        }
        editor.run(self.command);
        true
    }
}

/// The visible prefix and overflow suffix of a control sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlSplit<'a, T> {
    /// Shown in the toolbar, in order.
    pub visible: &'a [T],
    /// Moved to the overflow menu, in order.
    pub overflow: &'a [T],
}

/// Split `controls` for `tier`: the first `N(tier)` are visible, the rest overflow.
///
/// Order is preserved. When fewer controls than `N(tier)` exist, all are
/// visible and the overflow is empty.
///
/// ```
/// use understory_toolbar::{TierCounts, WidthTier, select_controls};
///
/// let controls = ["b", "i", "s", "a", "c", "ul", "ol", "q", "cb"];
/// let split = select_controls(&controls, WidthTier::Narrow, &TierCounts::DEFAULT);
/// assert_eq!(split.visible, ["b", "i", "s"]);
/// assert_eq!(split.overflow.len(), 6);
/// ```
pub fn select_controls<'a, T>(
    controls: &'a [T],
    tier: WidthTier,
    counts: &TierCounts,
) -> ControlSplit<'a, T> {
    let n = tier.visible_count(counts).min(controls.len());
    let (visible, overflow) = controls.split_at(n);
    ControlSplit { visible, overflow }
}
