// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The link editor overlay.
//!
//! The editor floats above the current selection with a URL field and a
//! display-text field. Both fields start from the selection (the existing
//! link's href and the selected text) and hold a draft only once edited.
//! Submitting turns the draft into a [`LinkEdit`] for the host's editor to
//! apply; submitting, removing, Escape, and an outside press all close the
//! overlay and discard the draft.
//!
//! ```
//! use understory_floating::OverlayHost;
//! use understory_toolbar::{LinkContext, LinkEdit, LinkEditor, ToolbarConfig};
//!
//! let mut host = OverlayHost::new();
//! let mut link = LinkEditor::new(&ToolbarConfig::default());
//! link.open(&mut host, LinkContext::new("docs"));
//! link.set_url("https://example.com");
//! assert!(link.show_save_hint());
//! assert_eq!(
//!     link.submit(&mut host),
//!     Some(LinkEdit::SetHref { href: "https://example.com".into() })
//! );
//! assert!(!link.is_open());
//! ```

use alloc::string::String;

use kurbo::{Point, Rect, Size};
use understory_floating::{
    FloatingConfig, FloatingPanel, Flip, Key, KeyEvent, Offset, OverlayHost, OverlayId,
    Placement, ReferenceSource, Strategy,
    auto_update::{LayoutChange, SubscriptionId},
    registry::DismissTrigger,
};

use crate::config::ToolbarConfig;

/// What the selection looks like when the link editor opens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkContext {
    /// Text covered by the selection.
    pub selected_text: String,
    /// Href of the link mark in the selection, if any.
    pub previous_href: Option<String>,
    /// A link mark is active at the selection.
    pub link_active: bool,
}

impl LinkContext {
    /// A selection over plain text.
    pub fn new(selected_text: impl Into<String>) -> Self {
        Self {
            selected_text: selected_text.into(),
            previous_href: None,
            link_active: false,
        }
    }

    /// The selection is inside an existing link to `href`.
    #[must_use]
    pub fn with_link(mut self, href: impl Into<String>) -> Self {
        self.previous_href = Some(href.into());
        self.link_active = true;
        self
    }

    fn previous_href(&self) -> &str {
        self.previous_href.as_deref().unwrap_or_default()
    }
}

/// The change the host's editor applies to the selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkEdit {
    /// Remove the link mark around the selection.
    Unset,
    /// Keep the text; set the href of the link covering it.
    SetHref {
        /// New href.
        href: String,
    },
    /// Replace the selection with `text` and link it to `href`.
    Replace {
        /// Inserted display text.
        text: String,
        /// New href.
        href: String,
    },
}

/// Result of a key press offered to an open link editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkKeyOutcome {
    /// Not handled; the host's input field keeps the press.
    Ignored,
    /// The editor closed without changes.
    Closed,
    /// The draft was submitted; apply the edit.
    Submitted(LinkEdit),
}

/// Headless state of the link editor overlay.
#[derive(Clone, Debug)]
pub struct LinkEditor {
    panel: FloatingPanel,
    overlay: Option<OverlayId>,
    context: LinkContext,
    url: Option<String>,
    text: Option<String>,
}

impl LinkEditor {
    /// Create a closed editor: fixed strategy, `top-start`, offset then flip.
    pub fn new(config: &ToolbarConfig) -> Self {
        let floating = FloatingConfig::new(Placement::TOP_START)
            .with_strategy(Strategy::Fixed)
            .with_middleware(Offset::main_axis(config.link_offset))
            .with_middleware(Flip::default().with_padding(config.link_padding));
        Self {
            panel: FloatingPanel::new(floating).with_interest(LayoutChange::all()),
            overlay: None,
            context: LinkContext::default(),
            url: None,
            text: None,
        }
    }

    /// True while open.
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Overlay id while open.
    pub fn overlay(&self) -> Option<OverlayId> {
        self.overlay
    }

    /// Open over a selection described by `context`. Reopening replaces the
    /// context and discards the draft.
    pub fn open(&mut self, host: &mut OverlayHost, context: LinkContext) -> OverlayId {
        self.clear_draft();
        self.context = context;
        if let Some(id) = self.overlay {
            return id;
        }
        let id = host.open(&mut self.panel);
        self.overlay = Some(id);
        #[cfg(feature = "tracing")]
        tracing::trace!(?id, "link editor opened");
        id
    }

    /// Close and discard the draft.
    pub fn close(&mut self, host: &mut OverlayHost) {
        self.clear_draft();
        if let Some(id) = self.overlay.take() {
            host.close(&mut self.panel, id);
            #[cfg(feature = "tracing")]
            tracing::trace!(?id, "link editor closed");
        }
    }

    /// The URL field changed.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// The display-text field changed.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Value of the URL field: the draft, else the existing href.
    pub fn url(&self) -> &str {
        self.url
            .as_deref()
            .unwrap_or_else(|| self.context.previous_href())
    }

    /// Value of the display-text field: the draft, else the selected text.
    pub fn text(&self) -> &str {
        self.text
            .as_deref()
            .unwrap_or(self.context.selected_text.as_str())
    }

    /// True when an edited URL differs from the existing href ("Enter to save").
    pub fn show_save_hint(&self) -> bool {
        self.url
            .as_deref()
            .is_some_and(|url| url != self.context.previous_href())
    }

    /// True when the remove button is offered: the selection already has a link.
    pub fn can_remove(&self) -> bool {
        self.context.link_active || !self.context.previous_href().is_empty()
    }

    /// The edit the current draft describes.
    ///
    /// Empty fields fall back: the URL to the existing href, the text to the
    /// selected text and then to the URL.
    pub fn pending_edit(&self) -> LinkEdit {
        let href = match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => self.context.previous_href(),
        };
        if href.is_empty() {
            return LinkEdit::Unset;
        }
        let selected = self.context.selected_text.as_str();
        let text = [self.text.as_deref().unwrap_or_default(), selected, href]
            .into_iter()
            .find(|t| !t.is_empty())
            .unwrap_or(href);
        if text == selected {
            LinkEdit::SetHref { href: href.into() }
        } else {
            LinkEdit::Replace {
                text: text.into(),
                href: href.into(),
            }
        }
    }

    /// Submit the draft and close. `None` if the editor is not open.
    pub fn submit(&mut self, host: &mut OverlayHost) -> Option<LinkEdit> {
        if !self.is_open() {
            return None;
        }
        let edit = self.pending_edit();
        self.close(host);
        Some(edit)
    }

    /// Remove the link and close. `None` if the editor is not open.
    pub fn remove(&mut self, host: &mut OverlayHost) -> Option<LinkEdit> {
        if !self.is_open() {
            return None;
        }
        self.close(host);
        Some(LinkEdit::Unset)
    }

    /// Enter submits, Escape closes; anything else belongs to the input fields.
    pub fn handle_key(&mut self, host: &mut OverlayHost, event: &KeyEvent) -> LinkKeyOutcome {
        if !self.is_open() {
            return LinkKeyOutcome::Ignored;
        }
        match event.key {
            Key::Escape => {
                self.close(host);
                LinkKeyOutcome::Closed
            }
            Key::Enter => self
                .submit(host)
                .map_or(LinkKeyOutcome::Ignored, LinkKeyOutcome::Submitted),
            _ => LinkKeyOutcome::Ignored,
        }
    }

    /// Close if a press at `point` lands outside the editor and the button
    /// passed to [`LinkEditor::reposition`]. Returns `true` if it closed.
    pub fn on_pointer_down(&mut self, host: &mut OverlayHost, point: Point) -> bool {
        let Some(id) = self.overlay else {
            return false;
        };
        if !host
            .dismissed_by(DismissTrigger::PointerDown(point))
            .contains(&id)
        {
            return false;
        }
        self.close(host);
        true
    }

    /// True if `drained` carries a layout change for the editor.
    pub fn wants(&self, drained: &[(SubscriptionId, LayoutChange)]) -> bool {
        self.panel.wants(drained)
    }

    /// Position the editor against `anchor`, usually a
    /// [`SelectionAnchor`](understory_floating::SelectionAnchor) over the
    /// current selection. `button` is the toolbar's link button; presses on it
    /// do not dismiss the editor.
    pub fn reposition(
        &mut self,
        host: &mut OverlayHost,
        anchor: &impl ReferenceSource,
        size: Option<Size>,
        viewport: Rect,
        button: Option<Rect>,
    ) -> Option<Point> {
        let id = self.overlay?;
        Some(host.place(&mut self.panel, id, anchor, size, viewport, button))
    }

    fn clear_draft(&mut self) {
        self.url = None;
        self.text = None;
    }
}
