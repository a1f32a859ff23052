// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A suggestion list floating next to its decoration.
//!
//! The decoration is the inline node the user is typing into (for example
//! the `@ann` being completed). The popup sits above it and flips below when
//! there is no room; its max height follows the space the size pass reports.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_floating::{
    FloatingPanel, KeyEvent, KeyHandler, OverlayHost, OverlayId, ReferenceSource,
    auto_update::{LayoutChange, SubscriptionId},
    registry::DismissTrigger,
};

use crate::config::SuggestionConfig;
use crate::item::SuggestionItem;
use crate::navigator::{SuggestionCommand, SuggestionList};

/// A [`SuggestionList`] with its floating panel and overlay registration.
#[derive(Clone, Debug)]
pub struct SuggestionPopup<T, C> {
    list: SuggestionList<T, C>,
    panel: FloatingPanel,
    overlay: Option<OverlayId>,
    stale: bool,
}

impl<T, C: SuggestionCommand<T>> SuggestionPopup<T, C> {
    /// Create a hidden popup.
    pub fn new(config: SuggestionConfig, command: C) -> Self {
        Self {
            panel: FloatingPanel::new(config.floating_config()),
            list: SuggestionList::new(config, command),
            overlay: None,
            stale: false,
        }
    }

    /// The list.
    pub fn list(&self) -> &SuggestionList<T, C> {
        &self.list
    }

    /// The list, mutably.
    pub fn list_mut(&mut self) -> &mut SuggestionList<T, C> {
        &mut self.list
    }

    /// True while shown.
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Show `items` and register the popup with `host`.
    pub fn show(&mut self, host: &mut OverlayHost, items: Vec<SuggestionItem<T>>, now: Duration) {
        self.list.open(items, now);
        if self.overlay.is_none() {
            self.overlay = Some(host.open(&mut self.panel));
        }
        self.stale = true;
    }

    /// Replace the items while shown; the selection resets and the popup repositions.
    pub fn update_items(&mut self, items: Vec<SuggestionItem<T>>, now: Duration) {
        self.list.set_items(items, now);
        self.stale = self.is_open();
    }

    /// Hide the popup and tear down its subscription.
    pub fn hide(&mut self, host: &mut OverlayHost) {
        self.list.close();
        if let Some(id) = self.overlay.take() {
            host.close(&mut self.panel, id);
        }
        self.stale = false;
    }

    /// Mark the popup stale if `drained` carries a change for it.
    pub fn on_layout_changes(&mut self, drained: &[(SubscriptionId, LayoutChange)]) {
        if self.panel.wants(drained) {
            self.stale = true;
        }
    }

    /// True if [`SuggestionPopup::place`] should run.
    pub fn needs_reposition(&self) -> bool {
        self.is_open() && self.stale
    }

    /// Position against `decoration`. `size` is the rendered popup size, or
    /// `None` if it is not rendered yet.
    pub fn place(
        &mut self,
        host: &mut OverlayHost,
        decoration: &impl ReferenceSource,
        size: Option<Size>,
        viewport: Rect,
    ) -> Option<Point> {
        let id = self.overlay?;
        self.stale = false;
        Some(host.place(&mut self.panel, id, decoration, size, viewport, None))
    }

    /// Max height for the list at the last position, if the size pass ran.
    pub fn max_height(&self) -> Option<f64> {
        let size = self.panel.position()?.data.size?;
        Some(self.list.config().max_height(&size))
    }

    /// Handle a key pressed at `now`. Keys reach the list only while shown.
    pub fn on_key_down_at(&mut self, event: &KeyEvent, now: Duration) -> bool {
        self.is_open() && self.list.on_key_down_at(event, now)
    }

    /// Hide if `trigger` dismisses the popup. Returns `true` if it was hidden.
    pub fn dismiss(&mut self, host: &mut OverlayHost, trigger: DismissTrigger) -> bool {
        let Some(id) = self.overlay else {
            return false;
        };
        if !host.dismissed_by(trigger).contains(&id) {
            return false;
        }
        self.hide(host);
        true
    }
}

impl<T, C: SuggestionCommand<T>> KeyHandler for SuggestionPopup<T, C> {
    fn on_key_down(&mut self, event: &KeyEvent) -> bool {
        self.is_open() && self.list.on_key_down(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;
    use understory_floating::{Key, Placement, Side};

    fn popup() -> SuggestionPopup<(), impl FnMut(&SuggestionItem)> {
        SuggestionPopup::new(SuggestionConfig::default(), |_: &SuggestionItem| {})
    }

    fn items() -> Vec<SuggestionItem> {
        vec![
            SuggestionItem::new("1", "ann"),
            SuggestionItem::new("2", "bob"),
        ]
    }

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1024.0, 768.0);

    #[test]
    fn sits_above_decoration_with_room() {
        let mut host = OverlayHost::new();
        let mut popup = popup();
        popup.show(&mut host, items(), Duration::ZERO);
        assert!(popup.needs_reposition());
        let decoration = Rect::new(100.0, 500.0, 140.0, 520.0);
        let origin = popup.place(&mut host, &decoration, Some(Size::new(240.0, 200.0)), VIEWPORT);
        assert_eq!(origin, Some(Point::new(100.0, 500.0 - 200.0 - 8.0)));
        let placement = popup.panel.position().map(|p| p.placement);
        assert_eq!(placement, Some(Placement::TOP_START));
        // Room above the decoration: 500 minus the 48px inset.
        assert_eq!(popup.max_height(), Some(452.0));
        assert!(!popup.needs_reposition());
    }

    #[test]
    fn flips_below_near_top() {
        let mut host = OverlayHost::new();
        let mut popup = popup();
        popup.show(&mut host, items(), Duration::ZERO);
        let decoration = Rect::new(100.0, 30.0, 140.0, 50.0);
        popup.place(&mut host, &decoration, Some(Size::new(240.0, 200.0)), VIEWPORT);
        let side = popup.panel.position().map(|p| p.placement.side);
        assert_eq!(side, Some(Side::Bottom));
    }

    #[test]
    fn keys_only_while_shown() {
        let mut host = OverlayHost::new();
        let mut popup = popup();
        assert!(!popup.on_key_down(&KeyEvent::new(Key::ArrowDown)));
        popup.show(&mut host, items(), Duration::ZERO);
        assert!(popup.on_key_down(&KeyEvent::new(Key::ArrowDown)));
        assert_eq!(popup.list().selected(), Some(1));
        popup.update_items(items(), Duration::ZERO);
        assert_eq!(popup.list().selected(), Some(0));
    }

    #[test]
    fn timed_keys_defer_scroll_from_the_press() {
        let ms = Duration::from_millis;
        let mut host = OverlayHost::new();
        let mut popup = popup();
        assert!(!popup.on_key_down_at(&KeyEvent::new(Key::ArrowDown), ms(0)));
        popup.show(&mut host, items(), ms(0));
        assert!(popup.list_mut().poll_scroll(ms(200)).is_some());
        assert!(popup.on_key_down_at(&KeyEvent::new(Key::ArrowDown), ms(3_000)));
        assert_eq!(popup.list().next_scroll_deadline(), Some(ms(3_200)));
        assert_eq!(popup.list_mut().poll_scroll(ms(3_000)), None);
    }

    #[test]
    fn escape_hides_topmost() {
        let mut host = OverlayHost::new();
        let mut popup = popup();
        popup.show(&mut host, items(), Duration::ZERO);
        assert!(popup.dismiss(&mut host, DismissTrigger::Escape));
        assert!(!popup.is_open());
        assert!(!popup.list().is_open());
        assert!(host.overlays.is_empty());
        assert!(host.events.is_empty());
        assert!(!popup.dismiss(&mut host, DismissTrigger::Escape));
    }

    #[test]
    fn commits_reach_the_command() {
        let mut host = OverlayHost::new();
        let mut picked: Vec<String> = Vec::new();
        {
            let mut popup = SuggestionPopup::new(
                SuggestionConfig::default(),
                |item: &SuggestionItem| picked.push(item.label.clone()),
            );
            popup.show(&mut host, items(), Duration::ZERO);
            popup.on_key_down(&KeyEvent::new(Key::ArrowUp));
            popup.on_key_down(&KeyEvent::new(Key::Enter));
            popup.hide(&mut host);
        }
        assert_eq!(picked, ["bob"]);
    }
}
