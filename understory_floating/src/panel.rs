// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A floating panel that owns its configuration, subscription, and last position.

use kurbo::{Point, Rect, Size};

use crate::auto_update::{LayoutChange, LayoutEvents, SubscriptionId};
use crate::compute::{FloatingConfig, Position, compute_position};
use crate::reference::{ReferenceSource, resolve_reference};

/// A floating panel positioned against a reference.
///
/// ## Lifecycle
///
/// - [`FloatingPanel::mount`] subscribes the panel to a [`LayoutEvents`] hub.
/// - The host drains the hub and calls [`FloatingPanel::update`] whenever
///   [`FloatingPanel::wants`] reports a pending change for this panel.
/// - [`FloatingPanel::unmount`] tears the subscription down synchronously;
///   after that no drained change refers to this panel.
///
/// ## Degraded geometry
///
/// A missing reference resolves to [`Rect::ZERO`]. When the panel itself is
/// not rendered (no size) or the result is not finite, the last good position
/// is kept; before any good position exists the panel sits at the origin.
#[derive(Clone, Debug)]
pub struct FloatingPanel {
    config: FloatingConfig,
    interest: LayoutChange,
    subscription: Option<SubscriptionId>,
    position: Option<Position>,
}

impl FloatingPanel {
    /// Create an unmounted panel that reacts to [`LayoutChange::default`].
    pub fn new(config: FloatingConfig) -> Self {
        Self {
            config,
            interest: LayoutChange::default(),
            subscription: None,
            position: None,
        }
    }

    /// Set the layout changes that trigger repositioning while mounted.
    #[must_use]
    pub fn with_interest(mut self, interest: LayoutChange) -> Self {
        self.interest = interest;
        self
    }

    /// Positioning configuration.
    pub fn config(&self) -> &FloatingConfig {
        &self.config
    }

    /// Replace the positioning configuration. Takes effect on the next update.
    pub fn set_config(&mut self, config: FloatingConfig) {
        self.config = config;
    }

    /// Subscribe to `events`. Mounting twice keeps the existing subscription.
    pub fn mount(&mut self, events: &mut LayoutEvents) -> SubscriptionId {
        if let Some(id) = self.subscription
            && events.is_subscribed(id)
        {
            return id;
        }
        let id = events.subscribe(self.interest);
        self.subscription = Some(id);
        id
    }

    /// Unsubscribe from `events` and forget the last position.
    pub fn unmount(&mut self, events: &mut LayoutEvents) {
        if let Some(id) = self.subscription.take() {
            events.unsubscribe(id);
        }
        self.position = None;
    }

    /// True while subscribed.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// The panel's subscription, if mounted.
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    /// True if a drained batch contains a change for this panel.
    pub fn wants(&self, drained: &[(SubscriptionId, LayoutChange)]) -> bool {
        self.subscription
            .is_some_and(|me| drained.iter().any(|(id, _)| *id == me))
    }

    /// Recompute the position.
    ///
    /// `floating` is the rendered size of the panel, or `None` if it is not
    /// rendered. `boundary` is the clipping rect, normally the viewport.
    pub fn update(
        &mut self,
        reference: &impl ReferenceSource,
        floating: Option<Size>,
        boundary: Rect,
    ) -> Point {
        let Some(floating) = floating else {
            return self.origin();
        };
        let reference = resolve_reference(reference);
        let next = compute_position(reference, floating, boundary, &self.config);
        if next.is_finite() {
            self.position = Some(next);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(?reference, "non-finite floating position, keeping last");
        }
        self.origin()
    }

    /// Last good position.
    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Top-left corner of the last good position, or the origin.
    pub fn origin(&self) -> Point {
        self.position.as_ref().map_or(Point::ZERO, Position::origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{Flip, Offset};
    use crate::placement::{Placement, Strategy};
    use crate::reference::ElementAnchor;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn link_panel() -> FloatingPanel {
        FloatingPanel::new(
            FloatingConfig::new(Placement::TOP_START)
                .with_strategy(Strategy::Fixed)
                .with_middleware(Offset::main_axis(8.0))
                .with_middleware(Flip::default().with_padding(8.0)),
        )
    }

    #[test]
    fn mount_and_unmount_manage_subscription() {
        let mut hub = LayoutEvents::new();
        let mut panel = link_panel();
        let id = panel.mount(&mut hub);
        assert_eq!(panel.mount(&mut hub), id);
        assert_eq!(hub.len(), 1);

        hub.emit(LayoutChange::SCROLL);
        let drained = hub.drain();
        assert!(panel.wants(&drained));

        panel.unmount(&mut hub);
        assert!(!panel.is_mounted());
        hub.emit(LayoutChange::SCROLL);
        let drained = hub.drain();
        assert!(drained.is_empty());
        assert!(!panel.wants(&drained));
    }

    #[test]
    fn update_tracks_reference() {
        let mut panel = link_panel();
        let anchor = ElementAnchor::mounted(Rect::new(100.0, 300.0, 140.0, 320.0));
        let p = panel.update(&anchor, Some(Size::new(400.0, 90.0)), VIEWPORT);
        assert_eq!(p, Point::new(100.0, 202.0));
        assert_eq!(panel.position().unwrap().placement, Placement::TOP_START);
    }

    #[test]
    fn unrendered_panel_keeps_last_good_position() {
        let mut panel = link_panel();
        assert_eq!(
            panel.update(&ElementAnchor::new(), None, VIEWPORT),
            Point::ZERO
        );
        let anchor = Rect::new(100.0, 300.0, 140.0, 320.0);
        let good = panel.update(&anchor, Some(Size::new(400.0, 90.0)), VIEWPORT);
        let kept = panel.update(&Rect::new(0.0, 0.0, 1.0, 1.0), None, VIEWPORT);
        assert_eq!(good, kept);
    }

    #[test]
    fn non_finite_result_keeps_last_good_position() {
        let mut panel = link_panel();
        let anchor = Rect::new(100.0, 300.0, 140.0, 320.0);
        let good = panel.update(&anchor, Some(Size::new(400.0, 90.0)), VIEWPORT);
        let broken = Rect::new(f64::NAN, 0.0, 1.0, 1.0);
        let kept = panel.update(&broken, Some(Size::new(400.0, 90.0)), VIEWPORT);
        assert_eq!(good, kept);
    }

    #[test]
    fn missing_reference_anchors_at_zero_rect() {
        let mut panel = FloatingPanel::new(FloatingConfig::new(Placement::BOTTOM_START));
        let p = panel.update(&ElementAnchor::new(), Some(Size::new(50.0, 20.0)), VIEWPORT);
        assert_eq!(p, Point::ZERO);
        assert!(panel.position().is_some());
    }
}
