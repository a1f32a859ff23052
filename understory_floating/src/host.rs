// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared overlay state owned by the host: layout subscriptions plus the registry.

use kurbo::{Point, Rect, Size};

use crate::auto_update::{LayoutChange, LayoutEvents, SubscriptionId};
use crate::panel::FloatingPanel;
use crate::reference::ReferenceSource;
use crate::registry::{DismissTrigger, OverlayId, OverlayRegistry};

/// Layout events and open overlays for one window.
///
/// Overlay owners open and close their panels through this type so the
/// subscription and the registry entry always come and go together.
#[derive(Clone, Debug, Default)]
pub struct OverlayHost {
    /// Layout change subscriptions.
    pub events: LayoutEvents,
    /// Open overlays.
    pub overlays: OverlayRegistry,
}

impl OverlayHost {
    /// Create an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount `panel` and register it as the topmost overlay.
    pub fn open(&mut self, panel: &mut FloatingPanel) -> OverlayId {
        panel.mount(&mut self.events);
        self.overlays.add()
    }

    /// Unmount `panel` and deregister `id`.
    pub fn close(&mut self, panel: &mut FloatingPanel, id: OverlayId) {
        panel.unmount(&mut self.events);
        self.overlays.remove(id);
    }

    /// Reposition `panel` and record its bounds (plus an optional trigger) for dismissal.
    pub fn place(
        &mut self,
        panel: &mut FloatingPanel,
        id: OverlayId,
        reference: &impl ReferenceSource,
        floating: Option<Size>,
        boundary: Rect,
        trigger: Option<Rect>,
    ) -> Point {
        let origin = panel.update(reference, floating, boundary);
        if let Some(size) = floating {
            self.overlays
                .set_bounds(id, Rect::from_origin_size(origin, size), trigger);
        }
        origin
    }

    /// Record a layout change for every interested panel.
    pub fn emit(&mut self, change: LayoutChange) {
        self.events.emit(change);
    }

    /// Take pending layout changes. See [`LayoutEvents::drain`].
    pub fn drain(&mut self) -> alloc::vec::Vec<(SubscriptionId, LayoutChange)> {
        self.events.drain()
    }

    /// Overlays dismissed by `trigger`, topmost first. See [`OverlayRegistry::dismiss_for`].
    pub fn dismissed_by(&self, trigger: DismissTrigger) -> alloc::vec::Vec<OverlayId> {
        self.overlays.dismiss_for(trigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute::FloatingConfig;
    use crate::placement::Placement;
    use alloc::vec;

    #[test]
    fn open_place_close_round_trip() {
        let mut host = OverlayHost::new();
        let mut panel = FloatingPanel::new(FloatingConfig::new(Placement::BOTTOM_START));
        let id = host.open(&mut panel);
        assert!(panel.is_mounted());
        assert!(host.overlays.contains(id));

        let button = Rect::new(10.0, 10.0, 40.0, 30.0);
        let origin = host.place(
            &mut panel,
            id,
            &button,
            Some(Size::new(100.0, 50.0)),
            Rect::new(0.0, 0.0, 800.0, 600.0),
            Some(button),
        );
        assert_eq!(origin, Point::new(10.0, 30.0));
        // Inside the panel: kept. Outside both: dismissed.
        assert!(
            host.dismissed_by(DismissTrigger::PointerDown(Point::new(50.0, 50.0)))
                .is_empty()
        );
        assert_eq!(
            host.dismissed_by(DismissTrigger::PointerDown(Point::new(300.0, 300.0))),
            vec![id]
        );

        host.close(&mut panel, id);
        assert!(!panel.is_mounted());
        assert!(host.overlays.is_empty());
        assert!(host.events.is_empty());
    }
}
