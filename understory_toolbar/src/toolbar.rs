// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The formatting toolbar: responsive control layout plus the heading dropdown.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_floating::{
    FloatingConfig, FloatingPanel, KeyEvent, Offset, OverlayHost, OverlayId, Placement,
    auto_update::{LayoutChange, SubscriptionId},
    registry::DismissTrigger,
};

use crate::config::ToolbarConfig;
use crate::controls::{Control, ControlSplit, ControlState, EditorCommands, select_controls};
use crate::formatting::{heading_controls, separator_after, toolbar_controls};
use crate::observer::WidthObserver;
use crate::tier::WidthTier;

/// A control together with its state at the current selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ControlView<'a> {
    /// The control.
    pub control: &'a Control,
    /// Active and disabled flags.
    pub state: ControlState,
    /// A separator is drawn after this control.
    pub separator_after: bool,
}

/// What the host renders for the toolbar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolbarLayout<'a> {
    /// Current width tier.
    pub tier: WidthTier,
    /// Controls shown inline.
    pub visible: Vec<ControlView<'a>>,
    /// Controls moved to the overflow menu.
    pub overflow: Vec<ControlView<'a>>,
}

/// Headless state of a composer's formatting toolbar.
///
/// ## Width
///
/// The host forwards container resizes through [`Toolbar::observe_width`]
/// and polls [`Toolbar::poll`] at [`Toolbar::next_deadline`]. A tier change
/// recomputes the visible controls and, while the heading dropdown is open,
/// flags it for repositioning ([`Toolbar::menu_needs_reposition`]).
///
/// ## Heading dropdown
///
/// The dropdown opens above its button (`top-start`, offset by
/// [`ToolbarConfig::menu_offset`]). A pointer press outside both the
/// dropdown and its button closes it.
#[derive(Clone, Debug)]
pub struct Toolbar {
    config: ToolbarConfig,
    observer: WidthObserver,
    controls: Vec<Control>,
    headings: Vec<Control>,
    menu: FloatingPanel,
    menu_overlay: Option<OverlayId>,
    menu_stale: bool,
}

impl Toolbar {
    /// Create a toolbar with the default catalog.
    pub fn new(config: ToolbarConfig, links_enabled: bool) -> Self {
        Self::with_controls(config, toolbar_controls(links_enabled), heading_controls())
    }

    /// Create a toolbar with a custom control sequence and heading dropdown entries.
    pub fn with_controls(
        config: ToolbarConfig,
        controls: Vec<Control>,
        headings: Vec<Control>,
    ) -> Self {
        let menu = FloatingPanel::new(
            FloatingConfig::new(Placement::TOP_START)
                .with_middleware(Offset::main_axis(config.menu_offset)),
        );
        Self {
            config,
            observer: WidthObserver::new(&config),
            controls,
            headings,
            menu,
            menu_overlay: None,
            menu_stale: false,
        }
    }

    /// Configuration.
    pub fn config(&self) -> &ToolbarConfig {
        &self.config
    }

    /// The container was mounted: start observing its width.
    pub fn mount(&mut self) {
        self.observer.attach();
    }

    /// The container was unmounted: stop observing and close the dropdown.
    pub fn unmount(&mut self, host: &mut OverlayHost) {
        self.observer.detach();
        self.close_menu(host);
    }

    /// Forward a container resize.
    pub fn observe_width(&mut self, width: f64, now: Duration) {
        self.observer.observe(width, now);
    }

    /// When the host should call [`Toolbar::poll`] next.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.observer.next_deadline()
    }

    /// Apply a due width observation. Returns the new tier if it changed.
    pub fn poll(&mut self, now: Duration) -> Option<WidthTier> {
        let changed = self.observer.poll(now);
        if changed.is_some() && self.is_menu_open() {
            self.menu_stale = true;
        }
        changed
    }

    /// Current tier.
    pub fn tier(&self) -> WidthTier {
        self.observer.tier()
    }

    /// The full control sequence.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Visible prefix and overflow suffix for the current tier.
    pub fn split(&self) -> ControlSplit<'_, Control> {
        select_controls(&self.controls, self.tier(), &self.config.counts)
    }

    /// Controls with their state, split for the current tier.
    pub fn layout(&self, editor: &impl EditorCommands) -> ToolbarLayout<'_> {
        let split = self.split();
        ToolbarLayout {
            tier: self.tier(),
            visible: views(split.visible, editor),
            overflow: views(split.overflow, editor),
        }
    }

    /// Heading dropdown entries with their state.
    pub fn heading_entries(&self, editor: &impl EditorCommands) -> Vec<ControlView<'_>> {
        views(&self.headings, editor)
    }

    /// Invoke the first control (inline, overflow, or heading) whose shortcut
    /// matches `event`. Returns `true` if a command ran.
    pub fn handle_shortcut(&self, event: &KeyEvent, editor: &mut impl EditorCommands) -> bool {
        self.controls
            .iter()
            .chain(&self.headings)
            .find(|c| c.shortcut.is_some_and(|s| s.matches(event)))
            .is_some_and(|c| c.invoke(editor))
    }

    /// True while the heading dropdown is open.
    pub fn is_menu_open(&self) -> bool {
        self.menu_overlay.is_some()
    }

    /// Open the heading dropdown. Returns its overlay id.
    pub fn open_menu(&mut self, host: &mut OverlayHost) -> OverlayId {
        if let Some(id) = self.menu_overlay {
            return id;
        }
        let id = host.open(&mut self.menu);
        self.menu_overlay = Some(id);
        self.menu_stale = true;
        id
    }

    /// Close the heading dropdown.
    pub fn close_menu(&mut self, host: &mut OverlayHost) {
        if let Some(id) = self.menu_overlay.take() {
            host.close(&mut self.menu, id);
        }
        self.menu_stale = false;
    }

    /// Toggle the heading dropdown. Returns the new open state.
    pub fn toggle_menu(&mut self, host: &mut OverlayHost) -> bool {
        if self.is_menu_open() {
            self.close_menu(host);
        } else {
            self.open_menu(host);
        }
        self.is_menu_open()
    }

    /// True if the dropdown must be positioned: just opened, tier changed,
    /// or a layout change it listens to was drained.
    pub fn menu_needs_reposition(&self) -> bool {
        self.is_menu_open() && self.menu_stale
    }

    /// Mark the dropdown stale if `drained` carries a change for it.
    pub fn on_layout_changes(&mut self, drained: &[(SubscriptionId, LayoutChange)]) {
        if self.menu.wants(drained) {
            self.menu_stale = true;
        }
    }

    /// Position the dropdown against its `button`.
    ///
    /// `menu` is the dropdown's rendered size, or `None` if it is not rendered.
    pub fn place_menu(
        &mut self,
        host: &mut OverlayHost,
        button: Rect,
        menu: Option<Size>,
        viewport: Rect,
    ) -> Option<Point> {
        let id = self.menu_overlay?;
        self.menu_stale = false;
        Some(host.place(&mut self.menu, id, &button, menu, viewport, Some(button)))
    }

    /// Close the dropdown if a press at `point` lands outside it and its button.
    /// Returns `true` if it closed.
    pub fn on_pointer_down(&mut self, host: &mut OverlayHost, point: Point) -> bool {
        let Some(id) = self.menu_overlay else {
            return false;
        };
        if !host
            .dismissed_by(DismissTrigger::PointerDown(point))
            .contains(&id)
        {
            return false;
        }
        self.close_menu(host);
        true
    }
}

fn views<'a>(controls: &'a [Control], editor: &impl EditorCommands) -> Vec<ControlView<'a>> {
    controls
        .iter()
        .map(|control| ControlView {
            control,
            state: control.state(editor),
            separator_after: separator_after(control.mode),
        })
        .collect()
}
