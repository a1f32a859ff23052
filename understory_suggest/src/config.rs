// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggestion list configuration.

use core::time::Duration;

use understory_floating::{
    FloatingConfig, Flip, Offset, Placement, Shift, Size, SizeData, Strategy,
};

/// Delay between a selection change and scrolling the entry into view.
pub const SCROLL_INTO_VIEW_DELAY: Duration = Duration::from_millis(200);

/// Space kept free between the list and the edge of the available area.
pub const DEFAULT_MAX_HEIGHT_INSET: f64 = 48.0;

/// Viewport padding the popup keeps when flipping.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 8.0;

/// Gap between the decoration and the popup.
pub const DEFAULT_OFFSET: f64 = 8.0;

/// Placements tried after `top-start`, in order.
pub const DEFAULT_FALLBACK_PLACEMENTS: [Placement; 3] = [
    Placement::TOP_END,
    Placement::BOTTOM_START,
    Placement::BOTTOM_END,
];

/// Configuration for a suggestion list and its popup.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuggestionConfig {
    /// Deferral of scroll-into-view after a selection change.
    pub scroll_delay: Duration,
    /// Subtracted from the available height to get the list's max height.
    pub max_height_inset: f64,
    /// Viewport padding for flipping.
    pub viewport_padding: f64,
    /// Gap between the decoration and the popup.
    pub offset: f64,
    /// Show a group title whenever the category changes.
    pub render_separators: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            scroll_delay: SCROLL_INTO_VIEW_DELAY,
            max_height_inset: DEFAULT_MAX_HEIGHT_INSET,
            viewport_padding: DEFAULT_VIEWPORT_PADDING,
            offset: DEFAULT_OFFSET,
            render_separators: true,
        }
    }
}

impl SuggestionConfig {
    /// Override the scroll deferral.
    #[must_use]
    pub fn with_scroll_delay(mut self, delay: Duration) -> Self {
        self.scroll_delay = delay;
        self
    }

    /// Enable or disable group titles.
    #[must_use]
    pub fn with_separators(mut self, render: bool) -> Self {
        self.render_separators = render;
        self
    }

    /// Popup positioning: fixed, `top-start`, then size, flip, offset, and shift.
    pub fn floating_config(&self) -> FloatingConfig {
        FloatingConfig::new(Placement::TOP_START)
            .with_strategy(Strategy::Fixed)
            .with_middleware(Size::default())
            .with_middleware(
                Flip::default()
                    .with_padding(self.viewport_padding)
                    .with_fallback_placements(DEFAULT_FALLBACK_PLACEMENTS),
            )
            .with_middleware(Offset::main_axis(self.offset))
            .with_middleware(Shift::default())
    }

    /// Max height of the list for the space reported by the size pass.
    pub fn max_height(&self, size: &SizeData) -> f64 {
        panel_max_height(size, self.max_height_inset)
    }
}

/// Available height minus `inset`, never negative.
pub fn panel_max_height(size: &SizeData, inset: f64) -> f64 {
    (size.available_height - inset).max(0.0)
}
