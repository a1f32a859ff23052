// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolbar configuration: width breakpoints, per-tier control counts, and timing.
//!
//! | Setting           | Default | Meaning                                        |
//! |-------------------|---------|------------------------------------------------|
//! | `wide_above`      | 640 px  | Widths strictly above this are [`Wide`]        |
//! | `normal_from`     | 424 px  | Widths from this up to `wide_above` are [`Normal`] |
//! | counts            | 9/5/3   | Visible controls for wide/normal/narrow        |
//! | `horizontal_padding` | 0 px | Container padding removed from observed widths |
//! | `resize_debounce` | 10 ms   | Trailing debounce for width observations       |
//! | `menu_offset`     | 4 px    | Gap between the heading button and its menu    |
//! | `link_offset`     | 8 px    | Gap between the selection and the link editor  |
//! | `link_padding`    | 8 px    | Viewport padding used when flipping the link editor |
//!
//! Observed widths are classified as reported: above 640 px is wide, 424 to
//! 640 px inclusive is normal, below 424 px is narrow. A host that observes
//! an outer box can set `horizontal_padding` to classify the content width
//! instead.
//!
//! [`Wide`]: crate::WidthTier::Wide
//! [`Normal`]: crate::WidthTier::Normal

use core::time::Duration;

use crate::tier::WidthTier;

/// Widths strictly above this are wide.
pub const DEFAULT_WIDE_MIN_WIDTH: f64 = 640.0;

/// Widths from this (inclusive) up to [`DEFAULT_WIDE_MIN_WIDTH`] are normal.
pub const DEFAULT_NORMAL_MIN_WIDTH: f64 = 424.0;

/// Visible controls in the wide tier.
pub const DEFAULT_WIDE_COUNT: usize = 9;

/// Visible controls in the normal tier.
pub const DEFAULT_NORMAL_COUNT: usize = 5;

/// Visible controls in the narrow tier.
pub const DEFAULT_NARROW_COUNT: usize = 3;

/// Padding removed from observed widths, both sides combined.
pub const DEFAULT_HORIZONTAL_PADDING: f64 = 0.0;

/// Trailing debounce applied to width observations.
pub const DEFAULT_RESIZE_DEBOUNCE: Duration = Duration::from_millis(10);

/// Main-axis gap between the heading dropdown button and the dropdown.
pub const DEFAULT_MENU_OFFSET: f64 = 4.0;

/// Main-axis gap between the selection and the link editor.
pub const DEFAULT_LINK_OFFSET: f64 = 8.0;

/// Viewport padding the link editor keeps when flipping.
pub const DEFAULT_LINK_PADDING: f64 = 8.0;

/// Errors reported by [`ToolbarConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A breakpoint is NaN or infinite.
    #[error("breakpoint {0} is not finite")]
    NonFiniteBreakpoint(f64),
    /// The normal breakpoint lies above the wide breakpoint.
    #[error("normal breakpoint {normal_from} is above wide breakpoint {wide_above}")]
    BreakpointsOutOfOrder {
        /// Wide threshold.
        wide_above: f64,
        /// Normal threshold.
        normal_from: f64,
    },
    /// The container padding is negative or not finite.
    #[error("horizontal padding {0} must be finite and non-negative")]
    InvalidPadding(f64),
    /// A narrower tier shows more controls than a wider one.
    #[error("control counts must not grow as the toolbar narrows (wide {wide}, normal {normal}, narrow {narrow})")]
    CountsNotMonotonic {
        /// Wide count.
        wide: usize,
        /// Normal count.
        normal: usize,
        /// Narrow count.
        narrow: usize,
    },
}

/// Width thresholds separating the tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoints {
    /// Widths strictly above this are wide.
    pub wide_above: f64,
    /// Widths from this (inclusive) up to `wide_above` are normal; below is narrow.
    pub normal_from: f64,
}

impl Breakpoints {
    /// Product defaults: 640 / 424.
    pub const DEFAULT: Self = Self {
        wide_above: DEFAULT_WIDE_MIN_WIDTH,
        normal_from: DEFAULT_NORMAL_MIN_WIDTH,
    };

    /// Create breakpoints from the two thresholds.
    pub const fn new(wide_above: f64, normal_from: f64) -> Self {
        Self {
            wide_above,
            normal_from,
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// How many controls each tier shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierCounts {
    /// Wide tier.
    pub wide: usize,
    /// Normal tier.
    pub normal: usize,
    /// Narrow tier.
    pub narrow: usize,
}

impl TierCounts {
    /// Product defaults: 9 / 5 / 3.
    pub const DEFAULT: Self = Self {
        wide: DEFAULT_WIDE_COUNT,
        normal: DEFAULT_NORMAL_COUNT,
        narrow: DEFAULT_NARROW_COUNT,
    };
}

impl Default for TierCounts {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration shared by the toolbar, its width observer, and its overlays.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ToolbarConfig {
    /// Tier thresholds.
    pub breakpoints: Breakpoints,
    /// Visible control counts per tier.
    pub counts: TierCounts,
    /// Container padding subtracted from observed widths.
    pub horizontal_padding: f64,
    /// Trailing debounce for width observations.
    pub resize_debounce: Duration,
    /// Gap between the heading button and its dropdown.
    pub menu_offset: f64,
    /// Gap between the selection and the link editor.
    pub link_offset: f64,
    /// Viewport padding for the link editor's flip.
    pub link_padding: f64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::DEFAULT,
            counts: TierCounts::DEFAULT,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING,
            resize_debounce: DEFAULT_RESIZE_DEBOUNCE,
            menu_offset: DEFAULT_MENU_OFFSET,
            link_offset: DEFAULT_LINK_OFFSET,
            link_padding: DEFAULT_LINK_PADDING,
        }
    }
}

impl ToolbarConfig {
    /// Override the tier thresholds.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Override the per-tier control counts.
    #[must_use]
    pub fn with_counts(mut self, counts: TierCounts) -> Self {
        self.counts = counts;
        self
    }

    /// Override the container padding removed from observed widths.
    #[must_use]
    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding;
        self
    }

    /// Override the resize debounce.
    #[must_use]
    pub fn with_resize_debounce(mut self, debounce: Duration) -> Self {
        self.resize_debounce = debounce;
        self
    }

    /// Override the heading dropdown gap.
    #[must_use]
    pub fn with_menu_offset(mut self, offset: f64) -> Self {
        self.menu_offset = offset;
        self
    }

    /// Width available to controls inside a container of `outer_width`.
    pub fn content_width(&self, outer_width: f64) -> f64 {
        (outer_width - self.horizontal_padding).max(0.0)
    }

    /// Tier of an observed width, after removing `horizontal_padding`.
    ///
    /// ```
    /// use understory_toolbar::{ToolbarConfig, WidthTier};
    ///
    /// let config = ToolbarConfig::default();
    /// let tiers = [700.0, 640.0, 500.0, 424.0, 300.0].map(|w| config.tier_for(w));
    /// assert_eq!(
    ///     tiers.map(|t| t.visible_count(&config.counts)),
    ///     [9, 5, 5, 5, 3]
    /// );
    /// ```
    pub fn tier_for(&self, outer_width: f64) -> WidthTier {
        WidthTier::classify(self.content_width(outer_width), &self.breakpoints)
    }

    /// Check that the thresholds and counts describe a consistent tiering.
    ///
    /// ```
    /// use understory_toolbar::{Breakpoints, ConfigError, ToolbarConfig};
    ///
    /// assert!(ToolbarConfig::default().validate().is_ok());
    /// let swapped = ToolbarConfig::default().with_breakpoints(Breakpoints::new(400.0, 600.0));
    /// assert!(matches!(
    ///     swapped.validate(),
    ///     Err(ConfigError::BreakpointsOutOfOrder { .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Breakpoints {
            wide_above,
            normal_from,
        } = self.breakpoints;
        for bp in [wide_above, normal_from] {
            if !bp.is_finite() {
                return Err(ConfigError::NonFiniteBreakpoint(bp));
            }
        }
        if normal_from > wide_above {
            return Err(ConfigError::BreakpointsOutOfOrder {
                wide_above,
                normal_from,
            });
        }
        let padding = self.horizontal_padding;
        if !padding.is_finite() || padding < 0.0 {
            return Err(ConfigError::InvalidPadding(padding));
        }
        let TierCounts {
            wide,
            normal,
            narrow,
        } = self.counts;
        if narrow > normal || normal > wide {
            return Err(ConfigError::CountsNotMonotonic {
                wide,
                normal,
                narrow,
            });
        }
        Ok(())
    }
}
