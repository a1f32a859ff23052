// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Width tiers.

use core::fmt;

use crate::config::{Breakpoints, TierCounts};

/// Coarse classification of the toolbar's width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WidthTier {
    /// Above the wide breakpoint. The tier before any width is known.
    #[default]
    Wide,
    /// Between the breakpoints, inclusive.
    Normal,
    /// Below the normal breakpoint.
    Narrow,
}

impl WidthTier {
    /// Classify a pixel width.
    ///
    /// ```
    /// use understory_toolbar::{Breakpoints, WidthTier};
    ///
    /// let bp = Breakpoints::DEFAULT;
    /// assert_eq!(WidthTier::classify(641.0, &bp), WidthTier::Wide);
    /// assert_eq!(WidthTier::classify(640.0, &bp), WidthTier::Normal);
    /// assert_eq!(WidthTier::classify(424.0, &bp), WidthTier::Normal);
    /// assert_eq!(WidthTier::classify(423.5, &bp), WidthTier::Narrow);
    /// ```
    pub fn classify(width: f64, breakpoints: &Breakpoints) -> Self {
        if width > breakpoints.wide_above {
            Self::Wide
        } else if width >= breakpoints.normal_from {
            Self::Normal
        } else {
            Self::Narrow
        }
    }

    /// Number of controls shown in this tier.
    pub const fn visible_count(self, counts: &TierCounts) -> usize {
        match self {
            Self::Wide => counts.wide,
            Self::Normal => counts.normal,
            Self::Narrow => counts.narrow,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Normal => "normal",
            Self::Narrow => "narrow",
        }
    }
}

impl fmt::Display for WidthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
