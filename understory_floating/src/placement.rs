// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary: sides, alignments, axes, and positioning strategy.
//!
//! A [`Placement`] names where a floating panel sits relative to its reference:
//! the [`Side`] it is attached to and an optional [`Alignment`] along that side.
//! Placements print and parse with the conventional names (`"top"`,
//! `"bottom-end"`, ...).
//!
//! ```
//! use understory_floating::placement::{Alignment, Placement, Side};
//!
//! let p: Placement = "top-start".parse().unwrap();
//! assert_eq!(p, Placement::TOP_START);
//! assert_eq!(p.opposite(), Placement::BOTTOM_START);
//! assert_eq!(p.opposite_alignment(), Placement::new(Side::Top, Some(Alignment::End)));
//! assert_eq!(p.to_string(), "top-start");
//! ```

use core::fmt;
use core::str::FromStr;

/// Axis of the coordinate system.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// The other axis.
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Side of the reference that a floating panel attaches to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// Above the reference.
    Top,
    /// To the right of the reference.
    Right,
    /// Below the reference.
    Bottom,
    /// To the left of the reference.
    Left,
}

impl Side {
    /// The side across the reference.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Axis along which the panel is pushed away from the reference.
    ///
    /// `Top`/`Bottom` move along `Y`; `Left`/`Right` move along `X`.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Alignment of the panel along the side it is attached to.
///
/// `None` in a [`Placement`] means centered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    /// Align with the start edge (left or top) of the reference.
    Start,
    /// Align with the end edge (right or bottom) of the reference.
    End,
}

impl Alignment {
    /// The other alignment.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Where a floating panel sits relative to its reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Side of the reference.
    pub side: Side,
    /// Alignment along the side; `None` centers the panel.
    pub alignment: Option<Alignment>,
}

impl Placement {
    /// Centered above.
    pub const TOP: Self = Self::new(Side::Top, None);
    /// Above, left edges aligned.
    pub const TOP_START: Self = Self::new(Side::Top, Some(Alignment::Start));
    /// Above, right edges aligned.
    pub const TOP_END: Self = Self::new(Side::Top, Some(Alignment::End));
    /// Centered to the right.
    pub const RIGHT: Self = Self::new(Side::Right, None);
    /// To the right, top edges aligned.
    pub const RIGHT_START: Self = Self::new(Side::Right, Some(Alignment::Start));
    /// To the right, bottom edges aligned.
    pub const RIGHT_END: Self = Self::new(Side::Right, Some(Alignment::End));
    /// Centered below.
    pub const BOTTOM: Self = Self::new(Side::Bottom, None);
    /// Below, left edges aligned.
    pub const BOTTOM_START: Self = Self::new(Side::Bottom, Some(Alignment::Start));
    /// Below, right edges aligned.
    pub const BOTTOM_END: Self = Self::new(Side::Bottom, Some(Alignment::End));
    /// Centered to the left.
    pub const LEFT: Self = Self::new(Side::Left, None);
    /// To the left, top edges aligned.
    pub const LEFT_START: Self = Self::new(Side::Left, Some(Alignment::Start));
    /// To the left, bottom edges aligned.
    pub const LEFT_END: Self = Self::new(Side::Left, Some(Alignment::End));

    /// Create a placement.
    pub const fn new(side: Side, alignment: Option<Alignment>) -> Self {
        Self { side, alignment }
    }

    /// Same alignment on the opposite side.
    pub const fn opposite(self) -> Self {
        Self::new(self.side.opposite(), self.alignment)
    }

    /// Same side with the alignment flipped. Centered placements are unchanged.
    pub const fn opposite_alignment(self) -> Self {
        let alignment = match self.alignment {
            Some(a) => Some(a.opposite()),
            None => None,
        };
        Self::new(self.side, alignment)
    }

    /// Axis the panel is pushed along, away from the reference.
    pub const fn side_axis(self) -> Axis {
        self.side.axis()
    }

    /// Axis the alignment applies to (perpendicular to [`Placement::side_axis`]).
    pub const fn alignment_axis(self) -> Axis {
        self.side.axis().opposite()
    }

    /// Default fallbacks for an aligned placement, in the order they are tried:
    /// flipped alignment, opposite side, then opposite side with flipped alignment.
    pub const fn expanded(self) -> [Self; 3] {
        let opposite = self.opposite();
        [
            self.opposite_alignment(),
            opposite,
            opposite.opposite_alignment(),
        ]
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::BOTTOM
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Some(a) => write!(f, "{}-{}", self.side.as_str(), a.as_str()),
            None => f.write_str(self.side.as_str()),
        }
    }
}

/// Error returned when parsing a [`Placement`] name fails.
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParsePlacementError {
    /// The side part is not one of `top`, `right`, `bottom`, `left`.
    #[error("unknown placement side")]
    UnknownSide,
    /// The alignment part is not one of `start`, `end`.
    #[error("unknown placement alignment")]
    UnknownAlignment,
}

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (side, alignment) = match s.split_once('-') {
            Some((side, alignment)) => (side, Some(alignment)),
            None => (s, None),
        };
        let side = match side {
            "top" => Side::Top,
            "right" => Side::Right,
            "bottom" => Side::Bottom,
            "left" => Side::Left,
            _ => return Err(ParsePlacementError::UnknownSide),
        };
        let alignment = match alignment {
            None => None,
            Some("start") => Some(Alignment::Start),
            Some("end") => Some(Alignment::End),
            Some(_) => return Err(ParsePlacementError::UnknownAlignment),
        };
        Ok(Self::new(side, alignment))
    }
}

/// Coordinate space of the computed position.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Coordinates are in the same space as the supplied reference and boundary
    /// rects (typically the panel's containing block).
    #[default]
    Absolute,
    /// Coordinates are viewport-relative.
    Fixed,
}
