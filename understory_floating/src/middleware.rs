// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioning passes run after the initial placement.
//!
//! ## Overview
//!
//! [`compute_position`](crate::compute::compute_position) first places the
//! panel flush against the reference, then runs each [`Middleware`] in order.
//! A pass either adjusts the coordinates and hands them to the next pass, or
//! asks for a reset with a different placement, which restarts the pipeline
//! from the first pass. [`MiddlewareData`] survives resets so that passes such
//! as [`Flip`] can remember which placements they already tried.
//!
//! Order matters: an [`Offset`] listed after a [`Flip`] is not considered by
//! the flip's overflow check.
//!
//! ## Overflow
//!
//! [`detect_overflow`] measures how far a rectangle sticks out of the boundary
//! on each side. Positive values overflow; zero or negative values fit.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::{Point, Rect, Size as KurboSize, Vec2};

use crate::placement::{Alignment, Axis, Placement, Side};

/// Per-side overflow amounts. Positive values overflow the boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SideOffsets {
    /// Overflow past the top edge.
    pub top: f64,
    /// Overflow past the right edge.
    pub right: f64,
    /// Overflow past the bottom edge.
    pub bottom: f64,
    /// Overflow past the left edge.
    pub left: f64,
}

impl SideOffsets {
    /// Overflow on `side`.
    pub const fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// True if no side overflows.
    pub fn fits(&self) -> bool {
        self.top <= 0.0 && self.right <= 0.0 && self.bottom <= 0.0 && self.left <= 0.0
    }
}

/// Measure how far `rect` overflows `boundary` shrunk by `padding` on every side.
pub fn detect_overflow(rect: Rect, boundary: Rect, padding: f64) -> SideOffsets {
    SideOffsets {
        top: boundary.y0 - rect.y0 + padding,
        right: rect.x1 - boundary.x1 + padding,
        bottom: rect.y1 - boundary.y1 + padding,
        left: boundary.x0 - rect.x0 + padding,
    }
}

/// Geometry shared by every pass of one computation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementRects {
    /// Reference rectangle.
    pub reference: Rect,
    /// Size of the floating panel.
    pub floating: KurboSize,
    /// Clipping boundary, normally the viewport.
    pub boundary: Rect,
}

/// Coordinates and placement handed to each pass.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MiddlewareState<'a> {
    pub(crate) coords: Point,
    pub(crate) initial_placement: Placement,
    pub(crate) placement: Placement,
    pub(crate) rects: &'a ElementRects,
}

impl MiddlewareState<'_> {
    fn floating_rect(&self) -> Rect {
        Rect::from_origin_size(self.coords, self.rects.floating)
    }
}

/// Result of a single pass.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Step {
    /// Continue with these coordinates.
    Continue(Point),
    /// Restart the pipeline with a new placement.
    Reset(Placement),
}

/// Data accumulated by the passes, returned with the final position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MiddlewareData {
    /// Set by [`Offset`].
    pub offset: Option<OffsetData>,
    /// Set by [`Flip`] once it has tried a fallback.
    pub flip: Option<FlipData>,
    /// Displacement applied by [`Shift`].
    pub shift: Option<Vec2>,
    /// Space reported by [`Size`].
    pub size: Option<SizeData>,
}

/// Displacement applied by [`Offset`] and the placement it was computed for.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OffsetData {
    /// Applied displacement.
    pub diff: Vec2,
    /// Placement in effect when the offset was applied.
    pub placement: Placement,
}

/// Overflow measured for one tried placement.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementOverflow {
    /// The tried placement.
    pub placement: Placement,
    /// Main-axis overflow first (when checked), then the two cross-axis sides.
    pub overflows: Vec<f64>,
}

/// Flip bookkeeping kept across pipeline resets.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlipData {
    /// Index of the placement currently tried (0 is the initial placement).
    pub index: usize,
    /// Overflows of each placement tried so far.
    pub overflows: Vec<PlacementOverflow>,
}

/// Space left inside the boundary for the final placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SizeData {
    /// Width available to the panel.
    pub available_width: f64,
    /// Height available to the panel.
    pub available_height: f64,
}

/// Move the panel away from (main axis) or along (cross axis) the reference.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Gap between reference and panel.
    pub main_axis: f64,
    /// Skid along the side.
    pub cross_axis: f64,
    /// Skid along the side for aligned placements; negated for `End`.
    /// Overrides `cross_axis` when set and the placement is aligned.
    pub alignment_axis: Option<f64>,
}

impl Offset {
    /// Offset along the main axis only.
    pub const fn main_axis(gap: f64) -> Self {
        Self {
            main_axis: gap,
            cross_axis: 0.0,
            alignment_axis: None,
        }
    }

    fn apply(&self, state: &MiddlewareState<'_>, data: &mut MiddlewareData) -> Step {
        let placement = state.placement;
        let main_sign = match placement.side {
            Side::Left | Side::Top => -1.0,
            Side::Right | Side::Bottom => 1.0,
        };
        let cross = match (placement.alignment, self.alignment_axis) {
            (Some(Alignment::End), Some(skid)) => -skid,
            (Some(Alignment::Start), Some(skid)) => skid,
            _ => self.cross_axis,
        };
        let diff = match placement.side_axis() {
            Axis::Y => Vec2::new(cross, self.main_axis * main_sign),
            Axis::X => Vec2::new(self.main_axis * main_sign, cross),
        };
        data.offset = Some(OffsetData { diff, placement });
        Step::Continue(state.coords + diff)
    }
}

/// Strategy used by [`Flip`] when every placement overflows.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FallbackStrategy {
    /// Pick the placement with the smallest total overflow.
    #[default]
    BestFit,
    /// Go back to the initial placement.
    InitialPlacement,
}

/// Move the panel to another placement when the current one overflows.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flip {
    /// Inset applied to the boundary before checking overflow.
    pub padding: f64,
    /// Check the side the panel is attached to.
    pub main_axis: bool,
    /// Check the two sides along the alignment axis.
    pub cross_axis: bool,
    /// Placements to try after the initial one. `None` derives them from the
    /// initial placement.
    pub fallback_placements: Option<Vec<Placement>>,
    /// What to do when everything overflows.
    pub fallback_strategy: FallbackStrategy,
    /// Derive fallbacks with flipped alignment for aligned placements.
    pub flip_alignment: bool,
}

impl Default for Flip {
    fn default() -> Self {
        Self {
            padding: 0.0,
            main_axis: true,
            cross_axis: true,
            fallback_placements: None,
            fallback_strategy: FallbackStrategy::BestFit,
            flip_alignment: true,
        }
    }
}

impl Flip {
    /// Set the boundary inset.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set explicit fallback placements.
    #[must_use]
    pub fn with_fallback_placements(
        mut self,
        placements: impl IntoIterator<Item = Placement>,
    ) -> Self {
        self.fallback_placements = Some(placements.into_iter().collect());
        self
    }

    /// Set the strategy used when every placement overflows.
    #[must_use]
    pub fn with_fallback_strategy(mut self, strategy: FallbackStrategy) -> Self {
        self.fallback_strategy = strategy;
        self
    }

    fn placements(&self, initial: Placement) -> Vec<Placement> {
        let mut out = Vec::with_capacity(4);
        out.push(initial);
        match &self.fallback_placements {
            Some(fallbacks) => out.extend_from_slice(fallbacks),
            None if initial.alignment.is_none() || !self.flip_alignment => {
                out.push(initial.opposite());
            }
            None => out.extend_from_slice(&initial.expanded()),
        }
        out
    }

    fn apply(&self, state: &MiddlewareState<'_>, data: &mut MiddlewareData) -> Step {
        let placement = state.placement;
        let overflow = detect_overflow(state.floating_rect(), state.rects.boundary, self.padding);

        let mut overflows = Vec::with_capacity(3);
        if self.main_axis {
            overflows.push(overflow.get(placement.side));
        }
        if self.cross_axis {
            let (main_side, other_side) = alignment_sides(placement, state.rects);
            overflows.push(overflow.get(main_side));
            overflows.push(overflow.get(other_side));
        }

        if overflows.iter().all(|&o| o <= 0.0) {
            return Step::Continue(state.coords);
        }

        let previous = data.flip.clone().unwrap_or_default();
        let mut history = previous.overflows;
        history.push(PlacementOverflow {
            placement,
            overflows,
        });

        let placements = self.placements(state.initial_placement);
        let next_index = previous.index + 1;
        if let Some(&next) = placements.get(next_index) {
            data.flip = Some(FlipData {
                index: next_index,
                overflows: history,
            });
            return Step::Reset(next);
        }

        // Everything overflowed. Prefer a placement that fits on its main axis
        // with the least cross-axis overflow.
        let fitting = history
            .iter()
            .filter(|h| h.overflows.first().is_some_and(|&o| o <= 0.0))
            .min_by(|a, b| {
                let a = a.overflows.get(1).copied().unwrap_or(0.0);
                let b = b.overflows.get(1).copied().unwrap_or(0.0);
                a.total_cmp(&b)
            })
            .map(|h| h.placement);
        let reset = fitting.or_else(|| match self.fallback_strategy {
            FallbackStrategy::BestFit => history
                .iter()
                .map(|h| {
                    let total: f64 = h.overflows.iter().filter(|&&o| o > 0.0).sum();
                    (h.placement, total)
                })
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
                .map(|(p, _)| p),
            FallbackStrategy::InitialPlacement => Some(state.initial_placement),
        });

        match reset {
            Some(reset) if reset != placement => Step::Reset(reset),
            _ => Step::Continue(state.coords),
        }
    }
}

/// Cross-axis sides to check for an aligned placement: the side the panel
/// grows towards first, then the opposite one.
fn alignment_sides(placement: Placement, rects: &ElementRects) -> (Side, Side) {
    let start = placement.alignment == Some(Alignment::Start);
    let (mut main, reference_len, floating_len) = match placement.alignment_axis() {
        Axis::X => (
            if start { Side::Right } else { Side::Left },
            rects.reference.width(),
            rects.floating.width,
        ),
        Axis::Y => (
            if start { Side::Bottom } else { Side::Top },
            rects.reference.height(),
            rects.floating.height,
        ),
    };
    if reference_len > floating_len {
        main = main.opposite();
    }
    (main, main.opposite())
}

/// Keep the panel inside the boundary by sliding it along the side.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shift {
    /// Inset applied to the boundary.
    pub padding: f64,
    /// Slide along the alignment axis.
    pub main_axis: bool,
    /// Also slide along the side axis (may overlap the reference).
    pub cross_axis: bool,
}

impl Default for Shift {
    fn default() -> Self {
        Self {
            padding: 0.0,
            main_axis: true,
            cross_axis: false,
        }
    }
}

impl Shift {
    fn apply(&self, state: &MiddlewareState<'_>, data: &mut MiddlewareData) -> Step {
        let overflow = detect_overflow(state.floating_rect(), state.rects.boundary, self.padding);
        let mut coords = state.coords;
        if self.main_axis {
            coords = clamp_axis(coords, state.placement.alignment_axis(), &overflow);
        }
        if self.cross_axis {
            coords = clamp_axis(coords, state.placement.side_axis(), &overflow);
        }
        data.shift = Some(coords - state.coords);
        Step::Continue(coords)
    }
}

fn clamp_axis(p: Point, axis: Axis, overflow: &SideOffsets) -> Point {
    match axis {
        Axis::X => {
            let min = p.x + overflow.left;
            let max = p.x - overflow.right;
            Point::new(min.max(p.x.min(max)), p.y)
        }
        Axis::Y => {
            let min = p.y + overflow.top;
            let max = p.y - overflow.bottom;
            Point::new(p.x, min.max(p.y.min(max)))
        }
    }
}

/// Report the space available to the panel for its final placement.
///
/// The host applies the numbers (for example as a max height); the panel's
/// coordinates are not changed.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Inset applied to the boundary.
    pub padding: f64,
}

impl Size {
    fn apply(&self, state: &MiddlewareState<'_>, data: &mut MiddlewareData) -> Step {
        let overflow = detect_overflow(state.floating_rect(), state.rects.boundary, self.padding);
        let KurboSize { width, height } = state.rects.floating;
        let placement = state.placement;
        let alignment = placement.alignment;

        let (height_side, width_side) = match placement.side {
            Side::Top | Side::Bottom => (
                placement.side,
                if alignment == Some(Alignment::End) {
                    Side::Left
                } else {
                    Side::Right
                },
            ),
            Side::Left | Side::Right => (
                if alignment == Some(Alignment::End) {
                    Side::Top
                } else {
                    Side::Bottom
                },
                placement.side,
            ),
        };

        let max_clip_height = height - overflow.top - overflow.bottom;
        let max_clip_width = width - overflow.left - overflow.right;
        let overflow_height = (height - overflow.get(height_side)).min(max_clip_height);
        let overflow_width = (width - overflow.get(width_side)).min(max_clip_width);

        let no_shift = data.shift.is_none();
        let vertical = placement.side_axis() == Axis::Y;
        let mut available_width = overflow_width;
        let mut available_height = overflow_height;
        if vertical {
            if !(alignment.is_some() || no_shift) {
                available_width = max_clip_width;
            }
        } else if !(alignment.is_some() || no_shift) {
            available_height = max_clip_height;
        }

        if no_shift && alignment.is_none() {
            if vertical {
                let x_min = overflow.left.max(0.0);
                let x_max = overflow.right.max(0.0);
                let used = if x_min != 0.0 || x_max != 0.0 {
                    x_min + x_max
                } else {
                    overflow.left.max(overflow.right)
                };
                available_width = width - 2.0 * used;
            } else {
                let y_min = overflow.top.max(0.0);
                let y_max = overflow.bottom.max(0.0);
                let used = if y_min != 0.0 || y_max != 0.0 {
                    y_min + y_max
                } else {
                    overflow.top.max(overflow.bottom)
                };
                available_height = height - 2.0 * used;
            }
        }

        data.size = Some(SizeData {
            available_width,
            available_height,
        });
        Step::Continue(state.coords)
    }
}

/// A positioning pass.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Middleware {
    /// See [`Offset`].
    Offset(Offset),
    /// See [`Flip`].
    Flip(Flip),
    /// See [`Shift`].
    Shift(Shift),
    /// See [`Size`].
    Size(Size),
}

impl Middleware {
    /// Short name of the pass.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Offset(_) => "offset",
            Self::Flip(_) => "flip",
            Self::Shift(_) => "shift",
            Self::Size(_) => "size",
        }
    }

    pub(crate) fn apply(&self, state: &MiddlewareState<'_>, data: &mut MiddlewareData) -> Step {
        match self {
            Self::Offset(m) => m.apply(state, data),
            Self::Flip(m) => m.apply(state, data),
            Self::Shift(m) => m.apply(state, data),
            Self::Size(m) => m.apply(state, data),
        }
    }
}

impl From<Offset> for Middleware {
    fn from(m: Offset) -> Self {
        Self::Offset(m)
    }
}

impl From<Flip> for Middleware {
    fn from(m: Flip) -> Self {
        Self::Flip(m)
    }
}

impl From<Shift> for Middleware {
    fn from(m: Shift) -> Self {
        Self::Shift(m)
    }
}

impl From<Size> for Middleware {
    fn from(m: Size) -> Self {
        Self::Size(m)
    }
}
