// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot position computation.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::middleware::{ElementRects, Middleware, MiddlewareData, MiddlewareState, Step};
use crate::placement::{Alignment, Axis, Placement, Side, Strategy};

/// Upper bound on pipeline restarts requested by passes in one computation.
pub const MAX_RESETS: usize = 50;

/// Placement, strategy, and passes for a floating panel.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingConfig {
    /// Preferred placement.
    pub placement: Placement,
    /// Coordinate space of the result.
    pub strategy: Strategy,
    /// Passes run in order after the initial placement.
    pub middleware: Vec<Middleware>,
}

impl FloatingConfig {
    /// Config with the given preferred placement, `Absolute` strategy, and no passes.
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            strategy: Strategy::Absolute,
            middleware: Vec::new(),
        }
    }

    /// Set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Append a pass.
    #[must_use]
    pub fn with_middleware(mut self, middleware: impl Into<Middleware>) -> Self {
        self.middleware.push(middleware.into());
        self
    }
}

/// Result of [`compute_position`].
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    /// Left edge of the panel.
    pub x: f64,
    /// Top edge of the panel.
    pub y: f64,
    /// Final placement after any flips.
    pub placement: Placement,
    /// Coordinate space of `x`/`y`.
    pub strategy: Strategy,
    /// Data reported by the passes.
    pub data: MiddlewareData,
}

impl Position {
    /// Top-left corner of the panel.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Coordinates of a panel of size `floating` placed flush against `reference`.
pub fn compute_coords(reference: Rect, floating: Size, placement: Placement) -> Point {
    let center_x = reference.x0 + reference.width() / 2.0 - floating.width / 2.0;
    let center_y = reference.y0 + reference.height() / 2.0 - floating.height / 2.0;
    let mut p = match placement.side {
        Side::Top => Point::new(center_x, reference.y0 - floating.height),
        Side::Bottom => Point::new(center_x, reference.y1),
        Side::Right => Point::new(reference.x1, center_y),
        Side::Left => Point::new(reference.x0 - floating.width, center_y),
    };
    let Some(alignment) = placement.alignment else {
        return p;
    };
    let (coord, common) = match placement.alignment_axis() {
        Axis::X => (&mut p.x, reference.width() / 2.0 - floating.width / 2.0),
        Axis::Y => (&mut p.y, reference.height() / 2.0 - floating.height / 2.0),
    };
    match alignment {
        Alignment::Start => *coord -= common,
        Alignment::End => *coord += common,
    }
    p
}

/// Position a panel of size `floating` against `reference`, staying inside `boundary`.
///
/// The panel starts at `config.placement` and then runs `config.middleware` in
/// order. Passes may restart the pipeline with a new placement (at most
/// [`MAX_RESETS`] times).
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_floating::{compute_position, FloatingConfig, Flip, Offset, Placement};
///
/// let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
/// let config = FloatingConfig::new(Placement::TOP_START)
///     .with_middleware(Offset::main_axis(8.0))
///     .with_middleware(Flip::default().with_padding(8.0));
///
/// // Plenty of room above: stays on top.
/// let anchor = Rect::new(100.0, 300.0, 180.0, 320.0);
/// let pos = compute_position(anchor, Size::new(200.0, 80.0), viewport, &config);
/// assert_eq!(pos.placement, Placement::TOP_START);
/// assert_eq!((pos.x, pos.y), (100.0, 212.0));
///
/// // Anchor at the top edge: flips below.
/// let anchor = Rect::new(100.0, 4.0, 180.0, 24.0);
/// let pos = compute_position(anchor, Size::new(200.0, 80.0), viewport, &config);
/// assert_eq!(pos.placement.side, understory_floating::Side::Bottom);
/// ```
pub fn compute_position(
    reference: Rect,
    floating: Size,
    boundary: Rect,
    config: &FloatingConfig,
) -> Position {
    let rects = ElementRects {
        reference,
        floating,
        boundary,
    };
    let mut placement = config.placement;
    let mut coords = compute_coords(reference, floating, placement);
    let mut data = MiddlewareData::default();
    let mut resets = 0;

    let mut i = 0;
    while let Some(middleware) = config.middleware.get(i) {
        let state = MiddlewareState {
            coords,
            initial_placement: config.placement,
            placement,
            rects: &rects,
        };
        match middleware.apply(&state, &mut data) {
            Step::Continue(next) => {
                coords = next;
                i += 1;
            }
            Step::Reset(next) if resets < MAX_RESETS => {
                resets += 1;
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    pass = middleware.name(),
                    from = %placement,
                    to = %next,
                    "floating pipeline reset"
                );
                placement = next;
                coords = compute_coords(reference, floating, placement);
                i = 0;
            }
            Step::Reset(_) => i += 1,
        }
    }

    Position {
        x: coords.x,
        y: coords.y,
        placement,
        strategy: config.strategy,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::{Flip, Offset, Shift};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn coords_for_each_side() {
        let r = Rect::new(100.0, 100.0, 200.0, 140.0);
        let f = Size::new(60.0, 30.0);
        assert_eq!(compute_coords(r, f, Placement::TOP), Point::new(120.0, 70.0));
        assert_eq!(
            compute_coords(r, f, Placement::BOTTOM),
            Point::new(120.0, 140.0)
        );
        assert_eq!(
            compute_coords(r, f, Placement::RIGHT),
            Point::new(200.0, 105.0)
        );
        assert_eq!(compute_coords(r, f, Placement::LEFT), Point::new(40.0, 105.0));
    }

    #[test]
    fn coords_for_alignments() {
        let r = Rect::new(100.0, 100.0, 200.0, 140.0);
        let f = Size::new(60.0, 30.0);
        assert_eq!(
            compute_coords(r, f, Placement::TOP_START),
            Point::new(100.0, 70.0)
        );
        assert_eq!(
            compute_coords(r, f, Placement::TOP_END),
            Point::new(140.0, 70.0)
        );
        assert_eq!(
            compute_coords(r, f, Placement::RIGHT_START),
            Point::new(200.0, 100.0)
        );
        assert_eq!(
            compute_coords(r, f, Placement::LEFT_END),
            Point::new(40.0, 110.0)
        );
    }

    #[test]
    fn no_middleware_keeps_primary_placement() {
        let config = FloatingConfig::new(Placement::TOP_START).with_strategy(Strategy::Fixed);
        let pos = compute_position(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Size::new(50.0, 50.0),
            VIEWPORT,
            &config,
        );
        assert_eq!(pos.placement, Placement::TOP_START);
        assert_eq!(pos.strategy, Strategy::Fixed);
        assert_eq!(pos.origin(), Point::new(0.0, -50.0));
    }

    #[test]
    fn bottom_edge_reference_flips_to_fallback() {
        let config = FloatingConfig::new(Placement::BOTTOM_START)
            .with_middleware(Flip::default().with_padding(8.0).with_fallback_placements([
                Placement::TOP_START,
            ]))
            .with_middleware(Offset::main_axis(8.0));
        let pos = compute_position(
            Rect::new(50.0, 560.0, 150.0, 580.0),
            Size::new(200.0, 120.0),
            VIEWPORT,
            &config,
        );
        assert_eq!(pos.placement, Placement::TOP_START);
        assert_eq!(pos.origin(), Point::new(50.0, 432.0));
        let flip = pos.data.flip.unwrap();
        assert_eq!(flip.index, 1);
        assert_eq!(flip.overflows.len(), 1);
    }

    #[test]
    fn all_overflow_picks_best_fit() {
        // Panel taller than the space on either side; bottom has more room.
        let config = FloatingConfig::new(Placement::TOP)
            .with_middleware(Flip::default().with_fallback_placements([Placement::BOTTOM]));
        let pos = compute_position(
            Rect::new(100.0, 100.0, 200.0, 120.0),
            Size::new(50.0, 550.0),
            VIEWPORT,
            &config,
        );
        assert_eq!(pos.placement, Placement::BOTTOM);
    }

    #[test]
    fn all_overflow_can_return_to_initial() {
        let config = FloatingConfig::new(Placement::TOP).with_middleware(
            Flip::default()
                .with_fallback_placements([Placement::BOTTOM])
                .with_fallback_strategy(crate::middleware::FallbackStrategy::InitialPlacement),
        );
        let pos = compute_position(
            Rect::new(100.0, 100.0, 200.0, 120.0),
            Size::new(50.0, 550.0),
            VIEWPORT,
            &config,
        );
        assert_eq!(pos.placement, Placement::TOP);
    }

    #[test]
    fn shift_keeps_panel_on_screen() {
        let config = FloatingConfig::new(Placement::BOTTOM).with_middleware(Shift::default());
        let pos = compute_position(
            Rect::new(0.0, 100.0, 20.0, 120.0),
            Size::new(100.0, 40.0),
            VIEWPORT,
            &config,
        );
        assert_eq!(pos.origin(), Point::new(0.0, 120.0));
        assert_eq!(pos.data.shift.unwrap().x, 40.0);
    }
}
