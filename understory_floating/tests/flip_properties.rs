// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for placement selection.
//!
//! 1. A reference with room for the panel keeps the primary placement.
//! 2. A reference near the bottom edge flips before the panel overflows.
//! 3. Computed panels never leave the viewport when a fitting placement exists.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use understory_floating::{
    FloatingConfig, Flip, Offset, Placement, Side, Strategy, compute_position,
};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);
const PADDING: f64 = 8.0;
const GAP: f64 = 8.0;

fn suggestion_config(primary: Placement) -> FloatingConfig {
    FloatingConfig::new(primary)
        .with_strategy(Strategy::Fixed)
        .with_middleware(Offset::main_axis(GAP))
        .with_middleware(Flip::default().with_padding(PADDING).with_fallback_placements([
            Placement::TOP_START,
            Placement::TOP_END,
        ]))
}

proptest! {
    #[test]
    fn roomy_reference_keeps_primary(
        x in 16.0f64..900.0,
        y in 300.0f64..500.0,
        w in 1.0f64..100.0,
        fw in 50.0f64..300.0,
        fh in 20.0f64..200.0,
    ) {
        // Room below: 800 - (y + 20) >= 280 > fh + GAP + PADDING.
        let reference = Rect::new(x, y, x + w, y + 20.0);
        let config = suggestion_config(Placement::BOTTOM_START);
        let pos = compute_position(reference, Size::new(fw, fh), VIEWPORT, &config);
        prop_assert_eq!(pos.placement, Placement::BOTTOM_START);
        prop_assert!(pos.data.flip.is_none());
    }

    #[test]
    fn bottom_edge_reference_flips_up(
        x in 16.0f64..900.0,
        gap_below in 0.0f64..40.0,
        fh in 60.0f64..200.0,
    ) {
        let bottom = VIEWPORT.y1 - gap_below;
        let reference = Rect::new(x, bottom - 20.0, x + 40.0, bottom);
        let config = suggestion_config(Placement::BOTTOM_START);
        let pos = compute_position(reference, Size::new(200.0, fh), VIEWPORT, &config);
        prop_assert_eq!(pos.placement.side, Side::Top);
        prop_assert!(pos.y + fh <= reference.y0);
        prop_assert!(pos.y >= VIEWPORT.y0);
    }

    #[test]
    fn fitting_result_stays_inside_viewport(
        x in 16.0f64..1000.0,
        y in 0.0f64..780.0,
        fh in 20.0f64..150.0,
    ) {
        let reference = Rect::new(x, y, x + 20.0, y + 20.0);
        let config = FloatingConfig::new(Placement::TOP_START)
            .with_middleware(Flip::default().with_padding(PADDING))
            .with_middleware(Offset::main_axis(GAP));
        let pos = compute_position(reference, Size::new(200.0, fh), VIEWPORT, &config);
        let panel = Rect::new(pos.x, pos.y, pos.x + 200.0, pos.y + fh);
        prop_assert!(panel.y0 >= VIEWPORT.y0 && panel.y1 <= VIEWPORT.y1);
    }
}
