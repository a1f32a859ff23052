// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive truncation of the toolbar.
//!
//! 1. Observed widths map to visible counts at the 424 and 640 px breakpoints.
//! 2. Visible plus overflow is always the full sequence, in order.
//! 3. Growing the container never hides controls.

use core::time::Duration;

use proptest::prelude::*;
use understory_toolbar::{
    Toolbar, ToolbarConfig, WidthTier, formatting::toolbar_controls, select_controls,
};

fn settle(toolbar: &mut Toolbar, width: f64, now: u64) {
    toolbar.observe_width(width, Duration::from_millis(now));
    if let Some(due) = toolbar.next_deadline() {
        toolbar.poll(due);
    }
}

#[test]
fn sample_widths() {
    let config = ToolbarConfig::default();
    let mut toolbar = Toolbar::new(config, true);
    toolbar.mount();
    let mut visible = Vec::new();
    for (i, width) in [700.0, 650.0, 500.0, 420.0, 300.0].into_iter().enumerate() {
        settle(&mut toolbar, width, i as u64 * 100);
        visible.push(toolbar.split().visible.len());
    }
    // 650 is above 640, so it is wide.
    assert_eq!(visible, [9, 9, 5, 3, 3]);
}

#[test]
fn breakpoint_edges() {
    let mut toolbar = Toolbar::new(ToolbarConfig::default(), true);
    toolbar.mount();
    let cases = [
        (641.0, 9),
        (640.0, 5),
        (430.0, 5),
        (424.0, 5),
        (423.0, 3),
    ];
    for (i, (width, count)) in cases.into_iter().enumerate() {
        settle(&mut toolbar, width, i as u64 * 100);
        assert_eq!(toolbar.split().visible.len(), count, "width {width}");
    }
}

#[test]
fn resize_700_to_400() {
    let mut toolbar = Toolbar::new(ToolbarConfig::default(), true);
    toolbar.mount();
    settle(&mut toolbar, 700.0, 0);
    let before = toolbar.split();
    assert_eq!((before.visible.len(), before.overflow.len()), (9, 0));
    settle(&mut toolbar, 400.0, 100);
    let after = toolbar.split();
    assert_eq!((after.visible.len(), after.overflow.len()), (3, 6));
}

fn tier_strategy() -> impl Strategy<Value = WidthTier> {
    prop_oneof![
        Just(WidthTier::Wide),
        Just(WidthTier::Normal),
        Just(WidthTier::Narrow)
    ]
}

proptest! {
    #[test]
    fn split_partitions_in_order(len in 0usize..20, tier in tier_strategy()) {
        let controls: Vec<usize> = (0..len).collect();
        let split = select_controls(&controls, tier, &ToolbarConfig::default().counts);
        let joined: Vec<usize> = split.visible.iter().chain(split.overflow).copied().collect();
        prop_assert_eq!(joined, controls.clone());
        prop_assert!(split.visible.len() <= tier.visible_count(&ToolbarConfig::default().counts));
    }

    #[test]
    fn wider_never_hides_more(a in 0.0f64..1200.0, b in 0.0f64..1200.0) {
        let config = ToolbarConfig::default();
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let all = toolbar_controls(true);
        let n = select_controls(&all, config.tier_for(narrow), &config.counts).visible.len();
        let w = select_controls(&all, config.tier_for(wide), &config.counts).visible.len();
        prop_assert!(n <= w);
    }
}
