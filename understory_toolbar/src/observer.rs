// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debounced observation of the toolbar container's width.
//!
//! The host forwards every resize of the container to
//! [`WidthObserver::observe`] together with a monotonic timestamp, and calls
//! [`WidthObserver::poll`] when the deadline reported by
//! [`WidthObserver::next_deadline`] passes. Observations inside the debounce
//! window replace each other; only the last one is classified.
//!
//! ```
//! use core::time::Duration;
//! use understory_toolbar::{ToolbarConfig, WidthObserver, WidthTier};
//!
//! let ms = Duration::from_millis;
//! let mut observer = WidthObserver::new(&ToolbarConfig::default());
//! observer.attach();
//!
//! observer.observe(500.0, ms(0));
//! observer.observe(300.0, ms(4));
//! assert_eq!(observer.poll(ms(10)), None); // still inside the window
//! assert_eq!(observer.next_deadline(), Some(ms(14)));
//! assert_eq!(observer.poll(ms(14)), Some(WidthTier::Narrow));
//!
//! // Same tier, different pixels: nothing to report.
//! observer.observe(310.0, ms(20));
//! assert_eq!(observer.poll(ms(30)), None);
//! ```

use core::time::Duration;

use crate::config::ToolbarConfig;
use crate::tier::WidthTier;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Pending {
    width: f64,
    deadline: Duration,
}

/// Classifies the container width into a [`WidthTier`] with a trailing debounce.
///
/// The observer starts detached and in [`WidthTier::Wide`]. While detached
/// observations are ignored; detaching drops any pending observation.
#[derive(Clone, Debug)]
pub struct WidthObserver {
    config: ToolbarConfig,
    attached: bool,
    pending: Option<Pending>,
    width: Option<f64>,
    tier: WidthTier,
}

impl WidthObserver {
    /// Create a detached observer using `config`'s breakpoints, padding, and debounce.
    pub fn new(config: &ToolbarConfig) -> Self {
        Self {
            config: *config,
            attached: false,
            pending: None,
            width: None,
            tier: WidthTier::default(),
        }
    }

    /// Start observing. The container is mounted.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Stop observing and drop the pending observation. The container is unmounted.
    pub fn detach(&mut self) {
        self.attached = false;
        self.pending = None;
    }

    /// True while attached.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record the container's outer width at `now`, (re)arming the debounce.
    ///
    /// Ignored while detached or when `width` is not finite (no measurement).
    pub fn observe(&mut self, width: f64, now: Duration) {
        if !self.attached || !width.is_finite() {
            return;
        }
        self.pending = Some(Pending {
            width,
            deadline: now.saturating_add(self.config.resize_debounce),
        });
    }

    /// When the pending observation becomes due, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|p| p.deadline)
    }

    /// Fire the pending observation if its deadline has passed.
    ///
    /// Returns the new tier only when it differs from the current one.
    pub fn poll(&mut self, now: Duration) -> Option<WidthTier> {
        let pending = self.pending?;
        if now < pending.deadline {
            return None;
        }
        self.pending = None;
        self.width = Some(pending.width);
        let tier = self.config.tier_for(pending.width);
        if tier == self.tier {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = %self.tier, to = %tier, width = pending.width, "toolbar tier changed");
        self.tier = tier;
        Some(tier)
    }

    /// The current tier.
    pub fn tier(&self) -> WidthTier {
        self.tier
    }

    /// The last width that was classified, if any.
    pub fn width(&self) -> Option<f64> {
        self.width
    }
}
