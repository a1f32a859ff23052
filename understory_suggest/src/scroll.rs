// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred scroll-into-view for the selected entry.
//!
//! Selecting an entry does not scroll immediately: layout may still be
//! settling. A [`ScrollScheduler`] holds one pending request with a deadline;
//! a newer request replaces it and closing the list cancels it.

use core::time::Duration;

use kurbo::Rect;

/// How the scroll is animated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollBehavior {
    /// Animate.
    #[default]
    Smooth,
    /// Jump.
    Instant,
}

/// A request to bring an entry into view.
///
/// The host resolves `index` to the entry's rectangle and applies
/// [`scroll_into_view_nearest`] with `behavior`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrollRequest {
    /// Index of the entry in the item list.
    pub index: usize,
    /// Animation.
    pub behavior: ScrollBehavior,
}

/// Holds at most one pending [`ScrollRequest`].
#[derive(Clone, Debug, Default)]
pub struct ScrollScheduler {
    delay: Duration,
    pending: Option<(ScrollRequest, Duration)>,
}

impl ScrollScheduler {
    /// Create a scheduler that defers requests by `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace the pending request with a smooth scroll to `index`, due at `now + delay`.
    pub fn request(&mut self, index: usize, now: Duration) {
        let request = ScrollRequest {
            index,
            behavior: ScrollBehavior::Smooth,
        };
        self.pending = Some((request, now.saturating_add(self.delay)));
    }

    /// Drop the pending request.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// When the pending request is due.
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|(_, at)| at)
    }

    /// Take the pending request if it is due.
    pub fn poll(&mut self, now: Duration) -> Option<ScrollRequest> {
        match self.pending {
            Some((request, at)) if now >= at => {
                self.pending = None;
                Some(request)
            }
            _ => None,
        }
    }
}

/// New vertical scroll offset that brings `entry` into `viewport` with
/// nearest-edge alignment, or `None` if no scroll is needed.
///
/// Both rectangles are in the scroll container's content coordinates;
/// `viewport.y0` is the current scroll offset.
///
/// - An entry already fully visible, or one that covers the whole viewport,
///   does not scroll.
/// - An entry cut off at the top aligns to the top if it fits, else to the
///   bottom, and the other way round for an entry cut off at the bottom.
///
/// ```
/// use kurbo::Rect;
/// use understory_suggest::scroll_into_view_nearest;
///
/// let viewport = Rect::new(0.0, 100.0, 200.0, 300.0);
/// // Below the fold: align its bottom edge.
/// assert_eq!(
///     scroll_into_view_nearest(viewport, Rect::new(0.0, 280.0, 200.0, 320.0)),
///     Some(120.0)
/// );
/// // Already visible.
/// assert_eq!(scroll_into_view_nearest(viewport, Rect::new(0.0, 120.0, 200.0, 160.0)), None);
/// ```
pub fn scroll_into_view_nearest(viewport: Rect, entry: Rect) -> Option<f64> {
    let (view_start, view_end, view_size) = (viewport.y0, viewport.y1, viewport.height());
    let (start, end, size) = (entry.y0, entry.y1, entry.height());

    let delta = if (start < view_start && end > view_end) || (start >= view_start && end <= view_end)
    {
        0.0
    } else if (start <= view_start && size <= view_size) || (end >= view_end && size >= view_size) {
        start - view_start
    } else if (start > view_start && size < view_size) || (end < view_end && size > view_size) {
        end - view_end
    } else {
        0.0
    };
    (delta != 0.0 && delta.is_finite()).then_some(view_start + delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn newer_request_replaces_pending() {
        let mut s = ScrollScheduler::new(ms(200));
        s.request(1, ms(0));
        s.request(2, ms(50));
        assert_eq!(s.poll(ms(200)), None);
        assert_eq!(s.deadline(), Some(ms(250)));
        assert_eq!(s.poll(ms(250)).map(|r| r.index), Some(2));
        assert_eq!(s.poll(ms(500)), None);
    }

    #[test]
    fn cancel_drops_pending() {
        let mut s = ScrollScheduler::new(ms(200));
        s.request(3, ms(0));
        s.cancel();
        assert_eq!(s.poll(ms(1000)), None);
    }

    #[test]
    fn nearest_alignment() {
        let viewport = Rect::new(0.0, 100.0, 200.0, 300.0);
        // Above: align top.
        assert_eq!(
            scroll_into_view_nearest(viewport, Rect::new(0.0, 60.0, 200.0, 100.0)),
            Some(60.0)
        );
        // Partially above: align top.
        assert_eq!(
            scroll_into_view_nearest(viewport, Rect::new(0.0, 90.0, 200.0, 130.0)),
            Some(90.0)
        );
        // Taller than the viewport, hanging below: align top.
        assert_eq!(
            scroll_into_view_nearest(viewport, Rect::new(0.0, 250.0, 200.0, 600.0)),
            Some(250.0)
        );
        // Covers the viewport entirely.
        assert_eq!(
            scroll_into_view_nearest(viewport, Rect::new(0.0, 0.0, 200.0, 400.0)),
            None
        );
    }
}
