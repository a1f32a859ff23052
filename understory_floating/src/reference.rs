// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference geometry: where a floating panel is anchored.
//!
//! A panel is usually anchored to an element (a toolbar button, a decoration
//! node). When no single element exists, for example for a text selection, the
//! anchor is synthesized from the selection's caret geometry and re-read on
//! every update.
//!
//! Sources report `None` when they have no geometry yet; [`resolve_reference`]
//! turns that into [`Rect::ZERO`] so positioning can proceed.

use core::ops::Range;

use kurbo::Rect;

/// Something that can report the rectangle a panel should be anchored to.
pub trait ReferenceSource {
    /// Current bounding rectangle, or `None` if unavailable (e.g. not mounted).
    fn bounding_rect(&self) -> Option<Rect>;
}

impl ReferenceSource for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<T: ReferenceSource + ?Sized> ReferenceSource for &T {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

/// Resolve a reference, degrading to [`Rect::ZERO`] when it is unavailable.
pub fn resolve_reference(source: &impl ReferenceSource) -> Rect {
    source.bounding_rect().unwrap_or(Rect::ZERO)
}

/// An element anchor whose rectangle is set by the host while it is mounted.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ElementAnchor {
    rect: Option<Rect>,
}

impl ElementAnchor {
    /// An anchor that is not mounted yet.
    pub const fn new() -> Self {
        Self { rect: None }
    }

    /// An anchor mounted at `rect`.
    pub const fn mounted(rect: Rect) -> Self {
        Self { rect: Some(rect) }
    }

    /// Update the anchor's rectangle; `None` marks it unmounted.
    pub fn set(&mut self, rect: Option<Rect>) {
        self.rect = rect;
    }

    /// True while the anchor has geometry.
    pub fn is_mounted(&self) -> bool {
        self.rect.is_some()
    }
}

impl ReferenceSource for ElementAnchor {
    fn bounding_rect(&self) -> Option<Rect> {
        self.rect
    }
}

/// Caret and node geometry provided by a text view.
pub trait CaretGeometry {
    /// Rectangle of the caret at document position `pos`.
    fn caret_rect(&self, pos: usize) -> Option<Rect>;
    /// Rectangle of the node starting at `pos`, when that node is rendered as its own element.
    fn node_rect(&self, pos: usize) -> Option<Rect>;
}

/// Anchor synthesized from the current text selection.
///
/// The selection spans from the smallest range start to the largest range end.
/// A node selection anchors to the selected node's element when it has one;
/// everything else anchors to the union of the carets at both ends.
#[derive(Clone, Debug)]
pub struct SelectionAnchor<'a, V: ?Sized> {
    view: &'a V,
    ranges: &'a [Range<usize>],
    node_selection: bool,
}

impl<'a, V: CaretGeometry + ?Sized> SelectionAnchor<'a, V> {
    /// Anchor a text selection made of `ranges`.
    pub fn text(view: &'a V, ranges: &'a [Range<usize>]) -> Self {
        Self {
            view,
            ranges,
            node_selection: false,
        }
    }

    /// Anchor a node selection made of `ranges`.
    pub fn node(view: &'a V, ranges: &'a [Range<usize>]) -> Self {
        Self {
            view,
            ranges,
            node_selection: true,
        }
    }

    /// Smallest start and largest end over all ranges.
    pub fn span(&self) -> Option<Range<usize>> {
        let from = self.ranges.iter().map(|r| r.start).min()?;
        let to = self.ranges.iter().map(|r| r.end).max()?;
        Some(from..to)
    }
}

impl<V: CaretGeometry + ?Sized> ReferenceSource for SelectionAnchor<'_, V> {
    fn bounding_rect(&self) -> Option<Rect> {
        let span = self.span()?;
        if self.node_selection
            && let Some(rect) = self.view.node_rect(span.start)
        {
            return Some(rect);
        }
        match (
            self.view.caret_rect(span.start),
            self.view.caret_rect(span.end),
        ) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One line of monospace text, 10px per character, 20px tall.
    struct Line {
        node_at: Option<usize>,
    }

    impl CaretGeometry for Line {
        fn caret_rect(&self, pos: usize) -> Option<Rect> {
            if pos > 100 {
                return None;
            }
            let x = pos as f64 * 10.0;
            Some(Rect::new(x, 40.0, x, 60.0))
        }

        fn node_rect(&self, pos: usize) -> Option<Rect> {
            (self.node_at == Some(pos)).then(|| Rect::new(0.0, 0.0, 300.0, 200.0))
        }
    }

    #[test]
    fn unmounted_element_resolves_to_zero() {
        let mut anchor = ElementAnchor::new();
        assert_eq!(resolve_reference(&anchor), Rect::ZERO);
        anchor.set(Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
        assert!(anchor.is_mounted());
        assert_eq!(resolve_reference(&anchor), Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn text_selection_spans_all_ranges() {
        let view = Line { node_at: None };
        let ranges = [4..6, 1..3];
        let anchor = SelectionAnchor::text(&view, &ranges);
        assert_eq!(anchor.span(), Some(1..6));
        assert_eq!(
            anchor.bounding_rect(),
            Some(Rect::new(10.0, 40.0, 60.0, 60.0))
        );
    }

    #[test]
    fn node_selection_prefers_node_element() {
        let view = Line { node_at: Some(2) };
        let ranges = [2..3];
        let anchor = SelectionAnchor::node(&view, &ranges);
        assert_eq!(
            anchor.bounding_rect(),
            Some(Rect::new(0.0, 0.0, 300.0, 200.0))
        );
    }

    #[test]
    fn node_selection_without_element_uses_carets() {
        let view = Line { node_at: None };
        let ranges = [2..3];
        let anchor = SelectionAnchor::node(&view, &ranges);
        assert_eq!(
            anchor.bounding_rect(),
            Some(Rect::new(20.0, 40.0, 30.0, 60.0))
        );
    }

    #[test]
    fn empty_selection_has_no_geometry() {
        let view = Line { node_at: None };
        let anchor = SelectionAnchor::text(&view, &[]);
        assert_eq!(anchor.bounding_rect(), None);
        assert_eq!(resolve_reference(&anchor), Rect::ZERO);
    }

    #[test]
    fn half_known_selection_uses_known_caret() {
        let view = Line { node_at: None };
        let ranges = [5..500];
        let anchor = SelectionAnchor::text(&view, &ranges);
        assert_eq!(
            anchor.bounding_rect(),
            Some(Rect::new(50.0, 40.0, 50.0, 60.0))
        );
    }
}
