//! Visibility Observer
//!
//! Watches a registered set of elements and marks each `visible` the first
//! time enough of it intersects the observation region. The region is the
//! viewport shrunk by a fixed margin on its bottom edge, so elements reveal
//! slightly before they would be flush with the fold. The transition is
//! one-way: later exits and re-entries are no-ops.

use alloc::vec::Vec;

use glint_dom::{Document, NodeId, Rect};

/// Class marking a revealed element.
pub const VISIBLE_CLASS: &str = "visible";

/// Viewport state in page coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_y: f64,
}

impl Viewport {
    /// Create a viewport at scroll offset zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_y: 0.0,
        }
    }

    /// The visible page region, with the bottom edge pulled up by `margin`.
    pub fn observation_region(&self, bottom_margin: f64) -> Rect {
        let height = self.height - bottom_margin;
        Rect::new(0.0, self.scroll_y, self.width, if height > 0.0 { height } else { 0.0 })
    }
}

/// One-shot entrance-reveal observer.
#[derive(Debug)]
pub struct VisibilityObserver {
    targets: Vec<NodeId>,
    highlights: Option<NodeId>,
    bottom_margin: f64,
    threshold: f64,
}

impl VisibilityObserver {
    /// Create an observer over a target set plus the distinguished
    /// highlights container.
    pub fn new(
        targets: Vec<NodeId>,
        highlights: Option<NodeId>,
        bottom_margin: f64,
        threshold: f64,
    ) -> Self {
        Self {
            targets,
            highlights,
            bottom_margin,
            threshold,
        }
    }

    /// Whether an element qualifies as intersecting the region.
    fn qualifies(&self, rect: Rect, region: &Rect) -> bool {
        let area = rect.area();
        if area == 0.0 {
            // Degenerate rects qualify by origin containment
            return region.contains(rect.x, rect.y);
        }
        match rect.intersection(region) {
            Some(overlap) => overlap.area() >= self.threshold * area,
            None => false,
        }
    }

    /// Process the current element geometry against the viewport. Marks
    /// newly qualifying targets `visible` and returns true when the
    /// highlights container qualified for the first time in this batch.
    pub fn check(&self, doc: &mut Document, viewport: &Viewport) -> bool {
        let region = viewport.observation_region(self.bottom_margin);
        let mut highlights_revealed = false;

        for &node in &self.targets {
            if doc.has_class(node, VISIBLE_CLASS) {
                continue;
            }
            let rect = match doc.rect(node) {
                Some(r) => r,
                None => continue,
            };
            if self.qualifies(rect, &region) {
                doc.add_class(node, VISIBLE_CLASS);
                log::trace!("revealed node {}", node);
                if self.highlights == Some(node) {
                    highlights_revealed = true;
                }
            }
        }

        highlights_revealed
    }

    /// Fallback path: mark every target visible immediately.
    pub fn reveal_all(&self, doc: &mut Document) {
        for &node in &self.targets {
            doc.add_class(node, VISIBLE_CLASS);
        }
        log::debug!("revealed all {} targets without animation", self.targets.len());
    }

    /// Registered target count.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn target(doc: &mut Document, y: f64, h: f64) -> NodeId {
        let el = doc.create_element("section");
        doc.append_child(doc.root(), el);
        doc.set_rect(el, Rect::new(0.0, y, 800.0, h));
        el
    }

    #[test]
    fn test_reveals_once_element_scrolls_in() {
        let mut doc = Document::new();
        let el = target(&mut doc, 1200.0, 200.0);
        let obs = VisibilityObserver::new(vec![el], None, 50.0, 0.10);
        let mut vp = Viewport::new(800.0, 600.0);

        obs.check(&mut doc, &vp);
        assert!(!doc.has_class(el, VISIBLE_CLASS));

        vp.scroll_y = 700.0;
        obs.check(&mut doc, &vp);
        assert!(doc.has_class(el, VISIBLE_CLASS));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut doc = Document::new();
        let el = target(&mut doc, 1200.0, 200.0);
        let obs = VisibilityObserver::new(vec![el], None, 50.0, 0.10);
        let mut vp = Viewport::new(800.0, 600.0);

        // In, out, in again — stays visible throughout
        vp.scroll_y = 700.0;
        obs.check(&mut doc, &vp);
        vp.scroll_y = 0.0;
        obs.check(&mut doc, &vp);
        assert!(doc.has_class(el, VISIBLE_CLASS));
        vp.scroll_y = 700.0;
        obs.check(&mut doc, &vp);
        assert!(doc.has_class(el, VISIBLE_CLASS));
    }

    #[test]
    fn test_bottom_margin_shrinks_region() {
        let mut doc = Document::new();
        // Element whose top 10% sits just above y = 600 but below y = 550
        let el = target(&mut doc, 580.0, 100.0);
        let obs = VisibilityObserver::new(vec![el], None, 50.0, 0.10);
        let vp = Viewport::new(800.0, 600.0);

        // Region is y in [0, 550): only 0 px of the element overlaps the
        // margin-shrunk region even though 20 px are inside the raw viewport
        obs.check(&mut doc, &vp);
        assert!(!doc.has_class(el, VISIBLE_CLASS));

        let no_margin = VisibilityObserver::new(vec![el], None, 0.0, 0.10);
        no_margin.check(&mut doc, &vp);
        // 20 px of 100 px = 20% >= 10% threshold
        assert!(doc.has_class(el, VISIBLE_CLASS));
    }

    #[test]
    fn test_threshold_requires_tenth_of_area() {
        let mut doc = Document::new();
        // 5% of the element inside the region
        let el = target(&mut doc, 540.0, 200.0);
        let obs = VisibilityObserver::new(vec![el], None, 50.0, 0.10);
        let vp = Viewport::new(800.0, 600.0);

        // Region bottom at 550: overlap 10 px of 200 px = 5%
        obs.check(&mut doc, &vp);
        assert!(!doc.has_class(el, VISIBLE_CLASS));
    }

    #[test]
    fn test_highlights_signal_fires_on_first_reveal_only() {
        let mut doc = Document::new();
        let hl = target(&mut doc, 100.0, 200.0);
        let obs = VisibilityObserver::new(vec![hl], Some(hl), 50.0, 0.10);
        let vp = Viewport::new(800.0, 600.0);

        assert!(obs.check(&mut doc, &vp));
        // Second batch: already visible, no re-trigger
        assert!(!obs.check(&mut doc, &vp));
    }

    #[test]
    fn test_reveal_all_marks_everything() {
        let mut doc = Document::new();
        let a = target(&mut doc, 5000.0, 100.0);
        let b = target(&mut doc, 9000.0, 100.0);
        let obs = VisibilityObserver::new(vec![a, b], Some(a), 50.0, 0.10);

        obs.reveal_all(&mut doc);
        assert!(doc.has_class(a, VISIBLE_CLASS));
        assert!(doc.has_class(b, VISIBLE_CLASS));
    }
}
