//! Spatial caption-text location.
//!
//! Finds the nearest text strictly above and strictly below a bounding box,
//! scanning blocks in document order. Ties go to the earlier block, and the
//! scan ends as soon as the below-text is found; this trades completeness
//! for speed.

use crate::model::{BoundingBox, PageBlock};

/// Locate the nearest text above and below a target box.
///
/// A block qualifies when its vertical gap to the box is within
/// `page_height × threshold` and its signed horizontal overlap is at least
/// `-box_width × threshold`. The negative lower bound is intentional:
/// blocks with no horizontal overlap at all still qualify when the gap
/// between their horizontal extents stays within the margin.
///
/// Returns `(before, after)`, each empty when no block qualifies on that
/// side.
pub fn text_around(
    blocks: &[PageBlock],
    bbox: &BoundingBox,
    page_height: f32,
    threshold: f32,
) -> (String, String) {
    let vertical_limit = page_height * threshold;
    let horizontal_margin = bbox.width() * threshold;

    let mut before = String::new();
    let mut after = String::new();

    for block in blocks {
        let gap = block.bbox.vertical_gap(bbox);
        let overlap = block.bbox.horizontal_overlap(bbox);

        if gap <= vertical_limit && overlap >= -horizontal_margin {
            if block.bbox.is_above(bbox) && before.is_empty() {
                before = block.text.clone();
            } else if block.bbox.is_below(bbox) && after.is_empty() {
                after = block.text.clone();
                break;
            }
        }
    }

    (before, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(y0: f32, y1: f32, text: &str) -> PageBlock {
        PageBlock::text(BoundingBox::new(10.0, y0, 90.0, y1), text)
    }

    // Target box spanning y 40..60 on a height-100 page; the default
    // threshold admits blocks within 10 units vertically.
    fn target() -> BoundingBox {
        BoundingBox::new(10.0, 40.0, 90.0, 60.0)
    }

    #[test]
    fn test_finds_before_and_after() {
        let blocks = vec![block(25.0, 35.0, "above"), block(65.0, 75.0, "below")];
        let (before, after) = text_around(&blocks, &target(), 100.0, 0.1);

        assert_eq!(before, "above");
        assert_eq!(after, "below");
    }

    #[test]
    fn test_empty_when_nothing_in_range() {
        let blocks = vec![block(0.0, 10.0, "far above"), block(90.0, 100.0, "far below")];
        let (before, after) = text_around(&blocks, &target(), 100.0, 0.1);

        assert_eq!(before, "");
        assert_eq!(after, "");
    }

    #[test]
    fn test_before_requires_strictly_above() {
        // Overlapping block is neither above nor below.
        let blocks = vec![block(35.0, 45.0, "overlapping")];
        let (before, after) = text_around(&blocks, &target(), 100.0, 0.1);

        assert_eq!(before, "");
        assert_eq!(after, "");
    }

    #[test]
    fn test_first_match_wins_in_document_order() {
        let blocks = vec![
            block(30.0, 39.0, "first above"),
            block(31.0, 39.5, "closer above"),
        ];
        let (before, _) = text_around(&blocks, &target(), 100.0, 0.1);

        // Document order breaks the tie, not distance.
        assert_eq!(before, "first above");
    }

    #[test]
    fn test_scan_stops_after_below_found() {
        // The below-block appears before any above-block in document
        // order, so the scan ends with before still empty.
        let blocks = vec![block(65.0, 75.0, "below"), block(25.0, 35.0, "above")];
        let (before, after) = text_around(&blocks, &target(), 100.0, 0.1);

        assert_eq!(before, "");
        assert_eq!(after, "below");
    }

    #[test]
    fn test_horizontal_near_miss_tolerated() {
        // Target width 80, margin 8: a block starting 5 past the right
        // edge qualifies, one starting 12 past does not.
        let near = PageBlock::text(BoundingBox::new(95.0, 25.0, 150.0, 35.0), "near");
        let far = PageBlock::text(BoundingBox::new(102.0, 25.0, 150.0, 35.0), "far");

        let (before, _) = text_around(&[near], &target(), 100.0, 0.1);
        assert_eq!(before, "near");

        let (before, _) = text_around(&[far], &target(), 100.0, 0.1);
        assert_eq!(before, "");
    }
}
