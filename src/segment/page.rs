//! Page segmentation orchestration.
//!
//! Runs table and image extraction first (their boxes must be excluded
//! from text assignment), then groups the remaining text blocks and emits
//! a text document for every group not claimed by a table region.

use super::group::group_text_blocks;
use super::images::ImageExtractor;
use super::options::SegmentOptions;
use super::tables::TableExtractor;
use crate::model::{DocMetadata, Document, PageBlock};
use crate::services::Captioner;
use crate::source::SourcePage;
use crate::store::ArtifactStore;

/// Segments one page into table, image, and text documents.
pub struct PageSegmenter<'a> {
    captioner: &'a Captioner,
    store: &'a dyn ArtifactStore,
    options: &'a SegmentOptions,
}

impl<'a> PageSegmenter<'a> {
    /// Create a segmenter over the shared captioner, store, and options.
    pub fn new(
        captioner: &'a Captioner,
        store: &'a dyn ArtifactStore,
        options: &'a SegmentOptions,
    ) -> Self {
        Self {
            captioner,
            store,
            options,
        }
    }

    /// Segment a page, returning its documents in table, image, text order.
    ///
    /// `stem` is the source filename without extension; `page_num` is
    /// zero-based. Blocks in the top and bottom margin bands are treated
    /// as headers/footers and excluded before any processing.
    pub fn segment(&self, page: &dyn SourcePage, stem: &str, page_num: usize) -> Vec<Document> {
        let height = page.height();
        let top_band = height * self.options.margin_band;
        let bottom_band = height * (1.0 - self.options.margin_band);

        let text_blocks: Vec<PageBlock> = page
            .text_blocks()
            .into_iter()
            .filter(|b| b.is_text() && b.bbox.y0 >= top_band && b.bbox.y1 <= bottom_band)
            .collect();

        let table_extractor = TableExtractor::new(self.captioner, self.store, self.options);
        let (mut docs, table_bboxes) =
            table_extractor.extract(page, stem, page_num, &text_blocks);

        let image_extractor = ImageExtractor::new(self.captioner, self.store, self.options);
        docs.extend(image_extractor.extract(page, stem, page_num, &text_blocks));

        let groups = group_text_blocks(&text_blocks, self.options.char_count_threshold);
        for (i, group) in groups.into_iter().enumerate() {
            // Groups claimed by a table region are already represented in
            // that table's caption. Suppressed groups still consume a
            // counter slot.
            if table_bboxes.iter().any(|b| group.heading.bbox.intersects(b)) {
                continue;
            }

            let source = format!("{stem}-page{page_num}-block{}", i + 1);
            let metadata = DocMetadata::text(&source, page_num, group.heading.bbox);
            docs.push(Document::new(source, group.body, metadata));
        }

        docs
    }
}
