//! Table extraction.
//!
//! Detects ruled-table regions on a page, exports their content and a
//! raster snapshot as side-artifacts, and synthesizes a caption from the
//! chart-narration pipeline plus surrounding text.

use super::locate::text_around;
use super::options::SegmentOptions;
use crate::error::{Error, Result};
use crate::model::{BoundingBox, DocMetadata, Document, PageBlock};
use crate::services::Captioner;
use crate::source::{SourcePage, TableRegion};
use crate::store::{artifact_name, ArtifactStore, TABLE_DIR};

/// Extracts table documents from one page.
pub struct TableExtractor<'a> {
    captioner: &'a Captioner,
    store: &'a dyn ArtifactStore,
    options: &'a SegmentOptions,
}

impl<'a> TableExtractor<'a> {
    /// Create an extractor over the shared captioner, store, and options.
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

    /// Extract all tables with real headers from the page.
    ///
    /// Returns the table documents and the bounding boxes of every detected
    /// non-external-header region. A region that fails to extract is logged
    /// and skipped, but its box still counts for text suppression; a failed
    /// detection pass yields zero tables for the page.
    pub fn extract(
        &self,
        page: &dyn SourcePage,
        stem: &str,
        page_num: usize,
        text_blocks: &[PageBlock],
    ) -> (Vec<Document>, Vec<BoundingBox>) {
        let regions = match page.find_tables() {
            Ok(regions) => regions,
            Err(e) => {
                log::warn!("table detection failed on page {page_num}: {e}");
                return (Vec::new(), Vec::new());
            }
        };

        let mut docs = Vec::new();
        let mut bboxes = Vec::new();

        for region in &regions {
            if region.data.header_external {
                continue;
            }

            let index = docs.len() + 1;
            bboxes.push(region.bbox);

            match self.extract_one(page, stem, page_num, index, region, text_blocks) {
                Ok(doc) => docs.push(doc),
                Err(e) => log::warn!("skipping table {index} on page {page_num}: {e}"),
            }
        }

        (docs, bboxes)
    }

    fn extract_one(
        &self,
        page: &dyn SourcePage,
        stem: &str,
        page_num: usize,
        index: usize,
        region: &TableRegion,
        text_blocks: &[PageBlock],
    ) -> Result<Document> {
        let export = serde_json::to_vec_pretty(&region.data)?;
        let dataframe_path = self.store.save(
            &export,
            &format!(
                "{TABLE_DIR}/{}",
                artifact_name(stem, "table", index, page_num, "json")
            ),
        )?;

        let (before, after) = text_around(
            text_blocks,
            &region.bbox,
            page.height(),
            self.options.proximity_threshold,
        );

        let snapshot = page
            .render_region(&region.bbox)
            .map_err(|e| Error::Extraction(format!("rendering table region: {e}")))?;
        let image_path = self.store.save(
            &snapshot,
            &format!(
                "{TABLE_DIR}/{}",
                artifact_name(stem, "table", index, page_num, "png")
            ),
        )?;

        let description = self.captioner.process_graph(&snapshot)?;

        let caption = if before.is_empty() && after.is_empty() {
            region.data.header_caption()
        } else {
            format!(
                "{}{}{}",
                before.replace('\n', " "),
                description,
                after.replace('\n', " ")
            )
        };

        let source = format!("{stem}-page{page_num}-table{index}");
        let text = format!(
            "This is a table with the caption: {caption}\nThe columns are {}",
            region.data.column_list()
        );
        let metadata = DocMetadata::table(&source, page_num, dataframe_path, image_path, &caption);

        Ok(Document::new(source, text, metadata))
    }
}
