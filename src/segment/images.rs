//! Embedded-image extraction.
//!
//! Enumerates a page's embedded raster images, filters decorative noise by
//! a minimum-size heuristic, and emits image documents captioned from
//! surrounding text plus a graph-conditional description.

use super::locate::text_around;
use super::options::SegmentOptions;
use crate::error::Result;
use crate::model::{DocMetadata, Document, PageBlock};
use crate::services::Captioner;
use crate::source::{PageImage, SourcePage};
use crate::store::{artifact_name, ArtifactStore, IMAGE_DIR};

/// Extracts image documents from one page.
pub struct ImageExtractor<'a> {
    captioner: &'a Captioner,
    store: &'a dyn ArtifactStore,
    options: &'a SegmentOptions,
}

impl<'a> ImageExtractor<'a> {
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

    /// Extract all informative images from the page.
    ///
    /// Skips the page's background reference (xref 0) and anything smaller
    /// than the minimum size fraction in either dimension. Images with no
    /// surrounding text on either side are dropped as uninformative (logos
    /// and the like). A failing element is logged and skipped.
    pub fn extract(
        &self,
        page: &dyn SourcePage,
        stem: &str,
        page_num: usize,
        text_blocks: &[PageBlock],
    ) -> Vec<Document> {
        let min_width = page.width() * self.options.min_image_fraction;
        let min_height = page.height() * self.options.min_image_fraction;

        let mut docs = Vec::new();

        for image in page.images() {
            if image.xref == 0 {
                continue;
            }
            if image.bbox.width() < min_width || image.bbox.height() < min_height {
                log::debug!(
                    "dropping decorative image {} on page {page_num} ({}x{})",
                    image.xref,
                    image.bbox.width(),
                    image.bbox.height()
                );
                continue;
            }

            match self.extract_one(page, stem, page_num, &image, text_blocks) {
                Ok(Some(doc)) => docs.push(doc),
                Ok(None) => {}
                Err(e) => {
                    log::warn!("skipping image {} on page {page_num}: {e}", image.xref)
                }
            }
        }

        docs
    }

    fn extract_one(
        &self,
        page: &dyn SourcePage,
        stem: &str,
        page_num: usize,
        image: &PageImage,
        text_blocks: &[PageBlock],
    ) -> Result<Option<Document>> {
        let image_path = self.store.save(
            &image.bytes,
            &format!(
                "{IMAGE_DIR}/{}",
                artifact_name(stem, "image", image.xref as usize, page_num, "png")
            ),
        )?;

        let (before, after) = text_around(
            text_blocks,
            &image.bbox,
            page.height(),
            self.options.proximity_threshold,
        );
        if before.is_empty() && after.is_empty() {
            return Ok(None);
        }

        let description = if self.captioner.is_graph(&image.bytes)? {
            self.captioner.process_graph(&image.bytes)?
        } else {
            " ".to_string()
        };

        let caption = format!(
            "{}{}{}",
            before.replace('\n', " "),
            description,
            after.replace('\n', " ")
        );

        let source = format!("{stem}-page{page_num}-image{}", image.xref);
        let text = format!("This is an image with the caption: {caption}");
        let metadata =
            DocMetadata::image(&source, Some(page_num), Some(image_path), Some(caption));

        Ok(Some(Document::new(source, text, metadata)))
    }
}
