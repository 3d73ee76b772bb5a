//! PDF loader: drives the page segmenter across every page of a source.

use super::{file_stem, DocumentLoader, LoaderContext};
use crate::error::Result;
use crate::model::Document;
use crate::segment::PageSegmenter;
use crate::source::PageSourceReader;
use std::sync::Arc;

/// Loader for PDF documents.
///
/// The page-layout engine is injected as a [`PageSourceReader`]; this
/// loader owns only the per-page orchestration and aggregation.
pub struct PdfLoader {
    reader: Arc<dyn PageSourceReader>,
    ctx: LoaderContext,
}

impl PdfLoader {
    /// Create a PDF loader over a paged-source reader.
    pub fn new(reader: Arc<dyn PageSourceReader>, ctx: LoaderContext) -> Self {
        Self { reader, ctx }
    }
}

impl DocumentLoader for PdfLoader {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<Vec<Document>> {
        // An unopenable source yields an empty document set, not an error:
        // one corrupt file must not take down the batch.
        let source = match self.reader.open(bytes) {
            Ok(source) => source,
            Err(e) => {
                log::error!("error opening or processing {name}: {e}");
                return Ok(Vec::new());
            }
        };

        let stem = file_stem(name);
        let segmenter = PageSegmenter::new(
            &self.ctx.captioner,
            self.ctx.store.as_ref(),
            &self.ctx.options,
        );

        let mut docs = Vec::new();
        for page_num in 0..source.page_count() {
            match source.page(page_num) {
                Ok(page) => docs.extend(segmenter.segment(page.as_ref(), &stem, page_num)),
                Err(e) => log::warn!("skipping page {page_num} of {name}: {e}"),
            }
        }

        Ok(docs)
    }
}
