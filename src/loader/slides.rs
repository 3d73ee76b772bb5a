//! Slide-deck loader (`.ppt`/`.pptx`).
//!
//! Each slide becomes one image-type document combining the slide text, a
//! graph-conditional description of the rendered slide, and the speaker
//! notes.

use super::{file_stem, DocumentLoader, LoaderContext};
use crate::error::Result;
use crate::model::{DocMetadata, Document};
use crate::source::{Slide, SlideReader};
use crate::store::{artifact_name, SLIDE_DIR};
use std::sync::Arc;

/// Loader for PPT and PPTX documents.
pub struct SlideLoader {
    reader: Arc<dyn SlideReader>,
    ctx: LoaderContext,
}

impl SlideLoader {
    /// Create a slide loader over a slide-deck reader.
    pub fn new(reader: Arc<dyn SlideReader>, ctx: LoaderContext) -> Self {
        Self { reader, ctx }
    }

    fn load_slide(
        &self,
        slide: &Slide,
        name: &str,
        stem: &str,
        page_num: usize,
    ) -> Result<Document> {
        let image_path = self.ctx.store.save(
            &slide.image,
            &format!(
                "{SLIDE_DIR}/{}",
                artifact_name(stem, "slide", page_num + 1, page_num, "png")
            ),
        )?;

        let description = if self.ctx.captioner.is_graph(&slide.image)? {
            self.ctx.captioner.process_graph(&slide.image)?
        } else {
            " ".to_string()
        };

        let notes = if slide.notes.is_empty() {
            String::new()
        } else {
            format!(
                "\n\nThe speaker notes for this slide are: {}",
                slide.notes
            )
        };

        let caption = format!("{}{description}{notes}", slide.text);
        let text = format!("This is a slide with the text: {}{description}", slide.text);
        let metadata =
            DocMetadata::image(name, Some(page_num), Some(image_path), Some(caption));

        Ok(Document::new(
            format!("{stem}-slide{page_num}"),
            text,
            metadata,
        ))
    }
}

impl DocumentLoader for SlideLoader {
    fn supported_extensions(&self) -> &[&str] {
        &["ppt", "pptx"]
    }

    fn name(&self) -> &str {
        "slides"
    }

    fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<Vec<Document>> {
        let deck = match self.reader.open(bytes) {
            Ok(deck) => deck,
            Err(e) => {
                log::error!("error opening or processing {name}: {e}");
                return Ok(Vec::new());
            }
        };

        let slides = match deck.slides() {
            Ok(slides) => slides,
            Err(e) => {
                log::error!("error rendering slides of {name}: {e}");
                return Ok(Vec::new());
            }
        };

        let stem = file_stem(name);
        let mut docs = Vec::new();
        for (page_num, slide) in slides.iter().enumerate() {
            match self.load_slide(slide, name, &stem, page_num) {
                Ok(doc) => docs.push(doc),
                Err(e) => log::warn!("skipping slide {page_num} of {name}: {e}"),
            }
        }

        Ok(docs)
    }
}
