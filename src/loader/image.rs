//! Standalone image loader (`.png`/`.jpg`/`.jpeg`).

use super::{DocumentLoader, LoaderContext};
use crate::error::Result;
use crate::model::{DocMetadata, Document};

/// Loader for image files: the whole file is described by the vision
/// service and becomes one image-type document.
pub struct ImageLoader {
    ctx: LoaderContext,
}

impl ImageLoader {
    /// Create an image loader.
    pub fn new(ctx: LoaderContext) -> Self {
        Self { ctx }
    }
}

impl DocumentLoader for ImageLoader {
    fn supported_extensions(&self) -> &[&str] {
        &["png", "jpg", "jpeg"]
    }

    fn name(&self) -> &str {
        "image"
    }

    fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<Vec<Document>> {
        let text = self.ctx.captioner.describe_image(bytes)?;
        let metadata = DocMetadata::image(name, None, None, None);
        Ok(vec![Document::new(name, text, metadata)])
    }
}
