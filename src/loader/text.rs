//! Plain-text loader (`.txt`).

use super::DocumentLoader;
use crate::error::{Error, Result};
use crate::model::{DocMetadata, Document};

/// Loader for plain text files: one text-type document per file.
pub struct TextLoader;

impl TextLoader {
    /// Create a text loader.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentLoader for TextLoader {
    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<Vec<Document>> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Encoding(format!("{name}: {e}")))?
            .to_string();

        let metadata = DocMetadata::plain_text(name);
        Ok(vec![Document::new(name, text, metadata)])
    }
}
