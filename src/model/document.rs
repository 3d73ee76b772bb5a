//! The universal output unit handed to the embedding/indexing stage.

use super::BoundingBox;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Kind of content a document was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// Plain or grouped body text
    Text,
    /// A detected table region
    Table,
    /// An embedded image, standalone image file, or rendered slide
    Image,
}

/// A retrieval-ready document: text content plus provenance metadata.
///
/// Documents are the only entities that outlive page processing; everything
/// else (blocks, groups, extracted regions) is page-scoped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, derived from filename, page number, and an
    /// element counter
    pub id: String,

    /// Text content to embed
    pub text: String,

    /// Provenance metadata
    pub metadata: DocMetadata,
}

impl Document {
    /// Create a new document. The id doubles as the metadata source field.
    pub fn new(id: impl Into<String>, text: impl Into<String>, metadata: DocMetadata) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata,
        }
    }
}

/// Metadata attached to every [`Document`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocMetadata {
    /// Source identifier (filename stem plus page/element suffix)
    pub source: String,

    /// Content kind
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Zero-based page number within the source, if paged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<usize>,

    /// Path of the image snapshot side-artifact, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<PathBuf>,

    /// Path of the structured-data export side-artifact, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataframe_path: Option<PathBuf>,

    /// Synthesized caption for tables and images
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Position on the page, for text documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl DocMetadata {
    fn bare(source: impl Into<String>, doc_type: DocumentType) -> Self {
        Self {
            source: source.into(),
            doc_type,
            page_num: None,
            image_path: None,
            dataframe_path: None,
            caption: None,
            bbox: None,
        }
    }

    /// Metadata for a text document extracted from a page.
    pub fn text(source: impl Into<String>, page_num: usize, bbox: BoundingBox) -> Self {
        Self {
            page_num: Some(page_num),
            bbox: Some(bbox),
            ..Self::bare(source, DocumentType::Text)
        }
    }

    /// Metadata for a whole-file text document (no page structure).
    pub fn plain_text(source: impl Into<String>) -> Self {
        Self::bare(source, DocumentType::Text)
    }

    /// Metadata for a table document.
    pub fn table(
        source: impl Into<String>,
        page_num: usize,
        dataframe_path: PathBuf,
        image_path: PathBuf,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            page_num: Some(page_num),
            dataframe_path: Some(dataframe_path),
            image_path: Some(image_path),
            caption: Some(caption.into()),
            ..Self::bare(source, DocumentType::Table)
        }
    }

    /// Metadata for an image document.
    pub fn image(
        source: impl Into<String>,
        page_num: Option<usize>,
        image_path: Option<PathBuf>,
        caption: Option<String>,
    ) -> Self {
        Self {
            page_num,
            image_path,
            caption,
            ..Self::bare(source, DocumentType::Image)
        }
    }
}
