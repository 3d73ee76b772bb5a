//! Data model for document ingestion.
//!
//! Blocks, groups, and extracted regions are page-scoped value objects;
//! only [`Document`] outlives page processing.

mod block;
mod document;
mod geometry;
mod table;

pub use block::{BlockKind, PageBlock, TextGroup};
pub use document::{DocMetadata, Document, DocumentType};
pub use geometry::BoundingBox;
pub use table::TableData;
