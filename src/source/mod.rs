//! External source contracts.
//!
//! The actual page-layout engine (block extraction, table detection,
//! region rendering) and the slide-deck converter live behind these traits.
//! The segmentation core only consumes the shapes defined here, so any
//! backend that can enumerate blocks, images, and ruled-table regions can
//! drive it.

use crate::error::Result;
use crate::model::{BoundingBox, PageBlock, TableData};

/// A table region detected on a page by the source's line-based grid
/// detection (horizontal and vertical ruling lines).
#[derive(Debug, Clone)]
pub struct TableRegion {
    /// Bounding box of the ruled grid
    pub bbox: BoundingBox,
    /// Extracted tabular content
    pub data: TableData,
}

/// An embedded raster image on a page.
///
/// `xref` is the source object reference; 0 denotes the page's own
/// background reference and is never a real embedded image.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Source object reference
    pub xref: u32,
    /// Placement of the image on the page
    pub bbox: BoundingBox,
    /// Raw image bytes as stored in the source
    pub bytes: Vec<u8>,
}

/// One page of an open paged source.
pub trait SourcePage {
    /// Page width in page units.
    fn width(&self) -> f32;

    /// Page height in page units.
    fn height(&self) -> f32;

    /// Layout blocks in reading order, with bounding boxes and kind tags.
    fn text_blocks(&self) -> Vec<PageBlock>;

    /// Embedded raster images with their placement and raw bytes.
    fn images(&self) -> Vec<PageImage>;

    /// Detect ruled-table regions and extract their content.
    fn find_tables(&self) -> Result<Vec<TableRegion>>;

    /// Render a rectangular region of the page to raster bytes (PNG).
    fn render_region(&self, bbox: &BoundingBox) -> Result<Vec<u8>>;
}

/// An open paged source (a parsed PDF).
pub trait PagedSource {
    /// Number of pages.
    fn page_count(&self) -> usize;

    /// Get a page by zero-based index.
    fn page(&self, index: usize) -> Result<Box<dyn SourcePage + '_>>;
}

/// Opens a byte stream as a page collection.
pub trait PageSourceReader: Send + Sync {
    /// Parse the bytes into a paged source.
    ///
    /// Returns [`Error::SourceOpen`](crate::Error::SourceOpen) when the
    /// bytes cannot be parsed as the declared type.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn PagedSource>>;
}

/// One rendered slide of a deck, with its extracted text and speaker notes.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Raster render of the slide (PNG)
    pub image: Vec<u8>,
    /// Text content of the slide's shapes, space-joined
    pub text: String,
    /// Speaker notes, empty when the slide has none
    pub notes: String,
}

/// An open slide deck.
///
/// Backends typically convert the deck to PDF with an external office
/// converter, render one image per page, and read text and notes from the
/// presentation structure.
pub trait SlideSource {
    /// All slides of the deck, in order.
    fn slides(&self) -> Result<Vec<Slide>>;
}

/// Opens a byte stream as a slide deck.
pub trait SlideReader: Send + Sync {
    /// Parse the bytes into a slide deck.
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn SlideSource>>;
}
