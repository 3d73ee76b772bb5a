//! Page content segmentation.
//!
//! Splits a page into coherent text blocks, tables, and images, associates
//! each visual element with its surrounding caption text, and keeps text
//! claimed by table regions from being double-counted.

mod group;
mod images;
mod locate;
mod options;
mod page;
mod tables;

pub use group::group_text_blocks;
pub use images::ImageExtractor;
pub use locate::text_around;
pub use options::SegmentOptions;
pub use page::PageSegmenter;
pub use tables::TableExtractor;
