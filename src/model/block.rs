//! Raw layout blocks and caption-sized text groups.

use super::BoundingBox;
use serde::{Deserialize, Serialize};

/// Kind tag of a raw layout block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A text block
    Text,
    /// A non-text block (embedded image or drawing)
    Image,
}

/// A raw layout block produced by a paged source.
///
/// Blocks are page-scoped value objects: they are created by the source's
/// layout extraction, consumed during one page's segmentation pass, and
/// discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct PageBlock {
    /// Position of the block on the page
    pub bbox: BoundingBox,
    /// Raw text content (empty for non-text blocks)
    pub text: String,
    /// Block kind tag
    pub kind: BlockKind,
}

impl PageBlock {
    /// Create a text block.
    pub fn text(bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
            kind: BlockKind::Text,
        }
    }

    /// Create a non-text block.
    pub fn image(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            text: String::new(),
            kind: BlockKind::Image,
        }
    }

    /// Check if the block is a text block.
    pub fn is_text(&self) -> bool {
        self.kind == BlockKind::Text
    }
}

/// An ordered run of text blocks merged up to a character budget.
///
/// The first block of the run is the heading; the body is every member
/// block's text (heading included) joined with newlines.
#[derive(Debug, Clone)]
pub struct TextGroup {
    /// The first block of the group, used for position tests
    pub heading: PageBlock,
    /// All member block texts joined with `\n`
    pub body: String,
    /// Running character count of the member texts
    pub char_count: usize,
}

impl TextGroup {
    /// Create a group from its member blocks.
    ///
    /// Returns `None` for an empty slice; group boundaries never produce
    /// empty groups.
    pub fn from_blocks(blocks: &[PageBlock]) -> Option<Self> {
        let heading = blocks.first()?.clone();
        let body = blocks
            .iter()
            .map(|b| b.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let char_count = blocks.iter().map(|b| b.text.chars().count()).sum();

        Some(Self {
            heading,
            body,
            char_count,
        })
    }
}
