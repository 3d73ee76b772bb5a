//! Text-block grouping.
//!
//! Merges adjacent raw text blocks into caption-sized groups bounded by a
//! character budget. Single pass in reading order; a group boundary never
//! splits inside a block.

use crate::model::{PageBlock, TextGroup};

/// Group text blocks under a character-count budget.
///
/// Non-text blocks are skipped. Blocks accumulate into the current group
/// while the running character count stays within `threshold`; a block that
/// would overflow closes the group and starts the next one. A single block
/// longer than the budget still forms its own group.
pub fn group_text_blocks(blocks: &[PageBlock], threshold: usize) -> Vec<TextGroup> {
    let mut groups = Vec::new();
    let mut current: Vec<PageBlock> = Vec::new();
    let mut char_count = 0usize;

    for block in blocks {
        if !block.is_text() {
            continue;
        }

        let block_chars = block.text.chars().count();
        if char_count + block_chars <= threshold {
            current.push(block.clone());
            char_count += block_chars;
        } else {
            if let Some(group) = TextGroup::from_blocks(&current) {
                groups.push(group);
            }
            current = vec![block.clone()];
            char_count = block_chars;
        }
    }

    if let Some(group) = TextGroup::from_blocks(&current) {
        groups.push(group);
    }

    groups
}
