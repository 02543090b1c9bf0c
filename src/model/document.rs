//! Document-level types.

use serde::{Deserialize, Serialize};

use super::Block;

/// The classified, deduplicated blocks of one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockDocument {
    /// The page the blocks came from
    pub source_url: String,

    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl BlockDocument {
    /// Create a new empty document.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            blocks: Vec::new(),
        }
    }

    /// Create a document from already classified blocks.
    pub fn with_blocks(source_url: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            source_url: source_url.into(),
            blocks,
        }
    }

    /// Add a block to the document.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
