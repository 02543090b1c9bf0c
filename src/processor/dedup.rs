//! Duplicate tracking for one processing run.

use std::collections::{HashMap, HashSet};

use md5::{Digest, Md5};

use super::classify::normalize_text;
use crate::model::Block;

const CELL_DELIMITER: &str = "\u{1f}";
const ROW_DELIMITER: &str = "\u{1e}";

/// Seen paragraph texts, image sources and table contents.
///
/// Paragraph texts map to their index in the in-progress output list. Any
/// deletion from that list must go through [`DuplicateTracker::remove_block`]
/// so recorded indices stay aligned.
#[derive(Debug, Default)]
pub struct DuplicateTracker {
    seen_texts: HashSet<String>,
    text_index: HashMap<String, usize>,
    seen_images: HashSet<String>,
    seen_tables: HashSet<String>,
}

impl DuplicateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact match against a previously seen normalized text.
    pub fn is_duplicate(&self, normalized: &str) -> bool {
        self.seen_texts.contains(normalized)
    }

    /// Containment in either direction against every seen text.
    pub fn is_substring_duplicate(&self, normalized: &str) -> bool {
        self.seen_texts
            .iter()
            .any(|seen| seen.contains(normalized) || normalized.contains(seen.as_str()))
    }

    /// Record a normalized text and the output index of its block.
    pub fn add(&mut self, normalized: impl Into<String>, index: usize) {
        let normalized = normalized.into();
        self.seen_texts.insert(normalized.clone());
        self.text_index.insert(normalized, index);
    }

    /// Output index recorded for a normalized text, if still valid.
    pub fn index_of(&self, normalized: &str) -> Option<usize> {
        self.text_index.get(normalized).copied()
    }

    /// Account for the deletion of output index `index`: the mapping that
    /// pointed at it is dropped and every later index shifts down by one.
    pub fn remove_at_index(&mut self, index: usize) {
        self.text_index.retain(|_, recorded| *recorded != index);
        for recorded in self.text_index.values_mut() {
            if *recorded > index {
                *recorded -= 1;
            }
        }
    }

    /// Delete `blocks[index]` and shift recorded indices in one step.
    pub fn remove_block(&mut self, blocks: &mut Vec<Block>, index: usize) -> Block {
        let removed = blocks.remove(index);
        self.remove_at_index(index);
        removed
    }

    /// Let a heading replace an earlier body paragraph with the same
    /// normalized text. Returns whether a paragraph was removed.
    pub fn supersede(&mut self, normalized: &str, blocks: &mut Vec<Block>) -> bool {
        let Some(index) = self.index_of(normalized) else {
            return false;
        };
        if !blocks.get(index).is_some_and(Block::is_body_paragraph) {
            return false;
        }
        self.remove_block(blocks, index);
        log::debug!("Heading supersedes paragraph at index {}: {:.40}", index, normalized);
        true
    }

    /// Record an image source. Returns `true` the first time it is seen.
    pub fn record_image(&mut self, src: &str) -> bool {
        self.seen_images.insert(src.to_string())
    }

    /// Record a table's content. Returns `true` the first time it is seen.
    pub fn record_table(&mut self, rows: &[Vec<String>]) -> bool {
        self.seen_tables.insert(table_key(rows))
    }
}

/// Digest of a table's normalized cell content.
pub fn table_key(rows: &[Vec<String>]) -> String {
    let canonical = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| normalize_text(cell))
                .collect::<Vec<_>>()
                .join(CELL_DELIMITER)
        })
        .collect::<Vec<_>>()
        .join(ROW_DELIMITER);

    let mut hasher = Md5::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}
