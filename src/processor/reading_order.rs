//! Reading-order reconstruction.
//!
//! Blocks are sorted top-to-bottom, then chained into lines: a block joins the
//! current line while its top edge is within `y_tolerance` of the previous
//! block's top edge. Each finished line is emitted left-to-right.
//!
//! The tolerance is compared against the immediately preceding block, not the
//! first block of the line, so a tall run of closely spaced blocks can chain
//! into a single line.

use crate::model::RawBlock;

/// Reorder blocks into reading order. The output holds exactly the input blocks.
pub fn reading_order(blocks: &[RawBlock], y_tolerance: f32) -> Vec<RawBlock> {
    let mut sorted = blocks.to_vec();
    sorted.sort_by(|a, b| {
        a.top()
            .total_cmp(&b.top())
            .then_with(|| a.left().total_cmp(&b.left()))
    });

    let mut ordered: Vec<RawBlock> = Vec::with_capacity(sorted.len());
    let mut current_line: Vec<RawBlock> = Vec::new();
    let mut last_y: Option<f32> = None;
    let mut line_count = 0usize;

    for block in sorted {
        let y = block.top();
        if let Some(previous) = last_y {
            if (y - previous).abs() > y_tolerance {
                flush_line(&mut ordered, std::mem::take(&mut current_line));
                line_count += 1;
            }
        }
        current_line.push(block);
        last_y = Some(y);
    }

    // Don't forget the last line
    if !current_line.is_empty() {
        flush_line(&mut ordered, current_line);
        line_count += 1;
    }

    log::debug!(
        "Reading order: {} blocks grouped into {} lines",
        ordered.len(),
        line_count
    );
    ordered
}

fn flush_line(ordered: &mut Vec<RawBlock>, mut line: Vec<RawBlock>) {
    line.sort_by(|a, b| a.left().total_cmp(&b.left()));
    ordered.extend(line);
}
