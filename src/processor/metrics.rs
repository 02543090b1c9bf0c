//! Distribution summaries and per-page font metrics.

use serde::{Deserialize, Serialize};

use crate::model::RawBlock;

/// Summary of a numeric sample. All fields are zero for an empty sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f32,
    pub median: f32,
    pub min: f32,
    pub max: f32,
    pub count: usize,
}

impl Statistics {
    /// Summarize a sample.
    pub fn from_values(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f32::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Self {
            mean: sorted.iter().sum::<f32>() / count as f32,
            median,
            min: sorted[0],
            max: sorted[count - 1],
            count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Font statistics over every text block of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    pub font_size: Statistics,
    pub font_weight: Statistics,
}

impl PageMetrics {
    /// Collect font size and weight from text blocks; other variants are ignored.
    pub fn compute(blocks: &[RawBlock]) -> Self {
        let (sizes, weights): (Vec<f32>, Vec<f32>) = blocks
            .iter()
            .filter_map(RawBlock::as_text)
            .map(|text| (text.font_size, text.font_weight))
            .unzip();

        let metrics = Self {
            font_size: Statistics::from_values(&sizes),
            font_weight: Statistics::from_values(&weights),
        };
        log::debug!(
            "Page metrics: {} text blocks, mean size {:.2}, mean weight {:.1}",
            metrics.font_size.count,
            metrics.font_size.mean,
            metrics.font_weight.mean
        );
        metrics
    }
}
