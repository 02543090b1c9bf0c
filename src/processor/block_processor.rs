//! Turns a raw page into an ordered, deduplicated list of classified blocks.

use super::classify::{classify_text, normalize_text};
use super::reading_order::reading_order;
use super::{DuplicateTracker, PageMetrics, ProcessOptions};
use crate::error::Result;
use crate::model::{
    Block, BlockDocument, BoundingBox, Image, Link, List, Paragraph, RawBlock, RawContent,
    RawPage, RawText, Table,
};

/// Block processor for one configuration.
///
/// A processor holds validated options only; every call to
/// [`BlockProcessor::process`] uses its own tracker and output list, so one
/// processor can serve many pages, including from several threads.
#[derive(Debug, Clone)]
pub struct BlockProcessor {
    options: ProcessOptions,
}

/// Vertical band of the page whose blocks are kept.
#[derive(Debug, Clone, Copy)]
struct ContentBand {
    top: f32,
    bottom: f32,
}

impl ContentBand {
    fn for_blocks(blocks: &[RawBlock], options: &ProcessOptions) -> Self {
        let max_y = blocks.iter().map(|b| b.bbox.y1()).fold(0.0_f32, f32::max);
        Self {
            top: max_y * options.header_threshold,
            bottom: max_y * (1.0 - options.footer_threshold),
        }
    }

    fn contains(&self, y: f32) -> bool {
        y >= self.top && y <= self.bottom
    }
}

impl BlockProcessor {
    /// Create a processor, rejecting out-of-range options.
    pub fn new(options: ProcessOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Classify and deduplicate a page's raw blocks.
    pub fn process(&self, page: &RawPage) -> BlockDocument {
        let metrics = PageMetrics::compute(&page.blocks);
        self.process_with_metrics(page, &metrics)
    }

    /// Same as [`BlockProcessor::process`] with precomputed metrics.
    pub fn process_with_metrics(&self, page: &RawPage, metrics: &PageMetrics) -> BlockDocument {
        let ordered = reading_order(&page.blocks, self.options.reading_order_y_tolerance);
        let band = ContentBand::for_blocks(&ordered, &self.options);

        let mut run = Run {
            options: &self.options,
            metrics,
            tracker: DuplicateTracker::new(),
            blocks: Vec::new(),
        };

        for raw in &ordered {
            if !band.contains(raw.top()) {
                log::debug!("Skipping block in header/footer band at y={}", raw.top());
                continue;
            }
            run.push_raw(raw);
        }

        log::debug!(
            "Processed {}: {} raw blocks -> {} blocks",
            page.source_url,
            page.blocks.len(),
            run.blocks.len()
        );
        BlockDocument::with_blocks(page.source_url.clone(), run.blocks)
    }
}

/// State owned by a single processing run.
struct Run<'a> {
    options: &'a ProcessOptions,
    metrics: &'a PageMetrics,
    tracker: DuplicateTracker,
    blocks: Vec<Block>,
}

impl Run<'_> {
    fn push_raw(&mut self, raw: &RawBlock) {
        let bbox = raw.bbox;
        match &raw.content {
            RawContent::Text(text) => self.push_text(bbox, text),
            RawContent::Image(image) => {
                if !self.tracker.record_image(&image.src) {
                    log::debug!("Dropping duplicate image: {}", image.src);
                    return;
                }
                self.blocks.push(Block::Image(Image {
                    bbox,
                    src: image.src.clone(),
                    alt: image.alt.clone(),
                    dimensions: bbox.pixel_size(),
                }));
            }
            RawContent::Table(table) => {
                if !self.tracker.record_table(&table.rows) {
                    log::debug!("Dropping duplicate table with {} rows", table.rows.len());
                    return;
                }
                self.blocks.push(Block::Table(Table {
                    bbox,
                    rows: table.rows.clone(),
                }));
            }
            RawContent::Link(link) => self.blocks.push(Block::Link(Link {
                bbox,
                href: link.href.clone(),
                spans: link.spans.clone(),
            })),
            RawContent::List(list) => self.blocks.push(Block::List(List {
                bbox,
                items: list.items.clone(),
                ordered: list.ordered,
                level: list.level,
            })),
            RawContent::Unknown => {
                log::warn!("Unknown block type encountered at {:?}, skipping", bbox);
            }
        }
    }

    fn push_text(&mut self, bbox: BoundingBox, text: &RawText) {
        if bbox.width() < self.options.min_text_width {
            return;
        }

        for paragraph in classify_text(bbox, text, self.metrics, self.options) {
            self.push_paragraph(paragraph);
        }
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        let text = paragraph.plain_text();
        if text.trim().is_empty() || self.options.is_boilerplate(&text) {
            return;
        }

        let normalized = normalize_text(&text);
        let is_heading = paragraph.is_heading();

        let duplicate = self.tracker.is_duplicate(&normalized)
            || self.tracker.is_substring_duplicate(&normalized);
        if duplicate {
            if !is_heading {
                log::debug!("Dropping duplicate paragraph: {:.40}", normalized);
                return;
            }
            self.tracker.supersede(&normalized, &mut self.blocks);
        }

        self.tracker.add(normalized, self.blocks.len());
        self.blocks.push(Block::Paragraph(paragraph));
    }
}
