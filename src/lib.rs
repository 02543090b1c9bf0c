//! # richsoup
//!
//! Layout-aware web page content extraction for Rust.
//!
//! This library takes the raw, layout-annotated blocks captured from a
//! rendered page (text, images, tables, links, lists with bounding boxes and
//! font metrics) and turns them into an ordered, deduplicated, classified
//! block list that renders to Markdown, plain text or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use richsoup::{process_json, render, ProcessOptions};
//!
//! fn main() -> richsoup::Result<()> {
//!     let json = std::fs::read_to_string("page.json")?;
//!     let doc = process_json(&json, &ProcessOptions::default())?;
//!
//!     let markdown = render::to_markdown(&doc, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Reading order**: blocks are grouped into lines and sorted top-to-bottom,
//!   left-to-right
//! - **Classification**: headings, bold and small print inferred from font
//!   metrics relative to the page
//! - **Deduplication**: repeated text, images and tables are dropped; a later
//!   heading replaces an earlier plain paragraph with the same text
//! - **Post-filters**: language switcher, boilerplate and duplicate links
//! - **Parallel processing**: uses Rayon for batches of pages

pub mod error;
pub mod model;
pub mod processor;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Block, BlockDocument, BoundingBox, Image, Link, List, Paragraph, RawBlock, RawContent,
    RawImage, RawLink, RawList, RawPage, RawTable, RawText, SpanFormat, StyledSpan, Table,
};
pub use processor::{BlockFilter, BlockProcessor, FilterChain, HeadingThresholds, ProcessOptions};
pub use render::{ExtractionStats, JsonFormat, RenderOptions, RenderResult};

use rayon::prelude::*;

/// Process a raw page into a classified block document.
///
/// Runs the block processor and then the standard post-filter chain.
///
/// # Example
///
/// ```
/// use richsoup::{process, BoundingBox, ProcessOptions, RawPage, RawText};
///
/// let bbox = BoundingBox::new(0.0, 100.0, 400.0, 120.0)?;
/// let page = RawPage::new("https://example.com")
///     .with_block(bbox, RawText::new("Hello, world!", 16.0, 400.0));
///
/// let doc = process(&page, &ProcessOptions::default())?;
/// assert_eq!(doc.len(), 1);
/// # Ok::<(), richsoup::Error>(())
/// ```
pub fn process(page: &RawPage, options: &ProcessOptions) -> Result<BlockDocument> {
    RichSoup::new()
        .with_options(options.clone())
        .process(page)
        .map(|result| result.document)
}

/// Parse a raw page from JSON and process it.
pub fn process_json(json: &str, options: &ProcessOptions) -> Result<BlockDocument> {
    let page = RawPage::from_json(json)?;
    process(&page, options)
}

/// Process independent pages in parallel.
///
/// Each page gets its own processing run, so results match processing the
/// pages one at a time. Output order follows input order.
pub fn process_batch(pages: &[RawPage], options: &ProcessOptions) -> Result<Vec<BlockDocument>> {
    let processor = BlockProcessor::new(options.clone())?;
    let filters = FilterChain::standard();

    let docs = pages
        .par_iter()
        .map(|page| {
            let mut doc = processor.process(page);
            filters.apply(&mut doc.blocks);
            doc
        })
        .collect();

    Ok(docs)
}

/// Process a raw page and render it to Markdown with default render options.
///
/// # Example
///
/// ```
/// use richsoup::{to_markdown, ProcessOptions, RawPage};
///
/// let markdown = to_markdown(&RawPage::new("about:blank"), &ProcessOptions::default())?;
/// assert_eq!(markdown, "");
/// # Ok::<(), richsoup::Error>(())
/// ```
pub fn to_markdown(page: &RawPage, options: &ProcessOptions) -> Result<String> {
    let doc = process(page, options)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Builder for processing and rendering pages.
///
/// # Example
///
/// ```no_run
/// use richsoup::{ProcessOptions, RawPage, RichSoup};
///
/// let page = RawPage::from_json(&std::fs::read_to_string("page.json")?)?;
/// let markdown = RichSoup::new()
///     .with_options(ProcessOptions::default().with_y_tolerance(8.0))
///     .with_max_heading(3)
///     .process(&page)?
///     .to_markdown()?;
/// # Ok::<(), richsoup::Error>(())
/// ```
pub struct RichSoup {
    options: ProcessOptions,
    filters: FilterChain,
    render_options: RenderOptions,
}

impl RichSoup {
    /// Create a new builder with default options and the standard filters.
    pub fn new() -> Self {
        Self {
            options: ProcessOptions::default(),
            filters: FilterChain::standard(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set processing options.
    pub fn with_options(mut self, options: ProcessOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the post-filter chain.
    pub fn with_filters(mut self, filters: FilterChain) -> Self {
        self.filters = filters;
        self
    }

    /// Skip all post-filters.
    pub fn without_filters(self) -> Self {
        self.with_filters(FilterChain::new())
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Cap heading depth in rendered output.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Process a raw page and return a result wrapper.
    pub fn process(self, page: &RawPage) -> Result<RichSoupResult> {
        let processor = BlockProcessor::new(self.options)?;
        let mut document = processor.process(page);
        self.filters.apply(&mut document.blocks);
        Ok(RichSoupResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a raw page from JSON and process it.
    pub fn process_json(self, json: &str) -> Result<RichSoupResult> {
        let page = RawPage::from_json(json)?;
        self.process(&page)
    }
}

impl Default for RichSoup {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of processing a page.
pub struct RichSoupResult {
    /// The processed document
    pub document: BlockDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl RichSoupResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with extraction statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &BlockDocument {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x0: f32, y0: f32, x1: f32, y1: f32) -> BoundingBox {
        BoundingBox::new(x0, y0, x1, y1).unwrap()
    }

    fn sample_page() -> RawPage {
        RawPage::new("https://example.com/post")
            .with_block(
                bbox(0.0, 50.0, 600.0, 80.0),
                RawText::new("Welcome", 32.0, 700.0).with_heading(1),
            )
            .with_block(
                bbox(0.0, 100.0, 600.0, 140.0),
                RawText::new("Body text of the article.", 16.0, 400.0),
            )
            .with_block(
                bbox(0.0, 200.0, 100.0, 220.0),
                RawLink::new("https://example.com/privacy", "Privacy Policy"),
            )
            .with_block(
                bbox(0.0, 300.0, 600.0, 320.0),
                RawText::new("Closing words here.", 16.0, 400.0),
            )
    }

    #[test]
    fn test_builder_defaults() {
        let builder = RichSoup::default();
        assert_eq!(builder.filters.names().len(), 3);
        assert_eq!(builder.render_options.max_heading_level, 6);
    }

    #[test]
    fn test_process_applies_filters() {
        let doc = process(&sample_page(), &ProcessOptions::default()).unwrap();
        assert!(doc.blocks.iter().all(|b| b.as_link().is_none()));
        assert_eq!(doc.source_url, "https://example.com/post");
    }

    #[test]
    fn test_without_filters_keeps_links() {
        let result = RichSoup::new()
            .without_filters()
            .process(&sample_page())
            .unwrap();
        assert!(result.document().blocks.iter().any(|b| b.as_link().is_some()));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = ProcessOptions::default().with_bold_threshold(1.5);
        assert!(matches!(
            process(&sample_page(), &options),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_process_json_malformed() {
        let result = process_json("{ not json", &ProcessOptions::default());
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_batch_matches_sequential() {
        let pages = vec![sample_page(), RawPage::new("about:blank"), sample_page()];
        let options = ProcessOptions::default();

        let batch = process_batch(&pages, &options).unwrap();
        let sequential: Vec<_> = pages
            .iter()
            .map(|page| process(page, &options).unwrap())
            .collect();

        assert_eq!(batch, sequential);
        assert!(batch[1].is_empty());
    }

    #[test]
    fn test_result_outputs() {
        let result = RichSoup::new()
            .with_max_heading(2)
            .process(&sample_page())
            .unwrap();

        let markdown = result.to_markdown().unwrap();
        assert!(markdown.starts_with("# Welcome"));
        assert!(!markdown.contains("Privacy"));

        let text = result.to_text();
        assert!(text.contains("Body text of the article."));

        let json = result.to_json(JsonFormat::Compact).unwrap();
        assert!(json.contains("\"heading\":1"));

        let stats = result.to_markdown_with_stats().unwrap().stats;
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 2);
    }
}
