//! Markdown rendering for block documents.

use crate::error::{Error, Result};
use crate::model::span::needs_separator;
use crate::model::{
    Block, BlockDocument, Image, Link, List, Paragraph, SpanFormat, StyledSpan, Table,
    BLOCKQUOTE_MARKER,
};

use super::{ExtractionStats, RenderOptions, RenderResult};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &BlockDocument, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(
    doc: &BlockDocument,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &BlockDocument) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, doc: &BlockDocument) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        self.stats.count_text(&content);

        Ok(RenderResult::new(content, doc.source_url.clone(), self.stats))
    }

    fn render_internal(&mut self, doc: &BlockDocument) -> Result<String> {
        if !(1..=6).contains(&self.options.max_heading_level) {
            return Err(Error::Render(format!(
                "max_heading_level must be between 1 and 6, got {}",
                self.options.max_heading_level
            )));
        }

        // Empty renders are skipped so no stray separators appear
        let parts: Vec<String> = doc
            .blocks
            .iter()
            .map(|block| self.render_block(block))
            .filter(|part| !part.is_empty())
            .collect();

        log::debug!(
            "Rendered {} of {} blocks to Markdown",
            parts.len(),
            doc.blocks.len()
        );

        Ok(parts.join("\n\n"))
    }

    fn render_block(&mut self, block: &Block) -> String {
        match block {
            Block::Paragraph(p) => self.render_paragraph(p),
            Block::Table(t) => {
                if self.options.collect_stats {
                    self.stats.table_count += 1;
                }
                render_table_markdown(t)
            }
            Block::Image(i) => {
                if self.options.collect_stats {
                    self.stats.image_count += 1;
                }
                self.render_image(i)
            }
            Block::Link(l) => {
                if self.options.collect_stats {
                    self.stats.link_count += 1;
                }
                self.render_link(l)
            }
            Block::List(l) => {
                if self.options.collect_stats {
                    self.stats.list_count += 1;
                    self.stats.list_item_count += l.items.len() as u32;
                }
                self.render_list(l)
            }
        }
    }

    fn render_paragraph(&mut self, para: &Paragraph) -> String {
        if para.is_code {
            if self.options.collect_stats {
                self.stats.code_block_count += 1;
            }
            return format!("```\n{}\n```", para.plain_text());
        }

        let content = self.render_spans(&para.spans);
        if content.trim().is_empty() {
            return String::new();
        }

        if para.is_heading() {
            if self.options.collect_stats {
                self.stats.heading_count += 1;
            }
            let level = para.heading.min(self.options.max_heading_level);
            return format!("{} {}", "#".repeat(level as usize), content);
        }

        if self.options.collect_stats {
            self.stats.paragraph_count += 1;
        }

        // Span-level bold already carries the emphasis
        let span_bold = para.spans.iter().any(|s| s.has_format(&SpanFormat::Bold));
        if !para.bold || span_bold {
            return content;
        }
        // A quote marker stays outside the emphasis
        match content.strip_prefix(BLOCKQUOTE_MARKER) {
            Some(quoted) => format!("{}**{}**", BLOCKQUOTE_MARKER, quoted.trim()),
            None => format!("**{}**", content.trim()),
        }
    }

    fn render_spans(&self, spans: &[StyledSpan]) -> String {
        let mut output = String::new();
        let mut previous: Option<&str> = None;

        for span in spans.iter().filter(|s| !s.is_empty()) {
            if let Some(prev) = previous {
                if needs_separator(prev, &span.text) {
                    output.push(' ');
                }
            }
            output.push_str(&self.render_span(span));
            previous = Some(span.text.as_str());
        }

        output
    }

    fn render_span(&self, span: &StyledSpan) -> String {
        let is_code = span.has_format(&SpanFormat::Code);
        let text = if self.options.escape_special_chars && !is_code {
            escape_markdown(&span.text)
        } else {
            span.text.clone()
        };

        for format in &span.formats {
            if let SpanFormat::Other(name) = format {
                log::warn!("Unknown span format '{}', rendering as plain text", name);
            }
        }

        let core = text.trim();
        if core.is_empty() {
            return text;
        }

        // Markers hug the text; edge whitespace stays outside
        let start = text.len() - text.trim_start().len();
        let end = start + core.len();

        let mut styled = core.to_string();
        if is_code {
            styled = format!("`{}`", styled);
        }
        if span.has_format(&SpanFormat::Italic) {
            styled = format!("*{}*", styled);
        }
        if span.has_format(&SpanFormat::Bold) {
            styled = format!("**{}**", styled);
        }

        format!("{}{}{}", &text[..start], styled, &text[end..])
    }

    fn render_image(&self, image: &Image) -> String {
        let alt = image
            .alt
            .as_deref()
            .map(str::trim)
            .filter(|alt| !alt.is_empty())
            .unwrap_or(self.options.image_placeholder_alt.as_str());
        let (width, height) = image.dimensions;
        format!("![{}]({}) {}x{}", alt, image.src, width, height)
    }

    fn render_link(&self, link: &Link) -> String {
        format!("[{}]({})", self.render_spans(&link.spans), link.href)
    }

    fn render_list(&self, list: &List) -> String {
        let indent = "  ".repeat(list.level as usize);

        list.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if list.ordered {
                    format!("{}.", i + 1)
                } else {
                    self.options.list_marker.to_string()
                };
                format!("{}{} {}", indent, marker, self.render_spans(item))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn render_table_markdown(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let mut output = String::new();
    for (i, row) in table.padded_rows().iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push('|');
        for cell in row {
            let content = cell.replace('\n', " ").replace('|', "\\|");
            output.push_str(&format!(" {} |", content.trim()));
        }

        // Separator after header row
        if i == 0 {
            output.push_str("\n|");
            for _ in row {
                output.push_str(" --- |");
            }
        }
    }

    output
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as Markdown syntax.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
