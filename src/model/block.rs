//! Classified block types.

use serde::{Deserialize, Serialize};

use super::span::join_span_text;
use super::{BoundingBox, StyledSpan};

/// Leading span of a paragraph taken from a blockquote element.
pub const BLOCKQUOTE_MARKER: &str = "> ";

/// A block after classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph, heading or code block
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// An image reference
    Image(Image),

    /// A standalone hyperlink
    Link(Link),

    /// A list
    List(List),
}

impl Block {
    /// Position of the source element on the page.
    pub fn bbox(&self) -> BoundingBox {
        match self {
            Block::Paragraph(p) => p.bbox,
            Block::Table(t) => t.bbox,
            Block::Image(i) => i.bbox,
            Block::Link(l) => l.bbox,
            Block::List(l) => l.bbox,
        }
    }

    /// Get the paragraph payload, if any.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the link payload, if any.
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Block::Link(l) => Some(l),
            _ => None,
        }
    }

    /// Check if this block is a paragraph with no heading level.
    pub fn is_body_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(p) if p.heading == 0)
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::Image(i) => i.alt.clone().unwrap_or_default(),
            Block::Link(l) => l.text(),
            Block::List(l) => l
                .items
                .iter()
                .map(|item| join_span_text(item))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// A paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub bbox: BoundingBox,

    /// Styled runs of the paragraph
    pub spans: Vec<StyledSpan>,

    /// Heading level (0 = body text, 1-6 = h1-h6)
    pub heading: u8,

    /// Paragraph-level bold, inferred from font weight
    #[serde(default)]
    pub bold: bool,

    /// Preformatted code block
    #[serde(default)]
    pub is_code: bool,
}

impl Paragraph {
    /// Create a body paragraph with plain text.
    pub fn with_text(bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            bbox,
            spans: vec![StyledSpan::plain(text)],
            heading: 0,
            bold: false,
            is_code: false,
        }
    }

    /// Create a heading paragraph.
    pub fn heading(bbox: BoundingBox, text: impl Into<String>, level: u8) -> Self {
        Self {
            heading: level,
            ..Self::with_text(bbox, text)
        }
    }

    /// Create a code block.
    pub fn code(bbox: BoundingBox, text: impl Into<String>) -> Self {
        Self {
            is_code: true,
            ..Self::with_text(bbox, text)
        }
    }

    pub fn plain_text(&self) -> String {
        join_span_text(&self.spans)
    }

    pub fn is_heading(&self) -> bool {
        self.heading > 0
    }
}

/// A table of cell strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub bbox: BoundingBox,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Widest row length.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.column_count() == 0
    }

    /// Rows padded with empty cells to the widest row.
    pub fn padded_rows(&self) -> Vec<Vec<String>> {
        let width = self.column_count();
        self.rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, String::new());
                row
            })
            .collect()
    }

    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An image reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub bbox: BoundingBox,
    pub src: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    /// Rendered size in whole pixels (width, height)
    pub dimensions: (u32, u32),
}

/// A standalone hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub bbox: BoundingBox,
    pub href: String,
    pub spans: Vec<StyledSpan>,
}

impl Link {
    /// Rendered link text without markup.
    pub fn text(&self) -> String {
        join_span_text(&self.spans)
    }
}

/// A list of styled items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub bbox: BoundingBox,
    pub items: Vec<Vec<StyledSpan>>,
    pub ordered: bool,

    /// Nesting level (0 = top level)
    pub level: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 100.0, 20.0).unwrap()
    }

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::with_text(bbox(), "Hello");
        p.spans.push(StyledSpan::bold("world"));
        p.spans.push(StyledSpan::plain("!"));
        assert_eq!(p.plain_text(), "Hello world!");
        assert!(!p.is_heading());
    }

    #[test]
    fn test_table_padding() {
        let table = Table {
            bbox: bbox(),
            rows: vec![
                vec!["A".into(), "B".into()],
                vec!["1".into(), "2".into()],
                vec!["3".into()],
            ],
        };
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.padded_rows()[2], vec!["3".to_string(), String::new()]);
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::Paragraph(Paragraph::heading(bbox(), "Title", 2));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "paragraph");
        assert_eq!(json["heading"], 2);
        assert_eq!(json["bbox"][2], 100.0);
    }
}
