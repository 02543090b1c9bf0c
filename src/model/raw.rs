//! Raw, layout-annotated blocks as captured from a rendered page.
//!
//! These types form the input contract of the processor. They are produced by
//! an acquisition step outside this crate (typically a headless browser) and
//! are consumed read-only.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, StyledSpan};
use crate::error::Result;

/// All raw blocks captured from one page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPage {
    /// The page the blocks came from
    #[serde(alias = "url")]
    pub source_url: String,

    /// Blocks in acquisition order
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
}

impl RawPage {
    /// Create an empty page.
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            blocks: Vec::new(),
        }
    }

    /// Parse a page from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Add a block to the page.
    pub fn push(&mut self, bbox: BoundingBox, content: impl Into<RawContent>) {
        self.blocks.push(RawBlock::new(bbox, content));
    }

    /// Builder form of [`RawPage::push`].
    pub fn with_block(mut self, bbox: BoundingBox, content: impl Into<RawContent>) -> Self {
        self.push(bbox, content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A raw block: a bounding box plus variant content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBlock {
    /// Position on the page
    pub bbox: BoundingBox,

    /// Variant payload
    #[serde(flatten)]
    pub content: RawContent,
}

impl RawBlock {
    pub fn new(bbox: BoundingBox, content: impl Into<RawContent>) -> Self {
        Self {
            bbox,
            content: content.into(),
        }
    }

    /// Top edge, the primary reading-order key.
    pub fn top(&self) -> f32 {
        self.bbox.y0()
    }

    /// Left edge, the secondary reading-order key.
    pub fn left(&self) -> f32 {
        self.bbox.x0()
    }

    /// Text payload, if this is a text block.
    pub fn as_text(&self) -> Option<&RawText> {
        match &self.content {
            RawContent::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Variant payload of a [`RawBlock`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RawContent {
    /// Text-bearing element
    Text(RawText),

    /// Image element
    Image(RawImage),

    /// Table element
    Table(RawTable),

    /// Hyperlink element
    Link(RawLink),

    /// List element
    List(RawList),

    /// A block type this crate does not know; skipped during processing
    #[serde(other)]
    Unknown,
}

/// A text-bearing element with font metrics and semantic hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawText {
    /// Text content, possibly containing blank-line paragraph breaks
    pub text: String,

    /// Styled runs making up the text, when the acquisition step provides them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<StyledSpan>,

    /// Computed font size in pixels
    #[serde(default)]
    pub font_size: f32,

    /// Computed numeric font weight
    #[serde(default)]
    pub font_weight: f32,

    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Semantic heading level (0 = none, 1-6 = h1-h6)
    #[serde(default)]
    pub heading_level: u8,

    /// Preformatted / code element
    #[serde(default)]
    pub is_code: bool,

    /// Blockquote element
    #[serde(default)]
    pub is_blockquote: bool,
}

impl RawText {
    /// Create a plain text element with the given font metrics.
    pub fn new(text: impl Into<String>, font_size: f32, font_weight: f32) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
            font_size,
            font_weight,
            font_family: None,
            heading_level: 0,
            is_code: false,
            is_blockquote: false,
        }
    }

    /// Set the semantic heading level.
    pub fn with_heading(mut self, level: u8) -> Self {
        self.heading_level = level;
        self
    }

    /// Set the styled runs.
    pub fn with_spans(mut self, spans: Vec<StyledSpan>) -> Self {
        self.spans = spans;
        self
    }

    /// Mark as a code element.
    pub fn code(mut self) -> Self {
        self.is_code = true;
        self
    }

    /// Mark as a blockquote element.
    pub fn blockquote(mut self) -> Self {
        self.is_blockquote = true;
        self
    }
}

/// An image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    /// Image source (URL or data URI)
    pub src: String,

    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl RawImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// A table element as rows of cell strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a table from rows of cell values.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// A hyperlink element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLink {
    pub href: String,
    pub spans: Vec<StyledSpan>,
}

impl RawLink {
    /// Create a link with a single plain span.
    pub fn new(href: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            spans: vec![StyledSpan::plain(text)],
        }
    }
}

/// A list element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawList {
    /// Items, each a sequence of styled runs
    #[serde(default)]
    pub items: Vec<Vec<StyledSpan>>,

    /// Numbered list
    #[serde(default)]
    pub ordered: bool,

    /// Nesting level (0 = top level)
    #[serde(default)]
    pub level: u8,
}

impl RawList {
    /// Create a list of plain-text items.
    pub fn from_items<S: Into<String>>(items: impl IntoIterator<Item = S>, ordered: bool) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|text| vec![StyledSpan::plain(text)])
                .collect(),
            ordered,
            level: 0,
        }
    }
}

impl From<RawText> for RawContent {
    fn from(text: RawText) -> Self {
        RawContent::Text(text)
    }
}

impl From<RawImage> for RawContent {
    fn from(image: RawImage) -> Self {
        RawContent::Image(image)
    }
}

impl From<RawTable> for RawContent {
    fn from(table: RawTable) -> Self {
        RawContent::Table(table)
    }
}

impl From<RawLink> for RawContent {
    fn from(link: RawLink) -> Self {
        RawContent::Link(link)
    }
}

impl From<RawList> for RawContent {
    fn from(list: RawList) -> Self {
        RawContent::List(list)
    }
}
