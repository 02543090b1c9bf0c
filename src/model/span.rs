//! Styled text runs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Characters that attach to the preceding span without a space.
const CLOSING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', ')', ']', '}'];

/// A contiguous run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledSpan {
    /// The text content
    pub text: String,

    /// Format tags applied to the run
    #[serde(default = "default_formats")]
    pub formats: BTreeSet<SpanFormat>,

    /// Font size in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Numeric font weight (400 = regular, 700 = bold)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f32>,

    /// Font family name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

fn default_formats() -> BTreeSet<SpanFormat> {
    BTreeSet::from([SpanFormat::None])
}

impl StyledSpan {
    /// Create an unstyled span.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formats: default_formats(),
            font_size: None,
            font_weight: None,
            font_family: None,
        }
    }

    /// Create a span with the given formats.
    pub fn with_formats(
        text: impl Into<String>,
        formats: impl IntoIterator<Item = SpanFormat>,
    ) -> Self {
        Self {
            formats: formats.into_iter().collect(),
            ..Self::plain(text)
        }
    }

    /// Create a bold span.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::with_formats(text, [SpanFormat::Bold])
    }

    /// Create an italic span.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::with_formats(text, [SpanFormat::Italic])
    }

    /// Create an inline code span.
    pub fn code(text: impl Into<String>) -> Self {
        Self::with_formats(text, [SpanFormat::Code])
    }

    pub fn has_format(&self, format: &SpanFormat) -> bool {
        self.formats.contains(format)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A format tag carried by a [`StyledSpan`].
///
/// Tags outside the known set are preserved as [`SpanFormat::Other`] so the
/// renderer can report and ignore them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SpanFormat {
    Bold,
    Italic,
    Code,
    None,
    Other(String),
}

impl From<String> for SpanFormat {
    fn from(tag: String) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "bold" => SpanFormat::Bold,
            "italic" => SpanFormat::Italic,
            "code" => SpanFormat::Code,
            "none" => SpanFormat::None,
            _ => SpanFormat::Other(tag),
        }
    }
}

impl From<SpanFormat> for String {
    fn from(format: SpanFormat) -> Self {
        match format {
            SpanFormat::Bold => "bold".to_string(),
            SpanFormat::Italic => "italic".to_string(),
            SpanFormat::Code => "code".to_string(),
            SpanFormat::None => "none".to_string(),
            SpanFormat::Other(tag) => tag,
        }
    }
}

/// Whether a space must be inserted between two adjacent span texts.
pub fn needs_separator(previous: &str, next: &str) -> bool {
    let previous_ends_open = previous
        .chars()
        .last()
        .is_some_and(|c| !c.is_whitespace());
    let next_starts_word = next
        .chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && !CLOSING_PUNCTUATION.contains(&c));
    previous_ends_open && next_starts_word
}

/// Join span texts with the same spacing rule the Markdown renderer uses.
pub fn join_span_text(spans: &[StyledSpan]) -> String {
    let mut output = String::new();
    let mut previous: Option<&str> = None;
    for span in spans.iter().filter(|s| !s.is_empty()) {
        if let Some(prev) = previous {
            if needs_separator(prev, &span.text) {
                output.push(' ');
            }
        }
        output.push_str(&span.text);
        previous = Some(span.text.as_str());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags_round_trip_unknown() {
        let span: StyledSpan =
            serde_json::from_str(r#"{"text": "x", "formats": ["bold", "underline"]}"#).unwrap();
        assert!(span.has_format(&SpanFormat::Bold));
        assert!(span.has_format(&SpanFormat::Other("underline".to_string())));
    }

    #[test]
    fn test_default_formats_is_none() {
        let span: StyledSpan = serde_json::from_str(r#"{"text": "x"}"#).unwrap();
        assert!(span.has_format(&SpanFormat::None));
    }

    #[test]
    fn test_join_span_text_spacing() {
        let spans = vec![
            StyledSpan::plain("Hello"),
            StyledSpan::bold("world"),
            StyledSpan::plain("!"),
            StyledSpan::plain(" again"),
        ];
        assert_eq!(join_span_text(&spans), "Hello world! again");
    }

    #[test]
    fn test_needs_separator() {
        assert!(needs_separator("a", "b"));
        assert!(!needs_separator("a ", "b"));
        assert!(!needs_separator("a", ")"));
        assert!(!needs_separator("", "b"));
    }
}
