//! Paragraph classification for raw text blocks.

use std::sync::OnceLock;

use regex::Regex;

use super::{PageMetrics, ProcessOptions};
use crate::model::{BoundingBox, Paragraph, RawText, StyledSpan, BLOCKQUOTE_MARKER};

fn paragraph_break() -> &'static Regex {
    static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n[ \t\r]*\n").expect("valid paragraph regex"))
}

/// Collapse whitespace runs to single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lower-cased, whitespace-collapsed form used for duplicate detection.
pub fn normalize_text(text: &str) -> String {
    collapse_whitespace(&text.to_lowercase())
}

/// Turn one raw text block into zero or more paragraphs.
///
/// Code blocks pass through whole. Other text is split at blank lines; every
/// resulting paragraph shares the source bounding box and the block-level
/// heading/bold decision.
pub fn classify_text(
    bbox: BoundingBox,
    raw: &RawText,
    metrics: &PageMetrics,
    options: &ProcessOptions,
) -> Vec<Paragraph> {
    let text = raw.text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if raw.is_code {
        return vec![Paragraph::code(bbox, text)];
    }

    let candidates: Vec<String> = paragraph_break()
        .split(text)
        .map(collapse_whitespace)
        .filter(|candidate| !candidate.is_empty())
        .collect();
    if candidates.is_empty() {
        return Vec::new();
    }

    let mean_size = metrics.font_size.mean;
    if mean_size > 0.0 && raw.font_size <= mean_size * options.small_text_threshold {
        log::debug!(
            "Dropping small text ({}px <= {:.2}px): {:.40}",
            raw.font_size,
            mean_size * options.small_text_threshold,
            text
        );
        return Vec::new();
    }

    let heading = resolve_heading(raw, metrics, options);
    let bold = is_bold(raw.font_weight, metrics, options.bold_threshold);
    let keep_runs = candidates.len() == 1 && !raw.spans.is_empty();

    candidates
        .into_iter()
        .map(|candidate| {
            let mut spans = if keep_runs {
                clean_runs(&raw.spans)
            } else {
                vec![StyledSpan::plain(candidate)]
            };
            // The marker gets its own span so it never inherits run formatting
            if raw.is_blockquote && !spans.is_empty() {
                spans.insert(0, StyledSpan::plain(BLOCKQUOTE_MARKER));
            }
            Paragraph {
                bbox,
                spans,
                heading,
                bold,
                is_code: false,
            }
        })
        .collect()
}

/// Semantic level wins, capped at h6; otherwise the first heading threshold met.
fn resolve_heading(raw: &RawText, metrics: &PageMetrics, options: &ProcessOptions) -> u8 {
    if raw.heading_level > 6 {
        log::warn!(
            "Semantic heading level {} out of range, using 6",
            raw.heading_level
        );
        return 6;
    }
    if raw.heading_level > 0 {
        return raw.heading_level;
    }
    let mean_size = metrics.font_size.mean;
    if mean_size <= 0.0 {
        return 0;
    }
    options.heading_thresholds.level_for(raw.font_size, mean_size)
}

/// Whether a font weight is noticeably heavier than the page mean.
pub fn is_bold(font_weight: f32, metrics: &PageMetrics, bold_threshold: f32) -> bool {
    let mean_weight = metrics.font_weight.mean;
    mean_weight > 0.0 && font_weight >= mean_weight * (1.0 + bold_threshold)
}

/// Collapse whitespace inside each run, keep single spaces at run edges, and
/// trim the outer edges of the paragraph.
fn clean_runs(spans: &[StyledSpan]) -> Vec<StyledSpan> {
    let mut cleaned: Vec<StyledSpan> = spans
        .iter()
        .filter_map(|span| {
            let core = collapse_whitespace(&span.text);
            if core.is_empty() {
                return None;
            }
            let lead = if span.text.starts_with(char::is_whitespace) { " " } else { "" };
            let trail = if span.text.ends_with(char::is_whitespace) { " " } else { "" };
            Some(StyledSpan {
                text: format!("{}{}{}", lead, core, trail),
                ..span.clone()
            })
        })
        .collect();

    if let Some(first) = cleaned.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = cleaned.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::Statistics;

    fn bbox() -> BoundingBox {
        BoundingBox::new(0.0, 0.0, 400.0, 20.0).unwrap()
    }

    fn metrics(mean_size: f32, mean_weight: f32) -> PageMetrics {
        PageMetrics {
            font_size: Statistics {
                mean: mean_size,
                median: mean_size,
                min: mean_size,
                max: mean_size,
                count: 1,
            },
            font_weight: Statistics {
                mean: mean_weight,
                median: mean_weight,
                min: mean_weight,
                max: mean_weight,
                count: 1,
            },
        }
    }

    #[test]
    fn test_code_block_is_not_split() {
        let raw = RawText::new("x=1\n\ny=2", 16.0, 400.0).code();
        let paragraphs = classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default());

        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].is_code);
        assert_eq!(paragraphs[0].heading, 0);
        assert_eq!(paragraphs[0].plain_text(), "x=1\n\ny=2");
    }

    #[test]
    fn test_split_on_blank_lines_and_collapse() {
        let raw = RawText::new("  First   line\nwraps\n\n\n Second  ", 16.0, 400.0);
        let paragraphs = classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default());

        let texts: Vec<String> = paragraphs.iter().map(Paragraph::plain_text).collect();
        assert_eq!(texts, vec!["First line wraps", "Second"]);
        assert!(paragraphs.iter().all(|p| p.bbox == bbox()));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        let raw = RawText::new("   \n\n  ", 16.0, 400.0);
        assert!(classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default()).is_empty());
    }

    #[test]
    fn test_small_text_dropped() {
        let raw = RawText::new("caption", 10.0, 400.0);
        assert!(classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default()).is_empty());

        let raw = RawText::new("body", 11.0, 400.0);
        assert_eq!(
            classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default()).len(),
            1
        );
    }

    #[test]
    fn test_heading_resolution() {
        let options = ProcessOptions::default();
        let m = metrics(16.0, 400.0);

        let semantic = RawText::new("Intro", 16.0, 400.0).with_heading(4);
        assert_eq!(classify_text(bbox(), &semantic, &m, &options)[0].heading, 4);

        let large = RawText::new("Title", 24.0, 400.0);
        assert_eq!(classify_text(bbox(), &large, &m, &options)[0].heading, 1);

        let medium = RawText::new("Section", 20.0, 400.0);
        assert_eq!(classify_text(bbox(), &medium, &m, &options)[0].heading, 2);

        let body = RawText::new("Body", 16.0, 400.0);
        assert_eq!(classify_text(bbox(), &body, &m, &options)[0].heading, 0);
    }

    #[test]
    fn test_semantic_heading_capped_at_six() {
        let options = ProcessOptions::default();
        let m = metrics(16.0, 400.0);

        let deep = RawText::new("Fine print title", 16.0, 400.0).with_heading(9);
        assert_eq!(classify_text(bbox(), &deep, &m, &options)[0].heading, 6);

        let h6 = RawText::new("Smallest title", 16.0, 400.0).with_heading(6);
        assert_eq!(classify_text(bbox(), &h6, &m, &options)[0].heading, 6);
    }

    #[test]
    fn test_bold_resolution() {
        let m = metrics(16.0, 400.0);
        assert!(is_bold(700.0, &m, 0.35));
        assert!(!is_bold(500.0, &m, 0.35));
        assert!(!is_bold(700.0, &PageMetrics::default(), 0.35));
    }

    #[test]
    fn test_blockquote_prefix() {
        let raw = RawText::new("Quoted words", 16.0, 400.0).blockquote();
        let paragraphs = classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default());
        assert_eq!(paragraphs[0].plain_text(), "> Quoted words");
        assert_eq!(paragraphs[0].spans[0], StyledSpan::plain("> "));
    }

    #[test]
    fn test_blockquote_marker_outside_bold_run() {
        let raw = RawText::new("Important quote here", 16.0, 400.0)
            .blockquote()
            .with_spans(vec![
                StyledSpan::bold("Important"),
                StyledSpan::plain(" quote here"),
            ]);
        let paragraphs = classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default());

        let spans = &paragraphs[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0], StyledSpan::plain("> "));
        assert_eq!(spans[1], StyledSpan::bold("Important"));
        assert_eq!(paragraphs[0].plain_text(), "> Important quote here");
    }

    #[test]
    fn test_styled_runs_are_kept() {
        let raw = RawText::new("Read the  docs now", 16.0, 400.0).with_spans(vec![
            StyledSpan::plain(" Read the  "),
            StyledSpan::bold("docs"),
            StyledSpan::plain(" now\n"),
        ]);
        let paragraphs = classify_text(bbox(), &raw, &metrics(16.0, 400.0), &ProcessOptions::default());

        assert_eq!(paragraphs[0].spans.len(), 3);
        assert_eq!(paragraphs[0].spans[0].text, "Read the ");
        assert_eq!(paragraphs[0].spans[2].text, " now");
        assert_eq!(paragraphs[0].plain_text(), "Read the docs now");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  Hello\n  World "), "hello world");
    }
}
