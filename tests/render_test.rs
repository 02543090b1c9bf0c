//! Rendering tests over hand-built block documents.

use richsoup::render::{to_json, to_markdown, to_markdown_with_stats, to_text};
use richsoup::{
    Block, BlockDocument, BoundingBox, Image, JsonFormat, Link, List, Paragraph, RenderOptions,
    SpanFormat, StyledSpan, Table,
};

fn bbox() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 320.0, 240.0).unwrap()
}

fn table(rows: &[&[&str]]) -> Block {
    Block::Table(Table {
        bbox: bbox(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect(),
    })
}

#[test]
fn test_short_rows_padded() {
    let doc = BlockDocument::with_blocks("", vec![table(&[&["A", "B"], &["1", "2"], &["3"]])]);
    let markdown = to_markdown(&doc, &RenderOptions::default()).unwrap();

    let lines: Vec<&str> = markdown.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "| A | B |");
    assert_eq!(lines[1], "| --- | --- |");
    assert_eq!(lines[3], "| 3 |  |");
}

#[test]
fn test_empty_table_renders_nothing() {
    let doc = BlockDocument::with_blocks(
        "",
        vec![
            table(&[]),
            Block::Paragraph(Paragraph::with_text(bbox(), "After")),
        ],
    );
    assert_eq!(to_markdown(&doc, &RenderOptions::default()).unwrap(), "After");
}

#[test]
fn test_mixed_document() {
    let mut intro = Paragraph::with_text(bbox(), "Run");
    intro.spans.push(StyledSpan::code("cargo build"));
    intro.spans.push(StyledSpan::plain(", then"));
    intro.spans.push(StyledSpan::italic("wait"));
    intro.spans.push(StyledSpan::plain("."));

    let doc = BlockDocument::with_blocks(
        "https://example.com",
        vec![
            Block::Paragraph(Paragraph::heading(bbox(), "Setup", 2)),
            Block::Paragraph(intro),
            Block::Image(Image {
                bbox: bbox(),
                src: "/diagram.svg".to_string(),
                alt: Some("Build graph".to_string()),
                dimensions: (320, 240),
            }),
            Block::Link(Link {
                bbox: bbox(),
                href: "https://example.com/next".to_string(),
                spans: vec![StyledSpan::plain("Next page")],
            }),
            Block::List(List {
                bbox: bbox(),
                items: vec![
                    vec![StyledSpan::plain("fast")],
                    vec![
                        StyledSpan::plain("safe"),
                        StyledSpan::with_formats("!", [SpanFormat::Bold]),
                    ],
                ],
                ordered: false,
                level: 0,
            }),
        ],
    );

    let markdown = to_markdown(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(
        markdown,
        "## Setup\n\n\
         Run `cargo build`, then *wait*.\n\n\
         ![Build graph](/diagram.svg) 320x240\n\n\
         [Next page](https://example.com/next)\n\n\
         - fast\n- safe**!**"
    );
}

#[test]
fn test_rendering_is_deterministic() {
    let doc = BlockDocument::with_blocks(
        "",
        vec![
            Block::Paragraph(Paragraph::heading(bbox(), "Title", 1)),
            table(&[&["x", "y"]]),
        ],
    );
    let options = RenderOptions::default();
    assert_eq!(
        to_markdown(&doc, &options).unwrap(),
        to_markdown(&doc, &options).unwrap()
    );
}

#[test]
fn test_stats_and_text() {
    let doc = BlockDocument::with_blocks(
        "https://example.com/stats",
        vec![
            Block::Paragraph(Paragraph::heading(bbox(), "Title", 1)),
            Block::Paragraph(Paragraph::with_text(bbox(), "One two three")),
            table(&[&["a"]]),
        ],
    );

    let result = to_markdown_with_stats(&doc, &RenderOptions::default()).unwrap();
    assert_eq!(result.stats.heading_count, 1);
    assert_eq!(result.stats.paragraph_count, 1);
    assert_eq!(result.stats.table_count, 1);
    assert_eq!(result.source_url, "https://example.com/stats");

    assert_eq!(to_text(&doc), "Title\n\nOne two three\n\na");
}

#[test]
fn test_json_field_names() {
    let doc = BlockDocument::with_blocks(
        "https://example.com",
        vec![Block::Image(Image {
            bbox: bbox(),
            src: "/a.png".to_string(),
            alt: None,
            dimensions: (320, 240),
        })],
    );

    let json = to_json(&doc, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["source_url"], "https://example.com");
    assert_eq!(value["blocks"][0]["type"], "image");
    assert_eq!(value["blocks"][0]["src"], "/a.png");
    assert_eq!(value["blocks"][0]["dimensions"][0], 320);
}
