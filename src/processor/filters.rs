//! Post-classification filters over the block list.
//!
//! Filters run in a fixed order: language links, boilerplate links, then
//! duplicate hrefs. Each filter only removes blocks and keeps the survivors in
//! order.

use std::collections::HashSet;

use super::languages::{is_language_code, is_language_name};
use crate::model::{Block, Link};

/// Link texts treated as site chrome, compared with all whitespace removed.
pub const BOILERPLATE_LINK_PHRASES: &[&str] = &[
    "privacy policy",
    "terms of service",
    "terms and conditions",
    "contact us",
    "about us",
    "help",
    "faq",
    "cookie policy",
    "sitemap",
    "sign in",
    "get support",
    "pricing",
    "have any feedback or questions?",
    "guides",
    "privacy & terms",
    "licenses",
    "your privacy choices",
];

/// A block-list mutator run after classification.
pub trait BlockFilter: Send + Sync {
    /// Short name used in log output.
    fn name(&self) -> &str;

    /// Remove blocks in place.
    fn apply(&self, blocks: &mut Vec<Block>);
}

/// Drops links to language variants of the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageLinkFilter;

impl BlockFilter for LanguageLinkFilter {
    fn name(&self) -> &str {
        "language-links"
    }

    fn apply(&self, blocks: &mut Vec<Block>) {
        blocks.retain(|block| match block.as_link() {
            Some(link) if is_language_link(link) => {
                log::debug!("Removing language link: {} ({})", link.text(), link.href);
                false
            }
            _ => true,
        });
    }
}

fn is_language_link(link: &Link) -> bool {
    let segment = first_path_segment(&link.href);
    (!segment.is_empty() && is_language_code(segment)) || is_language_name(&link.text())
}

/// First segment of an href's path, for absolute, protocol-relative and
/// relative forms.
pub fn first_path_segment(href: &str) -> &str {
    let href = href.split(['?', '#']).next().unwrap_or_default();
    let path = if let Some((_, rest)) = href.split_once("://") {
        rest.find('/').map(|i| &rest[i..]).unwrap_or_default()
    } else if let Some(rest) = href.strip_prefix("//") {
        rest.find('/').map(|i| &rest[i..]).unwrap_or_default()
    } else {
        href
    };
    path.trim_matches('/').split('/').next().unwrap_or_default()
}

/// Drops links whose text is a common site-chrome phrase.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoilerplateLinkFilter;

impl BlockFilter for BoilerplateLinkFilter {
    fn name(&self) -> &str {
        "boilerplate-links"
    }

    fn apply(&self, blocks: &mut Vec<Block>) {
        blocks.retain(|block| match block.as_link() {
            Some(link) if is_boilerplate_link(link) => {
                log::debug!("Removing boilerplate link: {}", link.text());
                false
            }
            _ => true,
        });
    }
}

fn strip_whitespace(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn is_boilerplate_link(link: &Link) -> bool {
    let text = strip_whitespace(&link.text());
    BOILERPLATE_LINK_PHRASES
        .iter()
        .any(|phrase| strip_whitespace(phrase) == text)
}

/// Keeps only the first link for each href.
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateHrefFilter;

impl BlockFilter for DuplicateHrefFilter {
    fn name(&self) -> &str {
        "duplicate-hrefs"
    }

    fn apply(&self, blocks: &mut Vec<Block>) {
        let mut seen_hrefs: HashSet<String> = HashSet::new();
        blocks.retain(|block| match block.as_link() {
            Some(link) => {
                let first = seen_hrefs.insert(link.href.clone());
                if !first {
                    log::debug!("Skipping duplicate link: {}", link.href);
                }
                first
            }
            None => true,
        });
    }
}

/// An ordered chain of filters.
pub struct FilterChain {
    filters: Vec<Box<dyn BlockFilter>>,
}

impl FilterChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard chain: language links, boilerplate links, duplicate hrefs.
    pub fn standard() -> Self {
        Self::new()
            .with_filter(LanguageLinkFilter)
            .with_filter(BoilerplateLinkFilter)
            .with_filter(DuplicateHrefFilter)
    }

    /// Append a filter to the end of the chain.
    pub fn with_filter<F: BlockFilter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters in run order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run every filter in order.
    pub fn apply(&self, blocks: &mut Vec<Block>) {
        for filter in &self.filters {
            let before = blocks.len();
            filter.apply(blocks);
            log::debug!(
                "Filter {} removed {} blocks",
                filter.name(),
                before - blocks.len()
            );
        }
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BoundingBox, Paragraph, StyledSpan};

    fn link(href: &str, text: &str) -> Block {
        Block::Link(Link {
            bbox: BoundingBox::new(0.0, 0.0, 50.0, 10.0).unwrap(),
            href: href.to_string(),
            spans: vec![StyledSpan::plain(text)],
        })
    }

    fn hrefs(blocks: &[Block]) -> Vec<&str> {
        blocks
            .iter()
            .filter_map(|b| b.as_link().map(|l| l.href.as_str()))
            .collect()
    }

    #[test]
    fn test_first_path_segment() {
        assert_eq!(first_path_segment("https://example.com/es/docs"), "es");
        assert_eq!(first_path_segment("https://example.com"), "");
        assert_eq!(first_path_segment("//cdn.example.com/fr/"), "fr");
        assert_eq!(first_path_segment("/de-at/page?x=1"), "de-at");
        assert_eq!(first_path_segment("blog/post#top"), "blog");
    }

    #[test]
    fn test_language_links_removed() {
        let mut blocks = vec![
            link("https://example.com/es/docs", "Docs"),
            link("https://example.com/blog/post", "Blog"),
            link("https://example.com/?lang=x", "Deutsch"),
            link("https://example.com/pt-br/", "Portuguese"),
        ];
        LanguageLinkFilter.apply(&mut blocks);
        assert_eq!(hrefs(&blocks), vec!["https://example.com/blog/post"]);
    }

    #[test]
    fn test_code_prefixed_paths_kept() {
        let mut blocks = vec![
            link("/it-support/article", "IT support"),
            link("/is-this-real", "Is this real?"),
            link("/en-us/pricing", "Pricing"),
            link("/zh-hant/", "Docs"),
        ];
        LanguageLinkFilter.apply(&mut blocks);
        assert_eq!(hrefs(&blocks), vec!["/it-support/article", "/is-this-real"]);
    }

    #[test]
    fn test_boilerplate_links_removed() {
        let mut blocks = vec![
            link("/privacy", "Privacy  Policy"),
            link("/signin", "Sign In"),
            link("/article", "Read the article"),
        ];
        BoilerplateLinkFilter.apply(&mut blocks);
        assert_eq!(hrefs(&blocks), vec!["/article"]);
    }

    #[test]
    fn test_duplicate_hrefs_keep_first() {
        let mut blocks = vec![
            link("/a", "First"),
            Block::Paragraph(Paragraph::with_text(
                BoundingBox::new(0.0, 0.0, 1.0, 1.0).unwrap(),
                "between",
            )),
            link("/a", "Second"),
            link("/b", "Other"),
        ];
        DuplicateHrefFilter.apply(&mut blocks);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].plain_text(), "First");
        assert_eq!(hrefs(&blocks), vec!["/a", "/b"]);
    }

    #[test]
    fn test_standard_chain_order() {
        let chain = FilterChain::standard();
        assert_eq!(
            chain.names(),
            vec!["language-links", "boilerplate-links", "duplicate-hrefs"]
        );
        assert!(FilterChain::new().is_empty());
    }
}
