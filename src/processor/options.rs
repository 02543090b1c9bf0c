//! Processing options and configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Substrings that mark a paragraph as page boilerplate.
pub const DEFAULT_SKIP_PATTERNS: &[&str] = &[
    "from wikipedia",
    "not to be confused with",
    "this article is about",
    "for other uses",
    "see also:",
    "main article:",
    "jump to navigation",
    "jump to search",
    "retrieved from",
    "categories:",
    "hidden categories:",
    "view source",
    "edit this",
    "cookie policy",
    "privacy policy",
    "terms of use",
];

/// Options for turning raw blocks into classified blocks.
///
/// Every tunable is independent. Values are validated when loaded and again
/// when a [`BlockProcessor`](super::BlockProcessor) is built; nothing is
/// clamped.
///
/// # TOML form
///
/// ```toml
/// reading_order_y_tolerance = 5
/// small_text_threshold = 0.65
/// bold_threshold = 0.35
/// header_threshold = 0.02
/// footer_threshold = 0.02
/// min_text_width = 50
/// skip_patterns = ["privacy policy"]
///
/// [heading_thresholds]
/// h1 = 1.5
/// h2 = 1.25
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessOptions {
    /// Max vertical distance (px) between consecutive blocks on one line
    pub reading_order_y_tolerance: f32,

    /// Text at or below `mean font size * ratio` is dropped as noise
    pub small_text_threshold: f32,

    /// Text at or above `mean font weight * (1 + ratio)` is bold
    pub bold_threshold: f32,

    /// Fraction of page height trimmed from the top
    pub header_threshold: f32,

    /// Fraction of page height trimmed from the bottom
    pub footer_threshold: f32,

    /// Text blocks narrower than this (px) are dropped
    pub min_text_width: f32,

    /// Font-size multipliers for inferred heading levels
    pub heading_thresholds: HeadingThresholds,

    /// Case-insensitive boilerplate substrings
    pub skip_patterns: Vec<String>,
}

impl ProcessOptions {
    /// Create new process options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from TOML and validate them.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let options: Self = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file and validate them.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the reading-order line tolerance.
    pub fn with_y_tolerance(mut self, tolerance: f32) -> Self {
        self.reading_order_y_tolerance = tolerance;
        self
    }

    /// Set the small-text ratio.
    pub fn with_small_text_threshold(mut self, ratio: f32) -> Self {
        self.small_text_threshold = ratio;
        self
    }

    /// Set the bold ratio.
    pub fn with_bold_threshold(mut self, ratio: f32) -> Self {
        self.bold_threshold = ratio;
        self
    }

    /// Set the header and footer trim fractions.
    pub fn with_margins(mut self, header: f32, footer: f32) -> Self {
        self.header_threshold = header;
        self.footer_threshold = footer;
        self
    }

    /// Set the minimum text block width.
    pub fn with_min_text_width(mut self, width: f32) -> Self {
        self.min_text_width = width;
        self
    }

    /// Set the heading threshold table.
    pub fn with_heading_thresholds(mut self, thresholds: HeadingThresholds) -> Self {
        self.heading_thresholds = thresholds;
        self
    }

    /// Replace the boilerplate skip patterns.
    pub fn with_skip_patterns<S: Into<String>>(
        mut self,
        patterns: impl IntoIterator<Item = S>,
    ) -> Self {
        self.skip_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Check every value against its declared range.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("reading_order_y_tolerance", self.reading_order_y_tolerance)?;
        check_non_negative("min_text_width", self.min_text_width)?;
        check_ratio("small_text_threshold", self.small_text_threshold)?;
        check_ratio("bold_threshold", self.bold_threshold)?;
        check_ratio("header_threshold", self.header_threshold)?;
        check_ratio("footer_threshold", self.footer_threshold)?;
        if self.header_threshold + self.footer_threshold > 1.0 {
            return Err(Error::InvalidConfig(
                "header_threshold + footer_threshold must not exceed 1".to_string(),
            ));
        }
        self.heading_thresholds.validate()
    }

    /// Whether a paragraph's text contains a configured skip pattern.
    pub(crate) fn is_boilerplate(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.skip_patterns
            .iter()
            .any(|pattern| lower.contains(&pattern.to_lowercase()))
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            reading_order_y_tolerance: 5.0,
            small_text_threshold: 0.65,
            bold_threshold: 0.35,
            header_threshold: 0.02,
            footer_threshold: 0.02,
            min_text_width: 50.0,
            heading_thresholds: HeadingThresholds::default(),
            skip_patterns: DEFAULT_SKIP_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn check_ratio(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )))
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "{} must be a finite non-negative number, got {}",
            name, value
        )))
    }
}

/// One row of the heading table: text at least `multiplier` times the mean
/// font size is inferred as heading `level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingThreshold {
    pub level: u8,
    pub multiplier: f32,
}

/// Ordered heading table, highest multiplier first.
///
/// Serialized as a map keyed `h1`..`h6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f32>", into = "BTreeMap<String, f32>")]
pub struct HeadingThresholds(Vec<HeadingThreshold>);

impl HeadingThresholds {
    /// Build a table from `(level, multiplier)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (u8, f32)>) -> Result<Self> {
        let mut thresholds: Vec<HeadingThreshold> = entries
            .into_iter()
            .map(|(level, multiplier)| HeadingThreshold { level, multiplier })
            .collect();
        thresholds.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));

        let table = Self(thresholds);
        table.validate()?;
        Ok(table)
    }

    /// An empty table; only semantic headings survive.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    pub fn entries(&self) -> &[HeadingThreshold] {
        &self.0
    }

    /// Heading level for a font size relative to the page mean (0 = none).
    pub fn level_for(&self, font_size: f32, mean_font_size: f32) -> u8 {
        self.0
            .iter()
            .find(|t| font_size >= mean_font_size * t.multiplier)
            .map(|t| t.level)
            .unwrap_or(0)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = [false; 7];
        for threshold in &self.0 {
            if !(1..=6).contains(&threshold.level) {
                return Err(Error::InvalidConfig(format!(
                    "heading level must be within 1..=6, got {}",
                    threshold.level
                )));
            }
            if !(threshold.multiplier.is_finite() && threshold.multiplier > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "heading multiplier for h{} must be positive, got {}",
                    threshold.level, threshold.multiplier
                )));
            }
            if std::mem::replace(&mut seen[threshold.level as usize], true) {
                return Err(Error::InvalidConfig(format!(
                    "heading level h{} is listed twice",
                    threshold.level
                )));
            }
        }
        Ok(())
    }
}

impl Default for HeadingThresholds {
    fn default() -> Self {
        Self(vec![
            HeadingThreshold {
                level: 1,
                multiplier: 1.5,
            },
            HeadingThreshold {
                level: 2,
                multiplier: 1.25,
            },
            HeadingThreshold {
                level: 3,
                multiplier: 1.1,
            },
        ])
    }
}

impl TryFrom<BTreeMap<String, f32>> for HeadingThresholds {
    type Error = Error;

    fn try_from(map: BTreeMap<String, f32>) -> Result<Self> {
        let mut entries = Vec::with_capacity(map.len());
        for (key, multiplier) in map {
            let level = key
                .to_ascii_lowercase()
                .strip_prefix('h')
                .and_then(|digits| digits.parse::<u8>().ok())
                .ok_or_else(|| Error::InvalidConfig(format!("invalid heading key: {}", key)))?;
            entries.push((level, multiplier));
        }
        Self::new(entries)
    }
}

impl From<HeadingThresholds> for BTreeMap<String, f32> {
    fn from(table: HeadingThresholds) -> Self {
        table
            .0
            .into_iter()
            .map(|t| (format!("h{}", t.level), t.multiplier))
            .collect()
    }
}
