//! Error types for richsoup library.

use std::io;
use thiserror::Error;

/// Result type alias for richsoup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a page.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading configuration or input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A bounding box with negative extent or a non-finite coordinate.
    #[error("Invalid bounding box: ({x0}, {y0}, {x1}, {y1})")]
    InvalidBoundingBox {
        /// Left edge
        x0: f32,
        /// Top edge
        y0: f32,
        /// Right edge
        x1: f32,
        /// Bottom edge
        y1: f32,
    },

    /// A configuration value is outside its declared range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file is not valid TOML for the options schema.
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The raw page input is not valid JSON for the raw block schema.
    #[error("Input parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during rendering (Markdown, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
