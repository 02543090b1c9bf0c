//! Block normalization and classification.
//!
//! ```text
//! RawPage -> PageMetrics -> reading order -> classify + dedup -> filters -> BlockDocument
//! ```

mod block_processor;
pub mod classify;
mod dedup;
pub mod filters;
mod languages;
mod metrics;
mod options;
mod reading_order;

pub use block_processor::BlockProcessor;
pub use dedup::{table_key, DuplicateTracker};
pub use filters::{
    BlockFilter, BoilerplateLinkFilter, DuplicateHrefFilter, FilterChain, LanguageLinkFilter,
};
pub use languages::{ascii_fold, is_language_code, is_language_name};
pub use metrics::{PageMetrics, Statistics};
pub use options::{HeadingThreshold, HeadingThresholds, ProcessOptions, DEFAULT_SKIP_PATTERNS};
pub use reading_order::reading_order;
