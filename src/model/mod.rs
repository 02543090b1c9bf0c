//! Data model for page content.
//!
//! Two layers live here: the raw, layout-annotated blocks handed in by the
//! acquisition step ([`RawPage`], [`RawBlock`]) and the classified blocks the
//! processor produces ([`BlockDocument`], [`Block`]). Both share
//! [`BoundingBox`] and [`StyledSpan`].

mod block;
mod document;
mod geometry;
mod raw;
pub mod span;

pub use block::{Block, Image, Link, List, Paragraph, Table, BLOCKQUOTE_MARKER};
pub use document::BlockDocument;
pub use geometry::BoundingBox;
pub use raw::{RawBlock, RawContent, RawImage, RawLink, RawList, RawPage, RawTable, RawText};
pub use span::{SpanFormat, StyledSpan};
