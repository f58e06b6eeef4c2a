//! Foundation types for the analyzer.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineIndex`] - Line/column conversion
//! - [`Position`], [`Span`] - Line/column positions for nodes and hints
//!
//! This module has NO dependencies on other crate modules.

mod line_index;
mod position;

pub use line_index::LineIndex;
pub use position::{Position, Span};

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};
