//! Syntax layer tests
//!
//! Tests for:
//! - Lossless parsing of whole stylesheets
//! - Fatal parse errors and their positions

pub mod tests_parse;
