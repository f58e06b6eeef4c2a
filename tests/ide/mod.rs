//! IDE feature tests
//!
//! Tests for:
//! - Analyzer lifecycle (construction, reset, timeout changes)
//! - Code completion
//! - Hint kind names at the host boundary

pub mod tests_analyzer;
pub mod tests_completion;
