//! Error types for analysis.

use std::time::Duration;

use thiserror::Error;

use crate::syntax::ParseError;

/// Errors that can occur while analyzing a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// The source text is not valid SCSS.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Extraction exceeded the configured deadline.
    #[error("the analyzer for {file} timed out after {elapsed:?}, results may be incomplete")]
    Timeout { file: String, elapsed: Duration },
}

impl AnalyzerError {
    /// Create a timeout error.
    pub fn timeout(file: impl Into<String>, elapsed: Duration) -> Self {
        Self::Timeout {
            file: file.into(),
            elapsed,
        }
    }
}
