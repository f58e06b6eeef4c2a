//! Syntax-level parsing interface.
//!
//! Turns the parser's collected errors into a single fatal [`ParseError`]
//! carrying line/column information.

use thiserror::Error;

use crate::base::{LineIndex, Position};
use crate::parser::{self, SyntaxError};
use crate::syntax::file::SyntaxFile;

/// Parse error type for syntax-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{line}:{column}: {message}")]
pub struct ParseError {
    pub message: String,
    /// 0-based line of the first error
    pub line: u32,
    /// 0-based byte column of the first error
    pub column: u32,
    /// Every error the parser collected, in source order
    pub errors: Vec<SyntaxError>,
}

impl ParseError {
    fn from_errors(mut errors: Vec<SyntaxError>, line_index: &LineIndex) -> Self {
        errors.sort_by_key(|e| e.range.start());
        let first = &errors[0];
        let position = line_index.position(first.range.start());
        Self {
            message: first.message.clone(),
            line: position.line,
            column: position.column,
            errors,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Parse SCSS source text.
///
/// Any syntax error is fatal: the document gets no tree.
pub fn parse_scss(source: &str) -> Result<SyntaxFile, ParseError> {
    let parse = parser::parse_scss(source);
    let line_index = LineIndex::new(source);

    if !parse.errors.is_empty() {
        return Err(ParseError::from_errors(parse.errors, &line_index));
    }

    Ok(SyntaxFile::new(parse.green, line_index))
}
