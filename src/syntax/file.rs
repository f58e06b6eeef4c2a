//! Syntax file wrapper for parsed SCSS files.

use crate::base::{LineIndex, Position, TextSize};
use crate::parser::{GreenNode, SyntaxNode};

/// A successfully parsed stylesheet.
///
/// Owns the green tree and the line index used to turn CST offsets into
/// line/column positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxFile {
    green: GreenNode,
    line_index: LineIndex,
}

impl SyntaxFile {
    pub(crate) fn new(green: GreenNode, line_index: LineIndex) -> Self {
        Self { green, line_index }
    }

    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    pub fn line_index(&self) -> &LineIndex {
        &self.line_index
    }

    pub fn position(&self, offset: TextSize) -> Position {
        self.line_index.position(offset)
    }
}
