//! Position tracking for annotated nodes and hints
//!
//! Stores the source location (line/column) of nodes for completion
//! ranges and scope containment checks.

/// A span representing a range in source code (0-indexed, end-exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// A position in source code (0-indexed line, UTF-8 byte column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span from line/column coordinates
    pub fn from_coords(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// A span starting at `start` and covering `len` bytes on the same line.
    pub fn on_line(start: Position, len: usize) -> Self {
        Self {
            start,
            end: Position::new(start.line, start.column + len as u32),
        }
    }

    /// Check if a cursor position lies inside this span.
    ///
    /// The start is inclusive and the end exclusive, so a cursor sitting
    /// right after a closing brace is outside the block it closes.
    pub fn contains(&self, position: Position) -> bool {
        let (start, end) = (self.start, self.end);

        if position.line > start.line && position.line < end.line {
            true
        } else if position.line == start.line && position.line == end.line {
            position.column >= start.column && position.column < end.column
        } else if position.line == start.line {
            position.column >= start.column
        } else if position.line == end.line {
            position.column < end.column
        } else {
            false
        }
    }
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
