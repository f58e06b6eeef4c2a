//! Byte offset to line/column conversion.

use text_size::TextSize;

use super::Position;

/// Precomputed line starts for a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
    len: TextSize,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            line_starts,
            len: TextSize::of(text),
        }
    }

    /// Convert a byte offset to a 0-based position.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn position(&self, offset: TextSize) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let column = offset - self.line_starts[line];
        Position::new(line as u32, column.into())
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
