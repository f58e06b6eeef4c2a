// Syntax-level entry point: parsed files and fatal parse errors
pub mod file;
pub mod parser;

pub use file::SyntaxFile;
pub use parser::{ParseError, parse_scss};

pub use crate::base::{Position, Span};
