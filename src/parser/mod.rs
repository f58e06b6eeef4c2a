//! Lossless SCSS parser
//!
//! Source text is split into tokens by a logos lexer, then a hand-written
//! recursive-descent parser feeds them into a rowan `GreenNodeBuilder`.
//! Every byte of the input, including comments and whitespace, ends up in
//! the tree, so offsets map back to the document exactly.
//!
//! ```text
//! &str ──tokenize──▶ [Token] ──parse_scss──▶ Parse { green, errors }
//!                                                  │
//!                                     SyntaxNode ◀─┘ (rowan, parent pointers)
//! ```
//!
//! Errors are collected rather than raised; the `syntax` layer decides
//! whether a parse is usable.

#[allow(clippy::module_inception)]
mod parser;

mod lexer;
mod syntax_kind;

pub use lexer::{Lexer, Token, tokenize};
pub use parser::{Parse, SyntaxError, parse_scss};
pub use syntax_kind::{ScssLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
