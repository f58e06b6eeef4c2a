//! Editor-facing API.
//!
//! An editor host keeps one [`Analyzer`] per open stylesheet, resets it
//! when the text changes and asks it for hints as the cursor moves.
//! [`completions`] turns the visible hints into ranked suggestions.
//!
//! Results use this crate's own types; mapping to a protocol such as LSP
//! happens in the host.
//!
//! ```ignore
//! use scss_hints::{Analyzer, HintKind, Position, completions};
//!
//! let mut analyzer = Analyzer::new("main.scss", "$gap: 4px; .a { }")?;
//! let items = completions(&mut analyzer, Position::new(0, 12), &[HintKind::Variable]);
//! ```

mod analysis;
mod completion;

pub use analysis::{Analyzer, AnalyzerOptions};
pub use completion::{CompletionItem, CompletionKind, completions};
