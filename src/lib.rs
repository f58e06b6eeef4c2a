//! # scss-hints
//!
//! Scope-aware symbol index over SCSS stylesheets for editor auto-completion.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → Analyzer, completion items
//!   ↓
//! hir       → Annotated tree, scopes, hint extraction and filters
//!   ↓
//! syntax    → SyntaxFile, ParseError
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, rowan CST
//!   ↓
//! base      → Primitives (Position, Span, LineIndex, TextRange)
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → hir → ide)
// ============================================================================

/// Foundation types: Position, Span, LineIndex
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, rowan CST
pub mod parser;

/// Syntax: parsed files and fatal parse errors
pub mod syntax;

/// High-level IR: annotated tree, scopes and hints
pub mod hir;

/// IDE features: analyzer and completion
pub mod ide;

// Re-export the query surface
pub use hir::{AnalyzerError, ExtractionStats, Hint, HintKind, HintMap, ScopeId};
pub use ide::{Analyzer, AnalyzerOptions, CompletionItem, CompletionKind, completions};

// Re-export foundation types
pub use base::{LineIndex, Position, Span, TextRange, TextSize};
