//! High-level IR (HIR): annotated tree, hints and scopes.
//!
//! ## Key Types
//!
//! - [`AnnotatedTree`]: the CST lowered into an arena with depth and scope
//! - [`ScopeTree`]: block scopes and their parents
//! - [`Hint`]: a completion hint extracted from the tree
//! - [`HintMap`] / [`HintIndex`]: hints by kind, plus completed captures
//!
//! ## Layers
//!
//! ```text
//! SyntaxFile                 ← parsed CST
//!     │
//!     ▼
//! AnnotatedTree::build       ← depth, scope, type-path (once per parse)
//!     │
//!     ▼
//! extract_hints(captures)    ← lazy, per missing capture
//!     │
//!     ▼
//! HintMap filters            ← global-only or scope chain
//! ```

mod error;
mod index;
mod scope_chain;
mod symbols;
mod tree;
mod value;

pub use error::AnalyzerError;
pub use index::{HintIndex, HintMap};
pub use scope_chain::scope_chain;
pub use symbols::{
    Capture, CaptureSet, Deadline, ExtractionStats, Hint, HintKind, UnknownHintKind,
    captures_for, extract_hints,
};
pub use tree::{AnnotatedTree, NodeData, NodeId, Scope, ScopeId, ScopeTree};
pub use value::reconstruct;
