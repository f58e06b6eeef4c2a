//! Public and internal type definitions for hint extraction.
//!
//! Contains the hint record (`Hint`), the requestable kinds (`HintKind`)
//! and the internal extraction rule tags (`Capture`).

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::base::Span;
use crate::hir::tree::ScopeId;

// ============================================================================
// HINT KINDS
// ============================================================================

/// The kind of a completion hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HintKind {
    Import,
    Function,
    Mixin,
    Variable,
    Id,
    Class,
    Attribute,
    Placeholder,
    /// Mixin/function parameter, only produced alongside its definition
    Argument,
}

impl HintKind {
    /// Every kind, in index order
    pub const ALL: [HintKind; 9] = [
        HintKind::Import,
        HintKind::Function,
        HintKind::Mixin,
        HintKind::Variable,
        HintKind::Id,
        HintKind::Class,
        HintKind::Attribute,
        HintKind::Placeholder,
        HintKind::Argument,
    ];

    /// Kinds requested by the "all hints" queries
    pub const REQUESTABLE: [HintKind; 8] = [
        HintKind::Mixin,
        HintKind::Attribute,
        HintKind::Function,
        HintKind::Class,
        HintKind::Placeholder,
        HintKind::Id,
        HintKind::Variable,
        HintKind::Import,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HintKind::Import => "import",
            HintKind::Function => "function",
            HintKind::Mixin => "mixin",
            HintKind::Variable => "variable",
            HintKind::Id => "id",
            HintKind::Class => "class",
            HintKind::Attribute => "attribute",
            HintKind::Placeholder => "placeholder",
            HintKind::Argument => "argument",
        }
    }

    /// Captures that must run to populate this kind.
    ///
    /// Variables also pull in mixins and functions, whose parameters are
    /// variables inside their bodies.
    pub fn captures(self) -> &'static [Capture] {
        match self {
            HintKind::Mixin => &[Capture::Mixin],
            HintKind::Attribute => &[Capture::Attribute],
            HintKind::Function => &[Capture::Function],
            HintKind::Class => &[Capture::Class],
            HintKind::Placeholder => &[Capture::Placeholder],
            HintKind::Id => &[Capture::Id],
            HintKind::Variable => &[Capture::Variable, Capture::Mixin, Capture::Function],
            HintKind::Import => &[Capture::Import],
            HintKind::Argument => &[Capture::Mixin, Capture::Function],
        }
    }

    /// Whether depth and scope filters apply to this kind.
    ///
    /// Selectors and attribute names are visible everywhere.
    pub fn is_scoped(self) -> bool {
        !matches!(self, HintKind::Id | HintKind::Class | HintKind::Attribute)
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown hint kind name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hint kind: {0}")]
pub struct UnknownHintKind(pub String);

impl FromStr for HintKind {
    type Err = UnknownHintKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HintKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownHintKind(s.to_string()))
    }
}

// ============================================================================
// CAPTURES
// ============================================================================

/// An extraction rule tag.
///
/// Finer than [`HintKind`]: one request may run several captures, and one
/// capture may emit several kinds (mixins emit arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capture {
    Mixin,
    Attribute,
    Function,
    Import,
    Class,
    Placeholder,
    Id,
    Variable,
}

pub type CaptureSet = FxHashSet<Capture>;

/// Expand requested kinds into the captures they need
pub fn captures_for(kinds: &[HintKind]) -> CaptureSet {
    kinds
        .iter()
        .flat_map(|kind| kind.captures().iter().copied())
        .collect()
}

// ============================================================================
// HINT RECORD
// ============================================================================

/// A completion hint extracted from the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub kind: HintKind,
    /// Display text: `.name`, `#name`, `%name`, `$name`, or a bare name/path
    pub value: String,
    /// Call signature, parameter default, or variable value
    pub definition: Option<String>,
    /// Basename of the analyzed file
    pub source: Arc<str>,
    /// Anchor range on a single line
    pub range: Span,
    /// Number of enclosing blocks
    pub depth: u32,
    pub scope: ScopeId,
    /// The capture that produced this hint
    pub(crate) origin: Capture,
}
