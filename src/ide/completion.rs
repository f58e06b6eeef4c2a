//! Completion suggestions built from visible hints.

use std::sync::Arc;

use crate::base::Position;
use crate::hir::{Hint, HintKind};

use super::Analyzer;

/// Completion item kind, mapped from the hint kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionKind {
    Function,
    Variable,
    Selector,
    Property,
    File,
}

impl CompletionKind {
    /// LSP `CompletionItemKind` number
    pub fn to_lsp(&self) -> u32 {
        match self {
            CompletionKind::Function => 3,  // Function
            CompletionKind::Variable => 6,  // Variable
            CompletionKind::Selector => 7,  // Class
            CompletionKind::Property => 10, // Property
            CompletionKind::File => 17,     // File
        }
    }
}

impl From<HintKind> for CompletionKind {
    fn from(kind: HintKind) -> Self {
        match kind {
            HintKind::Mixin | HintKind::Function => CompletionKind::Function,
            HintKind::Variable | HintKind::Argument => CompletionKind::Variable,
            HintKind::Class | HintKind::Id | HintKind::Placeholder => CompletionKind::Selector,
            HintKind::Attribute => CompletionKind::Property,
            HintKind::Import => CompletionKind::File,
        }
    }
}

/// One suggestion shown in the editor's completion popup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionItem {
    /// Inserted text, e.g. `$gap` or `.card`
    pub label: Arc<str>,
    pub kind: CompletionKind,
    /// Signature or value shown next to the label
    pub detail: Option<Arc<str>>,
    /// Lower sorts first
    pub sort_priority: u32,
}

/// Priority for parameters of the enclosing mixin or function
const ARGUMENT_PRIORITY: u32 = 10;
/// Priority for top-level hints; nested hints sort ahead by their depth
const TOP_LEVEL_PRIORITY: u32 = 50;

impl CompletionItem {
    pub fn new(label: impl Into<Arc<str>>, kind: CompletionKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            sort_priority: TOP_LEVEL_PRIORITY,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<Arc<str>>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.sort_priority = priority;
        self
    }

    /// Build an item from a hint.
    ///
    /// The detail is the hint's definition, or its kind name when it has
    /// none. Arguments rank first, then deeper hints before shallower ones.
    pub fn from_hint(hint: &Hint) -> Self {
        let detail = hint.definition.as_deref().unwrap_or(hint.kind.as_str());
        let priority = match hint.kind {
            HintKind::Argument => ARGUMENT_PRIORITY,
            _ => {
                let depth = hint.depth.min(TOP_LEVEL_PRIORITY - ARGUMENT_PRIORITY - 1);
                TOP_LEVEL_PRIORITY - depth
            }
        };
        Self::new(hint.value.as_str(), hint.kind.into())
            .with_detail(detail)
            .with_priority(priority)
    }
}

/// Suggestions for `kinds` visible at `position`, best first.
///
/// Requesting variables also offers the parameters of an enclosing mixin or
/// function. Labels are unique; the best-ranked occurrence wins.
pub fn completions(
    analyzer: &mut Analyzer,
    position: Position,
    kinds: &[HintKind],
) -> Vec<CompletionItem> {
    let visible = analyzer.hints_at(kinds, position);

    let mut wanted: Vec<HintKind> = kinds.to_vec();
    // Parameters are variables inside their bodies
    if kinds.contains(&HintKind::Variable) {
        wanted.push(HintKind::Argument);
    }

    let mut items: Vec<CompletionItem> = wanted
        .iter()
        .flat_map(|&kind| visible.get(kind))
        .map(CompletionItem::from_hint)
        .collect();

    // Sort by priority, then label so duplicates are adjacent
    items.sort_by(|a, b| {
        a.sort_priority
            .cmp(&b.sort_priority)
            .then_with(|| a.label.cmp(&b.label))
    });

    // Deduplicate by label, keeping the best priority
    let mut seen = rustc_hash::FxHashSet::default();
    items.retain(|item| seen.insert(item.label.clone()));

    items
}
