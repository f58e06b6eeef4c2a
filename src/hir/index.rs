//! Hint index: kind → ordered hints, plus the captures already completed.

use indexmap::IndexMap;

use super::symbols::{Capture, CaptureSet, Hint, HintKind};
use super::tree::ScopeId;

/// Hints grouped by kind, each group in traversal order.
///
/// Every kind is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintMap {
    hints: IndexMap<HintKind, Vec<Hint>>,
}

impl Default for HintMap {
    fn default() -> Self {
        Self::new()
    }
}

impl HintMap {
    pub fn new() -> Self {
        Self {
            hints: HintKind::ALL.into_iter().map(|kind| (kind, Vec::new())).collect(),
        }
    }

    /// Hints of one kind
    pub fn get(&self, kind: HintKind) -> &[Hint] {
        self.hints.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Display values of one kind, in order
    pub fn values(&self, kind: HintKind) -> Vec<&str> {
        self.get(kind).iter().map(|hint| hint.value.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (HintKind, &[Hint])> {
        self.hints.iter().map(|(&kind, hints)| (kind, hints.as_slice()))
    }

    /// Total number of hints across all kinds
    pub fn len(&self) -> usize {
        self.hints.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn push(&mut self, hint: Hint) {
        self.hints.entry(hint.kind).or_default().push(hint);
    }

    /// Drop hints produced by any of `captures`
    pub(crate) fn purge(&mut self, captures: &CaptureSet) {
        for hints in self.hints.values_mut() {
            hints.retain(|hint| !captures.contains(&hint.origin));
        }
    }

    pub(crate) fn clear(&mut self) {
        for hints in self.hints.values_mut() {
            hints.clear();
        }
    }

    /// Copy with scoped kinds limited to `depth <= max_depth`.
    ///
    /// Ids, classes and attributes pass through.
    pub fn filter_by_depth(&self, max_depth: u32) -> HintMap {
        self.filter_scoped(|hint| hint.depth <= max_depth)
    }

    /// Copy with scoped kinds limited to scopes in `chain`.
    pub fn filter_by_scopes(&self, chain: &[ScopeId]) -> HintMap {
        self.filter_scoped(|hint| chain.contains(&hint.scope))
    }

    fn filter_scoped(&self, keep: impl Fn(&Hint) -> bool) -> HintMap {
        let hints = self
            .hints
            .iter()
            .map(|(&kind, hints)| {
                let hints = if kind.is_scoped() {
                    hints.iter().filter(|hint| keep(*hint)).cloned().collect()
                } else {
                    hints.clone()
                };
                (kind, hints)
            })
            .collect();
        HintMap { hints }
    }
}

/// The hint map together with the set of completed captures.
#[derive(Debug, Clone, Default)]
pub struct HintIndex {
    hints: HintMap,
    captured: CaptureSet,
}

impl HintIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hints(&self) -> &HintMap {
        &self.hints
    }

    pub(crate) fn hints_mut(&mut self) -> &mut HintMap {
        &mut self.hints
    }

    pub fn is_captured(&self, capture: Capture) -> bool {
        self.captured.contains(&capture)
    }

    /// Requested captures that have not completed yet
    pub fn missing(&self, requested: &CaptureSet) -> CaptureSet {
        requested.difference(&self.captured).copied().collect()
    }

    /// Mark captures as complete after a full traversal
    pub(crate) fn mark_captured(&mut self, captures: &CaptureSet) {
        self.captured.extend(captures.iter().copied());
    }

    /// Forget every hint and every completed capture
    pub fn clear(&mut self) {
        self.hints.clear();
        self.captured.clear();
    }
}
