//! Analyzer: owns one document and answers hint queries.
//!
//! The document is parsed and annotated once, on construction or
//! [`Analyzer::reset`]. Extraction is lazy: a query runs one traversal for
//! the captures it needs that have not completed yet.
//!
//! ## Usage
//!
//! ```ignore
//! let mut analyzer = Analyzer::new("styles/main.scss", text)?;
//!
//! let mixins = analyzer.hints(&[HintKind::Mixin]).get(HintKind::Mixin);
//! let visible = analyzer.hints_at(&[HintKind::Variable], Position::new(4, 2));
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::base::Position;
use crate::hir::{
    AnalyzerError, AnnotatedTree, CaptureSet, Deadline, ExtractionStats, HintIndex, HintKind,
    HintMap, ScopeId, captures_for, extract_hints, scope_chain,
};
use crate::syntax::parse_scss;

/// Analyzer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerOptions {
    /// Wall-clock limit for one extraction traversal
    pub timeout: Option<Duration>,
}

impl AnalyzerOptions {
    pub fn with_timeout_ms(ms: u64) -> Self {
        Self {
            timeout: Some(Duration::from_millis(ms)),
        }
    }
}

/// Scope-aware hint index over one stylesheet.
#[derive(Debug)]
pub struct Analyzer {
    /// Basename of the analyzed file
    source: Arc<str>,
    /// `None` after a failed reset
    tree: Option<AnnotatedTree>,
    index: HintIndex,
    timeout: Option<Duration>,
    stats: ExtractionStats,
}

impl Analyzer {
    /// Parse and annotate `text`.
    pub fn new(file_path: impl AsRef<Path>, text: &str) -> Result<Self, AnalyzerError> {
        Self::with_options(file_path, text, AnalyzerOptions::default())
    }

    pub fn with_options(
        file_path: impl AsRef<Path>,
        text: &str,
        options: AnalyzerOptions,
    ) -> Result<Self, AnalyzerError> {
        let mut analyzer = Self {
            source: Arc::from(""),
            tree: None,
            index: HintIndex::new(),
            timeout: options.timeout,
            stats: ExtractionStats::default(),
        };
        analyzer.reset(file_path, text)?;
        Ok(analyzer)
    }

    /// Discard all state and re-parse. The timeout is kept.
    ///
    /// On a parse error the analyzer holds no document and every query
    /// returns an empty index until the next successful reset.
    pub fn reset(&mut self, file_path: impl AsRef<Path>, text: &str) -> Result<(), AnalyzerError> {
        self.source = basename(file_path.as_ref());
        self.tree = None;
        self.index.clear();
        self.stats = ExtractionStats::default();

        let file = parse_scss(text)?;
        let tree = AnnotatedTree::build(&file);
        tracing::debug!(
            "[ANALYZER] {}: annotated {} nodes, {} scopes",
            self.source,
            tree.len(),
            tree.scopes().len()
        );
        self.tree = Some(tree);
        Ok(())
    }

    /// Update the timeout in milliseconds and clear the index.
    ///
    /// Zero is ignored.
    pub fn set_timeout(&mut self, ms: u64) {
        if ms == 0 {
            return;
        }
        self.timeout = Some(Duration::from_millis(ms));
        self.index.clear();
        tracing::debug!("[ANALYZER] {}: timeout set to {}ms", self.source, ms);
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tree(&self) -> Option<&AnnotatedTree> {
        self.tree.as_ref()
    }

    pub fn stats(&self) -> ExtractionStats {
        self.stats
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Ensure `kinds` are extracted and return the whole index.
    pub fn hints(&mut self, kinds: &[HintKind]) -> &HintMap {
        self.ensure_captured(&captures_for(kinds));
        self.index.hints()
    }

    /// Every requestable kind
    pub fn all_hints(&mut self) -> &HintMap {
        self.hints(&HintKind::REQUESTABLE)
    }

    /// Like [`Analyzer::hints`], keeping only top-level scoped hints.
    pub fn global_hints(&mut self, kinds: &[HintKind]) -> HintMap {
        self.hints(kinds).filter_by_depth(0)
    }

    pub fn all_global_hints(&mut self) -> HintMap {
        self.global_hints(&HintKind::REQUESTABLE)
    }

    /// Like [`Analyzer::hints`], keeping scoped hints visible at `position`.
    pub fn hints_at(&mut self, kinds: &[HintKind], position: Position) -> HintMap {
        self.ensure_captured(&captures_for(kinds));
        let chain = self.scope_chain(position);
        self.index.hints().filter_by_scopes(&chain)
    }

    /// Scopes enclosing `position`, root first. Empty without a document.
    pub fn scope_chain(&self, position: Position) -> Vec<ScopeId> {
        self.tree
            .as_ref()
            .map(|tree| scope_chain(tree.scopes(), position))
            .unwrap_or_default()
    }

    /// Range-derived label of a scope, e.g. `@#0:0#12:1`
    pub fn scope_label(&self, scope: ScopeId) -> Option<String> {
        self.tree.as_ref().map(|tree| tree.scopes().label(scope))
    }

    /// Run one traversal for the requested captures that are missing.
    ///
    /// A timeout leaves the partial hints in place and the captures
    /// unmarked; the next request purges those hints and retries.
    fn ensure_captured(&mut self, requested: &CaptureSet) {
        let Some(tree) = &self.tree else {
            return;
        };
        let missing = self.index.missing(requested);
        if missing.is_empty() {
            return;
        }

        self.index.hints_mut().purge(&missing);
        let deadline = self.timeout.map(Deadline::after);
        let result = extract_hints(
            tree,
            &self.source,
            &missing,
            deadline.as_ref(),
            self.index.hints_mut(),
            &mut self.stats,
        );

        match result {
            Ok(()) => self.index.mark_captured(&missing),
            Err(err) => tracing::warn!("[ANALYZER] {}", err),
        }
    }
}

fn basename(path: &Path) -> Arc<str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy())
        .into()
}
