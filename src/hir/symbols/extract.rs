//! Extraction traversal: runs the requested captures over the tree.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::hir::error::AnalyzerError;
use crate::hir::index::HintMap;
use crate::hir::tree::AnnotatedTree;

use super::capture::Capturer;
use super::types::CaptureSet;

/// Counters for extraction work, cumulative since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Traversals started
    pub traversals: usize,
    /// Nodes popped across all traversals
    pub nodes_visited: usize,
    /// Traversals cut short by the deadline
    pub timeouts: usize,
}

/// Wall-clock limit for one traversal
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    started: Instant,
    limit: Duration,
}

impl Deadline {
    pub fn after(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            limit,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn expired(&self) -> bool {
        self.elapsed() >= self.limit
    }
}

/// Run one traversal with only `captures` enabled.
///
/// The deadline is checked for every popped node. On timeout the hints
/// captured so far stay in `hints` and the error is returned to the caller.
pub fn extract_hints(
    tree: &AnnotatedTree,
    source: &Arc<str>,
    captures: &CaptureSet,
    deadline: Option<&Deadline>,
    hints: &mut HintMap,
    stats: &mut ExtractionStats,
) -> Result<(), AnalyzerError> {
    let mut requested: Vec<_> = captures.iter().collect();
    requested.sort();
    tracing::debug!("[EXTRACT] {}: starting traversal for {:?}", source, requested);

    stats.traversals += 1;
    let mut visited = 0usize;
    let mut capturer = Capturer::new(tree, source, captures, hints);
    let mut stack = vec![tree.root()];

    while let Some(node) = stack.pop() {
        if let Some(deadline) = deadline
            && deadline.expired()
        {
            stats.nodes_visited += visited;
            stats.timeouts += 1;
            return Err(AnalyzerError::timeout(source.to_string(), deadline.elapsed()));
        }

        visited += 1;
        capturer.visit(node);
        stack.extend(tree.children(node).iter().rev().copied());
    }

    stats.nodes_visited += visited;
    tracing::debug!("[EXTRACT] {}: visited {} nodes", source, visited);
    Ok(())
}
