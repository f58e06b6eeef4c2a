//! Tests for lazy capture: one traversal per missing capture set, and
//! recovery after a timeout.

use std::time::Duration;

use scss_hints::{Analyzer, AnalyzerOptions, HintKind};

use crate::helpers::hint_helpers::*;
use crate::helpers::source_fixtures::*;

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn test_repeat_request_does_not_traverse() {
    let mut analyzer = analyzer(THEME);
    let first = analyzer.hints(&[HintKind::Class]).clone();
    let visited = analyzer.stats().nodes_visited;

    let second = analyzer.hints(&[HintKind::Class]).clone();
    assert_eq!(first, second);
    assert_eq!(analyzer.stats().traversals, 1);
    assert_eq!(analyzer.stats().nodes_visited, visited);
}

#[test]
fn test_only_missing_captures_traverse() {
    let mut analyzer = analyzer(THEME);
    analyzer.hints(&[HintKind::Class]);
    analyzer.hints(&[HintKind::Variable]);
    assert_eq!(analyzer.stats().traversals, 2);

    // Mixins and functions came along with variables
    analyzer.hints(&[HintKind::Mixin, HintKind::Function, HintKind::Argument]);
    assert_eq!(analyzer.stats().traversals, 2);

    let hints = analyzer.all_hints();
    assert_values(hints, HintKind::Mixin, &["button"]);
    assert_values(hints, HintKind::Class, &[".nav"]);
    assert_eq!(analyzer.stats().traversals, 3);

    analyzer.all_hints();
    analyzer.all_global_hints();
    analyzer.hints_at(&HintKind::REQUESTABLE, scss_hints::Position::new(7, 2));
    assert_eq!(analyzer.stats().traversals, 3);
}

#[test]
fn test_incremental_matches_single_pass() {
    let mut single = analyzer(THEME);
    let expected = single.all_hints().clone();

    let mut incremental = analyzer(THEME);
    for kind in HintKind::REQUESTABLE {
        incremental.hints(&[kind]);
    }
    let actual = incremental.all_hints();

    for kind in HintKind::ALL {
        let mut want = expected.values(kind);
        let mut got = actual.values(kind);
        want.sort_unstable();
        got.sort_unstable();
        assert_eq!(got, want, "{}", kind);
    }
}

#[test]
fn test_every_hint_names_its_source() {
    let mut analyzer = Analyzer::new("/project/styles/_theme.scss", THEME).unwrap();
    let hints = analyzer.all_hints();
    assert!(!hints.is_empty());
    for (_, group) in hints.iter() {
        assert!(group.iter().all(|hint| &*hint.source == "_theme.scss"));
    }
}

// ============================================================================
// TIMEOUTS
// ============================================================================

fn expired_options() -> AnalyzerOptions {
    AnalyzerOptions {
        timeout: Some(Duration::ZERO),
    }
}

#[test]
fn test_expired_deadline_yields_nothing() {
    let mut analyzer = Analyzer::with_options("test.scss", THEME, expired_options()).unwrap();
    assert!(analyzer.all_hints().is_empty());

    let stats = analyzer.stats();
    assert_eq!(stats.traversals, 1);
    assert_eq!(stats.timeouts, 1);
}

#[test]
fn test_timed_out_captures_are_retried() {
    let mut analyzer = Analyzer::with_options("test.scss", THEME, expired_options()).unwrap();
    analyzer.hints(&[HintKind::Class]);
    analyzer.hints(&[HintKind::Class]);
    assert_eq!(analyzer.stats().traversals, 2);
    assert_eq!(analyzer.stats().timeouts, 2);
}

#[test]
fn test_raised_timeout_recovers_full_index() {
    let mut reference = analyzer(THEME);
    let expected = reference.all_hints().clone();

    let mut analyzer = Analyzer::with_options("test.scss", THEME, expired_options()).unwrap();
    assert!(analyzer.all_hints().is_empty());

    analyzer.set_timeout(60_000);
    assert_eq!(analyzer.all_hints(), &expected);
}

#[test]
fn test_short_timeout_on_large_stylesheet() {
    let options = AnalyzerOptions::with_timeout_ms(1);
    let mut analyzer = Analyzer::with_options("large.scss", &LARGE_STYLESHEET, options).unwrap();
    let first = analyzer.all_hints().len();

    if analyzer.stats().timeouts == 0 {
        // A fast machine finished within the limit
        assert_eq!(first, LARGE_BLOCKS * LARGE_HINTS_PER_BLOCK);
        return;
    }

    // Partial results stay until the next request purges them
    assert!(first < LARGE_BLOCKS * LARGE_HINTS_PER_BLOCK);
    analyzer.set_timeout(60_000);
    assert_eq!(
        analyzer.all_hints().len(),
        LARGE_BLOCKS * LARGE_HINTS_PER_BLOCK
    );
    let stats = analyzer.stats();
    assert_eq!(stats.traversals, 2);
}

#[test]
fn test_partial_results_are_not_duplicated() {
    let options = AnalyzerOptions::with_timeout_ms(1);
    let mut analyzer = Analyzer::with_options("large.scss", &LARGE_STYLESHEET, options).unwrap();

    let mut attempts = 0;
    while attempts < 50 {
        attempts += 1;
        let count = analyzer.hints(&[HintKind::Class]).get(HintKind::Class).len();
        assert!(count <= LARGE_BLOCKS);
        if analyzer.stats().timeouts < attempts {
            assert_eq!(count, LARGE_BLOCKS);
            break;
        }
    }
}
