//! Tests for the Analyzer lifecycle.

use std::time::Duration;

use scss_hints::{Analyzer, AnalyzerError, AnalyzerOptions, HintKind, Position};

use crate::helpers::hint_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_construction_parses_eagerly() {
    let analyzer = analyzer(THEME);
    assert!(analyzer.tree().is_some());
    assert_eq!(analyzer.stats().traversals, 0);
    assert_eq!(analyzer.timeout(), None);
}

#[test]
fn test_parse_error_is_reported() {
    let err = Analyzer::new("broken.scss", ".a {\n  color: red;\n").unwrap_err();
    let AnalyzerError::Parse(parse) = &err else {
        panic!("expected a parse error, got {:?}", err);
    };
    assert_eq!(parse.line, 2);
    assert!(err.to_string().contains("unclosed block"), "{}", err);
}

#[test]
fn test_reset_replaces_document() {
    let mut analyzer = analyzer(".old { }");
    assert_values(analyzer.all_hints(), HintKind::Class, &[".old"]);

    analyzer.reset("next.scss", ".new { } .newer { }").unwrap();
    assert_eq!(analyzer.source(), "next.scss");
    assert_eq!(analyzer.stats().traversals, 0);
    assert_values(analyzer.all_hints(), HintKind::Class, &[".new", ".newer"]);
}

#[test]
fn test_reset_keeps_timeout() {
    let options = AnalyzerOptions::with_timeout_ms(250);
    let mut analyzer = Analyzer::with_options("a.scss", "", options).unwrap();
    analyzer.reset("b.scss", "$a: 1;").unwrap();
    assert_eq!(analyzer.timeout(), Some(Duration::from_millis(250)));
}

#[test]
fn test_recovers_after_failed_reset() {
    let mut analyzer = analyzer("$a: 1;");
    assert!(analyzer.reset("a.scss", "$a: ;}").is_err());
    assert!(analyzer.all_global_hints().is_empty());
    assert!(analyzer.hints_at(&[HintKind::Variable], Position::new(0, 0)).is_empty());

    analyzer.reset("a.scss", "$b: 2;").unwrap();
    assert_values(analyzer.all_hints(), HintKind::Variable, &["$b"]);
}

#[test]
fn test_hint_kind_names() {
    assert_eq!("variable".parse::<HintKind>(), Ok(HintKind::Variable));
    assert_eq!("placeholder".parse::<HintKind>(), Ok(HintKind::Placeholder));
    assert!("selector".parse::<HintKind>().is_err());
    assert_eq!(HintKind::Argument.to_string(), "argument");
}

#[test]
fn test_requestable_kinds_exclude_arguments() {
    assert!(!HintKind::REQUESTABLE.contains(&HintKind::Argument));
    assert_eq!(HintKind::REQUESTABLE.len() + 1, HintKind::ALL.len());
}
