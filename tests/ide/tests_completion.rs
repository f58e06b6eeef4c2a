//! Tests for completion items over visible hints.

use scss_hints::{CompletionKind, HintKind, Position, completions};

use crate::helpers::hint_helpers::*;
use crate::helpers::source_fixtures::*;

fn labels(items: &[scss_hints::CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| &*item.label).collect()
}

#[test]
fn test_variable_completion_in_mixin_body() {
    let mut analyzer = analyzer(THEME);
    let items = completions(&mut analyzer, Position::new(8, 11), &[HintKind::Variable]);

    // Arguments first, then the closest scope
    assert_eq!(
        labels(&items),
        vec!["$a", "$b", "$rest", "$local", "$primary", "$spacing", "$theme"]
    );
    assert!(items.iter().all(|item| item.kind == CompletionKind::Variable));
    assert_eq!(items[1].detail.as_deref(), Some("10px"));
}

#[test]
fn test_selector_completion() {
    let mut analyzer = analyzer(SELECTORS);
    let items = completions(
        &mut analyzer,
        Position::new(0, 0),
        &[HintKind::Placeholder, HintKind::Id],
    );
    assert_eq!(labels(&items), vec!["#header", "%base"]);
    assert!(items.iter().all(|item| item.kind == CompletionKind::Selector));
    assert_eq!(items[0].kind.to_lsp(), 7);
}

#[test]
fn test_import_completion() {
    let mut analyzer = analyzer(IMPORTS);
    let items = completions(&mut analyzer, Position::new(3, 0), &[HintKind::Import]);
    assert_eq!(labels(&items), vec!["a", "b", "c.css", "d.css"]);
    assert_eq!(items[0].kind, CompletionKind::File);
}

#[test]
fn test_completion_without_document() {
    let mut analyzer = analyzer("$a: 1;");
    let _ = analyzer.reset("a.scss", "}");
    let items = completions(&mut analyzer, Position::new(0, 0), &[HintKind::Variable]);
    assert!(items.is_empty());
}
