//! Tests for parameter lists: signatures and argument hints.

use rstest::rstest;
use scss_hints::{HintKind, ScopeId};

use crate::helpers::hint_helpers::*;
use crate::helpers::source_fixtures::*;

#[rstest]
#[case("@mixin m { }", None)]
#[case("@mixin m() { }", Some("m()"))]
#[case("@mixin m($a) { }", Some("m($a)"))]
#[case("@mixin m($a: ) { }", Some("m($a)"))]
#[case("@mixin m($a, $b: 10px, $rest...) { }", Some("m($a, [$b : 10px], $rest...)"))]
#[case(
    "@mixin m($c: darken($base, 10%)) { }",
    Some("m([$c : darken($base, 10%)])")
)]
fn test_mixin_signatures(#[case] source: &str, #[case] expected: Option<&str>) {
    let mut analyzer = analyzer(source);
    let hints = analyzer.hints(&[HintKind::Mixin]);
    let mixin = find_hint(hints, HintKind::Mixin, "m");
    assert_eq!(mixin.definition.as_deref(), expected);
}

#[test]
fn test_function_signature() {
    let mut analyzer = analyzer("@function f($x, $y: 2) { @return $x + $y; }");
    let hints = analyzer.hints(&[HintKind::Function]);
    let function = find_hint(hints, HintKind::Function, "f");
    assert_eq!(function.definition.as_deref(), Some("f($x, [$y : 2])"));
    assert_values(hints, HintKind::Argument, &["$x", "$y"]);
}

#[test]
fn test_arguments_live_in_body_scope() {
    let mut analyzer = analyzer(THEME);
    let body = {
        let tree = analyzer.tree().unwrap();
        let (scope, _) = tree.scopes().blocks().next().unwrap();
        scope
    };

    let hints = analyzer.hints(&[HintKind::Mixin]);
    assert_values(hints, HintKind::Argument, &["$a", "$b", "$rest"]);
    for argument in hints.get(HintKind::Argument) {
        assert_eq!(argument.depth, 1, "{}", argument.value);
        assert_eq!(argument.scope, body, "{}", argument.value);
        assert_ne!(argument.scope, ScopeId::GLOBAL);
    }
}

#[test]
fn test_argument_definitions_are_defaults() {
    let mut analyzer = analyzer(THEME);
    let hints = analyzer.hints(&[HintKind::Mixin]);
    assert_eq!(find_hint(hints, HintKind::Argument, "$a").definition, None);
    assert_eq!(
        find_hint(hints, HintKind::Argument, "$b").definition.as_deref(),
        Some("10px")
    );
    assert_eq!(find_hint(hints, HintKind::Argument, "$rest").definition, None);
}

#[test]
fn test_argument_ranges_point_at_parameters() {
    let mut analyzer = analyzer("@mixin m($a, $b: 1) { }");
    let hints = analyzer.hints(&[HintKind::Mixin]);
    let b = find_hint(hints, HintKind::Argument, "$b");
    assert_eq!(b.range.start.line, 0);
    assert_eq!(b.range.start.column, 14);
    assert_eq!(b.range.end.column, 15);
}

#[test]
fn test_bodiless_function_has_no_argument_hints() {
    let mut analyzer = analyzer("@function f($x);");
    let hints = analyzer.hints(&[HintKind::Function]);
    assert_eq!(
        find_hint(hints, HintKind::Function, "f").definition.as_deref(),
        Some("f($x)")
    );
    assert!(hints.get(HintKind::Argument).is_empty());
}

#[test]
fn test_arguments_follow_their_definition_capture() {
    let source = "@mixin m($a) { }\n@function f($b) { @return $b; }";

    let mut analyzer = analyzer(source);
    let hints = analyzer.hints(&[HintKind::Function]);
    assert_values(hints, HintKind::Argument, &["$b"]);

    let hints = analyzer.hints(&[HintKind::Mixin]);
    assert_values(hints, HintKind::Argument, &["$b", "$a"]);
}

#[test]
fn test_arguments_are_not_variables() {
    let mut analyzer = analyzer(THEME);
    let hints = analyzer.hints(&[HintKind::Variable]);
    let variables = hints.values(HintKind::Variable);
    for name in ["$a", "$b", "$rest", "$n"] {
        assert!(!variables.contains(&name), "{} leaked into variables", name);
    }
    assert_values(hints, HintKind::Argument, &["$a", "$b", "$rest", "$n"]);
}
