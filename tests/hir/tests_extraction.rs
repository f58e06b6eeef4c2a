//! Tests for the kind capturers against whole stylesheets.

use rstest::rstest;
use scss_hints::{HintKind, Position, Span};

use crate::helpers::hint_helpers::*;
use crate::helpers::source_fixtures::*;

// ============================================================================
// SELECTORS
// ============================================================================

#[test]
fn test_selector_kinds() {
    let mut analyzer = analyzer(SELECTORS);
    let hints = analyzer.all_hints();

    assert_values(
        hints,
        HintKind::Class,
        &[".a", ".b", ".c", ".d", ".title", ".card", ".icon", ".uses"],
    );
    assert_values(hints, HintKind::Id, &["#header"]);
    assert_values(hints, HintKind::Attribute, &["href", "data-x"]);
    assert_values(hints, HintKind::Placeholder, &["%base"]);
}

#[rstest]
#[case(r".sm\:flex { }", r".sm\:flex")]
#[case(r".a\.b:hover { }", r".a\.b")]
fn test_escaped_class_names(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(all_values(source, HintKind::Class), vec![expected]);
}

#[test]
fn test_colors_are_not_ids() {
    let values = all_values(".a { color: #fff; background: #000 url(x.png); }", HintKind::Id);
    assert!(values.is_empty(), "got {:?}", values);
}

#[test]
fn test_extend_is_not_a_placeholder_definition() {
    let values = all_values("%base { } .a { @extend %base; }", HintKind::Placeholder);
    assert_eq!(values, vec!["%base"]);
}

#[rstest]
#[case(".#{$name} { }")]
#[case(":not(.hidden) { }")]
#[case("a::before { content: '.x'; }")]
fn test_no_class_hint(#[case] source: &str) {
    assert!(all_values(source, HintKind::Class).is_empty());
}

#[test]
fn test_selector_hints_carry_no_definition() {
    let mut analyzer = analyzer(SELECTORS);
    let hints = analyzer.all_hints();
    for kind in [HintKind::Class, HintKind::Id, HintKind::Attribute, HintKind::Placeholder] {
        assert!(hints.get(kind).iter().all(|hint| hint.definition.is_none()));
    }
}

// ============================================================================
// IMPORTS
// ============================================================================

#[test]
fn test_import_forms() {
    assert_eq!(
        all_values(IMPORTS, HintKind::Import),
        vec!["a", "b", "c.css", "d.css"]
    );
}

#[test]
fn test_theme_imports() {
    let mut analyzer = analyzer(THEME);
    let hints = analyzer.hints(&[HintKind::Import]);
    assert_values(hints, HintKind::Import, &["foo/bar", "foo.css"]);

    let quoted = find_hint(hints, HintKind::Import, "foo/bar");
    // The range covers the quoted string
    assert_eq!(quoted.range, Span::from_coords(0, 8, 0, 17));
    assert_eq!(quoted.depth, 0);

    let uri = find_hint(hints, HintKind::Import, "foo.css");
    assert_eq!(uri.range.start, Position::new(1, 12));
}

#[test]
fn test_other_at_rules_are_ignored() {
    let source = "@use \"sass:math\";\n@media screen { .a { } }\n@charset \"utf-8\";";
    let mut analyzer = analyzer(source);
    let hints = analyzer.all_hints();
    assert!(hints.get(HintKind::Import).is_empty());
    assert!(hints.get(HintKind::Function).is_empty());
    assert_values(hints, HintKind::Class, &[".a"]);
}

// ============================================================================
// VARIABLES
// ============================================================================

#[test]
fn test_theme_variables() {
    let mut analyzer = analyzer(THEME);
    let hints = analyzer.hints(&[HintKind::Variable]);
    assert_values(
        hints,
        HintKind::Variable,
        &["$primary", "$spacing", "$local", "$theme", "$nested"],
    );

    let primary = find_hint(hints, HintKind::Variable, "$primary");
    assert_eq!(primary.definition.as_deref(), Some("#336699"));
    assert_eq!(primary.range, Span::from_coords(3, 1, 3, 8));
    assert_eq!(&*primary.source, "test.scss");

    let local = find_hint(hints, HintKind::Variable, "$local");
    assert_eq!(local.definition.as_deref(), Some("$a * 2"));
    assert_eq!(local.depth, 1);
}

#[rstest]
#[case("$a: 1px solid red;", "1px solid red")]
#[case("$a: darken($base, 10%);", "darken($base, 10%)")]
#[case("$a: \"#{$prefix}-icon\";", "\"#{$prefix}-icon\"")]
#[case("$a: (1 + 2) * 3;", "(1 + 2) * 3")]
#[case("$a: url(img.png) !default;", "url(img.png)")]
fn test_variable_definitions(#[case] source: &str, #[case] expected: &str) {
    let mut analyzer = analyzer(source);
    let hints = analyzer.hints(&[HintKind::Variable]);
    let hint = find_hint(hints, HintKind::Variable, "$a");
    assert_eq!(hint.definition.as_deref(), Some(expected));
}

#[test]
fn test_property_declarations_are_not_variables() {
    let values = all_values(".a { color: red; margin: $gap; }", HintKind::Variable);
    assert!(values.is_empty(), "got {:?}", values);
}

#[test]
fn test_call_site_keywords_are_not_variables() {
    let source = "@mixin m($size) { }\n.a { @include m($size: 2px); width: fn($x: 1); }";
    let mut analyzer = analyzer(source);
    let hints = analyzer.all_hints();
    assert!(hints.get(HintKind::Variable).is_empty());
    assert_values(hints, HintKind::Mixin, &["m"]);
}

// ============================================================================
// MIXINS AND FUNCTIONS
// ============================================================================

#[test]
fn test_theme_mixin_and_function() {
    let mut analyzer = analyzer(THEME);
    let hints = analyzer.hints(&[HintKind::Mixin, HintKind::Function]);

    let mixin = find_hint(hints, HintKind::Mixin, "button");
    assert_eq!(
        mixin.definition.as_deref(),
        Some("button($a, [$b : 10px], $rest...)")
    );
    assert_eq!(mixin.range, Span::from_coords(6, 7, 6, 13));
    assert_eq!(mixin.depth, 0);

    let function = find_hint(hints, HintKind::Function, "double");
    assert_eq!(function.definition.as_deref(), Some("double($n)"));
}

#[test]
fn test_return_is_not_a_function() {
    let values = all_values("@function f() { @return 1; }", HintKind::Function);
    assert_eq!(values, vec!["f"]);
}

#[test]
fn test_every_kind_present_in_map() {
    let mut analyzer = analyzer("");
    let hints = analyzer.all_hints();
    assert!(hints.is_empty());
    assert_eq!(hints.iter().count(), HintKind::ALL.len());
}
