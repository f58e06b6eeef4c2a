//! Tests for parsing fixtures through the syntax layer.

use rstest::rstest;
use scss_hints::parser::SyntaxKind;
use scss_hints::syntax::parse_scss;
use scss_hints::Position;

use crate::helpers::source_fixtures::*;

#[rstest]
#[case(THEME)]
#[case(SELECTORS)]
#[case(IMPORTS)]
#[case(SIBLING_BLOCKS)]
fn test_fixtures_parse_losslessly(#[case] source: &str) {
    let file = parse_scss(source).unwrap();
    assert_eq!(file.syntax().to_string(), source);
    assert_eq!(file.syntax().kind(), SyntaxKind::STYLESHEET);
}

#[test]
fn test_large_fixture_parses() {
    let file = parse_scss(&LARGE_STYLESHEET).unwrap();
    let mixins = file
        .syntax()
        .descendants()
        .filter(|node| node.kind() == SyntaxKind::MIXIN)
        .count();
    assert_eq!(mixins, LARGE_BLOCKS);
}

#[rstest]
#[case(".a {", Position::new(0, 4), "unclosed block")]
#[case(".a { }\n}", Position::new(1, 0), "unexpected")]
#[case(".a { color red; }", Position::new(0, 14), "':' after property")]
#[case("@mixin { }", Position::new(0, 7), "mixin name")]
fn test_parse_error_positions(
    #[case] source: &str,
    #[case] position: Position,
    #[case] message: &str,
) {
    let err = parse_scss(source).unwrap_err();
    assert_eq!(err.position(), position, "{}", err);
    assert!(err.message.contains(message), "{}", err);
    assert!(!err.errors.is_empty());
}

#[test]
fn test_positions_from_offsets() {
    let file = parse_scss("$a: 1;\n.b {\n  c: $a;\n}\n").unwrap();
    assert_eq!(file.position(0.into()), Position::new(0, 0));
    assert_eq!(file.position(7.into()), Position::new(1, 0));
    assert_eq!(file.position(14.into()), Position::new(2, 2));
}
