//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree.
//! Node kinds follow the structure SCSS tooling commonly exposes
//! (`ruleset`, `selector`, `block`, `declaration`, `value`, ...), so the
//! analyzer can match on ancestry paths such as `ruleset.selector.class.ident`.

/// All syntax kinds (tokens and nodes) in SCSS
///
/// Tokens are leaf nodes (identifiers, literals, punctuation).
/// Nodes are composite (rulesets, blocks, declarations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,       // color, -webkit-box
    NUMBER,      // 10, 0.5, .5
    STRING,      // "foo" or 'foo'
    DOLLAR_NAME, // $name
    HASH_NAME,   // #name (id selector or color)
    AT_KEYWORD,  // @mixin
    BANG_FLAG,   // !global, !default, !important
    URL_RAW,     // url(foo.css)

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    HASH_L_BRACE, // #{
    L_BRACE,      // {
    R_BRACE,      // }
    L_PAREN,      // (
    R_PAREN,      // )
    L_BRACKET,    // [
    R_BRACKET,    // ]
    SEMICOLON,    // ;
    COLON,        // :
    COLON_COLON,  // ::
    COMMA,        // ,
    DOT,          // .
    ELLIPSIS,     // ...
    AMP,          // &
    GT,           // >
    LT,           // <
    GT_EQ,        // >=
    LT_EQ,        // <=
    EQ,           // =
    EQ_EQ,        // ==
    BANG_EQ,      // !=
    PLUS,         // +
    MINUS,        // -
    STAR,         // *
    SLASH,        // /
    PERCENT,      // %
    TILDE,        // ~
    CARET,        // ^
    PIPE,         // |
    DOLLAR,       // $
    HASH,         // #
    AT,           // @
    BANG,         // !

    // =========================================================================
    // LOWERED TERMINALS (produced by the annotator, never by the lexer)
    // =========================================================================
    SPACE,
    DELIMITER,
    PROPERTY_DELIMITER,
    DECLARATION_DELIMITER,
    COLOR,
    RAW,

    // =========================================================================
    // NODES
    // =========================================================================
    STYLESHEET,
    RULESET,
    SELECTOR,
    CLASS,
    ID,
    PLACEHOLDER,
    TYPE_SELECTOR,
    PARENT_SELECTOR,
    PSEUDO_CLASS,
    PSEUDO_ELEMENT,
    ATTRIBUTE_SELECTOR,
    ATTRIBUTE_NAME,
    ATTRIBUTE_MATCH,
    ATTRIBUTE_VALUE,
    BLOCK,
    DECLARATION,
    PROPERTY,
    VALUE,
    VARIABLE,
    VARIABLES_LIST,
    ARGUMENTS,
    FUNCTION,
    INTERPOLATION,
    PARENTHESES,
    DIMENSION,
    PERCENTAGE,
    URI,
    ATRULE,
    ATKEYWORD,
    MIXIN,
    INCLUDE,
    GLOBAL,
    DEFAULT,
    IMPORTANT,
    OPTIONAL,

    ERROR,

    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a comment token
    pub fn is_comment(self) -> bool {
        matches!(self, Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Separator kinds pruned from the annotated tree outside value contexts
    pub fn is_separator(self) -> bool {
        matches!(
            self,
            Self::SPACE | Self::PROPERTY_DELIMITER | Self::DECLARATION_DELIMITER | Self::DELIMITER
        )
    }

    /// Dotted type-path segment for this kind (`ruleset`, `attributeName`, ...)
    pub fn path_name(self) -> &'static str {
        match self {
            Self::WHITESPACE | Self::SPACE => "space",
            Self::LINE_COMMENT => "singlelineComment",
            Self::BLOCK_COMMENT => "multilineComment",
            Self::IDENT | Self::DOLLAR_NAME | Self::HASH_NAME | Self::AT_KEYWORD => "ident",
            Self::NUMBER => "number",
            Self::STRING => "string",
            Self::BANG_FLAG => "flag",
            Self::URL_RAW | Self::RAW => "raw",
            Self::COLOR => "color",
            Self::DELIMITER | Self::COMMA => "delimiter",
            Self::PROPERTY_DELIMITER => "propertyDelimiter",
            Self::DECLARATION_DELIMITER | Self::SEMICOLON => "declarationDelimiter",
            Self::STYLESHEET => "stylesheet",
            Self::RULESET => "ruleset",
            Self::SELECTOR => "selector",
            Self::CLASS => "class",
            Self::ID => "id",
            Self::PLACEHOLDER => "placeholder",
            Self::TYPE_SELECTOR => "typeSelector",
            Self::PARENT_SELECTOR => "parentSelector",
            Self::PSEUDO_CLASS => "pseudoClass",
            Self::PSEUDO_ELEMENT => "pseudoElement",
            Self::ATTRIBUTE_SELECTOR => "attributeSelector",
            Self::ATTRIBUTE_NAME => "attributeName",
            Self::ATTRIBUTE_MATCH => "attributeMatch",
            Self::ATTRIBUTE_VALUE => "attributeValue",
            Self::BLOCK => "block",
            Self::DECLARATION => "declaration",
            Self::PROPERTY => "property",
            Self::VALUE => "value",
            Self::VARIABLE => "variable",
            Self::VARIABLES_LIST => "variablesList",
            Self::ARGUMENTS => "arguments",
            Self::FUNCTION => "function",
            Self::INTERPOLATION => "interpolation",
            Self::PARENTHESES => "parentheses",
            Self::DIMENSION => "dimension",
            Self::PERCENTAGE => "percentage",
            Self::URI => "uri",
            Self::ATRULE => "atrule",
            Self::ATKEYWORD => "atkeyword",
            Self::MIXIN => "mixin",
            Self::INCLUDE => "include",
            Self::GLOBAL => "global",
            Self::DEFAULT => "default",
            Self::IMPORTANT => "important",
            Self::OPTIONAL => "optional",
            Self::ERROR | Self::__LAST => "error",
            _ => "operator",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScssLanguage {}

impl rowan::Language for ScssLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<ScssLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ScssLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ScssLanguage>;
