//! Recursive descent parser for SCSS
//!
//! Builds a rowan GreenNode tree from tokens.
//! Produces a lossless CST and collects errors instead of stopping.

use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self {
            message: message.into(),
            range,
        }
    }
}

/// Parse SCSS source code into a CST
pub fn parse_scss(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens, TextSize::of(input));
    parser.parse_stylesheet();
    parser.finish()
}

/// Tokens that may appear between an attribute name and its value
const ATTRIBUTE_MATCH_TOKENS: &[SyntaxKind] = &[
    SyntaxKind::EQ,
    SyntaxKind::TILDE,
    SyntaxKind::CARET,
    SyntaxKind::DOLLAR,
    SyntaxKind::STAR,
    SyntaxKind::PIPE,
];

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    end: TextSize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>], end: TextSize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Look ahead `n` significant tokens, skipping trivia
    fn nth(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
    }

    /// Look ahead `n` raw tokens, trivia included (adjacency checks)
    fn nth_raw(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.bump_as(token.kind);
        }
    }

    /// Consume the current token, recording it under `kind`
    fn bump_as(&mut self, kind: SyntaxKind) {
        if let Some(token) = self.current() {
            let (token_kind, text) = (token.kind, token.text);
            if token_kind == SyntaxKind::ERROR {
                self.error(format!("unexpected character {:?}", text));
            }
            self.builder.token(kind.into(), text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {}", what));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    /// Skip trivia only if the next significant token is `kind`
    fn skip_trivia_before(&mut self, kind: SyntaxKind) -> bool {
        if self.nth(0) == Some(kind) {
            self.skip_trivia();
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn error(&mut self, message: impl Into<String>) {
        let range = self
            .current()
            .map(|t| TextRange::at(t.offset, TextSize::of(t.text)))
            .unwrap_or_else(|| TextRange::empty(self.end));
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_and_bump(&mut self, message: impl Into<String>) {
        self.error(message);
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        self.finish_node();
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    /// Wrap the current token in a single-token node
    fn wrap_token(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump();
        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: statements
    // =========================================================================

    /// Stylesheet = Item*
    fn parse_stylesheet(&mut self) {
        self.start_node(SyntaxKind::STYLESHEET);

        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            let pos_before = self.pos;
            if self.at(SyntaxKind::R_BRACE) {
                self.error_and_bump("unexpected '}'");
            } else {
                self.parse_item();
            }
            if self.pos == pos_before {
                self.error_and_bump(format!("stuck on token: {:?}", self.current_kind()));
            }
        }

        self.finish_node();
    }

    /// Item = AtRule | Declaration | Ruleset | ';'
    fn parse_item(&mut self) {
        match self.current_kind() {
            SyntaxKind::SEMICOLON => self.bump(),
            SyntaxKind::AT_KEYWORD => self.parse_at_rule(),
            _ if self.is_declaration_ahead() => self.parse_declaration(),
            _ => self.parse_ruleset(),
        }
    }

    /// Decide between a declaration and a ruleset.
    ///
    /// A ruleset reaches `{` before any top-level `;` or `}`.
    fn is_declaration_ahead(&self) -> bool {
        if self.at(SyntaxKind::DOLLAR_NAME) && self.nth(1) == Some(SyntaxKind::COLON) {
            return true;
        }

        let mut nesting = 0usize;
        let mut interpolation = 0usize;
        for token in &self.tokens[self.pos..] {
            match token.kind {
                SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => nesting += 1,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => nesting = nesting.saturating_sub(1),
                SyntaxKind::HASH_L_BRACE => interpolation += 1,
                SyntaxKind::R_BRACE if interpolation > 0 => interpolation -= 1,
                SyntaxKind::L_BRACE if nesting == 0 && interpolation == 0 => return false,
                SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE if nesting == 0 => return true,
                _ => {}
            }
        }
        true
    }

    /// Declaration = Property ':' Value
    fn parse_declaration(&mut self) {
        self.start_node(SyntaxKind::DECLARATION);

        self.start_node(SyntaxKind::PROPERTY);
        if self.at(SyntaxKind::DOLLAR_NAME) {
            self.wrap_token(SyntaxKind::VARIABLE);
        } else {
            self.parse_property_name();
        }
        self.finish_node();

        self.skip_trivia_before(SyntaxKind::COLON);
        if self.expect(SyntaxKind::COLON, "':' after property") {
            self.skip_trivia();
            self.parse_value(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]);
        }

        self.finish_node();
    }

    /// Plain property name, possibly interpolated (`#{$side}-margin`)
    fn parse_property_name(&mut self) {
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::COLON | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE
                | SyntaxKind::L_BRACE => break,
                kind if kind.is_trivia() => {
                    if self.nth(0) == Some(SyntaxKind::COLON) {
                        break;
                    }
                    self.bump();
                }
                SyntaxKind::HASH_L_BRACE => self.parse_interpolation(),
                _ => self.bump(),
            }
        }
    }

    /// Ruleset = Selector Block
    fn parse_ruleset(&mut self) {
        self.start_node(SyntaxKind::RULESET);

        self.parse_selector();
        self.skip_trivia_before(SyntaxKind::L_BRACE);
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            self.error("expected '{' after selector");
        }

        self.finish_node();
    }

    /// Block = '{' Item* '}'
    fn parse_block(&mut self) {
        self.start_node(SyntaxKind::BLOCK);
        self.bump(); // {

        loop {
            self.skip_trivia();
            if self.at_eof() {
                self.error("unclosed block, expected '}'");
                break;
            }
            if self.eat(SyntaxKind::R_BRACE) {
                break;
            }
            let pos_before = self.pos;
            self.parse_item();
            if self.pos == pos_before {
                self.error_and_bump(format!("stuck on token: {:?}", self.current_kind()));
            }
        }

        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: at-rules
    // =========================================================================

    fn parse_at_rule(&mut self) {
        let name = self.current_text()[1..].to_ascii_lowercase();
        match name.as_str() {
            "mixin" => self.parse_mixin(),
            "include" => self.parse_include(),
            _ => self.parse_generic_at_rule(),
        }
    }

    fn parse_at_keyword(&mut self) {
        self.wrap_token(SyntaxKind::ATKEYWORD);
    }

    /// Mixin = '@mixin' Ident Arguments? Block
    fn parse_mixin(&mut self) {
        self.start_node(SyntaxKind::MIXIN);
        self.parse_at_keyword();

        self.skip_trivia();
        if !self.eat(SyntaxKind::IDENT) {
            self.error("expected mixin name");
        }
        if self.skip_trivia_before(SyntaxKind::L_PAREN) {
            self.parse_arguments();
        }
        self.skip_trivia_before(SyntaxKind::L_BRACE);
        if self.at(SyntaxKind::L_BRACE) {
            self.parse_block();
        } else {
            self.error("expected '{' after mixin signature");
        }

        self.finish_node();
    }

    /// Include = '@include' Name Arguments? Block?
    fn parse_include(&mut self) {
        self.start_node(SyntaxKind::INCLUDE);
        self.parse_at_keyword();

        self.skip_trivia();
        if self.eat(SyntaxKind::IDENT) {
            // Namespaced mixins: `@include theme.button;`
            while self.at(SyntaxKind::DOT) && self.nth_raw(1) == Some(SyntaxKind::IDENT) {
                self.bump();
                self.bump();
            }
        } else {
            self.error("expected mixin name after @include");
        }
        if self.skip_trivia_before(SyntaxKind::L_PAREN) {
            self.parse_arguments();
        }
        self.parse_components(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]);
        if self.skip_trivia_before(SyntaxKind::L_BRACE) {
            self.parse_block();
        }

        self.finish_node();
    }

    /// AtRule = AtKeyword Prelude (Block | ';')
    fn parse_generic_at_rule(&mut self) {
        self.start_node(SyntaxKind::ATRULE);
        self.parse_at_keyword();

        self.parse_components(&[SyntaxKind::SEMICOLON, SyntaxKind::R_BRACE]);
        if self.skip_trivia_before(SyntaxKind::L_BRACE) {
            self.parse_block();
        }

        self.finish_node();
    }

    // =========================================================================
    // Grammar rules: selectors
    // =========================================================================

    fn parse_selector(&mut self) {
        self.start_node(SyntaxKind::SELECTOR);

        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::SEMICOLON | SyntaxKind::R_BRACE => break,
                kind if kind.is_trivia() => {
                    if self.nth(0) == Some(SyntaxKind::L_BRACE) {
                        break;
                    }
                    self.bump();
                }
                SyntaxKind::DOT => match self.nth_raw(1) {
                    Some(SyntaxKind::IDENT) => {
                        self.start_node(SyntaxKind::CLASS);
                        self.bump();
                        self.bump();
                        self.finish_node();
                    }
                    Some(SyntaxKind::HASH_L_BRACE) => {
                        self.start_node(SyntaxKind::CLASS);
                        self.bump();
                        self.parse_interpolation();
                        self.finish_node();
                    }
                    _ => self.bump(),
                },
                SyntaxKind::HASH_NAME => self.wrap_token(SyntaxKind::ID),
                SyntaxKind::PERCENT if self.nth_raw(1) == Some(SyntaxKind::IDENT) => {
                    self.start_node(SyntaxKind::PLACEHOLDER);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                SyntaxKind::IDENT => self.wrap_token(SyntaxKind::TYPE_SELECTOR),
                SyntaxKind::AMP => self.wrap_token(SyntaxKind::PARENT_SELECTOR),
                SyntaxKind::L_BRACKET => self.parse_attribute_selector(),
                SyntaxKind::COLON => self.parse_pseudo(SyntaxKind::PSEUDO_CLASS),
                SyntaxKind::COLON_COLON => self.parse_pseudo(SyntaxKind::PSEUDO_ELEMENT),
                SyntaxKind::HASH_L_BRACE => self.parse_interpolation(),
                _ => self.bump(),
            }
        }

        self.finish_node();
    }

    /// AttributeSelector = '[' AttributeName (AttributeMatch AttributeValue Flag?)? ']'
    fn parse_attribute_selector(&mut self) {
        self.start_node(SyntaxKind::ATTRIBUTE_SELECTOR);
        self.bump(); // [

        self.skip_trivia();
        if self.at(SyntaxKind::IDENT) {
            self.wrap_token(SyntaxKind::ATTRIBUTE_NAME);
        } else {
            self.error("expected attribute name");
        }

        self.skip_trivia();
        if self.at_any(ATTRIBUTE_MATCH_TOKENS) {
            self.start_node(SyntaxKind::ATTRIBUTE_MATCH);
            while self.at_any(ATTRIBUTE_MATCH_TOKENS) {
                self.bump();
            }
            self.finish_node();

            self.skip_trivia();
            if self.at_any(&[SyntaxKind::STRING, SyntaxKind::IDENT, SyntaxKind::NUMBER]) {
                self.wrap_token(SyntaxKind::ATTRIBUTE_VALUE);
            } else {
                self.error("expected attribute value");
            }
            self.skip_trivia();
            // Case-sensitivity flag: [type="a" i]
            self.eat(SyntaxKind::IDENT);
        }

        self.skip_trivia();
        self.expect(SyntaxKind::R_BRACKET, "']' to close attribute selector");
        self.finish_node();
    }

    fn parse_pseudo(&mut self, kind: SyntaxKind) {
        self.start_node(kind);
        self.bump(); // : or ::
        if self.eat(SyntaxKind::IDENT) && self.at(SyntaxKind::L_PAREN) {
            self.parse_pseudo_arguments();
        }
        self.finish_node();
    }

    /// Pseudo-class arguments are kept as raw tokens: `:not(.a)`, `:nth-child(2n+1)`
    fn parse_pseudo_arguments(&mut self) {
        let mut depth = 0usize;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_PAREN => depth += 1,
                SyntaxKind::R_PAREN => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return;
                    }
                }
                SyntaxKind::L_BRACE | SyntaxKind::R_BRACE | SyntaxKind::SEMICOLON => break,
                _ => {}
            }
            self.bump();
        }
        self.error("expected ')' to close pseudo-class arguments");
    }

    // =========================================================================
    // Grammar rules: values
    // =========================================================================

    fn parse_value(&mut self, stops: &[SyntaxKind]) {
        self.start_node(SyntaxKind::VALUE);
        self.parse_components(stops);
        self.finish_node();
    }

    /// Value components up to (not including) a stop token.
    ///
    /// Trailing trivia before the stop is left to the caller so value nodes
    /// end at their last significant token.
    fn parse_components(&mut self, stops: &[SyntaxKind]) {
        while !self.at_eof() {
            let kind = self.current_kind();
            if stops.contains(&kind) {
                break;
            }
            match kind {
                _ if kind.is_trivia() => {
                    match self.nth(0) {
                        None => break,
                        Some(next) if stops.contains(&next) || next == SyntaxKind::L_BRACE => {
                            break;
                        }
                        _ => self.bump(),
                    }
                }
                SyntaxKind::L_BRACE | SyntaxKind::R_BRACE => break,
                SyntaxKind::R_PAREN | SyntaxKind::R_BRACKET => {
                    self.error_and_bump(format!("unbalanced {:?}", self.current_text()));
                }
                _ => self.parse_component(),
            }
        }
    }

    fn parse_component(&mut self) {
        match self.current_kind() {
            SyntaxKind::DOLLAR_NAME => self.wrap_token(SyntaxKind::VARIABLE),
            SyntaxKind::HASH_NAME => self.bump_as(SyntaxKind::COLOR),
            SyntaxKind::HASH_L_BRACE => self.parse_interpolation(),
            SyntaxKind::NUMBER => match self.nth_raw(1) {
                Some(SyntaxKind::IDENT) => {
                    self.start_node(SyntaxKind::DIMENSION);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                Some(SyntaxKind::PERCENT) => {
                    self.start_node(SyntaxKind::PERCENTAGE);
                    self.bump();
                    self.bump();
                    self.finish_node();
                }
                _ => self.bump(),
            },
            SyntaxKind::IDENT if self.nth_raw(1) == Some(SyntaxKind::L_PAREN) => {
                if self.current_text().eq_ignore_ascii_case("url") {
                    self.parse_uri();
                } else {
                    self.parse_function();
                }
            }
            SyntaxKind::URL_RAW => self.wrap_token(SyntaxKind::URI),
            SyntaxKind::L_PAREN | SyntaxKind::L_BRACKET => self.parse_parentheses(),
            SyntaxKind::BANG_FLAG => {
                let flag = self.current_text()[1..].trim_start().to_ascii_lowercase();
                match flag.as_str() {
                    "global" => self.wrap_token(SyntaxKind::GLOBAL),
                    "default" => self.wrap_token(SyntaxKind::DEFAULT),
                    "important" => self.wrap_token(SyntaxKind::IMPORTANT),
                    "optional" => self.wrap_token(SyntaxKind::OPTIONAL),
                    _ => self.bump(),
                }
            }
            _ => self.bump(),
        }
    }

    /// Interpolation = '#{' Components '}'
    fn parse_interpolation(&mut self) {
        self.start_node(SyntaxKind::INTERPOLATION);
        self.bump(); // #{
        self.skip_trivia();
        self.parse_components(&[SyntaxKind::R_BRACE]);
        self.skip_trivia();
        self.expect(SyntaxKind::R_BRACE, "'}' to close interpolation");
        self.finish_node();
    }

    /// Parentheses = '(' Components ')' | '[' Components ']'
    fn parse_parentheses(&mut self) {
        let close = if self.at(SyntaxKind::L_PAREN) {
            SyntaxKind::R_PAREN
        } else {
            SyntaxKind::R_BRACKET
        };
        self.start_node(SyntaxKind::PARENTHESES);
        self.bump();
        self.skip_trivia();
        self.parse_components(&[close]);
        self.skip_trivia();
        self.expect(close, "closing bracket");
        self.finish_node();
    }

    /// Function = Ident Arguments
    fn parse_function(&mut self) {
        self.start_node(SyntaxKind::FUNCTION);
        self.bump(); // name
        self.parse_arguments();
        self.finish_node();
    }

    /// Uri = 'url' '(' (String | Components) ')'
    fn parse_uri(&mut self) {
        self.start_node(SyntaxKind::URI);
        self.bump(); // url
        self.bump(); // (
        self.skip_trivia();
        self.parse_components(&[SyntaxKind::R_PAREN]);
        self.skip_trivia();
        self.expect(SyntaxKind::R_PAREN, "')' to close url()");
        self.finish_node();
    }

    /// Arguments = '(' (Argument (',' Argument)*)? ')'
    ///
    /// Shared by mixin/function definitions and by calls, so a single shape
    /// covers `$a`, `$b: default` and `$rest...`.
    fn parse_arguments(&mut self) {
        self.start_node(SyntaxKind::ARGUMENTS);
        self.bump(); // (

        loop {
            self.skip_trivia();
            if self.at_eof()
                || self.at_any(&[
                    SyntaxKind::R_PAREN,
                    SyntaxKind::L_BRACE,
                    SyntaxKind::R_BRACE,
                    SyntaxKind::SEMICOLON,
                ])
            {
                break;
            }
            self.parse_argument();
            self.skip_trivia();
            if !self.eat(SyntaxKind::COMMA) {
                break;
            }
        }

        self.skip_trivia();
        self.expect(SyntaxKind::R_PAREN, "')' to close argument list");
        self.finish_node();
    }

    fn parse_argument(&mut self) {
        if self.at(SyntaxKind::DOLLAR_NAME) {
            match self.nth(1) {
                Some(SyntaxKind::COLON) => {
                    self.start_node(SyntaxKind::DECLARATION);
                    self.start_node(SyntaxKind::PROPERTY);
                    self.wrap_token(SyntaxKind::VARIABLE);
                    self.finish_node();
                    self.skip_trivia();
                    self.bump(); // :
                    self.skip_trivia();
                    self.parse_value(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]);
                    self.finish_node();
                    return;
                }
                Some(SyntaxKind::ELLIPSIS) => {
                    self.start_node(SyntaxKind::VARIABLES_LIST);
                    self.wrap_token(SyntaxKind::VARIABLE);
                    self.skip_trivia();
                    self.bump(); // ...
                    self.finish_node();
                    return;
                }
                _ => {}
            }
        }
        self.parse_components(&[SyntaxKind::COMMA, SyntaxKind::R_PAREN]);
    }
}
