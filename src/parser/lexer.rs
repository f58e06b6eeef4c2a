//! Logos-based lexer for SCSS
//!
//! Fast tokenization using the logos crate.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"-?-?([a-zA-Z_]|[^\x00-\x7F]|\\[^\n])([a-zA-Z0-9_-]|[^\x00-\x7F]|\\[^\n])*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+")]
    Number,

    #[regex(r#""([^"\\\n]|\\.)*""#)]
    #[regex(r#"'([^'\\\n]|\\.)*'"#)]
    String,

    #[regex(r"\$[a-zA-Z_-][a-zA-Z0-9_-]*")]
    DollarName,

    #[regex(r"#[a-zA-Z0-9_-]+")]
    HashName,

    #[regex(r"@[a-zA-Z_-][a-zA-Z0-9_-]*")]
    AtKeyword,

    #[regex(r"![ \t]*[a-zA-Z]+")]
    BangFlag,

    #[regex(r#"url\([ \t\r\n]*[^ \t\r\n"'()]*[ \t\r\n]*\)"#)]
    UrlRaw,

    // =========================================================================
    // MULTI-CHARACTER PUNCTUATION (must come before single-char)
    // =========================================================================
    #[token("#{")]
    HashLBrace,

    #[token("::")]
    ColonColon,

    #[token("...")]
    Ellipsis,

    #[token(">=")]
    GtEq,

    #[token("<=")]
    LtEq,

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    // =========================================================================
    // SINGLE-CHARACTER PUNCTUATION
    // =========================================================================
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("&")]
    Amp,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("~")]
    Tilde,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("$")]
    Dollar,
    #[token("#")]
    Hash,
    #[token("@")]
    At,
    #[token("!")]
    Bang,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            Ident => SyntaxKind::IDENT,
            Number => SyntaxKind::NUMBER,
            String => SyntaxKind::STRING,
            DollarName => SyntaxKind::DOLLAR_NAME,
            HashName => SyntaxKind::HASH_NAME,
            AtKeyword => SyntaxKind::AT_KEYWORD,
            BangFlag => SyntaxKind::BANG_FLAG,
            UrlRaw => SyntaxKind::URL_RAW,
            HashLBrace => SyntaxKind::HASH_L_BRACE,
            ColonColon => SyntaxKind::COLON_COLON,
            Ellipsis => SyntaxKind::ELLIPSIS,
            GtEq => SyntaxKind::GT_EQ,
            LtEq => SyntaxKind::LT_EQ,
            EqEq => SyntaxKind::EQ_EQ,
            BangEq => SyntaxKind::BANG_EQ,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            Semicolon => SyntaxKind::SEMICOLON,
            Colon => SyntaxKind::COLON,
            Comma => SyntaxKind::COMMA,
            Dot => SyntaxKind::DOT,
            Amp => SyntaxKind::AMP,
            Gt => SyntaxKind::GT,
            Lt => SyntaxKind::LT,
            Eq => SyntaxKind::EQ,
            Plus => SyntaxKind::PLUS,
            Minus => SyntaxKind::MINUS,
            Star => SyntaxKind::STAR,
            Slash => SyntaxKind::SLASH,
            Percent => SyntaxKind::PERCENT,
            Tilde => SyntaxKind::TILDE,
            Caret => SyntaxKind::CARET,
            Pipe => SyntaxKind::PIPE,
            Dollar => SyntaxKind::DOLLAR,
            Hash => SyntaxKind::HASH,
            At => SyntaxKind::AT,
            Bang => SyntaxKind::BANG,
        }
    }
}
