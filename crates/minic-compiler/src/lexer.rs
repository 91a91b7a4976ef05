//! Lexer for minic source text.
//!
//! Produces span-based tokens; text is sliced from the source only when
//! needed. Whitespace and comments are skipped by the lexer itself, so the
//! parser never sees trivia.
//!
//! ## Error handling
//!
//! Consecutive unrecognized characters are coalesced into single `Garbage`
//! tokens rather than one error per character. `Garbage` is not an
//! immediate error: `#include <stdio.h>` legitimately contains lexemes the
//! token grammar does not cover, and the include production consumes them
//! verbatim. Anywhere else the parser rejects them.

use logos::Logos;
use std::ops::Range;

use crate::span::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip(r"//[^\n]*", allow_greedy = true))]
#[logos(skip r"/\*(?:[^*]|\*[^/])*\*/")]
pub enum TokenKind {
    #[token("class")]
    Class,

    #[token("public")]
    Public,

    #[token("private")]
    Private,

    #[token("if")]
    If,

    #[token("else")]
    Else,

    #[token("while")]
    While,

    #[token("do")]
    Do,

    #[token("for")]
    For,

    #[token("return")]
    Return,

    #[token("print")]
    Print,

    #[token("include")]
    Include,

    #[token("int")]
    Int,

    #[token("float")]
    Float,

    #[token("double")]
    Double,

    #[token("char")]
    Char,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,

    #[token(";")]
    Semicolon,

    #[token(",")]
    Comma,

    #[token("#")]
    Sharp,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("=")]
    Assign,

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

    #[token("==")]
    EqEq,

    #[token("!=")]
    BangEq,

    #[token("<")]
    Lt,

    #[token("<=")]
    Le,

    #[token(">")]
    Gt,

    #[token(">=")]
    Ge,

    #[token("&&")]
    AmpAmp,

    #[token("||")]
    PipePipe,

    #[token("!")]
    Bang,

    #[regex(r#""[^"\n]*""#)]
    StringLiteral,

    /// Split out of `StringLiteral` by [`lex`]; never produced by logos.
    DoubleQuote,

    /// Content between the quotes; split out of `StringLiteral` by [`lex`].
    StringText,

    /// Coalesced run of unrecognized characters.
    Garbage,

    /// End-of-input sentinel used by the parser; never stored in the vector.
    Eof,
}

impl TokenKind {
    /// Declared primitive type keywords.
    pub fn is_primitive_type(self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Double | Self::Char)
    }

    /// Keywords that open a control statement.
    pub fn is_control_keyword(self) -> bool {
        matches!(
            self,
            Self::If | Self::Else | Self::While | Self::Do | Self::For
        )
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Post-processes the logos output:
/// - Coalesces consecutive lexer errors into single `Garbage` tokens
/// - Splits `StringLiteral` tokens into quote + content + quote
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    // Start and end of the current error run; skipped trivia between two
    // runs merges them, which is fine for garbage.
    let mut error_span: Option<(usize, usize)> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some((start, end)) = error_span.take() {
                    tokens.push(Token::new(TokenKind::Garbage, (start..end).into()));
                }

                let span = lexer.span();
                if kind == TokenKind::StringLiteral {
                    split_string_literal(span, &mut tokens);
                } else {
                    tokens.push(Token::new(kind, span.into()));
                }
            }
            Some(Err(())) => {
                let span = lexer.span();
                error_span = match error_span {
                    Some((start, _)) => Some((start, span.end)),
                    None => Some((span.start, span.end)),
                };
            }
            None => {
                if let Some((start, end)) = error_span.take() {
                    tokens.push(Token::new(TokenKind::Garbage, (start..end).into()));
                }
                break;
            }
        }
    }

    tokens
}

/// Splits a string literal token into: quote + content + quote.
/// The content token is omitted for the empty string `""`.
fn split_string_literal(span: Range<usize>, tokens: &mut Vec<Token>) {
    let start = span.start;
    let end = span.end;

    tokens.push(Token::new(TokenKind::DoubleQuote, (start..start + 1).into()));
    if end - start > 2 {
        tokens.push(Token::new(TokenKind::StringText, (start + 1..end - 1).into()));
    }
    tokens.push(Token::new(TokenKind::DoubleQuote, (end - 1..end).into()));
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[Range::<usize>::from(token.span)]
}
