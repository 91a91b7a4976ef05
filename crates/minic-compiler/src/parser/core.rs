//! Core parser state and low-level operations.
//!
//! The token stream is processed left-to-right with a cursor that only
//! moves forward; every production either consumes exactly the tokens it
//! recognized or raises. Statement dispatch peeks at most three tokens
//! ahead and each classification is terminal.

use crate::lexer::{Token, TokenKind, token_text};
use crate::span::Span;
use crate::syntax::{NodeKind, SyntaxTree};

use super::error::SyntaxError;

/// What the next tokens look like at a statement position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sentence {
    /// `print (...)`
    Print,
    /// `# include ...`
    Include,
    /// `if` / `else` / `do` / `while` / `for`
    Control,
    /// `public` / `private` function declaration
    Function,
    /// primitive type, identifier, then `;` / `[` / `,`
    Declaration,
    /// identifier followed by `=` or `[`
    Assignment,
    /// identifier followed by `(`
    Call,
    /// `return`
    Return,
    /// `}`
    BlockEnd,
    /// stray `;`
    Empty,
    /// none of the patterns matched
    Unknown,
}

pub(super) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    /// Current position in `tokens`. Monotonically increases.
    pos: usize,
    pub(super) tree: SyntaxTree,
}

impl<'src> Parser<'src> {
    pub(super) fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        // Placeholder root; `parse_class` replaces it once the real class
        // name has been read.
        let tree = SyntaxTree::new(
            NodeKind::Class {
                name: String::new(),
            },
            Span::empty(0),
        );
        Self {
            source,
            tokens,
            pos: 0,
            tree,
        }
    }

    pub(super) fn finish(self) -> SyntaxTree {
        self.tree
    }

    /// Current token kind. Returns `Eof` past the end.
    pub(super) fn current(&self) -> TokenKind {
        self.nth(0)
    }

    /// Lookahead by `n` tokens (0 = current).
    pub(super) fn nth(&self, lookahead: usize) -> TokenKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(TokenKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map_or_else(|| Span::empty(self.source.len() as u32), |t| t.span)
    }

    /// Lexeme of the current token; empty at EOF.
    pub(super) fn current_text(&self) -> &'src str {
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.current() == kind
    }

    /// Consume the current token unconditionally.
    pub(super) fn bump(&mut self) {
        debug_assert!(!self.eof(), "bump called at EOF");
        self.pos += 1;
    }

    /// Consume the current token, returning its lexeme.
    pub(super) fn bump_text(&mut self) -> &'src str {
        let text = self.current_text();
        self.bump();
        text
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or raise with `message` at the current token.
    pub(super) fn expect(&mut self, kind: TokenKind, message: &str) -> Result<(), SyntaxError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    /// Error at the current token.
    pub(super) fn error(&self, message: impl Into<String>) -> SyntaxError {
        SyntaxError::new(self.current_span(), message)
    }

    /// Classify the upcoming statement. Conservative: every arm is
    /// terminal, and anything unmatched is `Unknown` for the caller to
    /// reject.
    pub(super) fn classify(&self) -> Sentence {
        match self.current() {
            TokenKind::Print => Sentence::Print,
            TokenKind::Sharp => {
                if self.nth(1) == TokenKind::Include {
                    Sentence::Include
                } else {
                    Sentence::Unknown
                }
            }
            kind if kind.is_control_keyword() => Sentence::Control,
            TokenKind::Public | TokenKind::Private => Sentence::Function,
            kind if kind.is_primitive_type() => {
                if self.nth(1) == TokenKind::Ident
                    && matches!(
                        self.nth(2),
                        TokenKind::Semicolon | TokenKind::BracketOpen | TokenKind::Comma
                    )
                {
                    Sentence::Declaration
                } else {
                    Sentence::Unknown
                }
            }
            TokenKind::Ident => match self.nth(1) {
                TokenKind::Assign | TokenKind::BracketOpen => Sentence::Assignment,
                TokenKind::ParenOpen => Sentence::Call,
                _ => Sentence::Unknown,
            },
            TokenKind::Return => Sentence::Return,
            TokenKind::BraceClose => Sentence::BlockEnd,
            TokenKind::Semicolon => Sentence::Empty,
            _ => Sentence::Unknown,
        }
    }
}
