//! Recursive-descent parser for minic.
//!
//! # Architecture
//!
//! The parser walks a pre-lexed token vector with a single forward-only
//! cursor and at most three tokens of lookahead, used for statement
//! classification (see `core::Sentence`). Statements build arena nodes
//! directly; infix expressions go through a shunting-yard pass first
//! (`expr`). The first syntax fault aborts the parse - there is no
//! recovery, so the result is either a complete tree or one error.
//!
//! # Grammar (EBNF-ish)
//!
//! ```text
//! class       = "class" IDENT "{" top_decl* "}"
//! top_decl    = include | var_decl | func_decl
//! include     = "#" "include" <lexemes until two '"' or ">">
//! func_decl   = ("public" | "private") type IDENT "(" param_list? ")" (block | ";")
//! param_list  = type IDENT ("," type IDENT)*
//! block       = "{" block_item* "}"
//! block_item  = var_decl | assignment | call | control | return | print | ";"
//! var_decl    = type declarator ("," declarator)* ";"
//! declarator  = IDENT | IDENT "[" NUMBER "]" ("=" "{" NUMBER ("," NUMBER)* "}")?
//! assignment  = IDENT ("[" expr "]")? "=" expr stop
//! control     = if | while | for
//! if          = "if" "(" expr ")" block ("else" (if | block))?
//! while       = "while" "(" expr ")" block
//! for         = "for" "(" assignment expr ";" assignment ")" block
//! print       = "print" "(" print_arg ("," print_arg)* ")" ";"?
//! print_arg   = STRING | expr
//! call        = IDENT "(" (expr ("," expr)*)? ")" ";"?
//! return      = "return" (";" | expr ";")
//! expr        = infix over + - * / % ! && || == != < <= > >=, "(" ")",
//!               NUMBER, IDENT, IDENT "[" expr "]"
//! ```
//!
//! `for` never survives parsing: it desugars into its init assignment
//! followed by a `While` whose body ends with the step assignment.

mod core;
mod error;
mod expr;
mod grammar;

#[cfg(test)]
mod expr_tests;
#[cfg(test)]
mod grammar_tests;

pub use error::{SyntaxError, render_error};

use crate::lexer::{Token, lex};
use crate::syntax::SyntaxTree;
use core::Parser;

/// Parse source text into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxTree, SyntaxError> {
    parse_tokens(source, lex(source))
}

/// Parse a pre-lexed token stream against its source text.
pub fn parse_tokens(source: &str, tokens: Vec<Token>) -> Result<SyntaxTree, SyntaxError> {
    let mut parser = Parser::new(source, tokens);
    parser.parse_class()?;
    Ok(parser.finish())
}
