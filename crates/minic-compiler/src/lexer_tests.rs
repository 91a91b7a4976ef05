use crate::lexer::{TokenKind, lex, token_text};

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

fn texts(source: &str) -> Vec<String> {
    lex(source)
        .iter()
        .map(|t| token_text(source, t).to_string())
        .collect()
}

#[test]
fn empty_input() {
    assert_eq!(kinds(""), vec![]);
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        kinds("class Main { int a; }"),
        vec![
            TokenKind::Class,
            TokenKind::Ident,
            TokenKind::BraceOpen,
            TokenKind::Int,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::BraceClose,
        ]
    );
}

#[test]
fn keyword_prefix_is_still_an_identifier() {
    assert_eq!(kinds("classy integer"), vec![TokenKind::Ident, TokenKind::Ident]);
}

#[test]
fn two_char_operators_win_over_one_char() {
    assert_eq!(
        kinds("<= >= == != && || < > = !"),
        vec![
            TokenKind::Le,
            TokenKind::Ge,
            TokenKind::EqEq,
            TokenKind::BangEq,
            TokenKind::AmpAmp,
            TokenKind::PipePipe,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Assign,
            TokenKind::Bang,
        ]
    );
}

#[test]
fn numbers_keep_their_lexemes() {
    assert_eq!(texts("0 42 3.14"), vec!["0", "42", "3.14"]);
    assert_eq!(
        kinds("0 42 3.14"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Number]
    );
}

#[test]
fn string_literal_splits_into_quote_text_quote() {
    let source = r#"print("hi there")"#;
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Print,
            TokenKind::ParenOpen,
            TokenKind::DoubleQuote,
            TokenKind::StringText,
            TokenKind::DoubleQuote,
            TokenKind::ParenClose,
        ]
    );
    assert_eq!(texts(source)[3], "hi there");
}

#[test]
fn empty_string_has_no_text_token() {
    assert_eq!(
        kinds(r#""""#),
        vec![TokenKind::DoubleQuote, TokenKind::DoubleQuote]
    );
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("// line\nint /* block */ a;"),
        vec![TokenKind::Int, TokenKind::Ident, TokenKind::Semicolon]
    );
}

#[test]
fn garbage_runs_coalesce() {
    assert_eq!(
        kinds("a @@@ b"),
        vec![TokenKind::Ident, TokenKind::Garbage, TokenKind::Ident]
    );
    assert_eq!(texts("a @@@ b")[1], "@@@");
}

#[test]
fn garbage_at_end_of_input() {
    assert_eq!(kinds("a $"), vec![TokenKind::Ident, TokenKind::Garbage]);
}

#[test]
fn spans_slice_back_into_the_source() {
    let source = "int abc = 5;";
    let tokens = lex(source);
    assert_eq!(token_text(source, &tokens[1]), "abc");
    assert_eq!(tokens[1].span.start, 4);
    assert_eq!(tokens[1].span.end, 7);
}
