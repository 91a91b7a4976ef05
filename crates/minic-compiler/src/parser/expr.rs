//! Infix expression parsing.
//!
//! A shunting-yard pass converts the token stream (up to a caller-supplied
//! stop token) into reverse-Polish order, then an operand stack assembles
//! the subtree. Comparison canonicalization happens during assembly:
//! `>=` becomes `<` and `<=` becomes `>`, each with swapped operands, so
//! downstream passes only ever see `<`, `>`, `==`, `!=`.

use crate::lexer::TokenKind;
use crate::span::Span;
use crate::syntax::{BinaryOp, NodeId, NodeKind, UnaryOp};

use super::core::Parser;
use super::error::SyntaxError;

/// Operator as seen by the shunting yard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExprOp {
    Binary(BinaryOp),
    Unary(UnaryOp),
}

impl ExprOp {
    /// Binding strength. The stack pops only operators that bind strictly
    /// tighter than the incoming one, so equal levels stay on the stack.
    fn precedence(self) -> u8 {
        match self {
            ExprOp::Binary(op) => match op {
                BinaryOp::Or => 1,
                BinaryOp::And => 2,
                BinaryOp::Eq | BinaryOp::Ne => 3,
                BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => 4,
                BinaryOp::Add | BinaryOp::Sub => 5,
                BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 6,
            },
            ExprOp::Unary(_) => 7,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            ExprOp::Binary(op) => op.symbol(),
            ExprOp::Unary(op) => op.symbol(),
        }
    }
}

/// Operator stack entry: a pending operator or an unmatched `(`.
#[derive(Clone, Copy)]
enum StackEntry {
    Paren,
    Op(ExprOp, Span),
}

/// Reverse-Polish output element.
enum RpnItem {
    Operand(NodeId),
    Op(ExprOp, Span),
}

impl Parser<'_> {
    /// Parse an expression, consuming every token up to and including
    /// `stop`, and attach the resulting subtree under `parent`.
    ///
    /// When `stop` is `)`, a `)` only terminates the expression at paren
    /// depth zero; nested groups close their own `(` first.
    pub(super) fn parse_expression(
        &mut self,
        parent: NodeId,
        stop: TokenKind,
    ) -> Result<NodeId, SyntaxError> {
        let mut ops: Vec<StackEntry> = Vec::new();
        let mut rpn: Vec<RpnItem> = Vec::new();
        let mut paren_depth = 0usize;
        // Distinguishes binary from unary `-`: unary only at the start of
        // the expression or right after an operator or `(`.
        let mut prev_is_operand = false;

        loop {
            let kind = self.current();

            if kind == stop && (kind != TokenKind::ParenClose || paren_depth == 0) {
                break;
            }

            match kind {
                TokenKind::Eof => {
                    return Err(self.error(format!(
                        "in expression, expected token `{}` at the end",
                        stop_symbol(stop)
                    )));
                }
                TokenKind::Number => {
                    let span = self.current_span();
                    let value = self.bump_text().to_string();
                    let leaf = self.tree.alloc(NodeKind::Number { value }, span);
                    rpn.push(RpnItem::Operand(leaf));
                    prev_is_operand = true;
                }
                TokenKind::Ident => {
                    let span = self.current_span();
                    let name = self.bump_text().to_string();
                    let leaf = if self.eat(TokenKind::BracketOpen) {
                        let item = self.tree.alloc(NodeKind::Index { name }, span);
                        self.parse_expression(item, TokenKind::BracketClose)?;
                        item
                    } else {
                        self.tree.alloc(NodeKind::Variable { name }, span)
                    };
                    rpn.push(RpnItem::Operand(leaf));
                    prev_is_operand = true;
                }
                TokenKind::ParenOpen => {
                    ops.push(StackEntry::Paren);
                    paren_depth += 1;
                    prev_is_operand = false;
                    self.bump();
                }
                TokenKind::ParenClose => {
                    if paren_depth == 0 {
                        return Err(self.error("in expression, expected `(` before `)`"));
                    }
                    while let Some(entry) = ops.pop() {
                        match entry {
                            StackEntry::Paren => break,
                            StackEntry::Op(op, span) => rpn.push(RpnItem::Op(op, span)),
                        }
                    }
                    paren_depth -= 1;
                    prev_is_operand = true;
                    self.bump();
                }
                _ => {
                    let Some(op) = expr_op(kind, prev_is_operand) else {
                        return Err(self.error(format!(
                            "in expression, unrecognized symbol `{}`",
                            self.current_text()
                        )));
                    };
                    let span = self.current_span();
                    while let Some(&StackEntry::Op(top, top_span)) = ops.last() {
                        if top.precedence() > op.precedence() {
                            rpn.push(RpnItem::Op(top, top_span));
                            ops.pop();
                        } else {
                            break;
                        }
                    }
                    ops.push(StackEntry::Op(op, span));
                    prev_is_operand = false;
                    self.bump();
                }
            }
        }

        self.bump(); // the stop token

        while let Some(entry) = ops.pop() {
            match entry {
                StackEntry::Paren => {
                    return Err(self.error("in expression, expected `)` after `(`"));
                }
                StackEntry::Op(op, span) => rpn.push(RpnItem::Op(op, span)),
            }
        }

        self.assemble(parent, rpn)
    }

    /// Convert the reverse-Polish list into a subtree under `parent`.
    fn assemble(&mut self, parent: NodeId, rpn: Vec<RpnItem>) -> Result<NodeId, SyntaxError> {
        let mut operands: Vec<NodeId> = Vec::new();

        for item in rpn {
            match item {
                RpnItem::Operand(id) => operands.push(id),
                RpnItem::Op(ExprOp::Unary(op), span) => {
                    let Some(a) = operands.pop() else {
                        return Err(missing_operand(span, op.symbol()));
                    };
                    let node = self.tree.alloc(NodeKind::Unary { op }, span);
                    self.tree.append_child(node, a);
                    operands.push(node);
                }
                RpnItem::Op(ExprOp::Binary(op), span) => {
                    let Some(b) = operands.pop() else {
                        return Err(missing_operand(span, op.symbol()));
                    };
                    let Some(a) = operands.pop() else {
                        return Err(missing_operand(span, op.symbol()));
                    };
                    // `x >= y` is stored as `y < x` and `x <= y` as
                    // `y > x`; later passes rely on never seeing `>=`/`<=`.
                    let (op, a, b) = match op {
                        BinaryOp::Ge => (BinaryOp::Lt, b, a),
                        BinaryOp::Le => (BinaryOp::Gt, b, a),
                        _ => (op, a, b),
                    };
                    let node = self.tree.alloc(NodeKind::Binary { op }, span);
                    self.tree.append_child(node, a);
                    self.tree.append_child(node, b);
                    operands.push(node);
                }
            }
        }

        let Some(result) = operands.pop() else {
            return Err(self.error("in expression, expected an operand"));
        };
        if !operands.is_empty() {
            return Err(self.error("in expression, operands are missing an operator"));
        }
        self.tree.append_child(parent, result);
        Ok(result)
    }
}

fn missing_operand(span: Span, symbol: &str) -> SyntaxError {
    SyntaxError::new(
        span,
        format!("in expression, operator `{symbol}` is missing an operand"),
    )
}

/// Map a token to its expression operator, using operand context to pick
/// unary `-` over binary `-`.
fn expr_op(kind: TokenKind, prev_is_operand: bool) -> Option<ExprOp> {
    Some(match kind {
        TokenKind::Plus => ExprOp::Binary(BinaryOp::Add),
        TokenKind::Minus if prev_is_operand => ExprOp::Binary(BinaryOp::Sub),
        TokenKind::Minus => ExprOp::Unary(UnaryOp::Neg),
        TokenKind::Star => ExprOp::Binary(BinaryOp::Mul),
        TokenKind::Slash => ExprOp::Binary(BinaryOp::Div),
        TokenKind::Percent => ExprOp::Binary(BinaryOp::Mod),
        TokenKind::AmpAmp => ExprOp::Binary(BinaryOp::And),
        TokenKind::PipePipe => ExprOp::Binary(BinaryOp::Or),
        TokenKind::EqEq => ExprOp::Binary(BinaryOp::Eq),
        TokenKind::BangEq => ExprOp::Binary(BinaryOp::Ne),
        TokenKind::Lt => ExprOp::Binary(BinaryOp::Lt),
        TokenKind::Le => ExprOp::Binary(BinaryOp::Le),
        TokenKind::Gt => ExprOp::Binary(BinaryOp::Gt),
        TokenKind::Ge => ExprOp::Binary(BinaryOp::Ge),
        TokenKind::Bang => ExprOp::Unary(UnaryOp::Not),
        _ => return None,
    })
}

fn stop_symbol(stop: TokenKind) -> &'static str {
    match stop {
        TokenKind::Semicolon => ";",
        TokenKind::Comma => ",",
        TokenKind::ParenClose => ")",
        TokenKind::BracketClose => "]",
        _ => "<end>",
    }
}
