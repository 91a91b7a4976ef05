//! Statement-level grammar productions.
//!
//! Each `parse_*` method consumes exactly the tokens of its production and
//! returns the (detached) node it built; the dispatching caller appends it
//! where it belongs. `parse_for` is the one exception: desugaring spreads
//! the loop across two statements, so it attaches into the enclosing block
//! itself.

use crate::lexer::TokenKind;
use crate::span::Span;
use crate::syntax::{NodeId, NodeKind, Primitive, SyntaxTree, Type, Visibility};

use super::core::{Parser, Sentence};
use super::error::SyntaxError;

impl Parser<'_> {
    /// `Class ::= 'class' IDENT '{' TopDecl* '}'`
    pub(super) fn parse_class(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Class, "everything should be wrapped in a class")?;
        if !self.at(TokenKind::Ident) {
            return Err(self.error("expected a class name after `class`"));
        }
        let name_span = self.current_span();
        let name = self.bump_text().to_string();
        self.expect(TokenKind::BraceOpen, "expected `{` after the class name")?;
        self.tree = SyntaxTree::new(NodeKind::Class { name }, name_span);
        let root = self.tree.root();

        loop {
            match self.classify() {
                Sentence::BlockEnd => break,
                Sentence::Include => {
                    let id = self.parse_include()?;
                    self.tree.append_child(root, id);
                }
                Sentence::Declaration => {
                    let id = self.parse_declaration()?;
                    self.tree.append_child(root, id);
                }
                Sentence::Function => {
                    let id = self.parse_function()?;
                    self.tree.append_child(root, id);
                }
                _ if self.eof() => {
                    return Err(self.error("expected `}` to close the class body"));
                }
                _ => {
                    return Err(self.error(format!(
                        "at class level, unidentified symbol `{}`",
                        self.current_text()
                    )));
                }
            }
        }

        self.expect(TokenKind::BraceClose, "expected `}` to close the class body")?;
        if !self.eof() {
            return Err(self.error(format!(
                "unexpected `{}` after the class body",
                self.current_text()
            )));
        }
        Ok(())
    }

    /// `#include` directive: consumes lexemes until two `"` tokens or a
    /// `>` have been seen, joining them into the include path.
    fn parse_include(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.bump(); // `#`
        self.bump(); // `include`

        let mut path = String::new();
        let mut quotes = 0;
        let mut end = start;
        loop {
            if self.eof() {
                return Err(SyntaxError::new(start, "unterminated `#include` directive"));
            }
            let kind = self.current();
            end = self.current_span();
            let text = self.bump_text();
            path.push_str(text);
            if kind == TokenKind::DoubleQuote {
                quotes += 1;
            }
            if quotes == 2 || text == ">" {
                break;
            }
        }
        Ok(self
            .tree
            .alloc(NodeKind::Include { path }, start.cover(end)))
    }

    /// `FuncDecl ::= ('public'|'private') Type IDENT '(' ParamList? ')' (Block | ';')`
    fn parse_function(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        let vis = if self.at(TokenKind::Public) {
            Visibility::Public
        } else {
            Visibility::Private
        };
        self.bump();

        let ret = self.parse_primitive("in function statement, expected a return type")?;
        if !self.at(TokenKind::Ident) {
            return Err(self.error("in function statement, expected a function name"));
        }
        let name = self.bump_text().to_string();
        self.expect(
            TokenKind::ParenOpen,
            "in function statement, expected `(` after the function name",
        )?;
        let func = self.tree.alloc(NodeKind::Function { vis, ret, name }, start);

        if !self.eat(TokenKind::ParenClose) {
            loop {
                let ty = self.parse_primitive(
                    "in function statement's parameter list, unidentified parameter type found",
                )?;
                if !self.at(TokenKind::Ident) {
                    return Err(
                        self.error("in function statement's parameter list, expected a parameter name")
                    );
                }
                let param_span = self.current_span();
                let pname = self.bump_text().to_string();
                self.tree
                    .push_child(func, NodeKind::Param { name: pname, ty }, param_span);

                if self.eat(TokenKind::Comma) {
                    continue;
                }
                if self.eat(TokenKind::ParenClose) {
                    break;
                }
                return Err(
                    self.error("in function statement's parameter list, should be `,` or `)` after")
                );
            }
        }

        if self.at(TokenKind::BraceOpen) {
            let block = self.parse_block()?;
            self.tree.append_child(func, block);
        } else if !self.eat(TokenKind::Semicolon) {
            return Err(self.error("in function statement, expected `;` or `{`"));
        }
        Ok(func)
    }

    /// Consume a primitive type keyword.
    fn parse_primitive(&mut self, message: &str) -> Result<Primitive, SyntaxError> {
        let p = match self.current() {
            TokenKind::Int => Primitive::Int,
            TokenKind::Float => Primitive::Float,
            TokenKind::Double => Primitive::Double,
            TokenKind::Char => Primitive::Char,
            _ => return Err(self.error(message)),
        };
        self.bump();
        Ok(p)
    }

    /// `Block ::= '{' BlockItem* '}'`
    pub(super) fn parse_block(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.expect(TokenKind::BraceOpen, "expected `{` to open a block")?;
        let block = self.tree.alloc(NodeKind::Block, start);

        loop {
            match self.classify() {
                Sentence::BlockEnd => break,
                Sentence::Declaration => {
                    let id = self.parse_declaration()?;
                    self.tree.append_child(block, id);
                }
                Sentence::Assignment => {
                    let id = self.parse_assignment(TokenKind::Semicolon)?;
                    self.tree.append_child(block, id);
                }
                Sentence::Call => {
                    let id = self.parse_call()?;
                    self.tree.append_child(block, id);
                }
                Sentence::Control => self.parse_control(block)?,
                Sentence::Return => {
                    let id = self.parse_return()?;
                    self.tree.append_child(block, id);
                }
                Sentence::Print => {
                    let id = self.parse_print()?;
                    self.tree.append_child(block, id);
                }
                Sentence::Empty => self.bump(),
                _ if self.eof() => return Err(self.error("in block, expected `}`")),
                _ => {
                    return Err(self.error(format!(
                        "in block, unidentified symbol `{}` found",
                        self.current_text()
                    )));
                }
            }
        }

        self.expect(TokenKind::BraceClose, "in block, expected `}`")?;
        Ok(block)
    }

    /// `VarDecl ::= Type Decl (',' Decl)* ';'`
    fn parse_declaration(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        // classify() guaranteed the type keyword
        let elem = self.parse_primitive("expected a type to start a declaration")?;
        let decl = self.tree.alloc(NodeKind::Declaration, start);

        loop {
            if !self.at(TokenKind::Ident) {
                return Err(self.error("in declaration, expected a variable name"));
            }
            let name_span = self.current_span();
            let name = self.bump_text().to_string();

            let ty = if self.eat(TokenKind::BracketOpen) {
                let size = self.parse_array_size()?;
                self.expect(
                    TokenKind::BracketClose,
                    "Expected `]` after a statement of an array",
                )?;
                let init = if self.at(TokenKind::Assign) {
                    self.parse_array_initializer()?
                } else {
                    Vec::new()
                };
                Type::Array { elem, size, init }
            } else {
                Type::Primitive(elem)
            };
            self.tree
                .push_child(decl, NodeKind::Declarator { name, ty }, name_span);

            if self.eat(TokenKind::Comma) {
                continue;
            }
            self.expect(
                TokenKind::Semicolon,
                "in declaration, expected `,` or `;` after a variable name",
            )?;
            break;
        }
        Ok(decl)
    }

    fn parse_array_size(&mut self) -> Result<u32, SyntaxError> {
        if !self.at(TokenKind::Number) {
            return Err(self.error("in array declaration, expected a size constant inside `[]`"));
        }
        let span = self.current_span();
        let text = self.bump_text();
        text.parse()
            .map_err(|_| SyntaxError::new(span, format!("`{text}` is not a valid array size")))
    }

    /// `'=' '{' DIGIT (',' DIGIT)* '}'`
    fn parse_array_initializer(&mut self) -> Result<Vec<String>, SyntaxError> {
        self.bump(); // `=`
        self.expect(TokenKind::BraceOpen, "in array initialization, expected `{}`")?;

        let mut init = Vec::new();
        loop {
            if !self.at(TokenKind::Number) {
                return Err(self.error("in array initialization, expected a digit constant"));
            }
            init.push(self.bump_text().to_string());

            if self.eat(TokenKind::Comma) {
                continue;
            }
            if self.eat(TokenKind::BraceClose) {
                break;
            }
            return Err(
                self.error("in array initialization, expected `,` or `}` after a digit constant")
            );
        }
        Ok(init)
    }

    /// `Assignment ::= IDENT ('[' Expression ']')? '=' Expression stop`
    ///
    /// `stop` is `;` for statements, `)` for the step clause of a `for`.
    pub(super) fn parse_assignment(&mut self, stop: TokenKind) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        if !self.at(TokenKind::Ident) {
            return Err(self.error("in assignment, expected an identifier"));
        }
        let name = self.bump_text().to_string();
        let assign = self.tree.alloc(NodeKind::Assignment, start);

        if self.eat(TokenKind::BracketOpen) {
            let target = self.tree.push_child(assign, NodeKind::Index { name }, start);
            self.parse_expression(target, TokenKind::BracketClose)?;
        } else {
            self.tree.push_child(assign, NodeKind::Variable { name }, start);
        }

        self.expect(
            TokenKind::Assign,
            "in assignment, expected `=` after an identifier",
        )?;
        self.parse_expression(assign, stop)?;
        Ok(assign)
    }

    /// `Control ::= If | While | For`; `do` and a leading `else` are
    /// recognized by classification but rejected here.
    fn parse_control(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        match self.current() {
            TokenKind::While => {
                let id = self.parse_while()?;
                self.tree.append_child(parent, id);
                Ok(())
            }
            TokenKind::For => self.parse_for(parent),
            TokenKind::If => {
                let id = self.parse_if()?;
                self.tree.append_child(parent, id);
                Ok(())
            }
            _ => Err(self.error("unsupported control statement")),
        }
    }

    /// `While ::= 'while' '(' Expression ')' Block`
    fn parse_while(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.bump(); // `while`
        let node = self.tree.alloc(NodeKind::While, start);

        self.expect(TokenKind::ParenOpen, "Expected `(` after `while`")?;
        let cond_span = self.current_span();
        let cond = self.tree.push_child(node, NodeKind::Condition, cond_span);
        self.parse_expression(cond, TokenKind::ParenClose)?;

        if !self.at(TokenKind::BraceOpen) {
            return Err(self.error("Expected `{` after `while (condition)`"));
        }
        let block = self.parse_block()?;
        self.tree.append_child(node, block);
        Ok(node)
    }

    /// `For ::= 'for' '(' Assignment Expression ';' Assignment ')' Block`
    ///
    /// Desugared in place: the init assignment lands in the enclosing
    /// block, condition and body form a `While`, and the step assignment
    /// becomes the body's last child.
    fn parse_for(&mut self, parent: NodeId) -> Result<(), SyntaxError> {
        let start = self.current_span();
        self.bump(); // `for`
        self.expect(TokenKind::ParenOpen, "Expected `(` after `for`")?;

        let init = self.parse_assignment(TokenKind::Semicolon)?;
        self.tree.append_child(parent, init);

        let node = self.tree.alloc(NodeKind::While, start);
        let cond_span = self.current_span();
        let cond = self.tree.push_child(node, NodeKind::Condition, cond_span);
        self.parse_expression(cond, TokenKind::Semicolon)?;

        let step = self.parse_assignment(TokenKind::ParenClose)?;

        if !self.at(TokenKind::BraceOpen) {
            return Err(
                self.error("Expected `{` after `for (assignment; condition; assignment)`")
            );
        }
        let block = self.parse_block()?;
        self.tree.append_child(node, block);
        self.tree.append_child(block, step);
        self.tree.append_child(parent, node);
        Ok(())
    }

    /// `If ::= 'if' '(' Expression ')' Block ('else' (If | Block))?`
    ///
    /// Flattened: one `Condition` + `Block` pair per arm, then an optional
    /// trailing `Block` for the final `else`.
    fn parse_if(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.bump(); // `if`
        let node = self.tree.alloc(NodeKind::If, start);

        self.expect(TokenKind::ParenOpen, "in if, expected `(` after `if`")?;
        let cond_span = self.current_span();
        let cond = self.tree.push_child(node, NodeKind::Condition, cond_span);
        self.parse_expression(cond, TokenKind::ParenClose)?;

        if !self.at(TokenKind::BraceOpen) {
            return Err(self.error("in if, expected `{` after `if (condition)`"));
        }
        let block = self.parse_block()?;
        self.tree.append_child(node, block);

        while self.at(TokenKind::Else) {
            if self.nth(1) == TokenKind::If {
                self.bump(); // `else`
                self.bump(); // `if`
                self.expect(TokenKind::ParenOpen, "in else-if, expected `(` after `if`")?;
                let cond_span = self.current_span();
                let cond = self.tree.push_child(node, NodeKind::Condition, cond_span);
                self.parse_expression(cond, TokenKind::ParenClose)?;

                if !self.at(TokenKind::BraceOpen) {
                    return Err(self.error("in else-if, expected `{` after `if (condition)`"));
                }
                let block = self.parse_block()?;
                self.tree.append_child(node, block);
            } else {
                self.bump(); // `else`
                if !self.at(TokenKind::BraceOpen) {
                    return Err(self.error("in if, expected `{` after `else`"));
                }
                let block = self.parse_block()?;
                self.tree.append_child(node, block);
                break;
            }
        }
        Ok(node)
    }

    /// `Print ::= 'print' '(' PrintArg (',' PrintArg)* ')' ';'?`
    fn parse_print(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.bump(); // `print`
        let node = self.tree.alloc(NodeKind::Print, start);

        self.expect(
            TokenKind::ParenOpen,
            "in print, arguments should be wrapped in `()`",
        )?;
        if self.at(TokenKind::ParenClose) {
            return Err(self.error("in print, expected at least one argument"));
        }

        loop {
            if self.at(TokenKind::DoubleQuote) {
                let str_span = self.current_span();
                self.bump();
                let mut value = String::new();
                if self.at(TokenKind::StringText) {
                    value = self.bump_text().to_string();
                }
                self.expect(TokenKind::DoubleQuote, "expected `\"` to appear in pairs")?;
                self.tree
                    .push_child(node, NodeKind::StringLit { value }, str_span);

                if self.eat(TokenKind::Comma) {
                    continue;
                }
                self.expect(
                    TokenKind::ParenClose,
                    "in print, expected `,` or `)` after an argument",
                )?;
                break;
            }

            let stop = self.next_argument_stop(start)?;
            self.parse_expression(node, stop)?;
            if stop == TokenKind::ParenClose {
                break;
            }
        }

        self.eat(TokenKind::Semicolon);
        Ok(node)
    }

    /// `FuncCall ::= IDENT '(' (Expression (',' Expression)*)? ')' ';'?`
    fn parse_call(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        let name = self.bump_text().to_string();
        let node = self.tree.alloc(NodeKind::Call { name }, start);

        self.expect(
            TokenKind::ParenOpen,
            "in function call, expected `(` after the function name",
        )?;
        if self.eat(TokenKind::ParenClose) {
            self.eat(TokenKind::Semicolon);
            return Ok(node);
        }

        loop {
            let stop = self.next_argument_stop(start)?;
            let arg_span = self.current_span();
            let arg = self.tree.push_child(node, NodeKind::Arg, arg_span);
            self.parse_expression(arg, stop)?;
            if stop == TokenKind::ParenClose {
                break;
            }
        }

        self.eat(TokenKind::Semicolon);
        Ok(node)
    }

    /// `Return ::= 'return' (';' | Expression ';')`
    fn parse_return(&mut self) -> Result<NodeId, SyntaxError> {
        let start = self.current_span();
        self.bump(); // `return`

        if self.eat(TokenKind::Semicolon) {
            return Ok(self.tree.alloc(NodeKind::VoidReturn, start));
        }
        if self.eof() {
            return Err(SyntaxError::new(
                start,
                "in return, expected an expression or `;` after `return`",
            ));
        }
        let node = self.tree.alloc(NodeKind::Return, start);
        self.parse_expression(node, TokenKind::Semicolon)?;
        Ok(node)
    }

    /// Paren-aware scan deciding whether the argument at the cursor ends
    /// at `,` or at the closing `)`.
    fn next_argument_stop(&self, at: Span) -> Result<TokenKind, SyntaxError> {
        let mut depth = 0usize;
        let mut n = 0usize;
        loop {
            match self.nth(n) {
                TokenKind::Eof => {
                    return Err(SyntaxError::new(
                        at,
                        "expected `)` to close the argument list",
                    ));
                }
                TokenKind::ParenOpen => depth += 1,
                TokenKind::ParenClose => {
                    if depth == 0 {
                        return Ok(TokenKind::ParenClose);
                    }
                    depth -= 1;
                }
                TokenKind::Comma if depth == 0 => return Ok(TokenKind::Comma),
                _ => {}
            }
            n += 1;
        }
    }
}
