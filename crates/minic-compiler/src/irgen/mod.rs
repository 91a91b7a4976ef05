//! Quadruple generation: a read-only walk over the parsed syntax tree.
//!
//! The translator walks the class's functions and lowers the body of the
//! one named `main` into a flat quadruple list. Statements emit in source
//! order; expressions emit post-order, left operand first, so every
//! temporary is defined before use. Temporaries (`t<k>`) and variables
//! (`v<k>`) are numbered from 1, monotonically, per translation unit.
//!
//! Control flow, calls, and returns parse but do not lower yet; their
//! jump/label opcodes are reserved in [`minic_ir::OpCode`].

mod error;
mod symbol;


pub use error::SemanticError;
pub use symbol::{ScopeStack, SymbolInfo, SymbolKind};

use minic_ir::{OpCode, Quadruple};

use crate::span::Span;
use crate::syntax::{BinaryOp, NodeId, NodeKind, Primitive, SyntaxTree, Type};

/// Translate a syntax tree into quadruples. The first semantic fault is
/// fatal and nothing is returned.
pub fn translate(tree: &SyntaxTree) -> Result<Vec<Quadruple>, SemanticError> {
    Translator::new(tree).run()
}

struct Translator<'t> {
    tree: &'t SyntaxTree,
    scopes: ScopeStack,
    temp_count: u32,
    var_count: u32,
    code: Vec<Quadruple>,
}

impl<'t> Translator<'t> {
    fn new(tree: &'t SyntaxTree) -> Self {
        Self {
            tree,
            scopes: ScopeStack::new(),
            temp_count: 0,
            var_count: 0,
            code: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Quadruple>, SemanticError> {
        let root = self.tree.root();
        let NodeKind::Class { .. } = self.tree.kind(root) else {
            return Err(SemanticError::new(
                self.tree.span(root),
                "expected a class at the root of the syntax tree",
            ));
        };

        for child in self.tree.children(root) {
            if let NodeKind::Function { name, .. } = self.tree.kind(child)
                && name.as_str() == "main"
            {
                let Some(body) = self.function_body(child) else {
                    return Err(SemanticError::new(
                        self.tree.span(child),
                        "function `main` has no body",
                    ));
                };
                self.block(body)?;
            }
        }
        Ok(self.code)
    }

    fn function_body(&self, func: NodeId) -> Option<NodeId> {
        self.tree
            .children(func)
            .find(|&c| matches!(self.tree.kind(c), NodeKind::Block))
    }

    fn block(&mut self, block: NodeId) -> Result<(), SemanticError> {
        self.scopes.push();
        for child in self.tree.children(block) {
            match self.tree.kind(child) {
                NodeKind::Declaration => self.declaration(child)?,
                NodeKind::Assignment => self.assignment(child)?,
                NodeKind::Print => self.print(child)?,
                _ => {}
            }
        }
        self.scopes.pop();
        Ok(())
    }

    fn declaration(&mut self, decl: NodeId) -> Result<(), SemanticError> {
        for child in self.tree.children(decl) {
            let NodeKind::Declarator { name, ty } = self.tree.kind(child) else {
                return Err(self.malformed(child));
            };
            let kind = match ty {
                Type::Primitive(Primitive::Int) => SymbolKind::Int,
                Type::Primitive(Primitive::Float | Primitive::Double) => SymbolKind::Double,
                Type::Primitive(p) => {
                    return Err(SemanticError::new(
                        self.tree.span(child),
                        format!("type `{p}` is not supported yet"),
                    ));
                }
                Type::Array { elem, size, .. } => {
                    return Err(SemanticError::new(
                        self.tree.span(child),
                        format!("type `{elem}[{size}]` is not supported yet"),
                    ));
                }
            };

            self.var_count += 1;
            let fresh = self.scopes.declare(SymbolInfo {
                source_name: name.clone(),
                kind,
                synthesized: format!("v{}", self.var_count),
            });
            if !fresh {
                return Err(SemanticError::new(
                    self.tree.span(child),
                    format!("variable `{name}` is already defined in this scope"),
                ));
            }
        }
        Ok(())
    }

    fn assignment(&mut self, assign: NodeId) -> Result<(), SemanticError> {
        let mut children = self.tree.children(assign);
        let (Some(target), Some(value)) = (children.next(), children.next()) else {
            return Err(self.malformed(assign));
        };

        // Right-hand side evaluates before the target resolves.
        let value_place = self.expression(value)?;
        match self.tree.kind(target) {
            NodeKind::Variable { name } => {
                let place = self.look_up(name, self.tree.span(target))?;
                self.emit(OpCode::Assign, value_place, String::new(), place);
                Ok(())
            }
            NodeKind::Index { .. } => Err(SemanticError::new(
                self.tree.span(target),
                "array element assignment is not supported yet",
            )),
            _ => Err(self.malformed(target)),
        }
    }

    fn print(&mut self, print: NodeId) -> Result<(), SemanticError> {
        for child in self.tree.children(print) {
            if let NodeKind::StringLit { .. } = self.tree.kind(child) {
                return Err(SemanticError::new(
                    self.tree.span(child),
                    "string arguments to `print` are not supported yet",
                ));
            }
            let place = self.expression(child)?;
            self.emit(OpCode::Print, place, String::new(), String::new());
        }
        Ok(())
    }

    /// Lower an expression subtree, returning the place holding its value.
    fn expression(&mut self, node: NodeId) -> Result<String, SemanticError> {
        match self.tree.kind(node) {
            NodeKind::Number { value } => Ok(value.clone()),
            NodeKind::Variable { name } => self.look_up(name, self.tree.span(node)),
            NodeKind::Binary { op } => {
                let op = *op;
                let mut children = self.tree.children(node);
                let (Some(a), Some(b)) = (children.next(), children.next()) else {
                    return Err(self.malformed(node));
                };
                let a_place = self.expression(a)?;
                let b_place = self.expression(b)?;
                let op_code = op_code(op, self.tree.span(node))?;

                self.temp_count += 1;
                let temp = format!("t{}", self.temp_count);
                self.emit(op_code, a_place, b_place, temp.clone());
                Ok(temp)
            }
            NodeKind::Unary { .. } => Err(SemanticError::new(
                self.tree.span(node),
                "unary operators are not supported in intermediate code yet",
            )),
            NodeKind::Index { .. } => Err(SemanticError::new(
                self.tree.span(node),
                "array elements are not supported in intermediate code yet",
            )),
            _ => Err(self.malformed(node)),
        }
    }

    fn look_up(&self, name: &str, span: Span) -> Result<String, SemanticError> {
        match self.scopes.resolve(name) {
            Some(info) => Ok(info.synthesized.clone()),
            None => Err(SemanticError::new(
                span,
                format!("variable `{name}` is not defined before use"),
            )),
        }
    }

    fn emit(&mut self, op: OpCode, arg1: String, arg2: String, result: String) {
        self.code.push(Quadruple {
            op,
            arg1,
            arg2,
            result,
        });
    }

    /// Structural impossibility: the walk reached a node its parent's
    /// shape should have excluded.
    fn malformed(&self, node: NodeId) -> SemanticError {
        SemanticError::new(
            self.tree.span(node),
            "malformed syntax tree node reached during translation",
        )
    }
}

/// Map a canonicalized binary operator to its opcode. `>=`/`<=` cannot
/// appear in a finished tree.
fn op_code(op: BinaryOp, span: Span) -> Result<OpCode, SemanticError> {
    Ok(match op {
        BinaryOp::Add => OpCode::Add,
        BinaryOp::Sub => OpCode::Sub,
        BinaryOp::Mul => OpCode::Mul,
        BinaryOp::Div => OpCode::Div,
        BinaryOp::Mod => OpCode::Mod,
        BinaryOp::And => OpCode::And,
        BinaryOp::Or => OpCode::Or,
        BinaryOp::Eq => OpCode::Eq,
        BinaryOp::Ne => OpCode::Ne,
        BinaryOp::Lt => OpCode::Lt,
        BinaryOp::Gt => OpCode::Gt,
        BinaryOp::Ge | BinaryOp::Le => {
            return Err(SemanticError::new(
                span,
                format!(
                    "operator `{}` escaped comparison canonicalization",
                    op.symbol()
                ),
            ));
        }
    })
}
