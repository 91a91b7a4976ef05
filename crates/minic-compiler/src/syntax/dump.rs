//! Indented tree dump used by the CLI `ast` command and the parser tests.

use std::fmt::Write as _;

use super::{NodeId, NodeKind, SyntaxTree};

/// Render the tree one node per line, two-space indent per depth level.
pub fn dump(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    dump_node(tree, tree.root(), 0, &mut out);
    out
}

fn dump_node(tree: &SyntaxTree, id: NodeId, depth: usize, out: &mut String) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), label(tree.kind(id)));
    for child in tree.children(id) {
        dump_node(tree, child, depth + 1, out);
    }
}

fn label(kind: &NodeKind) -> String {
    match kind {
        NodeKind::Class { name } => format!("Class {name}"),
        NodeKind::Include { path } => format!("Include {path}"),
        NodeKind::Function { vis, ret, name } => format!("Function {vis} {ret} {name}"),
        NodeKind::Param { name, ty } => format!("Param {name}: {ty}"),
        NodeKind::Block => "Block".to_string(),
        NodeKind::Declaration => "Declaration".to_string(),
        NodeKind::Declarator { name, ty } => format!("Declarator {name}: {ty}"),
        NodeKind::Assignment => "Assignment".to_string(),
        NodeKind::If => "If".to_string(),
        NodeKind::While => "While".to_string(),
        NodeKind::Condition => "Condition".to_string(),
        NodeKind::Call { name } => format!("Call {name}"),
        NodeKind::Arg => "Arg".to_string(),
        NodeKind::Print => "Print".to_string(),
        NodeKind::Return => "Return".to_string(),
        NodeKind::VoidReturn => "VoidReturn".to_string(),
        NodeKind::Binary { op } => format!("Binary {}", op.symbol()),
        NodeKind::Unary { op } => format!("Unary {}", op.symbol()),
        NodeKind::Number { value } => format!("Number {value}"),
        NodeKind::Variable { name } => format!("Variable {name}"),
        NodeKind::Index { name } => format!("Index {name}"),
        NodeKind::StringLit { value } => format!("StringLit {value:?}"),
    }
}
