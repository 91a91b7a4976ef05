//! Scope-stack symbol table.

use indexmap::IndexMap;

/// Storage class of a declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Int,
    Double,
    /// Reserved; array declarations are rejected before reaching the table.
    Array,
}

/// A declared variable: source name, kind, and the synthesized name
/// (`v<k>`) it compiles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    pub source_name: String,
    pub kind: SymbolKind,
    pub synthesized: String,
}

/// Stack of scopes, one frame per block.
///
/// Resolution walks inner to outer; declarations land in the innermost
/// frame and shadow outer ones. Frames are pushed on block entry and
/// popped on exit, so names die with their block.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<IndexMap<String, SymbolInfo>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self) {
        self.scopes.push(IndexMap::new());
    }

    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Whether `name` is taken in the innermost frame (outer shadowed
    /// names don't count).
    pub fn declared_in_innermost(&self, name: &str) -> bool {
        self.scopes.last().is_some_and(|s| s.contains_key(name))
    }

    /// Declare in the innermost frame. Returns `false` (leaving the table
    /// untouched) when the name is already taken there.
    pub fn declare(&mut self, info: SymbolInfo) -> bool {
        if self.scopes.is_empty() {
            self.scopes.push(IndexMap::new());
        }
        let scope = self
            .scopes
            .last_mut()
            .expect("scope stack is non-empty here");
        if scope.contains_key(&info.source_name) {
            return false;
        }
        scope.insert(info.source_name.clone(), info);
        true
    }

    /// Resolve a name, innermost frame first.
    pub fn resolve(&self, name: &str) -> Option<&SymbolInfo> {
        self.scopes.iter().rev().find_map(|s| s.get(name))
    }
}
