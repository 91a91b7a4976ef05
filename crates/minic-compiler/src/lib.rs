//! minic front-end: lexer, parser, and quadruple generator.
//!
//! The pipeline is strictly forward and single-threaded:
//! - `lexer` - source text → span-based tokens
//! - `parser` - tokens → arena-allocated syntax tree
//! - `irgen` - syntax tree → ordered quadruple list
//!
//! The first fault at any stage is fatal; errors unwind as values to the
//! caller, which renders them against the source and decides the exit.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod irgen;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod syntax;

#[cfg(test)]
mod lexer_tests;

use minic_ir::Quadruple;

pub use irgen::SemanticError;
pub use parser::SyntaxError;

/// Errors from the front-end pipeline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parse(#[from] SyntaxError),

    #[error("{0}")]
    Translate(#[from] SemanticError),
}

impl Error {
    /// Render the error against the source with a line/column snippet.
    pub fn render(&self, source: &str, path: Option<&str>) -> String {
        match self {
            Error::Parse(e) => e.render(source, path),
            Error::Translate(e) => e.render(source, path),
        }
    }

    /// Stage banner the driver prints above the rendered snippet.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Parse(_) => "Syntax analyze errors",
            Error::Translate(_) => "Semantic analyze errors",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Full pipeline: parse the source, then translate the tree.
pub fn compile(source: &str) -> Result<Vec<Quadruple>> {
    let tree = parser::parse(source)?;
    Ok(irgen::translate(&tree)?)
}
