//! Quadruple intermediate representation for minic.
//!
//! The front-end lowers a syntax tree into a flat, ordered list of
//! quadruples (`op arg1 arg2 -> result`). This crate holds the shared
//! model and its two textual renderings:
//! - `format` - the comma-separated wire format written to disk
//! - `dump` - a human-readable, column-aligned listing for debugging

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod dump;
mod format;
mod instruction;

#[cfg(test)]
mod instruction_tests;

pub use dump::dump;
pub use format::{FormatError, read_quads, write_quads};
pub use instruction::{OpCode, Quadruple};
