//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` composed into commands by
//! `commands.rs`, so the same definition is reused everywhere.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to compile (positional).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to compile")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .help("Inline source text")
}

/// Output file path (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Where to write the quadruple file")
}

/// Output format for quadruple listings (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("plain")
        .value_parser(["plain", "json", "wire"])
        .help("Quadruple output format")
}

/// Also dump the syntax tree (--ast).
pub fn verbose_ast_arg() -> Arg {
    Arg::new("ast")
        .long("ast")
        .action(ArgAction::SetTrue)
        .help("Also dump the syntax tree to stderr")
}
