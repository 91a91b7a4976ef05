//! Dispatch logic: extract params from ArgMatches and convert to command
//! args.
//!
//! The `*Params` structs mirror the command `*Args` structs but are
//! populated from clap; `Into<*Args>` impls bridge dispatch → handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use super::IrFormat;
use crate::commands::ast::AstArgs;
use crate::commands::build::BuildArgs;
use crate::commands::check::CheckArgs;
use crate::commands::ir::IrArgs;

pub struct CheckParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
        }
    }
}

pub struct AstParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
        }
    }
}

pub struct IrParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub format: IrFormat,
    pub ast: bool,
}

impl IrParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            format: m
                .get_one::<String>("format")
                .map(|s| IrFormat::from_name(s))
                .unwrap_or_default(),
            ast: m.get_flag("ast"),
        }
    }
}

impl From<IrParams> for IrArgs {
    fn from(p: IrParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            format: p.format,
            ast: p.ast,
        }
    }
}

pub struct BuildParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub ast: bool,
}

impl BuildParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            output: m.get_one::<PathBuf>("output").cloned(),
            ast: m.get_flag("ast"),
        }
    }
}

impl From<BuildParams> for BuildArgs {
    fn from(p: BuildParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            output: p.output,
            ast: p.ast,
        }
    }
}
