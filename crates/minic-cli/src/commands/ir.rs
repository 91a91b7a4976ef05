use std::path::PathBuf;

use minic_compiler::{irgen, parser};

use crate::cli::IrFormat;

use super::source_loader::load_source;

pub struct IrArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub format: IrFormat,
    pub ast: bool,
}

pub fn run(args: IrArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    let tree = match parser::parse(&source.text) {
        Ok(tree) => tree,
        Err(e) => super::fail(&e.into(), &source.text, source.path.as_deref()),
    };
    if args.ast {
        eprint!("{}", minic_compiler::syntax::dump(&tree));
    }

    let quads = match irgen::translate(&tree) {
        Ok(quads) => quads,
        Err(e) => super::fail(&e.into(), &source.text, source.path.as_deref()),
    };

    match args.format {
        IrFormat::Plain => print!("{}", minic_ir::dump(&quads)),
        IrFormat::Wire => print!("{}", minic_ir::write_quads(&quads)),
        IrFormat::Json => match serde_json::to_string_pretty(&quads) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot serialize quadruples: {e}");
                std::process::exit(1);
            }
        },
    }
}
