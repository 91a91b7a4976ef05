use std::path::PathBuf;

use minic_compiler::{irgen, parser};

use super::source_loader::load_source;

pub struct BuildArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub output: Option<PathBuf>,
    pub ast: bool,
}

pub fn run(args: BuildArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    // `-o` wins; otherwise derive `<source>.ir`. Inline text has no path
    // to derive from, so it requires `-o`.
    let output = match args.output.or_else(|| {
        args.source_path
            .as_ref()
            .map(|p| p.with_extension("ir"))
    }) {
        Some(path) => path,
        None => {
            eprintln!("error: -o <FILE> is required with inline source");
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

    // The quadruple file is written only on full success; a semantic
    // error must not leave a partial file behind.
    let quads = match irgen::translate(&tree) {
        Ok(quads) => quads,
        Err(e) => super::fail(&e.into(), &source.text, source.path.as_deref()),
    };

    if let Err(e) = std::fs::write(&output, minic_ir::write_quads(&quads)) {
        eprintln!("error: cannot write {}: {}", output.display(), e);
        std::process::exit(1);
    }
}
