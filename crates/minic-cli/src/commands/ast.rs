use std::path::PathBuf;

use minic_compiler::parser;
use minic_compiler::syntax::dump;

use super::source_loader::load_source;

pub struct AstArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

pub fn run(args: AstArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    match parser::parse(&source.text) {
        Ok(tree) => print!("{}", dump(&tree)),
        Err(e) => super::fail(&e.into(), &source.text, source.path.as_deref()),
    }
}
