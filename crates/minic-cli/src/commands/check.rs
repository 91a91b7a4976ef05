use std::path::PathBuf;

use minic_compiler::parser;

use super::source_loader::load_source;

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

pub fn run(args: CheckArgs) {
    let source = match load_source(args.source_path.as_deref(), args.source_text.as_deref()) {
        Ok(s) => s,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(1);
        }
    };

    if let Err(e) = parser::parse(&source.text) {
        super::fail(&e.into(), &source.text, source.path.as_deref());
    }

    // Silent on success (like cargo check)
}
