pub mod ast;
pub mod build;
pub mod check;
pub mod ir;

mod source_loader;

/// Print the stage banner plus the rendered diagnostic and exit non-zero.
pub(crate) fn fail(err: &minic_compiler::Error, source: &str, path: Option<&str>) -> ! {
    eprintln!("{}", err.stage());
    eprintln!("{}", err.render(source, path));
    std::process::exit(1);
}
