//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("minic")
        .about("Compiler front-end for a small C-like class language")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(ir_command())
        .subcommand(build_command())
}

/// Parse a source file and report syntax errors.
fn check_command() -> Command {
    Command::new("check")
        .about("Parse a source file and report syntax errors")
        .override_usage(
            "\
  minic check <SOURCE>
  minic check -s <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  minic check main.mc             # silent on success
  minic check -s 'class C { }'    # inline source"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
}

/// Show the syntax tree of a source file.
fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a source file")
        .override_usage(
            "\
  minic ast <SOURCE>
  minic ast -s <TEXT>",
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
}

/// Show the generated quadruples.
fn ir_command() -> Command {
    Command::new("ir")
        .about("Show the generated quadruples")
        .override_usage(
            "\
  minic ir <SOURCE>
  minic ir <SOURCE> --format json",
        )
        .after_help(
            r#"EXAMPLES:
  minic ir main.mc                 # aligned listing
  minic ir main.mc --format wire   # exactly what `build` writes
  minic ir main.mc --format json"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(format_arg())
        .arg(verbose_ast_arg())
}

/// Compile a source file and write the quadruple file.
fn build_command() -> Command {
    Command::new("build")
        .about("Compile a source file and write the quadruple file")
        .override_usage(
            "\
  minic build <SOURCE> -o <FILE>
  minic build <SOURCE>",
        )
        .after_help(
            r#"EXAMPLES:
  minic build main.mc              # writes main.ir next to the source
  minic build main.mc -o out.ir
  minic build main.mc --ast        # dump the tree while compiling"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(output_arg())
        .arg(verbose_ast_arg())
}
