mod cli;
mod commands;

use cli::{AstParams, BuildParams, CheckParams, IrParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("ir", m)) => {
            let params = IrParams::from_matches(m);
            commands::ir::run(params.into());
        }
        Some(("build", m)) => {
            let params = BuildParams::from_matches(m);
            commands::build::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
