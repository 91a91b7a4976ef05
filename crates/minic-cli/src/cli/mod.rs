mod args;
mod commands;
mod dispatch;


pub use commands::build_cli;
pub use dispatch::{AstParams, BuildParams, CheckParams, IrParams};

/// Output format for the `ir` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IrFormat {
    /// Column-aligned human-readable listing.
    #[default]
    Plain,
    /// One JSON array of quadruple objects.
    Json,
    /// The comma-separated wire format, as `build` writes it.
    Wire,
}

impl IrFormat {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            "wire" => Self::Wire,
            _ => Self::Plain,
        }
    }
}
