/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::component::ComponentError;

/// compcli — inspect the components of an application's modules.
#[derive(Debug, Parser)]
#[command(
    name = "compcli",
    about = "Inspect the components of an application's modules from the CLI",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output mode: "" (sorted name table), "wide" (summary table), "json".
    #[arg(
        long,
        short = 'o',
        global = true,
        value_name = "MODE",
        default_value = ""
    )]
    pub output: String,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the components of a module.
    List(ListArgs),
}

/// Arguments for `compcli list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Application directory (the one holding app.yaml).
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub app: PathBuf,

    /// Module to list. Empty means the root module; nested modules are
    /// dot-separated (e.g. "auth.sessions").
    #[arg(long, value_name = "NAME", default_value = "")]
    pub module: String,

    /// Script-friendly listing: a COMPONENT header, an '=' underline, then
    /// one sorted name per line. Takes precedence over --output.
    #[arg(long)]
    pub bare: bool,
}

/// Presentation mode for `list`, parsed from the raw `--output` value.
///
/// The raw string is validated here exactly once; everything downstream
/// matches exhaustively on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Sorted one-column name table.
    Plain,
    /// Sorted five-column summary table.
    Wide,
    /// JSON document of summaries, in source order.
    Json,
}

impl OutputMode {
    /// Parse a raw `--output` value.
    ///
    /// # Errors
    ///
    /// Returns `ComponentError::InvalidOutput` for anything outside
    /// `""`, `"wide"`, `"json"`.
    pub fn parse(value: &str) -> Result<Self, ComponentError> {
        match value {
            "" => Ok(Self::Plain),
            "wide" => Ok(Self::Wide),
            "json" => Ok(Self::Json),
            _ => Err(ComponentError::InvalidOutput {
                value: value.to_owned(),
            }),
        }
    }
}
