#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! compcli — inspect the components of an application's modules.

mod cli;
mod commands;
mod component;
mod types;

use clap::Parser;

use cli::{Cli, write_error};
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    match commands::dispatch(&cli.command, &cli.output) {
        Ok(()) => {}
        Err(err) => {
            let error_output = ErrorOutput::from_component_error(&err);
            write_error(&error_output, cli.output == "json");
            std::process::exit(err.exit_code());
        }
    }
}
