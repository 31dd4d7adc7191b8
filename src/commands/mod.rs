/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod list;

use crate::cli::args::Command;
use crate::component::ComponentError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ComponentError` on any command failure.
pub fn dispatch(command: &Command, output: &str) -> Result<(), ComponentError> {
    match command {
        Command::List(args) => list::run(args, output),
    }
}
