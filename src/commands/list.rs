/// `list` command: list the components of a module.
use std::io::Write;

use crate::cli::OutputMode;
use crate::cli::args::ListArgs;
use crate::cli::output::{
    write_names, write_names_bare, write_summaries_json, write_summaries_wide,
};
use crate::component::{Component, ComponentError, ComponentSource, FsSource};

/// Run `compcli list`.
///
/// # Errors
///
/// Returns `ComponentError` when the application or module cannot be
/// resolved, a summary cannot be produced, or the output cannot be written.
pub fn run(args: &ListArgs, output: &str) -> Result<(), ComponentError> {
    let source = FsSource::open(&args.app)?;
    let mut stdout = std::io::stdout().lock();
    list_module(&source, &args.module, output, args.bare, &mut stdout)
}

/// Resolve the module once, validate the mode, and hand the snapshot to
/// exactly one presenter.
fn list_module(
    source: &impl ComponentSource,
    module: &str,
    output: &str,
    bare: bool,
    out: &mut dyn Write,
) -> Result<(), ComponentError> {
    let module = source.resolve(module)?;

    if bare {
        write_names_bare(out, &qualified_names(module.components()))?;
        return Ok(());
    }

    match OutputMode::parse(output)? {
        OutputMode::Plain => write_names(out, &qualified_names(module.components()))?,
        OutputMode::Wide => {
            let mut summaries = Vec::with_capacity(module.components().len());
            for component in module.components() {
                summaries.push(source.summarize(component)?);
            }
            write_summaries_wide(out, &summaries)?;
        }
        OutputMode::Json => {
            let mut summaries = Vec::with_capacity(module.components().len());
            for component in module.components() {
                let summary =
                    source
                        .summarize(component)
                        .map_err(|cause| ComponentError::Summarize {
                            component: component.display_name(true),
                            source: Box::new(cause),
                        })?;
                summaries.push(summary);
            }
            write_summaries_json(out, &summaries)?;
        }
    }

    Ok(())
}

fn qualified_names(components: &[Component]) -> Vec<String> {
    components.iter().map(|c| c.display_name(true)).collect()
}
