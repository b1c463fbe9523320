//! Command execution for the demo binary

use tracing::{debug, instrument};

use crate::application::{render_usage, Dispatcher, Outcome};
use crate::cli::args::Cli;
use crate::cli::demo::demo_target;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::infrastructure::OutputSink;

/// Program marker placed in front of the dispatched tokens.
pub const PROGRAM: &str = "fuego";

/// Apply the command-line switches on top of the loaded settings.
pub fn effective_settings(cli: &Cli, mut settings: Settings) -> Settings {
    if cli.quiet {
        settings.print_to_stdout = false;
    }
    if cli.no_errors {
        settings.print_to_stderr = false;
    }
    settings
}

/// Dispatch the CLI tokens against the demo target.
#[instrument(skip(settings, output))]
pub fn execute_command<O: OutputSink>(
    cli: &Cli,
    settings: Settings,
    output: O,
) -> CliResult<Outcome> {
    let settings = effective_settings(cli, settings);
    debug!("settings: {:?}", settings);

    let mut target = demo_target();
    if cli.tokens.is_empty() {
        return Err(CliError::Usage(render_usage(PROGRAM, &target, None)));
    }

    let tokens: Vec<&str> = std::iter::once(PROGRAM)
        .chain(cli.tokens.iter().map(String::as_str))
        .collect();
    let dispatcher = Dispatcher::with_output(settings, output);
    Ok(dispatcher.dispatch(&mut target, &tokens)?)
}
