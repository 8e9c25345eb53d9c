//! Shared plumbing for the cleanup binaries.

use std::process::ExitCode;

use clap::{ArgMatches, Command};

use crate::{logging::init_logging, models::CleanupRequest};

mod app;
mod commands;

pub use app::{build_cli, build_preset_cli};
pub use commands::{
    EXIT_MISSING_ENVIRONMENT, environment, preset_request_from_matches, report_missing_variables,
    request_from_matches, run,
};

/// Parses the command line, sets up logging and runs one cleanup against the process
/// environment.
pub async fn execute(
    app: Command,
    to_request: impl FnOnce(&ArgMatches) -> CleanupRequest,
) -> anyhow::Result<ExitCode> {
    let matches = app.get_matches();

    init_logging(matches.get_flag("quiet"));

    let request = to_request(&matches);
    let code = run(&request, &environment(), &mut std::io::stdout()).await?;

    Ok(ExitCode::from(code))
}
