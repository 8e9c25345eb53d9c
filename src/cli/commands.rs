use std::{collections::HashMap, ffi::OsString, io::Write};

use anyhow::Context;
use clap::ArgMatches;
use tracing::{info, warn};

use crate::{
    client::Client,
    models::{CleanupRequest, Credentials, Preset, Selection},
};

/// Exit status when the environment does not hold every required variable.
pub const EXIT_MISSING_ENVIRONMENT: u8 = 1;

pub fn request_from_matches(matches: &ArgMatches) -> CleanupRequest {
    let prefix = matches
        .get_one::<String>("startswith")
        .cloned()
        .unwrap_or_default();

    CleanupRequest::builder()
        .selection(Selection::prefix(prefix))
        .keypairs(matches.get_flag("keypairs"))
        .servers(matches.get_flag("servers"))
        .images(matches.get_flag("images"))
        .remove(matches.get_flag("remove"))
        .build()
}

pub fn preset_request_from_matches(preset: Preset, matches: &ArgMatches) -> CleanupRequest {
    preset.request(matches.get_flag("remove"))
}

/// Snapshot of the process environment.
pub fn environment() -> HashMap<String, String> {
    environment_from(std::env::vars_os())
}

/// Variables whose name is not valid unicode cannot be one of ours and are skipped.
/// A value that is not valid unicode still counts as set; invalid bytes become U+FFFD.
fn environment_from(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> HashMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            let value = value.into_string().unwrap_or_else(|value| {
                warn!("{key} is not valid unicode, invalid bytes are replaced");
                value.to_string_lossy().into_owned()
            });
            Some((key, value))
        })
        .collect()
}

/// Writes one line per missing variable.
pub fn report_missing_variables(out: &mut impl Write, missing: &[&str]) -> std::io::Result<()> {
    for name in missing {
        writeln!(out, "missing environment variable: {name}")?;
    }
    out.flush()
}

/// Runs one cleanup and returns the process exit status.
///
/// Missing configuration is reported on `out` before anything touches the network.
/// Authentication and listing failures are returned as errors.
pub async fn run(
    request: &CleanupRequest,
    env: &HashMap<String, String>,
    out: &mut impl Write,
) -> anyhow::Result<u8> {
    let credentials = match Credentials::resolve(env) {
        Ok(credentials) => credentials,
        Err(err) => {
            report_missing_variables(out, err.variables())
                .context("reporting missing environment variables")?;
            return Ok(EXIT_MISSING_ENVIRONMENT);
        }
    };

    let client = Client::authenticate(&credentials)
        .await
        .with_context(|| format!("authenticating as {}", credentials.username))?;

    let report = client
        .cleanup(request)
        .await
        .context("looking for resources to clean up")?;

    info!(
        prefix = request.selection.as_prefix(),
        candidates = report.candidates.len(),
        failures = report.failures.len(),
        remove = request.remove,
        "cleanup finished"
    );

    Ok(0)
}
