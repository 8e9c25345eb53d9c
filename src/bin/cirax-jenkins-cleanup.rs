use std::process::ExitCode;

use cirax::{
    cli::{build_preset_cli, execute, preset_request_from_matches},
    models::Preset,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    execute(build_preset_cli(Preset::Jenkins), |matches| {
        preset_request_from_matches(Preset::Jenkins, matches)
    })
    .await
}
