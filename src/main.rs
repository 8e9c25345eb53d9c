use std::process::ExitCode;

use cirax::cli::{build_cli, execute, request_from_matches};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    execute(build_cli(), request_from_matches).await
}
