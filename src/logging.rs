use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sends cleanup logs to stderr.
///
/// The crate logs at `info` by default and at `error` with `quiet`. Directives from
/// `RUST_LOG` come after that level, so `RUST_LOG=cirax=debug` shows every compute
/// request and `RUST_LOG=cirax=warn` hides the per-resource lines.
pub fn init_logging(quiet: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(env_filter(quiet, rust_log.as_deref()))
        .init();
}

fn env_filter(quiet: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if quiet { "cirax=error" } else { "cirax=info" };

    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => {
            EnvFilter::new(format!("{level},{directives}"))
        }
        _ => EnvFilter::new(level),
    }
}
