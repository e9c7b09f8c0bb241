use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Default directives when `RUST_LOG` is unset. Request spans from
/// tower-http land at INFO so every request/response pair is visible.
const DEFAULT_DIRECTIVES: &str = "info,tower_http=info,axum=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Initialize the tracing subscriber with compact human-readable output.
/// Writes to stdout; safe to call more than once (later calls are no-ops).
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(|| io::stdout())
        .try_init();
}

/// Initialize the tracing subscriber with JSON structured output, for
/// container environments where logs are machine-collected.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .json()
        .with_writer(|| io::stdout())
        .try_init();
}
