//! Process-level telemetry bootstrap for the embedding application.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize environment loading and tracing.
///
/// Loads `.env` if present, then installs a subscriber honoring `RUST_LOG`
/// with a `reveo=info` default: JSON output when `LOG_FORMAT=json`, colored
/// human-readable output otherwise. Call once at startup, before the first
/// session is created.
pub fn init() {
    dotenvy::dotenv().ok();

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter = EnvFilter::from_default_env().add_directive("reveo=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }
}
