//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding explicit filter directives.
pub const LOG_ENV_VAR: &str = "PIPESCAN_LOG";

/// Initialize the pipescan tracing/logging system.
///
/// Reads `PIPESCAN_LOG` for per-target log levels.
/// Format: `PIPESCAN_LOG=pipescan_analysis=debug,pipescan_cli=info`
///
/// Falls back to `default_level` (a level name such as `INFO` or `WARNING`)
/// when `PIPESCAN_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    let directive = level_directive(default_level);
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(directive));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

/// Map a user-facing level name onto an `EnvFilter` directive.
/// Unknown names fall back to `info`.
pub fn level_directive(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" => "error",
        _ => "info",
    }
}
