//! Tracing setup: structured JSON logging plus span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

use factum_core::config::defaults::{DEFAULT_LOG_LEVEL, LOG_ENV_VAR};
use factum_core::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `FACTUM_LOG` environment variable for filtering and
/// defaults to `info`. Idempotent: only the first call in a process
/// installs a subscriber.
pub fn init_tracing() {
    init_with_default(DEFAULT_LOG_LEVEL);
}

/// Like [`init_tracing`], with the configured level as the fallback when
/// `FACTUM_LOG` is unset.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    init_with_default(&config.log_level);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

fn init_with_default(level: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

        // Another subscriber (e.g. a host application's) wins.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init();
    });
}
