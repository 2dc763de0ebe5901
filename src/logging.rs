//! Tracing setup for the binary
//!
//! Log output goes to stderr so report output on stdout stays clean for
//! piping. `RUST_LOG` overrides the default level.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "fintrack=warn";

/// Installs the global tracing subscriber. Later calls are no-ops.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_FILTER);
}

/// Like [`init_tracing`], with a custom fallback filter (used by `--verbose`)
pub fn init_tracing_with(fallback: &str) {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
