//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the engine's tracing/logging system.
///
/// Reads the `LINEARITY_LOG` environment variable for per-subsystem log
/// levels, e.g. `LINEARITY_LOG=linearity_analysis=debug`.
///
/// Falls back to `linearity=info` if `LINEARITY_LOG` is not set or invalid.
///
/// This function is idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("LINEARITY_LOG")
            .unwrap_or_else(|_| EnvFilter::new("linearity=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
