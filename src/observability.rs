//! Observability utilities.
//!
//! The guards themselves only emit `tracing` events; installing a subscriber
//! is left to the host application. `init_tracing` is a convenience for
//! binaries and test harnesses that have no subscriber of their own.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn env_filter() -> EnvFilter {
    // RUST_LOG wins; default keeps guard rejections (debug level) quiet
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn json_requested() -> bool {
    std::env::var("GUARD_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Initialize a tracing subscriber once for the process.
///
/// Plain compact text by default, JSON when `GUARD_LOG_FORMAT=json`. Calling
/// this after another subscriber is installed is a no-op, not an error.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let result = if json_requested() {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().json())
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(fmt::layer().compact())
                .try_init()
        };

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });
}
