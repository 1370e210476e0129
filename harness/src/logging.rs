//! Diagnostic tracing for the harness binaries.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's decision. Output goes to stderr so stdout stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber filtered by `RUST_LOG`.
///
/// Falls back to `default_directive` (e.g. `"info"`) when `RUST_LOG` is
/// unset or does not parse.
///
/// ```bash
/// RUST_LOG=statespace_search=trace statespace --world maze --algorithm bfs
/// ```
pub fn init(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
