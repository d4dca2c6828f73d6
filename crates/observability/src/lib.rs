//! Process-wide tracing/logging setup.
//!
//! The core crates only emit `tracing` events; embedders (and the test
//! suites) install a subscriber through this crate.

use tracing_subscriber::EnvFilter;

/// Directives applied when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info";

/// Install the global subscriber with the default filter.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    init_with(DEFAULT_DIRECTIVES);
}

/// Install the global subscriber with explicit fallback directives
/// (`RUST_LOG` still wins when set).
///
/// Events are emitted as flattened JSON lines: commit events carry their
/// warehouse/product/entry ids as top-level fields for log pipelines.
pub fn init_with(directives: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_target(false)
        .try_init();
}
