//! `tracing` subscriber setup.
//!
//! The filter is read from `RUST_LOG` and falls back to `info`. Both entry
//! points are safe to call more than once; only the first call installs a
//! subscriber.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT_ONCE: Once = Once::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a formatting subscriber writing to stderr.
pub fn init() {
    INIT_ONCE.call_once(|| {
        // Another global subscriber may already be installed by the host.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Install a subscriber whose output is captured by the test harness.
pub fn init_for_tests() {
    INIT_ONCE.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_test_writer()
            .try_init();
    });
}
