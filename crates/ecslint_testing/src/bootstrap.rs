//! Process-wide test environment bootstrap.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs the test tracing subscriber once per process.
///
/// Safe to call from every test; later calls are no-ops, as is the case
/// where the embedding test runner already installed a subscriber.
pub fn init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
