use std::{
    env,
    sync::Once,
};

use tracing::{
    debug,
    info,
};
use tracing_subscriber::{
    fmt::{
        self,
        format::FmtSpan,
    },
    prelude::*,
    EnvFilter,
};

static TEST_SETUP: Once = Once::new();

/// Installs a global tracing subscriber for tests, once per process.
/// `RUST_LOG` is honoured when set, otherwise everything from `debug` up is
/// written through the test harness capture.
pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else if let Err(err) = subscriber.try_init() {
        eprintln!("Error: Failed to set up logging: {err}");
    }

    debug!(rust_log = ?env::var("RUST_LOG").ok(), "logging ready");
}
