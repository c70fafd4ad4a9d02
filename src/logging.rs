// src/logging.rs
// Stderr log sink for the binary. Lines carry time since start, like
// `[00:00:01.234][INFO]`, and the filter comes from RUST_LOG (default "info").

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

const DEFAULT_FILTER: &str = "info";

pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
