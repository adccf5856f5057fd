use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter, e.g. `QMGR_LOG=qmgr=debug`.
pub const LOG_ENV: &str = "QMGR_LOG";

const DEFAULT_FILTER: &str = "qmgr=info";

/// Log filter from `QMGR_LOG`, or `qmgr=info` when unset or invalid.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the stderr subscriber. Stdout stays reserved for command output.
pub fn init() {
    let terminal_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter())
        .with(terminal_layer)
        .init();
}
