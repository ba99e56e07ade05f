/// Logging setup: `tracing` events to stderr, filtered by `RUST_LOG` or `--verbose`.
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// The active filter. `RUST_LOG`, when set (including from `.env` files loaded
/// beforehand), wins over `verbose`.
#[must_use]
pub fn filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "langflow_runner=debug"
    } else {
        "langflow_runner=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Install the global subscriber. Load env files first.
pub fn init(verbose: bool) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
