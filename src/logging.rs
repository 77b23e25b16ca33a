use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber: plain text to stderr, filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` only warnings are shown; `-v` raises that to debug.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
