use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: engine results, warnings from the rest.
pub const DEFAULT_FILTER: &str = "warn,holdem_engine=info";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// A second call is a no-op, so tests and the binary can both call it.
pub fn init_logging() {
    use tracing_subscriber::fmt;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
