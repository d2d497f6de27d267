use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber.
///
/// `filter` is an `EnvFilter` directive such as `order_orchestrator=debug`;
/// an unparsable directive falls back to `info`. Calling this twice is a no-op.
pub fn setup_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
