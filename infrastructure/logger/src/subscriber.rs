use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber, filtered by `RUST_LOG` and falling back
/// to `default_filter`.
///
/// Returns `false` when a subscriber was already installed, so repeated calls
/// from embedding code are harmless.
pub fn init_tracing(default_filter: &str) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .is_ok()
}
