use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber. `RUST_LOG` takes precedence over
/// `default_level`. Returns false if a subscriber was already installed.
pub fn init_logging(default_level: Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
