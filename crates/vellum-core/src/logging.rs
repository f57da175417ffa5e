//! Logging bootstrap built on `tracing-subscriber`.

use tracing_subscriber::EnvFilter;

use crate::Config;

/// Install the global subscriber with the default [`Config`].
///
/// Returns `false` if a subscriber was already installed.
pub fn init() -> bool {
    init_with_config(&Config::default())
}

/// Install the global subscriber, preferring `RUST_LOG` over
/// [`Config::log_filter`] when the variable is set.
///
/// Returns `false` if a subscriber was already installed.
pub fn init_with_config(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
