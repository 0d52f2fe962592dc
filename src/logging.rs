//! Tracing setup for the binary.

use crate::config::LoggingConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Logs go to stderr.
///
/// `BACKPRACT_LOG` has already been folded into `config.filter`; an
/// invalid directive falls back to `warn`.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(filter = %config.filter, "logging initialized");
    }
}
