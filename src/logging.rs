//! Tracing subscriber initialisation
//!
//! The core only emits `tracing` events; installing a subscriber is the
//! embedder's choice. This helper wires one up from [`LoggingConfig`] for
//! hosts that do not bring their own.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Install a global tracing subscriber
///
/// `RUST_LOG` wins over the configured level when set. Calling this twice
/// returns an error from the underlying registry, surfaced as
/// [`Error::Other`].
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    result.map_err(|e| Error::other(format!("failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_text() {
        // First call may succeed or fail depending on test ordering; a
        // second call must report the already-installed subscriber
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
