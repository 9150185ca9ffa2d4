//! Optional tracing subscriber for hosts that want the library's log events.
//!
//! The library only emits events; nothing is printed unless a host installs
//! a subscriber, either its own or the stderr one provided here.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Environment variable read when no explicit filter is given.
pub const LOG_ENV: &str = "POWSUM_LOG";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

/// Install a stderr subscriber.
///
/// With `filter = None` the directives come from `POWSUM_LOG`, falling back
/// to `warn`.
pub fn init(filter: Option<&str>) -> Result<(), LoggingError> {
    let filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| LoggingError::InvalidFilter(e.to_string()))?,
        None => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter() {
        let result = init(Some("powsum=notalevel"));
        assert!(matches!(result, Err(LoggingError::InvalidFilter(_))));
    }
}
