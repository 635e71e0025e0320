//! Structured logging setup.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter `{filter}`: {message}")]
    InvalidFilter {
        /// Directive as supplied.
        filter: String,
        /// Parser message.
        message: String,
    },

    /// A global subscriber has already been installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Installs a `fmt` subscriber filtered by `filter`.
///
/// `filter` uses `EnvFilter` directive syntax, e.g. `info,taskboard=debug`.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] for an unparsable directive and
/// [`TelemetryError::AlreadyInitialized`] when called more than once per
/// process.
pub fn init_tracing(filter: &str) -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_new(filter).map_err(|err| TelemetryError::InvalidFilter {
        filter: filter.to_owned(),
        message: err.to_string(),
    })?;

    fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialized(err.to_string()))
}
