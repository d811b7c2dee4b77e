//! Error types for the counterpart tool.
//!
//! This module defines the centralized error type [`CounterpartError`] and a type
//! alias [`Result`] for the surfaces around the resolver: configuration loading,
//! log file setup and the editor host. The resolver itself never fails; every
//! "not found" condition is reported through
//! [`Resolution::NotFound`](crate::domain::Resolution::NotFound).

use thiserror::Error;

/// The main error type for counterpart operations outside the resolver.
///
/// # Examples
///
/// ```
/// use mvvm_counterpart::CounterpartError;
///
/// fn validate() -> Result<(), CounterpartError> {
///     Err(CounterpartError::Config("view_token must not be empty".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CounterpartError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, such as reading the
    /// configuration file or opening the log file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The editor host failed to carry out a request.
    ///
    /// Occurs when the opener command cannot be spawned or exits unsuccessfully.
    #[error("Host error: {0}")]
    Host(String),
}

impl From<toml::de::Error> for CounterpartError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// A specialized `Result` type for counterpart operations.
pub type Result<T> = std::result::Result<T, CounterpartError>;
