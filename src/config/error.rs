//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Backend URL does not use an http or https scheme.
    #[error("invalid backend url '{value}': must start with http:// or https://")]
    InvalidBackendUrl { value: String },

    /// Evaluation route is not an absolute path.
    #[error("invalid evaluate route '{value}': must start with '/'")]
    InvalidRoute { value: String },
}
