//! Transport codec error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding the handoff string.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The collection could not be serialized to JSON.
    #[error("failed to serialize record collection: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// The transport string is not valid percent-encoded UTF-8.
    #[error("invalid percent-encoding in transport data: {source}")]
    InvalidPercentEncoding {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The decoded string failed structural parsing.
    #[error("malformed transport data: {source}")]
    MalformedData {
        #[source]
        source: serde_json::Error,
    },
}
