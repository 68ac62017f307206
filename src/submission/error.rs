//! Submission error types.

use thiserror::Error;

/// Errors that can occur while exchanging with the scoring backend.
///
/// All variants surface to the operator as "submission failed"; none are
/// retried automatically. Retry policy, if any, belongs to the caller.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request never completed (unreachable endpoint, connection reset).
    #[error("transport error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status.
    #[error("backend rejected submission with status {status}: {body}")]
    BackendRejected { status: u16, body: String },

    /// The backend answered successfully but the body failed to parse.
    #[error("malformed response from backend: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
    },
}
