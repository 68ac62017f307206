//! Submission of the assembled payload to the scoring backend.
//!
//! One POST per submission. The call suspends until the backend answers or
//! the transport fails; no deadline is imposed here (a caller that needs one
//! wraps the future) and nothing is retried automatically — duplicate
//! submissions would double-score the session.

pub mod error;


pub use error::SubmissionError;

use serde_json::Value;

use crate::assembly::EvaluationPayload;
use crate::config::Config;

/// Parsed response from the scoring backend.
///
/// The body is backend-defined; it is parsed as JSON but not validated
/// against a specific shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResponse(Value);

impl ScoreResponse {
    /// Returns the parsed body.
    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the response and returns the parsed body.
    #[inline]
    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Per-record score rows, when the backend returned an array.
    ///
    /// The reference backend answers with one row per record, each carrying
    /// metric fields such as `exact_match`, `f1`, `bleu`, and `rougeL`.
    #[inline]
    pub fn rows(&self) -> Option<&[Value]> {
        self.0.as_array().map(Vec::as_slice)
    }
}

/// Client for the scoring backend's evaluation endpoint.
#[derive(Debug, Clone)]
pub struct EvaluationSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl EvaluationSubmitter {
    /// Creates a submitter targeting the configured evaluation endpoint.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.evaluate_url())
    }

    /// Creates a submitter targeting an explicit endpoint URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint URL this submitter targets.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the payload and awaits the backend's verdict.
    ///
    /// Failure taxonomy: [`SubmissionError::Transport`] when the endpoint is
    /// unreachable or the connection drops, [`SubmissionError::BackendRejected`]
    /// on a non-success status, and [`SubmissionError::MalformedResponse`] when
    /// a success body fails to parse as JSON.
    pub async fn submit(
        &self,
        payload: &EvaluationPayload,
    ) -> Result<ScoreResponse, SubmissionError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            records = payload.len(),
            "submitting evaluation payload"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|source| SubmissionError::Transport { source })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SubmissionError::Transport { source })?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "scoring backend rejected submission");
            return Err(SubmissionError::BackendRejected {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body)
            .map_err(|source| SubmissionError::MalformedResponse { source })?;

        tracing::debug!("scoring backend accepted submission");
        Ok(ScoreResponse(value))
    }
}
