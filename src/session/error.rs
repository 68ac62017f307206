//! Session error types.

use thiserror::Error;

use crate::assembly::AssemblyError;
use crate::submission::SubmissionError;

/// Errors that can occur while driving a session to submission.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Payload assembly failed; submission was not attempted.
    #[error("assembly failed: {0}")]
    Assembly(#[from] AssemblyError),

    /// The exchange with the scoring backend failed.
    #[error("submission failed: {0}")]
    Submission(#[from] SubmissionError),
}
