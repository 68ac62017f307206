//! Payload assembly error types.

use thiserror::Error;

/// Errors that can occur while assembling the evaluation payload.
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Records and annotations disagree on length.
    ///
    /// Fatal to this submission attempt: guessing at missing annotations or
    /// dropping records would break the parallel-array alignment.
    #[error("length mismatch: {records} records but {annotations} annotation entries")]
    LengthMismatch { records: usize, annotations: usize },
}
