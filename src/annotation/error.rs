//! Annotation store error types.

use thiserror::Error;

/// Errors that can occur while editing annotations.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The targeted entry does not exist.
    ///
    /// This is a contract violation: callers derive indices from the record
    /// collection, which the store mirrors in length. Surface it loudly
    /// rather than dropping the edit.
    #[error("annotation index {index} out of range for store of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
