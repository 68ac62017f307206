//! Projects records and annotations into the scoring backend's wire shape.
//!
//! The backend consumes four parallel arrays. Index `i` across all four must
//! describe the same logical record; that alignment is the payload's core
//! correctness contract, so a length mismatch between records and annotations
//! is an error here rather than something to truncate or pad around — silent
//! truncation would misalign the arrays and corrupt scoring results.

pub mod error;


pub use error::AssemblyError;

use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationStore;
use crate::record::RecordCollection;

/// The parallel-array payload sent to the scoring backend.
///
/// All four sequences have identical length, and index `i` in every sequence
/// refers to the same record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationPayload {
    /// Assistant responses, one per record.
    pub llm_outputs: Vec<String>,
    /// Human reference answers, one per record.
    pub ground_truths: Vec<String>,
    /// User queries, one per record.
    pub queries: Vec<String>,
    /// Supporting context, one per record.
    pub contexts: Vec<String>,
}

impl EvaluationPayload {
    /// Returns the number of records described by the payload.
    #[inline]
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    /// Returns `true` if the payload describes no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

/// Builds the evaluation payload from a record collection and its annotations.
///
/// Pure and deterministic. Fails with [`AssemblyError::LengthMismatch`] when
/// the inputs disagree on length; the caller must not submit in that state.
pub fn build(
    records: &RecordCollection,
    annotations: &AnnotationStore,
) -> Result<EvaluationPayload, AssemblyError> {
    if records.len() != annotations.len() {
        return Err(AssemblyError::LengthMismatch {
            records: records.len(),
            annotations: annotations.len(),
        });
    }

    let mut payload = EvaluationPayload::default();
    for (record, entry) in records.iter().zip(annotations.entries()) {
        payload.queries.push(record.input.clone());
        payload.llm_outputs.push(record.output.clone());
        payload.ground_truths.push(entry.ground_truth.clone());
        payload.contexts.push(entry.context.clone());
    }

    Ok(payload)
}
