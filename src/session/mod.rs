//! Per-session orchestration of the evaluation pipeline.
//!
//! An [`EvaluationSession`] owns one record collection and its annotation
//! store and drives the stages in order: decode the handoff, initialize the
//! store to matching length, apply operator edits, assemble the payload, and
//! submit it. One session means one operator, one collection, one store, and
//! at most one submission in flight.

pub mod error;


pub use error::SessionError;

use crate::annotation::{AnnotationError, AnnotationField, AnnotationStore};
use crate::assembly::{self, EvaluationPayload};
use crate::record::RecordCollection;
use crate::submission::{EvaluationSubmitter, ScoreResponse};
use crate::transport;

/// One operator's evaluation session.
///
/// The record collection is read-only for the life of the session; the
/// annotation store is exclusively owned here and always matches the
/// collection's length.
#[derive(Debug)]
pub struct EvaluationSession {
    records: RecordCollection,
    annotations: AnnotationStore,
}

impl EvaluationSession {
    /// Starts a session over an already-decoded record collection.
    pub fn new(records: RecordCollection) -> Self {
        let annotations = AnnotationStore::initialize(records.len());
        Self {
            records,
            annotations,
        }
    }

    /// Starts a session from the raw handoff parameter.
    ///
    /// An absent parameter yields an empty session. Malformed transport data
    /// is surfaced as a diagnostic and degrades to an empty session, so the
    /// annotation stage stays usable either way.
    pub fn from_transport(raw: Option<&str>) -> Self {
        Self::new(transport::decode_param_or_empty(raw))
    }

    /// The records under evaluation, in handoff order.
    #[inline]
    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// Current annotation state.
    #[inline]
    pub fn annotations(&self) -> &AnnotationStore {
        &self.annotations
    }

    /// Applies one operator edit to the annotation at `index`.
    pub fn annotate(
        &mut self,
        index: usize,
        field: AnnotationField,
        value: impl Into<String>,
    ) -> Result<(), AnnotationError> {
        self.annotations.update(index, field, value)
    }

    /// Assembles the parallel-array payload from the current state.
    pub fn build_payload(&self) -> Result<EvaluationPayload, SessionError> {
        assembly::build(&self.records, &self.annotations).map_err(SessionError::from)
    }

    /// Assembles and submits the payload, returning the backend's verdict.
    ///
    /// Overlapping submissions are impossible by construction: `submit`
    /// borrows the session mutably for the life of the returned future, so a
    /// repeated trigger cannot start while one is outstanding (the backend
    /// has no idempotency key, so a duplicate would double-score the
    /// session). A caller that abandons the future, for example under a
    /// deadline, simply discards the in-flight result; the session stays
    /// usable and a failed or abandoned submission leaves the annotations
    /// untouched so the operator can retry without re-entering data.
    pub async fn submit(
        &mut self,
        submitter: &EvaluationSubmitter,
    ) -> Result<ScoreResponse, SessionError> {
        let payload = self.build_payload()?;
        submitter.submit(&payload).await.map_err(SessionError::from)
    }
}
