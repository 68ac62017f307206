//! Rubric evaluation payload pipeline.
//!
//! Carries query/response pairs from a conversational assistant into a human
//! evaluation workflow and on to a scoring backend. The pipeline has four
//! stages, leaf-first:
//!
//! - [`transport`] - encodes the ordered record collection into a
//!   URL-query-safe string for the handoff between the collection view and
//!   the annotation view, and decodes it back (round-trip exact).
//! - [`annotation`] - one ground-truth/context entry per record, joined by
//!   position, edited field by field until the operator submits.
//! - [`assembly`] - projects records and annotations into the four parallel
//!   arrays (`llm_outputs`, `ground_truths`, `queries`, `contexts`) the
//!   scoring backend consumes.
//! - [`submission`] - one POST per submission, with a typed failure taxonomy
//!   instead of a fire-and-forget call.
//!
//! [`session::EvaluationSession`] ties the stages together for one operator:
//! decode, initialize, annotate, build, submit. The presentational surfaces
//! that drive it (chat view, annotation page) live outside this crate.

pub mod annotation;
pub mod assembly;
pub mod config;
pub mod record;
pub mod session;
pub mod submission;
pub mod transport;

pub use annotation::{AnnotationEntry, AnnotationError, AnnotationField, AnnotationStore};
pub use assembly::{AssemblyError, EvaluationPayload};
pub use config::{Config, ConfigError, DEFAULT_BACKEND_URL, DEFAULT_EVALUATE_ROUTE};
pub use record::{Record, RecordCollection};
pub use session::{EvaluationSession, SessionError};
pub use submission::{EvaluationSubmitter, ScoreResponse, SubmissionError};
pub use transport::{TRANSPORT_PARAM, TransportError};
