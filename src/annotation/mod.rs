//! Per-record human annotations (ground truth and supporting context).
//!
//! The store holds exactly one [`AnnotationEntry`] per record, joined by
//! position. It is initialized to the record collection's length and stays at
//! that length for the life of the session; every index has a defined (possibly
//! empty) entry, so no sparse state can reach payload assembly.
//!
//! Edits arrive one at a time from a single operator. [`AnnotationStore::update`]
//! mutates the store in place through `&mut self`, so each edit is applied to
//! the latest state rather than a stale snapshot, and an edit to entry `i`
//! never touches entry `j != i`.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::AnnotationError;

use serde::{Deserialize, Serialize};

/// Human-supplied metadata for exactly one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationEntry {
    /// Reference answer the response is scored against. Defaults to empty.
    pub ground_truth: String,
    /// Supporting context for the scorer. Defaults to empty.
    pub context: String,
}

/// Selects which field of an entry an update targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationField {
    /// The reference answer.
    GroundTruth,
    /// The supporting context.
    Context,
}

/// Annotation entries for one evaluation session, indexed positionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationStore {
    entries: Vec<AnnotationEntry>,
}

impl AnnotationStore {
    /// Creates a store with exactly `n` entries, both fields empty.
    ///
    /// Called once per new record collection. Re-initializing discards prior
    /// annotations; annotation starts fresh per session.
    pub fn initialize(n: usize) -> Self {
        Self {
            entries: vec![AnnotationEntry::default(); n],
        }
    }

    /// Replaces one field of the entry at `index` with `value`.
    ///
    /// Fails with [`AnnotationError::IndexOutOfRange`] if `index` is not
    /// within the store. Sibling entries are never modified.
    pub fn update(
        &mut self,
        index: usize,
        field: AnnotationField,
        value: impl Into<String>,
    ) -> Result<(), AnnotationError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(AnnotationError::IndexOutOfRange { index, len })?;

        match field {
            AnnotationField::GroundTruth => entry.ground_truth = value.into(),
            AnnotationField::Context => entry.context = value.into(),
        }
        Ok(())
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&AnnotationEntry> {
        self.entries.get(index)
    }

    /// Immutable snapshot view of all entries, in record order.
    #[inline]
    pub fn entries(&self) -> &[AnnotationEntry] {
        &self.entries
    }
}
