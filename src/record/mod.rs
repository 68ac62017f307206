//! Query/response records produced by the upstream conversation.
//!
//! A [`Record`] is one assistant turn; a [`RecordCollection`] is the ordered
//! set of turns carried into an evaluation session. The pipeline never mutates
//! a record, and collection order is load-bearing: it is the positional join
//! key against the annotation store and must survive the transport handoff.


use serde::{Deserialize, Serialize};

/// One query/response turn from the upstream conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The user's query.
    pub input: String,
    /// The assistant's generated response.
    pub output: String,
}

impl Record {
    /// Creates a record from a query and its response.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered collection of [`Record`]s for one evaluation session.
///
/// Insertion order is significant: annotation entries are joined to records
/// by index, so any reordering would silently misattribute annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Record>);

impl RecordCollection {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Wraps an existing ordered list of records.
    #[inline]
    pub fn from_vec(records: Vec<Record>) -> Self {
        Self(records)
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the record at `index`, if present.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.0.get(index)
    }

    /// Iterates over records in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.0.iter()
    }

    /// Appends a record, preserving insertion order.
    #[inline]
    pub fn push(&mut self, record: Record) {
        self.0.push(record);
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
