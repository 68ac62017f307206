//! Transport codec for the collection → annotation handoff.
//!
//! The two evaluation stages share no in-memory session: the record collection
//! travels as the value of a single `data` query parameter on the address that
//! launches the annotation stage. [`encode`] is JSON serialization followed by
//! percent-escaping; [`decode`] reverses both steps exactly, so
//! `decode(encode(c)) == c` for every well-formed collection.
//!
//! An absent parameter is valid and means "nothing to evaluate yet". A present
//! but malformed parameter is an error; callers that must stay usable degrade
//! to an empty collection via [`decode_param_or_empty`], which surfaces the
//! failure through `tracing` rather than swallowing it.

pub mod error;


pub use error::TransportError;

use crate::record::RecordCollection;

/// Name of the query parameter carrying the encoded collection.
pub const TRANSPORT_PARAM: &str = "data";

/// Encodes a record collection into a URL-query-safe string.
pub fn encode(collection: &RecordCollection) -> Result<String, TransportError> {
    let json = serde_json::to_string(collection)
        .map_err(|source| TransportError::Serialize { source })?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Decodes a transport string back into a record collection.
pub fn decode(raw: &str) -> Result<RecordCollection, TransportError> {
    let json = urlencoding::decode(raw)
        .map_err(|source| TransportError::InvalidPercentEncoding { source })?;
    serde_json::from_str(&json).map_err(|source| TransportError::MalformedData { source })
}

/// Decodes the optional `data` parameter.
///
/// `None` is not an error: the annotation stage must tolerate being opened
/// with nothing to evaluate, and gets an empty collection.
pub fn decode_param(raw: Option<&str>) -> Result<RecordCollection, TransportError> {
    match raw {
        Some(value) => decode(value),
        None => Ok(RecordCollection::new()),
    }
}

/// Builds the `data=<encoded>` query pair for the annotation-stage address.
pub fn handoff_query(collection: &RecordCollection) -> Result<String, TransportError> {
    Ok(format!("{TRANSPORT_PARAM}={}", encode(collection)?))
}

/// Extracts the raw `data` parameter value from a query string, if present.
pub fn param_in_query(query: &str) -> Option<&str> {
    query.split('&').find_map(|pair| {
        pair.strip_prefix(TRANSPORT_PARAM)
            .and_then(|rest| rest.strip_prefix('='))
    })
}

/// Like [`decode_param`], but recovers from malformed input locally.
///
/// On failure the error is reported through `tracing::warn!` and an empty
/// collection is returned, keeping the annotation stage usable.
pub fn decode_param_or_empty(raw: Option<&str>) -> RecordCollection {
    match decode_param(raw) {
        Ok(collection) => collection,
        Err(error) => {
            tracing::warn!(%error, "malformed transport data, starting with empty collection");
            RecordCollection::new()
        }
    }
}
