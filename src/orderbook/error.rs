//! Order book error types

use super::order::OrderId;
use thiserror::Error;

/// Errors that can occur within the OrderBook
///
/// An id that is not present in the book is never an error: lookups,
/// removals and updates by id report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OrderBookError {
    /// A field was given a value outside its domain (zero id, price or
    /// volume, or an unrecognized side name)
    #[error("invalid {field} value: {value}")]
    InvalidArgument {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value, rendered as text
        value: String,
    },

    /// An update named a field that cannot change after construction
    #[error("field is not updatable: {field}")]
    NotUpdatable {
        /// Name of the field the caller tried to update
        field: String,
    },

    /// An order with the same id is already resting in the book
    #[error("order {0} already exists")]
    DuplicateId(OrderId),

    /// Error while serializing snapshot data
    #[error("serialization error: {message}")]
    SerializationError {
        /// Underlying error message
        message: String,
    },

    /// Error while deserializing snapshot data
    #[error("deserialization error: {message}")]
    DeserializationError {
        /// Underlying error message
        message: String,
    },

    /// Snapshot integrity check failed
    #[error("checksum mismatch: expected {expected}, but computed {actual}")]
    ChecksumMismatch {
        /// Expected checksum value
        expected: String,
        /// Actual checksum value
        actual: String,
    },

    /// Snapshot package was produced by an incompatible format version
    #[error("unsupported snapshot version: {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version carried by the package
        found: u32,
        /// Version this build understands
        expected: u32,
    },
}

impl OrderBookError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        OrderBookError::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}
