//! Error types for graph operations.

use thiserror::Error;

/// Errors that can occur in link graph operations.
///
/// Enumeration is the only fallible surface: every other condition an
/// operation can meet (unknown node, already-cleared node, duplicate link)
/// degrades to an empty result or a structural no-op instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An enumeration was invoked without a link mapping callback.
    #[error("link mapping callback missing")]
    MissingCallback,
}

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
