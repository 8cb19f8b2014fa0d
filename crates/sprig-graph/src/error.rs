//! Error types for graph construction and lookup.

use thiserror::Error;

/// Errors raised by graph operations.
///
/// A search that finds nothing is not an error; it returns `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// The requested vertex is not part of the graph.
    #[error("vertex {0:?} not found")]
    VertexNotFound(V),

    /// An edge named a vertex that has not been added yet.
    #[error("cannot add edge {from:?} -> {to:?}: vertex not found")]
    UnknownEndpoint { from: V, to: V },
}

/// Result type for graph operations.
pub type Result<T, V> = std::result::Result<T, GraphError<V>>;
