use rdfmem_model::ModelError;
use thiserror::Error;

/// An error raised by a [`Dataset`](crate::Dataset) or a [`Graph`](crate::Graph).
///
/// Mutations that fail leave the statement set exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A term or statement was rejected before touching the store.
    #[error(transparent)]
    InvalidArgument(#[from] ModelError),
    /// The store does not support the operation, e.g., mutating a read-only store.
    #[error("Unsupported operation: {0}")]
    UnsupportedCapability(&'static str),
    /// A term is neither an IRI, a literal, nor a blank node.
    #[error("Cannot store {0}; only IRIs, literals, and blank nodes are supported")]
    InvalidTermKind(&'static str),
    /// A statement stream was iterated more than once.
    #[error("The statement stream has already been consumed")]
    StreamReused,
    /// The store was modified while a statement stream was being consumed.
    #[error("The store was modified while iterating over its statements")]
    ConcurrentModification,
    /// The store has been closed.
    #[error("The store has been closed")]
    Closed,
}

impl StorageError {
    /// Flattens the factory's capability errors into [`StorageError::UnsupportedCapability`].
    pub(crate) fn from_model(error: ModelError) -> Self {
        match error {
            ModelError::UnsupportedCapability(operation) => Self::UnsupportedCapability(operation),
            error => Self::InvalidArgument(error),
        }
    }
}
