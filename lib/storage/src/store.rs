use crate::{Dataset, QuadPattern, QuadStream, StorageError};
use rdfmem_model::{NamedOrBlankNode, QuadLike};

/// The minimal contract of a quad store.
///
/// Convenience operations such as [`insert_all`](crate::insert_all) and
/// [`copy_quads`](crate::copy_quads) are built on top of this trait. Alternative backends only
/// have to provide these operations.
pub trait QuadStore: Send + Sync {
    /// Inserts `quad`. Returns true if the quad was not yet part of the store.
    fn insert(&self, quad: &dyn QuadLike) -> Result<bool, StorageError>;

    /// Removes `quad`. Returns true if the quad was part of the store.
    fn remove(&self, quad: &dyn QuadLike) -> Result<bool, StorageError>;

    /// Returns true if the store contains a quad equal to `quad`.
    fn contains(&self, quad: &dyn QuadLike) -> Result<bool, StorageError>;

    /// Returns a stream over the quads matching `pattern`.
    fn quads_for_pattern(&self, pattern: &QuadPattern) -> Result<QuadStream, StorageError>;

    /// Returns the labels of all named graphs that contain at least one quad.
    fn graph_names(&self) -> Result<Vec<NamedOrBlankNode>, StorageError>;

    /// Returns the number of quads in the store.
    fn len(&self) -> Result<usize, StorageError>;

    fn is_empty(&self) -> Result<bool, StorageError>;

    /// Removes all quads.
    fn clear(&self) -> Result<(), StorageError>;
}

impl QuadStore for Dataset {
    fn insert(&self, quad: &dyn QuadLike) -> Result<bool, StorageError> {
        Dataset::insert(self, quad)
    }

    fn remove(&self, quad: &dyn QuadLike) -> Result<bool, StorageError> {
        Dataset::remove(self, quad)
    }

    fn contains(&self, quad: &dyn QuadLike) -> Result<bool, StorageError> {
        Dataset::contains(self, quad)
    }

    fn quads_for_pattern(&self, pattern: &QuadPattern) -> Result<QuadStream, StorageError> {
        Dataset::quads_for_pattern(self, pattern)
    }

    fn graph_names(&self) -> Result<Vec<NamedOrBlankNode>, StorageError> {
        Dataset::graph_names(self)
    }

    fn len(&self) -> Result<usize, StorageError> {
        Dataset::len(self)
    }

    fn is_empty(&self) -> Result<bool, StorageError> {
        Dataset::is_empty(self)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Dataset::clear(self)
    }
}
