use crate::memory::{MemStore, Snapshot};
use crate::{QuadPattern, StorageError};
use rdfmem_model::{Quad, Triple};
use std::cell::Cell;
use std::sync::Arc;

/// A stream over the quads of a [`Dataset`](crate::Dataset).
pub type QuadStream = StatementStream<Quad>;

/// A stream over the triples of a [`Graph`](crate::Graph).
pub type TripleStream = StatementStream<Triple>;

/// A single-use handle on the statements matching a pattern.
///
/// The handle can be turned into an iterator exactly once. Calling [`Self::iter`] again fails with
/// [`StorageError::StreamReused`]; ask the store for a new stream instead.
///
/// Iteration is lazy and walks the snapshot of the store taken when the stream was created. If
/// the store was configured to detect concurrent modifications, the iterator yields
/// [`StorageError::ConcurrentModification`] once the store has changed and stops afterward.
pub struct StatementStream<T> {
    cursor: Cell<Option<Cursor>>,
    project: fn(Quad) -> T,
}

struct Cursor {
    snapshot: Snapshot,
    pattern: QuadPattern,
    watched_store: Option<Arc<MemStore>>,
}

impl<T> StatementStream<T> {
    pub(crate) fn new(
        store: &Arc<MemStore>,
        snapshot: Snapshot,
        pattern: QuadPattern,
        project: fn(Quad) -> T,
    ) -> Self {
        let watched_store = store
            .config()
            .detect_concurrent_modification
            .then(|| Arc::clone(store));
        Self {
            cursor: Cell::new(Some(Cursor {
                snapshot,
                pattern,
                watched_store,
            })),
            project,
        }
    }

    /// Creates a stream that yields nothing. Used for patterns that cannot match.
    pub(crate) fn empty(project: fn(Quad) -> T) -> Self {
        Self {
            cursor: Cell::new(Some(Cursor {
                snapshot: Snapshot {
                    quads: Arc::default(),
                    version: 0,
                },
                pattern: QuadPattern::any(),
                watched_store: None,
            })),
            project,
        }
    }

    /// Returns the iterator over the statements. Can only be called once.
    pub fn iter(&self) -> Result<StatementIter<T>, StorageError> {
        let cursor = self.cursor.take().ok_or(StorageError::StreamReused)?;
        Ok(StatementIter {
            cursor,
            position: 0,
            finished: false,
            project: self.project,
        })
    }

    /// Consumes the stream and collects all statements.
    pub fn try_collect_to_vec(&self) -> Result<Vec<T>, StorageError> {
        self.iter()?.collect()
    }
}

/// The iterator of a [`StatementStream`].
pub struct StatementIter<T> {
    cursor: Cursor,
    position: usize,
    finished: bool,
    project: fn(Quad) -> T,
}

impl<T> Iterator for StatementIter<T> {
    type Item = Result<T, StorageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        if let Some(store) = &self.cursor.watched_store {
            if store.version() != self.cursor.snapshot.version {
                self.finished = true;
                return Some(Err(StorageError::ConcurrentModification));
            }
        }
        while let Some(quad) = self.cursor.snapshot.quads.get(self.position) {
            self.position += 1;
            if self.cursor.pattern.matches(quad) {
                return Some(Ok((self.project)(quad.clone())));
            }
        }
        self.finished = true;
        None
    }
}
