use crate::{Graph, QuadPattern, QuadStore, StorageError};
use rdfmem_model::QuadLike;

/// Inserts all `quads` into `store` one by one. Returns the number of newly inserted quads.
///
/// Unlike [`Dataset::extend`](crate::Dataset::extend), a failing quad does not undo the insertion
/// of the quads before it.
pub fn insert_all<Q: QuadLike>(
    store: &(impl QuadStore + ?Sized),
    quads: impl IntoIterator<Item = Q>,
) -> Result<usize, StorageError> {
    let mut inserted = 0;
    for quad in quads {
        if store.insert(&quad)? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Copies the quads of `source` matching `pattern` into `target`. Returns the number of newly
/// inserted quads.
///
/// Blank nodes of `source` are mapped into the scope of `target`. Copying the same quads again
/// maps each blank node to the same local blank node as before, so repeated copies do not
/// duplicate statements.
pub fn copy_quads(
    source: &(impl QuadStore + ?Sized),
    target: &(impl QuadStore + ?Sized),
    pattern: &QuadPattern,
) -> Result<usize, StorageError> {
    let quads = source.quads_for_pattern(pattern)?.try_collect_to_vec()?;
    let inserted = insert_all(target, quads)?;
    tracing::debug!("Copied {inserted} new quads");
    Ok(inserted)
}

/// Copies all quads of `source` into `target`. See [`copy_quads`].
pub fn import_dataset(
    source: &(impl QuadStore + ?Sized),
    target: &(impl QuadStore + ?Sized),
) -> Result<usize, StorageError> {
    copy_quads(source, target, &QuadPattern::any())
}

/// Copies all triples of `source` into `target`. Returns the number of newly inserted triples.
///
/// Blank nodes are handled as in [`copy_quads`]. The triples are inserted all-or-nothing.
pub fn import_graph(source: &Graph, target: &Graph) -> Result<usize, StorageError> {
    let triples = source.triples()?.try_collect_to_vec()?;
    target.extend(triples)
}
