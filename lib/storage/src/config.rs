/// What [`Dataset::named_graph`](crate::Dataset::named_graph) returns for a label that no quad
/// carries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingGraph {
    /// Return `None`.
    #[default]
    Absent,
    /// Return an empty live view. Inserting into the view creates the graph.
    EmptyView,
}

/// Holds the configuration of an in-memory store.
///
/// ```
/// use rdfmem_storage::{MissingGraph, StoreConfig};
///
/// let config = StoreConfig::default()
///     .with_missing_graph(MissingGraph::EmptyView)
///     .with_concurrent_modification_detection(true);
/// assert!(!config.read_only);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Whether the store refuses all mutations and the minting of blank nodes.
    pub read_only: bool,
    /// How lookups of unknown named graphs behave.
    pub missing_graph: MissingGraph,
    /// Whether statement streams fail once the store changed after they were created. If false,
    /// streams keep iterating over the snapshot they were created from.
    pub detect_concurrent_modification: bool,
    /// The number of statements to reserve space for.
    pub initial_capacity: usize,
}

impl StoreConfig {
    /// Sets [`Self::read_only`].
    #[must_use]
    pub fn with_read_only(self, read_only: bool) -> Self {
        Self { read_only, ..self }
    }

    /// Sets [`Self::missing_graph`].
    #[must_use]
    pub fn with_missing_graph(self, missing_graph: MissingGraph) -> Self {
        Self {
            missing_graph,
            ..self
        }
    }

    /// Sets [`Self::detect_concurrent_modification`].
    #[must_use]
    pub fn with_concurrent_modification_detection(self, detect: bool) -> Self {
        Self {
            detect_concurrent_modification: detect,
            ..self
        }
    }

    /// Sets [`Self::initial_capacity`].
    #[must_use]
    pub fn with_initial_capacity(self, initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..self
        }
    }
}
