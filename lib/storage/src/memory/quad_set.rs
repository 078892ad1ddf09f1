use rdfmem_model::{NamedOrBlankNode, Quad};
use rustc_hash::{FxBuildHasher, FxHashMap};

/// A deduplicated set of quads with stable positional access.
///
/// Quads are kept densely in a vector so that readers can walk the set by position. Removing a
/// quad moves the last quad into the freed position.
///
/// The number of quads per graph is tracked so that graph sizes and graph names can be answered
/// without scanning the set.
#[derive(Clone, Debug, Default)]
pub(crate) struct QuadSet {
    quads: Vec<Quad>,
    positions: FxHashMap<Quad, usize>,
    graph_sizes: FxHashMap<Option<NamedOrBlankNode>, usize>,
}

impl QuadSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            quads: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            graph_sizes: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn get(&self, position: usize) -> Option<&Quad> {
        self.quads.get(position)
    }

    pub fn contains(&self, quad: &Quad) -> bool {
        self.positions.contains_key(quad)
    }

    /// Returns the number of quads in the given graph.
    pub fn graph_len(&self, graph_name: Option<&NamedOrBlankNode>) -> usize {
        self.graph_sizes
            .get(&graph_name.cloned())
            .copied()
            .unwrap_or_default()
    }

    /// Iterates over the labels of all non-empty named graphs.
    pub fn named_graphs(&self) -> impl Iterator<Item = &NamedOrBlankNode> {
        self.graph_sizes.keys().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Inserts `quad`. Returns false if the set already contained it.
    pub fn insert(&mut self, quad: Quad) -> bool {
        if self.positions.contains_key(&quad) {
            return false;
        }
        *self.graph_sizes.entry(quad.graph_name.clone()).or_default() += 1;
        self.positions.insert(quad.clone(), self.quads.len());
        self.quads.push(quad);
        true
    }

    /// Removes `quad`. Returns false if the set did not contain it.
    pub fn remove(&mut self, quad: &Quad) -> bool {
        let Some(position) = self.positions.remove(quad) else {
            return false;
        };
        let removed = self.quads.swap_remove(position);
        if let Some(moved) = self.quads.get(position) {
            self.positions.insert(moved.clone(), position);
        }
        self.decrement_graph(removed.graph_name);
        true
    }

    /// Removes all quads for which `predicate` returns true. Returns the number of removed quads.
    pub fn remove_matching(&mut self, predicate: impl Fn(&Quad) -> bool) -> usize {
        let to_remove = self
            .quads
            .iter()
            .filter(|quad| predicate(quad))
            .cloned()
            .collect::<Vec<_>>();
        for quad in &to_remove {
            self.remove(quad);
        }
        to_remove.len()
    }

    pub fn clear(&mut self) {
        self.quads.clear();
        self.positions.clear();
        self.graph_sizes.clear();
    }

    fn decrement_graph(&mut self, graph_name: Option<NamedOrBlankNode>) {
        if let Some(size) = self.graph_sizes.get_mut(&graph_name) {
            *size -= 1;
            if *size == 0 {
                self.graph_sizes.remove(&graph_name);
            }
        }
    }
}
