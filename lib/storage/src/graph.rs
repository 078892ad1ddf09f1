use crate::dataset::TermQuad;
use crate::memory::MemStore;
use crate::{
    ActiveGraph, QuadPattern, StatementStream, StorageError, StoreConfig, TriplePattern,
    TripleStream,
};
use rdfmem_model::{NamedOrBlankNode, QuadLike, RdfTerm, Term, TermFactory, Triple};
use std::sync::Arc;

/// An in-memory [RDF graph](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-graph).
///
/// A graph is either standalone, owning its own statements, or a live view on one graph of a
/// [`Dataset`](crate::Dataset). Changes made through a view are visible in the dataset and vice
/// versa.
///
/// ```
/// use rdfmem_model::{Iri, Literal, Triple};
/// use rdfmem_storage::Graph;
///
/// let graph = Graph::new();
/// let ex = Iri::new("http://example.com")?;
/// let triple = Triple::new(ex.clone(), ex, Literal::new_simple_literal("v"));
///
/// assert!(graph.insert(&triple)?);
/// assert!(graph.contains(&triple)?);
/// assert_eq!(graph.triples()?.try_collect_to_vec()?, vec![triple]);
/// # Result::<_, Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    store: Arc<MemStore>,
    graph_name: Option<NamedOrBlankNode>,
    is_view: bool,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty standalone graph.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty standalone graph using the given `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: Arc::new(MemStore::new(config)),
            graph_name: None,
            is_view: false,
        }
    }

    pub(crate) fn view(store: Arc<MemStore>, graph_name: Option<NamedOrBlankNode>) -> Self {
        Self {
            store,
            graph_name,
            is_view: true,
        }
    }

    /// The configuration of the underlying store.
    pub fn config(&self) -> &StoreConfig {
        self.store.config()
    }

    /// The factory for terms of this graph's blank node scope. Views share the scope of their
    /// dataset.
    pub fn factory(&self) -> &TermFactory {
        self.store.canonicalizer().factory()
    }

    /// The label of the viewed graph. `None` for the default graph and for standalone graphs.
    pub fn graph_name(&self) -> Option<&NamedOrBlankNode> {
        self.graph_name.as_ref()
    }

    /// Returns true if the graph is a view on a dataset.
    pub fn is_view(&self) -> bool {
        self.is_view
    }

    /// Rewrites `term` into a term of the underlying store.
    pub fn canonicalize_term(&self, term: &dyn RdfTerm) -> Result<Term, StorageError> {
        self.store.check_open()?;
        self.store.canonicalizer().canonicalize(term)
    }

    /// Inserts a triple. Returns true if the triple was not yet part of the graph.
    ///
    /// The graph name of quads is ignored.
    pub fn insert(&self, triple: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_writable()?;
        let quad = self
            .store
            .canonicalizer()
            .canonicalize_quad(triple, Some(self.graph_name.as_ref()))?;
        Ok(self.store.insert([quad])? > 0)
    }

    /// Inserts the triple built from the given terms.
    pub fn insert_terms(
        &self,
        subject: &dyn RdfTerm,
        predicate: &dyn RdfTerm,
        object: &dyn RdfTerm,
    ) -> Result<bool, StorageError> {
        self.insert(&TermQuad {
            subject,
            predicate,
            object,
            graph_name: None,
        })
    }

    /// Inserts all `triples`. Either all of them are inserted or none.
    pub fn extend<T: QuadLike>(
        &self,
        triples: impl IntoIterator<Item = T>,
    ) -> Result<usize, StorageError> {
        self.store.check_writable()?;
        let canonicalizer = self.store.canonicalizer();
        let graph_name = Some(self.graph_name.as_ref());
        let triples = triples.into_iter().collect::<Vec<_>>();
        for triple in &triples {
            canonicalizer.lookup_quad(triple, graph_name)?;
        }
        let quads = triples
            .iter()
            .map(|triple| canonicalizer.canonicalize_quad(triple, graph_name))
            .collect::<Result<Vec<_>, _>>()?;
        let inserted = self.store.insert(quads)?;
        tracing::debug!("Inserted {inserted} new triples into {}", self.describe());
        Ok(inserted)
    }

    /// Returns true if the graph contains a triple equal to `triple`.
    pub fn contains(&self, triple: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_open()?;
        match self
            .store
            .canonicalizer()
            .lookup_quad(triple, Some(self.graph_name.as_ref()))?
        {
            Some(quad) => self.store.contains(&quad),
            None => Ok(false),
        }
    }

    /// Returns true if any triple matches `pattern`.
    pub fn contains_pattern(&self, pattern: &TriplePattern) -> Result<bool, StorageError> {
        self.store.check_open()?;
        match self.lookup_pattern(pattern)? {
            Some(pattern) => self.store.contains_pattern(&pattern),
            None => Ok(false),
        }
    }

    /// Removes a triple. Returns true if the triple was part of the graph.
    pub fn remove(&self, triple: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_writable()?;
        match self
            .store
            .canonicalizer()
            .lookup_quad(triple, Some(self.graph_name.as_ref()))?
        {
            Some(quad) => self.store.remove(&quad),
            None => Ok(false),
        }
    }

    /// Removes all triples matching `pattern`. Returns the number of removed triples.
    pub fn remove_pattern(&self, pattern: &TriplePattern) -> Result<usize, StorageError> {
        self.store.check_writable()?;
        match self.lookup_pattern(pattern)? {
            Some(pattern) => self.store.remove_pattern(&pattern),
            None => Ok(0),
        }
    }

    /// Removes all triples. Clearing a view leaves the other graphs of the dataset untouched.
    pub fn clear(&self) -> Result<(), StorageError> {
        if self.is_view {
            self.store
                .remove_pattern(&TriplePattern::any().in_graph(self.active_graph()))?;
            return Ok(());
        }
        self.store.clear()
    }

    /// Returns the number of triples.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.store.graph_len(self.graph_name.as_ref())
    }

    /// Returns true if the graph has no triples.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Returns a stream over all triples.
    pub fn triples(&self) -> Result<TripleStream, StorageError> {
        self.triples_for_pattern(&TriplePattern::any())
    }

    /// Returns a stream over the triples matching `pattern`.
    pub fn triples_for_pattern(
        &self,
        pattern: &TriplePattern,
    ) -> Result<TripleStream, StorageError> {
        let snapshot = self.store.snapshot()?;
        Ok(match self.lookup_pattern(pattern)? {
            Some(pattern) => StatementStream::new(&self.store, snapshot, pattern, Triple::from),
            None => StatementStream::empty(Triple::from),
        })
    }

    /// Closes a standalone graph. Views are closed together with their dataset, so closing a
    /// view has no effect.
    pub fn close(&self) {
        if !self.is_view {
            self.store.close();
        }
    }

    fn active_graph(&self) -> ActiveGraph {
        ActiveGraph::from(self.graph_name.clone())
    }

    fn lookup_pattern(&self, pattern: &TriplePattern) -> Result<Option<QuadPattern>, StorageError> {
        let pattern = pattern.clone().in_graph(self.active_graph());
        self.store.canonicalizer().lookup_pattern(&pattern)
    }

    fn describe(&self) -> String {
        match (&self.graph_name, self.is_view) {
            (Some(graph_name), _) => format!("graph {graph_name}"),
            (None, true) => "the default graph".to_owned(),
            (None, false) => "standalone graph".to_owned(),
        }
    }
}
