//! An in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
//!
//! The entry point of the module is the [`Dataset`] struct.
//!
//! Usage example:
//! ```
//! use rdfmem_model::{Iri, Literal, Quad};
//! use rdfmem_storage::{Dataset, QuadPattern};
//!
//! let dataset = Dataset::new();
//!
//! // insertion
//! let ex = Iri::new("http://example.com")?;
//! let quad = Quad::new(ex.clone(), ex.clone(), Literal::new_simple_literal("v"), None);
//! dataset.insert(&quad)?;
//!
//! // quad filter
//! let results = dataset.quads_for_pattern(&QuadPattern::any())?.try_collect_to_vec()?;
//! assert_eq!(vec![quad], results);
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

use crate::memory::MemStore;
use crate::{
    Graph, MissingGraph, QuadPattern, QuadStream, StatementStream, StorageError, StoreConfig,
};
use rdfmem_model::{NamedOrBlankNode, QuadLike, RdfTerm, Term, TermFactory};
use std::sync::Arc;

/// An in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset): a set of
/// quads, partitioned into the default graph and any number of named graphs.
///
/// Cloning a dataset is cheap and yields a handle on the same quads. Terms inserted into the
/// dataset are rewritten into the dataset's own terms first. In particular, blank nodes minted
/// elsewhere are mapped to blank nodes of the dataset's scope.
#[derive(Clone, Debug)]
pub struct Dataset {
    store: Arc<MemStore>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    /// Creates an empty dataset with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty dataset using the given `config`.
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: Arc::new(MemStore::new(config)),
        }
    }

    /// The configuration the dataset was created with.
    pub fn config(&self) -> &StoreConfig {
        self.store.config()
    }

    /// The factory for terms of this dataset's blank node scope.
    pub fn factory(&self) -> &TermFactory {
        self.store.canonicalizer().factory()
    }

    /// Rewrites `term` into a term of this dataset. Foreign blank nodes are mapped to local ones.
    pub fn canonicalize_term(&self, term: &dyn RdfTerm) -> Result<Term, StorageError> {
        self.store.check_open()?;
        self.store.canonicalizer().canonicalize(term)
    }

    /// Inserts a quad. Returns true if the quad was not yet part of the dataset.
    ///
    /// Triples are inserted into the default graph.
    pub fn insert(&self, quad: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_writable()?;
        let quad = self.store.canonicalizer().canonicalize_quad(quad, None)?;
        Ok(self.store.insert([quad])? > 0)
    }

    /// Inserts the quad built from the given terms.
    ///
    /// Fails with [`StorageError::InvalidArgument`] if a term is not allowed in its position.
    pub fn insert_terms(
        &self,
        subject: &dyn RdfTerm,
        predicate: &dyn RdfTerm,
        object: &dyn RdfTerm,
        graph_name: Option<&dyn RdfTerm>,
    ) -> Result<bool, StorageError> {
        self.insert(&TermQuad {
            subject,
            predicate,
            object,
            graph_name,
        })
    }

    /// Inserts all `quads`. Returns the number of quads that were not yet part of the dataset.
    ///
    /// Either all quads are inserted or, if one of them is invalid, none.
    pub fn extend<Q: QuadLike>(
        &self,
        quads: impl IntoIterator<Item = Q>,
    ) -> Result<usize, StorageError> {
        self.store.check_writable()?;
        let canonicalizer = self.store.canonicalizer();
        let quads = quads.into_iter().collect::<Vec<_>>();
        for quad in &quads {
            canonicalizer.lookup_quad(quad, None)?;
        }
        let quads = quads
            .iter()
            .map(|quad| canonicalizer.canonicalize_quad(quad, None))
            .collect::<Result<Vec<_>, _>>()?;
        let total = quads.len();
        let inserted = self.store.insert(quads)?;
        tracing::debug!("Inserted {inserted} new quads out of {total}");
        Ok(inserted)
    }

    /// Returns true if the dataset contains a quad equal to `quad`.
    pub fn contains(&self, quad: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_open()?;
        match self.store.canonicalizer().lookup_quad(quad, None)? {
            Some(quad) => self.store.contains(&quad),
            None => Ok(false),
        }
    }

    /// Returns true if any quad matches `pattern`.
    pub fn contains_pattern(&self, pattern: &QuadPattern) -> Result<bool, StorageError> {
        self.store.check_open()?;
        match self.store.canonicalizer().lookup_pattern(pattern)? {
            Some(pattern) => self.store.contains_pattern(&pattern),
            None => Ok(false),
        }
    }

    /// Removes a quad. Returns true if the quad was part of the dataset.
    pub fn remove(&self, quad: &(impl QuadLike + ?Sized)) -> Result<bool, StorageError> {
        self.store.check_writable()?;
        match self.store.canonicalizer().lookup_quad(quad, None)? {
            Some(quad) => self.store.remove(&quad),
            None => Ok(false),
        }
    }

    /// Removes all quads matching `pattern`. Returns the number of removed quads.
    pub fn remove_pattern(&self, pattern: &QuadPattern) -> Result<usize, StorageError> {
        self.store.check_writable()?;
        match self.store.canonicalizer().lookup_pattern(pattern)? {
            Some(pattern) => self.store.remove_pattern(&pattern),
            None => Ok(0),
        }
    }

    /// Removes all quads.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.clear()
    }

    /// Returns the number of quads.
    pub fn len(&self) -> Result<usize, StorageError> {
        self.store.len()
    }

    /// Returns true if no graph contains a quad.
    pub fn is_empty(&self) -> Result<bool, StorageError> {
        Ok(self.len()? == 0)
    }

    /// Returns a stream over all quads.
    pub fn quads(&self) -> Result<QuadStream, StorageError> {
        self.quads_for_pattern(&QuadPattern::any())
    }

    /// Returns a stream over the quads matching `pattern`.
    pub fn quads_for_pattern(&self, pattern: &QuadPattern) -> Result<QuadStream, StorageError> {
        let snapshot = self.store.snapshot()?;
        Ok(match self.store.canonicalizer().lookup_pattern(pattern)? {
            Some(pattern) => StatementStream::new(&self.store, snapshot, pattern, |quad| quad),
            None => StatementStream::empty(|quad| quad),
        })
    }

    /// Returns a live view on the default graph.
    pub fn graph(&self) -> Graph {
        Graph::view(Arc::clone(&self.store), None)
    }

    /// Returns a live view on the named graph `graph_name`.
    ///
    /// For labels that no quad carries, the result depends on [`StoreConfig::missing_graph`]:
    /// either `None` or an empty view.
    pub fn named_graph(&self, graph_name: &dyn RdfTerm) -> Result<Option<Graph>, StorageError> {
        self.store.check_open()?;
        let canonicalizer = self.store.canonicalizer();
        let graph_name = match self.store.config().missing_graph {
            MissingGraph::Absent => {
                let Some(graph_name) = canonicalizer.lookup_graph_name(graph_name)? else {
                    return Ok(None);
                };
                if self.store.graph_len(Some(&graph_name))? == 0 {
                    return Ok(None);
                }
                graph_name
            }
            MissingGraph::EmptyView => canonicalizer.canonicalize_graph_name(graph_name)?,
        };
        Ok(Some(Graph::view(Arc::clone(&self.store), Some(graph_name))))
    }

    /// Returns the labels of all named graphs that contain at least one quad.
    pub fn graph_names(&self) -> Result<Vec<NamedOrBlankNode>, StorageError> {
        self.store.named_graphs()
    }

    /// Closes the dataset. All later operations on the dataset and its views fail with
    /// [`StorageError::Closed`].
    pub fn close(&self) {
        self.store.close();
    }
}

/// A quad whose positions are borrowed terms of any implementation.
pub(crate) struct TermQuad<'a> {
    pub subject: &'a dyn RdfTerm,
    pub predicate: &'a dyn RdfTerm,
    pub object: &'a dyn RdfTerm,
    pub graph_name: Option<&'a dyn RdfTerm>,
}

impl QuadLike for TermQuad<'_> {
    fn subject(&self) -> &dyn RdfTerm {
        self.subject
    }

    fn predicate(&self) -> &dyn RdfTerm {
        self.predicate
    }

    fn object(&self) -> &dyn RdfTerm {
        self.object
    }

    fn graph_name(&self) -> Option<&dyn RdfTerm> {
        self.graph_name
    }
}
