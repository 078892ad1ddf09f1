use crate::{ActiveGraph, QuadPattern, StorageError};
use dashmap::{DashMap, DashSet};
use rdfmem_model::vocab::rdf;
use rdfmem_model::{
    BlankNode, BlankNodeOrigin, Iri, Literal, ModelError, NamedOrBlankNode, Quad, QuadLike,
    RdfTerm, Term, TermFactory, TermView,
};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;

/// Identifies a blank node that was not minted by the local scope.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct ForeignBlankNodeKey {
    origin: BlankNodeOrigin,
    reference: Box<str>,
}

/// Rewrites terms of any implementation into the terms of one store.
///
/// # Interning
///
/// IRIs, language tags and lexical forms are interned. All terms produced by the canonicalizer
/// share one allocation per distinct string. IRIs and language tags are validated before they are
/// interned. Language tags are interned case-insensitively and keep the casing they were first
/// seen with.
///
/// The interning tables only grow: removing or clearing statements does not reclaim strings.
/// [`Self::canonicalize_quad`] validates all positions before interning anything, so statements
/// that are rejected leave no strings behind.
///
/// # Blank Nodes
///
/// Blank nodes minted by the local scope are kept. All other blank nodes are mapped to a fresh
/// local blank node the first time they are seen. The mapping is never invalidated, so the same
/// foreign blank node always yields the same local blank node for the lifetime of the store.
///
/// # Validation
///
/// The lookup methods never mint or intern, but they report invalid input exactly like the
/// canonicalizing methods. Whether a call fails never depends on what the store has seen before.
#[derive(Debug)]
pub struct TermCanonicalizer {
    factory: TermFactory,
    iris: DashSet<Arc<str>, FxBuildHasher>,
    languages: DashMap<Box<str>, Arc<str>, FxBuildHasher>,
    values: DashSet<Arc<str>, FxBuildHasher>,
    blank_nodes: DashMap<ForeignBlankNodeKey, BlankNode, FxBuildHasher>,
}

impl TermCanonicalizer {
    /// Creates a canonicalizer that mints local blank nodes with `factory`.
    pub fn new(factory: TermFactory) -> Self {
        Self {
            factory,
            iris: DashSet::default(),
            languages: DashMap::default(),
            values: DashSet::default(),
            blank_nodes: DashMap::default(),
        }
    }

    /// The factory that mints the local blank nodes.
    pub fn factory(&self) -> &TermFactory {
        &self.factory
    }

    /// Returns the local version of `term`, minting a local blank node if necessary.
    pub fn canonicalize(&self, term: &dyn RdfTerm) -> Result<Term, StorageError> {
        Ok(match term.view() {
            TermView::Iri(iri) => Term::Iri(self.obtain_iri(iri)?),
            TermView::BlankNode { reference, origin } => {
                Term::BlankNode(self.obtain_blank_node(reference, origin)?)
            }
            TermView::Literal {
                value,
                datatype,
                language,
            } => {
                check_literal_shape(datatype, language)?;
                let datatype = self.obtain_iri(datatype)?;
                let language = language
                    .map(|language| self.obtain_language(language))
                    .transpose()?;
                let value = intern_str(&self.values, value);
                Term::Literal(build_literal(value, datatype, language)?)
            }
            TermView::Unsupported(kind) => return Err(StorageError::InvalidTermKind(kind)),
        })
    }

    /// Returns the local version of `term` if the store may contain it.
    ///
    /// Never mints. Returns `None` for foreign blank nodes that have not been seen before and for
    /// terms using strings that were never interned, as no stored statement can contain them.
    /// Invalid IRIs, language tags and literals are still reported as errors.
    pub fn lookup(&self, term: &dyn RdfTerm) -> Result<Option<Term>, StorageError> {
        Ok(match term.view() {
            TermView::Iri(iri) => self.lookup_iri(iri)?.map(Term::Iri),
            TermView::BlankNode { reference, origin } => self
                .try_get_blank_node(reference, origin)?
                .map(Term::BlankNode),
            TermView::Literal {
                value,
                datatype,
                language,
            } => {
                check_literal_shape(datatype, language)?;
                let datatype = self.lookup_iri(datatype)?;
                let language = match language {
                    Some(language) => match self.lookup_language(language)? {
                        Some(language) => Some(language),
                        None => return Ok(None),
                    },
                    None => None,
                };
                let (Some(value), Some(datatype)) = (try_get_str(&self.values, value), datatype)
                else {
                    return Ok(None);
                };
                Some(Term::Literal(build_literal(value, datatype, language)?))
            }
            TermView::Unsupported(kind) => return Err(StorageError::InvalidTermKind(kind)),
        })
    }

    /// Returns the local version of a graph label. Fails if `term` is neither an IRI nor a blank
    /// node.
    pub fn canonicalize_graph_name(
        &self,
        term: &dyn RdfTerm,
    ) -> Result<NamedOrBlankNode, StorageError> {
        check_named_or_blank_node(term)?;
        into_graph_name(self.canonicalize(term)?)
    }

    /// Looks up a graph label. Fails if `term` is neither an IRI nor a blank node.
    pub fn lookup_graph_name(
        &self,
        term: &dyn RdfTerm,
    ) -> Result<Option<NamedOrBlankNode>, StorageError> {
        check_named_or_blank_node(term)?;
        self.lookup(term)?.map(into_graph_name).transpose()
    }

    /// Canonicalizes all positions of `quad`, checking that each term is allowed in its position.
    ///
    /// If `graph_name` is given, it replaces the graph name of `quad`. Nothing is interned or
    /// minted if any position is invalid.
    pub fn canonicalize_quad(
        &self,
        quad: &(impl QuadLike + ?Sized),
        graph_name: Option<Option<&NamedOrBlankNode>>,
    ) -> Result<Quad, StorageError> {
        self.lookup_quad(quad, graph_name)?;
        let subject = NamedOrBlankNode::try_from(self.canonicalize(quad.subject())?)?;
        let predicate = Iri::try_from(self.canonicalize(quad.predicate())?)?;
        let object = self.canonicalize(quad.object())?;
        let graph_name = match graph_name {
            Some(graph_name) => graph_name.cloned(),
            None => quad
                .graph_name()
                .map(|g| self.canonicalize_graph_name(g))
                .transpose()?,
        };
        Ok(Quad {
            subject,
            predicate,
            object,
            graph_name,
        })
    }

    /// Looks up all positions of `quad`. See [`Self::lookup`].
    ///
    /// All positions are checked before the result is decided, so an invalid quad always fails.
    pub fn lookup_quad(
        &self,
        quad: &(impl QuadLike + ?Sized),
        graph_name: Option<Option<&NamedOrBlankNode>>,
    ) -> Result<Option<Quad>, StorageError> {
        check_named_or_blank_node(quad.subject())?;
        check_iri(quad.predicate())?;
        let subject = self.lookup(quad.subject())?;
        let predicate = self.lookup(quad.predicate())?;
        let object = self.lookup(quad.object())?;
        // The outer `None` marks a label that no stored quad can carry.
        let graph_name = match (graph_name, quad.graph_name()) {
            (Some(graph_name), _) => Some(graph_name.cloned()),
            (None, Some(graph_name)) => self.lookup_graph_name(graph_name)?.map(Some),
            (None, None) => Some(None),
        };
        let (Some(subject), Some(predicate), Some(object), Some(graph_name)) =
            (subject, predicate, object, graph_name)
        else {
            return Ok(None);
        };
        Ok(Some(Quad {
            subject: NamedOrBlankNode::try_from(subject)?,
            predicate: Iri::try_from(predicate)?,
            object,
            graph_name,
        }))
    }

    /// Looks up all bound positions of `pattern`. Returns `None` if the pattern cannot match any
    /// stored quad.
    pub fn lookup_pattern(&self, pattern: &QuadPattern) -> Result<Option<QuadPattern>, StorageError> {
        let subject = pattern
            .subject
            .as_ref()
            .map(|subject| self.lookup_graph_name(subject))
            .transpose()?;
        let predicate = pattern
            .predicate
            .as_ref()
            .map(|predicate| self.lookup_iri(predicate.as_str()))
            .transpose()?;
        let object = pattern
            .object
            .as_ref()
            .map(|object| self.lookup(object))
            .transpose()?;
        let graph = match &pattern.graph {
            ActiveGraph::NamedGraph(graph_name) => self
                .lookup_graph_name(graph_name)?
                .map(ActiveGraph::NamedGraph),
            graph => Some(graph.clone()),
        };

        // A bound position whose term is unknown cannot match.
        let (Some(subject), Some(predicate), Some(object), Some(graph)) = (
            subject.map_or(Some(None), |s| s.map(Some)),
            predicate.map_or(Some(None), |p| p.map(Some)),
            object.map_or(Some(None), |o| o.map(Some)),
            graph,
        ) else {
            return Ok(None);
        };
        Ok(Some(QuadPattern {
            subject,
            predicate,
            object,
            graph,
        }))
    }

    fn obtain_iri(&self, iri: &str) -> Result<Iri, StorageError> {
        if let Some(iri) = self.try_get_iri(iri) {
            return Ok(iri);
        }
        Iri::validate(iri)?;
        Ok(Iri::new_unchecked(intern_str(&self.iris, iri)))
    }

    fn lookup_iri(&self, iri: &str) -> Result<Option<Iri>, StorageError> {
        if let Some(iri) = self.try_get_iri(iri) {
            return Ok(Some(iri));
        }
        Iri::validate(iri)?;
        Ok(None)
    }

    fn try_get_iri(&self, iri: &str) -> Option<Iri> {
        try_get_str(&self.iris, iri).map(Iri::new_unchecked)
    }

    fn obtain_language(&self, language: &str) -> Result<Arc<str>, StorageError> {
        if let Some(language) = self.try_get_language(language) {
            return Ok(language);
        }
        Literal::validate_language_tag(language)?;
        let entry = self
            .languages
            .entry(language.to_ascii_lowercase().into_boxed_str())
            .or_insert_with(|| Arc::from(language));
        Ok(Arc::clone(entry.value()))
    }

    fn lookup_language(&self, language: &str) -> Result<Option<Arc<str>>, StorageError> {
        if let Some(language) = self.try_get_language(language) {
            return Ok(Some(language));
        }
        Literal::validate_language_tag(language)?;
        Ok(None)
    }

    fn try_get_language(&self, language: &str) -> Option<Arc<str>> {
        self.languages
            .get(language.to_ascii_lowercase().as_str())
            .map(|entry| Arc::clone(entry.value()))
    }

    fn obtain_blank_node(
        &self,
        reference: &str,
        origin: BlankNodeOrigin,
    ) -> Result<BlankNode, StorageError> {
        if origin == BlankNodeOrigin::Scope(self.factory.scope()) {
            return self
                .factory
                .restore_blank_node(reference)
                .map_err(StorageError::from_model);
        }

        let key = ForeignBlankNodeKey {
            origin,
            reference: reference.into(),
        };
        let entry = self.blank_nodes.entry(key).or_try_insert_with(|| {
            let local = self
                .factory
                .create_blank_node()
                .map_err(StorageError::from_model)?;
            tracing::trace!(
                "Mapped foreign blank node {reference} ({origin:?}) to local blank node {local}"
            );
            Ok::<_, StorageError>(local)
        })?;
        Ok(entry.value().clone())
    }

    fn try_get_blank_node(
        &self,
        reference: &str,
        origin: BlankNodeOrigin,
    ) -> Result<Option<BlankNode>, StorageError> {
        if origin == BlankNodeOrigin::Scope(self.factory.scope()) {
            return self
                .factory
                .restore_blank_node(reference)
                .map(Some)
                .map_err(StorageError::from_model);
        }

        let key = ForeignBlankNodeKey {
            origin,
            reference: reference.into(),
        };
        Ok(self.blank_nodes.get(&key).map(|entry| entry.value().clone()))
    }
}

/// Fails unless `term` may be used as a subject or graph label.
fn check_named_or_blank_node(term: &dyn RdfTerm) -> Result<(), StorageError> {
    match term.view() {
        TermView::Iri(_) | TermView::BlankNode { .. } => Ok(()),
        TermView::Literal { .. } => Err(ModelError::UnexpectedTermKind {
            expected: "an IRI or a blank node",
            found: "a literal",
        }
        .into()),
        TermView::Unsupported(kind) => Err(StorageError::InvalidTermKind(kind)),
    }
}

/// Fails unless `term` may be used as a predicate.
fn check_iri(term: &dyn RdfTerm) -> Result<(), StorageError> {
    let found = match term.view() {
        TermView::Iri(_) => return Ok(()),
        TermView::BlankNode { .. } => "a blank node",
        TermView::Literal { .. } => "a literal",
        TermView::Unsupported(kind) => return Err(StorageError::InvalidTermKind(kind)),
    };
    Err(ModelError::UnexpectedTermKind {
        expected: "an IRI",
        found,
    }
    .into())
}

/// A language tag is present iff the datatype is `rdf:langString`.
fn check_literal_shape(datatype: &str, language: Option<&str>) -> Result<(), ModelError> {
    let is_lang_string = rdf::LANG_STRING == datatype;
    match language {
        Some(_) if !is_lang_string => Err(ModelError::LanguageTagDatatypeMismatch(
            datatype.to_owned(),
        )),
        None if is_lang_string => Err(ModelError::LanguageTagRequired),
        _ => Ok(()),
    }
}

fn build_literal(
    value: Arc<str>,
    datatype: Iri,
    language: Option<Arc<str>>,
) -> Result<Literal, ModelError> {
    match language {
        Some(language) => Ok(Literal::new_language_tagged_literal_unchecked(
            value, language,
        )),
        None => Literal::new_typed_literal(value, datatype),
    }
}

fn into_graph_name(term: Term) -> Result<NamedOrBlankNode, StorageError> {
    Ok(NamedOrBlankNode::try_from(term)?)
}

fn intern_str(set: &DashSet<Arc<str>, FxBuildHasher>, value: &str) -> Arc<str> {
    let found = set.get(value);
    match found {
        None => {
            let result = Arc::<str>::from(value);
            set.insert(Arc::clone(&result));
            result
        }
        Some(entry) => Arc::clone(entry.key()),
    }
}

fn try_get_str(set: &DashSet<Arc<str>, FxBuildHasher>, value: &str) -> Option<Arc<str>> {
    set.get(value).map(|entry| Arc::clone(entry.key()))
}
