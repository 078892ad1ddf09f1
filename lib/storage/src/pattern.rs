use rdfmem_model::{Iri, NamedOrBlankNode, Quad, Term, Triple};

/// The graphs a [`QuadPattern`] is evaluated against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ActiveGraph {
    /// Matches quads in any graph, including the default graph.
    #[default]
    AllGraphs,
    /// Matches only quads in the default graph.
    DefaultGraph,
    /// Matches only quads in the given named graph.
    NamedGraph(NamedOrBlankNode),
}

impl ActiveGraph {
    /// Returns true if a quad in the graph `graph_name` is part of the active graph.
    pub fn matches(&self, graph_name: Option<&NamedOrBlankNode>) -> bool {
        match self {
            ActiveGraph::AllGraphs => true,
            ActiveGraph::DefaultGraph => graph_name.is_none(),
            ActiveGraph::NamedGraph(expected) => graph_name == Some(expected),
        }
    }
}

/// Maps the optional graph argument of a query.
///
/// An absent argument matches all graphs, a present but empty argument only the default graph.
impl From<Option<Option<NamedOrBlankNode>>> for ActiveGraph {
    fn from(value: Option<Option<NamedOrBlankNode>>) -> Self {
        match value {
            None => ActiveGraph::AllGraphs,
            Some(None) => ActiveGraph::DefaultGraph,
            Some(Some(graph_name)) => ActiveGraph::NamedGraph(graph_name),
        }
    }
}

impl From<Option<NamedOrBlankNode>> for ActiveGraph {
    fn from(value: Option<NamedOrBlankNode>) -> Self {
        match value {
            None => ActiveGraph::DefaultGraph,
            Some(graph_name) => ActiveGraph::NamedGraph(graph_name),
        }
    }
}

/// A triple pattern. `None` positions are wildcards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TriplePattern {
    pub subject: Option<NamedOrBlankNode>,
    pub predicate: Option<Iri>,
    pub object: Option<Term>,
}

impl TriplePattern {
    /// Builds a pattern. `None` positions match any term.
    pub fn new(
        subject: Option<NamedOrBlankNode>,
        predicate: Option<Iri>,
        object: Option<Term>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }

    /// A pattern that matches every triple.
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns true if `triple` matches all bound positions.
    pub fn matches(&self, triple: &Triple) -> bool {
        matches_positions(
            self.subject.as_ref(),
            self.predicate.as_ref(),
            self.object.as_ref(),
            &triple.subject,
            &triple.predicate,
            &triple.object,
        )
    }

    /// Restricts the pattern to the given graph.
    pub fn in_graph(self, graph: ActiveGraph) -> QuadPattern {
        QuadPattern {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
            graph,
        }
    }
}

/// A quad pattern. `None` positions are wildcards and [`ActiveGraph`] selects the graphs.
///
/// ```
/// use rdfmem_model::{Iri, Quad, Literal};
/// use rdfmem_storage::{ActiveGraph, QuadPattern};
///
/// let p = Iri::new("http://example.com/p")?;
/// let quad = Quad::new(Iri::new("http://example.com/s")?, p.clone(), Literal::new_simple_literal("o"), None);
///
/// assert!(QuadPattern::new(None, Some(p.clone()), None, ActiveGraph::AllGraphs).matches(&quad));
/// assert!(QuadPattern::new(None, Some(p), None, ActiveGraph::DefaultGraph).matches(&quad));
/// # Result::<_, rdfmem_model::ModelError>::Ok(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuadPattern {
    pub subject: Option<NamedOrBlankNode>,
    pub predicate: Option<Iri>,
    pub object: Option<Term>,
    pub graph: ActiveGraph,
}

impl QuadPattern {
    /// Builds a pattern. `None` positions match any term.
    pub fn new(
        subject: Option<NamedOrBlankNode>,
        predicate: Option<Iri>,
        object: Option<Term>,
        graph: impl Into<ActiveGraph>,
    ) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph: graph.into(),
        }
    }

    /// A pattern that matches every quad in every graph.
    pub fn any() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_graph(self, graph: impl Into<ActiveGraph>) -> Self {
        Self {
            graph: graph.into(),
            ..self
        }
    }

    /// Returns true if `quad` is in the active graph and matches all bound positions.
    pub fn matches(&self, quad: &Quad) -> bool {
        self.graph.matches(quad.graph_name.as_ref())
            && matches_positions(
                self.subject.as_ref(),
                self.predicate.as_ref(),
                self.object.as_ref(),
                &quad.subject,
                &quad.predicate,
                &quad.object,
            )
    }
}

fn matches_positions(
    subject: Option<&NamedOrBlankNode>,
    predicate: Option<&Iri>,
    object: Option<&Term>,
    actual_subject: &NamedOrBlankNode,
    actual_predicate: &Iri,
    actual_object: &Term,
) -> bool {
    subject.is_none_or(|s| s == actual_subject)
        && predicate.is_none_or(|p| p == actual_predicate)
        && object.is_none_or(|o| o == actual_object)
}
