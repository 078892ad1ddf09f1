use crate::{Iri, NamedOrBlankNode, RdfTerm, Term};
use std::fmt;

/// An RDF [triple](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-triple).
///
/// The default string formatter returns an N-Triples compatible representation.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Triple {
    pub subject: NamedOrBlankNode,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    /// Builds a triple from terms that are already valid in their positions.
    pub fn new(
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Places the triple into the graph `graph_name` (`None` being the default graph).
    pub fn in_graph(self, graph_name: Option<NamedOrBlankNode>) -> Quad {
        Quad {
            subject: self.subject,
            predicate: self.predicate,
            object: self.object,
            graph_name,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple in an [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// A graph name of `None` places the quad in the default graph. Two quads are equal iff all four
/// positions are equal. Use [`Quad::as_triple`] to compare quads independently of their graph.
///
/// The default string formatter returns an N-Quads compatible representation.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Quad {
    pub subject: NamedOrBlankNode,
    pub predicate: Iri,
    pub object: Term,
    pub graph_name: Option<NamedOrBlankNode>,
}

impl Quad {
    /// Builds a quad from terms that are already valid in their positions. A `graph_name` of
    /// `None` places the quad in the default graph.
    pub fn new(
        subject: impl Into<NamedOrBlankNode>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
        graph_name: Option<NamedOrBlankNode>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph_name,
        }
    }

    /// Projects the quad to a triple, dropping the graph name.
    pub fn as_triple(&self) -> Triple {
        Triple {
            subject: self.subject.clone(),
            predicate: self.predicate.clone(),
            object: self.object.clone(),
        }
    }

    /// Returns true if the quad belongs to the default graph.
    pub fn is_in_default_graph(&self) -> bool {
        self.graph_name.is_none()
    }
}

impl From<Quad> for Triple {
    fn from(quad: Quad) -> Self {
        Self {
            subject: quad.subject,
            predicate: quad.predicate,
            object: quad.object,
        }
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.graph_name {
            Some(graph_name) => write!(
                f,
                "{} {} {} {graph_name} .",
                self.subject, self.predicate, self.object
            ),
            None => write!(f, "{} {} {} .", self.subject, self.predicate, self.object),
        }
    }
}

/// Either a [`Triple`] or a [`Quad`].
///
/// A triple is never equal to a quad, not even to a quad in the default graph.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Statement {
    Triple(Triple),
    Quad(Quad),
}

impl From<Triple> for Statement {
    fn from(value: Triple) -> Self {
        Statement::Triple(value)
    }
}

impl From<Quad> for Statement {
    fn from(value: Quad) -> Self {
        Statement::Quad(value)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Triple(inner) => inner.fmt(f),
            Statement::Quad(inner) => inner.fmt(f),
        }
    }
}

/// Any statement implementation whose positions can be viewed as [`RdfTerm`]s.
///
/// Triples report no graph name.
pub trait QuadLike {
    fn subject(&self) -> &dyn RdfTerm;

    fn predicate(&self) -> &dyn RdfTerm;

    fn object(&self) -> &dyn RdfTerm;

    fn graph_name(&self) -> Option<&dyn RdfTerm>;
}

impl QuadLike for Triple {
    fn subject(&self) -> &dyn RdfTerm {
        &self.subject
    }

    fn predicate(&self) -> &dyn RdfTerm {
        &self.predicate
    }

    fn object(&self) -> &dyn RdfTerm {
        &self.object
    }

    fn graph_name(&self) -> Option<&dyn RdfTerm> {
        None
    }
}

impl QuadLike for Quad {
    fn subject(&self) -> &dyn RdfTerm {
        &self.subject
    }

    fn predicate(&self) -> &dyn RdfTerm {
        &self.predicate
    }

    fn object(&self) -> &dyn RdfTerm {
        &self.object
    }

    fn graph_name(&self) -> Option<&dyn RdfTerm> {
        self.graph_name.as_ref().map(|g| g as &dyn RdfTerm)
    }
}
