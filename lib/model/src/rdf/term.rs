use crate::{BlankNode, Iri, Literal, ModelError, ScopeId};
use std::fmt;

/// An RDF [term](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-term).
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Term {
    Iri(Iri),
    BlankNode(BlankNode),
    Literal(Literal),
}

impl Term {
    /// A short name of the kind of this term. Used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Term::Iri(_) => "an IRI",
            Term::BlankNode(_) => "a blank node",
            Term::Literal(_) => "a literal",
        }
    }

    /// Returns true if the term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Returns true if the term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Returns true if the term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(inner) => inner.fmt(f),
            Term::BlankNode(inner) => inner.fmt(f),
            Term::Literal(inner) => inner.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(value: Iri) -> Self {
        Term::Iri(value)
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl From<NamedOrBlankNode> for Term {
    fn from(value: NamedOrBlankNode) -> Self {
        match value {
            NamedOrBlankNode::Iri(inner) => Term::Iri(inner),
            NamedOrBlankNode::BlankNode(inner) => Term::BlankNode(inner),
        }
    }
}

impl TryFrom<Term> for Iri {
    type Error = ModelError;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::Iri(inner) => Ok(inner),
            other => Err(ModelError::UnexpectedTermKind {
                expected: "an IRI",
                found: other.kind(),
            }),
        }
    }
}

/// A term that may be used as a subject or as a graph label.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum NamedOrBlankNode {
    Iri(Iri),
    BlankNode(BlankNode),
}

impl fmt::Display for NamedOrBlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamedOrBlankNode::Iri(inner) => inner.fmt(f),
            NamedOrBlankNode::BlankNode(inner) => inner.fmt(f),
        }
    }
}

impl From<Iri> for NamedOrBlankNode {
    fn from(value: Iri) -> Self {
        NamedOrBlankNode::Iri(value)
    }
}

impl From<BlankNode> for NamedOrBlankNode {
    fn from(value: BlankNode) -> Self {
        NamedOrBlankNode::BlankNode(value)
    }
}

impl TryFrom<Term> for NamedOrBlankNode {
    type Error = ModelError;

    fn try_from(value: Term) -> Result<Self, Self::Error> {
        match value {
            Term::Iri(inner) => Ok(NamedOrBlankNode::Iri(inner)),
            Term::BlankNode(inner) => Ok(NamedOrBlankNode::BlankNode(inner)),
            Term::Literal(_) => Err(ModelError::UnexpectedTermKind {
                expected: "an IRI or a blank node",
                found: "a literal",
            }),
        }
    }
}

/// Where a blank node exposed through a [`TermView`] comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlankNodeOrigin {
    /// The blank node was minted by a [`TermFactory`](crate::TermFactory) of this crate.
    Scope(ScopeId),
    /// The blank node belongs to another RDF implementation, identified by name.
    Foreign(&'static str),
}

/// A read-only view of a term, independent of the implementation that holds the term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermView<'a> {
    Iri(&'a str),
    BlankNode {
        reference: &'a str,
        origin: BlankNodeOrigin,
    },
    Literal {
        value: &'a str,
        datatype: &'a str,
        language: Option<&'a str>,
    },
    /// A term kind that is not part of the RDF 1.1 data model (e.g., a variable).
    Unsupported(&'static str),
}

/// Any RDF term implementation.
///
/// Stores accept terms through this trait and rebuild them as their own [`Term`] instances.
pub trait RdfTerm {
    /// Returns a view on the term.
    fn view(&self) -> TermView<'_>;
}

impl<T: RdfTerm + ?Sized> RdfTerm for &T {
    fn view(&self) -> TermView<'_> {
        (**self).view()
    }
}

impl RdfTerm for Iri {
    fn view(&self) -> TermView<'_> {
        TermView::Iri(self.as_str())
    }
}

impl RdfTerm for BlankNode {
    fn view(&self) -> TermView<'_> {
        TermView::BlankNode {
            reference: self.unique_reference(),
            origin: BlankNodeOrigin::Scope(self.scope()),
        }
    }
}

impl RdfTerm for Literal {
    fn view(&self) -> TermView<'_> {
        TermView::Literal {
            value: self.value(),
            datatype: self.datatype().as_str(),
            language: self.language(),
        }
    }
}

impl RdfTerm for Term {
    fn view(&self) -> TermView<'_> {
        match self {
            Term::Iri(inner) => inner.view(),
            Term::BlankNode(inner) => inner.view(),
            Term::Literal(inner) => inner.view(),
        }
    }
}

impl RdfTerm for NamedOrBlankNode {
    fn view(&self) -> TermView<'_> {
        match self {
            NamedOrBlankNode::Iri(inner) => inner.view(),
            NamedOrBlankNode::BlankNode(inner) => inner.view(),
        }
    }
}
