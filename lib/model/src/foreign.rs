//! Exposes the terms of the oxigraph data model (`oxrdf`) as foreign terms.
//!
//! Stores never keep `oxrdf` terms. They are rebuilt as this crate's terms upon insertion, with
//! `oxrdf` blank nodes being mapped to blank nodes of the store's own scope.

use crate::{BlankNodeOrigin, QuadLike, RdfTerm, TermView};

const OXRDF: &str = "oxrdf";

impl RdfTerm for oxrdf::NamedNode {
    fn view(&self) -> TermView<'_> {
        TermView::Iri(self.as_str())
    }
}

impl RdfTerm for oxrdf::BlankNode {
    fn view(&self) -> TermView<'_> {
        TermView::BlankNode {
            reference: self.as_str(),
            origin: BlankNodeOrigin::Foreign(OXRDF),
        }
    }
}

impl RdfTerm for oxrdf::Literal {
    fn view(&self) -> TermView<'_> {
        TermView::Literal {
            value: self.value(),
            datatype: self.datatype().as_str(),
            language: self.language(),
        }
    }
}

impl RdfTerm for oxrdf::Variable {
    fn view(&self) -> TermView<'_> {
        TermView::Unsupported("a variable")
    }
}

impl RdfTerm for oxrdf::Term {
    fn view(&self) -> TermView<'_> {
        match self {
            oxrdf::Term::NamedNode(inner) => inner.view(),
            oxrdf::Term::BlankNode(inner) => inner.view(),
            oxrdf::Term::Literal(inner) => inner.view(),
        }
    }
}

impl RdfTerm for oxrdf::Subject {
    fn view(&self) -> TermView<'_> {
        match self {
            oxrdf::Subject::NamedNode(inner) => inner.view(),
            oxrdf::Subject::BlankNode(inner) => inner.view(),
        }
    }
}

impl RdfTerm for oxrdf::NamedOrBlankNode {
    fn view(&self) -> TermView<'_> {
        match self {
            oxrdf::NamedOrBlankNode::NamedNode(inner) => inner.view(),
            oxrdf::NamedOrBlankNode::BlankNode(inner) => inner.view(),
        }
    }
}

impl QuadLike for oxrdf::Triple {
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

impl QuadLike for oxrdf::Quad {
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
        match &self.graph_name {
            oxrdf::GraphName::NamedNode(inner) => Some(inner),
            oxrdf::GraphName::BlankNode(inner) => Some(inner),
            oxrdf::GraphName::DefaultGraph => None,
        }
    }
}
