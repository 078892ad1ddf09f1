mod blank_node;
mod factory;
mod iri;
mod literal;
mod term;
mod triple;

pub use blank_node::BlankNode;
pub use blank_node::ScopeId;
pub use factory::TermFactory;
pub use iri::Iri;
pub use literal::Literal;
pub use term::{BlankNodeOrigin, NamedOrBlankNode, RdfTerm, Term, TermView};
pub use triple::{Quad, QuadLike, Statement, Triple};
