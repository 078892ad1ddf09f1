//! The RDF term and statement model of rdfmem.
//!
//! Terms are immutable values. Equality follows the RDF 1.1 rules with two refinements: language
//! tags are compared without regard to ASCII case and blank nodes are only equal if they were
//! minted by the same scope.

mod error;
mod foreign;
mod rdf;
pub mod vocab;

pub use error::*;
pub use rdf::*;

// Re-export the parse errors of the upstream validators.
pub use oxiri::IriParseError;
pub use oxrdf::LanguageTagParseError;
