use oxiri::IriParseError;
use oxrdf::LanguageTagParseError;
use thiserror::Error;

/// An error raised while building terms or statements from invalid input.
///
/// All of these errors are raised before any store is touched. Therefore, they never leave a store
/// in a partially modified state.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The IRI is not a valid IRI reference.
    #[error("Invalid IRI '{iri}': {error}")]
    InvalidIri {
        /// The IRI itself.
        iri: String,
        /// The parsing error.
        #[source]
        error: IriParseError,
    },
    /// The language tag is empty or not a well-formed BCP47 tag.
    #[error("Invalid language tag '{tag}': {error}")]
    InvalidLanguageTag {
        /// The language tag itself.
        tag: String,
        /// The parsing error.
        #[source]
        error: LanguageTagParseError,
    },
    /// A literal with the `rdf:langString` datatype was requested without a language tag.
    #[error("Literals with the datatype rdf:langString require a language tag")]
    LanguageTagRequired,
    /// A language tag was combined with a datatype other than `rdf:langString`.
    #[error("Language-tagged literals must have the datatype rdf:langString, found <{0}>")]
    LanguageTagDatatypeMismatch(String),
    /// A term was used in a position that does not accept its kind.
    #[error("Expected {expected} but found {found}")]
    UnexpectedTermKind {
        /// What the position accepts.
        expected: &'static str,
        /// The kind that was provided.
        found: &'static str,
    },
    /// A blank node reference was restored in a scope that did not mint it.
    #[error("The blank node _:{0} was not minted by this scope")]
    ForeignBlankNode(String),
    /// The factory cannot perform the operation.
    #[error("Unsupported operation: {0}")]
    UnsupportedCapability(&'static str),
}
