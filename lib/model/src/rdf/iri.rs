use crate::ModelError;
use oxiri::IriRef;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An RDF [IRI](https://www.w3.org/TR/rdf11-concepts/#dfn-iri).
///
/// Both absolute IRIs and relative references are accepted. Two IRIs are equal iff their
/// identifiers are equal character by character.
///
/// The default string formatter returns the canonical form:
/// ```
/// use rdfmem_model::Iri;
///
/// assert_eq!("<http://example.com/foo>", Iri::new("http://example.com/foo")?.to_string());
/// # Result::<_, rdfmem_model::ModelError>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct Iri {
    iri: IriStr,
}

#[derive(Clone, Debug)]
enum IriStr {
    Static(&'static str),
    Shared(Arc<str>),
}

impl Iri {
    /// Builds and validates an IRI.
    pub fn new(iri: impl Into<String>) -> Result<Self, ModelError> {
        let iri = iri.into();
        Self::validate(&iri)?;
        Ok(Self::new_unchecked(iri))
    }

    /// Checks that `iri` is a valid IRI reference without building an [`Iri`].
    pub fn validate(iri: &str) -> Result<(), ModelError> {
        match IriRef::parse(iri) {
            Ok(_) => Ok(()),
            Err(error) => Err(ModelError::InvalidIri {
                iri: iri.to_owned(),
                error,
            }),
        }
    }

    /// Builds an IRI without validating it.
    ///
    /// It is the caller's responsibility to ensure that `iri` is a valid IRI reference.
    pub fn new_unchecked(iri: impl Into<Arc<str>>) -> Self {
        Self {
            iri: IriStr::Shared(iri.into()),
        }
    }

    /// Builds an IRI from a static string. Used for vocabulary constants.
    pub const fn new_static(iri: &'static str) -> Self {
        Self {
            iri: IriStr::Static(iri),
        }
    }

    /// Returns the identifier without the surrounding angle brackets.
    pub fn as_str(&self) -> &str {
        match &self.iri {
            IriStr::Static(iri) => iri,
            IriStr::Shared(iri) => iri,
        }
    }
}

impl PartialEq for Iri {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Iri {}

impl Hash for Iri {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for Iri {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Iri {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}
