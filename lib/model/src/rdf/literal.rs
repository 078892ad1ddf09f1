use crate::vocab::{rdf, xsd};
use crate::{Iri, ModelError};
use std::fmt;
use std::fmt::Write;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#dfn-literal).
///
/// A literal always has a datatype. Literals without an explicit datatype are `xsd:string`
/// literals and literals with a language tag are `rdf:langString` literals.
///
/// Language tags are compared without regard to ASCII case. The tag keeps the casing it was built
/// with for display purposes.
/// ```
/// use rdfmem_model::Literal;
///
/// let a = Literal::new_language_tagged_literal("X", "EN-GB")?;
/// let b = Literal::new_language_tagged_literal("X", "en-gb")?;
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "\"X\"@EN-GB");
/// # Result::<_, rdfmem_model::ModelError>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct Literal {
    value: Arc<str>,
    datatype: Iri,
    language: Option<Arc<str>>,
}

impl Literal {
    /// Builds an `xsd:string` literal.
    pub fn new_simple_literal(value: impl Into<Arc<str>>) -> Self {
        Self {
            value: value.into(),
            datatype: xsd::STRING,
            language: None,
        }
    }

    /// Builds a literal with an explicit datatype.
    ///
    /// Fails if `datatype` is `rdf:langString`, as such literals must carry a language tag.
    pub fn new_typed_literal(
        value: impl Into<Arc<str>>,
        datatype: Iri,
    ) -> Result<Self, ModelError> {
        if datatype == rdf::LANG_STRING {
            return Err(ModelError::LanguageTagRequired);
        }
        Ok(Self {
            value: value.into(),
            datatype,
            language: None,
        })
    }

    /// Builds an `rdf:langString` literal, validating the language tag.
    pub fn new_language_tagged_literal(
        value: impl Into<Arc<str>>,
        language: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let language = language.into();
        Self::validate_language_tag(&language)?;
        Ok(Self::new_language_tagged_literal_unchecked(value, language))
    }

    /// Checks that `language` is a well-formed BCP47 language tag.
    pub fn validate_language_tag(language: &str) -> Result<(), ModelError> {
        match oxrdf::Literal::new_language_tagged_literal("", language) {
            Ok(_) => Ok(()),
            Err(error) => Err(ModelError::InvalidLanguageTag {
                tag: language.to_owned(),
                error,
            }),
        }
    }

    /// Builds an `rdf:langString` literal without validating the language tag.
    pub fn new_language_tagged_literal_unchecked(
        value: impl Into<Arc<str>>,
        language: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            value: value.into(),
            datatype: rdf::LANG_STRING,
            language: Some(language.into()),
        }
    }

    /// The lexical form.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The datatype IRI.
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// The language tag, as it was provided when the literal was built.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns true if the literal is a `xsd:string` literal.
    pub fn is_plain(&self) -> bool {
        self.datatype == xsd::STRING
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.datatype == other.datatype
            && match (&self.language, &other.language) {
                (Some(lhs), Some(rhs)) => lhs.eq_ignore_ascii_case(rhs),
                (None, None) => true,
                _ => false,
            }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.datatype.hash(state);
        match &self.language {
            Some(language) => {
                state.write_u8(1);
                for byte in language.bytes() {
                    state.write_u8(byte.to_ascii_lowercase());
                }
                state.write_usize(language.len());
            }
            None => state.write_u8(0),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        print_quoted_str(&self.value, f)?;
        if let Some(language) = &self.language {
            write!(f, "@{language}")
        } else if self.is_plain() {
            Ok(())
        } else {
            write!(f, "^^{}", self.datatype)
        }
    }
}

fn print_quoted_str(string: &str, f: &mut impl Write) -> fmt::Result {
    f.write_char('"')?;
    for c in string.chars() {
        match c {
            '\n' => f.write_str("\\n"),
            '\r' => f.write_str("\\r"),
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            _ => f.write_char(c),
        }?;
    }
    f.write_char('"')
}
