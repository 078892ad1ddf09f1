//! Commonly used vocabularies.

pub mod rdf {
    //! [RDF](https://www.w3.org/TR/rdf11-concepts/) vocabulary.
    use crate::Iri;

    /// The class of language-tagged string literal values.
    pub const LANG_STRING: Iri =
        Iri::new_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
    /// The subject is an instance of a class.
    pub const TYPE: Iri = Iri::new_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
}

pub mod xsd {
    //! [RDF compatible XSD datatypes](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-compatible-xsd-types).
    use crate::Iri;

    /// Character strings.
    pub const STRING: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#string");
    /// true, false.
    pub const BOOLEAN: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#boolean");
    /// Integer numbers.
    pub const INTEGER: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#integer");
    /// Arbitrary-precision decimal numbers.
    pub const DECIMAL: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#decimal");
    /// 64-bit floating point numbers incl. ±Inf, ±0, NaN.
    pub const DOUBLE: Iri = Iri::new_static("http://www.w3.org/2001/XMLSchema#double");
}
