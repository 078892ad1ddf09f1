use crate::{
    BlankNode, Iri, Literal, ModelError, NamedOrBlankNode, Quad, ScopeId, Term, Triple,
};
use uuid::Uuid;

/// Creates terms and statements for one blank node scope.
///
/// Every factory owns a fresh random [`ScopeId`]. Blank nodes minted by different factories are
/// never equal, even when they were created from the same name.
/// ```
/// use rdfmem_model::TermFactory;
///
/// let a = TermFactory::new();
/// let b = TermFactory::new();
/// assert_eq!(a.create_blank_node_named("x")?, a.create_blank_node_named("x")?);
/// assert_ne!(a.create_blank_node_named("x")?, b.create_blank_node_named("x")?);
/// # Result::<_, rdfmem_model::ModelError>::Ok(())
/// ```
#[derive(Clone, Debug)]
pub struct TermFactory {
    scope: ScopeId,
    read_only: bool,
}

impl Default for TermFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TermFactory {
    /// Creates a factory with a new scope.
    pub fn new() -> Self {
        Self {
            scope: ScopeId::new_random(),
            read_only: false,
        }
    }

    /// Creates a factory that refuses to mint blank nodes.
    pub fn new_read_only() -> Self {
        Self {
            scope: ScopeId::new_random(),
            read_only: true,
        }
    }

    /// The scope of the blank nodes minted by this factory.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// Returns true if `node` was minted by this factory's scope.
    pub fn is_local(&self, node: &BlankNode) -> bool {
        node.scope() == self.scope
    }

    /// Mints a fresh blank node that is different from all other blank nodes.
    pub fn create_blank_node(&self) -> Result<BlankNode, ModelError> {
        self.check_writable()?;
        Ok(self.mint(Uuid::new_v4()))
    }

    /// Returns the blank node for `name`.
    ///
    /// Calling this method repeatedly with the same name returns equal blank nodes.
    pub fn create_blank_node_named(&self, name: &str) -> Result<BlankNode, ModelError> {
        self.check_writable()?;
        Ok(self.mint(Uuid::new_v5(&self.scope.namespace(), name.as_bytes())))
    }

    /// Rebuilds a blank node of this scope from its unique reference.
    ///
    /// This does not mint a new identity and is therefore also allowed in read-only scopes. Fails
    /// with [`ModelError::ForeignBlankNode`] if the reference was not minted by this scope.
    pub fn restore_blank_node(&self, unique_reference: &str) -> Result<BlankNode, ModelError> {
        let is_local = unique_reference
            .strip_prefix(self.scope.to_string().as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|node| !node.is_empty());
        if !is_local {
            return Err(ModelError::ForeignBlankNode(unique_reference.to_owned()));
        }
        Ok(BlankNode::new(unique_reference, self.scope))
    }

    /// Creates an IRI, validating its syntax.
    pub fn create_iri(&self, iri: impl Into<String>) -> Result<Iri, ModelError> {
        Iri::new(iri)
    }

    /// Creates an `xsd:string` literal.
    pub fn create_literal(&self, value: &str) -> Literal {
        Literal::new_simple_literal(value)
    }

    /// Creates a literal with the given datatype. See [`Literal::new_typed_literal`].
    pub fn create_typed_literal(&self, value: &str, datatype: Iri) -> Result<Literal, ModelError> {
        Literal::new_typed_literal(value, datatype)
    }

    /// Creates a language-tagged literal, validating the language tag.
    pub fn create_language_literal(
        &self,
        value: &str,
        language: &str,
    ) -> Result<Literal, ModelError> {
        Literal::new_language_tagged_literal(value, language)
    }

    /// Creates a triple, checking that each term is allowed in its position.
    pub fn create_triple(
        &self,
        subject: Term,
        predicate: Term,
        object: Term,
    ) -> Result<Triple, ModelError> {
        Ok(Triple {
            subject: NamedOrBlankNode::try_from(subject)?,
            predicate: Iri::try_from(predicate)?,
            object,
        })
    }

    /// Creates a quad, checking that each term is allowed in its position.
    pub fn create_quad(
        &self,
        subject: Term,
        predicate: Term,
        object: Term,
        graph_name: Option<Term>,
    ) -> Result<Quad, ModelError> {
        let graph_name = graph_name.map(NamedOrBlankNode::try_from).transpose()?;
        Ok(self
            .create_triple(subject, predicate, object)?
            .in_graph(graph_name))
    }

    /// Builds the blank node for `node`. References carry the scope so that no other scope can
    /// restore them.
    fn mint(&self, node: Uuid) -> BlankNode {
        BlankNode::new(format!("{}-{}", self.scope, node.simple()), self.scope)
    }

    fn check_writable(&self) -> Result<(), ModelError> {
        if self.read_only {
            return Err(ModelError::UnsupportedCapability(
                "minting blank nodes in a read-only scope",
            ));
        }
        Ok(())
    }
}
