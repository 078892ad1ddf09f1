use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use uuid::Uuid;

/// Identifies the scope (usually one store) in which a blank node was minted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Creates a new random scope.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }

    pub(crate) fn namespace(self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#dfn-blank-node).
///
/// A blank node is identified by its unique reference. The reference starts with the id of the
/// scope that minted it and is only meaningful within that scope. Blank nodes are obtained from a [`TermFactory`](crate::TermFactory),
/// which guarantees that different scopes never produce equal blank nodes.
///
/// The canonical form is `_:` followed by the reference.
#[derive(Clone, Debug)]
pub struct BlankNode {
    reference: Arc<str>,
    scope: ScopeId,
}

impl BlankNode {
    pub(crate) fn new(reference: impl Into<Arc<str>>, scope: ScopeId) -> Self {
        Self {
            reference: reference.into(),
            scope,
        }
    }

    /// The unique reference of this blank node. This is the sole basis of equality.
    pub fn unique_reference(&self) -> &str {
        &self.reference
    }

    /// The scope that minted this blank node.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }
}

impl PartialEq for BlankNode {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl Eq for BlankNode {}

impl Hash for BlankNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reference.hash(state);
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.reference)
    }
}
