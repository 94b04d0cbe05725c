//! Relationship module - raw pairwise edges between persons
//!
//! Edges are exactly what the relationships document records. Parents,
//! children, spouses and siblings per person are derived from them by the
//! graph builder.

use crate::PersonId;

/// Kind of relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Symmetric marriage/partnership
    Spouse,

    /// Directed parent → child link
    ParentChild,
}

impl RelationshipKind {
    /// Get the tag used in the relationships document
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Spouse => "spouse",
            RelationshipKind::ParentChild => "parent-child",
        }
    }
}

/// Spousal edge between two persons (unordered pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseEdge {
    /// One partner
    pub person1: PersonId,

    /// The other partner
    pub person2: PersonId,

    /// Marriage date as written
    pub marriage_date: Option<String>,

    /// Marriage place as written
    pub marriage_place: Option<String>,

    /// Divorce date as written
    pub divorce_date: Option<String>,
}

impl SpouseEdge {
    /// Create an edge with no marriage metadata
    pub fn new(person1: PersonId, person2: PersonId) -> Self {
        Self {
            person1,
            person2,
            marriage_date: None,
            marriage_place: None,
            divorce_date: None,
        }
    }

    /// Whether the edge pairs a person with themself
    pub fn is_self_pairing(&self) -> bool {
        self.person1 == self.person2
    }
}

/// Directed parent-child edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentChildEdge {
    /// The parent
    pub parent: PersonId,

    /// The child
    pub child: PersonId,
}

impl ParentChildEdge {
    /// Create a new parent-child edge
    pub fn new(parent: PersonId, child: PersonId) -> Self {
        Self { parent, child }
    }
}

/// A raw relationship edge as recorded in the relationships document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipEdge {
    /// Marriage/partnership
    Spouse(SpouseEdge),

    /// Parent → child
    ParentChild(ParentChildEdge),
}

impl RelationshipEdge {
    /// Kind of this edge
    pub fn kind(&self) -> RelationshipKind {
        match self {
            RelationshipEdge::Spouse(_) => RelationshipKind::Spouse,
            RelationshipEdge::ParentChild(_) => RelationshipKind::ParentChild,
        }
    }

    /// The two person ids referenced by this edge
    pub fn endpoints(&self) -> (&PersonId, &PersonId) {
        match self {
            RelationshipEdge::Spouse(e) => (&e.person1, &e.person2),
            RelationshipEdge::ParentChild(e) => (&e.parent, &e.child),
        }
    }
}

impl From<SpouseEdge> for RelationshipEdge {
    fn from(edge: SpouseEdge) -> Self {
        RelationshipEdge::Spouse(edge)
    }
}

impl From<ParentChildEdge> for RelationshipEdge {
    fn from(edge: ParentChildEdge) -> Self {
        RelationshipEdge::ParentChild(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> PersonId {
        PersonId::new(s).unwrap()
    }

    #[test]
    fn test_edge_kind_and_endpoints() {
        let edge: RelationshipEdge = ParentChildEdge::new(id("p1"), id("p2")).into();
        assert_eq!(edge.kind(), RelationshipKind::ParentChild);
        assert_eq!(edge.kind().as_str(), "parent-child");

        let (parent, child) = edge.endpoints();
        assert_eq!(parent.as_str(), "p1");
        assert_eq!(child.as_str(), "p2");
    }

    #[test]
    fn test_self_pairing() {
        assert!(SpouseEdge::new(id("p1"), id("p1")).is_self_pairing());
        assert!(!SpouseEdge::new(id("p1"), id("p2")).is_self_pairing());
    }
}
