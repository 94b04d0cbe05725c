//! Derived per-person relations, kept apart from the immutable person records

use lineage_domain::PersonId;
use std::collections::HashMap;

/// One spouse entry with the marriage metadata of the edge that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseLink {
    /// The spouse
    pub spouse: PersonId,

    /// Marriage date as written
    pub marriage_date: Option<String>,

    /// Marriage place as written
    pub marriage_place: Option<String>,

    /// Divorce date as written
    pub divorce_date: Option<String>,
}

/// Parents, children, spouses and siblings of one person
///
/// Every list preserves edge-encounter order. The first spouse is the
/// "primary" spouse by convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedRelations {
    /// Parents, deduplicated
    pub parents: Vec<PersonId>,

    /// Children, deduplicated
    pub children: Vec<PersonId>,

    /// Spouses with marriage metadata
    pub spouses: Vec<SpouseLink>,

    /// Siblings per the configured sibling mode
    pub siblings: Vec<PersonId>,
}

impl DerivedRelations {
    /// The primary (first listed) spouse, if any
    pub fn first_spouse(&self) -> Option<&PersonId> {
        self.spouses.first().map(|link| &link.spouse)
    }
}

/// Derived relations for every known person, keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedRelationsIndex {
    relations: HashMap<PersonId, DerivedRelations>,
}

impl DerivedRelationsIndex {
    pub(crate) fn from_map(relations: HashMap<PersonId, DerivedRelations>) -> Self {
        Self { relations }
    }

    /// Relations of a person, `None` if the person is unknown
    pub fn get(&self, id: &str) -> Option<&DerivedRelations> {
        self.relations.get(id)
    }

    /// Whether the person is known to the index
    pub fn contains(&self, id: &str) -> bool {
        self.relations.contains_key(id)
    }

    /// Parents of a person (empty for unknown ids)
    pub fn parents(&self, id: &str) -> &[PersonId] {
        self.get(id).map(|r| r.parents.as_slice()).unwrap_or(&[])
    }

    /// Children of a person (empty for unknown ids)
    pub fn children(&self, id: &str) -> &[PersonId] {
        self.get(id).map(|r| r.children.as_slice()).unwrap_or(&[])
    }

    /// Spouses of a person (empty for unknown ids)
    pub fn spouses(&self, id: &str) -> &[SpouseLink] {
        self.get(id).map(|r| r.spouses.as_slice()).unwrap_or(&[])
    }

    /// Siblings of a person (empty for unknown ids)
    pub fn siblings(&self, id: &str) -> &[PersonId] {
        self.get(id).map(|r| r.siblings.as_slice()).unwrap_or(&[])
    }

    /// Primary spouse of a person
    pub fn first_spouse(&self, id: &str) -> Option<&PersonId> {
        self.get(id).and_then(DerivedRelations::first_spouse)
    }

    /// Number of persons in the index
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    /// Iterate over all (id, relations) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&PersonId, &DerivedRelations)> {
        self.relations.iter()
    }
}
