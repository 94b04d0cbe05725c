//! Relationship graph builder: raw edges → per-person derived relations

use crate::{DerivedRelations, DerivedRelationsIndex, GraphConfig, SiblingMode, SpouseLink};
use lineage_domain::{ParentChildEdge, Person, PersonId, RelationshipEdge, SpouseEdge};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Builds the derived relations index from people and raw edges
///
/// Building is pure: the inputs are never mutated and the same inputs always
/// yield an identical index.
///
/// # Examples
///
/// ```
/// use lineage_domain::{ParentChildEdge, Person, PersonId};
/// use lineage_graph::GraphBuilder;
///
/// let id = |s: &str| PersonId::new(s).unwrap();
/// let people = vec![Person::new(id("mom"), "Ann", "Lee"), Person::new(id("kid"), "Bo", "Lee")];
/// let edges = vec![ParentChildEdge::new(id("mom"), id("kid")).into()];
///
/// let index = GraphBuilder::default().build(&people, &edges);
/// assert_eq!(index.children("mom"), &[id("kid")]);
/// assert_eq!(index.parents("kid"), &[id("mom")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
}

/// Counters from one build, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Spouse edges applied
    pub spouse_edges: usize,

    /// Parent-child edges applied
    pub parent_child_edges: usize,

    /// Edges dropped for referencing unknown ids
    pub dropped_edges: usize,
}

impl GraphBuilder {
    /// Create a builder with the given configuration
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Get the builder configuration
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Derive relations for every person
    ///
    /// Edges referencing unknown ids are silently skipped; they are expected
    /// in hand-maintained data that is still being populated.
    pub fn build(&self, people: &[Person], edges: &[RelationshipEdge]) -> DerivedRelationsIndex {
        self.build_with_stats(people, edges).0
    }

    /// Derive relations and report what was applied and dropped
    pub fn build_with_stats(
        &self,
        people: &[Person],
        edges: &[RelationshipEdge],
    ) -> (DerivedRelationsIndex, BuildStats) {
        let mut relations: HashMap<PersonId, DerivedRelations> = people
            .iter()
            .map(|p| (p.id.clone(), DerivedRelations::default()))
            .collect();
        let mut stats = BuildStats::default();

        for edge in edges {
            let applied = match edge {
                RelationshipEdge::Spouse(e) => apply_spouse(&mut relations, e),
                RelationshipEdge::ParentChild(e) => apply_parent_child(&mut relations, e),
            };

            match (applied, edge) {
                (true, RelationshipEdge::Spouse(_)) => stats.spouse_edges += 1,
                (true, RelationshipEdge::ParentChild(_)) => stats.parent_child_edges += 1,
                (false, _) => stats.dropped_edges += 1,
            }
        }

        for derived in relations.values_mut() {
            dedup_in_order(&mut derived.children);
            dedup_in_order(&mut derived.parents);
        }

        let siblings: Vec<(PersonId, Vec<PersonId>)> = relations
            .iter()
            .map(|(id, derived)| (id.clone(), self.siblings_of(id, derived, &relations)))
            .collect();
        for (id, list) in siblings {
            if let Some(derived) = relations.get_mut(&id) {
                derived.siblings = list;
            }
        }

        debug!(
            "Derived relations for {} people: {} spouse edges, {} parent-child edges, {} dropped",
            relations.len(),
            stats.spouse_edges,
            stats.parent_child_edges,
            stats.dropped_edges
        );

        (DerivedRelationsIndex::from_map(relations), stats)
    }

    fn siblings_of(
        &self,
        id: &PersonId,
        derived: &DerivedRelations,
        relations: &HashMap<PersonId, DerivedRelations>,
    ) -> Vec<PersonId> {
        let parents: &[PersonId] = match self.config.sibling_mode {
            SiblingMode::FirstParent => derived.parents.get(..1).unwrap_or(&[]),
            SiblingMode::AllParents => &derived.parents,
        };

        let mut seen = HashSet::new();
        parents
            .iter()
            .filter_map(|parent| relations.get(parent))
            .flat_map(|parent| parent.children.iter())
            .filter(|child| *child != id && seen.insert(*child))
            .cloned()
            .collect()
    }
}

fn apply_spouse(relations: &mut HashMap<PersonId, DerivedRelations>, edge: &SpouseEdge) -> bool {
    if !relations.contains_key(&edge.person1) || !relations.contains_key(&edge.person2) {
        debug!(
            "Dropping spouse edge {} ↔ {}: unknown person",
            edge.person1, edge.person2
        );
        return false;
    }

    // a self-pairing is recorded once
    let sides = if edge.is_self_pairing() { 1 } else { 2 };
    for (me, other) in [(&edge.person1, &edge.person2), (&edge.person2, &edge.person1)]
        .into_iter()
        .take(sides)
    {
        if let Some(derived) = relations.get_mut(me) {
            derived.spouses.push(SpouseLink {
                spouse: other.clone(),
                marriage_date: edge.marriage_date.clone(),
                marriage_place: edge.marriage_place.clone(),
                divorce_date: edge.divorce_date.clone(),
            });
        }
    }
    true
}

fn apply_parent_child(
    relations: &mut HashMap<PersonId, DerivedRelations>,
    edge: &ParentChildEdge,
) -> bool {
    if !relations.contains_key(&edge.parent) || !relations.contains_key(&edge.child) {
        debug!(
            "Dropping parent-child edge {} → {}: unknown person",
            edge.parent, edge.child
        );
        return false;
    }

    if let Some(parent) = relations.get_mut(&edge.parent) {
        parent.children.push(edge.child.clone());
    }
    if let Some(child) = relations.get_mut(&edge.child) {
        child.parents.push(edge.parent.clone());
    }
    true
}

/// Remove repeated ids, keeping the first occurrence
fn dedup_in_order(ids: &mut Vec<PersonId>) {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.retain(|id| seen.insert(id.clone()));
}
