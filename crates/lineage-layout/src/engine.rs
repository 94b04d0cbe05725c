//! Tree layout engine: ancestors up, descendants down

use crate::{Branch, BranchGroup, Couple, Generation, LayoutConfig, LayoutError, TreeNode};
use lineage_domain::PersonId;
use lineage_graph::DerivedRelationsIndex;
use std::collections::HashSet;
use tracing::debug;

/// Lays out generational trees around a root person and optional partner
///
/// # Examples
///
/// ```
/// use lineage_domain::{ParentChildEdge, Person, PersonId};
/// use lineage_graph::GraphBuilder;
/// use lineage_layout::LayoutEngine;
///
/// let id = |s: &str| PersonId::new(s).unwrap();
/// let people = vec![Person::new(id("mom"), "Ann", "Lee"), Person::new(id("kid"), "Bo", "Lee")];
/// let index = GraphBuilder::default().build(&people, &[ParentChildEdge::new(id("mom"), id("kid")).into()]);
///
/// let tree = LayoutEngine::default().layout("kid", None, &index).unwrap();
/// assert_eq!(tree.ancestors.len(), 1);
/// assert!(tree.descendants.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    /// Create an engine, validating the configuration
    pub fn new(config: LayoutConfig) -> Result<Self, LayoutError> {
        config.validate().map_err(LayoutError::Config)?;
        Ok(Self { config })
    }

    /// Get the engine configuration
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lay out the tree centered on `root_id` and an optional `co_root_id`
    ///
    /// An unresolvable co-root is ignored. Descendants come from the root's
    /// own children only.
    ///
    /// # Errors
    /// - `RootNotFound` if the root is not in the index
    /// - `Cycle` if a person is recorded as their own descendant
    /// - `DepthExceeded` if descendants go deeper than the configured ceiling
    pub fn layout(
        &self,
        root_id: &str,
        co_root_id: Option<&str>,
        index: &DerivedRelationsIndex,
    ) -> Result<TreeNode, LayoutError> {
        let root = resolve(root_id, index)
            .ok_or_else(|| LayoutError::RootNotFound(root_id.to_string()))?;
        let co_root = co_root_id.and_then(|id| resolve(id, index));
        if co_root_id.is_some() && co_root.is_none() {
            debug!("Co-root {:?} not found, laying out {} alone", co_root_id, root);
        }

        let mut individuals = vec![&root];
        individuals.extend(co_root.as_ref());
        let ancestors = self.ancestors(&individuals, index);

        let mut path = HashSet::from([root.clone()]);
        let descendants = self.descendants(&root, index, &mut path, 1)?;

        let tree = TreeNode {
            ancestors,
            root,
            co_root,
            descendants,
        };

        debug!(
            "Laid out tree for {}: {} ancestor generations, {} descendant generations, {} cards",
            tree.root,
            tree.ancestors.len(),
            tree.descendant_depth(),
            tree.person_count()
        );

        Ok(tree)
    }

    /// Ancestor generations for each root individual, farthest first
    ///
    /// Generation `n` holds one couple per person of generation `n - 1` who
    /// has recorded parents, the root's line before the co-root's.
    fn ancestors(&self, individuals: &[&PersonId], index: &DerivedRelationsIndex) -> Vec<Generation> {
        let mut generations = Vec::new();
        let mut frontiers: Vec<Vec<PersonId>> =
            individuals.iter().map(|&id| vec![id.clone()]).collect();

        for depth in 1..=self.config.ancestor_generations {
            let mut couples = Vec::new();

            for frontier in frontiers.iter_mut() {
                let mut next = Vec::new();
                for person in frontier.iter() {
                    let parents = index.parents(person.as_str());
                    if parents.is_empty() {
                        continue;
                    }
                    couples.push(complete_couple(parents, index));
                    next.extend(parents.iter().cloned());
                }
                *frontier = next;
            }

            if couples.is_empty() {
                break;
            }
            generations.push(Generation { depth, couples });
        }

        generations.reverse();
        generations
    }

    /// Recursive descendant branches below `person`
    ///
    /// `path` holds everyone from the root down to `person`; it is local to
    /// one layout call. `depth` is the generation number of `person`'s
    /// children.
    fn descendants(
        &self,
        person: &PersonId,
        index: &DerivedRelationsIndex,
        path: &mut HashSet<PersonId>,
        depth: usize,
    ) -> Result<Option<BranchGroup>, LayoutError> {
        let children = index.children(person.as_str());
        if children.is_empty() {
            return Ok(None);
        }
        if depth > self.config.max_descendant_depth {
            return Err(LayoutError::DepthExceeded {
                limit: self.config.max_descendant_depth,
                person_id: person.clone(),
            });
        }

        let mut branches = Vec::with_capacity(children.len());
        for child in children {
            if !path.insert(child.clone()) {
                return Err(LayoutError::Cycle {
                    person_id: child.clone(),
                });
            }
            let nested = self.descendants(child, index, path, depth + 1);
            path.remove(child);

            branches.push(Branch {
                person: child.clone(),
                spouse: index.first_spouse(child.as_str()).filter(|s| *s != child).cloned(),
                descendants: nested?,
            });
        }

        Ok(Some(BranchGroup::new(branches)))
    }
}

fn resolve(id: &str, index: &DerivedRelationsIndex) -> Option<PersonId> {
    index
        .contains(id)
        .then(|| PersonId::new(id).ok())
        .flatten()
}

/// Group recorded parents; a lone parent is paired with their first spouse
fn complete_couple(parents: &[PersonId], index: &DerivedRelationsIndex) -> Couple {
    let mut members = parents.to_vec();
    if let [only] = parents {
        if let Some(spouse) = index.first_spouse(only.as_str()) {
            if spouse != only {
                members.push(spouse.clone());
            }
        }
    }
    Couple { members }
}
