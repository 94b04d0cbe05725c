//! Render-agnostic tree structure produced by the layout engine

use lineage_domain::PersonId;

/// A visual pairing of people drawn side by side
///
/// Usually two spouses, or a recorded parent plus their reconstructed first
/// spouse. A single member is possible when no partner is known; more than
/// two when more than two parents were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Couple {
    /// Members in display order
    pub members: Vec<PersonId>,
}

impl Couple {
    /// Whether the couple contains the given person
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m.as_str() == id)
    }
}

/// One ancestor generation above the root couple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// Distance above the root (1 = parents, 2 = grandparents, ...)
    pub depth: usize,

    /// Couple groupings, left to right
    pub couples: Vec<Couple>,
}

/// A descendant subtree: one child, their primary spouse and their descendants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    /// The child this branch is rooted at
    pub person: PersonId,

    /// The child's first spouse, if any
    pub spouse: Option<PersonId>,

    /// The child's own children, if any
    pub descendants: Option<BranchGroup>,
}

/// Sibling branches under one parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchGroup {
    /// Branches in child order
    pub branches: Vec<Branch>,

    /// Presentation hint: two or more branches share the width
    pub multiple: bool,
}

impl BranchGroup {
    pub(crate) fn new(branches: Vec<Branch>) -> Self {
        Self {
            multiple: branches.len() >= 2,
            branches,
        }
    }

    /// Number of descendant generations in this group, counting itself
    pub fn depth(&self) -> usize {
        1 + self
            .branches
            .iter()
            .filter_map(|b| b.descendants.as_ref())
            .map(BranchGroup::depth)
            .max()
            .unwrap_or(0)
    }

    fn count_people(&self) -> usize {
        self.branches
            .iter()
            .map(|b| {
                1 + usize::from(b.spouse.is_some())
                    + b.descendants.as_ref().map_or(0, BranchGroup::count_people)
            })
            .sum()
    }
}

/// A laid-out tree: ancestor generations, the root couple, and descendants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Ancestor generations, farthest first (grandparents above parents)
    pub ancestors: Vec<Generation>,

    /// The centered person
    pub root: PersonId,

    /// The centered person's partner, when present and resolvable
    pub co_root: Option<PersonId>,

    /// Children of the root and everything below them
    pub descendants: Option<BranchGroup>,
}

impl TreeNode {
    /// The root couple as a grouping
    pub fn root_couple(&self) -> Couple {
        let mut members = vec![self.root.clone()];
        members.extend(self.co_root.iter().cloned());
        Couple { members }
    }

    /// Whether the tree has neither ancestors nor descendants
    pub fn is_root_only(&self) -> bool {
        self.ancestors.is_empty() && self.descendants.is_none()
    }

    /// Number of descendant generations below the root
    pub fn descendant_depth(&self) -> usize {
        self.descendants.as_ref().map_or(0, BranchGroup::depth)
    }

    /// Number of person cards in the tree (repeats counted)
    pub fn person_count(&self) -> usize {
        let ancestors: usize = self
            .ancestors
            .iter()
            .flat_map(|g| g.couples.iter())
            .map(|c| c.members.len())
            .sum();
        ancestors
            + 1
            + usize::from(self.co_root.is_some())
            + self.descendants.as_ref().map_or(0, BranchGroup::count_people)
    }
}
