//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Implementations live in other crates (the entity store in `lineage-store`).

use crate::{Person, PersonId};

/// Trait for resolving persons by id
///
/// Implemented by the infrastructure layer (lineage-store). The graph builder
/// and the browser only ever read through this trait.
pub trait PersonLookup {
    /// Get a person by id
    fn person(&self, id: &str) -> Option<&Person>;

    /// Whether a person with this id exists
    fn contains(&self, id: &str) -> bool {
        self.person(id).is_some()
    }

    /// Display name for an id, falling back to the raw id when unknown
    fn display_name(&self, id: &PersonId) -> String {
        self.person(id.as_str())
            .map(Person::display_name)
            .unwrap_or_else(|| id.to_string())
    }
}

impl PersonLookup for [Person] {
    fn person(&self, id: &str) -> Option<&Person> {
        self.iter().find(|p| p.id.as_str() == id)
    }
}

impl PersonLookup for Vec<Person> {
    fn person(&self, id: &str) -> Option<&Person> {
        self.as_slice().person(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_lookup() {
        let people = vec![Person::new(PersonId::new("p1").unwrap(), "Ada", "Byron")];
        assert!(people.contains("p1"));
        assert!(!people.contains("p2"));
        assert_eq!(people.display_name(&PersonId::new("p1").unwrap()), "Ada Byron");
        assert_eq!(people.display_name(&PersonId::new("p9").unwrap()), "p9");
    }
}
