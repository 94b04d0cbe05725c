//! The entity store: people, raw edges and sources with an id index

use crate::conversions::{edge_from_record, person_from_record};
use crate::records::{PeopleDocument, RelationshipsDocument, SourceRecord, SourcesDocument};
use crate::StoreError;
use lineage_domain::{Person, PersonLookup, RelationshipEdge};
use std::collections::HashMap;
use tracing::info;

/// Immutable in-memory store of everything loaded at startup
///
/// After construction nothing in the store is mutated for the rest of the
/// session. Derived relations are computed elsewhere and kept in their own
/// index.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    people: Vec<Person>,
    index: HashMap<String, usize>,
    edges: Vec<RelationshipEdge>,
    sources: Vec<SourceRecord>,
}

impl EntityStore {
    /// Assemble a store from already converted domain values
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateId` if two persons share an id
    pub fn new(
        people: Vec<Person>,
        edges: Vec<RelationshipEdge>,
        sources: Vec<SourceRecord>,
    ) -> Result<Self, StoreError> {
        let mut index = HashMap::with_capacity(people.len());
        for (position, person) in people.iter().enumerate() {
            if index.insert(person.id.to_string(), position).is_some() {
                return Err(StoreError::DuplicateId(person.id.to_string()));
            }
        }

        info!(
            "Entity store ready: {} people, {} relationships, {} sources",
            people.len(),
            edges.len(),
            sources.len()
        );

        Ok(Self {
            people,
            index,
            edges,
            sources,
        })
    }

    /// Assemble a store from parsed documents
    ///
    /// A missing sources document is treated as empty.
    pub fn from_documents(
        people: PeopleDocument,
        relationships: RelationshipsDocument,
        sources: Option<SourcesDocument>,
    ) -> Result<Self, StoreError> {
        let people = people
            .people
            .into_iter()
            .map(person_from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let edges = relationships
            .relationships
            .into_iter()
            .map(edge_from_record)
            .collect::<Result<Vec<_>, _>>()?;

        let sources = sources.map(|doc| doc.sources).unwrap_or_default();

        Self::new(people, edges, sources)
    }

    /// Parse the three documents from JSON text
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage_store::EntityStore;
    ///
    /// let store = EntityStore::from_json_strs(
    ///     r#"{"people": [{"id": "p1", "firstName": "Ada", "lastName": "Byron"}]}"#,
    ///     r#"{"relationships": []}"#,
    ///     None,
    /// ).unwrap();
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn from_json_strs(
        people_json: &str,
        relationships_json: &str,
        sources_json: Option<&str>,
    ) -> Result<Self, StoreError> {
        let people = parse_document(people_json, "people")?;
        let relationships = parse_document(relationships_json, "relationships")?;
        let sources = sources_json
            .filter(|json| !json.trim().is_empty())
            .map(|json| parse_document(json, "sources"))
            .transpose()?;

        Self::from_documents(people, relationships, sources)
    }

    /// All persons in document order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All raw relationship edges in document order
    pub fn edges(&self) -> &[RelationshipEdge] {
        &self.edges
    }

    /// All source records in document order
    pub fn sources(&self) -> &[SourceRecord] {
        &self.sources
    }

    /// Sources that mention the given person
    pub fn sources_for(&self, id: &str) -> Vec<&SourceRecord> {
        self.sources
            .iter()
            .filter(|s| s.people.iter().any(|p| p == id))
            .collect()
    }

    /// Number of persons
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the store holds no persons
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl PersonLookup for EntityStore {
    fn person(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&position| &self.people[position])
    }
}

/// Parse one JSON document, tagging errors with the document name
pub(crate) fn parse_document<T: serde::de::DeserializeOwned>(
    json: &str,
    document: &'static str,
) -> Result<T, StoreError> {
    serde_json::from_str(json).map_err(|source| StoreError::Parse { document, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_domain::PersonId;

    const PEOPLE: &str = r#"{"people": [
        {"id": "p1", "firstName": "Joseph", "lastName": "Sprys"},
        {"id": "p2", "firstName": "Lois", "lastName": "Stokes"}
    ]}"#;

    #[test]
    fn test_lookup_by_id() {
        let store = EntityStore::from_json_strs(PEOPLE, r#"{"relationships": []}"#, None).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.person("p2").unwrap().name.first, "Lois");
        assert!(store.person("p3").is_none());
        assert!(store.sources().is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let people = vec![
            Person::new(PersonId::new("p1").unwrap(), "A", "B"),
            Person::new(PersonId::new("p1").unwrap(), "C", "D"),
        ];
        let result = EntityStore::new(people, Vec::new(), Vec::new());
        assert!(matches!(result, Err(StoreError::DuplicateId(id)) if id == "p1"));
    }

    #[test]
    fn test_malformed_top_level_is_fatal() {
        let result = EntityStore::from_json_strs(r#"[1, 2, 3]"#, r#"{"relationships": []}"#, None);
        assert!(matches!(result, Err(StoreError::Parse { document: "people", .. })));

        let result = EntityStore::from_json_strs(PEOPLE, r#"{"relationships": 5}"#, None);
        assert!(matches!(result, Err(StoreError::Parse { document: "relationships", .. })));
    }

    #[test]
    fn test_blank_sources_is_an_empty_list() {
        let store = EntityStore::from_json_strs(PEOPLE, r#"{"relationships": []}"#, Some(" \n")).unwrap();
        assert!(store.sources().is_empty());
    }

    #[test]
    fn test_edges_to_unknown_people_are_kept_raw() {
        let rels = r#"{"relationships": [{"type": "parent-child", "parent": "p1", "child": "p99"}]}"#;
        let store = EntityStore::from_json_strs(PEOPLE, rels, None).unwrap();
        assert_eq!(store.edges().len(), 1);
    }

    #[test]
    fn test_sources_for_person() {
        let sources = r#"{"sources": [
            {"id": "s1", "file": "a.jpg", "people": ["p1", "p2"]},
            {"id": "s2", "file": "b.jpg", "people": ["p2"]}
        ]}"#;
        let store =
            EntityStore::from_json_strs(PEOPLE, r#"{"relationships": []}"#, Some(sources)).unwrap();
        assert_eq!(store.sources_for("p1").len(), 1);
        assert_eq!(store.sources_for("p2").len(), 2);
        assert!(store.sources_for("p3").is_empty());
    }
}
