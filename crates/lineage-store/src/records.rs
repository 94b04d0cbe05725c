//! Serde records for the three static input documents
//!
//! The documents are hand-maintained, so the schema here must stay
//! backward-compatible: field names are camelCase and every optional field
//! tolerates being absent or `null`.

use serde::{Deserialize, Serialize};

/// `people.json`: `{"people": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeopleDocument {
    /// Person records
    pub people: Vec<PersonRecord>,
}

/// `relationships.json`: `{"relationships": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipsDocument {
    /// Relationship records
    pub relationships: Vec<RelationshipRecord>,
}

/// `sources.json`: `{"sources": [...]}`
///
/// Only consumed by the media gallery; an absent list is treated as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesDocument {
    /// Source records
    #[serde(default)]
    pub sources: Vec<SourceRecord>,
}

/// A person as written in the people document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Unique id (required, non-empty)
    pub id: String,

    /// Given name (required, may be empty)
    pub first_name: String,

    /// Middle name(s)
    #[serde(default)]
    pub middle_name: Option<String>,

    /// Family name (required, may be empty)
    pub last_name: String,

    /// Birth family name
    #[serde(default)]
    pub maiden_name: Option<String>,

    /// `male`, `female`, or anything else
    #[serde(default)]
    pub gender: Option<String>,

    /// Birth record
    #[serde(default)]
    pub birth: Option<EventRecord>,

    /// Death record
    #[serde(default)]
    pub death: Option<EventRecord>,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Photo file reference
    #[serde(default)]
    pub profile_photo: Option<String>,

    /// Residences in listed order
    #[serde(default)]
    pub residences: Vec<EventRecord>,
}

/// Date/place pair used for birth, death and residences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Date as written
    #[serde(default)]
    pub date: Option<String>,

    /// Place as written
    #[serde(default)]
    pub place: Option<String>,
}

/// A relationship edge as written in the relationships document
///
/// Tagged by `type`: `"spouse"` or `"parent-child"`. Any other tag, or a
/// missing endpoint field, fails the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RelationshipRecord {
    /// Marriage/partnership between `person1` and `person2`
    #[serde(rename = "spouse", rename_all = "camelCase")]
    Spouse {
        /// Record id (e.g. `r001`)
        #[serde(default)]
        id: Option<String>,
        /// One partner
        person1: String,
        /// The other partner
        person2: String,
        /// Marriage date
        #[serde(default)]
        marriage_date: Option<String>,
        /// Marriage place
        #[serde(default)]
        marriage_place: Option<String>,
        /// Divorce date
        #[serde(default)]
        divorce_date: Option<String>,
    },

    /// `parent` → `child`
    #[serde(rename = "parent-child")]
    ParentChild {
        /// Record id (e.g. `r002`)
        #[serde(default)]
        id: Option<String>,
        /// The parent
        parent: String,
        /// The child
        child: String,
    },
}

/// A document or media item linked to people
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Record id
    pub id: String,

    /// Human-readable title
    #[serde(default)]
    pub title: Option<String>,

    /// Kind of source (`photo`, `census`, `certificate`, ...)
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Stored file reference
    #[serde(default)]
    pub file: Option<String>,

    /// Date as written
    #[serde(default)]
    pub date: Option<String>,

    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,

    /// Ids of the people this source mentions
    #[serde(default)]
    pub people: Vec<String>,
}
