//! Type conversions between document records and domain types
//!
//! Handles bidirectional conversion between the serde records of the input
//! documents and the immutable domain types.

use crate::records::{EventRecord, PersonRecord, RelationshipRecord};
use crate::StoreError;
use lineage_domain::{
    Gender, ParentChildEdge, Person, PersonId, PersonName, RelationshipEdge, Residence,
    SpouseEdge, VitalRecord,
};

/// Convert a person record to a domain Person
///
/// # Errors
/// Returns `StoreError::InvalidPerson` if the id is empty
pub fn person_from_record(record: PersonRecord) -> Result<Person, StoreError> {
    let id = PersonId::new(record.id).map_err(|e| {
        StoreError::InvalidPerson(format!(
            "{} ({} {})",
            e, record.first_name, record.last_name
        ))
    })?;

    Ok(Person {
        id,
        name: PersonName {
            first: record.first_name,
            middle: non_empty(record.middle_name),
            last: record.last_name,
            maiden: non_empty(record.maiden_name),
        },
        gender: Gender::parse(record.gender.as_deref()),
        birth: vital_from_record(record.birth),
        death: vital_from_record(record.death),
        notes: non_empty(record.notes),
        profile_photo: non_empty(record.profile_photo),
        residences: record
            .residences
            .into_iter()
            .map(|r| Residence {
                date: non_empty(r.date),
                place: non_empty(r.place),
            })
            .collect(),
    })
}

/// Convert a domain Person back to its document record
pub fn person_to_record(person: &Person) -> PersonRecord {
    PersonRecord {
        id: person.id.to_string(),
        first_name: person.name.first.clone(),
        middle_name: person.name.middle.clone(),
        last_name: person.name.last.clone(),
        maiden_name: person.name.maiden.clone(),
        gender: person.gender.as_str().map(str::to_string),
        birth: Some(vital_to_record(&person.birth)),
        death: Some(vital_to_record(&person.death)),
        notes: person.notes.clone(),
        profile_photo: person.profile_photo.clone(),
        residences: person
            .residences
            .iter()
            .map(|r| EventRecord {
                date: r.date.clone(),
                place: r.place.clone(),
            })
            .collect(),
    }
}

/// Convert a relationship record to a domain edge
///
/// Endpoint existence is NOT checked here; edges referencing unknown persons
/// are tolerated and dropped later by the graph builder.
///
/// # Errors
/// Returns `StoreError::InvalidRelationship` if an endpoint id is empty
pub fn edge_from_record(record: RelationshipRecord) -> Result<RelationshipEdge, StoreError> {
    match record {
        RelationshipRecord::Spouse {
            id,
            person1,
            person2,
            marriage_date,
            marriage_place,
            divorce_date,
        } => Ok(RelationshipEdge::Spouse(SpouseEdge {
            person1: endpoint(person1, "person1", id.as_deref())?,
            person2: endpoint(person2, "person2", id.as_deref())?,
            marriage_date: non_empty(marriage_date),
            marriage_place: non_empty(marriage_place),
            divorce_date: non_empty(divorce_date),
        })),
        RelationshipRecord::ParentChild { id, parent, child } => {
            Ok(RelationshipEdge::ParentChild(ParentChildEdge {
                parent: endpoint(parent, "parent", id.as_deref())?,
                child: endpoint(child, "child", id.as_deref())?,
            }))
        }
    }
}

fn endpoint(value: String, field: &str, record_id: Option<&str>) -> Result<PersonId, StoreError> {
    PersonId::new(value).map_err(|_| {
        StoreError::InvalidRelationship(format!(
            "relationship {} has an empty '{}'",
            record_id.unwrap_or("<unnamed>"),
            field
        ))
    })
}

fn vital_from_record(record: Option<EventRecord>) -> VitalRecord {
    let record = record.unwrap_or_default();
    VitalRecord {
        date: non_empty(record.date),
        place: non_empty(record.place),
    }
}

fn vital_to_record(vital: &VitalRecord) -> EventRecord {
    EventRecord {
        date: vital.date.clone(),
        place: vital.place.clone(),
    }
}

/// Blank strings in hand-maintained data mean "not recorded"
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
