//! Profile payload: everything shown on one person's detail panel

use lineage_domain::{Gender, Person, PersonId, PersonLookup, VitalRecord};
use lineage_graph::{build_timeline, DerivedRelationsIndex, TimelineEvent};
use lineage_store::{EntityStore, SourceRecord};

/// A related person as shown in a profile list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSummary {
    /// Id to navigate to
    pub id: PersonId,

    /// Display name, or the raw id when the person is not loaded
    pub name: String,

    /// Lifespan label
    pub lifespan: Option<String>,
}

impl PersonSummary {
    /// Summarize `id`, resolving the name through `people`
    pub fn resolve<L: PersonLookup + ?Sized>(id: &PersonId, people: &L) -> Self {
        match people.person(id.as_str()) {
            Some(person) => Self::from(person),
            None => Self {
                id: id.clone(),
                name: id.to_string(),
                lifespan: None,
            },
        }
    }
}

impl From<&Person> for PersonSummary {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.display_name(),
            lifespan: person.lifespan(),
        }
    }
}

/// A spouse entry with marriage metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpouseSummary {
    /// The spouse
    pub person: PersonSummary,

    /// Marriage date as written
    pub marriage_date: Option<String>,

    /// Marriage place as written
    pub marriage_place: Option<String>,

    /// Divorce date as written
    pub divorce_date: Option<String>,
}

/// Detail view of one person
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// Person id
    pub id: PersonId,

    /// Display name including maiden name
    pub name: String,

    /// Recorded gender
    pub gender: Gender,

    /// Birth record
    pub birth: VitalRecord,

    /// Death record
    pub death: VitalRecord,

    /// Lifespan label
    pub lifespan: Option<String>,

    /// Profile photo reference
    pub photo: Option<String>,

    /// Parents in recorded order
    pub parents: Vec<PersonSummary>,

    /// Spouses in recorded order, first is primary
    pub spouses: Vec<SpouseSummary>,

    /// Children in recorded order
    pub children: Vec<PersonSummary>,

    /// Siblings as derived by the graph builder
    pub siblings: Vec<PersonSummary>,

    /// Chronological life events
    pub timeline: Vec<TimelineEvent>,

    /// Free-text notes
    pub notes: Option<String>,

    /// Sources mentioning this person
    pub sources: Vec<SourceRecord>,
}

/// Assemble the profile of `person`
pub fn build_profile(person: &Person, store: &EntityStore, index: &DerivedRelationsIndex) -> Profile {
    let id = person.id.as_str();
    let summarize = |ids: &[PersonId]| -> Vec<PersonSummary> {
        ids.iter().map(|p| PersonSummary::resolve(p, store)).collect()
    };

    Profile {
        id: person.id.clone(),
        name: person.display_name(),
        gender: person.gender.clone(),
        birth: person.birth.clone(),
        death: person.death.clone(),
        lifespan: person.lifespan(),
        photo: person.profile_photo.clone(),
        parents: summarize(index.parents(id)),
        spouses: index
            .spouses(id)
            .iter()
            .map(|link| SpouseSummary {
                person: PersonSummary::resolve(&link.spouse, store),
                marriage_date: link.marriage_date.clone(),
                marriage_place: link.marriage_place.clone(),
                divorce_date: link.divorce_date.clone(),
            })
            .collect(),
        children: summarize(index.children(id)),
        siblings: summarize(index.siblings(id)),
        timeline: build_timeline(person, index, store),
        notes: person.notes.clone(),
        sources: store.sources_for(id).into_iter().cloned().collect(),
    }
}
