//! Timeline builder: chronologically ordered life events of one person

use crate::DerivedRelationsIndex;
use lineage_domain::{year_sort_key, Person, PersonLookup};

/// Kind of life event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineEventKind {
    /// Birth
    Birth,
    /// Residence record
    Residence,
    /// Marriage to a spouse
    Marriage,
    /// Death
    Death,
}

impl TimelineEventKind {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            TimelineEventKind::Birth => "birth",
            TimelineEventKind::Residence => "residence",
            TimelineEventKind::Marriage => "marriage",
            TimelineEventKind::Death => "death",
        }
    }
}

/// One event on a person's timeline
///
/// Events are recomputed for every profile view and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    /// Kind of event
    pub kind: TimelineEventKind,

    /// Date as written (empty when only a place is recorded)
    pub date: String,

    /// Approximate year, `0` when the date has no four-digit year
    pub sort_key: i32,

    /// Human-readable description
    pub description: String,
}

impl TimelineEvent {
    fn new(kind: TimelineEventKind, date: Option<&str>, description: String) -> Self {
        let date = date.unwrap_or_default().to_string();
        Self {
            kind,
            sort_key: year_sort_key(&date),
            date,
            description,
        }
    }
}

/// Build the ordered timeline of a person
///
/// Collected in this order: birth, residences (listed order, only those with
/// both date and place), marriages (spouse order, only those with a date),
/// death. The result is then stably sorted by approximate year, so an event
/// whose date has no four-digit year sorts as year zero, ahead of every
/// dated event.
///
/// `people` resolves spouse names for marriage descriptions.
pub fn build_timeline<L>(person: &Person, index: &DerivedRelationsIndex, people: &L) -> Vec<TimelineEvent>
where
    L: PersonLookup + ?Sized,
{
    let mut events = Vec::new();

    if person.birth.is_recorded() {
        events.push(TimelineEvent::new(
            TimelineEventKind::Birth,
            person.birth.date.as_deref(),
            with_place("Born", person.birth.place.as_deref()),
        ));
    }

    for residence in person.residences.iter().filter(|r| r.is_complete()) {
        events.push(TimelineEvent::new(
            TimelineEventKind::Residence,
            residence.date.as_deref(),
            with_place("Lived", residence.place.as_deref()),
        ));
    }

    for link in index.spouses(person.id.as_str()) {
        let Some(date) = link.marriage_date.as_deref() else {
            continue;
        };
        let married = format!("Married {}", people.display_name(&link.spouse));
        events.push(TimelineEvent::new(
            TimelineEventKind::Marriage,
            Some(date),
            with_place(&married, link.marriage_place.as_deref()),
        ));
    }

    if person.death.is_recorded() {
        events.push(TimelineEvent::new(
            TimelineEventKind::Death,
            person.death.date.as_deref(),
            with_place("Died", person.death.place.as_deref()),
        ));
    }

    // stable: ties keep collection order
    events.sort_by_key(|event| event.sort_key);
    events
}

fn with_place(text: &str, place: Option<&str>) -> String {
    match place.map(str::trim).filter(|p| !p.is_empty()) {
        Some(place) => format!("{} in {}", text, place),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use lineage_domain::{PersonId, Residence, SpouseEdge};

    fn id(s: &str) -> PersonId {
        PersonId::new(s).unwrap()
    }

    fn kinds(events: &[TimelineEvent]) -> Vec<TimelineEventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_birth_marriage_death_order() {
        let mut joseph = Person::new(id("p1"), "Joseph", "Sprys");
        joseph.birth.date = Some("1892-03-15".to_string());
        joseph.death.date = Some("1967-11-22".to_string());
        let lois = Person::new(id("p2"), "Lois", "Stokes");

        let mut edge = SpouseEdge::new(id("p1"), id("p2"));
        edge.marriage_date = Some("1915-06-20".to_string());
        let people = vec![joseph.clone(), lois];
        let index = GraphBuilder::default().build(&people, &[edge.into()]);

        let events = build_timeline(&joseph, &index, &people);
        assert_eq!(
            kinds(&events),
            vec![TimelineEventKind::Birth, TimelineEventKind::Marriage, TimelineEventKind::Death]
        );
        assert_eq!(events[1].description, "Married Lois Stokes");
        assert_eq!(events[1].sort_key, 1915);
    }

    #[test]
    fn test_undated_residence_sorts_before_birth() {
        let mut person = Person::new(id("p1"), "Ann", "Lee");
        person.birth.date = Some("1900".to_string());
        person.residences.push(Residence {
            date: Some("unknown".to_string()),
            place: Some("Flint".to_string()),
        });
        let people = vec![person.clone()];
        let index = GraphBuilder::default().build(&people, &[]);

        let events = build_timeline(&person, &index, &people);
        assert_eq!(kinds(&events), vec![TimelineEventKind::Residence, TimelineEventKind::Birth]);
        assert_eq!(events[0].sort_key, 0);
        assert_eq!(events[1].sort_key, 1900);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let mut person = Person::new(id("p1"), "Ann", "Lee");
        person.birth.date = Some("1900".to_string());
        person.residences.push(Residence {
            date: Some("circa 1900".to_string()),
            place: Some("Flint".to_string()),
        });
        person.death.date = Some("March 1900".to_string());
        let people = vec![person.clone()];
        let index = GraphBuilder::default().build(&people, &[]);

        let events = build_timeline(&person, &index, &people);
        assert_eq!(
            kinds(&events),
            vec![TimelineEventKind::Birth, TimelineEventKind::Residence, TimelineEventKind::Death]
        );
    }

    #[test]
    fn test_incomplete_records_are_skipped() {
        let mut person = Person::new(id("p1"), "Ann", "Lee");
        person.residences.push(Residence {
            date: Some("1920".to_string()),
            place: None,
        });
        let spouse = Person::new(id("p2"), "Bo", "Lee");
        let people = vec![person.clone(), spouse];
        let index = GraphBuilder::default().build(&people, &[SpouseEdge::new(id("p1"), id("p2")).into()]);

        assert!(build_timeline(&person, &index, &people).is_empty());
    }

    #[test]
    fn test_place_only_birth_is_included_with_zero_key() {
        let mut person = Person::new(id("p1"), "Ann", "Lee");
        person.birth.place = Some("Gdańsk".to_string());
        let people = vec![person.clone()];
        let index = GraphBuilder::default().build(&people, &[]);

        let events = build_timeline(&person, &index, &people);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, "");
        assert_eq!(events[0].sort_key, 0);
        assert_eq!(events[0].description, "Born in Gdańsk");
    }
}
