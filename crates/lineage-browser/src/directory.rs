//! Sorted directory and free-text search over people

use lineage_domain::{year_sort_key, Person};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Directory sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Last name, then first name
    #[default]
    LastName,
    /// First name, then last name
    FirstName,
    /// Approximate birth year; unknown years first
    Birth,
    /// Approximate death year; unknown years first
    Death,
}

impl SortKey {
    /// All keys in menu order
    pub const ALL: [SortKey; 4] = [SortKey::LastName, SortKey::FirstName, SortKey::Birth, SortKey::Death];

    /// Short name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::LastName => "last",
            SortKey::FirstName => "first",
            SortKey::Birth => "birth",
            SortKey::Death => "death",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last" | "last_name" | "lastname" | "surname" => Ok(SortKey::LastName),
            "first" | "first_name" | "firstname" => Ok(SortKey::FirstName),
            "birth" | "born" => Ok(SortKey::Birth),
            "death" | "died" => Ok(SortKey::Death),
            other => Err(format!(
                "Unknown sort key '{}' (expected one of: last, first, birth, death)",
                other
            )),
        }
    }
}

type SortTuple = (i32, String, String, String);

fn sort_tuple(person: &Person, key: SortKey) -> SortTuple {
    let first = person.name.first.to_lowercase();
    let last = person.name.last.to_lowercase();
    let id = person.id.as_str().to_string();
    match key {
        SortKey::LastName => (0, last, first, id),
        SortKey::FirstName => (0, first, last, id),
        SortKey::Birth => (year_of(person.birth.date.as_deref()), last, first, id),
        SortKey::Death => (year_of(person.death.date.as_deref()), last, first, id),
    }
}

fn year_of(date: Option<&str>) -> i32 {
    year_sort_key(date.unwrap_or_default())
}

/// Everyone, ordered by `key`
///
/// Ties fall back to last name, first name and finally id, so the order is
/// total and stable across runs.
pub fn sorted(people: &[Person], key: SortKey) -> Vec<&Person> {
    let mut entries: Vec<&Person> = people.iter().collect();
    entries.sort_by_cached_key(|p| sort_tuple(p, key));
    entries
}

/// People matching every whitespace-separated term of `query`
///
/// Matching is case-insensitive against the full name, maiden name, and
/// birth and death places. A blank query matches nobody. Results are in
/// last-name order.
pub fn search<'a>(people: &'a [Person], query: &str) -> Vec<&'a Person> {
    let terms: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<&Person> = people
        .iter()
        .filter(|p| {
            let haystack = search_text(p);
            terms.iter().all(|t| haystack.contains(t.as_str()))
        })
        .collect();
    matches.sort_by_cached_key(|p| sort_tuple(p, SortKey::LastName));
    matches
}

fn search_text(person: &Person) -> String {
    let mut fields = vec![person.name.full()];
    fields.extend(person.name.maiden.iter().cloned());
    fields.extend(person.birth.place.iter().cloned());
    fields.extend(person.death.place.iter().cloned());
    fields.join(" ").to_lowercase()
}
