//! Person module - the individuals recorded in the family tree

use std::borrow::Borrow;
use std::fmt;

/// Externally assigned, stable identifier for a person (e.g. `p001`)
///
/// Ids are opaque strings maintained by hand in the people document.
/// Ordering is lexical and only used for deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(String);

impl PersonId {
    /// Create a new PersonId
    ///
    /// # Errors
    /// Returns error if the id is empty or only whitespace
    ///
    /// # Examples
    ///
    /// ```
    /// use lineage_domain::PersonId;
    ///
    /// let id = PersonId::new("p001").unwrap();
    /// assert_eq!(id.as_str(), "p001");
    /// assert!(PersonId::new("  ").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, String> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err("Person id cannot be empty".to_string());
        }
        Ok(Self(value))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Recorded gender of a person
///
/// The source data uses free strings; the common values are closed variants
/// and anything else is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    /// Recorded as male
    Male,

    /// Recorded as female
    Female,

    /// Not recorded
    #[default]
    Unspecified,

    /// Any other recorded value, trimmed but otherwise kept as written
    Other(String),
}

impl Gender {
    /// Parse a gender from the loosely structured source value
    pub fn parse(value: Option<&str>) -> Self {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Gender::Unspecified;
        };
        match raw.to_lowercase().as_str() {
            "male" | "m" => Gender::Male,
            "female" | "f" => Gender::Female,
            "unknown" | "unspecified" | "u" => Gender::Unspecified,
            _ => Gender::Other(raw.to_string()),
        }
    }

    /// Get the canonical source value, `None` when unspecified
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Gender::Male => Some("male"),
            Gender::Female => Some("female"),
            Gender::Unspecified => None,
            Gender::Other(v) => Some(v.as_str()),
        }
    }
}

/// Names of a person
///
/// First and last are required (though they may be empty strings when the
/// source record had no name); middle and maiden names are optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonName {
    /// Given name
    pub first: String,

    /// Middle name(s)
    pub middle: Option<String>,

    /// Family name
    pub last: String,

    /// Birth family name, when it differs from `last`
    pub maiden: Option<String>,
}

impl PersonName {
    /// First, middle and last names joined by single spaces
    pub fn full(&self) -> String {
        [Some(self.first.as_str()), self.middle.as_deref(), Some(self.last.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Full name with the maiden name appended, e.g. `Lois Jane Sprys (née Stokes)`
    pub fn display(&self) -> String {
        match self.maiden.as_deref().map(str::trim) {
            Some(maiden) if !maiden.is_empty() && maiden != self.last => {
                format!("{} (née {})", self.full(), maiden)
            }
            _ => self.full(),
        }
    }
}

/// Birth or death record: a loosely formatted date and a place
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VitalRecord {
    /// Date as written in the source (e.g. `March 15, 1892`, `circa 1850`)
    pub date: Option<String>,

    /// Place as written in the source
    pub place: Option<String>,
}

impl VitalRecord {
    /// Whether either the date or the place is recorded
    pub fn is_recorded(&self) -> bool {
        has_text(&self.date) || has_text(&self.place)
    }

    /// Best-effort year of the record, if any
    pub fn year(&self) -> Option<i32> {
        self.date.as_deref().and_then(crate::parse_approx_year)
    }
}

/// A place of residence at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Residence {
    /// Date as written in the source
    pub date: Option<String>,

    /// Place as written in the source
    pub place: Option<String>,
}

impl Residence {
    /// Whether both the date and the place are recorded
    pub fn is_complete(&self) -> bool {
        has_text(&self.date) && has_text(&self.place)
    }
}

/// A person in the family tree
///
/// Persons are immutable once loaded. Relations derived from edges are held
/// in a separate index, never attached to this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Unique identifier
    pub id: PersonId,

    /// Names
    pub name: PersonName,

    /// Recorded gender
    pub gender: Gender,

    /// Birth record
    pub birth: VitalRecord,

    /// Death record
    pub death: VitalRecord,

    /// Free-text notes
    pub notes: Option<String>,

    /// Reference to a profile photo file
    pub profile_photo: Option<String>,

    /// Residences in listed order
    pub residences: Vec<Residence>,
}

impl Person {
    /// Create a person with only an id and a first/last name
    pub fn new(id: PersonId, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id,
            name: PersonName {
                first: first.into(),
                last: last.into(),
                ..Default::default()
            },
            gender: Gender::Unspecified,
            birth: VitalRecord::default(),
            death: VitalRecord::default(),
            notes: None,
            profile_photo: None,
            residences: Vec::new(),
        }
    }

    /// Display name including any maiden name
    pub fn display_name(&self) -> String {
        self.name.display()
    }

    /// Lifespan label such as `1892 – 1967`, `b. 1892` or `d. 1967`
    pub fn lifespan(&self) -> Option<String> {
        match (self.birth.year(), self.death.year()) {
            (Some(b), Some(d)) => Some(format!("{} – {}", b, d)),
            (Some(b), None) => Some(format!("b. {}", b)),
            (None, Some(d)) => Some(format!("d. {}", d)),
            (None, None) => None,
        }
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
