//! GEDCOM records → people and relationship documents

use crate::config::ImportConfig;
use crate::date::format_date;
use crate::error::GedcomError;
use crate::parser::{parse_records, Field, Record};
use crate::types::{GedcomImport, IdMapping, ImportStats};
use lineage_store::{
    EventRecord, PeopleDocument, PersonRecord, RelationshipRecord, RelationshipsDocument,
    SourcesDocument, PEOPLE_FILE, RELATIONSHIPS_FILE, SOURCES_FILE,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name of the xref ↔ id mapping written next to the documents
pub const ID_MAPPING_FILE: &str = "id_mapping.json";

/// Converts GEDCOM text into the application's input documents
#[derive(Debug, Clone, Default)]
pub struct GedcomImporter {
    config: ImportConfig,
}

/// A family record reduced to what relationships need
#[derive(Debug, Default)]
struct Family {
    husband: Option<String>,
    wife: Option<String>,
    children: Vec<String>,
    marriage_date: Option<String>,
    marriage_place: Option<String>,
    divorce_date: Option<String>,
}

impl GedcomImporter {
    /// Create an importer, validating the configuration
    pub fn new(config: ImportConfig) -> Result<Self, GedcomError> {
        config.validate().map_err(GedcomError::Config)?;
        Ok(Self { config })
    }

    /// Convert GEDCOM text
    ///
    /// People keep GEDCOM record order and are renumbered from 1.
    /// Relationship endpoints naming no individual keep their raw xref.
    ///
    /// # Errors
    /// `NoIndividuals` if the text holds no INDI records.
    pub fn convert(&self, text: &str) -> Result<GedcomImport, GedcomError> {
        let records = parse_records(text);
        let mut stats = ImportStats::default();
        let mut id_mapping = IdMapping::default();
        let mut people = Vec::new();
        let mut families = Vec::new();

        for record in &records {
            match record.tag() {
                "INDI" if !record.xref.is_empty() => {
                    stats.individuals += 1;
                    let id = self.config.person_id(stats.individuals);
                    id_mapping.insert(&record.xref, &id);
                    people.push(extract_person(record, id));
                }
                "FAM" if !record.xref.is_empty() => {
                    stats.families += 1;
                    families.push(extract_family(&record.root));
                }
                "SOUR" if !record.xref.is_empty() => stats.sources += 1,
                _ => {}
            }
        }

        if people.is_empty() {
            return Err(GedcomError::NoIndividuals);
        }

        for person in &people {
            match person.gender.as_deref() {
                Some("male") => stats.males += 1,
                Some("female") => stats.females += 1,
                _ => stats.unknown_gender += 1,
            }
        }

        let relationships = self.relationships(&families, &id_mapping, &mut stats);

        info!(
            "Converted GEDCOM: {} people, {} relationships ({} spouse, {} parent-child)",
            people.len(),
            stats.relationships(),
            stats.spouse_relationships,
            stats.parent_child_relationships
        );

        Ok(GedcomImport {
            people,
            relationships,
            id_mapping,
            stats,
        })
    }

    /// Read and convert a GEDCOM file
    pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<GedcomImport, GedcomError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| GedcomError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        self.convert(&text)
    }

    fn relationships(
        &self,
        families: &[Family],
        id_mapping: &IdMapping,
        stats: &mut ImportStats,
    ) -> Vec<RelationshipRecord> {
        let mut relationships = Vec::new();

        for family in families {
            if let (Some(husband), Some(wife)) = (&family.husband, &family.wife) {
                relationships.push(RelationshipRecord::Spouse {
                    id: Some(self.config.relationship_id(relationships.len() + 1)),
                    person1: id_mapping.resolve(husband),
                    person2: id_mapping.resolve(wife),
                    marriage_date: family.marriage_date.clone(),
                    marriage_place: family.marriage_place.clone(),
                    divorce_date: family.divorce_date.clone(),
                });
                stats.spouse_relationships += 1;
            }

            let parents: Vec<&String> = family.husband.iter().chain(family.wife.iter()).collect();
            for child in &family.children {
                for parent in &parents {
                    relationships.push(RelationshipRecord::ParentChild {
                        id: Some(self.config.relationship_id(relationships.len() + 1)),
                        parent: id_mapping.resolve(parent),
                        child: id_mapping.resolve(child),
                    });
                    stats.parent_child_relationships += 1;
                }
            }
        }

        relationships
    }
}

impl GedcomImport {
    /// Write `people.json`, `relationships.json`, an empty `sources.json` and
    /// `id_mapping.json` into `dir`, creating it if needed
    ///
    /// Returns the paths written.
    pub async fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, GedcomError> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| GedcomError::Write {
                path: dir.to_path_buf(),
                source,
            })?;

        let people = PeopleDocument {
            people: self.people.clone(),
        };
        let relationships = RelationshipsDocument {
            relationships: self.relationships.clone(),
        };

        let written = vec![
            write_json(dir, PEOPLE_FILE, "people", &people).await?,
            write_json(dir, RELATIONSHIPS_FILE, "relationships", &relationships).await?,
            write_json(dir, SOURCES_FILE, "sources", &SourcesDocument::default()).await?,
            write_json(dir, ID_MAPPING_FILE, "id mapping", &self.id_mapping).await?,
        ];

        info!("Wrote {} documents to {}", written.len(), dir.display());
        Ok(written)
    }
}

async fn write_json<T: Serialize>(
    dir: &Path,
    file: &str,
    document: &'static str,
    value: &T,
) -> Result<PathBuf, GedcomError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| GedcomError::Serialize { document, source })?;
    let path = dir.join(file);
    tokio::fs::write(&path, json)
        .await
        .map_err(|source| GedcomError::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

fn extract_person(record: &Record, id: String) -> PersonRecord {
    let indi = &record.root;
    let mut person = PersonRecord {
        id,
        first_name: String::new(),
        middle_name: None,
        last_name: String::new(),
        maiden_name: None,
        gender: None,
        birth: None,
        death: None,
        notes: None,
        profile_photo: None,
        residences: Vec::new(),
    };

    if let Some(name) = indi.child("NAME") {
        let (first, middle, last) = split_name(name);
        person.first_name = first;
        person.middle_name = middle;
        person.last_name = last;
    }

    person.gender = match indi.child_value("SEX") {
        Some("M") => Some("male".to_string()),
        Some("F") => Some("female".to_string()),
        _ => None,
    };

    person.birth = indi.child("BIRT").and_then(event);
    person.death = indi.child("DEAT").and_then(event);

    let notes: Vec<String> = indi
        .children_with("NOTE")
        .map(Field::text)
        .filter(|n| !n.trim().is_empty())
        .collect();
    if !notes.is_empty() {
        person.notes = Some(notes.join(" "));
    }

    person.residences = indi.children_with("RESI").filter_map(event).collect();
    person
}

/// First, middle and last names from a `NAME` field
///
/// The surname sits between slashes. Given names come from `GIVN` when
/// present, otherwise from the name with the surname removed.
fn split_name(name: &Field) -> (String, Option<String>, String) {
    let full = name.value.as_str();
    let (last, given) = match full.split_once('/') {
        Some((before, rest)) => match rest.split_once('/') {
            Some((surname, after)) => (surname.trim().to_string(), format!("{} {}", before, after)),
            None => (String::new(), full.to_string()),
        },
        None => (String::new(), full.to_string()),
    };

    let given = name.child_value("GIVN").map(str::to_string).unwrap_or(given);
    let mut parts = given.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let middle = parts.collect::<Vec<_>>().join(" ");

    (first, (!middle.is_empty()).then_some(middle), last)
}

fn event(field: &Field) -> Option<EventRecord> {
    let record = EventRecord {
        date: field.child_value("DATE").and_then(format_date),
        place: field.child_value("PLAC").map(str::to_string),
    };
    (record.date.is_some() || record.place.is_some()).then_some(record)
}

fn xref_value(field: &Field, tag: &str) -> Option<String> {
    field
        .child_value(tag)
        .map(|v| v.trim_matches('@').to_string())
        .filter(|v| !v.is_empty())
}

fn extract_family(fam: &Field) -> Family {
    let marriage = fam.child("MARR");
    Family {
        husband: xref_value(fam, "HUSB"),
        wife: xref_value(fam, "WIFE"),
        children: fam
            .children_with("CHIL")
            .map(|c| c.value.trim_matches('@').to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        marriage_date: marriage.and_then(|m| m.child_value("DATE")).and_then(format_date),
        marriage_place: marriage.and_then(|m| m.child_value("PLAC")).map(str::to_string),
        divorce_date: fam
            .child("DIV")
            .and_then(|d| d.child_value("DATE"))
            .and_then(format_date),
    }
}
