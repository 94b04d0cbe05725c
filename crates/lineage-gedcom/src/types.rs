//! Types produced by a GEDCOM import

use lineage_store::{PersonRecord, RelationshipRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Two-way mapping between GEDCOM xrefs and assigned person ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdMapping {
    /// GEDCOM xref (without `@`) → assigned id
    pub ancestry_to_new: BTreeMap<String, String>,

    /// Assigned id → GEDCOM xref
    pub new_to_ancestry: BTreeMap<String, String>,
}

impl IdMapping {
    pub(crate) fn insert(&mut self, xref: &str, id: &str) {
        self.ancestry_to_new.insert(xref.to_string(), id.to_string());
        self.new_to_ancestry.insert(id.to_string(), xref.to_string());
    }

    /// Assigned id for an xref, or the xref itself when it names no individual
    pub fn resolve(&self, xref: &str) -> String {
        self.ancestry_to_new
            .get(xref)
            .cloned()
            .unwrap_or_else(|| xref.to_string())
    }
}

/// Counts reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// INDI records read
    pub individuals: usize,
    /// FAM records read
    pub families: usize,
    /// SOUR records read (not converted)
    pub sources: usize,
    /// Spouse relationships written
    pub spouse_relationships: usize,
    /// Parent-child relationships written
    pub parent_child_relationships: usize,
    /// People recorded as male
    pub males: usize,
    /// People recorded as female
    pub females: usize,
    /// People with no recorded sex
    pub unknown_gender: usize,
}

impl ImportStats {
    /// Total relationships written
    pub fn relationships(&self) -> usize {
        self.spouse_relationships + self.parent_child_relationships
    }
}

/// The converted documents plus bookkeeping
#[derive(Debug, Clone, PartialEq)]
pub struct GedcomImport {
    /// People in GEDCOM record order
    pub people: Vec<PersonRecord>,
    /// Relationships in family order
    pub relationships: Vec<RelationshipRecord>,
    /// Xref ↔ id mapping
    pub id_mapping: IdMapping,
    /// Counts
    pub stats: ImportStats,
}
