//! Lineage GEDCOM Import
//!
//! Converts a GEDCOM export (as produced by common genealogy services) into
//! the people, relationships and sources documents the browser loads.
//!
//! # Overview
//!
//! ```text
//! .ged text → parse_records → INDI / FAM records
//!                               ├→ PersonRecord (renumbered p001, p002, ...)
//!                               └→ RelationshipRecord (spouse, parent-child)
//!           → GedcomImport::write_to(dir)
//!               people.json, relationships.json, sources.json, id_mapping.json
//! ```
//!
//! Dates are normalized to the loose style the documents use
//! (`March 15, 1892`, `circa 1850`); see [`format_date`].
//!
//! # Example
//!
//! ```
//! use lineage_gedcom::GedcomImporter;
//!
//! let ged = "0 @I1@ INDI\n1 NAME Joseph /Sprys/\n1 SEX M\n\
//!            0 @I2@ INDI\n1 NAME Lois /Stokes/\n\
//!            0 @F1@ FAM\n1 HUSB @I1@\n1 WIFE @I2@\n1 MARR\n2 DATE 1915\n";
//!
//! let import = GedcomImporter::default().convert(ged).unwrap();
//! assert_eq!(import.people[0].id, "p001");
//! assert_eq!(import.stats.spouse_relationships, 1);
//! ```

#![warn(missing_docs)]

mod config;
mod date;
mod error;
mod importer;
pub mod parser;
mod types;

pub use config::ImportConfig;
pub use date::format_date;
pub use error::GedcomError;
pub use importer::{GedcomImporter, ID_MAPPING_FILE};
pub use types::{GedcomImport, IdMapping, ImportStats};
