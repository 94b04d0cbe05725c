//! Lineage Domain Layer
//!
//! This crate contains the core data model for Lineage, a read-only browser
//! over hand-maintained genealogical data. It has ZERO external dependencies
//! and defines the value objects and trait interfaces that every other crate
//! depends upon.
//!
//! ## Key Concepts
//!
//! - **Person**: An externally identified individual with names, vitals and residences
//! - **Relationship edge**: A raw spousal or parent-child link between two person ids
//! - **Approximate year**: Best-effort year extraction from loosely formatted dates
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Records are immutable once loaded; derived relations live elsewhere
//! - Trait definitions for lookups performed by the graph and layout layers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod date;
pub mod person;
pub mod relationship;
pub mod traits;

// Re-exports for convenience
pub use date::{parse_approx_year, year_sort_key};
pub use person::{Gender, Person, PersonId, PersonName, Residence, VitalRecord};
pub use relationship::{ParentChildEdge, RelationshipEdge, RelationshipKind, SpouseEdge};
pub use traits::PersonLookup;
