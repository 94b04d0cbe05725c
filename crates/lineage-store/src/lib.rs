//! Lineage Storage Layer
//!
//! Loads the three static JSON documents (people, relationships, sources)
//! into an immutable, id-indexed entity store.
//!
//! # Architecture
//!
//! - `records`: serde types mirroring the hand-maintained document schema
//! - `conversions`: record ↔ domain conversions with load-time validation
//! - `store`: the `EntityStore` and its `PersonLookup` implementation
//! - `loader`: concurrent startup read of all three documents
//!
//! # Examples
//!
//! ```no_run
//! use lineage_store::{load, DataPaths};
//! use lineage_domain::PersonLookup;
//!
//! # async fn example() -> Result<(), lineage_store::StoreError> {
//! let store = load(&DataPaths::in_dir("data")).await?;
//! if let Some(person) = store.person("p001") {
//!     println!("{}", person.display_name());
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod conversions;
mod error;
mod loader;
pub mod records;
mod store;

pub use error::StoreError;
pub use loader::{load, DataPaths, PEOPLE_FILE, RELATIONSHIPS_FILE, SOURCES_FILE};
pub use records::{
    EventRecord, PeopleDocument, PersonRecord, RelationshipRecord, RelationshipsDocument,
    SourceRecord, SourcesDocument,
};
pub use store::EntityStore;
