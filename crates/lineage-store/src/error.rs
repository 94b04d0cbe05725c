//! Error types for loading the entity store

use thiserror::Error;

/// Errors that can occur while loading or assembling the entity store
///
/// All of these are fatal load-time errors: the caller should abort
/// initialization and render nothing further.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document could not be read
    #[error("Failed to read {document} document: {source}")]
    Read {
        /// Which document (people, relationships, sources)
        document: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid JSON or does not match the schema
    #[error("Failed to parse {document} document: {source}")]
    Parse {
        /// Which document (people, relationships, sources)
        document: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// A person record is invalid (e.g. missing id)
    #[error("Invalid person record: {0}")]
    InvalidPerson(String),

    /// A relationship record is missing required fields
    #[error("Invalid relationship record: {0}")]
    InvalidRelationship(String),

    /// Two person records share an id
    #[error("Duplicate person id: {0}")]
    DuplicateId(String),
}
