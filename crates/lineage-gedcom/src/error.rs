//! Error types for GEDCOM import

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a GEDCOM file
#[derive(Error, Debug)]
pub enum GedcomError {
    /// The GEDCOM file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output document could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output document could not be serialized
    #[error("Failed to serialize {document}: {source}")]
    Serialize {
        /// Document name
        document: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The file contains no individual records
    #[error("No individuals found in GEDCOM input")]
    NoIndividuals,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
