//! Error types for tree layout

use lineage_domain::PersonId;
use thiserror::Error;

/// Errors that can occur while laying out a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The requested root person is not in the index
    #[error("Root person not found: {0}")]
    RootNotFound(String),

    /// A person was reached again below themself while walking descendants
    #[error("Relationship cycle detected: {person_id} is recorded as their own descendant")]
    Cycle {
        /// The person that closed the cycle
        person_id: PersonId,
    },

    /// Descendant walk went deeper than the configured ceiling
    #[error("Descendant depth limit of {limit} generations exceeded below {person_id}")]
    DepthExceeded {
        /// Configured ceiling
        limit: usize,
        /// Person whose children would exceed the ceiling
        person_id: PersonId,
    },

    /// Invalid layout configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
