//! Error types for browser operations

use lineage_layout::LayoutError;
use lineage_store::StoreError;
use thiserror::Error;

/// Result type alias for browser operations
pub type Result<T> = std::result::Result<T, BrowserError>;

/// Errors surfaced by the family browser
#[derive(Error, Debug)]
pub enum BrowserError {
    /// No person with this id exists; the session is left unchanged
    #[error("Person not found: {0}")]
    PersonNotFound(String),

    /// Tree layout failed (cycle, depth ceiling)
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Loading the documents failed
    #[error("Load error: {0}")]
    Store(#[from] StoreError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The store holds no people, so there is nothing to center on
    #[error("No people loaded")]
    Empty,
}
