//! Startup loading of the three static documents
//!
//! The three reads are independent and run concurrently; the load is joined
//! before anything else happens and fails as a whole if any required read
//! or parse fails.

use crate::records::{PeopleDocument, RelationshipsDocument, SourcesDocument};
use crate::store::parse_document;
use crate::{EntityStore, StoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default file name of the people document
pub const PEOPLE_FILE: &str = "people.json";

/// Default file name of the relationships document
pub const RELATIONSHIPS_FILE: &str = "relationships.json";

/// Default file name of the sources document
pub const SOURCES_FILE: &str = "sources.json";

/// Locations of the three input documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// People document
    pub people: PathBuf,

    /// Relationships document
    pub relationships: PathBuf,

    /// Sources document (optional on disk)
    pub sources: PathBuf,
}

impl DataPaths {
    /// Standard file names inside a data directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            people: dir.join(PEOPLE_FILE),
            relationships: dir.join(RELATIONSHIPS_FILE),
            sources: dir.join(SOURCES_FILE),
        }
    }
}

/// Load the entity store from disk
///
/// People and relationships are required. A missing or blank sources file is
/// treated as an empty list; an unreadable or malformed one is still fatal.
///
/// # Examples
///
/// ```no_run
/// use lineage_store::{load, DataPaths};
///
/// # async fn example() -> Result<(), lineage_store::StoreError> {
/// let store = load(&DataPaths::in_dir("data")).await?;
/// println!("{} people", store.len());
/// # Ok(())
/// # }
/// ```
pub async fn load(paths: &DataPaths) -> Result<EntityStore, StoreError> {
    info!("Loading family data from {}", paths.people.display());

    let (people, relationships, sources) = tokio::try_join!(
        read_required(&paths.people, "people"),
        read_required(&paths.relationships, "relationships"),
        read_optional(&paths.sources, "sources"),
    )?;

    let people: PeopleDocument = parse_document(&people, "people")?;
    let relationships: RelationshipsDocument = parse_document(&relationships, "relationships")?;
    let sources: Option<SourcesDocument> = sources
        .filter(|json| !json.trim().is_empty())
        .map(|json| parse_document(&json, "sources"))
        .transpose()?;

    EntityStore::from_documents(people, relationships, sources)
}

async fn read_required(path: &Path, document: &'static str) -> Result<String, StoreError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Read { document, source })
}

async fn read_optional(path: &Path, document: &'static str) -> Result<Option<String>, StoreError> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {} document at {}, continuing without it", document, path.display());
            Ok(None)
        }
        Err(source) => Err(StoreError::Read { document, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_in_dir() {
        let paths = DataPaths::in_dir("/srv/family");
        assert_eq!(paths.people, PathBuf::from("/srv/family/people.json"));
        assert_eq!(paths.relationships, PathBuf::from("/srv/family/relationships.json"));
        assert_eq!(paths.sources, PathBuf::from("/srv/family/sources.json"));
    }
}
