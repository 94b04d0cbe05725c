//! Configuration for GEDCOM import

use serde::{Deserialize, Serialize};

/// Controls how imported records are renumbered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Prefix for person ids
    /// Default: "p"
    #[serde(default = "default_person_prefix")]
    pub person_prefix: String,

    /// Prefix for relationship ids
    /// Default: "r"
    #[serde(default = "default_relationship_prefix")]
    pub relationship_prefix: String,

    /// Minimum number of digits, zero-padded
    /// Default: 3
    #[serde(default = "default_id_width")]
    pub id_width: usize,
}

fn default_person_prefix() -> String {
    "p".to_string()
}

fn default_relationship_prefix() -> String {
    "r".to_string()
}

fn default_id_width() -> usize {
    3
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            person_prefix: default_person_prefix(),
            relationship_prefix: default_relationship_prefix(),
            id_width: default_id_width(),
        }
    }
}

impl ImportConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.person_prefix.trim().is_empty() {
            return Err("person_prefix must not be empty".to_string());
        }
        if self.person_prefix == self.relationship_prefix {
            return Err("person_prefix and relationship_prefix must differ".to_string());
        }
        if self.id_width > 12 {
            return Err("id_width must be at most 12".to_string());
        }
        Ok(())
    }

    pub(crate) fn person_id(&self, n: usize) -> String {
        format!("{}{:0width$}", self.person_prefix, n, width = self.id_width)
    }

    pub(crate) fn relationship_id(&self, n: usize) -> String {
        format!("{}{:0width$}", self.relationship_prefix, n, width = self.id_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let config = ImportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.person_id(1), "p001");
        assert_eq!(config.relationship_id(42), "r042");
        assert_eq!(config.person_id(1234), "p1234");
    }

    #[test]
    fn test_invalid_prefixes() {
        let config = ImportConfig {
            relationship_prefix: "p".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ImportConfig {
            person_prefix: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
