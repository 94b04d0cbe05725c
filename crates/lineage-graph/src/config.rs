//! Configuration for the relationship graph builder

use serde::{Deserialize, Serialize};

/// How siblings are derived from parents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingMode {
    /// Other children of the first listed parent only
    ///
    /// Half-siblings through a second parent are not surfaced. This matches
    /// the behaviour the existing data was curated against.
    #[default]
    FirstParent,

    /// Other children of any listed parent, in parent order
    AllParents,
}

/// Configuration for the graph builder
///
/// # Examples
///
/// ```
/// use lineage_graph::{GraphConfig, SiblingMode};
///
/// let config = GraphConfig::default();
/// assert_eq!(config.sibling_mode, SiblingMode::FirstParent);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Sibling derivation rule
    #[serde(default)]
    pub sibling_mode: SiblingMode,
}

impl GraphConfig {
    /// Configuration that surfaces half-siblings through every parent
    pub fn all_parents() -> Self {
        Self {
            sibling_mode: SiblingMode::AllParents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_parent() {
        assert_eq!(GraphConfig::default().sibling_mode, SiblingMode::FirstParent);
        assert_eq!(GraphConfig::all_parents().sibling_mode, SiblingMode::AllParents);
    }

    #[test]
    fn test_toml_parsing() {
        let config: GraphConfig = toml::from_str("sibling_mode = \"all_parents\"").unwrap();
        assert_eq!(config.sibling_mode, SiblingMode::AllParents);

        let config: GraphConfig = toml::from_str("").unwrap();
        assert_eq!(config.sibling_mode, SiblingMode::FirstParent);
    }
}
