//! Configuration for the tree layout engine

use serde::{Deserialize, Serialize};

/// Upper bound accepted for `ancestor_generations`
pub const MAX_ANCESTOR_GENERATIONS: usize = 12;

/// Configuration for the layout engine
///
/// # Examples
///
/// ```
/// use lineage_layout::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.ancestor_generations, 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Generations shown above the root couple
    /// Default: 2 (parents and grandparents)
    #[serde(default = "default_ancestor_generations")]
    pub ancestor_generations: usize,

    /// Hard ceiling on descendant generations below the root
    /// Default: 64
    #[serde(default = "default_max_descendant_depth")]
    pub max_descendant_depth: usize,
}

fn default_ancestor_generations() -> usize {
    2
}

fn default_max_descendant_depth() -> usize {
    64
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ancestor_generations: default_ancestor_generations(),
            max_descendant_depth: default_max_descendant_depth(),
        }
    }
}

impl LayoutConfig {
    /// Compact preset: parents only, shallow descendant ceiling
    pub fn compact() -> Self {
        Self {
            ancestor_generations: 1,
            max_descendant_depth: 16,
        }
    }

    /// Expansive preset: four generations up, deep descendant ceiling
    pub fn expansive() -> Self {
        Self {
            ancestor_generations: 4,
            max_descendant_depth: 128,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.ancestor_generations > MAX_ANCESTOR_GENERATIONS {
            return Err(format!(
                "ancestor_generations must be at most {}",
                MAX_ANCESTOR_GENERATIONS
            ));
        }
        if self.max_descendant_depth == 0 {
            return Err("max_descendant_depth must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
        assert!(LayoutConfig::compact().validate().is_ok());
        assert!(LayoutConfig::expansive().validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        let mut config = LayoutConfig::default();
        config.max_descendant_depth = 0;
        assert!(config.validate().is_err());

        let mut config = LayoutConfig::default();
        config.ancestor_generations = MAX_ANCESTOR_GENERATIONS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"ancestor_generations": 3}"#).unwrap();
        assert_eq!(config.ancestor_generations, 3);
        assert_eq!(config.max_descendant_depth, 64);
    }
}
