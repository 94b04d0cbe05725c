//! Configuration for the family browser

use lineage_graph::GraphConfig;
use lineage_layout::LayoutConfig;
use serde::{Deserialize, Serialize};

/// Zoom bounds for the tree view, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Smallest zoom level
    pub min_percent: u16,

    /// Largest zoom level
    pub max_percent: u16,

    /// Change per zoom step
    pub step_percent: u16,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_percent: 30,
            max_percent: 200,
            step_percent: 10,
        }
    }
}

/// Configuration for the family browser
///
/// Can be loaded from TOML:
///
/// ```toml
/// default_root = "p001"
/// default_co_root = "p002"
///
/// [graph]
/// sibling_mode = "first_parent"
///
/// [layout]
/// ancestor_generations = 2
/// max_descendant_depth = 64
///
/// [zoom]
/// min_percent = 30
/// max_percent = 200
/// step_percent = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Person the tree is centered on at startup
    /// Default: the first person in the people document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_root: Option<String>,

    /// Partner shown beside the default root
    /// Default: the default root's first spouse
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_co_root: Option<String>,

    /// Graph builder settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Layout engine settings
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Zoom bounds
    #[serde(default)]
    pub zoom: ZoomConfig,
}

impl BrowserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        self.layout.validate()?;
        if self.zoom.step_percent == 0 {
            return Err("zoom.step_percent must be greater than 0".to_string());
        }
        if self.zoom.min_percent == 0 || self.zoom.min_percent > 100 || self.zoom.max_percent < 100 {
            return Err("zoom bounds must satisfy 0 < min_percent <= 100 <= max_percent".to_string());
        }
        if self.default_co_root.is_some() && self.default_root.is_none() {
            return Err("default_co_root requires default_root".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_graph::SiblingMode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(BrowserConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = BrowserConfig::from_toml(
            r#"
            default_root = "p001"
            default_co_root = "p002"

            [graph]
            sibling_mode = "all_parents"

            [layout]
            ancestor_generations = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.default_root.as_deref(), Some("p001"));
        assert_eq!(config.graph.sibling_mode, SiblingMode::AllParents);
        assert_eq!(config.layout.ancestor_generations, 3);
        assert_eq!(config.layout.max_descendant_depth, 64);
        assert_eq!(config.zoom, ZoomConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BrowserConfig {
            default_root: Some("p001".to_string()),
            ..Default::default()
        };
        let parsed = BrowserConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_invalid_zoom() {
        let mut config = BrowserConfig::default();
        config.zoom.step_percent = 0;
        assert!(config.validate().is_err());

        let mut config = BrowserConfig::default();
        config.zoom.max_percent = 90;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_co_root_requires_root() {
        let config = BrowserConfig {
            default_co_root: Some("p002".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
