//! Top-level search configuration and loading.
//!
//! The configuration file is TOML. Every section is optional; anything left
//! out falls back to its defaults.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use solrq_core::{Error, Result};

use crate::grouping::{GroupDefinition, GroupingConfiguration, GroupingSettings};

/// Project name used for the default config directory.
pub const PROJECT_NAME: &str = "solrq";

/// The `[search]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Result grouping settings.
    pub grouping: GroupingConfiguration,
}

/// Root of the configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfiguration {
    /// Search settings.
    pub search: SearchSection,
}

impl SearchConfiguration {
    /// Parse a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse configuration: {e}")))
    }

    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the file cannot be read and `Error::Config` if
    /// it is not valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Load from an explicit path, or from the default location if it exists.
    ///
    /// An explicit path must exist. When no path is given and there is no
    /// file at the default location, defaults are returned.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load_or_default_from(Self::default_config_path()),
        }
    }

    /// Load from `default_path` if a file exists there, else use defaults.
    fn load_or_default_from(default_path: Option<PathBuf>) -> Result<Self> {
        match default_path {
            Some(default_path) if default_path.exists() => Self::load(default_path),
            Some(default_path) => {
                log::debug!(
                    "No configuration at {}, using defaults",
                    default_path.display()
                );
                Ok(Self::default())
            }
            None => {
                log::warn!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Default configuration path: `<config_dir>/solrq/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Grouping settings.
    pub fn grouping(&self) -> &GroupingConfiguration {
        &self.search.grouping
    }
}

impl GroupingSettings for SearchConfiguration {
    fn is_grouping_enabled(&self) -> bool {
        self.search.grouping.is_grouping_enabled()
    }

    fn grouping_group_definitions(&self) -> &IndexMap<String, GroupDefinition> {
        self.search.grouping.grouping_group_definitions()
    }

    fn grouping_number_of_groups(&self) -> i64 {
        self.search.grouping.grouping_number_of_groups()
    }

    fn grouping_highest_results_limit(&self) -> i64 {
        self.search.grouping.grouping_highest_results_limit()
    }

    fn grouping_legacy_field_source(&self) -> bool {
        self.search.grouping.grouping_legacy_field_source()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[search.grouping]
enabled = true
number_of_groups = 3
results_per_group = 2

[search.grouping.groups.category]
field = "category_s"
results_per_group = 5

[search.grouping.groups.cheap]
query = "price:[0 TO 10]"
sortBy = "price asc"
"#;

    #[test]
    fn test_from_toml_str() {
        let config = SearchConfiguration::from_toml_str(SAMPLE).unwrap();
        assert!(config.is_grouping_enabled());
        assert_eq!(config.grouping_number_of_groups(), 3);
        assert_eq!(config.grouping_highest_results_limit(), 5);
        assert_eq!(config.grouping().groups.len(), 2);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config = SearchConfiguration::from_toml_str("").unwrap();
        assert_eq!(config, SearchConfiguration::default());
        assert!(!config.is_grouping_enabled());
    }

    #[test]
    fn test_invalid_document() {
        let err = SearchConfiguration::from_toml_str("[search.grouping\nenabled = ").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_wrong_type_is_config_error() {
        let err =
            SearchConfiguration::from_toml_str("[search.grouping]\ngroups = 3").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = SearchConfiguration::load(&path).unwrap();
        assert!(config.is_grouping_enabled());
        assert_eq!(
            config.grouping().groups["cheap"].sort_by.as_deref(),
            Some("price asc")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = SearchConfiguration::load(&path).unwrap_err();
        let Error::Io { path: err_path, .. } = err else {
            unreachable!("Expected Io error variant");
        };
        assert_eq!(err_path, path);
    }

    #[test]
    fn test_load_or_default_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(SearchConfiguration::load_or_default(Some(&path)).is_err());
    }

    #[test]
    fn test_load_or_default_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = SearchConfiguration::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.grouping_number_of_groups(), 3);
    }

    #[test]
    fn test_default_location_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join(PROJECT_NAME).join("config.toml");
        let config = SearchConfiguration::load_or_default_from(Some(default_path)).unwrap();
        assert_eq!(config, SearchConfiguration::default());
    }

    #[test]
    fn test_default_location_existing_file_is_loaded() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("config.toml");
        std::fs::write(&default_path, SAMPLE).unwrap();
        let config = SearchConfiguration::load_or_default_from(Some(default_path)).unwrap();
        assert!(config.is_grouping_enabled());
        assert_eq!(config.grouping_number_of_groups(), 3);
    }

    #[test]
    fn test_default_location_existing_invalid_file_fails() {
        let dir = TempDir::new().unwrap();
        let default_path = dir.path().join("config.toml");
        std::fs::write(&default_path, "[search").unwrap();
        let err = SearchConfiguration::load_or_default_from(Some(default_path)).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_no_config_dir_uses_defaults() {
        let config = SearchConfiguration::load_or_default_from(None).unwrap();
        assert_eq!(config, SearchConfiguration::default());
    }

    #[test]
    fn test_float_group_limit_is_accepted() {
        let config = SearchConfiguration::from_toml_str(
            "[search.grouping]\nenabled = true\n[search.grouping.groups.a]\nfield = \"f\"\nresults_per_group = 4.0\n",
        )
        .unwrap();
        assert_eq!(config.grouping_highest_results_limit(), 4);
    }

    #[test]
    fn test_default_config_path_layout() {
        if let Some(path) = SearchConfiguration::default_config_path() {
            assert!(path.ends_with("solrq/config.toml"));
        }
    }

    #[test]
    fn test_toml_roundtrip_keeps_group_order() {
        let config = SearchConfiguration::from_toml_str(SAMPLE).unwrap();
        let rendered = config.to_toml_string().unwrap();
        let reparsed = SearchConfiguration::from_toml_str(&rendered).unwrap();
        assert_eq!(config, reparsed);
        let names: Vec<_> = reparsed.grouping().groups.keys().cloned().collect();
        assert_eq!(names, vec!["category", "cheap"]);
    }
}
