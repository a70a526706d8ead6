//! Search configuration for Solrq parameter builders.
//!
//! Loads the TOML configuration document and exposes the read-only
//! accessor traits that parameter builders are constructed from.
//!
//! # Example
//!
//! ```
//! use solrq_config::{GroupingSettings, SearchConfiguration};
//!
//! let config = SearchConfiguration::from_toml_str(
//!     r#"
//!     [search.grouping]
//!     enabled = true
//!
//!     [search.grouping.groups.category]
//!     field = "category_s"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.is_grouping_enabled());
//! assert_eq!(config.grouping_group_definitions().len(), 1);
//! ```

mod de;
pub mod grouping;
pub mod search;

pub use grouping::{GroupDefinition, GroupingConfiguration, GroupingSettings};
pub use search::{SearchConfiguration, SearchSection, PROJECT_NAME};
