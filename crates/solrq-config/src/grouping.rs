//! Result grouping configuration.
//!
//! Maps the `[search.grouping]` table:
//!
//! ```toml
//! [search.grouping]
//! enabled = true
//! number_of_groups = 5
//! results_per_group = 1
//!
//! [search.grouping.groups.category]
//! field = "category_s"
//! results_per_group = 3
//!
//! [search.grouping.groups.cheap]
//! query = "price:[0 TO 10]"
//! sort_by = "price asc"
//! ```
//!
//! Groups are kept in declaration order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::de::{lenient_bool, lenient_i64, lenient_opt_i64};

/// One named group: either a field or a query to group by, optionally
/// sorted within the group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDefinition {
    /// Field whose values form the groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Query whose matches form one group. Ignored when `field` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Sort clause applied inside the group.
    #[serde(default, alias = "sortBy", skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Per-group result limit, considered for the highest results limit.
    #[serde(
        default,
        alias = "resultsPerGroup",
        deserialize_with = "lenient_opt_i64",
        skip_serializing_if = "Option::is_none"
    )]
    pub results_per_group: Option<i64>,
}

impl GroupDefinition {
    /// Group by the values of `field`.
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Default::default()
        }
    }

    /// Group by the documents matching `query`.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    /// Set the in-group sort clause.
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Set the per-group result limit.
    pub fn with_results_per_group(mut self, limit: i64) -> Self {
        self.results_per_group = Some(limit);
        self
    }
}

/// The `[search.grouping]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfiguration {
    /// Master switch for result grouping.
    #[serde(deserialize_with = "lenient_bool")]
    pub enabled: bool,

    /// Target number of groups.
    #[serde(alias = "numberOfGroups", deserialize_with = "lenient_i64")]
    pub number_of_groups: i64,

    /// Default maximum number of rows per group.
    #[serde(alias = "resultsPerGroup", deserialize_with = "lenient_i64")]
    pub results_per_group: i64,

    /// Emit sort clauses as `group.field` for compatibility with deployments
    /// that relied on that behaviour.
    #[serde(deserialize_with = "lenient_bool")]
    pub legacy_field_source: bool,

    /// Named group definitions, in declaration order.
    pub groups: IndexMap<String, GroupDefinition>,
}

impl Default for GroupingConfiguration {
    fn default() -> Self {
        Self {
            enabled: false,
            number_of_groups: 5,
            results_per_group: 1,
            legacy_field_source: false,
            groups: IndexMap::new(),
        }
    }
}

impl GroupingConfiguration {
    /// Largest results-per-group value among the global default and every
    /// group that declares its own limit.
    pub fn highest_results_limit(&self) -> i64 {
        self.groups
            .values()
            .filter_map(|group| group.results_per_group)
            .fold(self.results_per_group, i64::max)
    }
}

/// Read access to grouping settings.
///
/// This is the contract the grouping parameter builder consumes; any
/// configuration layer able to answer these questions can drive it.
pub trait GroupingSettings {
    /// Whether grouping is switched on.
    fn is_grouping_enabled(&self) -> bool;

    /// Group definitions keyed by name, in declaration order.
    fn grouping_group_definitions(&self) -> &IndexMap<String, GroupDefinition>;

    /// Target number of groups.
    fn grouping_number_of_groups(&self) -> i64;

    /// Maximum results-per-group across all configured groups.
    fn grouping_highest_results_limit(&self) -> i64;

    /// Whether `group.field` should carry sort clauses instead of field names.
    fn grouping_legacy_field_source(&self) -> bool {
        false
    }
}

impl GroupingSettings for GroupingConfiguration {
    fn is_grouping_enabled(&self) -> bool {
        self.enabled
    }

    fn grouping_group_definitions(&self) -> &IndexMap<String, GroupDefinition> {
        &self.groups
    }

    fn grouping_number_of_groups(&self) -> i64 {
        self.number_of_groups
    }

    fn grouping_highest_results_limit(&self) -> i64 {
        self.highest_results_limit()
    }

    fn grouping_legacy_field_source(&self) -> bool {
        self.legacy_field_source
    }
}

// ============================================================================
// Tests
// ============================================================================
