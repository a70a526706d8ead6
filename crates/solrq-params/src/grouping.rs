//! Result grouping parameters.
//!
//! [`GroupingParameterBuilder`] turns grouping settings into the `group.*`
//! request parameters. Three strategies can be combined: grouping by field
//! values, by subqueries, and with custom in-group sorting.
//!
//! # Example
//!
//! ```
//! use solrq_config::SearchConfiguration;
//! use solrq_core::ParameterBuilder;
//! use solrq_params::GroupingParameterBuilder;
//!
//! let config = SearchConfiguration::from_toml_str(
//!     r#"
//!     [search.grouping]
//!     enabled = true
//!     results_per_group = 3
//!
//!     [search.grouping.groups.category]
//!     field = "category_s"
//!     "#,
//! )
//! .unwrap();
//!
//! let params = GroupingParameterBuilder::from_settings(&config).build();
//! assert_eq!(params.get("group.limit").and_then(|v| v.as_integer()), Some(3));
//! ```

use serde::{Deserialize, Serialize};
use solrq_config::GroupingSettings;
use solrq_core::coerce::{lenient_int, strict_int};
use solrq_core::{Error, ParameterBuilder, Parameters, Result};

/// Parameter names emitted by the grouping builder.
pub mod keys {
    /// Grouping switch.
    pub const GROUP: &str = "group";
    /// Response format.
    pub const FORMAT: &str = "group.format";
    /// Request the number of matching groups.
    pub const NGROUPS: &str = "group.ngroups";
    /// Rows per group.
    pub const LIMIT: &str = "group.limit";
    /// Query-based groups.
    pub const QUERY: &str = "group.query";
    /// In-group sort clauses.
    pub const SORT: &str = "group.sort";
    /// Field-based groups.
    pub const FIELD: &str = "group.field";
}

/// Which collection feeds the `group.field` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Emit the configured field names.
    #[default]
    Fields,
    /// Emit the sort clauses, as older deployments did.
    Sortings,
}

/// Builds the grouping fragment of a search request.
///
/// Created once per request, usually through [`from_settings`], and then
/// treated as read-only. The mutators exist for callers that assemble the
/// grouping by hand; nothing stops mutation after `build()` but the builder
/// is meant to be owned by a single request.
///
/// [`from_settings`]: GroupingParameterBuilder::from_settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingParameterBuilder {
    enabled: bool,
    fields: Vec<String>,
    sortings: Vec<String>,
    queries: Vec<String>,
    number_of_groups: i64,
    results_per_group: u64,
    field_source: FieldSource,
}

impl Default for GroupingParameterBuilder {
    fn default() -> Self {
        Self::disabled()
    }
}

impl GroupingParameterBuilder {
    /// A builder that contributes nothing.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            fields: Vec::new(),
            sortings: Vec::new(),
            queries: Vec::new(),
            number_of_groups: 5,
            results_per_group: 1,
            field_source: FieldSource::default(),
        }
    }

    /// Construct from grouping settings.
    ///
    /// Group definitions are read in declaration order. A definition with a
    /// `field` adds to the field list; otherwise its `query`, if any, adds to
    /// the query list. A `sort_by` is collected independently, so the sort
    /// list does not line up index-for-index with fields or queries.
    pub fn from_settings<S: GroupingSettings + ?Sized>(settings: &S) -> Self {
        if !settings.is_grouping_enabled() {
            log::debug!("Grouping disabled, no group parameters will be emitted");
            return Self::disabled();
        }

        let mut builder = Self::disabled();
        builder.enabled = true;

        for (name, group) in settings.grouping_group_definitions() {
            if let Some(field) = &group.field {
                builder.fields.push(field.clone());
            } else if let Some(query) = &group.query {
                builder.queries.push(query.clone());
            } else {
                log::debug!("Group '{name}' declares neither field nor query");
            }
            if let Some(sort_by) = &group.sort_by {
                builder.sortings.push(sort_by.clone());
            }
        }

        builder.number_of_groups = settings.grouping_number_of_groups();
        builder.set_results_per_group(settings.grouping_highest_results_limit());
        if settings.grouping_legacy_field_source() {
            builder.field_source = FieldSource::Sortings;
        }

        log::debug!(
            "Grouping enabled: {} field(s), {} query group(s), {} sorting(s), limit {}",
            builder.fields.len(),
            builder.queries.len(),
            builder.sortings.len(),
            builder.results_per_group
        );
        builder
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Whether grouping parameters are emitted.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Fields to group by.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// In-group sort clauses.
    pub fn sortings(&self) -> &[String] {
        &self.sortings
    }

    /// Subqueries to group by.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    /// Target number of groups. Captured from configuration, not emitted.
    pub fn number_of_groups(&self) -> i64 {
        self.number_of_groups
    }

    /// Maximum rows per group; zero means no `group.limit` is sent.
    pub fn results_per_group(&self) -> u64 {
        self.results_per_group
    }

    /// Collection feeding `group.field`.
    pub fn field_source(&self) -> FieldSource {
        self.field_source
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Switch grouping on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Replace the field list.
    pub fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }

    /// Append a field.
    pub fn add_field(&mut self, field: impl Into<String>) {
        self.fields.push(field.into());
    }

    /// Replace the sort clauses.
    pub fn set_sortings(&mut self, sortings: Vec<String>) {
        self.sortings = sortings;
    }

    /// Append a sort clause.
    pub fn add_sorting(&mut self, sorting: impl Into<String>) {
        self.sortings.push(sorting.into());
    }

    /// Replace the query list.
    pub fn set_queries(&mut self, queries: Vec<String>) {
        self.queries = queries;
    }

    /// Append a query.
    pub fn add_query(&mut self, query: impl Into<String>) {
        self.queries.push(query.into());
    }

    /// Set the target number of groups.
    pub fn set_number_of_groups(&mut self, number_of_groups: i64) {
        self.number_of_groups = number_of_groups;
    }

    /// Set the rows per group. Negative values are stored as zero.
    pub fn set_results_per_group(&mut self, results_per_group: i64) {
        self.results_per_group = results_per_group.max(0).unsigned_abs();
    }

    /// Set the rows per group from a string.
    ///
    /// The leading integer is used; a string without one counts as zero.
    /// Negative values are stored as zero. Never fails.
    pub fn set_results_per_group_str(&mut self, results_per_group: &str) {
        self.set_results_per_group(lenient_int(results_per_group));
    }

    /// Strict variant of [`set_results_per_group_str`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` unless the whole string is an
    /// integer. The stored value is left untouched in that case.
    ///
    /// [`set_results_per_group_str`]: GroupingParameterBuilder::set_results_per_group_str
    pub fn try_set_results_per_group_str(&mut self, results_per_group: &str) -> Result<()> {
        let value = strict_int(results_per_group).ok_or_else(|| {
            Error::invalid_argument(
                "results_per_group",
                format!("not an integer: '{results_per_group}'"),
            )
        })?;
        self.set_results_per_group(value);
        Ok(())
    }

    /// Choose which collection feeds `group.field`.
    pub fn set_field_source(&mut self, field_source: FieldSource) {
        self.field_source = field_source;
    }
}

impl ParameterBuilder for GroupingParameterBuilder {
    fn build(&self) -> Parameters {
        let mut params = Parameters::new();
        if !self.enabled {
            return params;
        }

        params.insert(keys::GROUP, "true");
        params.insert(keys::FORMAT, "grouped");
        params.insert(keys::NGROUPS, "true");

        if self.results_per_group > 0 {
            params.insert(keys::LIMIT, self.results_per_group);
        }

        if !self.queries.is_empty() {
            params.insert(keys::QUERY, self.queries.clone());
        }

        if !self.sortings.is_empty() {
            params.insert(keys::SORT, self.sortings.clone());
        }

        if !self.fields.is_empty() {
            let values = match self.field_source {
                FieldSource::Fields => &self.fields,
                FieldSource::Sortings => &self.sortings,
            };
            params.insert(keys::FIELD, values.clone());
        }

        params
    }
}

// ============================================================================
// Tests
// ============================================================================
