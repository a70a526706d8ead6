//! Solr request parameter builders.
//!
//! Each builder translates one configuration concern into a fragment of
//! request parameters. Builders are constructed per request from the search
//! configuration and implement [`ParameterBuilder`].
//!
//! # Builders
//!
//! | Builder | Parameters |
//! |---------|------------|
//! | [`GroupingParameterBuilder`] | `group`, `group.format`, `group.ngroups`, `group.limit`, `group.query`, `group.sort`, `group.field` |
//!
//! Merging fragments and sending them is left to the request assembler.

pub mod grouping;

pub use grouping::{FieldSource, GroupingParameterBuilder};
pub use solrq_core::{ParamValue, ParameterBuilder, Parameters};
