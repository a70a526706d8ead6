//! Solrq Core — shared types, traits, and errors.
//!
//! This crate has no internal Solrq dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`params`]: Parameter fragments and the `ParameterBuilder` trait
//! - [`coerce`]: Lenient integer coercion for configuration strings

pub mod coerce;
pub mod error;
pub mod params;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use params::{ParamValue, ParameterBuilder, Parameters};
