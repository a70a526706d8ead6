//! Lenient deserializers for configuration scalars.
//!
//! Search configuration is often written by hand or migrated from systems
//! where every value is a string. Numbers and flags therefore accept either
//! their native TOML type or a string, and strings are coerced instead of
//! rejected. Floats truncate toward zero and booleans count as 0 or 1.

use serde::{Deserialize, Deserializer};
use solrq_core::coerce::{has_numeric_prefix, lenient_int, truncate_float};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl NumberValue {
    fn coerce(self) -> i64 {
        match self {
            NumberValue::Int(n) => n,
            NumberValue::Float(f) => coerce_float(f),
            NumberValue::Bool(b) => i64::from(b),
            NumberValue::Str(s) => coerce_str(&s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

fn coerce_float(raw: f64) -> i64 {
    let value = truncate_float(raw);
    if raw.fract() != 0.0 || !raw.is_finite() {
        log::warn!("Fractional configuration value {raw} truncated to {value}");
    }
    value
}

fn coerce_str(raw: &str) -> i64 {
    if !has_numeric_prefix(raw) {
        log::warn!("Non-numeric configuration value '{raw}' coerced to 0");
    }
    lenient_int(raw)
}

/// Deserialize an integer that may be written as a string.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(NumberValue::deserialize(deserializer)?.coerce())
}

/// Optional variant of [`lenient_i64`]; pair with `#[serde(default)]`.
pub(crate) fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberValue>::deserialize(deserializer)?.map(NumberValue::coerce))
}

/// Deserialize a flag written as a bool, a number, or a string.
///
/// Numbers and numeric strings are enabled when non-zero; `"true"` and
/// `"false"` are accepted in any case.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => b,
        FlagValue::Int(n) => n != 0,
        FlagValue::Float(f) => f != 0.0,
        FlagValue::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" => true,
            "false" | "no" | "off" | "" => false,
            other => coerce_str(other) != 0,
        },
    })
}
