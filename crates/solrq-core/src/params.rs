//! Request parameter fragments.
//!
//! A [`Parameters`] value is the contribution of one parameter builder to the
//! outgoing search request. Keys keep the order in which they were inserted so
//! the emitted request is stable across runs.
//!
//! # Example
//!
//! ```
//! use solrq_core::Parameters;
//!
//! let mut params = Parameters::new();
//! params.insert("group", "true");
//! params.insert("group.limit", 3u64);
//! params.insert("group.field", vec!["category".to_string()]);
//!
//! let pairs = params.to_query_pairs();
//! assert_eq!(pairs[1], ("group.limit".to_string(), "3".to_string()));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single parameter value.
///
/// Scalars keep their native type; lists are repeated once per element when
/// the request is serialized onto the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Integer value (e.g. `group.limit`).
    Integer(u64),
    /// Plain string value.
    Text(String),
    /// Multi-valued parameter.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the string if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Integer` value.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the elements if this is a `List` value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Wire representation: one string per value to send.
    pub fn wire_values(&self) -> Vec<String> {
        match self {
            ParamValue::Integer(n) => vec![n.to_string()],
            ParamValue::Text(s) => vec![s.clone()],
            ParamValue::List(items) => items.clone(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

/// Insertion-ordered mapping of parameter names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters {
    entries: IndexMap<String, ParamValue>,
}

impl Parameters {
    /// Create an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    ///
    /// Re-inserting an existing name replaces its value and keeps its
    /// original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.get(name)
    }

    /// Returns true if the parameter is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(name, value)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Flatten into query-string pairs.
    ///
    /// List values produce one pair per element, in order. An empty list
    /// produces no pairs.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .flat_map(|(name, value)| {
                value
                    .wire_values()
                    .into_iter()
                    .map(move |v| (name.clone(), v))
            })
            .collect()
    }
}

/// A component that contributes one fragment of the outgoing request.
///
/// `build` is pure: it reads state captured at construction and returns a
/// fresh [`Parameters`] on every call.
pub trait ParameterBuilder {
    /// Compute this builder's parameter fragment.
    fn build(&self) -> Parameters;
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut params = Parameters::new();
        params.insert("b", "1");
        params.insert("a", "2");
        params.insert("c", "3");
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut params = Parameters::new();
        params.insert("first", "1");
        params.insert("second", "2");
        params.insert("first", "changed");
        assert_eq!(params.len(), 2);
        assert_eq!(params.keys().next(), Some("first"));
        assert_eq!(params.get("first").unwrap().as_text(), Some("changed"));
    }

    #[test]
    fn test_empty_parameters() {
        let params = Parameters::new();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(params.to_query_pairs().is_empty());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(ParamValue::from("x").as_text(), Some("x"));
        assert_eq!(ParamValue::from(4u64).as_integer(), Some(4));
        let list = ParamValue::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(list.as_list().unwrap(), ["a", "b"]);
        assert_eq!(list.as_text(), None);
    }

    #[test]
    fn test_query_pairs_repeat_lists() {
        let mut params = Parameters::new();
        params.insert("group", "true");
        params.insert("group.limit", 2u64);
        params.insert(
            "group.query",
            vec!["price:[0 TO 10]".to_string(), "price:[10 TO *]".to_string()],
        );

        let pairs = params.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("group".to_string(), "true".to_string()),
                ("group.limit".to_string(), "2".to_string()),
                ("group.query".to_string(), "price:[0 TO 10]".to_string()),
                ("group.query".to_string(), "price:[10 TO *]".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_pairs_empty_list() {
        let mut params = Parameters::new();
        params.insert("group.sort", Vec::<String>::new());
        assert!(params.to_query_pairs().is_empty());
    }

    #[test]
    fn test_serialize_native_types() {
        let mut params = Parameters::new();
        params.insert("group", "true");
        params.insert("group.limit", 3u64);
        params.insert("group.field", vec!["category".to_string()]);

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#"{"group":"true","group.limit":3,"group.field":["category"]}"#
        );
    }

    #[test]
    fn test_deserialize_native_types() {
        let params: Parameters =
            serde_json::from_str(r#"{"group.limit":5,"group.sort":["score desc"]}"#).unwrap();
        assert_eq!(params.get("group.limit"), Some(&ParamValue::Integer(5)));
        assert_eq!(
            params.get("group.sort").unwrap().as_list().unwrap(),
            ["score desc"]
        );
    }
}
