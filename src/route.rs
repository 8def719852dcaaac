//! Route descriptors handed to the tab manager by the navigation layer.
//!
//! A [`RouteTarget`] is what the router reports after a navigation: the
//! resolved route name, its path and full path, query/params and the chain of
//! matched route records. The tab manager turns targets into
//! [`TabRecord`](crate::tab::TabRecord)s.

use crate::tab::TabMeta;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters left unescaped when building a full path, matching what
/// browsers leave alone in a query component.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// A query or route parameter value: a scalar or a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    /// The scalar value, or the first occurrence of a repeated key
    pub fn first(&self) -> Option<&str> {
        match self {
            QueryValue::One(value) => Some(value),
            QueryValue::Many(values) => values.first().map(String::as_str),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::One(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Many(values)
    }
}

/// Query string parameters, keyed by name
pub type RouteQuery = BTreeMap<String, QueryValue>;

/// Dynamic route parameters, keyed by name
pub type RouteParams = BTreeMap<String, QueryValue>;

/// One level of the matched route ancestry (root layout first, leaf last)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedRoute {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub meta: TabMeta,
}

impl MatchedRoute {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            meta: TabMeta::default(),
        }
    }

    pub fn with_meta(mut self, meta: TabMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// A navigational target as reported by the router
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTarget {
    /// Precomputed tab key; when set it is reused instead of resolved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    pub path: String,
    /// Path plus query and hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub params: RouteParams,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub query: RouteQuery,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched: Vec<MatchedRoute>,
    #[serde(default)]
    pub meta: TabMeta,
}

impl RouteTarget {
    /// Create a target with a name and path; the full path equals the path
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: name.into(),
            full_path: Some(path.clone()),
            path,
            ..Self::default()
        }
    }

    /// Add a query parameter and rebuild the full path
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.query.insert(key.into(), value.into());
        self.full_path = Some(build_full_path(&self.path, &self.query));
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_full_path(mut self, full_path: impl Into<String>) -> Self {
        self.full_path = Some(full_path.into());
        self
    }

    pub fn with_meta(mut self, meta: TabMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_matched(mut self, matched: Vec<MatchedRoute>) -> Self {
        self.matched = matched;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Full path when known, otherwise the bare path
    pub fn full_path_or_path(&self) -> &str {
        self.full_path.as_deref().unwrap_or(&self.path)
    }
}

/// Join a path and its query into a full path (`/users?id=1&tag=a&tag=b`).
///
/// Keys are emitted in sorted order so identical queries always produce the
/// same full path.
pub fn build_full_path(path: &str, query: &RouteQuery) -> String {
    let mut pairs = Vec::new();
    for (key, value) in query {
        let key = utf8_percent_encode(key, QUERY_ENCODE_SET);
        match value {
            QueryValue::One(v) => {
                pairs.push(format!("{key}={}", utf8_percent_encode(v, QUERY_ENCODE_SET)));
            }
            QueryValue::Many(values) => {
                for v in values {
                    pairs.push(format!("{key}={}", utf8_percent_encode(v, QUERY_ENCODE_SET)));
                }
            }
        }
    }
    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value_first() {
        assert_eq!(QueryValue::from("a").first(), Some("a"));
        let many = QueryValue::Many(vec!["x".to_string(), "y".to_string()]);
        assert_eq!(many.first(), Some("x"));
        assert_eq!(QueryValue::Many(Vec::new()).first(), None);
    }

    #[test]
    fn test_query_value_untagged_yaml() {
        let one: QueryValue = serde_yaml_ng::from_str("abc").unwrap();
        assert_eq!(one, QueryValue::from("abc"));
        let many: QueryValue = serde_yaml_ng::from_str("[a, b]").unwrap();
        assert_eq!(many.first(), Some("a"));
    }

    #[test]
    fn test_build_full_path_encodes_and_repeats() {
        let mut query = RouteQuery::new();
        query.insert("q".to_string(), QueryValue::from("a b"));
        query.insert(
            "tag".to_string(),
            QueryValue::Many(vec!["x".to_string(), "y".to_string()]),
        );
        assert_eq!(build_full_path("/search", &query), "/search?q=a%20b&tag=x&tag=y");
        assert_eq!(build_full_path("/plain", &RouteQuery::new()), "/plain");
    }

    #[test]
    fn test_with_query_rebuilds_full_path() {
        let target = RouteTarget::new("User", "/user").with_query("id", "7");
        assert_eq!(target.full_path.as_deref(), Some("/user?id=7"));
        assert_eq!(target.full_path_or_path(), "/user?id=7");
    }
}
