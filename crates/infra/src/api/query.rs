//! Query-string filters for list endpoints
//!
//! Filters map a parameter name to a value; entries whose value is falsy
//! (empty string, zero, false) are omitted from the resulting query
//! string, truthy entries appear verbatim in insertion order.

use std::fmt;

/// A single filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Number(i64),
    Flag(bool),
}

impl FilterValue {
    /// Falsy values are dropped when the query string is built
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::Number(value) => *value == 0,
            Self::Flag(value) => !value,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Flag(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Ordered set of query parameters for a list endpoint
#[derive(Debug, Clone, Default)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter entry (builder style)
    #[must_use]
    pub fn set(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Entries that survive falsy elision, rendered as strings
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_falsy())
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }

    /// Percent-encoded query string, or `None` when nothing survives
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        let pairs = self.to_query_pairs();
        if pairs.is_empty() {
            return None;
        }

        Some(
            pairs
                .iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect::<Vec<_>>()
                .join("&"),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_values_are_omitted() {
        let filters = Filters::new()
            .set("status", "open")
            .set("search", "")
            .set("designerId", 0i64)
            .set("archived", false)
            .set("customerId", 7i64)
            .set("mine", true);

        let pairs = filters.to_query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("status".to_string(), "open".to_string()),
                ("customerId".to_string(), "7".to_string()),
                ("mine".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn encode_returns_none_when_everything_is_falsy() {
        let filters = Filters::new().set("search", "").set("page", 0i64);
        assert_eq!(filters.encode(), None);
    }

    #[test]
    fn encode_percent_encodes_values() {
        let filters = Filters::new().set("search", "silk dress");
        assert_eq!(filters.encode().as_deref(), Some("search=silk%20dress"));
    }

    #[test]
    fn insertion_order_is_preserved() {
        let filters = Filters::new().set("b", 2i64).set("a", 1i64);
        assert_eq!(filters.encode().as_deref(), Some("b=2&a=1"));
    }
}
