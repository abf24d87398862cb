use serde_json::Value;
use std::fmt;

/// HTTP verb used by a [`Route`](crate::core::kernel::Route).
///
/// A small closed set rather than `reqwest::Method` so that route
/// declarations stay const-constructible and comparable in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    /// Convert to the transport-level method type.
    pub fn as_method(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A primitive query-string value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Open-ended query parameter bag forwarded verbatim into the query string.
///
/// Keys map to primitives or to repeated primitives (one `key=value` pair
/// per element), which is how the API expects list-valued filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single `key=value` pair.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.pairs.push((key.into(), value.into().to_string()));
        self
    }

    /// Append one pair per element for a list-valued parameter.
    pub fn set_all<V: Into<QueryValue>>(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let key = key.into();
        for value in values {
            self.pairs.push((key.clone(), value.into().to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Decoded body of a successful response.
///
/// Mirrors the API's loose success contract: a 200/201 body that matches the
/// declared shape becomes [`Payload::Typed`]; a body that does not
/// structurally validate is handed back as raw JSON instead of failing; a
/// bodiless success (204 and any other unhandled 2xx) is [`Payload::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    Typed(T),
    Raw(Value),
    Empty,
}

impl<T> Payload<T> {
    /// The typed value, if the body validated against the declared shape.
    pub fn into_typed(self) -> Option<T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) | Self::Empty => None,
        }
    }

    pub fn as_typed(&self) -> Option<&T> {
        match self {
            Self::Typed(value) => Some(value),
            Self::Raw(_) | Self::Empty => None,
        }
    }

    /// The raw fallback value, if the body failed structural validation.
    pub fn into_raw(self) -> Option<Value> {
        match self {
            Self::Raw(value) => Some(value),
            Self::Typed(_) | Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_repeated_keys() {
        let query = Query::new()
            .set("per_page", 50_i64)
            .set_all("status[]", ["active", "deleted"]);
        assert_eq!(
            query.pairs(),
            &[
                ("per_page".to_string(), "50".to_string()),
                ("status[]".to_string(), "active".to_string()),
                ("status[]".to_string(), "deleted".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_value_display() {
        assert_eq!(QueryValue::from(true).to_string(), "true");
        assert_eq!(QueryValue::from(1.5).to_string(), "1.5");
        assert_eq!(QueryValue::from("x").to_string(), "x");
    }

    #[test]
    fn test_payload_accessors() {
        let typed: Payload<i64> = Payload::Typed(7);
        assert_eq!(typed.into_typed(), Some(7));

        let raw: Payload<i64> = Payload::Raw(serde_json::json!({"errors": []}));
        assert_eq!(raw.clone().into_typed(), None);
        assert!(raw.into_raw().is_some());

        let empty: Payload<i64> = Payload::Empty;
        assert!(empty.is_empty());
    }
}
