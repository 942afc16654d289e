use serde::Serialize;
use std::collections::BTreeMap;

/// A scalar query parameter value as supplied by a page.
///
/// `Absent` stands in for a filter the page has no value for. Absent values
/// and empty strings are dropped by [`QueryParams::sanitized`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParamValue {
    #[default]
    Absent,
    Text(String),
    Int(i64),
    Bool(bool),
}

impl ParamValue {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(text) => text.is_empty(),
            Self::Int(_) | Self::Bool(_) => false,
        }
    }

    fn render(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(text) if text.is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(value.into())
    }
}

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// Query parameters for a collection request, before sanitizing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(BTreeMap<String, ParamValue>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous value for `key`.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drop absent and empty values, rendering the rest as strings.
    pub fn sanitized(&self) -> SanitizedParams {
        SanitizedParams(
            self.0
                .iter()
                .filter_map(|(key, value)| {
                    value.render().map(|rendered| (key.clone(), rendered))
                })
                .collect(),
        )
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// Query parameters safe to send: every value is present and non-empty.
///
/// Keys are kept sorted so that [`SanitizedParams::key`] is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SanitizedParams(BTreeMap<String, String>);

impl SanitizedParams {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Stable serialization used to decide whether a fetch must re-run.
    pub fn key(&self) -> String {
        // serializing a map of strings cannot fail
        serde_json::to_string(&self.0).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizing_drops_absent_and_empty_values() {
        let params = QueryParams::new()
            .with("search", "")
            .with("category", None::<i64>)
            .with("season", Some(3_i64))
            .with("featured", false)
            .with("ordering", "-published_at");

        let sanitized = params.sanitized();
        assert!(!sanitized.contains_key("search"));
        assert!(!sanitized.contains_key("category"));
        assert_eq!(sanitized.get("season"), Some("3"));
        assert_eq!(sanitized.get("featured"), Some("false"));
        assert_eq!(sanitized.get("ordering"), Some("-published_at"));
        assert_eq!(sanitized.iter().count(), 3);
    }

    #[test]
    fn key_ignores_insertion_order_and_empty_values() {
        let a = QueryParams::new().with("b", "2").with("a", 1_i64);
        let b = QueryParams::new()
            .with("a", "1")
            .with("search", "")
            .with("b", "2");
        assert_eq!(a.sanitized().key(), b.sanitized().key());
        assert_eq!(a.sanitized().key(), r#"{"a":"1","b":"2"}"#);
    }

    #[test]
    fn fresh_empty_params_share_a_key() {
        assert_eq!(
            QueryParams::new().sanitized().key(),
            QueryParams::default().with("search", "").sanitized().key()
        );
    }
}
