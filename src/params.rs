use crate::codec::{decode_component, encode_component};
use crate::compat::{String, ToString, Vec};

/// Value stored under a query key.
///
/// A key that appears more than once in a query string (`tag=a&tag=b`) decodes
/// into a [`ParamValue::List`], which is written back out as repeated pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        self.as_slice().first().map(String::as_str)
    }

    /// All values in order. A single value is a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(value) => core::slice::from_ref(value),
            Self::List(values) => values,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Add another value, turning a single value into a list.
    pub fn push(&mut self, value: String) {
        match self {
            Self::List(values) => values.push(value),
            Self::Single(first) => {
                let first = core::mem::take(first);
                *self = Self::List(Vec::from([first, value]));
            }
        }
    }
}

impl Default for ParamValue {
    fn default() -> Self {
        Self::Single(String::new())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Single(value.clone())
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Single(value.to_string())
                }
            }
        )*
    };
}

impl_from_display!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl<T: ToString> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

impl<T: ToString, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        Self::List(values.iter().map(ToString::to_string).collect())
    }
}

/// Ordered set of query parameters with unique keys.
/// Keys keep the position of their first insertion; overwriting a key keeps that position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse from a query string (with or without leading `?`)
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = Self::new();
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => {
                    params.append(decode_component(key), decode_component(value));
                }
                None => params.append(decode_component(pair), String::new()),
            }
        }
        params
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Get the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_value(key).and_then(ParamValue::first)
    }

    pub fn get_value(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Get all values for a key.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.get_value(key)
            .map(|value| value.as_slice().iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Set a key, replacing its value in place or appending it at the end.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Add a value under a key. An existing key collects the values into a list.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1.push(value),
            None => self.entries.push((key, ParamValue::Single(value))),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.position(key).map(|index| self.entries.remove(index).1)
    }

    /// Set every pair, in order. Later pairs win over earlier ones.
    pub fn merge<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Copy of these params without the given keys. Unknown keys are ignored.
    #[must_use]
    pub fn without<I, S>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let omitted: Vec<S> = keys.into_iter().collect();
        let entries = self
            .entries
            .iter()
            .filter(|(k, _)| !omitted.iter().any(|o| o.as_ref() == k))
            .cloned()
            .collect();
        Self { entries }
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Encode as `key=value` pairs joined by `&`, without a leading `?`.
    /// An empty set encodes as an empty string.
    pub fn to_query_string(&self) -> String {
        let mut result = String::new();
        for (key, value) in &self.entries {
            for item in value.as_slice() {
                if !result.is_empty() {
                    result.push('&');
                }
                result.push_str(&encode_component(key));
                result.push('=');
                result.push_str(&encode_component(item));
            }
        }
        result
    }
}

impl core::fmt::Display for QueryParams {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl From<&str> for QueryParams {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        params.merge(iter);
        params
    }
}

impl<K: Into<String>, V: Into<ParamValue>> Extend<(K, V)> for QueryParams {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.merge(iter);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryParams {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ParamsVisitor;

        impl<'de> serde::de::Visitor<'de> for ParamsVisitor {
            type Value = QueryParams;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of query parameters")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut params = QueryParams::new();
                while let Some((key, value)) = access.next_entry::<String, ParamValue>()? {
                    params.set(key, value);
                }
                Ok(params)
            }
        }

        deserializer.deserialize_map(ParamsVisitor)
    }
}
