//! Ordered multimap of form values and its URL-encoded rendering.

use bytes::Bytes;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::Result;

/// MIME type of a URL-encoded form body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Ordered multimap from form keys to their values.
///
/// Keys keep their first-insertion order, which for encoder output is the
/// declaration order of the record's fields.
///
/// # Example
///
/// ```
/// use formwire_core::FormValues;
///
/// let mut values = FormValues::new();
/// values.add("tag", "a b");
/// values.add("page", "2");
/// values.add("tag", "c");
///
/// assert_eq!(values.get_all("tag"), ["a b", "c"]);
/// assert_eq!(values.to_urlencoded().expect("encode"), "tag=a+b&tag=c&page=2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormValues {
    entries: Vec<(String, Vec<String>)>,
}

impl FormValues {
    /// Create an empty set of form values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Append a value to `key`, creating the key if needed.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => {
                if let Some((_, values)) = self.entries.get_mut(index) {
                    values.push(value);
                }
            }
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Replace every value of `key` with `value`.
    ///
    /// An existing key keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(index) => {
                if let Some((_, values)) = self.entries.get_mut(index) {
                    *values = vec![value];
                }
            }
            None => self.entries.push((key, vec![value])),
        }
    }

    /// First value of `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).first().map(String::as_str)
    }

    /// All values of `key`, empty if absent.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
            .unwrap_or_default()
    }

    /// Remove `key`, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        let index = self.position(key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over keys and their values in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    /// Iterate over flattened `(key, value)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(k, values)| {
            values.iter().map(move |value| (k.as_str(), value.as_str()))
        })
    }

    /// Render as an `application/x-www-form-urlencoded` string.
    ///
    /// Pairs appear in key order; each value is percent-encoded.
    pub fn to_urlencoded(&self) -> Result<String> {
        serde_urlencoded::to_string(self).map_err(Into::into)
    }

    /// Render as a URL-encoded request body.
    pub fn to_body(&self) -> Result<Bytes> {
        self.to_urlencoded().map(|s| Bytes::from(s.into_bytes()))
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        for pair in self.pairs() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

impl<K, V> FromIterator<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        values.extend(iter);
        values
    }
}

impl<K, V> Extend<(K, V)> for FormValues
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl IntoIterator for FormValues {
    type Item = (String, Vec<String>);
    type IntoIter = std::vec::IntoIter<(String, Vec<String>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<FormValues> for Vec<(String, String)> {
    fn from(values: FormValues) -> Self {
        values
            .into_iter()
            .flat_map(|(key, values)| values.into_iter().map(move |value| (key.clone(), value)))
            .collect()
    }
}
