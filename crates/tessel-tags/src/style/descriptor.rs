//! Ordered style descriptor.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::DescriptorError;
use super::value::StyleValue;

/// An ordered mapping from attribute name to [`StyleValue`].
///
/// Keys keep their insertion order. Tag generation walks them in that order,
/// so the first key ends up innermost and the last key outermost.
/// Re-setting an existing key replaces its value without moving it.
///
/// # Example
///
/// ```rust
/// use tessel_tags::StyleDescriptor;
///
/// let style = StyleDescriptor::new()
///     .add("bold", true)
///     .add("fg", "lightred");
///
/// assert_eq!(style.len(), 2);
/// assert_eq!(style.keys().collect::<Vec<_>>(), ["bold", "fg"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDescriptor {
    entries: Vec<(String, StyleValue)>,
}

impl StyleDescriptor {
    /// Creates an empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the descriptor for chaining.
    pub fn add<V: Into<StyleValue>>(mut self, key: &str, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an attribute in place.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn set<V: Into<StyleValue>>(&mut self, key: &str, value: V) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Removes `key`, returning its value. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over attribute names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Loads a descriptor from a flat JSON object, keeping document order.
    ///
    /// ```rust
    /// use tessel_tags::StyleDescriptor;
    ///
    /// let style = StyleDescriptor::from_json(r#"{"fg": "red", "bold": true}"#).unwrap();
    /// assert_eq!(style.keys().collect::<Vec<_>>(), ["fg", "bold"]);
    /// ```
    pub fn from_json(source: &str) -> Result<Self, DescriptorError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Loads a descriptor from a flat YAML mapping, keeping document order.
    pub fn from_yaml(source: &str) -> Result<Self, DescriptorError> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut descriptor = StyleDescriptor::new();
        for (key, value) in iter {
            let key: String = key.into();
            descriptor.set(&key, value);
        }
        descriptor
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DescriptorVisitor)
    }
}

struct DescriptorVisitor;

impl<'de> Visitor<'de> for DescriptorVisitor {
    type Value = StyleDescriptor;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of style attribute names to bool, string or number values")
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(StyleDescriptor::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut descriptor = StyleDescriptor::new();
        while let Some((key, value)) = access.next_entry::<String, StyleValue>()? {
            descriptor.set(&key, value);
        }
        Ok(descriptor)
    }
}
