//! Values carried by a style descriptor.

use serde::{Deserialize, Serialize};

/// The value of one style attribute.
///
/// Only `Flag(true)` and `Color(_)` produce tags. `Flag(false)`, numbers and
/// nulls are accepted so documents written for attribute compilers load
/// cleanly, but they contribute nothing to generated markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A standalone attribute such as `bold` or `underline`.
    Flag(bool),
    /// A numeric value; inert for markup purposes.
    Number(f64),
    /// A color family combined with the attribute name, e.g. `red` + `fg`.
    Color(String),
    /// An explicit null (`null` in JSON, `~` in YAML); inert.
    Null,
}

impl StyleValue {
    /// Returns true if this value would emit a tag.
    pub fn is_active(&self) -> bool {
        matches!(self, StyleValue::Flag(true) | StyleValue::Color(_))
    }

    /// Returns the color family, if this is a color value.
    pub fn as_color(&self) -> Option<&str> {
        match self {
            StyleValue::Color(color) => Some(color),
            _ => None,
        }
    }
}

impl From<bool> for StyleValue {
    fn from(flag: bool) -> Self {
        StyleValue::Flag(flag)
    }
}

impl From<&str> for StyleValue {
    fn from(color: &str) -> Self {
        StyleValue::Color(color.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(color: String) -> Self {
        StyleValue::Color(color)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Number(n as f64)
    }
}
