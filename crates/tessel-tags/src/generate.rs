//! Encoding style descriptors as nested brace tags.

use std::borrow::Cow;

use crate::escape::escape;
use crate::style::{StyleDescriptor, StyleValue};

/// Color prefixes that get a hyphen inserted after them.
const SHADE_PREFIXES: &[&str] = &["light", "bright"];

/// Opening and closing markup generated from a style descriptor.
///
/// Kept apart for callers that interleave the pieces themselves; use
/// [`TagPair::wrap`] to assemble them around a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPair {
    pub open: String,
    pub close: String,
}

impl TagPair {
    /// Returns `open + text + close`.
    pub fn wrap(&self, text: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + text.len() + self.close.len());
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
        out
    }

    /// Returns true if the descriptor produced no tags.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.close.is_empty()
    }
}

/// Hyphenates `light`/`bright` color prefixes.
///
/// `lightred` becomes `light-red` and `brightblue` becomes `bright-blue`.
/// Values already hyphenated are returned as-is. The remainder is not checked
/// against known color names, so arbitrary suffixes pass through.
///
/// ```rust
/// use tessel_tags::normalize_color;
///
/// assert_eq!(normalize_color("lightred"), "light-red");
/// assert_eq!(normalize_color("light-red"), "light-red");
/// assert_eq!(normalize_color("red"), "red");
/// ```
pub fn normalize_color(value: &str) -> Cow<'_, str> {
    let mut value = Cow::Borrowed(value);
    for prefix in SHADE_PREFIXES {
        if let Some(rest) = value.strip_prefix(prefix) {
            if !rest.starts_with('-') {
                value = Cow::Owned(format!("{}-{}", prefix, rest));
            }
        }
    }
    value
}

/// Builds the tag name for one attribute, or `None` if it emits nothing.
fn tag_name(key: &str, value: &StyleValue) -> Option<String> {
    match value {
        StyleValue::Color(color) => Some(format!("{}-{}", normalize_color(color), key)),
        StyleValue::Flag(true) => Some(key.to_string()),
        StyleValue::Flag(false) | StyleValue::Number(_) | StyleValue::Null => None,
    }
}

/// Generates the opening and closing tags for a style descriptor.
///
/// Keys are visited in insertion order. Each open tag is prepended and each
/// close tag appended, so the first key is innermost and the last key is
/// outermost: `{kn}…{k1}` / `{/k1}…{/kn}`.
///
/// # Example
///
/// ```rust
/// use tessel_tags::{generate_tags, StyleDescriptor};
///
/// let style = StyleDescriptor::new().add("bold", true).add("fg", "red");
/// let tags = generate_tags(&style);
///
/// assert_eq!(tags.open, "{red-fg}{bold}");
/// assert_eq!(tags.close, "{/bold}{/red-fg}");
/// ```
pub fn generate_tags(style: &StyleDescriptor) -> TagPair {
    let mut open = String::new();
    let mut close = String::new();

    for (key, value) in style.iter() {
        if let Some(name) = tag_name(key, value) {
            open.insert_str(0, &format!("{{{}}}", name));
            close.push_str(&format!("{{/{}}}", name));
        }
    }

    TagPair { open, close }
}

/// Wraps `text` in the tags generated from `style`.
///
/// The text is inserted verbatim; see [`styled`] for user-supplied text that
/// may contain braces. An empty descriptor returns `text` unchanged.
///
/// ```rust
/// use tessel_tags::{wrap_tags, StyleDescriptor};
///
/// let style = StyleDescriptor::new().add("underline", true).add("bg", "blue");
/// assert_eq!(
///     wrap_tags(&style, "hi"),
///     "{blue-bg}{underline}hi{/underline}{/blue-bg}"
/// );
/// ```
pub fn wrap_tags(style: &StyleDescriptor, text: &str) -> String {
    generate_tags(style).wrap(text)
}

/// Escapes `text` and wraps it in the tags generated from `style`.
pub fn styled(style: &StyleDescriptor, text: &str) -> String {
    wrap_tags(style, &escape(text))
}
