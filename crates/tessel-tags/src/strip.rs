//! Removing tags and SGR escapes from text.
//!
//! Removal is pattern based. Nesting and balance are not checked, so
//! malformed or already-stripped text is handled the same way.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{/?[A-Za-z0-9_,;!#-]*\}").expect("tag pattern is valid"));

static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is valid"));

/// Removes one layer of tags, then SGR sequences.
fn strip_once(text: &str) -> Cow<'_, str> {
    match TAG_PATTERN.replace_all(text, "") {
        Cow::Borrowed(untagged) => SGR_PATTERN.replace_all(untagged, ""),
        Cow::Owned(untagged) => Cow::Owned(SGR_PATTERN.replace_all(&untagged, "").into_owned()),
    }
}

/// Removes every tag-shaped substring and every SGR escape sequence.
///
/// Tags are `{name}` or `{/name}` with `name` drawn from
/// `[A-Za-z0-9_,;!#-]` (possibly empty). SGR sequences are `ESC [`, digits
/// and semicolons, then `m`. Removal repeats until nothing more matches, so
/// the result is always free of both and stripping twice changes nothing.
///
/// # Example
///
/// ```rust
/// use tessel_tags::strip_tags;
///
/// assert_eq!(strip_tags("{bold}hi{/bold}"), "hi");
/// assert_eq!(strip_tags("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(strip_tags("{/unbalanced}x{"), "x{");
/// ```
pub fn strip_tags(text: &str) -> String {
    let mut current = match strip_once(text) {
        Cow::Borrowed(_) => return text.to_string(),
        Cow::Owned(stripped) => stripped,
    };

    loop {
        match strip_once(&current) {
            Cow::Borrowed(_) => return current,
            Cow::Owned(stripped) => current = stripped,
        }
    }
}

/// Strips tags and SGR sequences, then trims surrounding whitespace.
///
/// ```rust
/// use tessel_tags::clean_tags;
///
/// assert_eq!(clean_tags("  {red-fg}alert{/red-fg}\n"), "alert");
/// ```
pub fn clean_tags(text: &str) -> String {
    strip_tags(text).trim().to_string()
}
