//! Escaping literal braces so user text can sit inside markup.

const OPEN: &str = "{open}";
const CLOSE: &str = "{close}";

/// Escapes literal braces for embedding in tag markup.
///
/// Every `{` becomes `{open}` and every `}` becomes `{close}`, so the result
/// can never be mistaken for a tag boundary.
///
/// # Example
///
/// ```rust
/// use tessel_tags::escape;
///
/// assert_eq!(escape("{bold}"), "{open}bold{close}");
/// assert_eq!(escape(""), "");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => out.push_str(OPEN),
            '}' => out.push_str(CLOSE),
            _ => out.push(c),
        }
    }
    out
}

/// Reverses [`escape`].
///
/// Scans left to right, turning each `{open}` into `{` and each `{close}`
/// into `}`. Any other text, including real tags, is copied unchanged.
///
/// ```rust
/// use tessel_tags::{escape, unescape};
///
/// let text = "{open} is literal";
/// assert_eq!(unescape(&escape(text)), text);
/// ```
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(OPEN) {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix(CLOSE) {
            out.push('}');
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
