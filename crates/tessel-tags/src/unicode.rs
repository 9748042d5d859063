//! Degrading text for terminals without full Unicode support.

use unicode_width::UnicodeWidthChar;

/// Replaces characters that a narrow terminal cannot lay out reliably.
///
/// - double-width characters (CJK, most emoji) become `??`, keeping the
///   column count the same
/// - zero-width characters such as combining marks are removed
/// - any other character outside the Basic Multilingual Plane becomes `?`
///
/// Control characters and ordinary single-width text are left alone.
///
/// ```rust
/// use tessel_tags::drop_unicode;
///
/// assert_eq!(drop_unicode("a日b"), "a??b");
/// assert_eq!(drop_unicode("e\u{301}"), "e");
/// ```
pub fn drop_unicode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c.width() {
            Some(2) => out.push_str("??"),
            Some(0) if !c.is_control() => {}
            _ if u32::from(c) > 0xFFFF => out.push('?'),
            _ => out.push(c),
        }
    }
    out
}
