//! Ordering helpers for lists of named or indexed items.

/// Items that can be ordered by display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Items that carry a stacking index.
pub trait Indexed {
    fn index(&self) -> i64;
}

/// Sort key for a name: the first lowercased character, or for names
/// starting with `.` the dot followed by the second character.
fn name_key(name: &str) -> (Option<char>, Option<char>) {
    let mut chars = name.chars().flat_map(char::to_lowercase);
    let first = chars.next();
    let second = if first == Some('.') { chars.next() } else { None };
    (first, second)
}

/// Stable-sorts items by the first letter of their name, case-insensitively.
///
/// Only the leading character takes part in the comparison; names sharing it
/// keep their input order. Dotfiles are ordered among themselves by their
/// second character.
///
/// ```rust
/// use tessel_tags::{sort_by_name, Named};
///
/// struct Entry(&'static str);
/// impl Named for Entry {
///     fn name(&self) -> &str { self.0 }
/// }
///
/// let mut entries = vec![Entry("beta"), Entry(".zsh"), Entry("Alpha"), Entry(".bash")];
/// sort_by_name(&mut entries);
/// let names: Vec<_> = entries.iter().map(|e| e.0).collect();
/// assert_eq!(names, [".bash", ".zsh", "Alpha", "beta"]);
/// ```
pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by_key(|item| name_key(item.name()));
}

/// Stable-sorts items by descending index.
pub fn sort_by_index<T: Indexed>(items: &mut [T]) {
    items.sort_by_key(|item| std::cmp::Reverse(item.index()));
}
