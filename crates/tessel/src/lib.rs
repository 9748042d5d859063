//! # tessel - markup and filesystem helpers for terminal UIs
//!
//! `tessel` gathers the small pieces a terminal rendering library leans on:
//!
//! - **Tag markup** ([`tessel_tags`]): styling embedded in text as `{bold}`,
//!   `{red-fg}` and friends, with escaping, generation and stripping
//! - **File probe** ([`tessel_probe`]): find a file by name with a
//!   depth-first search that ignores symlinks and virtual filesystems
//! - **Rendering seam**: the [`RenderContext`] trait through which a
//!   rendering engine parses markup and compiles attributes, and the
//!   [`Markup`] builder that produces input for it
//!
//! ## Quick Start
//!
//! ```rust
//! use tessel::{clean_tags, Markup, StyleDescriptor};
//!
//! let warn = StyleDescriptor::new().add("fg", "lightyellow").add("bold", true);
//! let line = Markup::new().styled(&warn, "warning:").text(" disk {90%} full");
//!
//! assert_eq!(
//!     line.as_str(),
//!     "{bold}{light-yellow-fg}warning:{/light-yellow-fg}{/bold} disk {open}90%{close} full"
//! );
//! assert_eq!(clean_tags(line.as_str()), "warning: disk 90% full");
//! ```

mod context;
mod markup;

pub use context::{attr_to_binary, parse_tags, RenderContext};
pub use markup::Markup;

pub use tessel_probe::{find_file, EntryKind, FileProbe, FileSystem, OsFileSystem, VIRTUAL_ROOTS};
pub use tessel_tags::{
    clean_tags, drop_unicode, escape, generate_tags, normalize_color, sort_by_index,
    sort_by_name, strip_tags, styled, unescape, wrap_tags, DescriptorError, Indexed, Named,
    StyleDescriptor, StyleValue, TagPair,
};

// Re-export the leaf crates for users who want their full module paths.
pub use tessel_probe;
pub use tessel_tags;
