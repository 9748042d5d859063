//! # tessel-tags - brace-tag markup for terminal styling
//!
//! Styled terminal text is written as plain text with bracketed tags:
//! `{bold}`, `{red-fg}`, closed by `{/bold}`, `{/red-fg}`. This crate
//! produces and removes that markup; parsing it into attribute runs is the
//! job of a rendering context.
//!
//! ## Tags
//!
//! - [`escape`] / [`unescape`]: protect literal braces as `{open}` / `{close}`
//! - [`generate_tags`] / [`wrap_tags`] / [`styled`]: encode a [`StyleDescriptor`]
//! - [`strip_tags`] / [`clean_tags`]: remove tags and SGR escape sequences
//!
//! ```rust
//! use tessel_tags::{clean_tags, styled, StyleDescriptor};
//!
//! let style = StyleDescriptor::new().add("bold", true).add("fg", "lightred");
//! let markup = styled(&style, "Error {code}");
//!
//! assert_eq!(
//!     markup,
//!     "{light-red-fg}{bold}Error {open}code{close}{/bold}{/light-red-fg}"
//! );
//! assert_eq!(clean_tags(&markup), "Error code");
//! ```
//!
//! ## Other helpers
//!
//! - [`drop_unicode`]: degrade wide and combining characters
//! - [`sort_by_name`] / [`sort_by_index`]: list ordering used by widgets

mod escape;
mod generate;
mod sort;
mod strip;
mod unicode;

pub mod style;

pub use escape::{escape, unescape};
pub use generate::{generate_tags, normalize_color, styled, wrap_tags, TagPair};
pub use sort::{sort_by_index, sort_by_name, Indexed, Named};
pub use strip::{clean_tags, strip_tags};
pub use style::{DescriptorError, StyleDescriptor, StyleValue};
pub use unicode::drop_unicode;
