//! Incremental construction of safe markup.

use std::fmt;

use tessel_tags::{escape, strip_tags, styled, StyleDescriptor};

/// Escape sequences and the literal brace each one stands for.
const ESCAPES: [(&str, char); 2] = [("{open}", '{'), ("{close}", '}')];

use crate::context::RenderContext;

/// Builds brace-tag markup piece by piece.
///
/// Plain and styled text is escaped on the way in, so user content can
/// never open or close a tag. A tag-free copy of the text is kept alongside
/// for width calculations and logging.
///
/// # Example
///
/// ```rust
/// use tessel::{Markup, StyleDescriptor};
///
/// let bold = StyleDescriptor::new().add("bold", true);
/// let markup = Markup::new()
///     .text("Saved ")
///     .styled(&bold, "{draft}")
///     .text(".");
///
/// assert_eq!(markup.as_str(), "Saved {bold}{open}draft{close}{/bold}.");
/// assert_eq!(markup.plain(), "Saved {draft}.");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    markup: String,
    plain: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends unstyled text, escaping any braces.
    pub fn text(mut self, text: &str) -> Self {
        self.markup.push_str(&escape(text));
        self.plain.push_str(text);
        self
    }

    /// Appends text wrapped in the tags generated from `style`.
    pub fn styled(mut self, style: &StyleDescriptor, text: &str) -> Self {
        self.markup.push_str(&styled(style, text));
        self.plain.push_str(text);
        self
    }

    /// Appends markup that is already well formed. Its plain form drops
    /// the tags and turns `{open}` / `{close}` back into literal braces.
    pub fn raw(mut self, markup: &str) -> Self {
        self.markup.push_str(markup);
        self.plain.push_str(&plain_text(markup));
        self
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    /// The text without any tags or escapes.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }

    pub fn into_string(self) -> String {
        self.markup
    }

    /// Hands the markup to a rendering context for parsing.
    pub fn render<C: RenderContext + ?Sized>(&self, ctx: &C) -> C::Parsed {
        ctx.parse_tags(&self.markup)
    }
}

/// Strips the tags between escape sequences and unescapes the sequences.
fn plain_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    loop {
        let next = ESCAPES
            .iter()
            .filter_map(|&(seq, brace)| rest.find(seq).map(|pos| (pos, seq, brace)))
            .min_by_key(|&(pos, _, _)| pos);

        match next {
            Some((pos, seq, brace)) => {
                out.push_str(&strip_tags(&rest[..pos]));
                out.push(brace);
                rest = &rest[pos + seq.len()..];
            }
            None => {
                out.push_str(&strip_tags(rest));
                return out;
            }
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.markup)
    }
}

impl From<Markup> for String {
    fn from(markup: Markup) -> Self {
        markup.into_string()
    }
}
