//! The rendering-context seam.
//!
//! Parsing markup into attribute runs and compiling style descriptors into
//! packed cell attributes both belong to the rendering engine. Code that
//! needs them takes a [`RenderContext`] explicitly instead of looking one up
//! globally.

use tessel_tags::StyleDescriptor;

/// Capabilities supplied by a rendering engine.
pub trait RenderContext {
    /// The engine's parsed form of markup, e.g. a list of attribute runs.
    type Parsed;

    /// Parses brace-tag markup as produced by [`tessel_tags::wrap_tags`].
    fn parse_tags(&self, markup: &str) -> Self::Parsed;

    /// Compiles a style descriptor into the packed attribute of one cell.
    fn attr_to_binary(&self, style: &StyleDescriptor) -> u32;
}

/// Parses `markup` with the given context.
pub fn parse_tags<C: RenderContext + ?Sized>(ctx: &C, markup: &str) -> C::Parsed {
    ctx.parse_tags(markup)
}

/// Compiles `style` with the given context.
pub fn attr_to_binary<C: RenderContext + ?Sized>(ctx: &C, style: &StyleDescriptor) -> u32 {
    ctx.attr_to_binary(style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        parsed: RefCell<Vec<String>>,
    }

    impl RenderContext for Recorder {
        type Parsed = usize;

        fn parse_tags(&self, markup: &str) -> usize {
            self.parsed.borrow_mut().push(markup.to_string());
            markup.len()
        }

        fn attr_to_binary(&self, style: &StyleDescriptor) -> u32 {
            style.iter().filter(|(_, v)| v.is_active()).count() as u32
        }
    }

    #[test]
    fn test_parse_tags_delegates() {
        let ctx = Recorder::default();
        assert_eq!(parse_tags(&ctx, "{bold}x{/bold}"), 14);
        assert_eq!(*ctx.parsed.borrow(), ["{bold}x{/bold}"]);
    }

    #[test]
    fn test_attr_to_binary_delegates() {
        let ctx = Recorder::default();
        let style = StyleDescriptor::new()
            .add("bold", true)
            .add("fg", "red")
            .add("blink", false);
        assert_eq!(attr_to_binary(&ctx, &style), 2);
    }
}
