//! End-to-end checks across the re-exported helpers.

use std::cell::RefCell;
use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;
use tessel::{
    attr_to_binary, clean_tags, escape, find_file, parse_tags, sort_by_name, strip_tags,
    unescape, wrap_tags, Markup, Named, RenderContext, StyleDescriptor, StyleValue,
};

/// A context that records what it was asked to parse and packs flags as bits.
#[derive(Default)]
struct BitContext {
    seen: RefCell<Vec<String>>,
}

impl RenderContext for BitContext {
    type Parsed = String;

    fn parse_tags(&self, markup: &str) -> String {
        self.seen.borrow_mut().push(markup.to_string());
        strip_tags(markup)
    }

    fn attr_to_binary(&self, style: &StyleDescriptor) -> u32 {
        let mut bits = 0;
        if style.get("bold") == Some(&StyleValue::Flag(true)) {
            bits |= 1;
        }
        if style.get("underline") == Some(&StyleValue::Flag(true)) {
            bits |= 2;
        }
        bits
    }
}

#[test]
fn test_shared_descriptor_feeds_markup_and_compiler() {
    let ctx = BitContext::default();
    let style = StyleDescriptor::from_json(r#"{"underline": true, "bold": true}"#).unwrap();

    let markup = Markup::new().styled(&style, "title");
    assert_eq!(markup.render(&ctx), "title");
    assert_eq!(
        ctx.seen.borrow()[0],
        "{bold}{underline}title{/underline}{/bold}"
    );
    assert_eq!(attr_to_binary(&ctx, &style), 3);
    assert_eq!(parse_tags(&ctx, "{bold}x{/bold}"), "x");
}

#[test]
fn test_probe_result_displayed_as_markup() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("conf.d")).unwrap();
    fs::write(tmp.path().join("conf.d").join("{weird}.conf"), "").unwrap();

    let path = find_file(tmp.path(), "{weird}.conf").unwrap();
    let shown = path.display().to_string();
    let style = StyleDescriptor::new().add("fg", "brightgreen");
    let markup = Markup::new().text("found ").styled(&style, &shown);

    assert_eq!(markup.plain(), format!("found {}", shown));
    assert!(markup.as_str().contains("{open}weird{close}.conf"));
}

#[test]
fn test_sort_directory_entries_by_name() {
    struct Entry(String);
    impl Named for Entry {
        fn name(&self) -> &str {
            &self.0
        }
    }

    let mut entries: Vec<Entry> = ["src", ".git", "Cargo.toml", ".cargo"]
        .iter()
        .map(|s| Entry(s.to_string()))
        .collect();
    sort_by_name(&mut entries);

    let names: Vec<&str> = entries.iter().map(|e| e.0.as_str()).collect();
    assert_eq!(names, [".cargo", ".git", "Cargo.toml", "src"]);
}

fn descriptor() -> impl Strategy<Value = StyleDescriptor> {
    prop::collection::vec(("[a-z]{1,6}", any::<bool>(), "[a-z]{0,6}"), 0..6).prop_map(|attrs| {
        let mut style = StyleDescriptor::new();
        for (key, is_flag, color) in attrs {
            if is_flag || color.is_empty() {
                style.set(&key, is_flag);
            } else {
                style.set(&key, color);
            }
        }
        style
    })
}

proptest! {
    #[test]
    fn wrapped_plain_text_strips_back(style in descriptor(), text in "[^{}\x1b]{0,40}") {
        prop_assert_eq!(strip_tags(&wrap_tags(&style, &text)), text);
    }

    #[test]
    fn clean_tags_is_idempotent(text in ".{0,60}") {
        let once = clean_tags(&text);
        prop_assert_eq!(clean_tags(&once), once);
    }

    #[test]
    fn escape_round_trips(text in ".{0,60}") {
        prop_assert_eq!(unescape(&escape(&text)), text);
    }
}
