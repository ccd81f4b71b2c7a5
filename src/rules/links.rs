//! Explicit Markdown images and links.
//!
//! Both run before auto-linking, and both mint their generated markup
//! into the placeholder table: once an explicit link exists, no later
//! rule can re-wrap its URL or rewrite characters inside it.
//!
//! These rules see post-escaping text, so the captured URL and text are
//! already entity-escaped and safe to splice into a double-quoted
//! attribute.

use crate::placeholder::{PlaceholderTable, SpanKind};
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());
static LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

#[derive(Clone, Default)]
pub struct ImageRule;

impl MarkupRule for ImageRule {
    fn name(&self) -> &'static str {
        "image"
    }

    fn description(&self) -> &'static str {
        "![alt](url) becomes an img element"
    }

    fn apply<'t>(&self, text: &'t str, table: &mut PlaceholderTable) -> Cow<'t, str> {
        IMAGE_REGEX.replace_all(text, |caps: &regex::Captures| {
            let markup = format!("<img src=\"{}\" alt=\"{}\">", &caps[2], &caps[1]);
            // The alt text may itself contain earlier tokens; resolve them
            // now so the stage-5 pass stays single and non-recursive.
            let markup = table.restore(&markup).into_owned();
            table.mint(SpanKind::Link, markup)
        })
    }
}

#[derive(Clone, Default)]
pub struct LinkRule;

impl MarkupRule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn description(&self) -> &'static str {
        "[text](url) becomes an anchor element"
    }

    fn apply<'t>(&self, text: &'t str, table: &mut PlaceholderTable) -> Cow<'t, str> {
        LINK_REGEX.replace_all(text, |caps: &regex::Captures| {
            let markup = format!(
                "<a href=\"{}\" target=\"_blank\">{}</a>",
                &caps[2], &caps[1]
            );
            // Link text may contain earlier tokens (a code span or a
            // whitelisted tag); resolve them now so the stage-5 pass
            // stays single and non-recursive.
            let markup = table.restore(&markup).into_owned();
            table.mint(SpanKind::Link, markup)
        })
    }
}
