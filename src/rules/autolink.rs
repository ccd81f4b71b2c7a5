//! Auto-linking of bare URLs.
//!
//! Runs after the explicit link rule, whose output is already tucked away
//! in the placeholder table, so a URL matched here is genuinely bare. The
//! negative lookbehind (fancy-regex) additionally skips URLs sitting in
//! escaped attribute text.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use fancy_regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static AUTOLINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(?<!href=&quot;|src=&quot;)(https?://[^\\s&<\u{0}]+)").unwrap()
});

#[derive(Clone, Default)]
pub struct AutoLinkRule;

impl MarkupRule for AutoLinkRule {
    fn name(&self) -> &'static str {
        "autolink"
    }

    fn description(&self) -> &'static str {
        "Bare http(s) URLs become anchor elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        AUTOLINK_REGEX.replace_all(text, |caps: &fancy_regex::Captures| {
            let url = &caps[1];
            format!("<a href=\"{url}\" target=\"_blank\">{url}</a>")
        })
    }
}
