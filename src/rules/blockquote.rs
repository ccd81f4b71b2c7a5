//! Blockquotes: line-leading `>` in its escaped entity form.
//!
//! This rule runs after entity escaping, so an authored `> quote` arrives
//! here as `&gt; quote`.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BLOCKQUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^&gt;\s+(.+)$").unwrap());

#[derive(Clone, Default)]
pub struct BlockquoteRule;

impl MarkupRule for BlockquoteRule {
    fn name(&self) -> &'static str {
        "blockquote"
    }

    fn description(&self) -> &'static str {
        "Line-leading > becomes a blockquote element"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        BLOCKQUOTE_REGEX.replace_all(text, "<blockquote>$1</blockquote>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str) -> String {
        BlockquoteRule.apply(text, &mut PlaceholderTable::new()).into_owned()
    }

    #[test]
    fn escaped_marker_becomes_blockquote() {
        assert_eq!(apply("&gt; wise words"), "<blockquote>wise words</blockquote>");
    }

    #[test]
    fn mid_line_marker_is_ignored() {
        assert_eq!(apply("a &gt; b"), "a &gt; b");
    }

    #[test]
    fn marker_without_space_is_ignored() {
        assert_eq!(apply("&gt;x"), "&gt;x");
    }

    #[test]
    fn each_line_quoted_separately() {
        assert_eq!(
            apply("&gt; a\n&gt; b"),
            "<blockquote>a</blockquote>\n<blockquote>b</blockquote>"
        );
    }
}
