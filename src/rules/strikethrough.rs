//! Strikethrough: `~~text~~`.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static STRIKE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)~~(.+?)~~").unwrap());

#[derive(Clone, Default)]
pub struct StrikethroughRule;

impl MarkupRule for StrikethroughRule {
    fn name(&self) -> &'static str {
        "strikethrough"
    }

    fn description(&self) -> &'static str {
        "~~text~~ becomes a del element"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        STRIKE_REGEX.replace_all(text, "<del>$1</del>")
    }
}
