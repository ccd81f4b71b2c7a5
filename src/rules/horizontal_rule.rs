//! Horizontal rule: a line made of three or more repeated `-`, `_` or `*`.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static HR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(?:-{3,}|_{3,}|\*{3,})$").unwrap());

#[derive(Clone, Default)]
pub struct HorizontalRuleRule;

impl MarkupRule for HorizontalRuleRule {
    fn name(&self) -> &'static str {
        "horizontal-rule"
    }

    fn description(&self) -> &'static str {
        "A line of repeated -, _ or * becomes an hr element"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        HR_REGEX.replace_all(text, "<hr>")
    }
}
