//! Block headings: 1–6 leading `#` at line start.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static HEADING_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").unwrap());

#[derive(Clone, Default)]
pub struct HeadingRule;

impl MarkupRule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn description(&self) -> &'static str {
        "Line-leading # markers become heading elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        HEADING_REGEX.replace_all(text, |caps: &regex::Captures| {
            let level = caps[1].len();
            format!("<h{level}>{}</h{level}>", &caps[2])
        })
    }
}
