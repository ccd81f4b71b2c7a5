//! Line-break conversion, the final expansion rule: every remaining
//! newline gets an explicit `<br>` inserted before it.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static NEWLINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

#[derive(Clone, Default)]
pub struct LineBreakRule;

impl MarkupRule for LineBreakRule {
    fn name(&self) -> &'static str {
        "line-break"
    }

    fn description(&self) -> &'static str {
        "Newlines become br elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        NEWLINE_REGEX.replace_all(text, "<br>$0")
    }
}
