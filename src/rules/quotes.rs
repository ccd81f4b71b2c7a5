//! Typographic quote replacement.
//!
//! Straight double quotes arrive here in escaped form; a quoted span is
//! rewritten with a typographic opening/closing pair.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static QUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new("&quot;([^&]+)&quot;").unwrap());

#[derive(Clone, Default)]
pub struct TypographicQuoteRule;

impl MarkupRule for TypographicQuoteRule {
    fn name(&self) -> &'static str {
        "typographic-quotes"
    }

    fn description(&self) -> &'static str {
        "Straight-quoted spans get typographic quote marks"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        QUOTE_REGEX.replace_all(text, "\u{201E}$1\u{201C}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str) -> String {
        TypographicQuoteRule.apply(text, &mut PlaceholderTable::new()).into_owned()
    }

    #[test]
    fn quoted_span_gets_typographic_pair() {
        assert_eq!(apply("&quot;hello&quot;"), "„hello“");
    }

    #[test]
    fn lone_quote_is_left_alone() {
        assert_eq!(apply("a &quot;b"), "a &quot;b");
    }

    #[test]
    fn span_containing_an_entity_is_left_alone() {
        let text = "&quot;a &amp; b&quot;";
        assert_eq!(apply(text), text);
    }
}
