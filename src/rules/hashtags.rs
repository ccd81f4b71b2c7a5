//! Hashtag annotation: `#token` wrapped in a tag-marker span.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(#[A-Za-z0-9_-]+)([\s&]|$)").unwrap());

#[derive(Clone, Default)]
pub struct HashtagRule;

impl MarkupRule for HashtagRule {
    fn name(&self) -> &'static str {
        "hashtag"
    }

    fn description(&self) -> &'static str {
        "#tokens are wrapped in a tag span"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        HASHTAG_REGEX.replace_all(text, "<span class=\"tag\">$1</span>$2")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str) -> String {
        HashtagRule.apply(text, &mut PlaceholderTable::new()).into_owned()
    }

    #[test]
    fn hashtag_followed_by_space() {
        assert_eq!(
            apply("see #topic now"),
            "see <span class=\"tag\">#topic</span> now"
        );
    }

    #[test]
    fn hashtag_at_end_of_text() {
        assert_eq!(apply("see #topic"), "see <span class=\"tag\">#topic</span>");
    }

    #[test]
    fn hyphen_and_underscore_belong_to_the_token() {
        assert_eq!(
            apply("#multi-word_tag"),
            "<span class=\"tag\">#multi-word_tag</span>"
        );
    }

    #[test]
    fn hashtag_before_entity_boundary() {
        assert_eq!(
            apply("#a&amp;b"),
            "<span class=\"tag\">#a</span>&amp;b"
        );
    }

    #[test]
    fn bare_hash_is_not_a_tag() {
        assert_eq!(apply("# and text"), "# and text");
    }

    #[test]
    fn punctuation_ends_nothing() {
        // A token must be followed by whitespace, an entity or the end of
        // text; "#tag." does not qualify.
        assert_eq!(apply("#tag."), "#tag.");
    }
}
