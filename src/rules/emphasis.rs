//! Bold and italic emphasis.
//!
//! Bold runs first so a single-marker italic never consumes half of a
//! double-marker bold run. Italic spans must not contain the placeholder
//! marker byte, which keeps emphasis from straddling a protected span.

use crate::placeholder::PlaceholderTable;
use crate::rule::MarkupRule;
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static BOLD_STARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)__(.+?)__").unwrap());
static ITALIC_UNDERSCORE: LazyLock<Regex> = LazyLock::new(|| Regex::new("_([^_\u{0}]+)_").unwrap());
static ITALIC_STAR: LazyLock<Regex> = LazyLock::new(|| Regex::new("\\*([^*\n\u{0}]+)\\*").unwrap());

#[derive(Clone, Default)]
pub struct BoldRule;

impl MarkupRule for BoldRule {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn description(&self) -> &'static str {
        "**text** and __text__ become strong elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        match BOLD_STARS.replace_all(text, "<strong>$1</strong>") {
            Cow::Borrowed(t) => BOLD_UNDERSCORES.replace_all(t, "<strong>$1</strong>"),
            Cow::Owned(t) => Cow::Owned(BOLD_UNDERSCORES.replace_all(&t, "<strong>$1</strong>").into_owned()),
        }
    }
}

#[derive(Clone, Default)]
pub struct ItalicRule;

impl MarkupRule for ItalicRule {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn description(&self) -> &'static str {
        "*text* and _text_ become em elements"
    }

    fn apply<'t>(&self, text: &'t str, _table: &mut PlaceholderTable) -> Cow<'t, str> {
        match ITALIC_UNDERSCORE.replace_all(text, "<em>$1</em>") {
            Cow::Borrowed(t) => ITALIC_STAR.replace_all(t, "<em>$1</em>"),
            Cow::Owned(t) => Cow::Owned(ITALIC_STAR.replace_all(&t, "<em>$1</em>").into_owned()),
        }
    }
}
