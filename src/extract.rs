//! Protected-span extraction, the second pipeline stage.
//!
//! One left-to-right scan over the raw text pulls out the two kinds of
//! protected fragments — whitelisted HTML tags and code spans — and swaps
//! each for a placeholder token. A single combined pattern (fenced code |
//! inline code | tag) is what guarantees a backtick inside an extracted
//! tag, or a tag inside an extracted code span, is never tokenized twice.

use crate::escape::escape_html;
use crate::placeholder::{PlaceholderTable, SpanKind};
use crate::whitelist::WhitelistedTagSet;
use regex::Regex;

/// Compiled extraction scanner for one whitelist.
#[derive(Debug)]
pub struct ProtectedSpanExtractor {
    pattern: Regex,
}

impl ProtectedSpanExtractor {
    /// Compile the combined scan pattern for `whitelist`.
    ///
    /// Capture groups: 1 = fence language, 2 = fenced body, 3 = inline
    /// code body; a match with none of those is a whitelisted tag.
    pub fn new(whitelist: &WhitelistedTagSet) -> Self {
        let mut pattern = String::from(r"(?s)```(\w*)\n(.*?)\n```|`([^`]+)`");
        if !whitelist.is_empty() {
            // Tag names are ASCII alphanumeric by construction, so they
            // can be spliced into the pattern directly.
            pattern.push_str(&format!(
                r"|</?(?i:{})(?:\s[^>]*)?\s*/?>",
                whitelist.alternation()
            ));
        }
        Self {
            pattern: Regex::new(&pattern).expect("extraction pattern is valid by construction"),
        }
    }

    /// Replace every protected fragment in `text` with a freshly minted
    /// token, recording the mapping in `table`.
    ///
    /// Code spans are escaped and wrapped here, so their content is inert
    /// for the rest of the pipeline. With `highlight` set and a language
    /// tag present, fenced blocks get a language-classed wrapper.
    pub fn extract(&self, text: &str, table: &mut PlaceholderTable, highlight: bool) -> String {
        let out = self.pattern.replace_all(text, |caps: &regex::Captures| {
            if let Some(body) = caps.get(2) {
                let lang = caps.get(1).map_or("", |m| m.as_str());
                let code = escape_html(body.as_str());
                let rendered = if highlight && !lang.is_empty() {
                    format!("<code class=\"{lang}\">{code}</code>")
                } else {
                    format!("<pre><code>{code}</code></pre>")
                };
                table.mint(SpanKind::Code, rendered)
            } else if let Some(body) = caps.get(3) {
                let rendered = format!("<code>{}</code>", escape_html(body.as_str()));
                table.mint(SpanKind::Code, rendered)
            } else {
                table.mint(SpanKind::Tag, caps[0].to_string())
            }
        });
        out.into_owned()
    }
}
