//! HTML entity escaping for untrusted text.
//!
//! Matches the `ENT_QUOTES` alphabet: ampersand, both angle brackets and
//! both quote characters. Everything else passes through untouched, which
//! is what keeps placeholder tokens stable across this stage (their marker
//! byte and token body are outside the escaping alphabet).

use std::borrow::Cow;

const ESCAPED: [char; 5] = ['&', '<', '>', '"', '\''];

/// Escape the five HTML-significant characters in `text`.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(ESCAPED) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x" title='y'> & more"#),
            "&lt;a href=&quot;x&quot; title=&#039;y&#039;&gt; &amp; more"
        );
    }

    #[test]
    fn borrows_when_nothing_to_escape() {
        let text = "plain text, no markup";
        assert!(matches!(escape_html(text), Cow::Borrowed(_)));
    }

    #[test]
    fn ampersand_is_not_double_escaped_in_one_pass() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
    }

    #[test]
    fn unicode_passes_through() {
        assert_eq!(escape_html("héllo 世界 🚀"), "héllo 世界 🚀");
    }

    #[test]
    fn marker_byte_is_outside_the_escaping_alphabet() {
        let token = "\u{0}CODE0\u{0}";
        assert_eq!(escape_html(token), token);
    }
}
