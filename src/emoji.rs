//! Emoji shortcode substitution, the first pipeline stage.
//!
//! Plain literal replacement in table order. Glyphs are not
//! HTML-significant, so this stage has no interaction with escaping.

use std::borrow::Cow;

/// Built-in shortcode table. Order matters: substitution walks the table
/// top to bottom, so an earlier entry wins over a later one that shares a
/// prefix.
pub const BUILTIN_EMOJI: &[(&str, &str)] = &[
    (":smile:", "😄"),
    (":laugh:", "😂"),
    (":wink:", "😉"),
    (":heart:", "❤️"),
    (":broken_heart:", "💔"),
    (":fire:", "🔥"),
    (":star:", "⭐"),
    (":check:", "✅"),
    (":cross:", "❌"),
    (":thumbs_up:", "👍"),
    (":thumbs_down:", "👎"),
    (":clap:", "👏"),
    (":party:", "🥳"),
    (":thinking:", "🤔"),
    (":sweat:", "😅"),
    (":cry:", "😢"),
    (":sleep:", "😴"),
    (":rocket:", "🚀"),
    (":zap:", "⚡"),
    (":warning:", "⚠️"),
    (":tada:", "🎉"),
    (":coffee:", "☕"),
    (":cake:", "🍰"),
    (":sun:", "☀️"),
    (":moon:", "🌙"),
    (":cloud:", "☁️"),
    (":rainbow:", "🌈"),
    (":flower:", "🌸"),
    (":dog:", "🐶"),
    (":cat:", "🐱"),
];

/// Ordered shortcode → glyph table.
///
/// Injected into the renderer rather than read from a global, so tests
/// can run with alternate tables.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiMap {
    entries: Vec<(String, String)>,
}

impl Default for EmojiMap {
    fn default() -> Self {
        Self {
            entries: BUILTIN_EMOJI
                .iter()
                .map(|&(code, glyph)| (code.to_string(), glyph.to_string()))
                .collect(),
        }
    }
}

impl EmojiMap {
    /// An empty table; no substitution will occur.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// Add or override a shortcode. An existing entry keeps its position
    /// in the table; a new one is appended.
    pub fn insert(&mut self, shortcode: &str, glyph: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(code, _)| code == shortcode) {
            entry.1 = glyph.to_string();
        } else {
            self.entries.push((shortcode.to_string(), glyph.to_string()));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every recognized shortcode with its glyph. Unrecognized
    /// shortcodes are left verbatim.
    pub fn substitute<'t>(&self, text: &'t str) -> Cow<'t, str> {
        // Shortcodes are always colon-delimited; skip the walk entirely
        // for the common emoji-free post.
        if !text.contains(':') {
            return Cow::Borrowed(text);
        }

        let mut out = Cow::Borrowed(text);
        for (code, glyph) in &self.entries {
            if out.contains(code.as_str()) {
                out = Cow::Owned(out.replace(code.as_str(), glyph));
            }
        }
        out
    }
}
