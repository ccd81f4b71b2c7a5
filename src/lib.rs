//! feedmark renders short, user-authored posts into sanitized HTML.
//!
//! Authors may mix a Markdown-like dialect (headings, emphasis, lists,
//! tables, blockquotes, code), literal HTML from a bounded whitelist,
//! bare URLs, hashtags, and emoji shortcodes. The pipeline guarantees
//! that nothing an author types becomes live markup unless it is a
//! whitelisted tag, and that pipeline-generated markup is never escaped
//! or expanded a second time.
//!
//! Five ordered stages, each consuming the whole output of the previous
//! one:
//!
//! 1. emoji shortcode substitution
//! 2. protected-span extraction (whitelisted tags and code spans are
//!    swapped for placeholder tokens)
//! 3. entity escaping of everything that remains
//! 4. ordered markup expansion ([`rules::all_rules`])
//! 5. placeholder restoration
//!
//! ```
//! use feedmark::{RenderOptions, render};
//!
//! let html = render("**hi** <script>x</script>", &RenderOptions::default());
//! assert_eq!(html, "<strong>hi</strong> &lt;script&gt;x&lt;/script&gt;");
//! ```

pub mod config;
pub mod emoji;
pub mod escape;
pub mod extract;
pub mod placeholder;
pub mod rule;
pub mod rules;
pub mod whitelist;

pub use config::{ConfigError, RenderConfig};
pub use emoji::EmojiMap;
pub use whitelist::WhitelistedTagSet;

use crate::escape::escape_html;
use crate::extract::ProtectedSpanExtractor;
use crate::placeholder::{MARKER, PlaceholderTable};
use crate::rule::MarkupRule;
use std::borrow::Cow;

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Fenced code blocks with a language tag get a language-classed
    /// `<code>` wrapper instead of the plain `<pre><code>` one.
    pub highlight: bool,
}

/// A configured rendering pipeline.
///
/// Holds only immutable compiled state (the extraction scanner, the rule
/// set, the emoji table), so one renderer may serve concurrent calls;
/// the placeholder table and its counter are created per invocation.
pub struct Renderer {
    options: RenderOptions,
    emoji: EmojiMap,
    extractor: ProtectedSpanExtractor,
    rules: Vec<Box<dyn MarkupRule>>,
}

impl Renderer {
    /// A renderer with the built-in emoji table and tag whitelist.
    pub fn new(options: RenderOptions) -> Self {
        Self::with_tables(options, EmojiMap::default(), WhitelistedTagSet::default())
    }

    /// A renderer with injected tables, for callers (and tests) that need
    /// something other than the defaults.
    pub fn with_tables(options: RenderOptions, emoji: EmojiMap, whitelist: WhitelistedTagSet) -> Self {
        Self {
            options,
            emoji,
            extractor: ProtectedSpanExtractor::new(&whitelist),
            rules: rules::all_rules(),
        }
    }

    /// Build a renderer from a loaded [`RenderConfig`].
    pub fn from_config(config: &RenderConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_tables(
            RenderOptions {
                highlight: config.highlight,
            },
            config.emoji_map()?,
            config.whitelist()?,
        ))
    }

    /// Render one post. Total over any Unicode input: malformed markup
    /// degrades to escaped literal text, never an error.
    pub fn render(&self, raw: &str) -> String {
        // The marker byte is reserved for placeholder tokens; authored
        // occurrences are dropped so a token can never be forged.
        let cleaned: Cow<'_, str> = if raw.contains(MARKER) {
            Cow::Owned(raw.replace(MARKER, ""))
        } else {
            Cow::Borrowed(raw)
        };

        let text = self.emoji.substitute(&cleaned);

        let mut table = PlaceholderTable::new();
        let text = self.extractor.extract(&text, &mut table, self.options.highlight);
        log::debug!("extracted {} protected spans", table.len());

        let mut text = escape_html(&text).into_owned();
        for rule in &self.rules {
            text = rule.apply(&text, &mut table).into_owned();
        }

        table.restore(&text).into_owned()
    }
}

/// Render one post with the built-in tables. Convenience wrapper around
/// [`Renderer`]; callers rendering many posts should build a `Renderer`
/// once and reuse it.
pub fn render(raw: &str, options: &RenderOptions) -> String {
    Renderer::new(*options).render(raw)
}
