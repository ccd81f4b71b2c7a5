//! Per-invocation table of protected spans.
//!
//! Protected fragments (whitelisted HTML, rendered code spans, generated
//! link markup) are swapped out for opaque tokens before escaping and
//! markup expansion, then swapped back in a single restoration pass at the
//! end of the pipeline.
//!
//! Tokens look like `\u{0}CODE3\u{0}`: a reserved marker byte on both
//! ends, a kind label, and a counter that is monotonic across all kinds
//! within one invocation. The double delimiter guarantees no token is a
//! substring of another, and the marker byte is stripped from raw input at
//! the pipeline entry, so a token can never be forged by authored text.

use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Reserved marker byte delimiting placeholder tokens.
pub const MARKER: char = '\u{0}';

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\u{0}(?:TAG|CODE|LINK)[0-9]+\u{0}").unwrap());

/// What kind of fragment a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// A whitelisted HTML tag, kept verbatim.
    Tag,
    /// A code span, already escaped and wrapped at extraction time.
    Code,
    /// Link/image markup generated by the expansion rules.
    Link,
}

impl SpanKind {
    fn label(self) -> &'static str {
        match self {
            SpanKind::Tag => "TAG",
            SpanKind::Code => "CODE",
            SpanKind::Link => "LINK",
        }
    }
}

/// Ordered token → fragment mapping, local to one render call.
#[derive(Debug, Default)]
pub struct PlaceholderTable {
    fragments: HashMap<String, String>,
    counter: usize,
}

impl PlaceholderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `fragment` and return the freshly minted token standing in
    /// for it. The counter is shared across kinds, so tokens are unique
    /// within the invocation.
    pub fn mint(&mut self, kind: SpanKind, fragment: String) -> String {
        let token = format!("{MARKER}{}{}{MARKER}", kind.label(), self.counter);
        self.counter += 1;
        self.fragments.insert(token.clone(), fragment);
        token
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Substitute every token in `text` with its recorded fragment.
    ///
    /// A single indexed pass: a fragment that happens to contain
    /// token-shaped text is never re-expanded. A token with no table entry
    /// is a defect; it is logged and dropped so the marker byte cannot
    /// reach the output.
    pub fn restore<'t>(&self, text: &'t str) -> Cow<'t, str> {
        TOKEN_REGEX.replace_all(text, |caps: &regex::Captures| {
            let token = &caps[0];
            match self.fragments.get(token) {
                Some(fragment) => fragment.clone(),
                None => {
                    log::error!("unknown placeholder token during restoration");
                    String::new()
                }
            }
        })
    }
}
