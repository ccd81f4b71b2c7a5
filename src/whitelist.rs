//! The closed vocabulary of HTML tags that may pass through to rendered
//! output as live markup. Anything outside this set is entity-escaped.

/// Default tag vocabulary. Structural containers, text-level semantics,
/// table parts, anchors, images, headings and details/summary.
pub const DEFAULT_TAGS: &[&str] = &[
    "center", "div", "span", "p", "br", "hr", "strong", "b", "em", "i", "u", "s", "del",
    "mark", "small", "big", "sub", "sup", "code", "pre", "blockquote",
    "ul", "ol", "li", "table", "thead", "tbody", "tr", "th", "td",
    "a", "img", "h1", "h2", "h3", "h4", "h5", "h6", "details", "summary",
];

/// Immutable set of tag names eligible for protected-span extraction.
///
/// Tag names are lowercased on construction; matching is case-insensitive
/// at the extraction site. Names must be ASCII alphanumeric — they are
/// spliced into a compiled pattern, so the constructor enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct WhitelistedTagSet {
    tags: Vec<String>,
}

impl Default for WhitelistedTagSet {
    fn default() -> Self {
        Self {
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl WhitelistedTagSet {
    /// An empty whitelist; every tag gets escaped.
    pub fn empty() -> Self {
        Self { tags: Vec::new() }
    }

    /// Build a whitelist from arbitrary tag names. Returns the first name
    /// that is empty or not ASCII alphanumeric, if any.
    pub fn from_names<I, S>(names: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::empty();
        for name in names {
            set.add(name.as_ref())?;
        }
        Ok(set)
    }

    /// Add one tag name, validating and lowercasing it. Duplicates are
    /// ignored.
    pub fn add(&mut self, name: &str) -> Result<(), String> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(name.to_string());
        }
        let name = name.to_ascii_lowercase();
        if !self.tags.contains(&name) {
            self.tags.push(name);
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.tags.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// The `tag1|tag2|...` alternation used by the extraction pattern.
    pub fn alternation(&self) -> String {
        self.tags.join("|")
    }
}
