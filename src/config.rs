//! Renderer configuration.
//!
//! A `RenderConfig` can be deserialized from a TOML file and turned into
//! the immutable tables the renderer is built from. The pipeline itself
//! is total and has no error taxonomy; configuration loading is the one
//! place errors can occur.

use crate::emoji::EmojiMap;
use crate::whitelist::WhitelistedTagSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid whitelist tag name {0:?}: tag names must be ASCII alphanumeric")]
    InvalidTag(String),
    #[error("invalid emoji shortcode {0:?}: shortcodes are colon-delimited, like \":smile:\"")]
    InvalidShortcode(String),
}

/// Configuration loaded from `feedmark.toml`.
///
/// ```toml
/// highlight = true
/// extra-tags = ["kbd"]
///
/// [emoji]
/// ":wave:" = "👋"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RenderConfig {
    /// Enables language-classed code wrappers for fenced blocks that
    /// carry a language tag.
    #[serde(default)]
    pub highlight: bool,

    /// Extra or overriding emoji shortcodes, merged over the built-in
    /// table.
    #[serde(default)]
    pub emoji: BTreeMap<String, String>,

    /// Tag names added to the default whitelist.
    #[serde(default)]
    pub extra_tags: Vec<String>,
}

impl RenderConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// The built-in emoji table with this config's entries merged in.
    pub fn emoji_map(&self) -> Result<EmojiMap, ConfigError> {
        let mut map = EmojiMap::default();
        for (code, glyph) in &self.emoji {
            if !is_valid_shortcode(code) {
                return Err(ConfigError::InvalidShortcode(code.clone()));
            }
            map.insert(code, glyph);
        }
        Ok(map)
    }

    /// The default whitelist with this config's extra tags added.
    pub fn whitelist(&self) -> Result<WhitelistedTagSet, ConfigError> {
        let mut set = WhitelistedTagSet::default();
        for tag in &self.extra_tags {
            set.add(tag).map_err(ConfigError::InvalidTag)?;
        }
        Ok(set)
    }
}

fn is_valid_shortcode(code: &str) -> bool {
    code.len() > 2
        && code.starts_with(':')
        && code.ends_with(':')
        && code[1..code.len() - 1]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_conservative() {
        let config = RenderConfig::default();
        assert!(!config.highlight);
        assert!(config.emoji.is_empty());
        assert!(config.extra_tags.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let config = RenderConfig::from_toml_str(
            r#"
            highlight = true
            extra-tags = ["kbd", "abbr"]

            [emoji]
            ":wave:" = "👋"
            "#,
        )
        .unwrap();
        assert!(config.highlight);
        assert_eq!(config.extra_tags, ["kbd", "abbr"]);
        assert_eq!(config.emoji.get(":wave:").map(String::as_str), Some("👋"));
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = RenderConfig::from_toml_str("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(RenderConfig::from_toml_str("hilite = true").is_err());
    }

    #[test]
    fn whitelist_merges_extra_tags() {
        let config = RenderConfig::from_toml_str(r#"extra-tags = ["kbd"]"#).unwrap();
        let set = config.whitelist().unwrap();
        assert!(set.contains("kbd"));
        assert!(set.contains("div"));
    }

    #[test]
    fn invalid_extra_tag_is_an_error() {
        let config = RenderConfig::from_toml_str(r#"extra-tags = ["k bd"]"#).unwrap();
        assert!(matches!(config.whitelist(), Err(ConfigError::InvalidTag(_))));
    }

    #[test]
    fn emoji_entries_are_merged_over_the_builtin_table() {
        let config = RenderConfig::from_toml_str(
            "[emoji]\n\":wave:\" = \"👋\"\n\":cat:\" = \"😺\"\n",
        )
        .unwrap();
        let map = config.emoji_map().unwrap();
        assert_eq!(map.substitute(":wave: :cat:"), "👋 😺");
    }

    #[test]
    fn malformed_shortcode_is_an_error() {
        let config = RenderConfig::from_toml_str("[emoji]\n\"wave\" = \"👋\"\n").unwrap();
        assert!(matches!(config.emoji_map(), Err(ConfigError::InvalidShortcode(_))));
    }
}
