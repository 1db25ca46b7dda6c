//! Configuration for format classification.
//!
//! This module provides the [`ClassifierConfig`] struct which names the output
//! fields and the record locations the main-format overrides look at. Loading
//! a configuration from disk is left to the host; the struct derives serde so
//! it can be embedded in any host configuration format.

use crate::error::{FormatError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default link-resolver pattern: an `http(s)` URL with an `sfx` path segment.
pub const DEFAULT_LINK_RESOLVER_PATTERN: &str = r"(?i)^\s*https?://\S+/sfx\b";

/// Configuration for [`FormatClassifier`](crate::FormatClassifier).
///
/// # Examples
///
/// ```
/// use marcfacet::ClassifierConfig;
///
/// let config = ClassifierConfig {
///     main_field_name: "format_main".into(),
///     physical_field_name: "format_physical".into(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    // === Output ===
    /// Output field receiving the main format labels.
    pub main_field_name: String,

    /// Output field receiving the physical format labels.
    pub physical_field_name: String,

    // === Journal override ===
    /// Data field carrying link-resolver URLs.
    pub link_resolver_tag: String,

    /// Subfield of [`link_resolver_tag`](Self::link_resolver_tag) holding the URL.
    pub link_resolver_subfield: char,

    /// Regular expression a link-resolver URL must match.
    pub link_resolver_pattern: String,

    /// Local note field marking brief vendor-supplied journal records.
    pub marcit_note_tag: String,

    /// Subfield of [`marcit_note_tag`](Self::marcit_note_tag) holding the note.
    pub marcit_note_subfield: char,

    // === Holdings ===
    /// Item type marking a database.
    pub database_item_type: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        ClassifierConfig {
            main_field_name: "format_main_ssim".to_string(),
            physical_field_name: "format_physical_ssim".to_string(),
            link_resolver_tag: "956".to_string(),
            link_resolver_subfield: 'u',
            link_resolver_pattern: DEFAULT_LINK_RESOLVER_PATTERN.to_string(),
            marcit_note_tag: "590".to_string(),
            marcit_note_subfield: 'a',
            database_item_type: "DATABASE".to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output field names.
    #[must_use]
    pub fn with_field_names(mut self, main: &str, physical: &str) -> Self {
        self.main_field_name = main.to_string();
        self.physical_field_name = physical.to_string();
        self
    }

    /// Set the link-resolver pattern.
    #[must_use]
    pub fn with_link_resolver_pattern(mut self, pattern: &str) -> Self {
        self.link_resolver_pattern = pattern.to_string();
        self
    }

    /// Check the configuration before use.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] for empty or clashing field
    /// names, tags that are not three characters, or an empty item type, and
    /// [`FormatError::Pattern`] when the link-resolver pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.main_field_name.trim().is_empty() || self.physical_field_name.trim().is_empty() {
            return Err(FormatError::InvalidConfig(
                "output field names must not be empty".to_string(),
            ));
        }
        if self.main_field_name == self.physical_field_name {
            return Err(FormatError::InvalidConfig(format!(
                "main and physical output fields share the name '{}'",
                self.main_field_name
            )));
        }
        for tag in [&self.link_resolver_tag, &self.marcit_note_tag] {
            if tag.chars().count() != 3 {
                return Err(FormatError::InvalidConfig(format!(
                    "field tag must be 3 characters, got '{tag}'"
                )));
            }
        }
        if self.database_item_type.trim().is_empty() {
            return Err(FormatError::InvalidConfig(
                "database item type must not be empty".to_string(),
            ));
        }
        self.compile_link_resolver_pattern()?;
        Ok(())
    }

    /// Compile [`link_resolver_pattern`](Self::link_resolver_pattern).
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Pattern`] when the pattern does not compile.
    pub fn compile_link_resolver_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&self.link_resolver_pattern)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClassifierConfig::default();
        assert_eq!(config.main_field_name, "format_main_ssim");
        assert_eq!(config.physical_field_name, "format_physical_ssim");
        assert_eq!(config.link_resolver_tag, "956");
        assert_eq!(config.marcit_note_tag, "590");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_pattern_matches_sfx_links() {
        let pattern = ClassifierConfig::default()
            .compile_link_resolver_pattern()
            .unwrap();
        assert!(pattern.is_match(" http://library.stanford.edu/sfx?stuff"));
        assert!(pattern.is_match("https://sfx.example.org/sfx"));
        assert!(!pattern.is_match("http://example.org/catalog"));
        assert!(!pattern.is_match("see http://library.stanford.edu/sfx"));
    }

    #[test]
    fn test_rejects_bad_values() {
        let empty = ClassifierConfig::new().with_field_names("", "physical");
        assert!(matches!(empty.validate(), Err(FormatError::InvalidConfig(_))));

        let clash = ClassifierConfig::new().with_field_names("formats", "formats");
        assert!(matches!(clash.validate(), Err(FormatError::InvalidConfig(_))));

        let tag = ClassifierConfig {
            marcit_note_tag: "59".to_string(),
            ..Default::default()
        };
        assert!(matches!(tag.validate(), Err(FormatError::InvalidConfig(_))));

        let pattern = ClassifierConfig::new().with_link_resolver_pattern("(unclosed");
        assert!(matches!(pattern.validate(), Err(FormatError::Pattern(_))));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{"main_field_name": "format"}"#).unwrap();
        assert_eq!(config.main_field_name, "format");
        assert_eq!(config.database_item_type, "DATABASE");
    }
}
