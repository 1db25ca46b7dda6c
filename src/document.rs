//! Output document fields.
//!
//! Turns a [`ClassificationResult`] into the named multi-valued fields a
//! search index document expects. Values are canonical label strings,
//! de-duplicated, and a field with no values is left out entirely.

use crate::classifier::ClassificationResult;
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::format::{Format, PhysicalFormat};
use indexmap::IndexMap;

/// Named output fields, main format first.
pub type DocumentFields = IndexMap<String, Vec<String>>;

impl ClassificationResult {
    /// Output fields for this result.
    ///
    /// ```
    /// use marcfacet::{ClassificationResult, ClassifierConfig, Format};
    ///
    /// let result = ClassificationResult {
    ///     main: [Format::Book, Format::UpdatingLooseleaf].into(),
    ///     physical: Default::default(),
    /// };
    /// let fields = result.to_fields(&ClassifierConfig::default());
    /// assert_eq!(fields["format_main_ssim"], vec!["Book".to_string()]);
    /// assert!(!fields.contains_key("format_physical_ssim"));
    /// ```
    #[must_use]
    pub fn to_fields(&self, config: &ClassifierConfig) -> DocumentFields {
        let mut fields = DocumentFields::new();
        add_field(
            &mut fields,
            &config.main_field_name,
            self.main.iter().map(Format::as_str),
        );
        add_field(
            &mut fields,
            &config.physical_field_name,
            self.physical.iter().map(PhysicalFormat::as_str),
        );
        fields
    }

    /// Output fields rendered as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn to_json(&self, config: &ClassifierConfig) -> Result<String> {
        Ok(serde_json::to_string(&self.to_fields(config))?)
    }
}

fn add_field<'a, I>(fields: &mut DocumentFields, name: &str, values: I)
where
    I: Iterator<Item = &'a str>,
{
    let mut strings: Vec<String> = Vec::new();
    for value in values {
        if !strings.iter().any(|s| s == value) {
            strings.push(value.to_string());
        }
    }
    if !strings.is_empty() {
        fields.insert(name.to_string(), strings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_empty_result_has_no_fields() {
        let fields = ClassificationResult::default().to_fields(&ClassifierConfig::default());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_field_order_and_names() {
        let result = ClassificationResult {
            main: BTreeSet::from([Format::SoundRecording, Format::MusicRecording]),
            physical: BTreeSet::from([PhysicalFormat::Cd]),
        };
        let config = ClassifierConfig::new().with_field_names("format", "medium");
        let fields = result.to_fields(&config);

        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["format", "medium"]);
        assert_eq!(fields["medium"], vec!["CD".to_string()]);
        assert_eq!(fields["format"].len(), 2);
    }

    #[test]
    fn test_to_json() {
        let result = ClassificationResult {
            main: BTreeSet::from([Format::Video]),
            physical: BTreeSet::from([PhysicalFormat::Bluray]),
        };
        let json = result.to_json(&ClassifierConfig::default()).unwrap();
        assert_eq!(
            json,
            r#"{"format_main_ssim":["Video"],"format_physical_ssim":["Blu-ray"]}"#
        );
    }
}
