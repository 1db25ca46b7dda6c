//! Common test helpers shared across the integration test suite.

#![allow(dead_code)]

use marcfacet::{
    CallNumberScheme, ClassificationResult, Field, Format, FormatClassifier, HoldingsItem,
    Leader, PhysicalFormat, Record,
};
use std::collections::BTreeSet;

/// Parses a 24-character leader literal.
pub fn leader(value: &str) -> Leader {
    value.parse().expect("test leader parses")
}

/// Creates a record with the given leader and no fields.
pub fn record(leader_value: &str) -> Record {
    Record::new(leader(leader_value))
}

/// Creates a record with the given leader and one 007.
pub fn record_with_007(leader_value: &str, cf007: &str) -> Record {
    Record::builder(leader(leader_value))
        .control_field_str("007", cf007)
        .build()
}

/// Creates a record with the given leader and one 008.
pub fn record_with_008(leader_value: &str, cf008: &str) -> Record {
    Record::builder(leader(leader_value))
        .control_field_str("008", cf008)
        .build()
}

/// Builds a data field with blank indicators.
pub fn data_field(tag: &str, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag.to_string(), ' ', ' ');
    for &(code, value) in subfields {
        field.add_subfield_str(code, value);
    }
    field
}

/// The link-resolver field used in the catalog's SFX records.
pub fn sfx_link() -> Field {
    let mut field = Field::new("956".to_string(), '4', '0');
    field.add_subfield_str('u', " http://library.stanford.edu/sfx?stuff");
    field
}

/// A 40-byte 008 with every position blank except `position`.
pub fn fixed_field_with(position: usize, value: char) -> String {
    (0..40)
        .map(|i| if i == position { value } else { ' ' })
        .collect()
}

/// A physically held item with an LC call number.
pub fn at_library() -> HoldingsItem {
    HoldingsItem::builder("GREEN")
        .home_location("HAS-DIGIT")
        .scheme(CallNumberScheme::Lc)
        .call_number("F152 .A28")
        .build()
}

/// A physically held item with the given call number.
pub fn held_with_call_number(call_number: &str) -> HoldingsItem {
    HoldingsItem::builder("GREEN")
        .home_location("MEDIA-MTXT")
        .call_number(call_number)
        .build()
}

/// An online-only item.
pub fn online() -> HoldingsItem {
    HoldingsItem::builder("SUL")
        .home_location("INTERNET")
        .call_number("INTERNET RESOURCE")
        .online()
        .build()
}

/// An online-only item flagged as a database.
pub fn online_database() -> HoldingsItem {
    HoldingsItem::builder("SUL")
        .home_location("INTERNET")
        .call_number("INTERNET RESOURCE")
        .item_type("DATABASE")
        .online()
        .build()
}

/// Classifies with the default configuration.
pub fn classify(record: &Record, items: &[HoldingsItem]) -> ClassificationResult {
    FormatClassifier::with_defaults()
        .expect("default classifier builds")
        .classify(record, items)
}

/// Main format labels with the default configuration.
pub fn main_formats(record: &Record, items: &[HoldingsItem]) -> BTreeSet<Format> {
    classify(record, items).main
}

/// Physical format labels with the default configuration.
pub fn physical_formats(record: &Record, items: &[HoldingsItem]) -> BTreeSet<PhysicalFormat> {
    classify(record, items).physical
}
