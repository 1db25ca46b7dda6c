//! Evidence accessor shared by both classifiers.
//!
//! Every positional read goes through [`ControlBytes::at`], which returns
//! `None` past the end of the field. A short or missing control field is
//! therefore "no evidence", never a fault.

use crate::holdings::{CallNumberScheme, HoldingsItem};
use crate::leader::{BibliographicLevel, TypeOfRecord};
use crate::marc_record::MarcRecord;
use crate::record::Field;

/// Bounds-checked positional view over one control field occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlBytes<'a> {
    bytes: &'a [u8],
}

impl<'a> ControlBytes<'a> {
    /// Wrap a control field value.
    #[must_use]
    pub fn new(value: &'a str) -> Self {
        ControlBytes {
            bytes: value.as_bytes(),
        }
    }

    /// Byte at `position` as a character, or `None` past the end.
    ///
    /// ```
    /// use marcfacet::ControlBytes;
    ///
    /// let field = ControlBytes::new("v   g");
    /// assert_eq!(field.at(4), Some('g'));
    /// assert_eq!(field.at(5), None);
    /// ```
    #[must_use]
    pub fn at(&self, position: usize) -> Option<char> {
        self.bytes.get(position).map(|&b| char::from(b))
    }
}

/// Read-only view over a record and its holdings items.
#[derive(Debug)]
pub struct Evidence<'a, R: MarcRecord + ?Sized> {
    record: &'a R,
    items: &'a [HoldingsItem],
}

// Manual impls: derive would require `R: Clone`.
impl<R: MarcRecord + ?Sized> Clone for Evidence<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: MarcRecord + ?Sized> Copy for Evidence<'_, R> {}

impl<'a, R: MarcRecord + ?Sized> Evidence<'a, R> {
    /// Build a view over `record` and its `items`.
    #[must_use]
    pub fn new(record: &'a R, items: &'a [HoldingsItem]) -> Self {
        Evidence { record, items }
    }

    /// The underlying record.
    #[must_use]
    pub fn record(&self) -> &'a R {
        self.record
    }

    /// Leader/06 type of record.
    #[must_use]
    pub fn record_type(&self) -> TypeOfRecord {
        self.record.leader().type_of_record()
    }

    /// Leader/07 bibliographic level.
    #[must_use]
    pub fn bibliographic_level(&self) -> BibliographicLevel {
        self.record.leader().bibliographic_level()
    }

    /// Every occurrence of a control field.
    pub fn controls(&self, tag: &str) -> impl Iterator<Item = ControlBytes<'a>> {
        self.record
            .control_field_values(tag)
            .iter()
            .map(|v| ControlBytes::new(v))
    }

    /// First occurrence of a control field.
    #[must_use]
    pub fn first_control(&self, tag: &str) -> Option<ControlBytes<'a>> {
        self.record
            .control_field_values(tag)
            .first()
            .map(|v| ControlBytes::new(v))
    }

    /// Data fields with the given tag; empty when absent.
    #[must_use]
    pub fn data_fields(&self, tag: &str) -> &'a [Field] {
        self.record.get_fields(tag).unwrap_or(&[])
    }

    /// Values of subfield `code` across every field with `tag`, in record order.
    pub fn subfield_values(&self, tag: &str, code: char) -> impl Iterator<Item = &'a str> {
        self.data_fields(tag)
            .iter()
            .flat_map(move |f| f.subfields_by_code(code))
    }

    /// Items that are not suppressed.
    pub fn active_items(&self) -> impl Iterator<Item = &'a HoldingsItem> {
        self.items.iter().filter(|item| !item.suppressed)
    }

    /// At least one active item is not online-only.
    #[must_use]
    pub fn has_physical_copy(&self) -> bool {
        self.active_items().any(HoldingsItem::is_physical)
    }

    /// At least one active item carries the given item type.
    #[must_use]
    pub fn has_item_type(&self, item_type: &str) -> bool {
        self.active_items().any(|item| item.has_item_type(item_type))
    }

    /// Alphanumeric-scheme call numbers of active items, skipping blanks.
    ///
    /// Classification call numbers (LC, Dewey, SUDOC) never name a medium.
    pub fn call_numbers(&self) -> impl Iterator<Item = &'a str> {
        self.active_items()
            .filter(|item| item.scheme == CallNumberScheme::Alphanum)
            .map(|item| item.call_number.as_str())
            .filter(|cn| !cn.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leader::Leader;
    use crate::record::Record;

    fn record() -> Record {
        Record::builder("01952cgm  2200457Ia 4500".parse::<Leader>().unwrap())
            .control_field_str("007", "g")
            .control_field_str("007", "vd cvaizq")
            .field(
                Field::builder("300".to_string(), ' ', ' ')
                    .subfield_str('a', "1 videodisc")
                    .subfield_str('b', "sd., col.")
                    .build(),
            )
            .field(
                Field::builder("300".to_string(), ' ', ' ')
                    .subfield_str('b', "MP4")
                    .build(),
            )
            .build()
    }

    #[test]
    fn test_control_bytes_guard() {
        let short = ControlBytes::new("g");
        assert_eq!(short.at(0), Some('g'));
        assert_eq!(short.at(1), None);
        assert_eq!(ControlBytes::new("").at(0), None);
    }

    #[test]
    fn test_evidence_accessors() {
        let record = record();
        let items = [
            HoldingsItem::builder("SUL").online().build(),
            HoldingsItem::builder("GREEN")
                .call_number("ZDVD 123")
                .suppressed(true)
                .build(),
        ];
        let evidence = Evidence::new(&record, &items);

        assert_eq!(evidence.record_type(), TypeOfRecord::ProjectedMedium);
        assert_eq!(evidence.bibliographic_level(), BibliographicLevel::Monograph);
        assert_eq!(evidence.controls("007").count(), 2);
        assert_eq!(evidence.first_control("007").and_then(|c| c.at(0)), Some('g'));
        assert_eq!(evidence.first_control("007").and_then(|c| c.at(1)), None);
        assert!(evidence.first_control("008").is_none());
        assert_eq!(
            evidence.subfield_values("300", 'b').collect::<Vec<_>>(),
            vec!["sd., col.", "MP4"]
        );
        assert!(evidence.data_fields("538").is_empty());
        assert!(!evidence.has_physical_copy());
        assert_eq!(evidence.call_numbers().count(), 0);
    }

    #[test]
    fn test_call_numbers_only_from_alphanumeric_scheme() {
        let record = record();
        let items = [
            HoldingsItem::builder("GREEN")
                .scheme(CallNumberScheme::Lc)
                .call_number("ZDVD 123")
                .build(),
            HoldingsItem::builder("GREEN")
                .scheme(CallNumberScheme::from_code("ALPHANUM"))
                .call_number("MFILM 17443")
                .build(),
            HoldingsItem::builder("GREEN").call_number("  ").build(),
        ];
        let evidence = Evidence::new(&record, &items);
        assert_eq!(evidence.call_numbers().collect::<Vec<_>>(), vec!["MFILM 17443"]);
    }

    #[test]
    fn test_item_type_ignores_suppressed() {
        let record = record();
        let items = [HoldingsItem::builder("SUL")
            .item_type("DATABASE")
            .suppressed(true)
            .build()];
        let evidence = Evidence::new(&record, &items);
        assert!(!evidence.has_item_type("DATABASE"));
    }
}
