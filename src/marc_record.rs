//! Read-only view of a MARC record.
//!
//! The classifiers only ever read records, so they are written against the
//! `MarcRecord` trait rather than the concrete [`Record`](crate::Record) type.
//! Any record representation that can answer these questions can be
//! classified.

use crate::leader::Leader;
use crate::record::Field;

/// Common read interface for MARC bibliographic records.
///
/// # Examples
///
/// ```
/// use marcfacet::{Leader, MarcRecord, Record};
///
/// fn record_type<T: MarcRecord + ?Sized>(record: &T) -> char {
///     record.leader().record_type
/// }
///
/// let record = Record::new(Leader::default());
/// assert_eq!(record_type(&record), 'a');
/// ```
pub trait MarcRecord {
    /// Get a reference to the record's leader (24-byte header).
    fn leader(&self) -> &Leader;

    /// Every occurrence of a control field (000-009), in record order.
    ///
    /// Returns an empty slice if the tag is absent.
    fn control_field_values(&self, tag: &str) -> &[String];

    /// Get all data fields with a given tag.
    ///
    /// Returns a slice of all fields matching the tag, or `None` if no fields exist.
    fn get_fields(&self, tag: &str) -> Option<&[Field]>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_trait_object_view() {
        let record = Record::builder(Leader::default())
            .control_field_str("006", "m     o  d        ")
            .control_field_str("006", "s")
            .field(
                Field::builder("300".to_string(), ' ', ' ')
                    .subfield_str('a', "1 videodisc")
                    .build(),
            )
            .build();
        let view: &dyn MarcRecord = &record;

        assert_eq!(view.leader().record_type, 'a');
        assert_eq!(view.control_field_values("006"), ["m     o  d        ", "s"]);
        assert!(view.control_field_values("007").is_empty());
        assert_eq!(view.get_fields("300").map(<[Field]>::len), Some(1));
        assert!(view.get_fields("338").is_none());
    }
}
