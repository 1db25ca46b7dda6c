//! Priority resolution between evidence sources.
//!
//! Stateless helpers used by both classifiers:
//! - [`first_match`] picks the first present candidate from an ordered list
//! - [`FamilyResolver`] keeps, per physical family, only the labels of the
//!   highest-priority source that produced any
//! - [`suppress_if_present`] drops a fallback label once something more
//!   specific is in the set

use crate::format::{PhysicalFamily, PhysicalFormat};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::trace;

/// Where a piece of evidence came from, in descending priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EvidenceSource {
    /// Fixed-length data elements (008)
    FixedField,
    /// Additional material characteristics (006)
    AdditionalCharacteristics,
    /// Holdings item call number
    CallNumber,
    /// System details note (538)
    Note,
    /// Physical description subfields (300$b, 347$b)
    DescriptionSubfield,
    /// Physical description fixed field (007)
    PhysicalDescription,
    /// Free-text physical description (300, 338)
    DescriptionText,
}

impl fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FixedField => "008",
            Self::AdditionalCharacteristics => "006",
            Self::CallNumber => "call number",
            Self::Note => "538",
            Self::DescriptionSubfield => "300/347 subfield",
            Self::PhysicalDescription => "007",
            Self::DescriptionText => "300/338 text",
        };
        f.write_str(name)
    }
}

/// First present candidate from an ordered list of sources.
///
/// ```
/// use marcfacet::priority::{first_match, EvidenceSource};
///
/// let picked = first_match([
///     (EvidenceSource::FixedField, None),
///     (EvidenceSource::AdditionalCharacteristics, Some('w')),
/// ]);
/// assert_eq!(picked, Some((EvidenceSource::AdditionalCharacteristics, 'w')));
/// ```
pub fn first_match<T, I>(candidates: I) -> Option<(EvidenceSource, T)>
where
    I: IntoIterator<Item = (EvidenceSource, Option<T>)>,
{
    candidates
        .into_iter()
        .find_map(|(source, candidate)| candidate.map(|value| (source, value)))
}

/// Collects physical-format evidence and resolves it per family.
///
/// Sources must be offered in priority order. Once a source has produced any
/// label for a family, later sources are ignored for that family; further
/// labels from the same source are kept.
#[derive(Debug, Default)]
pub struct FamilyResolver {
    owners: BTreeMap<PhysicalFamily, EvidenceSource>,
    labels: BTreeSet<PhysicalFormat>,
}

impl FamilyResolver {
    /// Empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer one label from `source`. Returns true if it was kept.
    pub fn offer(&mut self, source: EvidenceSource, format: PhysicalFormat) -> bool {
        let family = format.family();
        match self.owners.get(&family) {
            Some(&owner) if owner != source => {
                trace!(%source, %owner, label = %format, "family already settled");
                false
            }
            _ => {
                self.owners.insert(family, source);
                self.labels.insert(format);
                true
            }
        }
    }

    /// Offer every label a source produced.
    pub fn offer_all<I>(&mut self, source: EvidenceSource, formats: I)
    where
        I: IntoIterator<Item = PhysicalFormat>,
    {
        for format in formats {
            self.offer(source, format);
        }
    }

    /// Resolved label set.
    #[must_use]
    pub fn finish(self) -> BTreeSet<PhysicalFormat> {
        self.labels
    }
}

/// Remove `fallback` when any other label is present. Returns true if removed.
///
/// ```
/// use std::collections::BTreeSet;
/// use marcfacet::priority::suppress_if_present;
/// use marcfacet::PhysicalFormat;
///
/// let mut set = BTreeSet::from([PhysicalFormat::OtherVideo, PhysicalFormat::Mp4]);
/// assert!(suppress_if_present(&mut set, PhysicalFormat::OtherVideo, |f| *f != PhysicalFormat::OtherVideo));
/// assert_eq!(set, BTreeSet::from([PhysicalFormat::Mp4]));
/// ```
pub fn suppress_if_present<T, F>(set: &mut BTreeSet<T>, fallback: T, is_specific: F) -> bool
where
    T: Ord,
    F: Fn(&T) -> bool,
{
    if set.contains(&fallback) && set.iter().any(&is_specific) {
        set.remove(&fallback)
    } else {
        false
    }
}
