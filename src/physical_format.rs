//! Physical-format classification.
//!
//! Evidence is gathered source by source in priority order and handed to a
//! [`FamilyResolver`], so the highest-priority source that says anything about
//! a family (audio, video, microform, ...) decides that family alone.

use crate::evidence::Evidence;
use crate::format::{PhysicalFamily, PhysicalFormat};
use crate::marc_record::MarcRecord;
use crate::patterns;
use crate::physical_description;
use crate::priority::{suppress_if_present, EvidenceSource, FamilyResolver};
use smallvec::SmallVec;
use std::collections::BTreeSet;
use tracing::{debug, trace};

type Labels = SmallVec<[PhysicalFormat; 4]>;

/// Classifies records into physical formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhysicalFormatClassifier;

impl PhysicalFormatClassifier {
    /// Create a classifier.
    #[must_use]
    pub fn new() -> Self {
        PhysicalFormatClassifier
    }

    /// Physical format labels for one record.
    pub fn classify<R: MarcRecord + ?Sized>(
        &self,
        evidence: Evidence<'_, R>,
    ) -> BTreeSet<PhysicalFormat> {
        let mut resolver = FamilyResolver::new();
        resolver.offer_all(EvidenceSource::CallNumber, from_call_numbers(evidence));
        resolver.offer_all(EvidenceSource::Note, from_notes(evidence));
        resolver.offer_all(
            EvidenceSource::DescriptionSubfield,
            from_description_subfields(evidence),
        );
        resolver.offer_all(
            EvidenceSource::PhysicalDescription,
            from_physical_description(evidence),
        );
        resolver.offer_all(EvidenceSource::DescriptionText, from_description_text(evidence));

        let mut labels = resolver.finish();
        if suppress_if_present(&mut labels, PhysicalFormat::OtherVideo, |f| {
            *f != PhysicalFormat::OtherVideo && f.family() == PhysicalFamily::Video
        }) {
            debug!("other video suppressed by a specific video label");
        }
        labels
    }
}

fn from_call_numbers<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Labels {
    evidence
        .call_numbers()
        .filter_map(patterns::call_number_format)
        .collect()
}

fn from_notes<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Labels {
    evidence
        .subfield_values("538", 'a')
        .filter_map(patterns::note_format)
        .collect()
}

fn from_description_subfields<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Labels {
    evidence
        .subfield_values("300", 'b')
        .chain(evidence.subfield_values("347", 'b'))
        .filter_map(patterns::description_subfield_format)
        .collect()
}

fn from_physical_description<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Labels {
    let physical_copy = evidence.has_physical_copy();
    evidence
        .controls("007")
        .filter_map(physical_description::decode)
        .filter(|decoded| {
            let keep = physical_copy || !decoded.requires_physical_copy;
            if !keep {
                trace!(label = %decoded.format, "withheld: no physically held copy");
            }
            keep
        })
        .map(|decoded| decoded.format)
        .collect()
}

fn from_description_text<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Labels {
    let physical_copy = evidence.has_physical_copy();
    let mut labels = Labels::new();

    for field in evidence.data_fields("300") {
        let text = field.value();
        if patterns::describes_cd(&text) {
            if physical_copy {
                labels.push(PhysicalFormat::Cd);
            } else {
                trace!("CD description withheld: no physically held copy");
            }
        }
        if patterns::describes_vinyl(&text) {
            if physical_copy {
                labels.push(PhysicalFormat::Vinyl);
            } else {
                trace!("vinyl description withheld: no physically held copy");
            }
        }
    }
    for extent in evidence.subfield_values("300", 'a') {
        labels.extend(patterns::extent_formats(extent));
    }
    if evidence
        .subfield_values("338", 'a')
        .any(patterns::mentions_audio_roll)
    {
        labels.push(PhysicalFormat::PianoOrganRoll);
    }
    labels
}
