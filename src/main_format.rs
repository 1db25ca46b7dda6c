//! Main-format classification.
//!
//! The main format is derived in five passes over the record:
//!
//! 1. Leader/06 (with 07 and some 008 bytes) gives a baseline label
//! 2. Records without a baseline label are checked for serial type
//!    (008/21, then a continuing-resource 006)
//! 3. A link-resolver URL or a MARCit brief-record note turns continuing
//!    resources into journals
//! 4. A database item type adds Database and may drop Computer file
//! 5. Other fills an otherwise empty set, unless the baseline had no evidence

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::evidence::Evidence;
use crate::format::Format;
use crate::leader::{BibliographicLevel, TypeOfRecord};
use crate::marc_record::MarcRecord;
use crate::priority::{first_match, suppress_if_present, EvidenceSource};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use tracing::{debug, trace};

lazy_static! {
    static ref MARCIT_NOTE: Regex =
        Regex::new(r"^\s*MARCit brief record\.?\s*$").expect("MARCit note pattern compiles");
}

/// Outcome of the leader/06 baseline mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// A specific label
    Label(Format),
    /// Known bytes with no mapping; Other may apply
    Unmapped,
    /// The bytes needed to decide are missing; no fallback label
    NoEvidence,
}

/// Classifies records into main formats.
#[derive(Debug, Clone)]
pub struct MainFormatClassifier {
    link_resolver_tag: String,
    link_resolver_subfield: char,
    link_resolver: Regex,
    marcit_note_tag: String,
    marcit_note_subfield: char,
    database_item_type: String,
}

impl MainFormatClassifier {
    /// Build a classifier from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the link-resolver pattern does not compile.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        Ok(MainFormatClassifier {
            link_resolver_tag: config.link_resolver_tag.clone(),
            link_resolver_subfield: config.link_resolver_subfield,
            link_resolver: config.compile_link_resolver_pattern()?,
            marcit_note_tag: config.marcit_note_tag.clone(),
            marcit_note_subfield: config.marcit_note_subfield,
            database_item_type: config.database_item_type.clone(),
        })
    }

    /// Main format labels for one record.
    pub fn classify<R: MarcRecord + ?Sized>(&self, evidence: Evidence<'_, R>) -> BTreeSet<Format> {
        let mut labels = BTreeSet::new();
        let level = evidence.bibliographic_level();

        let baseline = baseline(evidence);
        trace!(?baseline, "leader/06 baseline");
        if let Baseline::Label(format) = baseline {
            labels.insert(format);
        } else if let Some(format) = serial_format(evidence, level) {
            labels.insert(format);
        }

        if self.is_journal_source(evidence) {
            apply_journal_override(&mut labels, level);
        }

        if evidence.has_item_type(&self.database_item_type) {
            labels.insert(Format::Database);
            if labels.contains(&Format::ComputerFile) && !evidence.has_physical_copy() {
                debug!("online-only database: dropping computer file");
                labels.remove(&Format::ComputerFile);
            }
        }

        if baseline != Baseline::NoEvidence {
            labels.insert(Format::Other);
            suppress_if_present(&mut labels, Format::Other, |f| *f != Format::Other);
        }
        labels
    }

    /// Record has a link-resolver URL or a MARCit brief-record note.
    fn is_journal_source<R: MarcRecord + ?Sized>(&self, evidence: Evidence<'_, R>) -> bool {
        let has_link = evidence
            .subfield_values(&self.link_resolver_tag, self.link_resolver_subfield)
            .any(|url| self.link_resolver.is_match(url));
        has_link
            || evidence
                .subfield_values(&self.marcit_note_tag, self.marcit_note_subfield)
                .any(|note| MARCIT_NOTE.is_match(note))
    }
}

/// Leader/06 baseline mapping.
pub fn baseline<R: MarcRecord + ?Sized>(evidence: Evidence<'_, R>) -> Baseline {
    let fixed = evidence.first_control("008");
    match evidence.record_type() {
        TypeOfRecord::LanguageMaterial | TypeOfRecord::ManuscriptLanguageMaterial => {
            match evidence.bibliographic_level() {
                BibliographicLevel::MonographicComponentPart | BibliographicLevel::Monograph => {
                    Baseline::Label(Format::Book)
                }
                _ => Baseline::Unmapped,
            }
        }
        TypeOfRecord::ArchivalControl | TypeOfRecord::MixedMaterials => {
            Baseline::Label(Format::ManuscriptArchive)
        }
        TypeOfRecord::NotatedMusic | TypeOfRecord::ManuscriptNotatedMusic => {
            Baseline::Label(Format::MusicScore)
        }
        TypeOfRecord::Cartographic | TypeOfRecord::ManuscriptCartographic => {
            Baseline::Label(Format::Map)
        }
        TypeOfRecord::NonmusicalSoundRecording => Baseline::Label(Format::SoundRecording),
        TypeOfRecord::MusicalSoundRecording => Baseline::Label(Format::MusicRecording),
        TypeOfRecord::ProjectedMedium => match fixed.and_then(|f| f.at(33)) {
            Some('m' | 'v') => Baseline::Label(Format::Video),
            Some(_) => Baseline::Unmapped,
            None => Baseline::NoEvidence,
        },
        // 008/33 type of visual material; '|' is the fill character.
        TypeOfRecord::NonprojectableGraphic => match fixed.and_then(|f| f.at(33)) {
            Some('a' | 'c' | 'i' | 'k' | 'l' | 'n' | 'o' | 'p' | 's' | 't' | '0'..='9' | '|' | ' ') => {
                Baseline::Label(Format::Image)
            }
            Some(_) => Baseline::Unmapped,
            None => Baseline::NoEvidence,
        },
        TypeOfRecord::ComputerFile => match fixed.and_then(|f| f.at(26)) {
            Some('a') => Baseline::Label(Format::Dataset),
            _ => Baseline::Label(Format::ComputerFile),
        },
        TypeOfRecord::Kit | TypeOfRecord::ThreeDimensionalArtifact | TypeOfRecord::Unknown(_) => {
            Baseline::Unmapped
        }
    }
}

/// Serial type code, 008/21 outranking a continuing-resource 006.
///
/// 008/21 only counts for serials and integrating resources; when the 008 is
/// long enough its byte 21 decides, blank or not.
fn serial_type_code<R: MarcRecord + ?Sized>(
    evidence: Evidence<'_, R>,
    level: BibliographicLevel,
) -> Option<(EvidenceSource, char)> {
    let fixed = if level.is_continuing() {
        evidence.first_control("008").and_then(|f| f.at(21))
    } else {
        None
    };
    let additional = evidence
        .controls("006")
        .find(|f| f.at(0) == Some('s'))
        .and_then(|f| f.at(4));

    first_match([
        (EvidenceSource::FixedField, fixed),
        (EvidenceSource::AdditionalCharacteristics, additional),
    ])
}

fn serial_format<R: MarcRecord + ?Sized>(
    evidence: Evidence<'_, R>,
    level: BibliographicLevel,
) -> Option<Format> {
    let (source, code) = serial_type_code(evidence, level)?;
    let format = match code {
        'p' => Format::JournalPeriodical,
        'n' => Format::Newspaper,
        'm' => Format::BookSeries,
        'd' => Format::UpdatingDatabase,
        'w' => Format::UpdatingWebsite,
        'l' => Format::UpdatingLooseleaf,
        ' ' | '|' if level == BibliographicLevel::IntegratingResource => Format::UpdatingOther,
        ' ' | '|' => Format::JournalPeriodical,
        _ => Format::UpdatingOther,
    };
    trace!(%source, code = %code, label = %format, "serial type");
    Some(format)
}

fn apply_journal_override(labels: &mut BTreeSet<Format>, level: BibliographicLevel) {
    let before = labels.len();
    labels.retain(|f| !f.is_overridable_serial());
    if labels.len() != before || (labels.is_empty() && level.is_continuing()) {
        debug!("link resolver or MARCit note: reporting as journal");
        labels.insert(Format::JournalPeriodical);
    }
}
