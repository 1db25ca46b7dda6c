//! Format label sets.
//!
//! [`Format`] is the main (content) format and [`PhysicalFormat`] the carrier
//! medium. Both are closed enums; their canonical strings are what ends up in
//! the output document. Variant order is the order labels are reported in.

use serde::{Serialize, Serializer};
use std::fmt;

/// Main format of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    /// Book (monograph language material)
    Book,
    /// Monographic series
    BookSeries,
    /// Computer file
    ComputerFile,
    /// Database, flagged by holdings item type
    Database,
    /// Numeric or other dataset
    Dataset,
    /// Two-dimensional graphic
    Image,
    /// Journal or periodical
    JournalPeriodical,
    /// Archival or manuscript material
    ManuscriptArchive,
    /// Map or other cartographic material
    Map,
    /// Musical sound recording
    MusicRecording,
    /// Notated music
    MusicScore,
    /// Newspaper
    Newspaper,
    /// Nonmusical sound recording
    SoundRecording,
    /// Integrating database
    UpdatingDatabase,
    /// Integrating looseleaf, reported under the Book facet value
    UpdatingLooseleaf,
    /// Integrating website
    UpdatingWebsite,
    /// Any other integrating resource
    UpdatingOther,
    /// Projected medium or videorecording
    Video,
    /// Fallback when nothing more specific applies
    Other,
}

impl Format {
    /// Canonical output string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Book | Self::UpdatingLooseleaf => "Book",
            Self::BookSeries => "Book series",
            Self::ComputerFile => "Computer file",
            Self::Database => "Database",
            Self::Dataset => "Dataset",
            Self::Image => "Image",
            Self::JournalPeriodical => "Journal/Periodical",
            Self::ManuscriptArchive => "Archive/Manuscript",
            Self::Map => "Map",
            Self::MusicRecording => "Music recording",
            Self::MusicScore => "Music score",
            Self::Newspaper => "Newspaper",
            Self::SoundRecording => "Sound recording",
            Self::UpdatingDatabase => "Updating database",
            Self::UpdatingWebsite => "Updating website",
            Self::UpdatingOther => "Updating other",
            Self::Video => "Video",
            Self::Other => "Other",
        }
    }

    /// Continuing-resource labels the link-resolver override turns into journals.
    #[must_use]
    pub const fn is_overridable_serial(&self) -> bool {
        matches!(
            self,
            Self::BookSeries
                | Self::UpdatingDatabase
                | Self::UpdatingWebsite
                | Self::UpdatingLooseleaf
                | Self::UpdatingOther
        )
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Evidence family a physical format belongs to.
///
/// Priority between evidence sources is resolved per family, so a call
/// number that settles the video family leaves the audio family open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalFamily {
    /// Motion picture film
    Film,
    /// Microfilm and microfiche
    Microform,
    /// Slides
    Slide,
    /// Photographs
    Photo,
    /// Remote-sensing images
    RemoteSensing,
    /// Audio carriers
    Audio,
    /// Piano and organ rolls
    Roll,
    /// Video carriers
    Video,
}

/// Physical (carrier) format of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalFormat {
    /// Motion picture film
    Film,
    /// Microfilm
    Microfilm,
    /// Microfiche
    Microfiche,
    /// Slide
    Slide,
    /// Photograph
    Photo,
    /// Remote-sensing image
    RemoteSensingImage,
    /// Compact disc
    Cd,
    /// Vinyl disc
    Vinyl,
    /// 78 rpm shellac disc
    Shellac78,
    /// Audiocassette
    Cassette,
    /// Piano or organ roll
    PianoOrganRoll,
    /// DVD
    Dvd,
    /// Blu-ray disc
    Bluray,
    /// VHS videocassette
    Vhs,
    /// Beta videocassette
    Beta,
    /// Videocassette of unstated format
    Videocassette,
    /// Laser disc
    LaserDisc,
    /// Hi-8 mm videocassette
    Hi8,
    /// Video CD
    VideoCd,
    /// MPEG-4 file
    Mp4,
    /// Videorecording of unknown carrier
    OtherVideo,
}

impl PhysicalFormat {
    /// Canonical output string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Film => "Film",
            Self::Microfilm => "Microfilm",
            Self::Microfiche => "Microfiche",
            Self::Slide => "Slide",
            Self::Photo => "Photo",
            Self::RemoteSensingImage => "Remote-sensing image",
            Self::Cd => "CD",
            Self::Vinyl => "Vinyl disc",
            Self::Shellac78 => "78 rpm (shellac)",
            Self::Cassette => "Audiocassette",
            Self::PianoOrganRoll => "Piano/Organ roll",
            Self::Dvd => "DVD",
            Self::Bluray => "Blu-ray",
            Self::Vhs => "Videocassette (VHS)",
            Self::Beta => "Videocassette (Beta)",
            Self::Videocassette => "Videocassette",
            Self::LaserDisc => "Laser disc",
            Self::Hi8 => "Hi-8 mm",
            Self::VideoCd => "Video CD",
            Self::Mp4 => "MPEG-4",
            Self::OtherVideo => "Other video",
        }
    }

    /// Family used for per-family priority resolution.
    #[must_use]
    pub const fn family(&self) -> PhysicalFamily {
        match self {
            Self::Film => PhysicalFamily::Film,
            Self::Microfilm | Self::Microfiche => PhysicalFamily::Microform,
            Self::Slide => PhysicalFamily::Slide,
            Self::Photo => PhysicalFamily::Photo,
            Self::RemoteSensingImage => PhysicalFamily::RemoteSensing,
            Self::Cd | Self::Vinyl | Self::Shellac78 | Self::Cassette => PhysicalFamily::Audio,
            Self::PianoOrganRoll => PhysicalFamily::Roll,
            Self::Dvd
            | Self::Bluray
            | Self::Vhs
            | Self::Beta
            | Self::Videocassette
            | Self::LaserDisc
            | Self::Hi8
            | Self::VideoCd
            | Self::Mp4
            | Self::OtherVideo => PhysicalFamily::Video,
        }
    }
}

impl fmt::Display for PhysicalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PhysicalFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_strings() {
        assert_eq!(Format::JournalPeriodical.to_string(), "Journal/Periodical");
        assert_eq!(Format::ManuscriptArchive.as_str(), "Archive/Manuscript");
        assert_eq!(Format::UpdatingLooseleaf.as_str(), Format::Book.as_str());
        assert_eq!(PhysicalFormat::Shellac78.to_string(), "78 rpm (shellac)");
        assert_eq!(PhysicalFormat::Vhs.as_str(), "Videocassette (VHS)");
    }

    #[test]
    fn test_families() {
        assert_eq!(PhysicalFormat::Microfiche.family(), PhysicalFamily::Microform);
        assert_eq!(PhysicalFormat::Cassette.family(), PhysicalFamily::Audio);
        assert_eq!(PhysicalFormat::Mp4.family(), PhysicalFamily::Video);
        assert_eq!(PhysicalFormat::OtherVideo.family(), PhysicalFamily::Video);
        assert_ne!(PhysicalFormat::Film.family(), PhysicalFamily::Video);
    }

    #[test]
    fn test_overridable_serials() {
        assert!(Format::BookSeries.is_overridable_serial());
        assert!(Format::UpdatingOther.is_overridable_serial());
        assert!(!Format::Newspaper.is_overridable_serial());
        assert!(!Format::JournalPeriodical.is_overridable_serial());
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&[PhysicalFormat::Bluray, PhysicalFormat::Dvd]).unwrap();
        assert_eq!(json, r#"["Blu-ray","DVD"]"#);
        assert_eq!(serde_json::to_string(&Format::Book).unwrap(), "\"Book\"");
    }
}
