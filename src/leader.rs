//! MARC record leader parsing and positional access.
//!
//! The MARC leader is a 24-byte fixed-length field at the start of every MARC record.
//! Format classification reads two of its positions:
//!
//! - Position 6: Type of record (a = language material, j = musical sound recording, etc.)
//! - Position 7: Bibliographic level (m = monograph, s = serial, i = integrating resource, etc.)
//!
//! The remaining positions are kept so a leader survives a round trip through
//! the record model unchanged.

use crate::error::{FormatError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// MARC Leader - 24 bytes at the start of every MARC record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    /// Record length (5 digits) - positions 0-4
    pub record_length: u32,
    /// Record status (1 char) - position 5
    pub record_status: char,
    /// Type of record (1 char) - position 6
    pub record_type: char,
    /// Bibliographic level (1 char) - position 7
    pub bibliographic_level: char,
    /// Type of control record (1 char) - position 8
    pub control_record_type: char,
    /// Character coding scheme (1 char) - position 9
    pub character_coding: char,
    /// Indicator count (1 digit) - position 10 (usually 2)
    pub indicator_count: u8,
    /// Subfield code count (1 digit) - position 11 (usually 2)
    pub subfield_code_count: u8,
    /// Base address of data (5 digits) - positions 12-16
    pub data_base_address: u32,
    /// Encoding level (1 char) - position 17
    pub encoding_level: char,
    /// Cataloging form (1 char) - position 18
    pub cataloging_form: char,
    /// Multipart resource record level (1 char) - position 19
    pub multipart_level: char,
    /// Reserved (4 chars) - positions 20-23
    pub reserved: String,
}

impl Default for Leader {
    fn default() -> Self {
        Leader {
            record_length: 0,
            record_status: 'n',
            record_type: 'a',
            bibliographic_level: 'm',
            control_record_type: ' ',
            character_coding: 'a',
            indicator_count: 2,
            subfield_code_count: 2,
            data_base_address: 0,
            encoding_level: ' ',
            cataloging_form: ' ',
            multipart_level: ' ',
            reserved: "4500".to_string(),
        }
    }
}

impl Leader {
    /// Parse a leader from 24 bytes
    ///
    /// Only the length is checked. The numeric spans (record length, counts
    /// and base address) are read leniently: a blank or non-digit byte counts
    /// as 0, so leaders from feeds that blank those positions still parse.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 24 bytes are given.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 24 {
            return Err(FormatError::InvalidLeader(format!(
                "Leader must be at least 24 bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Leader {
            record_length: parse_digits(&bytes[0..5]),
            record_status: bytes[5] as char,
            record_type: bytes[6] as char,
            bibliographic_level: bytes[7] as char,
            control_record_type: bytes[8] as char,
            character_coding: bytes[9] as char,
            indicator_count: parse_count(bytes[10]),
            subfield_code_count: parse_count(bytes[11]),
            data_base_address: parse_digits(&bytes[12..17]),
            encoding_level: bytes[17] as char,
            cataloging_form: bytes[18] as char,
            multipart_level: bytes[19] as char,
            reserved: String::from_utf8_lossy(&bytes[20..24]).to_string(),
        })
    }

    /// Typed view of position 06.
    #[must_use]
    pub fn type_of_record(&self) -> TypeOfRecord {
        TypeOfRecord::from_code(self.record_type)
    }

    /// Typed view of position 07.
    #[must_use]
    pub fn bibliographic_level(&self) -> BibliographicLevel {
        BibliographicLevel::from_code(self.bibliographic_level)
    }
}

impl FromStr for Leader {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_bytes(s.as_bytes())
    }
}

/// Type of record (Leader/06)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOfRecord {
    /// a - Language material
    LanguageMaterial,
    /// b - Archival and manuscripts control (obsolete, still found in legacy data)
    ArchivalControl,
    /// c - Notated music
    NotatedMusic,
    /// d - Manuscript notated music
    ManuscriptNotatedMusic,
    /// e - Cartographic material
    Cartographic,
    /// f - Manuscript cartographic material
    ManuscriptCartographic,
    /// g - Projected medium
    ProjectedMedium,
    /// i - Nonmusical sound recording
    NonmusicalSoundRecording,
    /// j - Musical sound recording
    MusicalSoundRecording,
    /// k - Two-dimensional nonprojectable graphic
    NonprojectableGraphic,
    /// m - Computer file
    ComputerFile,
    /// o - Kit
    Kit,
    /// p - Mixed materials
    MixedMaterials,
    /// r - Three-dimensional artifact or naturally occurring object
    ThreeDimensionalArtifact,
    /// t - Manuscript language material
    ManuscriptLanguageMaterial,
    /// Any code not defined by MARC 21
    Unknown(char),
}

impl TypeOfRecord {
    /// Map a Leader/06 code to its type.
    #[must_use]
    pub fn from_code(code: char) -> Self {
        match code {
            'a' => Self::LanguageMaterial,
            'b' => Self::ArchivalControl,
            'c' => Self::NotatedMusic,
            'd' => Self::ManuscriptNotatedMusic,
            'e' => Self::Cartographic,
            'f' => Self::ManuscriptCartographic,
            'g' => Self::ProjectedMedium,
            'i' => Self::NonmusicalSoundRecording,
            'j' => Self::MusicalSoundRecording,
            'k' => Self::NonprojectableGraphic,
            'm' => Self::ComputerFile,
            'o' => Self::Kit,
            'p' => Self::MixedMaterials,
            'r' => Self::ThreeDimensionalArtifact,
            't' => Self::ManuscriptLanguageMaterial,
            other => Self::Unknown(other),
        }
    }
}

/// Bibliographic level (Leader/07)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BibliographicLevel {
    /// a - Monographic component part
    MonographicComponentPart,
    /// b - Serial component part
    SerialComponentPart,
    /// c - Collection
    Collection,
    /// d - Subunit
    Subunit,
    /// i - Integrating resource
    IntegratingResource,
    /// m - Monograph/Item
    Monograph,
    /// s - Serial
    Serial,
    /// Any code not defined by MARC 21
    Unknown(char),
}

impl BibliographicLevel {
    /// Map a Leader/07 code to its level.
    #[must_use]
    pub fn from_code(code: char) -> Self {
        match code {
            'a' => Self::MonographicComponentPart,
            'b' => Self::SerialComponentPart,
            'c' => Self::Collection,
            'd' => Self::Subunit,
            'i' => Self::IntegratingResource,
            'm' => Self::Monograph,
            's' => Self::Serial,
            other => Self::Unknown(other),
        }
    }

    /// Serial or integrating resource (a continuing resource).
    #[must_use]
    pub fn is_continuing(self) -> bool {
        matches!(self, Self::Serial | Self::IntegratingResource)
    }
}

/// Read an ASCII number; non-digit bytes count as 0.
fn parse_digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, &b| acc * 10 + char::from(b).to_digit(10).unwrap_or(0))
}

/// Read a single-digit count (positions 10 and 11); non-digits count as 0.
fn parse_count(byte: u8) -> u8 {
    char::from(byte)
        .to_digit(10)
        .and_then(|d| u8::try_from(d).ok())
        .unwrap_or(0)
}
