//! Physical description fixed field (007) decoding.
//!
//! Byte 00 selects the category; each category has its own sub-decoder that
//! reads a few more positions. All reads go through [`ControlBytes::at`], so a
//! truncated field simply yields no label.

use crate::evidence::ControlBytes;
use crate::format::PhysicalFormat;

/// Category of material (007/00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// a - Map
    Map,
    /// c - Electronic resource
    ElectronicResource,
    /// d - Globe
    Globe,
    /// f - Tactile material
    TactileMaterial,
    /// g - Projected graphic
    ProjectedGraphic,
    /// h - Microform
    Microform,
    /// k - Nonprojected graphic
    NonprojectedGraphic,
    /// m - Motion picture
    MotionPicture,
    /// o - Kit
    Kit,
    /// q - Notated music
    NotatedMusic,
    /// r - Remote-sensing image
    RemoteSensingImage,
    /// s - Sound recording
    SoundRecording,
    /// t - Text
    Text,
    /// v - Videorecording
    Videorecording,
    /// z - Unspecified
    Unspecified,
    /// Any other code
    Unknown(char),
}

impl Category {
    /// Map a 007/00 code to its category.
    #[must_use]
    pub fn from_code(code: char) -> Self {
        match code {
            'a' => Self::Map,
            'c' => Self::ElectronicResource,
            'd' => Self::Globe,
            'f' => Self::TactileMaterial,
            'g' => Self::ProjectedGraphic,
            'h' => Self::Microform,
            'k' => Self::NonprojectedGraphic,
            'm' => Self::MotionPicture,
            'o' => Self::Kit,
            'q' => Self::NotatedMusic,
            'r' => Self::RemoteSensingImage,
            's' => Self::SoundRecording,
            't' => Self::Text,
            'v' => Self::Videorecording,
            'z' => Self::Unspecified,
            other => Self::Unknown(other),
        }
    }
}

/// A label decoded from one 007 occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The physical format
    pub format: PhysicalFormat,
    /// Only reported when the record has a physically held copy
    pub requires_physical_copy: bool,
}

impl Decoded {
    fn open(format: PhysicalFormat) -> Self {
        Decoded {
            format,
            requires_physical_copy: false,
        }
    }

    fn gated(format: PhysicalFormat) -> Self {
        Decoded {
            format,
            requires_physical_copy: true,
        }
    }
}

/// Decode one 007 occurrence.
///
/// ```
/// use marcfacet::physical_description::decode;
/// use marcfacet::{ControlBytes, PhysicalFormat};
///
/// let decoded = decode(ControlBytes::new("v   g")).map(|d| d.format);
/// assert_eq!(decoded, Some(PhysicalFormat::LaserDisc));
/// assert_eq!(decode(ControlBytes::new("g")), None);
/// ```
#[must_use]
pub fn decode(field: ControlBytes<'_>) -> Option<Decoded> {
    let category = Category::from_code(field.at(0)?);
    match category {
        Category::MotionPicture => Some(Decoded::open(PhysicalFormat::Film)),
        Category::RemoteSensingImage => Some(Decoded::open(PhysicalFormat::RemoteSensingImage)),
        Category::Microform => microform(field),
        Category::ProjectedGraphic => {
            (field.at(1)? == 's').then(|| Decoded::open(PhysicalFormat::Slide))
        }
        Category::NonprojectedGraphic => {
            (field.at(1)? == 'h').then(|| Decoded::open(PhysicalFormat::Photo))
        }
        Category::SoundRecording => sound_recording(field),
        Category::Videorecording => videorecording(field),
        Category::Map
        | Category::ElectronicResource
        | Category::Globe
        | Category::TactileMaterial
        | Category::Kit
        | Category::NotatedMusic
        | Category::Text
        | Category::Unspecified
        | Category::Unknown(_) => None,
    }
}

fn microform(field: ControlBytes<'_>) -> Option<Decoded> {
    match field.at(1)? {
        'b' | 'c' | 'd' | 'h' | 'j' => Some(Decoded::open(PhysicalFormat::Microfilm)),
        'e' | 'f' | 'g' => Some(Decoded::open(PhysicalFormat::Microfiche)),
        _ => None,
    }
}

fn sound_recording(field: ControlBytes<'_>) -> Option<Decoded> {
    match field.at(1) {
        // Disc: speed/kind at 03, no tape check
        Some('d') => match field.at(3)? {
            'b' => Some(Decoded::gated(PhysicalFormat::Vinyl)),
            'd' => Some(Decoded::gated(PhysicalFormat::Shellac78)),
            'f' => Some(Decoded::gated(PhysicalFormat::Cd)),
            _ => None,
        },
        Some('q') => Some(Decoded::open(PhysicalFormat::PianoOrganRoll)),
        _ => (field.at(6)? == 'j').then(|| Decoded::gated(PhysicalFormat::Cassette)),
    }
}

fn videorecording(field: ControlBytes<'_>) -> Option<Decoded> {
    let format = match field.at(4)? {
        'a' | 'i' | 'j' => PhysicalFormat::Beta,
        'b' => PhysicalFormat::Vhs,
        'g' => PhysicalFormat::LaserDisc,
        'q' => PhysicalFormat::Hi8,
        's' => PhysicalFormat::Bluray,
        'v' => PhysicalFormat::Dvd,
        _ => PhysicalFormat::OtherVideo,
    };
    Some(Decoded::open(format))
}
