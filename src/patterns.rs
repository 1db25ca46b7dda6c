//! Text pattern matchers shared by the classifiers.
//!
//! Detectors are literal, hand-tuned regular expressions over a closed set of
//! phrasings found in catalog data. They are compiled once on first use.
//!
//! The call-number, note and description-subfield keyword tables are ordered:
//! for a single value the first matching rule wins.

use crate::format::PhysicalFormat;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // describes_cd
    static ref CD_DISC: Regex =
        Regex::new(r"(?i)\b\d+\s+(?:compact\s+)?(?:sound|audio)\s+discs?\b").expect("CD disc pattern compiles");
    static ref CD_SIZE: Regex =
        Regex::new(r"(?i)\b4\s*3/4\s*in(?:ch(?:es)?)?\b|\b12\s*cm\b").expect("CD size pattern compiles");
    static ref CD_EXCLUDE: Regex =
        Regex::new(r"(?i)\b(?:dvd|sacd|blu-?ray)\b").expect("CD exclusion pattern compiles");

    // describes_vinyl
    static ref VINYL_SPEED: Regex =
        Regex::new(r"(?i)\b33\s*1/3\s*rpm|\b33\.3\s*rpm").expect("vinyl speed pattern compiles");
    static ref VINYL_SIZE: Regex =
        Regex::new(r"(?i)\b1[02]\s*in(?:ch(?:es)?)?\b").expect("vinyl size pattern compiles");
    static ref VINYL_EXCLUDE: Regex =
        Regex::new(r"(?i)\b(?:digital|dvd|sacd|blu-?ray)\b").expect("vinyl exclusion pattern compiles");

    // extent keywords (300$a, 338$a)
    static ref MICROFILM: Regex = Regex::new(r"(?i)microfilm").expect("microfilm pattern compiles");
    static ref MICROFICHE: Regex = Regex::new(r"(?i)microfiche").expect("microfiche pattern compiles");
    static ref SLIDE: Regex = Regex::new(r"(?i)\bslides?\b").expect("slide pattern compiles");
    static ref PHOTO: Regex = Regex::new(r"(?i)\bphotographs?\b").expect("photo pattern compiles");
    static ref REMOTE_SENSING: Regex =
        Regex::new(r"(?i)\bremote[- ]sensing images?\b").expect("remote-sensing pattern compiles");
    static ref AUDIO_ROLL: Regex = Regex::new(r"(?i)\baudio rolls?\b").expect("audio roll pattern compiles");

    static ref NOTE_RULES: Vec<(Regex, PhysicalFormat)> = compile_rules(&[
        (r"(?i)\bblu[\s-]?ray\b", PhysicalFormat::Bluray),
        (r"(?i)\bdvd\b", PhysicalFormat::Dvd),
        (r"(?i)\bvhs\b", PhysicalFormat::Vhs),
        (r"(?i)\b(?:cav|clv)\b", PhysicalFormat::LaserDisc),
        (r"(?i)\b(?:vcd|video\s?cd)\b", PhysicalFormat::VideoCd),
    ]);

    static ref DESCRIPTION_SUBFIELD_RULES: Vec<(Regex, PhysicalFormat)> = compile_rules(&[
        (r"(?i)\b(?:mp4|mpeg-4)\b", PhysicalFormat::Mp4),
        (r"(?i)\b(?:vcd|video\s?cd)\b", PhysicalFormat::VideoCd),
    ]);
}

fn compile_rules(rules: &[(&str, PhysicalFormat)]) -> Vec<(Regex, PhysicalFormat)> {
    rules
        .iter()
        .map(|&(pattern, format)| {
            (
                Regex::new(pattern).expect("keyword rule pattern compiles"),
                format,
            )
        })
        .collect()
}

/// How a call-number rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallNumberMatch {
    /// Call number starts with the token
    Prefix(&'static str),
    /// Token appears anywhere in the call number
    Contains(&'static str),
}

impl CallNumberMatch {
    /// Test an upper-cased, left-trimmed call number.
    fn matches(self, call_number: &str) -> bool {
        match self {
            Self::Prefix(token) => call_number.starts_with(token),
            Self::Contains(token) => call_number.contains(token),
        }
    }
}

/// Ordered call-number rules; the first match wins.
pub const CALL_NUMBER_RULES: &[(CallNumberMatch, PhysicalFormat)] = &[
    (CallNumberMatch::Contains("BLU-RAY"), PhysicalFormat::Bluray),
    (CallNumberMatch::Prefix("ZDVD"), PhysicalFormat::Dvd),
    (CallNumberMatch::Prefix("ARTDVD"), PhysicalFormat::Dvd),
    (CallNumberMatch::Prefix("MDVD"), PhysicalFormat::Dvd),
    (CallNumberMatch::Prefix("ADVD"), PhysicalFormat::Dvd),
    (CallNumberMatch::Prefix("ZVC"), PhysicalFormat::Vhs),
    (CallNumberMatch::Prefix("ARTVC"), PhysicalFormat::Vhs),
    (CallNumberMatch::Prefix("MVC"), PhysicalFormat::Vhs),
    (CallNumberMatch::Prefix("AVC"), PhysicalFormat::Videocassette),
    (CallNumberMatch::Prefix("ZVD"), PhysicalFormat::LaserDisc),
    (CallNumberMatch::Prefix("MVD"), PhysicalFormat::LaserDisc),
    (CallNumberMatch::Prefix("MFILM"), PhysicalFormat::Microfilm),
    (CallNumberMatch::Prefix("MFICHE"), PhysicalFormat::Microfiche),
];

/// Physical format implied by a call number, if any.
///
/// ```
/// use marcfacet::patterns::call_number_format;
/// use marcfacet::PhysicalFormat;
///
/// assert_eq!(call_number_format("ZDVD 12345 BLU-RAY"), Some(PhysicalFormat::Bluray));
/// assert_eq!(call_number_format("mfiche 1183 N.5.1.7205"), Some(PhysicalFormat::Microfiche));
/// assert_eq!(call_number_format("F152 .A28"), None);
/// ```
#[must_use]
pub fn call_number_format(call_number: &str) -> Option<PhysicalFormat> {
    let normalized = call_number.trim_start().to_ascii_uppercase();
    CALL_NUMBER_RULES
        .iter()
        .find(|(rule, _)| rule.matches(&normalized))
        .map(|&(_, format)| format)
}

/// Physical format named in a system-details note (538$a).
#[must_use]
pub fn note_format(note: &str) -> Option<PhysicalFormat> {
    first_rule(&NOTE_RULES, note)
}

/// Physical format named in a description subfield (300$b, 347$b).
#[must_use]
pub fn description_subfield_format(value: &str) -> Option<PhysicalFormat> {
    first_rule(&DESCRIPTION_SUBFIELD_RULES, value)
}

fn first_rule(rules: &[(Regex, PhysicalFormat)], text: &str) -> Option<PhysicalFormat> {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|&(_, format)| format)
}

/// True when the text describes an audio compact disc.
///
/// Requires a counted sound/audio disc, a CD size and no mention of DVD,
/// SACD or Blu-ray.
///
/// ```
/// use marcfacet::patterns::describes_cd;
///
/// assert!(describes_cd("1 sound disc : digital ; 4 3/4 in."));
/// assert!(!describes_cd("1 sound disc : digital, DVD audio ; 4 3/4 in."));
/// ```
#[must_use]
pub fn describes_cd(text: &str) -> bool {
    CD_DISC.is_match(text) && CD_SIZE.is_match(text) && !CD_EXCLUDE.is_match(text)
}

/// True when the text describes a long-playing vinyl disc.
///
/// Speed and size may appear in either order.
#[must_use]
pub fn describes_vinyl(text: &str) -> bool {
    VINYL_SPEED.is_match(text) && VINYL_SIZE.is_match(text) && !VINYL_EXCLUDE.is_match(text)
}

/// Physical formats named in an extent statement (300$a).
#[must_use]
pub fn extent_formats(extent: &str) -> Vec<PhysicalFormat> {
    let detectors: [(&Regex, PhysicalFormat); 6] = [
        (&*MICROFILM, PhysicalFormat::Microfilm),
        (&*MICROFICHE, PhysicalFormat::Microfiche),
        (&*SLIDE, PhysicalFormat::Slide),
        (&*PHOTO, PhysicalFormat::Photo),
        (&*REMOTE_SENSING, PhysicalFormat::RemoteSensingImage),
        (&*AUDIO_ROLL, PhysicalFormat::PianoOrganRoll),
    ];
    detectors
        .into_iter()
        .filter(|(pattern, _)| pattern.is_match(extent))
        .map(|(_, format)| format)
        .collect()
}

/// True when a carrier type (338$a) names an audio roll.
#[must_use]
pub fn mentions_audio_roll(text: &str) -> bool {
    AUDIO_ROLL.is_match(text)
}
