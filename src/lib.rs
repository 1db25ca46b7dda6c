#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # marcfacet: MARC format facets
//!
//! Classifies MARC bibliographic records, together with their holdings
//! items, into two facet label sets: the **main format** (book, journal,
//! video, map, ...) and the **physical format** (CD, DVD, microfilm, ...).
//!
//! ## Quick Start
//!
//! ```
//! use marcfacet::{ClassifierConfig, Field, FormatClassifier, HoldingsItem, Leader, Record};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = Record::builder("01543cam a2200325Ka 4500".parse::<Leader>()?)
//!     .field(
//!         Field::builder("300".to_string(), ' ', ' ')
//!             .subfield_str('a', "21 microfilm reels ;")
//!             .subfield_str('c', "35 mm.")
//!             .build(),
//!     )
//!     .build();
//! let items = [HoldingsItem::builder("GREEN").call_number("MFILM N.S. 17443").build()];
//!
//! let classifier = FormatClassifier::new(ClassifierConfig::default())?;
//! let result = classifier.classify(&record, &items);
//! let json = result.to_json(classifier.config())?;
//! assert_eq!(
//!     json,
//!     r#"{"format_main_ssim":["Book"],"format_physical_ssim":["Microfilm"]}"#
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`record`] — Record model (`Record`, `Field`, `Subfield`) with repeatable control fields
//! - [`leader`] — MARC record leader (24-byte header)
//! - [`marc_record`] — Read-only record trait the classifiers work against
//! - [`holdings`] — Holdings items (copies) attached to a record
//! - [`evidence`] — Bounds-checked access to record bytes and items
//! - [`format`] — `Format` and `PhysicalFormat` label sets
//! - [`patterns`] — Text detectors and keyword rule tables
//! - [`priority`] — Evidence-source priority resolution
//! - [`physical_description`] — 007 field decoding
//! - [`main_format`] / [`physical_format`] — The two classifiers
//! - [`classifier`] — `FormatClassifier` and batch classification
//! - [`document`] — Output document fields
//! - [`config`] — Classifier configuration
//! - [`error`] — Error types and result type

pub mod classifier;
pub mod config;
pub mod document;
pub mod error;
pub mod evidence;
pub mod format;
pub mod holdings;
pub mod leader;
pub mod main_format;
pub mod marc_record;
pub mod patterns;
pub mod physical_description;
pub mod physical_format;
pub mod priority;
/// Core MARC record structures (`Record`, `Field`, `Subfield`)
pub mod record;

pub use classifier::{ClassificationResult, FormatClassifier};
pub use config::ClassifierConfig;
pub use document::DocumentFields;
pub use error::{FormatError, Result};
pub use evidence::{ControlBytes, Evidence};
pub use format::{Format, PhysicalFamily, PhysicalFormat};
pub use holdings::{AccessType, CallNumberScheme, HoldingsItem, HoldingsItemBuilder};
pub use leader::{BibliographicLevel, Leader, TypeOfRecord};
pub use main_format::MainFormatClassifier;
pub use marc_record::MarcRecord;
pub use physical_format::PhysicalFormatClassifier;
pub use record::{Field, FieldBuilder, Record, RecordBuilder, Subfield};
