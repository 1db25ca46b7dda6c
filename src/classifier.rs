//! Classification entry point.
//!
//! [`FormatClassifier`] runs the main-format and physical-format classifiers
//! over a record and its holdings items and returns a [`ClassificationResult`].
//! Classification is pure: the same input always gives the same result, and
//! no state is shared between records, so batches run in parallel on Rayon's
//! work-stealing pool.
//!
//! # Examples
//!
//! ```
//! use marcfacet::{FormatClassifier, Format, HoldingsItem, PhysicalFormat, Record};
//!
//! let record = Record::builder("02229cjm a2200409Ia 4500".parse()?)
//!     .control_field_str("007", "sd fungnnmmneu")
//!     .build();
//! let items = [HoldingsItem::builder("GREEN").call_number("MCD 1234").build()];
//!
//! let classifier = FormatClassifier::with_defaults()?;
//! let result = classifier.classify(&record, &items);
//! assert!(result.main.contains(&Format::MusicRecording));
//! assert!(result.physical.contains(&PhysicalFormat::Cd));
//! # Ok::<(), marcfacet::FormatError>(())
//! ```

use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::evidence::Evidence;
use crate::format::{Format, PhysicalFormat};
use crate::holdings::HoldingsItem;
use crate::main_format::MainFormatClassifier;
use crate::marc_record::MarcRecord;
use crate::physical_format::PhysicalFormatClassifier;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Main and physical format labels of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    /// Main format labels
    pub main: BTreeSet<Format>,
    /// Physical format labels
    pub physical: BTreeSet<PhysicalFormat>,
}

impl ClassificationResult {
    /// True when neither set has a label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.main.is_empty() && self.physical.is_empty()
    }
}

/// Classifies records into main and physical formats.
#[derive(Debug, Clone)]
pub struct FormatClassifier {
    config: ClassifierConfig,
    main: MainFormatClassifier,
    physical: PhysicalFormatClassifier,
}

impl FormatClassifier {
    /// Build a classifier from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not validate.
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let main = MainFormatClassifier::new(&config)?;
        debug!(
            main_field = %config.main_field_name,
            physical_field = %config.physical_field_name,
            "format classifier ready"
        );
        Ok(FormatClassifier {
            config,
            main,
            physical: PhysicalFormatClassifier::new(),
        })
    }

    /// Build a classifier with the default configuration.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature matches [`new`](Self::new).
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClassifierConfig::default())
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one record with its holdings items.
    pub fn classify<R: MarcRecord + ?Sized>(
        &self,
        record: &R,
        items: &[HoldingsItem],
    ) -> ClassificationResult {
        let evidence = Evidence::new(record, items);
        ClassificationResult {
            main: self.main.classify(evidence),
            physical: self.physical.classify(evidence),
        }
    }

    /// Main format labels only.
    pub fn classify_main<R: MarcRecord + ?Sized>(
        &self,
        record: &R,
        items: &[HoldingsItem],
    ) -> BTreeSet<Format> {
        self.main.classify(Evidence::new(record, items))
    }

    /// Physical format labels only.
    pub fn classify_physical<R: MarcRecord + ?Sized>(
        &self,
        record: &R,
        items: &[HoldingsItem],
    ) -> BTreeSet<PhysicalFormat> {
        self.physical.classify(Evidence::new(record, items))
    }

    /// Classify a batch of records in parallel.
    ///
    /// Uses Rayon's global thread pool (sized by `RAYON_NUM_THREADS`). Results
    /// are returned in input order.
    pub fn classify_batch<R>(&self, batch: &[(R, Vec<HoldingsItem>)]) -> Vec<ClassificationResult>
    where
        R: MarcRecord + Sync,
    {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|(record, items)| self.classify(record, items))
            .collect()
    }
}
