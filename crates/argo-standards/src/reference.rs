//! Built-in Argo reference tables.
//!
//! - DAC -> `DATA_CENTRE` codes (reference table 4)
//! - Short sensor names (reference table 25)
//! - Earliest valid date of the program (1997-01-01)
//!
//! The defaults can be replaced entry by entry when a newer table release is
//! available.

use std::collections::{BTreeMap, BTreeSet};

use argo_model::Dac;
use chrono::{DateTime, TimeDelta, Utc};

use crate::traits::ReferenceData;

/// 1997-01-01T00:00:00Z as seconds since the Unix epoch.
const EARLIEST_DATE_EPOCH_SECS: i64 = 852_076_800;

const DEFAULT_DAC_CODES: &[(Dac, &[&str])] = &[
    (Dac::Aoml, &["AO"]),
    (Dac::Bodc, &["BO"]),
    (Dac::Coriolis, &["IF", "GE"]),
    (Dac::Csio, &["HZ"]),
    (Dac::Csiro, &["CS"]),
    (Dac::Incois, &["IN"]),
    (Dac::Jma, &["JA"]),
    (Dac::Kma, &["KM"]),
    (Dac::Kordi, &["KO"]),
    (Dac::Meds, &["ME"]),
    (Dac::Nmdis, &["NM"]),
];

const DEFAULT_SHORT_SENSOR_NAMES: &[&str] = &[
    "AUX",
    "BACKSCATTERINGMETER",
    "CROVER",
    "CTD",
    "CYCLOPS",
    "ECO",
    "FLBB",
    "FLNTU",
    "HYDROPHONE",
    "IDO",
    "IMU",
    "ISUS",
    "MCOMS",
    "MPE",
    "OCR",
    "OPTODE",
    "RADIOMETER",
    "RAFOS",
    "SEAFET",
    "SEAPOINT",
    "SPECTROPHOTOMETER",
    "SPHOX",
    "STS",
    "SUNA",
    "UVP",
];

/// In-memory reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    dac_codes: BTreeMap<Dac, BTreeSet<String>>,
    short_sensor_names: BTreeSet<String>,
    earliest_date: DateTime<Utc>,
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::argo_default()
    }
}

impl ReferenceTables {
    /// Empty tables: no DAC codes, no sensor names, default earliest date.
    pub fn empty() -> Self {
        Self {
            dac_codes: BTreeMap::new(),
            short_sensor_names: BTreeSet::new(),
            earliest_date: default_earliest_date(),
        }
    }

    /// The tables bundled with this release.
    pub fn argo_default() -> Self {
        let mut tables = Self::empty();
        for (dac, codes) in DEFAULT_DAC_CODES {
            tables = tables.with_dac_codes(*dac, codes.iter().copied());
        }
        tables.with_short_sensor_names(DEFAULT_SHORT_SENSOR_NAMES.iter().copied())
    }

    /// Replace the codes registered for a DAC.
    #[must_use]
    pub fn with_dac_codes<I, S>(mut self, dac: Dac, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dac_codes
            .insert(dac, codes.into_iter().map(Into::into).collect());
        self
    }

    /// Add short sensor names to the vocabulary.
    #[must_use]
    pub fn with_short_sensor_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.short_sensor_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_earliest_date(mut self, earliest: DateTime<Utc>) -> Self {
        self.earliest_date = earliest;
        self
    }
}

impl ReferenceData for ReferenceTables {
    fn dac_codes(&self, dac: Dac) -> BTreeSet<&str> {
        self.dac_codes
            .get(&dac)
            .map(|codes| codes.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn earliest_date(&self) -> DateTime<Utc> {
        self.earliest_date
    }

    fn is_short_sensor_name(&self, value: &str) -> bool {
        self.short_sensor_names.contains(value)
    }
}

fn default_earliest_date() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::seconds(EARLIEST_DATE_EPOCH_SECS)
}
