//! Data Assembly Centers.
//!
//! A DAC is the organization responsible for submitting a float's files. It gates
//! which `DATA_CENTRE` codes a file may carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Argo Data Assembly Center.
///
/// # Example
///
/// ```
/// use argo_model::Dac;
///
/// let dac: Dac = "coriolis".parse().unwrap();
/// assert_eq!(dac, Dac::Coriolis);
/// assert_eq!(dac.as_str(), "CORIOLIS");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dac {
    Aoml,
    Bodc,
    Coriolis,
    Csio,
    Csiro,
    Incois,
    Jma,
    Kma,
    Kordi,
    Meds,
    Nmdis,
}

impl Dac {
    /// Every DAC, in declaration order.
    pub const ALL: [Dac; 11] = [
        Dac::Aoml,
        Dac::Bodc,
        Dac::Coriolis,
        Dac::Csio,
        Dac::Csiro,
        Dac::Incois,
        Dac::Jma,
        Dac::Kma,
        Dac::Kordi,
        Dac::Meds,
        Dac::Nmdis,
    ];

    /// DAC name as used on the command line and in reference tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dac::Aoml => "AOML",
            Dac::Bodc => "BODC",
            Dac::Coriolis => "CORIOLIS",
            Dac::Csio => "CSIO",
            Dac::Csiro => "CSIRO",
            Dac::Incois => "INCOIS",
            Dac::Jma => "JMA",
            Dac::Kma => "KMA",
            Dac::Kordi => "KORDI",
            Dac::Meds => "MEDS",
            Dac::Nmdis => "NMDIS",
        }
    }
}

impl fmt::Display for Dac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dac {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        Dac::ALL
            .into_iter()
            .find(|dac| dac.as_str() == normalized)
            .ok_or_else(|| format!("Unknown DAC name: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("AOML".parse::<Dac>(), Ok(Dac::Aoml));
        assert_eq!(" meds ".parse::<Dac>(), Ok(Dac::Meds));
        assert!("NOAA".parse::<Dac>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for dac in Dac::ALL {
            assert_eq!(dac.to_string().parse::<Dac>(), Ok(dac));
        }
    }
}
