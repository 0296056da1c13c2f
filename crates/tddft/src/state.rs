use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ParseError, S2_FILTER};

/// One excited-state record from a TD-DFT log file.
///
/// The serde field names match the CSV headers written by the reporting
/// tools, so a written table deserializes back into the same records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExcitedState {
    /// 1-based state number
    #[serde(rename = "Excite_state")]
    pub index: usize,

    /// excitation energy in eV
    #[serde(rename = "Energy(eV)")]
    pub energy: f64,

    /// transition wavelength in nm
    #[serde(rename = "wavelength(nm)")]
    pub wavelength: f64,

    /// oscillator strength
    #[serde(rename = "Oscilation_Strength")]
    pub fosc: f64,

    /// spin contamination diagnostic
    #[serde(rename = "<S**2>")]
    pub s_squared: f64,
}

impl ExcitedState {
    /// whether the state passes the spin-contamination filter
    pub fn is_real(&self) -> bool {
        self.s_squared <= S2_FILTER
    }
}

impl FromStr for ExcitedState {
    type Err = ParseError;

    /// Parse a line of the form
    ///
    /// ```text
    ///  Excited State   3:  3.010-?Sym    2.1977 eV  564.13 nm  f=0.0008  <S**2>=1.515
    /// ```
    ///
    /// The fields of interest sit at fixed positions after whitespace
    /// splitting: the state number (with a trailing colon) at 2, the energy
    /// at 4, the wavelength at 6, and the `f=` and `<S**2>=` pairs at 8
    /// and 9. The symmetry label at 3 is discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError::MalformedState(s.to_owned());
        let fields: Vec<_> = s.split_ascii_whitespace().collect();
        if fields.len() < 10 {
            return Err(err());
        }
        let index = fields[2]
            .strip_suffix(':')
            .ok_or_else(err)?
            .parse()
            .map_err(|_| err())?;
        let energy = fields[4].parse().map_err(|_| err())?;
        let wavelength = fields[6].parse().map_err(|_| err())?;
        let fosc = fields[8]
            .strip_prefix("f=")
            .ok_or_else(err)?
            .parse()
            .map_err(|_| err())?;
        let s_squared = fields[9]
            .strip_prefix("<S**2>=")
            .ok_or_else(err)?
            .parse()
            .map_err(|_| err())?;
        Ok(Self {
            index,
            energy,
            wavelength,
            fosc,
            s_squared,
        })
    }
}
