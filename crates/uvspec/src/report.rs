use std::{
    error::Error,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tddft::{ExcitedState, Spectrum, HWHM};

/// Output filenames derived from the input log name. A trailing `.log` is
/// stripped from the base; any other name is used whole.
pub struct OutPaths {
    /// table of every parsed state, before filtering
    pub states: PathBuf,

    /// the synthesized spectrum table
    pub spectrum: PathBuf,

    /// the rendered plot
    pub plot: PathBuf,

    /// plot title
    pub title: String,
}

impl OutPaths {
    pub fn new(infile: &str) -> Self {
        let base = infile.strip_suffix(".log").unwrap_or(infile);
        Self {
            states: PathBuf::from(format!("{base}_td_excited_states.csv")),
            spectrum: PathBuf::from(format!(
                "{base}_td_spectrum_HWHM{HWHM}.csv"
            )),
            plot: PathBuf::from(format!("{base}_td_spectrum.png")),
            title: format!("{base} spectrum HWHM={HWHM}"),
        }
    }
}

/// Write the full table of parsed excited states to `path`
pub fn write_states(
    path: &Path,
    states: &[ExcitedState],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for state in states {
        wtr.serialize(state)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One row of the spectrum table. The grid columns are present in every row;
/// the retained-state columns only accompany the leading rows and serialize
/// as empty fields elsewhere.
#[derive(Serialize)]
struct SpectrumRow {
    #[serde(rename = "wavelength_number(nm)")]
    wavelength: f64,

    #[serde(rename = "spectrum")]
    intensity: f64,

    #[serde(rename = "T")]
    transmittance: f64,

    #[serde(rename = "Absorbance")]
    absorbance: f64,

    #[serde(rename = "Excite_state")]
    state: Option<usize>,

    #[serde(rename = "wavelength(nm)")]
    peak: Option<f64>,

    #[serde(rename = "Oscilation_Strength")]
    fosc: Option<f64>,
}

/// Write the synthesized spectrum to `path`, one row per grid point, with
/// the retained states appended in the trailing columns
pub fn write_spectrum(
    path: &Path,
    spectrum: &Spectrum,
    states: &[ExcitedState],
) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    for i in 0..spectrum.len() {
        let state = states.get(i);
        wtr.serialize(SpectrumRow {
            wavelength: spectrum.wavelengths[i],
            intensity: spectrum.intensity[i],
            transmittance: spectrum.transmittance[i],
            absorbance: spectrum.absorbance[i],
            state: state.map(|s| s.index),
            peak: state.map(|s| s.wavelength),
            fosc: state.map(|s| s.fosc),
        })?;
    }
    wtr.flush()?;
    Ok(())
}
