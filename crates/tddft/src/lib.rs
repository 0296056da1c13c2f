//! Extraction of TD-DFT excited states from Gaussian log files and synthesis
//! of the corresponding UV-Vis absorption spectrum.

use log::warn;

pub mod gaussian;
pub mod spectrum;
pub mod state;

pub use spectrum::Spectrum;
pub use state::ExcitedState;

#[cfg(test)]
mod tests;

/// half-width at half-maximum of the Lorentzian line shape, in nm
pub const HWHM: f64 = 18.0;

/// states with `<S**2>` above this are treated as spurious
pub const S2_FILTER: f64 = 2.6;

/// overall scale factor applied to every Lorentzian term
pub const SCALER: f64 = 1.0;

/// first wavelength of the spectrum grid, in nm
pub const WAVE_START: usize = 200;

/// last wavelength of the spectrum grid, in nm
pub const WAVE_END: usize = 1100;

#[derive(Debug, PartialEq)]
pub enum ParseError {
    FileNotFound(String),
    MalformedState(String),
    NoStatesFound(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ParseError {}

/// Discard the states with `<S**2>` greater than [S2_FILTER], preserving the
/// order of the survivors
pub fn filter_real(states: Vec<ExcitedState>) -> Vec<ExcitedState> {
    states
        .into_iter()
        .filter(|s| {
            let real = s.is_real();
            if !real {
                warn!(
                    "dropping excited state {} with <S**2> = {:.3}",
                    s.index, s.s_squared
                );
            }
            real
        })
        .collect()
}
