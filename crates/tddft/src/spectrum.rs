use crate::{ExcitedState, HWHM, SCALER, WAVE_END, WAVE_START};

/// Lorentzian line shape centered at `peak` nm, scaled to `fosc` at the
/// maximum, evaluated at `wl` nm
pub fn lorentzian(wl: f64, peak: f64, fosc: f64) -> f64 {
    fosc * SCALER / (1.0 + ((wl - peak) / HWHM).powi(2))
}

/// A simulated UV-Vis spectrum on the integer wavelength grid
/// [WAVE_START]..=[WAVE_END]. The four vectors are parallel, one entry per
/// grid point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Spectrum {
    /// grid wavelengths in nm
    pub wavelengths: Vec<f64>,

    /// sum of the Lorentzian terms of every transition
    pub intensity: Vec<f64>,

    /// intensity normalized by its maximum
    pub transmittance: Vec<f64>,

    /// -log10(1 - intensity), from the raw sum rather than the normalized
    /// curve
    pub absorbance: Vec<f64>,
}

impl Spectrum {
    /// Broaden each transition in `states` into a Lorentzian peak and sum
    /// over the wavelength grid
    pub fn synthesize(states: &[ExcitedState]) -> Self {
        let wavelengths: Vec<f64> =
            (WAVE_START..=WAVE_END).map(|wl| wl as f64).collect();
        let intensity: Vec<f64> = wavelengths
            .iter()
            .map(|&wl| {
                states
                    .iter()
                    .map(|s| lorentzian(wl, s.wavelength, s.fosc))
                    .sum()
            })
            .collect();
        let max = intensity.iter().copied().fold(f64::MIN, f64::max);
        let transmittance = intensity
            .iter()
            .map(|&s| if max > 0.0 { s / max } else { 0.0 })
            .collect();
        let absorbance =
            intensity.iter().map(|&s| -(1.0 - s).log10()).collect();
        Self {
            wavelengths,
            intensity,
            transmittance,
            absorbance,
        }
    }

    /// the largest value of the summed spectrum, 0.0 for an empty grid
    pub fn max_intensity(&self) -> f64 {
        self.intensity.iter().copied().fold(0.0, f64::max)
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }
}
