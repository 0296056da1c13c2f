use std::{error::Error, path::Path};

use plotters::prelude::*;
use tddft::{ExcitedState, Spectrum, WAVE_START};

/// upper wavelength bound of the rendered plot. the experimental spectra we
/// compare against only run to ~700 nm
const PLOT_END: f64 = 800.0;

/// Render the spectrum to `path`: one vertical stem per retained transition,
/// with the broadened curve drawn over them in black
pub fn save(
    path: &Path,
    title: &str,
    states: &[ExcitedState],
    spectrum: &Spectrum,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (1200, 700)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = (spectrum.max_intensity() * 1.1).max(1e-3);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(WAVE_START as f64..PLOT_END, -0.02f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("wavelength (nm)")
        .y_desc("intensity")
        .x_labels(10)
        .draw()?;

    for s in states {
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(s.wavelength, 0.0), (s.wavelength, s.fosc)],
            BLUE,
        )))?;
    }

    let curve = spectrum
        .wavelengths
        .iter()
        .copied()
        .zip(spectrum.intensity.iter().copied());
    chart.draw_series(LineSeries::new(curve, &BLACK))?;

    root.present()?;
    Ok(())
}
