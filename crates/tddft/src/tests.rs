use approx::assert_abs_diff_eq;
use test_case::test_case;

use super::*;
use crate::spectrum::lorentzian;

const LINE: &str = " Excited State   4:  3.010-?Sym    2.1977 eV  564.13 nm \
                    f=0.1278  <S**2>=2.055";

#[test]
fn parse_state_line() {
    let got: ExcitedState = LINE.parse().unwrap();
    let want = ExcitedState {
        index: 4,
        energy: 2.1977,
        wavelength: 564.13,
        fosc: 0.1278,
        s_squared: 2.055,
    };
    assert_eq!(got, want);
}

#[test_case(" Excited State   4:  3.010-?Sym    2.1977 eV"; "truncated")]
#[test_case(" Excited State   4  3.010-?Sym    2.1977 eV  564.13 nm \
             f=0.1278  <S**2>=2.055"; "no colon")]
#[test_case(" Excited State   4:  3.010-?Sym    x.xxxx eV  564.13 nm \
             f=0.1278  <S**2>=2.055"; "bad energy")]
#[test_case(" Excited State   4:  3.010-?Sym    2.1977 eV  564.13 nm \
             0.1278  <S**2>=2.055"; "missing f prefix")]
fn parse_malformed_line(line: &str) {
    let got = line.parse::<ExcitedState>();
    assert_eq!(got, Err(ParseError::MalformedState(line.to_owned())));
}

#[test]
fn read_td_log() {
    let states = gaussian::read_output("testfiles/td.log").unwrap();
    assert_eq!(states.len(), 8);
    assert_eq!(
        states[0],
        ExcitedState {
            index: 1,
            energy: 1.1721,
            wavelength: 1057.85,
            fosc: 0.0009,
            s_squared: 2.007,
        }
    );
    assert_eq!(states[7].index, 8);
}

#[test]
fn read_missing_file() {
    let got = gaussian::read_output("testfiles/nonexistent.log");
    assert_eq!(
        got,
        Err(ParseError::FileNotFound("testfiles/nonexistent.log".into()))
    );
}

#[test]
fn read_log_without_states() {
    let got = gaussian::read_output("testfiles/scf.log");
    assert_eq!(
        got,
        Err(ParseError::NoStatesFound("testfiles/scf.log".into()))
    );
}

#[test]
fn filter_spurious_states() {
    let states = gaussian::read_output("testfiles/td.log").unwrap();
    let real = filter_real(states);
    let got: Vec<usize> = real.iter().map(|s| s.index).collect();
    // states 3 and 5 are above the <S**2> threshold
    assert_eq!(got, vec![1, 2, 4, 6, 7, 8]);
}

#[test_case(500.0, 500.0, 0.5, 0.5; "at the peak")]
#[test_case(518.0, 500.0, 0.5, 0.25; "one hwhm above")]
#[test_case(482.0, 500.0, 0.5, 0.25; "one hwhm below")]
fn lorentzian_values(wl: f64, peak: f64, fosc: f64, want: f64) {
    assert_abs_diff_eq!(lorentzian(wl, peak, fosc), want, epsilon = 1e-12);
}

fn single_state(wavelength: f64, fosc: f64) -> ExcitedState {
    ExcitedState {
        index: 1,
        energy: 2.4797,
        wavelength,
        fosc,
        s_squared: 2.01,
    }
}

#[test]
fn synthesize_single_state() {
    let spec = Spectrum::synthesize(&[single_state(500.0, 0.8)]);
    assert_eq!(spec.len(), WAVE_END - WAVE_START + 1);
    let at = 500 - WAVE_START;
    assert_abs_diff_eq!(spec.intensity[at], 0.8, epsilon = 1e-12);
    assert_abs_diff_eq!(spec.transmittance[at], 1.0, epsilon = 1e-12);
    // absorbance comes from the raw sum, not the normalized curve
    assert_abs_diff_eq!(
        spec.absorbance[at],
        -(1.0 - 0.8f64).log10(),
        epsilon = 1e-12
    );
}

#[test]
fn intensity_bounded_by_peak_count() {
    let states = filter_real(gaussian::read_output("testfiles/td.log").unwrap());
    let spec = Spectrum::synthesize(&states);
    let max_fosc = states.iter().map(|s| s.fosc).fold(0.0, f64::max);
    let bound = states.len() as f64 * max_fosc * SCALER;
    assert!(spec
        .intensity
        .iter()
        .all(|&s| s > 0.0 && s <= bound));
}

#[test]
fn transmittance_peaks_at_one() {
    let states = filter_real(gaussian::read_output("testfiles/td.log").unwrap());
    let spec = Spectrum::synthesize(&states);
    let max = spec.transmittance.iter().copied().fold(0.0, f64::max);
    assert_abs_diff_eq!(max, 1.0, epsilon = 1e-12);
}

#[test]
fn synthesize_no_states() {
    let spec = Spectrum::synthesize(&[]);
    assert_eq!(spec.len(), WAVE_END - WAVE_START + 1);
    assert!(spec.intensity.iter().all(|&s| s == 0.0));
    assert!(spec.transmittance.iter().all(|&t| t == 0.0));
    assert_eq!(spec.max_intensity(), 0.0);
}
