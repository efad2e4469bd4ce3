//! Spectral analysis of generated wavelets.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seiswave_spectrum::analyze;
use seiswave_wavelet::{Wavelet, WaveletSpec, generate};

fn spectrum_of(wavelet: Wavelet, duration: f64, dt: f64) -> seiswave_spectrum::Spectrum {
    let ts = generate(&WaveletSpec::new(wavelet, duration, dt)).expect("valid spec");
    analyze(ts.amplitude(), ts.dt()).expect("non-empty series")
}

fn max_magnitude(m: &[f64]) -> f64 {
    m.iter().cloned().fold(f64::MIN, f64::max)
}

#[test]
fn ricker_spectrum_peaks_at_dominant_frequency() {
    for f in [20.0, 45.0, 60.0, 100.0] {
        let s = spectrum_of(Wavelet::ricker(f), 0.5, 0.001);
        assert!(
            (s.peak_frequency() - f).abs() <= s.resolution(),
            "f = {f}, peak = {}",
            s.peak_frequency()
        );
    }
}

#[test]
fn frequency_axis_covers_zero_to_nyquist() {
    let s = spectrum_of(Wavelet::ricker(60.0), 0.5, 0.001);
    assert_eq!(s.frequency()[0], 0.0);
    assert_eq!(s.len(), 501 / 2 + 1);
    assert!(*s.frequency().last().unwrap() <= 500.0);
    assert!(s.frequency().windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn normalization_gives_unit_maximum() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..50 {
        let f = rng.random_range(5.0..200.0);
        let s = spectrum_of(Wavelet::ricker(f), rng.random_range(0.1..1.0), 0.001);
        assert_relative_eq!(max_magnitude(s.magnitude()), 1.0);
        assert!(s.magnitude().iter().all(|&m| (0.0..=1.0).contains(&m)));
    }
}

#[test]
fn ormsby_spectrum_is_band_limited() {
    let s = spectrum_of(Wavelet::ormsby(30.0, 40.0, 90.0, 100.0), 0.5, 0.001);
    for (&f, &m) in s.frequency().iter().zip(s.magnitude()) {
        if (45.0..=85.0).contains(&f) {
            assert!(m > 0.7, "pass band dip at {f} Hz: {m}");
        }
        if f >= 130.0 {
            assert!(m < 0.05, "leakage at {f} Hz: {m}");
        }
    }
}

#[test]
fn klauder_spectrum_peaks_inside_sweep_band() {
    let s = spectrum_of(Wavelet::klauder(40.0, 90.0), 0.5, 0.001);
    let peak = s.peak_frequency();
    assert!((35.0..=95.0).contains(&peak), "peak = {peak}");
}

#[test]
fn berlage_spectrum_has_unit_maximum() {
    let s = spectrum_of(Wavelet::berlage(60.0), 0.5, 0.001);
    assert_relative_eq!(max_magnitude(s.magnitude()), 1.0);
}
