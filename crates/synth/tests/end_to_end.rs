//! Full request-to-response synthesis.

use approx::assert_relative_eq;
use seiswave_synth::{
    BerlageEnvelope, SynthError, Violation, Wavelet, WaveletKind, WaveletSpec, frequency_limits,
    synthesize, synthesize_batch,
};

fn spec(wavelet: Wavelet) -> WaveletSpec {
    WaveletSpec::new(wavelet, 0.5, 0.001)
}

// ---------------------------------------------------------------------------
// Successful requests
// ---------------------------------------------------------------------------

#[test]
fn ricker_sixty_hertz() {
    let s = synthesize(&spec(Wavelet::ricker(60.0))).unwrap();
    let ts = s.series();
    assert_eq!(ts.time().len(), 501);
    assert_eq!(ts.amplitude().len(), 501);
    assert_eq!(ts.amplitude()[250], 1.0);
    assert_relative_eq!(ts.time()[0], -0.25, epsilon = 1e-12);
    assert_relative_eq!(ts.time()[500], 0.25, epsilon = 1e-12);

    let sp = s.spectrum();
    let max = sp.magnitude().iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(max, 1.0);
    assert!((sp.peak_frequency() - 60.0).abs() <= sp.resolution());
}

#[test]
fn ormsby_in_order_succeeds() {
    let s = synthesize(&spec(Wavelet::ormsby(30.0, 40.0, 90.0, 100.0))).unwrap();
    assert_eq!(s.series().len(), 501);
    assert!(s.series().amplitude().iter().all(|a| a.is_finite()));
}

#[test]
fn every_family_produces_series_and_spectrum() {
    for wavelet in [
        Wavelet::ricker(60.0),
        Wavelet::ormsby(30.0, 40.0, 90.0, 100.0),
        Wavelet::klauder(40.0, 90.0),
        Wavelet::berlage(60.0),
        Wavelet::berlage_with(
            30.0,
            BerlageEnvelope::new()
                .with_exponent(1.5)
                .with_decay(40.0)
                .with_phase(-std::f64::consts::FRAC_PI_2),
        ),
    ] {
        let s = synthesize(&spec(wavelet)).unwrap();
        assert_eq!(s.series().len(), 501, "{:?}", wavelet.kind());
        assert_eq!(s.spectrum().len(), 251);
    }
}

#[test]
fn steep_berlage_envelope_keeps_unit_spectrum() {
    for n in [300.0, 500.0, 800.0] {
        let env = BerlageEnvelope::new().with_exponent(n);
        let s = synthesize(&spec(Wavelet::berlage_with(60.0, env))).unwrap();
        assert!(s.series().peak_amplitude() > 0.5, "n = {n}");
        let max = s.spectrum().magnitude().iter().cloned().fold(f64::MIN, f64::max);
        assert_eq!(max, 1.0, "n = {n}");
        let peak = s.playback().samples().iter().fold(0.0_f64, |m, a| m.max(a.abs()));
        assert_relative_eq!(peak, 1.0, epsilon = 1e-12);
    }
}

// ---------------------------------------------------------------------------
// Rejected requests
// ---------------------------------------------------------------------------

#[test]
fn ormsby_out_of_order_is_rejected() {
    let err = synthesize(&spec(Wavelet::ormsby(40.0, 30.0, 90.0, 100.0))).unwrap_err();
    assert!(matches!(
        err,
        SynthError::InvalidParameter {
            reason: Violation::OrderingViolated { pair: (0, 1), .. }
        }
    ));
}

#[test]
fn above_nyquist_is_rejected() {
    let err = synthesize(&spec(Wavelet::ricker(600.0))).unwrap_err();
    assert!(matches!(
        err,
        SynthError::InvalidParameter {
            reason: Violation::AboveNyquist { .. }
        }
    ));
    assert!(err.is_caller_error());
}

#[test]
fn klauder_reversed_band_is_rejected() {
    let err = synthesize(&spec(Wavelet::klauder(90.0, 40.0))).unwrap_err();
    assert_eq!(err.kind(), "invalid_parameter");
}

#[test]
fn malformed_requests_are_invalid_specifications() {
    let bad = [
        WaveletSpec::new(Wavelet::ricker(60.0), 0.0, 0.001),
        WaveletSpec::new(Wavelet::ricker(60.0), 0.5, -0.001),
        WaveletSpec::new(Wavelet::ricker(60.0), 0.001, 0.001),
        WaveletSpec::new(Wavelet::ricker(-5.0), 0.5, 0.001),
        WaveletSpec::new(
            Wavelet::berlage_with(60.0, BerlageEnvelope::new().with_exponent(-1.0)),
            0.5,
            0.001,
        ),
    ];
    for s in bad {
        let err = synthesize(&s).unwrap_err();
        assert!(
            matches!(err, SynthError::InvalidSpecification { .. }),
            "{s:?} -> {err:?}"
        );
    }
}

#[test]
fn limits_match_validation() {
    let limits = frequency_limits(WaveletKind::Ricker, 0.001).unwrap();
    assert_eq!(limits.max(), 500.0);
    assert!(synthesize(&spec(Wavelet::ricker(limits.min()))).is_ok());
    assert!(synthesize(&spec(Wavelet::ricker(limits.max()))).is_err());
}

// ---------------------------------------------------------------------------
// Batch
// ---------------------------------------------------------------------------

#[test]
fn batch_preserves_order_and_isolates_failures() {
    let specs = vec![
        spec(Wavelet::ricker(20.0)),
        spec(Wavelet::ricker(600.0)),
        spec(Wavelet::klauder(40.0, 90.0)),
        spec(Wavelet::berlage(60.0)),
    ];
    let results = synthesize_batch(&specs);
    assert_eq!(results.len(), specs.len());
    assert!(results[1].is_err());
    for i in [0, 2, 3] {
        let expected = synthesize(&specs[i]).unwrap();
        assert_eq!(results[i].as_ref().unwrap(), &expected);
    }
}

#[test]
fn repeated_requests_are_identical() {
    let s = spec(Wavelet::ormsby(30.0, 40.0, 90.0, 100.0));
    assert_eq!(synthesize(&s).unwrap(), synthesize(&s).unwrap());
}
