//! Klauder wavelet: autocorrelation of a linear up-sweep.

use std::f64::consts::PI;

/// Sweep envelope `sin(pi*K*t*(T - |t|)) / (pi*t)`.
///
/// The sample at `t = 0` takes the analytic limit `K*T`.
fn envelope(t: f64, rate: f64, sweep: f64) -> f64 {
    if t == 0.0 {
        return rate * sweep;
    }
    (PI * rate * t * (sweep - t.abs())).sin() / (PI * t)
}

/// Evaluates the Klauder wavelet for band `[f1, f2]` and sweep length `sweep`.
///
/// With `f0 = (f1 + f2) / 2` and `K = (f2 - f1) / T` the amplitude is the
/// real part of `envelope(t) * exp(i*2*pi*f0*t)`, i.e.
/// `envelope(t) * cos(2*pi*f0*t)`.
pub(crate) fn klauder(time: &[f64], band: [f64; 2], sweep: f64) -> Vec<f64> {
    let [f1, f2] = band;
    let f0 = 0.5 * (f1 + f2);
    let rate = (f2 - f1) / sweep;
    time.iter()
        .map(|&t| envelope(t, rate, sweep) * (2.0 * PI * f0 * t).cos())
        .collect()
}
