//! Berlage causal wavelet.

use std::f64::consts::PI;

use crate::spec::BerlageEnvelope;

/// Envelope value at `t = duration`, relative to its peak, used when no
/// explicit decay is given.
pub const DEFAULT_TAIL_RATIO: f64 = 1e-3;

const MAX_NEWTON_ITER: usize = 100;
const NEWTON_TOL: f64 = 1e-12;

/// Solves for the decay `alpha` that brings `t^n * exp(-alpha*t)` down to
/// [`DEFAULT_TAIL_RATIO`] of its peak at `t = duration`.
///
/// For `n = 0` the peak is at `t = 0` and `alpha = -ln(ratio) / duration`.
/// For `n > 0` the peak sits at `t = n / alpha`; writing `x = alpha * T / n`
/// the tail ratio is `(x * e^(1 - x))^n`, so the root `x > 1` of
/// `ln(x) + 1 - x = ln(ratio) / n` is found by Newton iteration. The start
/// point lies right of the root and the function is concave and decreasing
/// there, so the iterates approach the root monotonically.
///
/// # Example
///
/// ```ignore
/// use seiswave_wavelet::default_berlage_decay;
///
/// let alpha = default_berlage_decay(2.0, 0.5);
/// assert!(alpha > 0.0);
/// ```
pub fn default_berlage_decay(exponent: f64, duration: f64) -> f64 {
    let ln_ratio = DEFAULT_TAIL_RATIO.ln();
    if exponent == 0.0 {
        return -ln_ratio / duration;
    }
    let target = ln_ratio / exponent;
    // ln(x) <= x/2 guarantees g(x0) <= 0.
    let mut x = 2.0 - 2.0 * target;
    for _ in 0..MAX_NEWTON_ITER {
        let g = x.ln() + 1.0 - x - target;
        let step = g / (1.0 / x - 1.0);
        x -= step;
        if step.abs() <= NEWTON_TOL * x {
            break;
        }
    }
    x * exponent / duration
}

/// Evaluates `t^n * exp(-alpha*t) * cos(2*pi*f*t + phi)` on a causal axis.
///
/// When the envelope has a peak (`n > 0`, `alpha > 0`) it is scaled to a
/// unit peak at `t = n / alpha`, so large exponents stay representable.
pub(crate) fn berlage(
    time: &[f64],
    frequency: f64,
    envelope: &BerlageEnvelope,
    duration: f64,
) -> Vec<f64> {
    let n = envelope.exponent();
    let alpha = envelope
        .decay()
        .unwrap_or_else(|| default_berlage_decay(n, duration));
    let phi = envelope.phase();
    time.iter()
        .map(|&t| log_envelope(t, n, alpha).exp() * (2.0 * PI * frequency * t + phi).cos())
        .collect()
}

/// Natural log of the (peak-scaled) envelope; `-inf` at `t = 0` for `n > 0`.
fn log_envelope(t: f64, n: f64, alpha: f64) -> f64 {
    if n == 0.0 {
        return -alpha * t;
    }
    if t <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if alpha > 0.0 {
        let peak = n / alpha;
        n * (t / peak).ln() - alpha * (t - peak)
    } else {
        n * t.ln()
    }
}
