//! Ormsby trapezoidal band-pass wavelet.

use std::f64::consts::PI;

/// Normalized sinc, `sin(pi*x) / (pi*x)`, with the removable point `sinc(0) = 1`.
pub(crate) fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Evaluates the Ormsby wavelet for corners `[f1, f2, f3, f4]`.
///
/// ```text
/// a(t) = (pi*f4^2*sinc^2(f4 t) - pi*f3^2*sinc^2(f3 t)) / (f4 - f3)
///      - (pi*f2^2*sinc^2(f2 t) - pi*f1^2*sinc^2(f1 t)) / (f2 - f1)
/// ```
///
/// Corners must be strictly increasing; equal neighbours divide by zero and
/// surface later as a non-finite amplitude.
pub(crate) fn ormsby(time: &[f64], corners: [f64; 4]) -> Vec<f64> {
    let [f1, f2, f3, f4] = corners;
    let term = |f: f64, t: f64| PI * f * f * sinc(f * t).powi(2);
    time.iter()
        .map(|&t| {
            (term(f4, t) - term(f3, t)) / (f4 - f3) - (term(f2, t) - term(f1, t)) / (f2 - f1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sinc_limit_and_zeros() {
        assert_eq!(sinc(0.0), 1.0);
        assert_relative_eq!(sinc(1.0), 0.0, epsilon = 1e-15);
        assert_relative_eq!(sinc(0.5), 2.0 / PI, epsilon = 1e-15);
    }

    #[test]
    fn origin_value_is_analytic() {
        // At t = 0: pi*(f4 + f3) - pi*(f2 + f1)
        let a = ormsby(&[0.0], [30.0, 40.0, 90.0, 100.0]);
        assert_relative_eq!(a[0], PI * (190.0 - 70.0), epsilon = 1e-9);
    }

    #[test]
    fn origin_is_the_maximum() {
        let time: Vec<f64> = (-50..=50).map(|i| i as f64 * 0.001).collect();
        let a = ormsby(&time, [30.0, 40.0, 90.0, 100.0]);
        let centre = a[50];
        assert!(a.iter().all(|&v| v <= centre));
    }

    #[test]
    fn equal_corners_are_not_finite() {
        let a = ormsby(&[0.01], [30.0, 30.0, 90.0, 100.0]);
        assert!(!a[0].is_finite());
    }
}
