//! Ricker (Mexican hat) wavelet.

use std::f64::consts::PI;

/// Evaluates `(1 - 2*pi^2*f^2*t^2) * exp(-pi^2*f^2*t^2)` on the given axis.
pub(crate) fn ricker(time: &[f64], frequency: f64) -> Vec<f64> {
    time.iter()
        .map(|&t| {
            let x = (PI * frequency * t).powi(2);
            (1.0 - 2.0 * x) * (-x).exp()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn peak_is_one_at_origin() {
        for f in [5.0, 25.0, 60.0, 250.0] {
            assert_eq!(ricker(&[0.0], f)[0], 1.0);
        }
    }

    #[test]
    fn zero_crossing_at_expected_time() {
        // 1 - 2*pi^2*f^2*t^2 = 0  =>  t = 1 / (sqrt(2) * pi * f)
        let f = 30.0;
        let t0 = 1.0 / (2.0_f64.sqrt() * PI * f);
        assert_relative_eq!(ricker(&[t0], f)[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn side_lobes_are_negative() {
        let f = 30.0;
        let t_min = (1.5_f64).sqrt() / (PI * f);
        let a = ricker(&[t_min], f)[0];
        assert_relative_eq!(a, -2.0 * (-1.5_f64).exp(), epsilon = 1e-12);
    }
}
