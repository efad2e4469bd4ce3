//! Time-axis construction shared by every wavelet family.

/// Symmetric axis `t_i = (i - (n-1)/2) * dt` for `i = 0..n`.
///
/// For odd `n` the centre sample is exactly `0.0`, and `t[i] == -t[n-1-i]`
/// holds bit-for-bit because both sides are built from the same integer
/// (or half-integer) offset.
pub(crate) fn symmetric_axis(n: usize, dt: f64) -> Vec<f64> {
    let half = n.saturating_sub(1) as f64 / 2.0;
    (0..n).map(|i| (i as f64 - half) * dt).collect()
}

/// Causal axis `t_i = i * dt` for `i = 0..n`.
pub(crate) fn causal_axis(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dt).collect()
}
