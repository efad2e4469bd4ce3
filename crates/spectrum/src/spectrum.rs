//! One-sided amplitude spectrum via FFT.

use num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::SpectrumError;

/// Normalized one-sided magnitude spectrum of a real series.
///
/// Bins run from 0 Hz up to (and, for even lengths, including) the Nyquist
/// frequency `1 / (2*dt)`, spaced `1 / (N*dt)` apart. Magnitudes are scaled
/// so the largest is exactly 1.0; an all-zero input gives an all-zero
/// spectrum.
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum {
    frequency: Vec<f64>,
    magnitude: Vec<f64>,
    n_samples: usize,
    dt: f64,
}

impl Spectrum {
    /// Returns the frequency of each bin in Hz.
    pub fn frequency(&self) -> &[f64] {
        &self.frequency
    }

    /// Returns the normalized magnitude of each bin.
    pub fn magnitude(&self) -> &[f64] {
        &self.magnitude
    }

    /// Returns the number of bins (`N/2 + 1`).
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    /// Returns `true` if the spectrum holds no bins.
    ///
    /// Note: a computed spectrum always holds at least two bins.
    pub fn is_empty(&self) -> bool {
        self.magnitude.is_empty()
    }

    /// Returns the length of the analysed series.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the Nyquist frequency `1 / (2*dt)` in Hz.
    pub fn nyquist(&self) -> f64 {
        0.5 / self.dt
    }

    /// Returns the bin spacing `1 / (N*dt)` in Hz.
    pub fn resolution(&self) -> f64 {
        1.0 / (self.n_samples as f64 * self.dt)
    }

    /// Returns the frequency of the strongest bin (lowest such bin on ties).
    pub fn peak_frequency(&self) -> f64 {
        let mut best = 0;
        for (k, &m) in self.magnitude.iter().enumerate() {
            if m > self.magnitude[best] {
                best = k;
            }
        }
        self.frequency[best]
    }

    /// Consumes self and returns `(frequency, magnitude)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.frequency, self.magnitude)
    }
}

/// Computes the normalized one-sided magnitude spectrum of `samples`.
///
/// The full complex DFT is taken with `rustfft` (unnormalized), the
/// non-negative-frequency half `k = 0..=N/2` is kept, and `|X_k|` is divided
/// by its maximum.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SpectrumError::EmptySeries`] | fewer than 2 samples |
/// | [`SpectrumError::InvalidSampleInterval`] | `dt <= 0` or non-finite |
/// | [`SpectrumError::NonFiniteData`] | any sample is NaN or infinite |
pub fn analyze(samples: &[f64], dt: f64) -> Result<Spectrum, SpectrumError> {
    let n = samples.len();
    if n < 2 {
        return Err(SpectrumError::EmptySeries { len: n });
    }
    if !dt.is_finite() || dt <= 0.0 {
        return Err(SpectrumError::InvalidSampleInterval(dt));
    }
    if !samples.iter().all(|v| v.is_finite()) {
        return Err(SpectrumError::NonFiniteData);
    }

    let mut buffer: Vec<Complex<f64>> = samples.iter().map(|&x| Complex::new(x, 0.0)).collect();
    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let n_bins = n / 2 + 1;
    let mut magnitude: Vec<f64> = buffer[..n_bins].iter().map(|c| c.norm()).collect();
    let max = magnitude.iter().fold(0.0_f64, |m, &v| m.max(v));
    if max > 0.0 {
        for m in &mut magnitude {
            *m /= max;
        }
    }

    let df = 1.0 / (n as f64 * dt);
    let frequency = (0..n_bins).map(|k| k as f64 * df).collect();

    Ok(Spectrum {
        frequency,
        magnitude,
        n_samples: n,
        dt,
    })
}
