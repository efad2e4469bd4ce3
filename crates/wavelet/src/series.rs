//! Generated wavelet time series.

use crate::error::WaveletError;

/// A sampled wavelet: time axis, amplitudes and sample interval.
///
/// Guarantees:
/// - `time.len() == amplitude.len()`
/// - all amplitudes are finite (no NaN or infinity)
///
/// Only produced by [`generate`](crate::generate).
///
/// # Example
///
/// ```ignore
/// use seiswave_wavelet::{Wavelet, WaveletSpec, generate};
///
/// let ts = generate(&WaveletSpec::new(Wavelet::ricker(60.0), 0.5, 0.001))?;
/// assert_eq!(ts.len(), 501);
/// assert_eq!(ts.amplitude()[250], 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    time: Vec<f64>,
    amplitude: Vec<f64>,
    dt: f64,
}

impl TimeSeries {
    /// Creates a new `TimeSeries` after validating the data.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveletError::LengthMismatch`] | `time.len() != amplitude.len()` |
    /// | [`WaveletError::NonFiniteAmplitude`] | any amplitude is NaN or infinite |
    pub(crate) fn new(time: Vec<f64>, amplitude: Vec<f64>, dt: f64) -> Result<Self, WaveletError> {
        if time.len() != amplitude.len() {
            return Err(WaveletError::LengthMismatch {
                time: time.len(),
                amplitude: amplitude.len(),
            });
        }
        if let Some(index) = amplitude.iter().position(|a| !a.is_finite()) {
            return Err(WaveletError::NonFiniteAmplitude {
                index,
                time: time[index],
            });
        }
        Ok(Self {
            time,
            amplitude,
            dt,
        })
    }

    /// Returns the time axis in seconds.
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// Returns the amplitude samples.
    pub fn amplitude(&self) -> &[f64] {
        &self.amplitude
    }

    /// Returns the sample interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.amplitude.len()
    }

    /// Returns `true` if the series holds no samples.
    ///
    /// Note: a generated series always holds at least two samples.
    pub fn is_empty(&self) -> bool {
        self.amplitude.is_empty()
    }

    /// Returns the largest absolute amplitude (0.0 for an all-zero series).
    pub fn peak_amplitude(&self) -> f64 {
        self.amplitude.iter().fold(0.0_f64, |m, a| m.max(a.abs()))
    }

    /// Consumes self and returns `(time, amplitude)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.time, self.amplitude)
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.amplitude
    }
}
