//! Error types for the seiswave-spectrum crate.

/// Error type for spectral analysis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectrumError {
    /// Returned when the input series holds fewer than two samples.
    #[error("series too short for spectral analysis: got {len} samples, need at least 2")]
    EmptySeries {
        /// Number of samples provided.
        len: usize,
    },

    /// Returned when the sample interval is not a positive finite number.
    #[error("sample interval must be a positive finite number, got {0}")]
    InvalidSampleInterval(f64),

    /// Returned when the input contains NaN or infinity.
    #[error("input series contains non-finite values")]
    NonFiniteData,
}
