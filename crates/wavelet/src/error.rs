//! Error types for the seiswave-wavelet crate.

/// Error type for all fallible operations in the seiswave-wavelet crate.
///
/// Covers structurally invalid wavelet specifications and numerical
/// failures during evaluation of the closed-form generators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveletError {
    /// Returned when the request itself is malformed (non-positive duration,
    /// sample interval or frequency, `dt >= duration`, negative Berlage extras,
    /// or non-finite inputs).
    #[error("invalid specification: {reason}")]
    InvalidSpecification {
        /// Human-readable description of the violated requirement.
        reason: String,
    },

    /// Returned when evaluating the wavelet produced NaN or infinity.
    #[error("non-finite amplitude at sample {index} (t = {time})")]
    NonFiniteAmplitude {
        /// Index of the first offending sample.
        index: usize,
        /// Time of the first offending sample in seconds.
        time: f64,
    },

    /// Returned when time and amplitude sequences have different lengths.
    #[error("length mismatch: {time} time samples, {amplitude} amplitude samples")]
    LengthMismatch {
        /// Number of time samples.
        time: usize,
        /// Number of amplitude samples.
        amplitude: usize,
    },

    /// Returned when an unsupported wavelet family name is provided.
    #[error("unsupported wavelet type: {0}")]
    UnsupportedKind(String),
}

impl WaveletError {
    /// Shorthand for building an [`WaveletError::InvalidSpecification`].
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidSpecification {
            reason: reason.into(),
        }
    }
}
