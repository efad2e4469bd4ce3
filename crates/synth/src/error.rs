//! Error types for the seiswave-synth crate.

use seiswave_limits::{LimitsError, Violation};
use seiswave_spectrum::SpectrumError;
use seiswave_wavelet::WaveletError;

/// Error type for all fallible operations in the seiswave-synth crate.
///
/// The first two variants are caller errors and are what a front end shows
/// to the user; the rest signal a defect or an output failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when the request is structurally malformed.
    #[error("invalid specification: {reason}")]
    InvalidSpecification {
        /// Description of the violated requirement.
        reason: String,
    },

    /// Returned when a frequency breaks a Nyquist, minimum, ordering or
    /// arity rule.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// The violated rule.
        reason: Violation,
    },

    /// Returned when the spectral stage received fewer than two samples.
    ///
    /// Unreachable for a validated request.
    #[error("generated series too short for spectral analysis ({len} samples)")]
    EmptySeries {
        /// Number of samples produced.
        len: usize,
    },

    /// Wrapped numerical failure from the wavelet generator.
    #[error("wavelet generation failed")]
    Generation(#[source] WaveletError),

    /// Wrapped failure from the spectral analyzer.
    #[error("spectral analysis failed")]
    Spectrum(#[source] SpectrumError),

    /// Returned when a response cannot be serialized.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },
}

impl SynthError {
    /// Stable machine-readable error kind, used in transport responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSpecification { .. } => "invalid_specification",
            Self::InvalidParameter { .. } => "invalid_parameter",
            Self::EmptySeries { .. } => "empty_series",
            Self::Generation(_) => "generation_failed",
            Self::Spectrum(_) => "spectrum_failed",
            Self::Serialization { .. } => "serialization",
        }
    }

    /// Returns `true` for errors caused by the request rather than a defect.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpecification { .. } | Self::InvalidParameter { .. }
        )
    }
}

impl From<WaveletError> for SynthError {
    fn from(err: WaveletError) -> Self {
        match err {
            WaveletError::InvalidSpecification { reason } => Self::InvalidSpecification { reason },
            WaveletError::UnsupportedKind(_) => Self::InvalidSpecification {
                reason: err.to_string(),
            },
            other => Self::Generation(other),
        }
    }
}

impl From<LimitsError> for SynthError {
    fn from(err: LimitsError) -> Self {
        match err {
            LimitsError::InvalidParameter { reason } => Self::InvalidParameter { reason },
            LimitsError::InvalidSampleInterval(_) => Self::InvalidSpecification {
                reason: err.to_string(),
            },
        }
    }
}

impl From<SpectrumError> for SynthError {
    fn from(err: SpectrumError) -> Self {
        match err {
            SpectrumError::EmptySeries { len } => Self::EmptySeries { len },
            other => Self::Spectrum(other),
        }
    }
}
