//! JSON response structures for front ends.

use serde::Serialize;
use seiswave_limits::FrequencyLimits;
use seiswave_wavelet::{Wavelet, WaveletSpec, default_berlage_decay};

use crate::error::SynthError;
use crate::synthesize::Synthesis;

/// Successful response to a generate request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Wavelet family name.
    pub kind: String,
    /// Frequency parameters in Hz.
    pub frequencies: Vec<f64>,
    pub duration: f64,
    pub dt: f64,
    /// Berlage envelope parameters as used, with the decay resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub berlage: Option<BerlageOutput>,
    /// Time axis in seconds.
    pub time: Vec<f64>,
    pub amplitude: Vec<f64>,
    /// Spectrum frequency axis in Hz, 0 to Nyquist.
    pub frequency: Vec<f64>,
    /// Normalized amplitude spectrum.
    pub magnitude: Vec<f64>,
    pub sample_rate: u32,
    /// Peak-normalized playback samples.
    pub audio: Vec<f64>,
}

/// Berlage envelope parameters.
#[derive(Debug, Clone, Serialize)]
pub struct BerlageOutput {
    pub exponent: f64,
    pub decay: f64,
    pub phase: f64,
}

impl GenerateResponse {
    /// Builds the response for `spec` from its synthesis result.
    pub fn new(spec: &WaveletSpec, synthesis: &Synthesis) -> Self {
        let berlage = match spec.wavelet() {
            Wavelet::Berlage { envelope, .. } => Some(BerlageOutput {
                exponent: envelope.exponent(),
                decay: envelope
                    .decay()
                    .unwrap_or_else(|| default_berlage_decay(envelope.exponent(), spec.duration())),
                phase: envelope.phase(),
            }),
            _ => None,
        };
        let playback = synthesis.playback();
        Self {
            kind: spec.kind().to_string(),
            frequencies: spec.frequencies().to_vec(),
            duration: spec.duration(),
            dt: spec.dt(),
            berlage,
            time: synthesis.series().time().to_vec(),
            amplitude: synthesis.series().amplitude().to_vec(),
            frequency: synthesis.spectrum().frequency().to_vec(),
            magnitude: synthesis.spectrum().magnitude().to_vec(),
            sample_rate: playback.sample_rate(),
            audio: playback.samples().to_vec(),
        }
    }
}

/// Response to a frequency-limits request.
#[derive(Debug, Clone, Serialize)]
pub struct LimitsResponse {
    pub kind: String,
    pub dt: f64,
    /// Smallest admissible frequency in Hz.
    pub min: f64,
    /// Exclusive upper bound in Hz (the Nyquist frequency).
    pub max: f64,
    pub n_frequencies: usize,
    /// Ordering rule, e.g. `"f1 < f2"`.
    pub ordering: String,
}

impl From<&FrequencyLimits> for LimitsResponse {
    fn from(limits: &FrequencyLimits) -> Self {
        Self {
            kind: limits.kind().to_string(),
            dt: limits.dt(),
            min: limits.min(),
            max: limits.max(),
            n_frequencies: limits.kind().n_frequencies(),
            ordering: limits.ordering().description(),
        }
    }
}

/// Failure response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind, see [`SynthError::kind`].
    pub error: String,
    /// Rule name for parameter violations, e.g. `"above_nyquist"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
    /// Human-readable description.
    pub reason: String,
}

impl From<&SynthError> for ErrorResponse {
    fn from(err: &SynthError) -> Self {
        let (violation, reason) = match err {
            SynthError::InvalidSpecification { reason } => (None, reason.clone()),
            SynthError::InvalidParameter { reason } => {
                (Some(reason.code().to_string()), reason.to_string())
            }
            other => (None, other.to_string()),
        };
        Self {
            error: err.kind().to_string(),
            violation,
            reason,
        }
    }
}

/// Serializes a response to pretty-printed JSON.
///
/// # Errors
///
/// Returns [`SynthError::Serialization`] if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SynthError> {
    serde_json::to_string_pretty(value).map_err(|e| SynthError::Serialization {
        reason: e.to_string(),
    })
}
