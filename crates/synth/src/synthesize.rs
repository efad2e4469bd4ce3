//! End-to-end synthesis: validate, generate, analyze.

use rayon::prelude::*;
use seiswave_spectrum::{Spectrum, analyze};
use seiswave_wavelet::{TimeSeries, WaveletSpec, generate};

use crate::error::SynthError;

/// A generated wavelet together with its normalized amplitude spectrum.
///
/// Both halves come from the same request; a failed request produces
/// neither.
#[derive(Clone, Debug, PartialEq)]
pub struct Synthesis {
    series: TimeSeries,
    spectrum: Spectrum,
}

impl Synthesis {
    /// Returns the time-domain wavelet.
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    /// Returns the amplitude spectrum of the wavelet.
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    /// Returns the wavelet as an audio buffer.
    ///
    /// Samples are scaled so that the largest absolute value is 1; an
    /// all-zero series is returned unchanged. The sample rate is
    /// `round(1 / dt)` Hz, at least 1.
    pub fn playback(&self) -> Playback {
        let peak = self.series.peak_amplitude();
        let samples = if peak > 0.0 {
            self.series.amplitude().iter().map(|a| a / peak).collect()
        } else {
            self.series.amplitude().to_vec()
        };
        Playback {
            samples,
            sample_rate: ((1.0 / self.series.dt()).round() as u32).max(1),
        }
    }

    /// Consumes self and returns `(series, spectrum)`.
    pub fn into_parts(self) -> (TimeSeries, Spectrum) {
        (self.series, self.spectrum)
    }
}

/// Peak-normalized samples ready for audio output.
#[derive(Clone, Debug, PartialEq)]
pub struct Playback {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl Playback {
    /// Returns the normalized samples in `[-1, 1]`.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Synthesizes a wavelet and its spectrum from a request.
///
/// Stages run in a fixed order and the first failure wins:
///
/// 1. structural check of the request
/// 2. frequency limits for the wavelet family at `dt`
/// 3. waveform generation
/// 4. amplitude spectrum
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`SynthError::InvalidSpecification`] | malformed duration, dt, frequency or Berlage extras |
/// | [`SynthError::InvalidParameter`] | frequency at/above Nyquist, below minimum, out of order |
/// | [`SynthError::Generation`] | non-finite samples (a defect) |
/// | [`SynthError::EmptySeries`] | fewer than 2 samples reached the analyzer (a defect) |
#[tracing::instrument(skip_all, fields(kind = %spec.kind(), duration = spec.duration(), dt = spec.dt()))]
pub fn synthesize(spec: &WaveletSpec) -> Result<Synthesis, SynthError> {
    spec.validate()?;
    seiswave_limits::validate(spec.kind(), spec.dt(), spec.frequencies())?;

    let series = generate(spec)?;
    let spectrum = analyze(series.amplitude(), series.dt())?;

    Ok(Synthesis { series, spectrum })
}

/// Synthesizes independent requests in parallel.
///
/// Returns one result per request, in input order. A failing request does
/// not affect the others.
#[tracing::instrument(skip_all, fields(n_requests = specs.len()))]
pub fn synthesize_batch(specs: &[WaveletSpec]) -> Vec<Result<Synthesis, SynthError>> {
    specs.par_iter().map(synthesize).collect()
}
