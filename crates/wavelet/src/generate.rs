//! Dispatch from a [`WaveletSpec`] to the family evaluators.

use crate::axis::{causal_axis, symmetric_axis};
use crate::berlage::berlage;
use crate::error::WaveletError;
use crate::klauder::klauder;
use crate::ormsby::ormsby;
use crate::ricker::ricker;
use crate::series::TimeSeries;
use crate::spec::{Wavelet, WaveletSpec};

/// Generates the sampled wavelet described by `spec`.
///
/// Ricker, Ormsby and Klauder are sampled on the symmetric axis
/// `[-duration/2, duration/2]`; Berlage on the causal axis `[0, duration]`.
/// Both axes hold `round(duration / dt) + 1` samples. Ordering and Nyquist
/// bounds are not checked here.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WaveletError::InvalidSpecification`] | [`WaveletSpec::validate`] fails |
/// | [`WaveletError::NonFiniteAmplitude`] | evaluation produced NaN or infinity |
pub fn generate(spec: &WaveletSpec) -> Result<TimeSeries, WaveletError> {
    spec.validate()?;

    let n = spec.n_samples();
    let dt = spec.dt();
    let time = if spec.kind().is_symmetric() {
        symmetric_axis(n, dt)
    } else {
        causal_axis(n, dt)
    };

    let amplitude = match spec.wavelet() {
        Wavelet::Ricker { frequency } => ricker(&time, *frequency),
        Wavelet::Ormsby { corners } => ormsby(&time, *corners),
        Wavelet::Klauder { band } => klauder(&time, *band, spec.duration()),
        Wavelet::Berlage {
            frequency,
            envelope,
        } => berlage(&time, *frequency, envelope, spec.duration()),
    };

    TimeSeries::new(time, amplitude, dt)
}
