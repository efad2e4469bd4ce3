//! Wavelet specification: family parameters, duration and sample interval.

use crate::error::WaveletError;
use crate::kind::WaveletKind;

/// Envelope extras for the Berlage wavelet.
///
/// `a(t) = t^n * exp(-alpha * t) * cos(2*pi*f*t + phi)`
///
/// Defaults: `n = 2`, `phi = 0`, `alpha = None` (solved from the duration so
/// the envelope decays to a small fraction of its peak at the last sample).
///
/// # Example
///
/// ```ignore
/// use seiswave_wavelet::BerlageEnvelope;
///
/// let env = BerlageEnvelope::new()
///     .with_exponent(3.0)
///     .with_decay(40.0)
///     .with_phase(-std::f64::consts::FRAC_PI_2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BerlageEnvelope {
    exponent: f64,
    decay: Option<f64>,
    phase: f64,
}

impl BerlageEnvelope {
    /// Creates an envelope with default extras.
    pub fn new() -> Self {
        Self {
            exponent: 2.0,
            decay: None,
            phase: 0.0,
        }
    }

    /// Sets the time exponent `n` (must be >= 0).
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Sets the exponential decay `alpha` in 1/s (must be >= 0).
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = Some(decay);
        self
    }

    /// Sets the phase `phi` in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.phase = phase;
        self
    }

    /// Returns the time exponent `n`.
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the decay `alpha`, if set explicitly.
    pub fn decay(&self) -> Option<f64> {
        self.decay
    }

    /// Returns the phase `phi` in radians.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    fn validate(&self) -> Result<(), WaveletError> {
        if !self.exponent.is_finite() || self.exponent < 0.0 {
            return Err(WaveletError::invalid(format!(
                "Berlage exponent must be >= 0, got {}",
                self.exponent
            )));
        }
        if let Some(alpha) = self.decay
            && (!alpha.is_finite() || alpha < 0.0)
        {
            return Err(WaveletError::invalid(format!(
                "Berlage decay must be >= 0, got {alpha}"
            )));
        }
        if !self.phase.is_finite() {
            return Err(WaveletError::invalid("Berlage phase must be finite"));
        }
        Ok(())
    }
}

impl Default for BerlageEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

/// A wavelet family together with its frequency parameters.
///
/// The variant fixes the number of frequencies, so a Ricker request can
/// never carry four corners and an Ormsby request can never carry one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wavelet {
    /// Ricker wavelet with peak frequency in Hz.
    Ricker {
        /// Peak frequency in Hz.
        frequency: f64,
    },
    /// Ormsby wavelet with corners `[f1, f2, f3, f4]` in Hz.
    Ormsby {
        /// Corner frequencies in Hz.
        corners: [f64; 4],
    },
    /// Klauder wavelet with sweep band `[f1, f2]` in Hz.
    Klauder {
        /// Sweep start and end frequencies in Hz.
        band: [f64; 2],
    },
    /// Berlage wavelet with carrier frequency in Hz.
    Berlage {
        /// Carrier frequency in Hz.
        frequency: f64,
        /// Envelope extras.
        envelope: BerlageEnvelope,
    },
}

impl Wavelet {
    /// Ricker wavelet at `frequency` Hz.
    pub fn ricker(frequency: f64) -> Self {
        Self::Ricker { frequency }
    }

    /// Ormsby wavelet with corners `f1 < f2 < f3 < f4`.
    pub fn ormsby(f1: f64, f2: f64, f3: f64, f4: f64) -> Self {
        Self::Ormsby {
            corners: [f1, f2, f3, f4],
        }
    }

    /// Klauder wavelet sweeping from `f1` to `f2`.
    pub fn klauder(f1: f64, f2: f64) -> Self {
        Self::Klauder { band: [f1, f2] }
    }

    /// Berlage wavelet at `frequency` Hz with default envelope.
    pub fn berlage(frequency: f64) -> Self {
        Self::Berlage {
            frequency,
            envelope: BerlageEnvelope::default(),
        }
    }

    /// Berlage wavelet at `frequency` Hz with explicit envelope extras.
    pub fn berlage_with(frequency: f64, envelope: BerlageEnvelope) -> Self {
        Self::Berlage {
            frequency,
            envelope,
        }
    }

    /// Builds a wavelet of the given family from a flat frequency list.
    ///
    /// Berlage uses the default envelope; see [`Wavelet::berlage_with`].
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::InvalidSpecification`] if `frequencies` does not
    /// have exactly [`WaveletKind::n_frequencies`] entries.
    pub fn from_frequencies(kind: WaveletKind, frequencies: &[f64]) -> Result<Self, WaveletError> {
        let expected = kind.n_frequencies();
        if frequencies.len() != expected {
            return Err(WaveletError::invalid(format!(
                "{kind} takes {expected} frequency value(s), got {}",
                frequencies.len()
            )));
        }
        let f = frequencies;
        Ok(match kind {
            WaveletKind::Ricker => Self::ricker(f[0]),
            WaveletKind::Ormsby => Self::ormsby(f[0], f[1], f[2], f[3]),
            WaveletKind::Klauder => Self::klauder(f[0], f[1]),
            WaveletKind::Berlage => Self::berlage(f[0]),
        })
    }

    /// Returns the family of this wavelet.
    pub fn kind(&self) -> WaveletKind {
        match self {
            Self::Ricker { .. } => WaveletKind::Ricker,
            Self::Ormsby { .. } => WaveletKind::Ormsby,
            Self::Klauder { .. } => WaveletKind::Klauder,
            Self::Berlage { .. } => WaveletKind::Berlage,
        }
    }

    /// Returns the frequency parameters in Hz, in their canonical order.
    pub fn frequencies(&self) -> &[f64] {
        match self {
            Self::Ricker { frequency } | Self::Berlage { frequency, .. } => {
                std::slice::from_ref(frequency)
            }
            Self::Ormsby { corners } => corners,
            Self::Klauder { band } => band,
        }
    }
}

/// A complete, immutable request for one synthetic wavelet.
///
/// Fully determines the generated [`TimeSeries`](crate::TimeSeries).
///
/// # Example
///
/// ```ignore
/// use seiswave_wavelet::{Wavelet, WaveletSpec};
///
/// let spec = WaveletSpec::new(Wavelet::ricker(60.0), 0.5, 0.001);
/// spec.validate()?;
/// assert_eq!(spec.n_samples(), 501);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveletSpec {
    wavelet: Wavelet,
    duration: f64,
    dt: f64,
}

impl WaveletSpec {
    /// Creates a new specification. Call [`WaveletSpec::validate`] (or let
    /// [`generate`](crate::generate) do it) before relying on the values.
    pub fn new(wavelet: Wavelet, duration: f64, dt: f64) -> Self {
        Self {
            wavelet,
            duration,
            dt,
        }
    }

    /// Returns the wavelet family and parameters.
    pub fn wavelet(&self) -> &Wavelet {
        &self.wavelet
    }

    /// Returns the wavelet family.
    pub fn kind(&self) -> WaveletKind {
        self.wavelet.kind()
    }

    /// Returns the frequency parameters in Hz.
    pub fn frequencies(&self) -> &[f64] {
        self.wavelet.frequencies()
    }

    /// Returns the duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the sample interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples on the time axis: `round(duration / dt) + 1`.
    ///
    /// Only meaningful for a validated spec.
    pub fn n_samples(&self) -> usize {
        ((self.duration / self.dt).round() as usize).saturating_add(1)
    }

    /// Checks the structural requirements of the request.
    ///
    /// Ordering and Nyquist bounds are not checked here; they belong to the
    /// frequency-limits validator.
    ///
    /// # Errors
    ///
    /// | Trigger | Variant |
    /// |---------|---------|
    /// | `duration <= 0` or non-finite | [`WaveletError::InvalidSpecification`] |
    /// | `dt <= 0` or non-finite | [`WaveletError::InvalidSpecification`] |
    /// | `dt >= duration` | [`WaveletError::InvalidSpecification`] |
    /// | any frequency `<= 0` or non-finite | [`WaveletError::InvalidSpecification`] |
    /// | Berlage `n < 0` or `alpha < 0` | [`WaveletError::InvalidSpecification`] |
    pub fn validate(&self) -> Result<(), WaveletError> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(WaveletError::invalid(format!(
                "duration must be > 0, got {}",
                self.duration
            )));
        }
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(WaveletError::invalid(format!(
                "dt must be > 0, got {}",
                self.dt
            )));
        }
        if self.dt >= self.duration {
            return Err(WaveletError::invalid(format!(
                "dt ({}) must be smaller than duration ({})",
                self.dt, self.duration
            )));
        }
        for (i, &f) in self.frequencies().iter().enumerate() {
            if !f.is_finite() || f <= 0.0 {
                return Err(WaveletError::invalid(format!(
                    "frequency {} must be > 0, got {f}",
                    i + 1
                )));
            }
        }
        if let Wavelet::Berlage { envelope, .. } = &self.wavelet {
            envelope.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequencies_follow_variant() {
        assert_eq!(Wavelet::ricker(60.0).frequencies(), &[60.0]);
        assert_eq!(
            Wavelet::ormsby(30.0, 40.0, 90.0, 100.0).frequencies(),
            &[30.0, 40.0, 90.0, 100.0]
        );
        assert_eq!(Wavelet::klauder(40.0, 90.0).frequencies(), &[40.0, 90.0]);
        assert_eq!(Wavelet::berlage(60.0).frequencies(), &[60.0]);
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Wavelet::ricker(1.0).kind(), WaveletKind::Ricker);
        assert_eq!(
            Wavelet::ormsby(1.0, 2.0, 3.0, 4.0).kind(),
            WaveletKind::Ormsby
        );
        assert_eq!(Wavelet::klauder(1.0, 2.0).kind(), WaveletKind::Klauder);
        assert_eq!(Wavelet::berlage(1.0).kind(), WaveletKind::Berlage);
    }

    #[test]
    fn from_frequencies_checks_arity() {
        let w = Wavelet::from_frequencies(WaveletKind::Klauder, &[40.0, 90.0]).unwrap();
        assert_eq!(w, Wavelet::klauder(40.0, 90.0));

        let err = Wavelet::from_frequencies(WaveletKind::Ormsby, &[30.0, 40.0]).unwrap_err();
        assert!(matches!(err, WaveletError::InvalidSpecification { .. }));
    }

    #[test]
    fn envelope_defaults() {
        let env = BerlageEnvelope::default();
        assert_eq!(env.exponent(), 2.0);
        assert_eq!(env.decay(), None);
        assert_eq!(env.phase(), 0.0);
    }

    #[test]
    fn n_samples_rounds() {
        let spec = WaveletSpec::new(Wavelet::ricker(60.0), 0.5, 0.001);
        assert_eq!(spec.n_samples(), 501);
        let spec = WaveletSpec::new(Wavelet::ricker(60.0), 0.3, 0.004);
        assert_eq!(spec.n_samples(), 76);
    }

    #[test]
    fn validate_accepts_typical_request() {
        let spec = WaveletSpec::new(Wavelet::ormsby(30.0, 40.0, 90.0, 100.0), 0.5, 0.001);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn validate_rejects_structural_problems() {
        let bad = [
            WaveletSpec::new(Wavelet::ricker(60.0), 0.0, 0.001),
            WaveletSpec::new(Wavelet::ricker(60.0), -1.0, 0.001),
            WaveletSpec::new(Wavelet::ricker(60.0), 0.5, 0.0),
            WaveletSpec::new(Wavelet::ricker(60.0), 0.5, f64::NAN),
            WaveletSpec::new(Wavelet::ricker(60.0), 0.5, 0.5),
            WaveletSpec::new(Wavelet::ricker(0.0), 0.5, 0.001),
            WaveletSpec::new(Wavelet::klauder(40.0, -90.0), 0.5, 0.001),
            WaveletSpec::new(
                Wavelet::berlage_with(60.0, BerlageEnvelope::new().with_exponent(-1.0)),
                0.5,
                0.001,
            ),
            WaveletSpec::new(
                Wavelet::berlage_with(60.0, BerlageEnvelope::new().with_decay(-5.0)),
                0.5,
                0.001,
            ),
        ];
        for spec in bad {
            let err = spec.validate().unwrap_err();
            assert!(
                matches!(err, WaveletError::InvalidSpecification { .. }),
                "expected InvalidSpecification for {spec:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn validate_ignores_ordering() {
        // Ordering is the limits validator's job.
        let spec = WaveletSpec::new(Wavelet::ormsby(40.0, 30.0, 90.0, 100.0), 0.5, 0.001);
        assert!(spec.validate().is_ok());
    }
}
