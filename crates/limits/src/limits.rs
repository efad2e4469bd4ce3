//! Admissible frequency range for a wavelet family at a given sample interval.

use seiswave_wavelet::WaveletKind;

use crate::error::{LimitsError, Violation};

/// Lower bound as a fraction of the Nyquist frequency.
///
/// Zero frequency is degenerate for every family, so the minimum scales
/// with the sampling rather than sitting at 0 Hz.
pub const MIN_FREQUENCY_FRACTION: f64 = 1e-3;

/// Ordering constraint among a family's frequency parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderingRule {
    /// Single-frequency family, nothing to order.
    None,
    /// `f1 < f2 < ... < f_count`.
    StrictlyIncreasing {
        /// Number of frequencies in the chain.
        count: usize,
    },
}

impl OrderingRule {
    /// Returns the rule that applies to `kind`.
    pub fn for_kind(kind: WaveletKind) -> Self {
        match kind.n_frequencies() {
            0 | 1 => Self::None,
            count => Self::StrictlyIncreasing { count },
        }
    }

    /// Human-readable form, e.g. `"f1 < f2 < f3 < f4"`.
    pub fn description(&self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::StrictlyIncreasing { count } => (1..=*count)
                .map(|i| format!("f{i}"))
                .collect::<Vec<_>>()
                .join(" < "),
        }
    }

    /// Returns the first neighbouring pair that is not strictly increasing.
    fn check(&self, frequencies: &[f64]) -> Result<(), Violation> {
        if let Self::None = self {
            return Ok(());
        }
        for (i, w) in frequencies.windows(2).enumerate() {
            if w[0].is_nan() || w[1].is_nan() || w[0] >= w[1] {
                return Err(Violation::OrderingViolated {
                    pair: (i, i + 1),
                    values: (w[0], w[1]),
                });
            }
        }
        Ok(())
    }
}

/// Admissible frequency range for one wavelet family and sample interval.
///
/// Computed from `(kind, dt)` alone; it does not depend on any particular
/// request.
///
/// # Example
///
/// ```ignore
/// use seiswave_limits::FrequencyLimits;
/// use seiswave_wavelet::WaveletKind;
///
/// let limits = FrequencyLimits::new(WaveletKind::Ricker, 0.001)?;
/// assert_eq!(limits.max(), 500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrequencyLimits {
    kind: WaveletKind,
    dt: f64,
    min: f64,
    max: f64,
    ordering: OrderingRule,
}

impl FrequencyLimits {
    /// Computes the limits for `kind` sampled every `dt` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`LimitsError::InvalidSampleInterval`] if `dt` is not a
    /// positive finite number.
    pub fn new(kind: WaveletKind, dt: f64) -> Result<Self, LimitsError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(LimitsError::InvalidSampleInterval(dt));
        }
        let nyquist = 0.5 / dt;
        Ok(Self {
            kind,
            dt,
            min: nyquist * MIN_FREQUENCY_FRACTION,
            max: nyquist,
            ordering: OrderingRule::for_kind(kind),
        })
    }

    /// Returns the wavelet family.
    pub fn kind(&self) -> WaveletKind {
        self.kind
    }

    /// Returns the sample interval in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Returns the smallest admissible frequency in Hz.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the exclusive upper bound in Hz (the Nyquist frequency).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns the Nyquist frequency `1 / (2*dt)` in Hz.
    pub fn nyquist(&self) -> f64 {
        self.max
    }

    /// Returns the ordering constraint.
    pub fn ordering(&self) -> OrderingRule {
        self.ordering
    }

    /// Returns `true` if `frequency` lies in `[min, nyquist)`.
    pub fn contains(&self, frequency: f64) -> bool {
        frequency >= self.min && frequency < self.max
    }

    /// Classifies a candidate frequency list.
    ///
    /// Checks, in order: arity, each value against `[min, nyquist)` in
    /// position order, then the ordering rule. The first violation found is
    /// returned.
    pub fn check(&self, frequencies: &[f64]) -> Result<(), Violation> {
        let expected = self.kind.n_frequencies();
        if frequencies.len() != expected {
            return Err(Violation::WrongArity {
                expected,
                got: frequencies.len(),
            });
        }
        for (index, &value) in frequencies.iter().enumerate() {
            if value.is_nan() || value < self.min {
                return Err(Violation::BelowMinimum {
                    index,
                    value,
                    min: self.min,
                });
            }
            if value >= self.max {
                return Err(Violation::AboveNyquist {
                    index,
                    value,
                    nyquist: self.max,
                });
            }
        }
        self.ordering.check(frequencies)
    }
}

/// Computes the admissible frequency range for `kind` at sample interval `dt`.
///
/// # Errors
///
/// Returns [`LimitsError::InvalidSampleInterval`] if `dt` is not a positive
/// finite number.
pub fn frequency_limits(kind: WaveletKind, dt: f64) -> Result<FrequencyLimits, LimitsError> {
    FrequencyLimits::new(kind, dt)
}

/// Validates candidate frequencies for `kind` at sample interval `dt`.
///
/// Pure classification: never panics and never alters the input.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`LimitsError::InvalidSampleInterval`] | `dt <= 0` or non-finite |
/// | [`LimitsError::InvalidParameter`] | any rule in [`FrequencyLimits::check`] fails |
pub fn validate(kind: WaveletKind, dt: f64, frequencies: &[f64]) -> Result<(), LimitsError> {
    FrequencyLimits::new(kind, dt)?.check(frequencies)?;
    Ok(())
}
