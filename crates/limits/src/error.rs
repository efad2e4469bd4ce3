//! Error types for the seiswave-limits crate.

use std::fmt;

/// The specific rule a candidate frequency set broke.
///
/// Indices are zero-based positions in the frequency list; messages name
/// them one-based (`f1`, `f2`, ...) to match the usual corner notation.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// A frequency is below the admissible minimum (or NaN).
    BelowMinimum {
        /// Position of the offending frequency.
        index: usize,
        /// Offending value in Hz.
        value: f64,
        /// Admissible minimum in Hz.
        min: f64,
    },
    /// A frequency is at or above the Nyquist frequency.
    AboveNyquist {
        /// Position of the offending frequency.
        index: usize,
        /// Offending value in Hz.
        value: f64,
        /// Nyquist frequency in Hz.
        nyquist: f64,
    },
    /// Two neighbouring frequencies are not strictly increasing.
    OrderingViolated {
        /// Positions `(i, i + 1)` of the offending pair.
        pair: (usize, usize),
        /// Values of the offending pair in Hz.
        values: (f64, f64),
    },
    /// The number of frequencies does not match the wavelet family.
    WrongArity {
        /// Number the family takes.
        expected: usize,
        /// Number supplied.
        got: usize,
    },
}

impl Violation {
    /// Stable machine-readable name of the violated rule.
    pub fn code(&self) -> &'static str {
        match self {
            Self::BelowMinimum { .. } => "below_minimum",
            Self::AboveNyquist { .. } => "above_nyquist",
            Self::OrderingViolated { .. } => "ordering_violated",
            Self::WrongArity { .. } => "wrong_arity",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BelowMinimum { index, value, min } => {
                write!(f, "f{} = {value} Hz is below the minimum {min} Hz", index + 1)
            }
            Self::AboveNyquist {
                index,
                value,
                nyquist,
            } => write!(
                f,
                "f{} = {value} Hz is not below the Nyquist frequency {nyquist} Hz",
                index + 1
            ),
            Self::OrderingViolated {
                pair: (a, b),
                values: (va, vb),
            } => write!(
                f,
                "f{} = {va} Hz must be strictly less than f{} = {vb} Hz",
                a + 1,
                b + 1
            ),
            Self::WrongArity { expected, got } => {
                write!(f, "expected {expected} frequency value(s), got {got}")
            }
        }
    }
}

/// Error type for all fallible operations in the seiswave-limits crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LimitsError {
    /// Returned when `dt` is not a positive finite number.
    #[error("sample interval must be a positive finite number, got {0}")]
    InvalidSampleInterval(f64),

    /// Returned when a candidate frequency breaks an admissibility rule.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// The violated rule.
        reason: Violation,
    },
}

impl From<Violation> for LimitsError {
    fn from(reason: Violation) -> Self {
        Self::InvalidParameter { reason }
    }
}
