//! Wavelet family definitions.

use std::fmt;

use crate::error::WaveletError;

/// The four supported seismic source wavelet families.
///
/// Ricker, Ormsby and Klauder are zero-phase and sampled on a symmetric
/// time axis; Berlage is causal and sampled from `t = 0`.
///
/// # Example
///
/// ```ignore
/// use seiswave_wavelet::WaveletKind;
///
/// let kind = WaveletKind::Ormsby;
/// assert_eq!(kind.n_frequencies(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WaveletKind {
    /// Ricker (Mexican hat) wavelet, one peak frequency.
    Ricker,
    /// Ormsby trapezoidal band-pass wavelet, four corner frequencies.
    Ormsby,
    /// Klauder wavelet (autocorrelation of a linear sweep), two frequencies.
    Klauder,
    /// Berlage causal wavelet, one frequency plus envelope extras.
    Berlage,
}

impl Default for WaveletKind {
    /// Returns `WaveletKind::Ricker` as the default family.
    fn default() -> Self {
        Self::Ricker
    }
}

impl WaveletKind {
    /// All families, in display order.
    pub const ALL: [WaveletKind; 4] = [Self::Ricker, Self::Ormsby, Self::Klauder, Self::Berlage];

    /// Returns how many frequency parameters this family takes.
    pub fn n_frequencies(&self) -> usize {
        match self {
            Self::Ricker => 1,
            Self::Ormsby => 4,
            Self::Klauder => 2,
            Self::Berlage => 1,
        }
    }

    /// Returns `true` for families sampled on `[-duration/2, duration/2]`.
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, Self::Berlage)
    }

    /// Returns the canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ricker => "Ricker",
            Self::Ormsby => "Ormsby",
            Self::Klauder => "Klauder",
            Self::Berlage => "Berlage",
        }
    }

    /// Parses a wavelet family from a case-insensitive name string.
    ///
    /// # Supported Names
    ///
    /// | Input | Family |
    /// |-------|--------|
    /// | `"ricker"` | [`WaveletKind::Ricker`] |
    /// | `"ormsby"` | [`WaveletKind::Ormsby`] |
    /// | `"klauder"` | [`WaveletKind::Klauder`] |
    /// | `"berlage"` | [`WaveletKind::Berlage`] |
    ///
    /// # Errors
    ///
    /// Returns [`WaveletError::UnsupportedKind`] if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, WaveletError> {
        match name.trim().to_lowercase().as_str() {
            "ricker" => Ok(Self::Ricker),
            "ormsby" => Ok(Self::Ormsby),
            "klauder" => Ok(Self::Klauder),
            "berlage" => Ok(Self::Berlage),
            _ => Err(WaveletError::UnsupportedKind(name.to_string())),
        }
    }
}

impl fmt::Display for WaveletKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
