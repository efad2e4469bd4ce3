//! # seiswave-spectrum
//!
//! Frequency-domain view of a sampled wavelet: one-sided FFT magnitude,
//! normalized to a unit peak for comparison across wavelet families.
//!
//! ## Quick Start
//!
//! ```ignore
//! use seiswave_spectrum::analyze;
//!
//! let spectrum = analyze(&amplitude, 0.001)?;
//! println!("peak at {:.1} Hz", spectrum.peak_frequency());
//! ```

mod error;
mod spectrum;

pub use error::SpectrumError;
pub use spectrum::{Spectrum, analyze};
