//! # seiswave-wavelet
//!
//! Closed-form synthesis of seismic source wavelets.
//!
//! ## Synthesis Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["WaveletSpec::new(wavelet, duration, dt)"] -->|"validate()"| B["WaveletSpec"]
//!     B -->|"generate(&spec)?"| C["TimeSeries"]
//!     C --> D[".time()"]
//!     C --> E[".amplitude()"]
//! ```
//!
//! ## Supported Families
//!
//! | Family | Frequencies | Axis |
//! |--------|-------------|------|
//! | [`WaveletKind::Ricker`] | 1 | symmetric |
//! | [`WaveletKind::Ormsby`] | 4 | symmetric |
//! | [`WaveletKind::Klauder`] | 2 | symmetric |
//! | [`WaveletKind::Berlage`] | 1 | causal |
//!
//! ## Quick Start
//!
//! ```ignore
//! use seiswave_wavelet::{Wavelet, WaveletSpec, generate};
//!
//! let spec = WaveletSpec::new(Wavelet::ormsby(30.0, 40.0, 90.0, 100.0), 0.5, 0.001);
//! let ts = generate(&spec)?;
//!
//! for (t, a) in ts.time().iter().zip(ts.amplitude()) {
//!     println!("{t:.3} {a:.6}");
//! }
//! ```

mod axis;
mod berlage;
mod error;
mod generate;
mod kind;
mod klauder;
mod ormsby;
mod ricker;
mod series;
mod spec;

pub use berlage::{DEFAULT_TAIL_RATIO, default_berlage_decay};
pub use error::WaveletError;
pub use generate::generate;
pub use kind::WaveletKind;
pub use series::TimeSeries;
pub use spec::{BerlageEnvelope, Wavelet, WaveletSpec};
