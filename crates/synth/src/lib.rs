//! # seiswave-synth
//!
//! Single entry point for wavelet synthesis: checks a request, generates
//! the wavelet and returns it together with its amplitude spectrum.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["WaveletSpec"] -->|"validate()"| B["structural check"]
//!     B -->|"seiswave_limits::validate"| C["frequency limits"]
//!     C -->|"generate"| D["TimeSeries"]
//!     D -->|"analyze"| E["Spectrum"]
//!     D --> F["Synthesis"]
//!     E --> F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use seiswave_synth::{GenerateResponse, Wavelet, WaveletSpec, synthesize, to_json};
//!
//! let spec = WaveletSpec::new(Wavelet::klauder(40.0, 90.0), 0.5, 0.001);
//! let synthesis = synthesize(&spec)?;
//! println!("{}", to_json(&GenerateResponse::new(&spec, &synthesis))?);
//! ```

mod error;
mod output;
mod synthesize;

pub use error::SynthError;
pub use output::{
    BerlageOutput, ErrorResponse, GenerateResponse, LimitsResponse, to_json,
};
pub use synthesize::{Playback, Synthesis, synthesize, synthesize_batch};

pub use seiswave_limits::{FrequencyLimits, OrderingRule, Violation, frequency_limits};
pub use seiswave_spectrum::Spectrum;
pub use seiswave_wavelet::{BerlageEnvelope, TimeSeries, Wavelet, WaveletKind, WaveletSpec};
