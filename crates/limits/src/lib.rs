//! # seiswave-limits
//!
//! Admissible frequency parameters for seismic wavelets: Nyquist-aware upper
//! bound, a positive lower bound, and the strict ordering that multi-frequency
//! families (Klauder, Ormsby) require.
//!
//! ## Quick Start
//!
//! ```ignore
//! use seiswave_limits::{LimitsError, Violation, frequency_limits, validate};
//! use seiswave_wavelet::WaveletKind;
//!
//! let limits = frequency_limits(WaveletKind::Ormsby, 0.001)?;
//! println!("{} .. {} Hz, {}", limits.min(), limits.max(), limits.ordering().description());
//!
//! match validate(WaveletKind::Ormsby, 0.001, &[40.0, 30.0, 90.0, 100.0]) {
//!     Err(LimitsError::InvalidParameter { reason: Violation::OrderingViolated { pair, .. } }) => {
//!         println!("corners {pair:?} out of order");
//!     }
//!     _ => {}
//! }
//! ```

mod error;
mod limits;

pub use error::{LimitsError, Violation};
pub use limits::{
    FrequencyLimits, MIN_FREQUENCY_FRACTION, OrderingRule, frequency_limits, validate,
};
