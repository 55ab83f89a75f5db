//! Error Types for Delay Model Failures
//!
//! The model is pure arithmetic, so there is only one way for it to fail: a
//! parameter violates a precondition. Rather than letting a zero frequency or
//! a NaN flow through the formulas and come out as infinity, every operation
//! refuses to compute and names the offending field.
//!
//! Errors stay small and `Copy`, with `&'static str` payloads only, so they
//! work the same with and without `std`.
//!
//! ## Error Categories
//!
//! - `InvalidParameter`: a precondition of the model is violated
//!   (e.g. `modulation_freq_hz <= 0`, `lpf_order == 0`, NaN lengths)
//! - `OutOfRange`: a value is valid for the model but outside the input range
//!   the rendering shell offers. Only [`ParameterLimits::check`] produces it.
//!
//! ```rust
//! use hvdc_delay_core::{compute_breakdown, DelayError, DelayParameters};
//!
//! let params = DelayParameters::default().with_modulation_freq_hz(0.0);
//!
//! match compute_breakdown(&params) {
//!     Ok(_) => unreachable!(),
//!     Err(DelayError::InvalidParameter { name, .. }) => {
//!         assert_eq!(name, "modulation_freq_hz");
//!     }
//!     Err(_) => unreachable!(),
//! }
//! ```
//!
//! [`ParameterLimits::check`]: crate::params::ParameterLimits::check

use thiserror_no_std::Error;

/// Result type for delay model operations
pub type DelayResult<T> = Result<T, DelayError>;

/// Delay model errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DelayError {
    /// A precondition of the model is violated
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Field or argument name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Which precondition failed
        reason: &'static str,
    },

    /// Value outside the input range offered to the user
    #[error("Parameter {name} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Lowest accepted value
        min: f64,
        /// Highest accepted value
        max: f64,
    },
}

impl DelayError {
    /// Name of the parameter that caused the error
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } | Self::OutOfRange { name, .. } => name,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DelayError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidParameter { name, value, reason } =>
                defmt::write!(fmt, "Invalid {} = {}: {}", name, value, reason),
            Self::OutOfRange { name, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {}]", name, value, min, max),
        }
    }
}
