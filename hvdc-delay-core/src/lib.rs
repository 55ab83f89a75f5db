//! Delay budget model for HVDC optical measurement chains
//!
//! Estimates the end-to-end delay of an optical/electronic sampled-value
//! measurement chain and classifies it against the metering (5-25 µs) and
//! protection (≤100 µs) limits.
//!
//! Key constraints:
//! - Pure closed-form arithmetic, no shared state between calls
//! - Invalid inputs are refused, never turned into NaN or infinity
//! - Runs without `std` (disable default features)
//!
//! ```no_run
//! use hvdc_delay_core::{compute_breakdown, ComplianceClass, DelayParameters};
//!
//! let params = DelayParameters::default();
//!
//! match compute_breakdown(&params) {
//!     Ok(breakdown) => {
//!         let class = ComplianceClass::from_total_delay_us(breakdown.total_delay_us);
//!         assert_eq!(class, ComplianceClass::Metering);
//!     }
//!     Err(_) => {} // Refuse to display anything
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod classify;
pub mod constants;
pub mod errors;
pub mod model;
pub mod params;
pub mod report;
pub mod stages;
pub mod traits;

// Public API
pub use classify::{
    assess, evaluate, Advisory, Assessment, ComplianceClass, FrequencyAdequacy, SamplingBudget,
};
pub use errors::{DelayError, DelayResult};
pub use model::{compute_breakdown, DelayBreakdown, DelayModel};
pub use params::{DelayLineSizing, DelayParameters, ParameterLimits};
pub use stages::{
    compute_delay_line_length,
    compute_delay_line_length_with,
    compute_lpf_delay,
    compute_optical_delay,
    compute_phase_detector_delay,
};
pub use traits::DelayStage;

#[cfg(feature = "std")]
pub use params::ConfigError;

/// Crate version, from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
