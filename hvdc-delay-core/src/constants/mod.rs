//! Constants for the HVDC delay model
//!
//! Centralized, documented constants used throughout the crate. Every value
//! carries its unit in the name.
//!
//! ## Organization
//!
//! - **Physics**: Unit conversions and propagation-model factors
//! - **Standards**: Sampled-value stream rate and regulatory delay limits
//! - **Defaults**: Input defaults and ranges used by the rendering shell

/// Unit conversions and optical/filter model factors.
pub mod physics;

/// Sampled-value stream requirements and compliance thresholds.
pub mod standards;

/// Default parameter values and input ranges.
pub mod defaults;

pub use physics::{DEFAULT_LPF_CUTOFF_FACTOR, M_PER_KM, REFLECTIVE_PASSES, US_PER_S};

pub use standards::{
    ADC_MAX_SAMPLE_RATE_HZ, ADC_OVERSAMPLING_FACTOR, DATA_TRANSFER_DELAY_US,
    METERING_MAX_DELAY_US, METERING_MIN_DELAY_US, MIN_MODULATION_FREQ_HZ,
    PROTECTION_MAX_DELAY_US, SV_STREAM_RATE_HZ,
};

/// Tolerance for the summation invariant of a breakdown (µs).
///
/// The total is computed as a plain sum, so any drift beyond this means a
/// component was dropped or counted twice.
pub const SUMMATION_TOLERANCE_US: f64 = 1e-9;
