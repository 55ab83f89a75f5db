//! Delay Contributions of the Measurement Chain
//!
//! ## Overview
//!
//! The end-to-end delay of an optical sampled-value chain is the sum of six
//! contributions. Four are fixed or user-supplied; two depend on the
//! modulation frequency through closed-form physics:
//!
//! | Stage            | Depends on                  | Module             |
//! |------------------|-----------------------------|--------------------|
//! | Optical path     | fm, τ, segment lengths      | `optical`          |
//! | Low-pass filter  | fm, filter order            | `filter`           |
//! | Phase detector   | fm, harmonic samples        | `phase_detector`   |
//! | Data transfer    | constant 0.5 µs             | `fixed`            |
//! | DSP              | user input                  | `fixed`            |
//! | Other            | user input                  | `fixed`            |
//!
//! Raising the modulation frequency shortens the delay line and the filter
//! and detector delays, but pushes the required ADC rate up. The
//! classification in [`crate::classify`] checks both sides.
//!
//! ## Usage Example
//!
//! ```rust
//! use hvdc_delay_core::stages::{LowPassFilter, PhaseDetector};
//! use hvdc_delay_core::DelayStage;
//!
//! let lpf = LowPassFilter::new(576_000.0, 1);
//! let detector = PhaseDetector { modulation_freq_hz: 576_000.0, num_samples: 3 };
//!
//! let chain: [&dyn DelayStage; 2] = [&lpf, &detector];
//! let total: f64 = chain.iter().map(|s| s.delay_us()).sum::<Result<f64, _>>()?;
//! assert!(total > 8.0 && total < 8.1);
//! # Ok::<(), hvdc_delay_core::DelayError>(())
//! ```

mod filter;
mod fixed;
mod optical;
mod phase_detector;
mod utils;

pub use filter::{compute_lpf_delay, LowPassFilter};
pub use fixed::FixedDelay;
pub use optical::{
    compute_delay_line_length, compute_delay_line_length_with, compute_optical_delay, OpticalPath,
};
pub use phase_detector::{compute_phase_detector_delay, PhaseDetector};

pub(crate) use utils::{
    check_computed, check_count, check_finite, check_non_negative, check_positive, largest,
};
