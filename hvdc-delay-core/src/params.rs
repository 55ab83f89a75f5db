//! Input Parameters of the Delay Model
//!
//! A [`DelayParameters`] value is the complete, immutable snapshot the model
//! computes from. The rendering shell builds one per user interaction and
//! passes it by value; nothing is read from ambient state.
//!
//! ## Two Kinds of Checks
//!
//! - [`DelayParameters::validate`] enforces what the formulas need
//!   (positive frequency and propagation delay, order ≥ 1, finite values).
//!   [`compute_breakdown`](crate::compute_breakdown) always runs it.
//! - [`ParameterLimits::check`] enforces the narrower ranges the shell's
//!   inputs offer (1-10 µs/km, 100-2000 kHz, order 1-4, ≥3 samples). It is
//!   advisory and never called by the model.
//!
//! ## Presets
//!
//! ```rust
//! use hvdc_delay_core::{DelayLineSizing, DelayParameters};
//!
//! // Reference chain: 576 kHz, 20 m electro-optics, 50 m cable
//! let reference = DelayParameters::reference_scenario();
//! assert_eq!(reference, DelayParameters::default());
//!
//! // The earlier calculator sized the line on a half period at 64 kHz
//! let legacy = DelayParameters::legacy_calculator();
//! assert_eq!(legacy.sizing, DelayLineSizing::HalfPeriod);
//!
//! // Adjust individual fields
//! let fast = reference.with_modulation_freq_hz(1_000_000.0).with_lpf_order(2);
//! assert!(fast.validate().is_ok());
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        defaults,
        physics::{HALF_PERIOD_FRACTION, QUARTER_PERIOD_FRACTION},
    },
    errors::{DelayError, DelayResult},
    stages::{check_count, check_finite, check_non_negative, check_positive},
};

/// Rule used to size the resonant delay line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DelayLineSizing {
    /// Quarter modulation period; the reflective round trip makes it a half
    #[default]
    QuarterPeriod,
    /// Half modulation period, as sized by the earlier calculator
    HalfPeriod,
}

impl DelayLineSizing {
    /// Fraction of the modulation period matched by the line
    pub const fn period_fraction(self) -> f64 {
        match self {
            Self::QuarterPeriod => QUARTER_PERIOD_FRACTION,
            Self::HalfPeriod => HALF_PERIOD_FRACTION,
        }
    }
}

/// Physical and design parameters of one measurement chain
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DelayParameters {
    /// Propagation delay of the medium (µs/km)
    pub propagation_delay_us_per_km: f64,

    /// Electro-optical conversion block (m)
    pub electro_optical_length_m: f64,

    /// Connecting cable plus sensing element (m)
    pub cable_length_m: f64,

    /// Delay line solution; 0 is the shortest.
    ///
    /// Reserved: collected but not applied to sizing. Only drives the noise
    /// advisory.
    pub period_multiplier: u32,

    /// Downstream DSP delay (µs)
    pub dsp_delay_us: f64,

    /// Miscellaneous delay (µs)
    pub other_delay_us: f64,

    /// Low-pass filter order
    pub lpf_order: u32,

    /// Modulation periods used for harmonic filtering
    pub num_harmonic_samples: u32,

    /// Modulation frequency (Hz)
    pub modulation_freq_hz: f64,

    /// Delay line sizing rule
    pub sizing: DelayLineSizing,
}

impl Default for DelayParameters {
    fn default() -> Self {
        Self {
            propagation_delay_us_per_km: defaults::PROPAGATION_DELAY_US_PER_KM,
            electro_optical_length_m: defaults::ELECTRO_OPTICAL_LENGTH_M,
            cable_length_m: defaults::CABLE_LENGTH_M,
            period_multiplier: defaults::PERIOD_MULTIPLIER,
            dsp_delay_us: defaults::DSP_DELAY_US,
            other_delay_us: defaults::OTHER_DELAY_US,
            lpf_order: defaults::LPF_ORDER,
            num_harmonic_samples: defaults::HARMONIC_SAMPLES,
            modulation_freq_hz: defaults::MODULATION_FREQ_HZ,
            sizing: DelayLineSizing::QuarterPeriod,
        }
    }
}

impl DelayParameters {
    /// 576 kHz reflective chain with 20 m electro-optics and 50 m cable
    pub fn reference_scenario() -> Self {
        Self::default()
    }

    /// Chain as modelled by the earlier single-formula calculator
    ///
    /// Half-period sizing at 64 kHz, delay line only (no electro-optical
    /// block or cable), first-order filter.
    pub fn legacy_calculator() -> Self {
        Self {
            electro_optical_length_m: 0.0,
            cable_length_m: 0.0,
            modulation_freq_hz: 64_000.0,
            sizing: DelayLineSizing::HalfPeriod,
            ..Self::default()
        }
    }

    /// Set the propagation delay (µs/km)
    pub fn with_propagation_delay_us_per_km(mut self, value: f64) -> Self {
        self.propagation_delay_us_per_km = value;
        self
    }

    /// Set the electro-optical block length (m)
    pub fn with_electro_optical_length_m(mut self, value: f64) -> Self {
        self.electro_optical_length_m = value;
        self
    }

    /// Set the cable length (m)
    pub fn with_cable_length_m(mut self, value: f64) -> Self {
        self.cable_length_m = value;
        self
    }

    /// Set the period multiplier
    pub fn with_period_multiplier(mut self, value: u32) -> Self {
        self.period_multiplier = value;
        self
    }

    /// Set the DSP delay (µs)
    pub fn with_dsp_delay_us(mut self, value: f64) -> Self {
        self.dsp_delay_us = value;
        self
    }

    /// Set the miscellaneous delay (µs)
    pub fn with_other_delay_us(mut self, value: f64) -> Self {
        self.other_delay_us = value;
        self
    }

    /// Set the low-pass filter order
    pub fn with_lpf_order(mut self, value: u32) -> Self {
        self.lpf_order = value;
        self
    }

    /// Set the number of harmonic-filtering periods
    pub fn with_num_harmonic_samples(mut self, value: u32) -> Self {
        self.num_harmonic_samples = value;
        self
    }

    /// Set the modulation frequency (Hz)
    pub fn with_modulation_freq_hz(mut self, value: f64) -> Self {
        self.modulation_freq_hz = value;
        self
    }

    /// Set the modulation frequency from a kHz input
    pub fn with_modulation_freq_khz(self, value: f64) -> Self {
        self.with_modulation_freq_hz(value * crate::constants::physics::HZ_PER_KHZ)
    }

    /// Set the delay line sizing rule
    pub fn with_sizing(mut self, sizing: DelayLineSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Check every precondition of the model
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> DelayResult<()> {
        check_positive("propagation_delay_us_per_km", self.propagation_delay_us_per_km)?;
        check_non_negative("electro_optical_length_m", self.electro_optical_length_m)?;
        check_non_negative("cable_length_m", self.cable_length_m)?;
        check_non_negative("dsp_delay_us", self.dsp_delay_us)?;
        check_non_negative("other_delay_us", self.other_delay_us)?;
        check_count("lpf_order", self.lpf_order, 1)?;
        check_count("num_harmonic_samples", self.num_harmonic_samples, 1)?;
        check_positive("modulation_freq_hz", self.modulation_freq_hz)?;
        Ok(())
    }
}

/// Input ranges offered by the rendering shell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterLimits {
    /// Propagation delay range (µs/km)
    pub propagation_delay_us_per_km: (f64, f64),
    /// Modulation frequency range (Hz)
    pub modulation_freq_hz: (f64, f64),
    /// Filter order range
    pub lpf_order: (u32, u32),
    /// Fewest harmonic-filtering periods
    pub min_harmonic_samples: u32,
}

impl Default for ParameterLimits {
    fn default() -> Self {
        Self {
            propagation_delay_us_per_km: (
                defaults::PROPAGATION_DELAY_MIN_US_PER_KM,
                defaults::PROPAGATION_DELAY_MAX_US_PER_KM,
            ),
            modulation_freq_hz: (
                defaults::MODULATION_FREQ_MIN_HZ,
                defaults::MODULATION_FREQ_MAX_HZ,
            ),
            lpf_order: (defaults::LPF_ORDER_MIN, defaults::LPF_ORDER_MAX),
            min_harmonic_samples: defaults::HARMONIC_SAMPLES_MIN,
        }
    }
}

impl ParameterLimits {
    /// Check `params` against the input ranges
    ///
    /// Fields without a shell range (lengths, fixed delays) only need to be
    /// finite and non-negative.
    pub fn check(&self, params: &DelayParameters) -> DelayResult<()> {
        check_range(
            "propagation_delay_us_per_km",
            params.propagation_delay_us_per_km,
            self.propagation_delay_us_per_km,
        )?;
        check_range("modulation_freq_hz", params.modulation_freq_hz, self.modulation_freq_hz)?;
        check_range(
            "lpf_order",
            f64::from(params.lpf_order),
            (f64::from(self.lpf_order.0), f64::from(self.lpf_order.1)),
        )?;
        check_range(
            "num_harmonic_samples",
            f64::from(params.num_harmonic_samples),
            (f64::from(self.min_harmonic_samples), f64::from(u32::MAX)),
        )?;
        check_non_negative("electro_optical_length_m", params.electro_optical_length_m)?;
        check_non_negative("cable_length_m", params.cable_length_m)?;
        check_non_negative("dsp_delay_us", params.dsp_delay_us)?;
        check_non_negative("other_delay_us", params.other_delay_us)?;
        Ok(())
    }
}

fn check_range(name: &'static str, value: f64, (min, max): (f64, f64)) -> DelayResult<()> {
    let value = check_finite(name, value)?;
    if value < min || value > max {
        Err(DelayError::OutOfRange { name, value, min, max })
    } else {
        Ok(())
    }
}

/// Failure to load a parameter snapshot
#[cfg(feature = "std")]
#[derive(thiserror_no_std::Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Not valid JSON for a parameter snapshot
    #[error("Malformed parameter snapshot at line {line}, column {column}")]
    Malformed {
        /// Line of the first syntax or type error
        line: usize,
        /// Column of the first syntax or type error
        column: usize,
    },

    /// Parsed, but violates a model precondition
    #[error("{0}")]
    Invalid(DelayError),
}

#[cfg(feature = "std")]
impl From<DelayError> for ConfigError {
    fn from(err: DelayError) -> Self {
        Self::Invalid(err)
    }
}

#[cfg(feature = "std")]
impl DelayParameters {
    /// Parse and validate a JSON parameter snapshot
    ///
    /// Missing fields take their defaults.
    ///
    /// ```rust
    /// use hvdc_delay_core::DelayParameters;
    ///
    /// let json = r#"{ "modulation_freq_hz": 1000000.0, "lpf_order": 2 }"#;
    /// let params = DelayParameters::from_json(json)?;
    /// assert_eq!(params.lpf_order, 2);
    /// assert_eq!(params.cable_length_m, 50.0);
    /// # Ok::<(), hvdc_delay_core::ConfigError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(json).map_err(|e| ConfigError::Malformed {
            line: e.line(),
            column: e.column(),
        })?;
        params.validate()?;
        Ok(params)
    }
}
