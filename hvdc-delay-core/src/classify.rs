//! Compliance Classification
//!
//! Pure comparisons over a computed breakdown and the parameters it came
//! from. Nothing here can fail or mutate anything.
//!
//! ## Rules
//!
//! ```text
//! total delay      5 ≤ t ≤ 25 µs      → Metering
//!                  25 < t ≤ 100 µs    → ProtectionOnly
//!                  otherwise          → NonCompliant
//! modulation       fm ≥ 576 kHz       → Adequate for a 96 kHz SV stream
//! ADC budget       fm · 400 ≤ 1 GHz   → Within
//! period multiplier > 0               → longer optical path advisory
//! ```
//!
//! Totals below 5 µs fall into `NonCompliant` together with totals above
//! 100 µs; there is no separate "too fast" class.

use heapless::Vec;

use crate::{
    constants::standards::{
        ADC_MAX_SAMPLE_RATE_HZ, ADC_OVERSAMPLING_FACTOR, METERING_MAX_DELAY_US,
        METERING_MIN_DELAY_US, MIN_MODULATION_FREQ_HZ, PROTECTION_MAX_DELAY_US,
    },
    errors::DelayResult,
    model::{compute_breakdown, DelayBreakdown},
    params::DelayParameters,
};

/// Maximum number of advisories attached to one assessment
pub const MAX_ADVISORIES: usize = 4;

/// Regulatory class of a total delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceClass {
    /// Within the metering window, which also satisfies protection
    Metering,
    /// Too slow for metering, fast enough for protection
    ProtectionOnly,
    /// Outside both windows
    NonCompliant,
}

impl ComplianceClass {
    /// Classify a total delay in µs
    pub fn from_total_delay_us(total_delay_us: f64) -> Self {
        if (METERING_MIN_DELAY_US..=METERING_MAX_DELAY_US).contains(&total_delay_us) {
            Self::Metering
        } else if total_delay_us > METERING_MAX_DELAY_US
            && total_delay_us <= PROTECTION_MAX_DELAY_US
        {
            Self::ProtectionOnly
        } else {
            Self::NonCompliant
        }
    }

    /// Usable for protection (metering-class delays qualify too)
    pub fn meets_protection(self) -> bool {
        matches!(self, Self::Metering | Self::ProtectionOnly)
    }
}

/// Whether the modulation frequency supports the SV stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrequencyAdequacy {
    /// At least three times the Nyquist rate
    Adequate,
    /// Below the 576 kHz minimum
    Inadequate,
}

impl FrequencyAdequacy {
    /// Check a modulation frequency in Hz
    pub fn from_modulation_freq_hz(modulation_freq_hz: f64) -> Self {
        if modulation_freq_hz >= MIN_MODULATION_FREQ_HZ {
            Self::Adequate
        } else {
            Self::Inadequate
        }
    }
}

/// Whether the implied ADC/FPGA sample rate is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplingBudget {
    /// fm · 400 fits in 1 GHz
    Within,
    /// fm · 400 exceeds 1 GHz
    Exceeded,
}

impl SamplingBudget {
    /// ADC sample rate implied by a modulation frequency (Hz)
    pub fn required_sample_rate_hz(modulation_freq_hz: f64) -> f64 {
        modulation_freq_hz * ADC_OVERSAMPLING_FACTOR
    }

    /// Check a modulation frequency in Hz
    pub fn from_modulation_freq_hz(modulation_freq_hz: f64) -> Self {
        if Self::required_sample_rate_hz(modulation_freq_hz) <= ADC_MAX_SAMPLE_RATE_HZ {
            Self::Within
        } else {
            Self::Exceeded
        }
    }
}

/// Informational notes for the user; never a pass/fail verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// A higher-order delay line solution lengthens the path and adds noise
    LongerOpticalPath,
    /// Modulation frequency is below the SV stream requirement
    ModulationBelowSvRequirement,
    /// Implied ADC rate exceeds the sampling budget
    SamplingBudgetExceeded,
}

/// All verdicts for one computation
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    /// Regulatory class of the total delay
    pub compliance: ComplianceClass,
    /// Modulation frequency check
    pub frequency: FrequencyAdequacy,
    /// ADC sample rate check
    pub sampling: SamplingBudget,
    /// ADC sample rate implied by the modulation frequency (Hz)
    pub required_sample_rate_hz: f64,
    /// Notes to display, in a fixed order
    pub advisories: Vec<Advisory, MAX_ADVISORIES>,
}

impl Assessment {
    /// Every pass/fail check passed (advisories aside)
    pub fn all_clear(&self) -> bool {
        self.compliance != ComplianceClass::NonCompliant
            && self.frequency == FrequencyAdequacy::Adequate
            && self.sampling == SamplingBudget::Within
    }
}

/// Classify a breakdown computed from `params`
pub fn assess(params: &DelayParameters, breakdown: &DelayBreakdown) -> Assessment {
    let compliance = ComplianceClass::from_total_delay_us(breakdown.total_delay_us);
    let frequency = FrequencyAdequacy::from_modulation_freq_hz(params.modulation_freq_hz);
    let sampling = SamplingBudget::from_modulation_freq_hz(params.modulation_freq_hz);

    let mut advisories = Vec::new();
    // Capacity covers every variant, pushes cannot fail
    if params.period_multiplier > 0 {
        let _ = advisories.push(Advisory::LongerOpticalPath);
    }
    if frequency == FrequencyAdequacy::Inadequate {
        let _ = advisories.push(Advisory::ModulationBelowSvRequirement);
    }
    if sampling == SamplingBudget::Exceeded {
        let _ = advisories.push(Advisory::SamplingBudgetExceeded);
    }

    Assessment {
        compliance,
        frequency,
        sampling,
        required_sample_rate_hz: SamplingBudget::required_sample_rate_hz(params.modulation_freq_hz),
        advisories,
    }
}

/// Compute the breakdown for `params` and classify it
pub fn evaluate(params: &DelayParameters) -> DelayResult<(DelayBreakdown, Assessment)> {
    let breakdown = compute_breakdown(params)?;
    let assessment = assess(params, &breakdown);
    Ok((breakdown, assessment))
}
