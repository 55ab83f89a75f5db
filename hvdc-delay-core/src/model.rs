//! Delay Model
//!
//! Turns a [`DelayParameters`] snapshot into a [`DelayBreakdown`]: every
//! delay contribution, the total, and the geometry behind the optical delay.
//!
//! ## Data Flow
//!
//! ```text
//! DelayParameters ──validate──► OpticalPath ──► optical delay ─┐
//!                          ├──► LowPassFilter ───► lpf delay ──┤
//!                          ├──► PhaseDetector ─► detector delay├─► total
//!                          └──► FixedDelay ×3 ─► transfer/dsp/other ┘
//! ```
//!
//! The call is pure: no state survives between calls, and identical inputs
//! give bit-identical outputs. It either succeeds completely or fails with
//! [`DelayError::InvalidParameter`](crate::DelayError::InvalidParameter);
//! there is no partial breakdown.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::SUMMATION_TOLERANCE_US,
    errors::DelayResult,
    params::DelayParameters,
    stages::{check_computed, largest, FixedDelay, LowPassFilter, OpticalPath, PhaseDetector},
    traits::DelayStage,
};

/// Number of delay contributions in a breakdown
pub const COMPONENT_COUNT: usize = 6;

/// Result of one delay computation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DelayBreakdown {
    /// Resonant delay line length (m)
    pub delay_line_length_m: f64,
    /// Delay line + electro-optical block + cable (m)
    pub total_optical_path_length_m: f64,
    /// Round-trip propagation delay (µs)
    pub optical_delay_us: f64,
    /// Low-pass filter group delay (µs)
    pub lpf_delay_us: f64,
    /// Phase detector latency (µs)
    pub phase_detector_delay_us: f64,
    /// Detector-to-DSP handoff (µs)
    pub data_transfer_delay_us: f64,
    /// DSP processing (µs)
    pub dsp_delay_us: f64,
    /// Miscellaneous (µs)
    pub other_delay_us: f64,
    /// Sum of the six contributions above (µs)
    pub total_delay_us: f64,
}

impl DelayBreakdown {
    /// The six contributions with their labels, in display order
    pub fn components(&self) -> [(&'static str, f64); COMPONENT_COUNT] {
        [
            ("optical", self.optical_delay_us),
            ("lpf", self.lpf_delay_us),
            ("phase detector", self.phase_detector_delay_us),
            ("data transfer", self.data_transfer_delay_us),
            ("dsp", self.dsp_delay_us),
            ("other", self.other_delay_us),
        ]
    }

    /// Sum of the six contributions (µs)
    pub fn component_sum(&self) -> f64 {
        self.components().iter().map(|(_, delay)| delay).sum()
    }

    /// Total matches the sum of its contributions
    pub fn is_consistent(&self) -> bool {
        libm::fabs(self.total_delay_us - self.component_sum()) <= SUMMATION_TOLERANCE_US
    }
}

/// Compute the full delay breakdown for `params`
pub fn compute_breakdown(params: &DelayParameters) -> DelayResult<DelayBreakdown> {
    params.validate()?;

    let optical = OpticalPath::resonant(
        params.sizing,
        params.modulation_freq_hz,
        params.propagation_delay_us_per_km,
        params.period_multiplier,
        params.electro_optical_length_m,
        params.cable_length_m,
    )?;
    let lpf = LowPassFilter::new(params.modulation_freq_hz, params.lpf_order);
    let detector = PhaseDetector {
        modulation_freq_hz: params.modulation_freq_hz,
        num_samples: params.num_harmonic_samples,
    };
    let transfer = FixedDelay::data_transfer();
    let dsp = FixedDelay::dsp(params.dsp_delay_us);
    let other = FixedDelay::other(params.other_delay_us);

    let optical_delay_us = optical.delay_us()?;
    let lpf_delay_us = lpf.delay_us()?;
    let phase_detector_delay_us = detector.delay_us()?;
    let data_transfer_delay_us = transfer.delay_us()?;
    let dsp_delay_us = dsp.delay_us()?;
    let other_delay_us = other.delay_us()?;

    let total_delay_us = optical_delay_us
        + lpf_delay_us
        + phase_detector_delay_us
        + data_transfer_delay_us
        + dsp_delay_us
        + other_delay_us;

    // Each component is finite, their sum may not be; blame the largest
    if !total_delay_us.is_finite() {
        let (name, _) = largest(&[
            ("total_optical_path_length_m", optical_delay_us),
            ("modulation_freq_hz", lpf_delay_us.max(phase_detector_delay_us)),
            ("dsp_delay_us", dsp_delay_us),
            ("other_delay_us", other_delay_us),
        ]);
        let input = match name {
            "total_optical_path_length_m" => optical.total_length_m(),
            "modulation_freq_hz" => params.modulation_freq_hz,
            "dsp_delay_us" => params.dsp_delay_us,
            _ => params.other_delay_us,
        };
        check_computed(name, input, total_delay_us)?;
    }

    log_debug!(
        "delay breakdown at {} Hz: total {:.3} us (optical {:.3}, lpf {:.3}, detector {:.3})",
        params.modulation_freq_hz,
        total_delay_us,
        optical_delay_us,
        lpf_delay_us,
        phase_detector_delay_us
    );

    Ok(DelayBreakdown {
        delay_line_length_m: optical.delay_line_length_m,
        total_optical_path_length_m: optical.total_length_m(),
        optical_delay_us,
        lpf_delay_us,
        phase_detector_delay_us,
        data_transfer_delay_us,
        dsp_delay_us,
        other_delay_us,
        total_delay_us,
    })
}

/// Stateless handle on the delay model
///
/// Holds nothing; exists so the rendering shell can own "the model" as a
/// value and call it like a service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelayModel;

impl DelayModel {
    /// Create the model
    pub const fn new() -> Self {
        Self
    }

    /// See [`compute_breakdown`]
    pub fn compute(&self, params: &DelayParameters) -> DelayResult<DelayBreakdown> {
        compute_breakdown(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DelayError;

    #[test]
    fn reference_breakdown() {
        let breakdown = compute_breakdown(&DelayParameters::reference_scenario()).unwrap();

        assert!((breakdown.delay_line_length_m - 86.806).abs() < 1e-3);
        assert!((breakdown.total_optical_path_length_m - 156.806).abs() < 1e-3);
        assert!((breakdown.optical_delay_us - 1.568).abs() < 1e-3);
        assert!((breakdown.lpf_delay_us - 1.105).abs() < 1e-3);
        assert!((breakdown.phase_detector_delay_us - 6.944).abs() < 1e-3);
        assert_eq!(breakdown.data_transfer_delay_us, 0.5);
        assert_eq!(breakdown.dsp_delay_us, 5.0);
        assert_eq!(breakdown.other_delay_us, 1.0);
        assert!((breakdown.total_delay_us - 16.118).abs() < 1e-3);
        assert!(breakdown.is_consistent());
    }

    #[test]
    fn components_cover_the_total() {
        let breakdown = compute_breakdown(&DelayParameters::default()).unwrap();
        let labels = breakdown.components().map(|(label, _)| label);
        assert_eq!(
            labels,
            ["optical", "lpf", "phase detector", "data transfer", "dsp", "other"]
        );
        assert!((breakdown.component_sum() - breakdown.total_delay_us).abs() < 1e-9);
    }

    #[test]
    fn inconsistent_total_is_detected() {
        let mut breakdown = compute_breakdown(&DelayParameters::default()).unwrap();
        breakdown.total_delay_us += breakdown.dsp_delay_us;
        assert!(!breakdown.is_consistent());
    }

    #[test]
    fn invalid_parameters_yield_no_breakdown() {
        let params = DelayParameters::default().with_modulation_freq_hz(0.0);
        assert!(matches!(
            compute_breakdown(&params),
            Err(DelayError::InvalidParameter { name: "modulation_freq_hz", .. })
        ));
    }

    #[test]
    fn overflowing_total_is_refused() {
        let params = DelayParameters::default()
            .with_dsp_delay_us(1e308)
            .with_other_delay_us(1e308);
        assert!(matches!(
            compute_breakdown(&params),
            Err(DelayError::InvalidParameter { name: "dsp_delay_us", .. })
        ));
    }

    #[test]
    fn model_handle_matches_free_function() {
        let params = DelayParameters::legacy_calculator();
        assert_eq!(DelayModel::new().compute(&params), compute_breakdown(&params));
    }
}
