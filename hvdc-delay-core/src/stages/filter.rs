//! Low-pass filter group delay
//!
//! The detector output is smoothed by an N-th order low-pass filter whose
//! cutoff sits at a fixed fraction of the modulation frequency. Group delay
//! is approximated as:
//!
//! ```text
//! fc = fm · k
//! τg = N / (2π · fc)
//! ```
//!
//! For N = 1 this is the exact single-pole value at DC. Higher orders scale
//! linearly, which is an approximation rather than a multi-pole derivation.

use core::f64::consts::PI;

use crate::{
    constants::physics::{DEFAULT_LPF_CUTOFF_FACTOR, US_PER_S},
    errors::DelayResult,
    traits::DelayStage,
};

use super::utils;

/// Group delay in µs of an `lpf_order` filter with cutoff `fm · cutoff_factor`
pub fn compute_lpf_delay(
    modulation_freq_hz: f64,
    lpf_order: u32,
    cutoff_factor: f64,
) -> DelayResult<f64> {
    let fm = utils::check_positive("modulation_freq_hz", modulation_freq_hz)?;
    let order = utils::check_count("lpf_order", lpf_order, 1)?;
    let factor = utils::check_positive("cutoff_factor", cutoff_factor)?;

    let fc = fm * factor;
    let delay_s = f64::from(order) / (2.0 * PI * fc);

    utils::check_computed("modulation_freq_hz", fm, delay_s * US_PER_S)
}

/// Low-pass filter stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPassFilter {
    /// Modulation frequency (Hz)
    pub modulation_freq_hz: f64,
    /// Filter order, 1 or higher
    pub order: u32,
    /// Cutoff as a fraction of the modulation frequency
    pub cutoff_factor: f64,
}

impl LowPassFilter {
    /// Filter with the default cutoff at a quarter of the modulation frequency
    pub fn new(modulation_freq_hz: f64, order: u32) -> Self {
        Self {
            modulation_freq_hz,
            order,
            cutoff_factor: DEFAULT_LPF_CUTOFF_FACTOR,
        }
    }

    /// Cutoff frequency (Hz)
    pub fn cutoff_hz(&self) -> f64 {
        self.modulation_freq_hz * self.cutoff_factor
    }
}

impl DelayStage for LowPassFilter {
    fn label(&self) -> &'static str {
        "lpf"
    }

    fn delay_us(&self) -> DelayResult<f64> {
        compute_lpf_delay(self.modulation_freq_hz, self.order, self.cutoff_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DelayError;

    #[test]
    fn first_order_at_576_khz() {
        // fc = 144 kHz, 1 / (2π · 144 kHz) = 1.105 µs
        let delay = compute_lpf_delay(576_000.0, 1, 0.25).unwrap();
        assert!((delay - 1.105_242_7).abs() < 1e-6, "got {delay}");
    }

    #[test]
    fn delay_scales_with_order() {
        let first = compute_lpf_delay(576_000.0, 1, 0.25).unwrap();
        let fourth = compute_lpf_delay(576_000.0, 4, 0.25).unwrap();
        assert!((fourth - 4.0 * first).abs() < 1e-12);
    }

    #[test]
    fn rejects_zero_order_and_frequency() {
        assert!(compute_lpf_delay(576_000.0, 0, 0.25).is_err());
        assert!(compute_lpf_delay(0.0, 1, 0.25).is_err());
        assert!(compute_lpf_delay(576_000.0, 1, 0.0).is_err());
    }

    #[test]
    fn subnormal_frequency_is_rejected() {
        // 1e-310 · 0.25 inverts to more than f64::MAX microseconds
        assert!(matches!(
            compute_lpf_delay(1e-310, 1, 0.25),
            Err(DelayError::InvalidParameter { name: "modulation_freq_hz", .. })
        ));
        assert!(compute_lpf_delay(f64::MIN_POSITIVE, 4, 0.25).is_err());
    }

    #[test]
    fn stage_uses_default_cutoff() {
        let lpf = LowPassFilter::new(576_000.0, 2);
        assert_eq!(lpf.cutoff_hz(), 144_000.0);
        assert_eq!(lpf.delay_us(), compute_lpf_delay(576_000.0, 2, 0.25));
        assert_eq!(lpf.label(), "lpf");
    }
}
