//! Phase detector latency
//!
//! Extracting phase from the modulated signal costs one modulation period to
//! observe the fundamental, plus one period per sample used for harmonic
//! rejection:
//!
//! ```text
//! t = (T + n · T) · 1e6  [µs],  T = 1 / fm
//! ```

use crate::{
    constants::physics::US_PER_S,
    errors::DelayResult,
    traits::DelayStage,
};

use super::utils;

/// Phase detector delay in µs for `num_samples` filtering periods
pub fn compute_phase_detector_delay(
    modulation_freq_hz: f64,
    num_samples: u32,
) -> DelayResult<f64> {
    let fm = utils::check_positive("modulation_freq_hz", modulation_freq_hz)?;
    let samples = utils::check_count("num_harmonic_samples", num_samples, 1)?;

    let period_s = utils::check_computed("modulation_freq_hz", fm, 1.0 / fm)?;
    let harmonic_extraction_s = period_s;
    let filtering_s = f64::from(samples) * period_s;

    utils::check_computed(
        "modulation_freq_hz",
        fm,
        (harmonic_extraction_s + filtering_s) * US_PER_S,
    )
}

/// Phase detector stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseDetector {
    /// Modulation frequency (Hz)
    pub modulation_freq_hz: f64,
    /// Modulation periods used for harmonic filtering
    pub num_samples: u32,
}

impl DelayStage for PhaseDetector {
    fn label(&self) -> &'static str {
        "phase detector"
    }

    fn delay_us(&self) -> DelayResult<f64> {
        compute_phase_detector_delay(self.modulation_freq_hz, self.num_samples)
    }
}
