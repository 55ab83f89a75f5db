//! Reflective optical path
//!
//! The sensing light travels through the resonant delay line, the
//! electro-optical block and the cable, hits the mirror and comes back. Two
//! quantities come out of here:
//!
//! - the delay line length that makes the path resonate with the modulation
//! - the propagation delay of the whole path, counted twice
//!
//! ```text
//! l = (fraction / fm) / τ        fraction = 1/4 (reflective) or 1/2 (legacy)
//! t = 2 · (L_total / 1000) · τ   [µs]
//! ```

use crate::{
    constants::physics::{M_PER_KM, REFLECTIVE_PASSES, S_PER_US},
    errors::DelayResult,
    params::DelayLineSizing,
    traits::DelayStage,
};

use super::utils;

/// Length of the resonant delay line in meters, quarter-period rule
///
/// `period_multiplier` selects a higher-order resonance. It is accepted but
/// not applied: only the shortest solution is modelled.
pub fn compute_delay_line_length(
    modulation_freq_hz: f64,
    propagation_delay_us_per_km: f64,
    period_multiplier: u32,
) -> DelayResult<f64> {
    compute_delay_line_length_with(
        DelayLineSizing::QuarterPeriod,
        modulation_freq_hz,
        propagation_delay_us_per_km,
        period_multiplier,
    )
}

/// Length of the resonant delay line in meters using an explicit sizing rule
pub fn compute_delay_line_length_with(
    sizing: DelayLineSizing,
    modulation_freq_hz: f64,
    propagation_delay_us_per_km: f64,
    period_multiplier: u32,
) -> DelayResult<f64> {
    let fm = utils::check_positive("modulation_freq_hz", modulation_freq_hz)?;
    let tau = utils::check_positive("propagation_delay_us_per_km", propagation_delay_us_per_km)?;

    if period_multiplier > 0 {
        log_debug!(
            "period multiplier {} not applied to delay line sizing",
            period_multiplier
        );
    }

    let tau_s_per_km = tau * S_PER_US;
    let target_time_s =
        utils::check_computed("modulation_freq_hz", fm, sizing.period_fraction() / fm)?;
    let length_km = target_time_s / tau_s_per_km;

    // Blame whichever factor of target · (1 / τ) is further out of scale
    if target_time_s >= 1.0 / tau_s_per_km {
        utils::check_computed("modulation_freq_hz", fm, length_km * M_PER_KM)
    } else {
        utils::check_computed("propagation_delay_us_per_km", tau, length_km * M_PER_KM)
    }
}

/// Propagation delay in µs of a path traversed twice
pub fn compute_optical_delay(
    total_optical_path_length_m: f64,
    propagation_delay_us_per_km: f64,
) -> DelayResult<f64> {
    let length_m =
        utils::check_non_negative("total_optical_path_length_m", total_optical_path_length_m)?;
    let tau = utils::check_positive("propagation_delay_us_per_km", propagation_delay_us_per_km)?;

    let delay_us = REFLECTIVE_PASSES * (length_m / M_PER_KM) * tau;
    if length_m >= tau {
        utils::check_computed("total_optical_path_length_m", length_m, delay_us)
    } else {
        utils::check_computed("propagation_delay_us_per_km", tau, delay_us)
    }
}

/// Full reflective path: delay line plus the fixed segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpticalPath {
    /// Resonant delay line length (m)
    pub delay_line_length_m: f64,
    /// Electro-optical conversion block (m)
    pub electro_optical_length_m: f64,
    /// Cable plus sensing element (m)
    pub cable_length_m: f64,
    /// Propagation delay of the medium (µs/km)
    pub propagation_delay_us_per_km: f64,
}

impl OpticalPath {
    /// Size the delay line for `modulation_freq_hz` and attach the fixed segments
    pub fn resonant(
        sizing: DelayLineSizing,
        modulation_freq_hz: f64,
        propagation_delay_us_per_km: f64,
        period_multiplier: u32,
        electro_optical_length_m: f64,
        cable_length_m: f64,
    ) -> DelayResult<Self> {
        let delay_line_length_m = compute_delay_line_length_with(
            sizing,
            modulation_freq_hz,
            propagation_delay_us_per_km,
            period_multiplier,
        )?;

        let path = Self {
            delay_line_length_m,
            electro_optical_length_m: utils::check_non_negative(
                "electro_optical_length_m",
                electro_optical_length_m,
            )?,
            cable_length_m: utils::check_non_negative("cable_length_m", cable_length_m)?,
            propagation_delay_us_per_km,
        };

        // Segments are finite on their own but may overflow when summed
        let (name, value) = utils::largest(&[
            ("modulation_freq_hz", path.delay_line_length_m),
            ("electro_optical_length_m", path.electro_optical_length_m),
            ("cable_length_m", path.cable_length_m),
        ]);
        if name == "modulation_freq_hz" {
            utils::check_computed(name, modulation_freq_hz, path.total_length_m())?;
        } else {
            utils::check_computed(name, value, path.total_length_m())?;
        }

        Ok(path)
    }

    /// Delay line + electro-optical block + cable (m)
    pub fn total_length_m(&self) -> f64 {
        self.delay_line_length_m + self.electro_optical_length_m + self.cable_length_m
    }
}

impl DelayStage for OpticalPath {
    fn label(&self) -> &'static str {
        "optical"
    }

    fn delay_us(&self) -> DelayResult<f64> {
        compute_optical_delay(self.total_length_m(), self.propagation_delay_us_per_km)
    }
}
