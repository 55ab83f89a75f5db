//! Shared fixtures for integration tests
//!
//! Named measurement chains with their expected outcomes, worked out by hand
//! from the closed-form model.

#![allow(dead_code)]

use hvdc_delay_core::{ComplianceClass, DelayLineSizing, DelayParameters};

/// Tolerance for hand-computed expectations (µs or m)
pub const HAND_TOLERANCE: f64 = 1e-3;

/// A named chain and what it should come out as
pub struct Scenario {
    pub name: &'static str,
    pub params: DelayParameters,
    pub expected_total_us: f64,
    pub expected_class: ComplianceClass,
}

/// Reference chain at 576 kHz: 16.118 µs, metering
pub fn reference() -> Scenario {
    Scenario {
        name: "reference",
        params: DelayParameters {
            modulation_freq_hz: 576_000.0,
            propagation_delay_us_per_km: 5.0,
            electro_optical_length_m: 20.0,
            cable_length_m: 50.0,
            lpf_order: 1,
            num_harmonic_samples: 3,
            dsp_delay_us: 5.0,
            other_delay_us: 1.0,
            period_multiplier: 0,
            sizing: DelayLineSizing::QuarterPeriod,
        },
        expected_total_us: 16.118,
        expected_class: ComplianceClass::Metering,
    }
}

/// Earlier calculator at 64 kHz: 1562.5 m line, 94.572 µs, protection only
pub fn legacy() -> Scenario {
    Scenario {
        name: "legacy",
        params: DelayParameters::legacy_calculator(),
        expected_total_us: 94.572,
        expected_class: ComplianceClass::ProtectionOnly,
    }
}

/// Slow, heavily filtered chain at 100 kHz: 147.665 µs, non-compliant
pub fn heavy_filtering() -> Scenario {
    Scenario {
        name: "heavy_filtering",
        params: DelayParameters::default()
            .with_modulation_freq_hz(100_000.0)
            .with_lpf_order(4)
            .with_num_harmonic_samples(10),
        expected_total_us: 147.665,
        expected_class: ComplianceClass::NonCompliant,
    }
}

/// Fast chain at the top of the slider: 9.768 µs, metering
pub fn fast_modulation() -> Scenario {
    Scenario {
        name: "fast_modulation",
        params: DelayParameters::default().with_modulation_freq_hz(2_000_000.0),
        expected_total_us: 9.768,
        expected_class: ComplianceClass::Metering,
    }
}

pub fn all() -> [Scenario; 4] {
    [reference(), legacy(), heavy_filtering(), fast_modulation()]
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}
