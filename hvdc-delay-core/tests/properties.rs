//! Property tests over the valid parameter space
//!
//! Parameters are drawn from the ranges the rendering shell offers, plus
//! arbitrary non-negative lengths and fixed delays. A second strategy spans
//! the whole finite positive `f64` range, subnormals included.

use hvdc_delay_core::{
    compute_breakdown, compute_optical_delay, ComplianceClass, DelayError, DelayParameters,
};
use proptest::{num::f64 as float, prelude::*};

fn valid_params() -> impl Strategy<Value = DelayParameters> {
    (
        1.0f64..=10.0,
        0.0f64..500.0,
        0.0f64..500.0,
        0u32..4,
        0.0f64..50.0,
        0.0f64..50.0,
        1u32..=4,
        3u32..20,
        100_000.0f64..=2_000_000.0,
    )
        .prop_map(|(tau, eo, cable, n, dsp, other, order, samples, fm)| DelayParameters {
            propagation_delay_us_per_km: tau,
            electro_optical_length_m: eo,
            cable_length_m: cable,
            period_multiplier: n,
            dsp_delay_us: dsp,
            other_delay_us: other,
            lpf_order: order,
            num_harmonic_samples: samples,
            modulation_freq_hz: fm,
            ..DelayParameters::default()
        })
}

fn finite_params() -> impl Strategy<Value = DelayParameters> {
    let positive = float::POSITIVE | float::NORMAL | float::SUBNORMAL;
    let non_negative = positive | float::ZERO;
    (
        positive,
        non_negative,
        non_negative,
        non_negative,
        non_negative,
        1u32..=8,
        1u32..64,
        positive,
    )
        .prop_map(|(tau, eo, cable, dsp, other, order, samples, fm)| DelayParameters {
            propagation_delay_us_per_km: tau,
            electro_optical_length_m: eo,
            cable_length_m: cable,
            dsp_delay_us: dsp,
            other_delay_us: other,
            lpf_order: order,
            num_harmonic_samples: samples,
            modulation_freq_hz: fm,
            ..DelayParameters::default()
        })
}

proptest! {
    #[test]
    fn computation_is_deterministic(params in valid_params()) {
        let first = compute_breakdown(&params).unwrap();
        let second = compute_breakdown(&params).unwrap();
        prop_assert_eq!(first.total_delay_us.to_bits(), second.total_delay_us.to_bits());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn total_is_sum_of_components(params in valid_params()) {
        let b = compute_breakdown(&params).unwrap();
        let sum = b.optical_delay_us
            + b.lpf_delay_us
            + b.phase_detector_delay_us
            + b.data_transfer_delay_us
            + b.dsp_delay_us
            + b.other_delay_us;
        prop_assert!((b.total_delay_us - sum).abs() <= 1e-9);
        prop_assert!(b.is_consistent());
    }

    #[test]
    fn outputs_are_non_negative_and_finite(params in valid_params()) {
        let b = compute_breakdown(&params).unwrap();
        for (label, delay) in b.components() {
            prop_assert!(delay.is_finite() && delay >= 0.0, "{} = {}", label, delay);
        }
        prop_assert!(b.delay_line_length_m > 0.0);
        prop_assert!(b.total_optical_path_length_m >= b.delay_line_length_m);
    }

    #[test]
    fn finite_inputs_never_yield_infinite_outputs(params in finite_params()) {
        match compute_breakdown(&params) {
            Ok(b) => {
                for (label, delay) in b.components() {
                    prop_assert!(delay.is_finite(), "{} = {}", label, delay);
                }
                prop_assert!(b.total_delay_us.is_finite());
                prop_assert!(b.delay_line_length_m.is_finite());
                prop_assert!(b.total_optical_path_length_m.is_finite());
            }
            Err(DelayError::InvalidParameter { value, .. }) => prop_assert!(value.is_finite()),
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    #[test]
    fn higher_modulation_shortens_filter_and_detector(
        params in valid_params(),
        step in 1.0f64..500_000.0,
    ) {
        let faster = params.with_modulation_freq_hz(params.modulation_freq_hz + step);
        let slow = compute_breakdown(&params).unwrap();
        let fast = compute_breakdown(&faster).unwrap();
        prop_assert!(fast.lpf_delay_us < slow.lpf_delay_us);
        prop_assert!(fast.phase_detector_delay_us < slow.phase_detector_delay_us);
    }

    #[test]
    fn optical_delay_scales_linearly(
        length in 0.0f64..10_000.0,
        tau in 1.0f64..=10.0,
        k in 1.0f64..10.0,
    ) {
        let base = compute_optical_delay(length, tau).unwrap();
        let longer = compute_optical_delay(length * k, tau).unwrap();
        let slower = compute_optical_delay(length, tau * k).unwrap();
        let tolerance = 1e-9 * (1.0 + base * k);
        prop_assert!((longer - base * k).abs() <= tolerance);
        prop_assert!((slower - base * k).abs() <= tolerance);
    }

    #[test]
    fn class_matches_windows(total in 0.0f64..200.0) {
        let class = ComplianceClass::from_total_delay_us(total);
        let expected = if (5.0..=25.0).contains(&total) {
            ComplianceClass::Metering
        } else if total > 25.0 && total <= 100.0 {
            ComplianceClass::ProtectionOnly
        } else {
            ComplianceClass::NonCompliant
        };
        prop_assert_eq!(class, expected);
    }
}
