//! Error Handling Example
//!
//! Shows how a rendering shell should react to rejected parameters: show a
//! blocking message and withhold the breakdown, never stale numbers.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_error_handling
//! ```

use hvdc_delay_core::{
    evaluate, ConfigError, DelayError, DelayParameters, ParameterLimits,
};

fn render(label: &str, params: &DelayParameters) {
    println!("{label}:");

    if let Err(e) = ParameterLimits::default().check(params) {
        println!("  Warning: {e}");
    }

    match evaluate(params) {
        Ok((breakdown, assessment)) => {
            println!("  Total delay {:.2} µs", breakdown.total_delay_us);
            println!("  {}", assessment.compliance);
        }
        Err(DelayError::InvalidParameter { name, reason, .. }) => {
            println!("  Cannot compute: {name} {reason}");
        }
        Err(e) => println!("  Cannot compute: {e}"),
    }
    println!();
}

fn main() {
    println!("HVDC Delay Error Handling Example");
    println!("=================================\n");

    let base = DelayParameters::default();

    render("Valid chain", &base);
    render("Zero modulation frequency", &base.with_modulation_freq_hz(0.0));
    render("Filter order 0", &base.with_lpf_order(0));
    render("Negative cable length", &base.with_cable_length_m(-5.0));
    render("Order 6 filter (outside input range)", &base.with_lpf_order(6));

    println!("Loading parameter snapshots:");
    let snapshots = [
        r#"{ "modulation_freq_hz": 1000000.0, "lpf_order": 2 }"#,
        r#"{ "modulation_freq_hz": -1.0 }"#,
        r#"{ "lpf_order": "two" }"#,
    ];
    for json in snapshots {
        match DelayParameters::from_json(json) {
            Ok(params) => println!(
                "  ok: {:.0} kHz, order {}",
                params.modulation_freq_hz / 1000.0,
                params.lpf_order
            ),
            Err(ConfigError::Malformed { line, column }) => {
                println!("  malformed at {line}:{column}")
            }
            Err(ConfigError::Invalid(e)) => println!("  rejected: {e}"),
        }
    }
}
