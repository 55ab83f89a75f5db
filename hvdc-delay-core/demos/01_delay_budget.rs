//! Delay Budget Example
//!
//! Computes the delay breakdown of the reference measurement chain, then
//! sweeps the modulation frequency across the slider range to show how the
//! total and the verdicts move.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_delay_budget
//! ```

use hvdc_delay_core::{evaluate, DelayError, DelayParameters};

fn main() -> Result<(), DelayError> {
    println!("HVDC Delay Budget Example");
    println!("=========================\n");

    let params = DelayParameters::reference_scenario();
    println!("Reference chain:");
    println!("  Modulation:      {:.0} kHz", params.modulation_freq_hz / 1000.0);
    println!("  Propagation:     {} µs/km", params.propagation_delay_us_per_km);
    println!("  Electro-optics:  {} m", params.electro_optical_length_m);
    println!("  Cable:           {} m", params.cable_length_m);
    println!("  LPF order:       {}", params.lpf_order);
    println!("  Harmonic samples {}", params.num_harmonic_samples);
    println!();

    let (breakdown, assessment) = evaluate(&params)?;
    println!("{breakdown}\n");
    println!("{assessment}\n");

    println!("Modulation sweep:\n");
    println!("  {:>8}  {:>9}  {:>10}  verdict", "fm, kHz", "line, m", "total, µs");

    for khz in [100.0, 250.0, 500.0, 576.0, 1000.0, 1500.0, 2000.0] {
        let params = params.with_modulation_freq_khz(khz);
        let (breakdown, assessment) = evaluate(&params)?;
        println!(
            "  {:>8.0}  {:>9.1}  {:>10.2}  {}",
            khz, breakdown.delay_line_length_m, breakdown.total_delay_us, assessment.compliance
        );
    }

    Ok(())
}
