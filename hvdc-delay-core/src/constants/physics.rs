//! Unit Conversions and Propagation Model Factors
//!
//! Fixed conversions between the units the model works in (µs, s, m, km)
//! plus the factors of the optical and filter models.

// ===== UNIT CONVERSIONS =====

/// Microseconds per second.
pub const US_PER_S: f64 = 1e6;

/// Seconds per microsecond.
pub const S_PER_US: f64 = 1e-6;

/// Meters per kilometer.
pub const M_PER_KM: f64 = 1000.0;

/// Hertz per kilohertz. The shell's modulation slider is in kHz.
pub const HZ_PER_KHZ: f64 = 1000.0;

// ===== OPTICAL PATH =====

/// Number of times light traverses a reflective optical path.
///
/// The pulse goes out to the mirror and comes back, so the propagation delay
/// of every meter of the path is counted twice.
pub const REFLECTIVE_PASSES: f64 = 2.0;

/// Period fraction used by the quarter-period (reflective) delay line rule.
pub const QUARTER_PERIOD_FRACTION: f64 = 0.25;

/// Period fraction used by the half-period delay line rule.
///
/// Superseded by the quarter-period rule, kept for the legacy calculator.
pub const HALF_PERIOD_FRACTION: f64 = 0.5;

// ===== LOW-PASS FILTER =====

/// Default LPF cutoff as a fraction of the modulation frequency.
///
/// With fm = 576 kHz this places the cutoff at 144 kHz.
pub const DEFAULT_LPF_CUTOFF_FACTOR: f64 = 0.25;
