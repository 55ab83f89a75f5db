//! Default Parameter Values and Input Ranges
//!
//! Values the rendering shell starts from and the ranges its inputs are
//! constrained to. The defaults reproduce the reference scenario: a 576 kHz
//! modulation over 20 m of electro-optics and 50 m of cable.

// ===== PROPAGATION =====

/// Default propagation delay of light in fiber (µs/km).
pub const PROPAGATION_DELAY_US_PER_KM: f64 = 5.0;

/// Propagation delay input range (µs/km).
pub const PROPAGATION_DELAY_MIN_US_PER_KM: f64 = 1.0;
/// See [`PROPAGATION_DELAY_MIN_US_PER_KM`].
pub const PROPAGATION_DELAY_MAX_US_PER_KM: f64 = 10.0;

// ===== GEOMETRY =====

/// Default length of the electro-optical conversion block (m).
pub const ELECTRO_OPTICAL_LENGTH_M: f64 = 20.0;

/// Default length of connecting cable plus sensing element (m).
pub const CABLE_LENGTH_M: f64 = 50.0;

// ===== MODULATION =====

/// Default modulation frequency (Hz).
pub const MODULATION_FREQ_HZ: f64 = 576_000.0;

/// Modulation frequency input range (Hz).
pub const MODULATION_FREQ_MIN_HZ: f64 = 100_000.0;
/// See [`MODULATION_FREQ_MIN_HZ`].
pub const MODULATION_FREQ_MAX_HZ: f64 = 2_000_000.0;

/// Default delay line solution; 0 selects the shortest line.
pub const PERIOD_MULTIPLIER: u32 = 0;

// ===== DETECTION CHAIN =====

/// Default low-pass filter order.
pub const LPF_ORDER: u32 = 1;

/// Low-pass filter order range.
pub const LPF_ORDER_MIN: u32 = 1;
/// See [`LPF_ORDER_MIN`].
pub const LPF_ORDER_MAX: u32 = 4;

/// Default number of modulation periods used for harmonic filtering.
pub const HARMONIC_SAMPLES: u32 = 3;

/// Fewest harmonic-filtering periods the shell accepts.
pub const HARMONIC_SAMPLES_MIN: u32 = 3;

// ===== FIXED DELAYS =====

/// Default DSP processing delay (µs).
pub const DSP_DELAY_US: f64 = 5.0;

/// Default miscellaneous delay (µs).
pub const OTHER_DELAY_US: f64 = 1.0;
