//! Sampled-Value Stream Requirements and Compliance Thresholds
//!
//! Limits applied to HVDC metering and protection instrumentation, plus the
//! ADC/FPGA sampling assumptions tied to the modulation frequency.

// ===== SAMPLED-VALUE STREAM =====

/// Sampled-value stream publication rate (Hz).
///
/// Source: IEC 61869-9 rate for DC instrument transformers
pub const SV_STREAM_RATE_HZ: f64 = 96_000.0;

/// Safety multiple applied on top of the Nyquist rate of the SV stream.
pub const NYQUIST_SAFETY_FACTOR: f64 = 3.0;

/// Minimum modulation frequency adequate for the SV stream (Hz).
///
/// Three times the Nyquist rate of a 96 kHz stream: 96 000 × 2 × 3 = 576 kHz.
pub const MIN_MODULATION_FREQ_HZ: f64 = SV_STREAM_RATE_HZ * 2.0 * NYQUIST_SAFETY_FACTOR;

// ===== DELAY LIMITS =====

/// Lower bound of the metering delay window (µs, inclusive).
pub const METERING_MIN_DELAY_US: f64 = 5.0;

/// Upper bound of the metering delay window (µs, inclusive).
pub const METERING_MAX_DELAY_US: f64 = 25.0;

/// Upper bound of the protection delay window (µs, inclusive).
pub const PROTECTION_MAX_DELAY_US: f64 = 100.0;

// ===== ADC / FPGA =====

/// ADC samples taken per modulation period.
///
/// Fixed oversampling assumption tying the modulation frequency to the
/// required converter rate.
pub const ADC_OVERSAMPLING_FACTOR: f64 = 400.0;

/// Highest ADC/FPGA sample rate assumed available (Hz).
pub const ADC_MAX_SAMPLE_RATE_HZ: f64 = 1e9;

// ===== PIPELINE =====

/// Fixed handoff cost between the detector and the DSP stage (µs).
pub const DATA_TRANSFER_DELAY_US: f64 = 0.5;
