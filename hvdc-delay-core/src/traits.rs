//! Core traits for delay contributions
//!
//! Every element of the measurement chain that adds latency implements
//! [`DelayStage`]. Keep it simple: a label and a delay.

use crate::errors::DelayResult;

/// One contribution to the end-to-end delay
pub trait DelayStage {
    /// Short label used when rendering the breakdown
    fn label(&self) -> &'static str;

    /// Delay contributed by this stage in microseconds
    fn delay_us(&self) -> DelayResult<f64>;
}

/// Trait for values that can be checked before entering a formula
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validatable_floats() {
        assert!(5.0f64.is_valid());
        assert!(!f64::NAN.is_valid());
        assert!(!f64::INFINITY.is_valid());
        assert!(!f64::NEG_INFINITY.is_valid());
    }
}
