//! Fixed delays
//!
//! Contributions that do not depend on the modulation: the detector-to-DSP
//! handoff, DSP processing and everything else the user lumps together.

use crate::{
    constants::standards::DATA_TRANSFER_DELAY_US,
    errors::DelayResult,
    traits::DelayStage,
};

use super::utils;

/// A constant delay with a label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDelay {
    label: &'static str,
    delay_us: f64,
}

impl FixedDelay {
    /// Constant delay of `delay_us` microseconds
    pub const fn new(label: &'static str, delay_us: f64) -> Self {
        Self { label, delay_us }
    }

    /// Pipeline handoff between detector and DSP
    pub const fn data_transfer() -> Self {
        Self::new("data transfer", DATA_TRANSFER_DELAY_US)
    }

    /// Downstream DSP processing
    pub const fn dsp(delay_us: f64) -> Self {
        Self::new("dsp", delay_us)
    }

    /// Miscellaneous delays
    pub const fn other(delay_us: f64) -> Self {
        Self::new("other", delay_us)
    }
}

impl DelayStage for FixedDelay {
    fn label(&self) -> &'static str {
        self.label
    }

    fn delay_us(&self) -> DelayResult<f64> {
        utils::check_non_negative(self.label, self.delay_us)
    }
}
