//! Text rendering of results
//!
//! The rendering shell only prints these; it never formats numbers or
//! derives verdicts itself, so labels always agree with the raw values.
//! Lengths are shown to 0.1 m, delays to 0.01 µs.

use core::fmt;

use crate::{
    classify::{Advisory, Assessment, ComplianceClass, FrequencyAdequacy, SamplingBudget},
    constants::standards::{
        ADC_MAX_SAMPLE_RATE_HZ, METERING_MAX_DELAY_US, METERING_MIN_DELAY_US,
        MIN_MODULATION_FREQ_HZ, PROTECTION_MAX_DELAY_US, SV_STREAM_RATE_HZ,
    },
    model::DelayBreakdown,
};

impl fmt::Display for DelayBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Delay line length: {:.1} m", self.delay_line_length_m)?;
        writeln!(f, "Total optical path: {:.1} m", self.total_optical_path_length_m)?;
        for (label, delay) in self.components() {
            writeln!(f, "  {:<15} {:>8.2} µs", label, delay)?;
        }
        write!(f, "Total delay: {:.2} µs", self.total_delay_us)
    }
}

impl fmt::Display for ComplianceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metering => write!(
                f,
                "Meets metering requirements ({}-{} µs)",
                METERING_MIN_DELAY_US, METERING_MAX_DELAY_US
            ),
            Self::ProtectionOnly => write!(
                f,
                "Meets protection requirements only (≤{} µs)",
                PROTECTION_MAX_DELAY_US
            ),
            Self::NonCompliant => write!(f, "Does not meet metering or protection requirements"),
        }
    }
}

impl fmt::Display for FrequencyAdequacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adequate => write!(
                f,
                "Modulation frequency adequate for {} Hz SV stream",
                SV_STREAM_RATE_HZ
            ),
            Self::Inadequate => write!(
                f,
                "Modulation frequency below {} kHz required for {} Hz SV stream",
                MIN_MODULATION_FREQ_HZ / 1000.0,
                SV_STREAM_RATE_HZ
            ),
        }
    }
}

impl fmt::Display for SamplingBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Within => {
                write!(f, "ADC sample rate within {} GHz budget", ADC_MAX_SAMPLE_RATE_HZ / 1e9)
            }
            Self::Exceeded => {
                write!(f, "ADC sample rate exceeds {} GHz budget", ADC_MAX_SAMPLE_RATE_HZ / 1e9)
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LongerOpticalPath => {
                "Higher period multiplier lengthens the optical path and adds noise"
            }
            Self::ModulationBelowSvRequirement => {
                "Raise the modulation frequency for the SV stream"
            }
            Self::SamplingBudgetExceeded => "Lower the modulation frequency or the oversampling",
        };
        f.write_str(text)
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.compliance)?;
        writeln!(f, "{}", self.frequency)?;
        write!(
            f,
            "{} (requires {:.0} MHz)",
            self.sampling,
            self.required_sample_rate_hz / 1e6
        )?;
        for advisory in &self.advisories {
            write!(f, "\nNote: {}", advisory)?;
        }
        Ok(())
    }
}
