//! Boundary between the control loop and the hardware.
//!
//! The controller only talks to the board through [`HardwarePort`], so the
//! whole pipeline runs against a fake port on the host.

use crate::{consts::MAX_SAMPLE, fan::RelativePower, Result};

/// Averaged 10-bit reading of the divider voltage, in [0, 1023].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample(u16);

impl RawSample {
    /// Saturates at [`MAX_SAMPLE`].
    pub const fn new(value: u16) -> Self {
        if value > MAX_SAMPLE {
            Self(MAX_SAMPLE)
        } else {
            Self(value)
        }
    }

    pub const fn value(&self) -> u16 {
        self.0
    }
}

/// ADC input the thermistor divider is wired to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelId(pub u8);

/// Hardware the control loop drives.
pub trait HardwarePort {
    /// Blocking read of `channel`, averaged over
    /// [`SAMPLES_PER_READING`](crate::consts::SAMPLES_PER_READING)
    /// conversions.
    fn sample_channel(&mut self, channel: ChannelId) -> Result<RawSample>;

    /// Set the fan PWM to `power` of the counter period.
    fn set_duty_cycle(&mut self, power: RelativePower);

    /// Light the first `level` LEDs of the bar, `level` in 0..=8.
    fn set_indicator_level(&mut self, level: u8);
}
