//! [`HardwarePort`] over `embedded-hal` peripherals: one ADC input for the
//! thermistor divider, one PWM channel for the fan and an active-low LED bar.

use core::marker::PhantomData;

use embedded_hal::{
    adc::{Channel, OneShot},
    digital::v2::OutputPin,
    PwmPin,
};
use heapless::Vec;

use crate::{
    consts::{ADC_RESOLUTION_BITS, INDICATOR_LEDS, SAMPLES_PER_READING, SAMPLE_BITS},
    fan::{self, RelativePower},
    indicator,
    ports::{ChannelId, HardwarePort, RawSample},
    Error, Result,
};

pub struct Board<ADC, A, PIN, PWM, LED> {
    adc: A,
    thermistor_pin: PIN,
    fan: PWM,
    leds: [LED; INDICATOR_LEDS],
    _adc: PhantomData<ADC>,
}

impl<ADC, A, PIN, PWM, LED> Board<ADC, A, PIN, PWM, LED>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC, ID = u8>,
    PWM: PwmPin<Duty = u16>,
    LED: OutputPin,
{
    /// Enables the fan output at minimum power and clears the bar.
    pub fn new(
        adc: A,
        thermistor_pin: PIN,
        fan: PWM,
        leds: [LED; INDICATOR_LEDS],
    ) -> Self {
        let mut board = Self {
            adc,
            thermistor_pin,
            fan,
            leds,
            _adc: PhantomData,
        };

        board.fan.enable();
        board.set_duty_cycle(RelativePower::MIN);
        board.set_indicator_level(0);

        board
    }

    pub fn release(self) -> (A, PIN, PWM, [LED; INDICATOR_LEDS]) {
        (self.adc, self.thermistor_pin, self.fan, self.leds)
    }

    fn convert(&mut self) -> Result<u16> {
        nb::block!(self.adc.read(&mut self.thermistor_pin))
            .map_err(|_| Error::AdcRead)
    }
}

impl<ADC, A, PIN, PWM, LED> HardwarePort for Board<ADC, A, PIN, PWM, LED>
where
    A: OneShot<ADC, u16, PIN>,
    PIN: Channel<ADC, ID = u8>,
    PWM: PwmPin<Duty = u16>,
    LED: OutputPin,
{
    fn sample_channel(&mut self, channel: ChannelId) -> Result<RawSample> {
        if channel.0 != PIN::channel() {
            return Err(Error::UnknownChannel(channel.0));
        }

        // first conversion after the channel switch is unreliable
        self.convert()?;

        let mut window: Vec<u16, SAMPLES_PER_READING> = Vec::new();
        while !window.is_full() {
            let conversion = self.convert()?;
            window.push(conversion).ok();
        }

        let mean = average(&window);
        trace!("adc_reading: {}, window: {}", mean, window.as_slice());

        Ok(RawSample::new(mean >> (ADC_RESOLUTION_BITS - SAMPLE_BITS)))
    }

    fn set_duty_cycle(&mut self, power: RelativePower) {
        let duty = fan::duty_for(power, self.fan.get_max_duty());
        debug!("duty {} of {}", duty, self.fan.get_max_duty());
        self.fan.set_duty(duty);
    }

    fn set_indicator_level(&mut self, level: u8) {
        let pattern = indicator::bar_pattern(level);
        for (i, led) in self.leds.iter_mut().enumerate() {
            if pattern & (1 << i) != 0 {
                led.set_low().ok();
            } else {
                led.set_high().ok();
            }
        }
    }
}

/// Integer mean, truncating like the 16-bit accumulator it replaces.
fn average(window: &[u16]) -> u16 {
    if window.is_empty() {
        return 0;
    }
    let sum: u32 = window.iter().map(|&c| c as u32).sum();
    (sum / window.len() as u32) as u16
}
