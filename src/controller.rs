use crate::{
    fan::{self, RelativePower},
    indicator,
    ports::{ChannelId, HardwarePort, RawSample},
    thermistor, Result,
};

/// Everything one pass of the loop computed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reading {
    pub sample: RawSample,
    /// Ohms
    pub resistance: f32,
    /// *C
    pub temperature: f32,
    pub level: u8,
    pub power: RelativePower,
}

pub struct Controller<P> {
    port: P,
    channel: ChannelId,
}

impl<P: HardwarePort> Controller<P> {
    pub fn new(port: P, channel: ChannelId) -> Self {
        Self { port, channel }
    }

    /// Sample, convert, display and actuate once.
    ///
    /// Outputs are only touched after a successful sample.
    pub fn step(&mut self) -> Result<Reading> {
        let sample = self.port.sample_channel(self.channel)?;
        let resistance = thermistor::resistance_from(sample);
        let temperature = thermistor::temperature(resistance);

        let level = indicator::level_for(temperature);
        self.port.set_indicator_level(level);

        let power = fan::relative_power(temperature);
        self.port.set_duty_cycle(power);

        info!("Temp: {}, power: {}", temperature, power.fraction());

        Ok(Reading {
            sample,
            resistance,
            temperature,
            level,
            power,
        })
    }

    /// Control loop, never returns.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.step() {
                warn!("control step failed: {}", e);
            }
        }
    }

    #[cfg(test)]
    fn port(&self) -> &P {
        &self.port
    }

    pub fn release(self) -> P {
        self.port
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{consts::REFERENCE_RESISTANCE, Error};

    /// Port replaying a list of samples and recording every output.
    #[derive(Default)]
    struct FakePort {
        samples: Vec<Result<RawSample>>,
        sampled: Vec<ChannelId>,
        duty: Vec<RelativePower>,
        levels: Vec<u8>,
    }

    impl FakePort {
        fn with_samples(samples: &[Result<RawSample>]) -> Self {
            let mut samples = samples.to_vec();
            samples.reverse();
            Self {
                samples,
                ..Default::default()
            }
        }
    }

    impl HardwarePort for FakePort {
        fn sample_channel(&mut self, channel: ChannelId) -> Result<RawSample> {
            self.sampled.push(channel);
            self.samples.pop().unwrap_or(Err(Error::AdcRead))
        }

        fn set_duty_cycle(&mut self, power: RelativePower) {
            self.duty.push(power);
        }

        fn set_indicator_level(&mut self, level: u8) {
            self.levels.push(level);
        }
    }

    fn controller(samples: &[Result<RawSample>]) -> Controller<FakePort> {
        Controller::new(FakePort::with_samples(samples), ChannelId(4))
    }

    #[test]
    fn end_to_end_from_sample_512() {
        let mut controller = controller(&[Ok(RawSample::new(512))]);

        let reading = controller.step().unwrap();

        assert_eq!(reading.sample.value(), 512);
        assert_abs_diff_eq!(reading.resistance, 3607.045, epsilon = 0.01);
        assert_abs_diff_eq!(reading.temperature, 33.607, epsilon = 0.01);
        assert_eq!(reading.level, 2);
        assert_abs_diff_eq!(reading.power.fraction(), 0.2673, epsilon = 1e-3);

        let port = controller.release();
        assert_eq!(port.sampled, [ChannelId(4)]);
        assert_eq!(port.levels, [2]);
        assert_eq!(port.duty, [reading.power]);
    }

    #[test]
    fn stages_chain_exactly() {
        let mut controller = controller(&[Ok(RawSample::new(300))]);

        let reading = controller.step().unwrap();

        let resistance = thermistor::resistance(300.0);
        let temperature = thermistor::temperature(resistance);
        assert_eq!(reading.resistance, resistance);
        assert_eq!(reading.temperature, temperature);
        assert_eq!(reading.level, indicator::level_for(temperature));
        assert_eq!(reading.power, fan::relative_power(temperature));
    }

    #[test]
    fn full_scale_sample_is_cold_and_slow() {
        let mut controller = controller(&[Ok(RawSample::new(1023))]);

        let reading = controller.step().unwrap();

        assert!(reading.resistance.is_finite());
        assert!(reading.temperature.is_finite());
        assert!(reading.temperature < -80.0);
        assert_eq!(reading.level, 0);
        assert_eq!(reading.power, RelativePower::MIN);
    }

    #[test]
    fn zero_sample_is_hot_and_full_power() {
        let mut controller = controller(&[Ok(RawSample::new(0))]);

        let reading = controller.step().unwrap();

        assert!(reading.temperature.is_finite());
        assert_eq!(reading.level, 8);
        assert_eq!(reading.power, RelativePower::MAX);
    }

    #[test]
    fn reference_divider_point_reads_25_degrees() {
        // sample where the divider sits at the reference resistance
        let sample = 1023.0 * REFERENCE_RESISTANCE / (REFERENCE_RESISTANCE + 3600.0);
        let mut controller = controller(&[Ok(RawSample::new(sample as u16))]);

        let reading = controller.step().unwrap();

        assert_abs_diff_eq!(reading.temperature, 25.0, epsilon = 0.1);
        assert_eq!(reading.level, 2);
    }

    #[test]
    fn failed_sample_leaves_outputs_alone() {
        let mut controller = controller(&[
            Ok(RawSample::new(512)),
            Err(Error::AdcRead),
            Ok(RawSample::new(700)),
        ]);

        assert!(controller.step().is_ok());
        assert_eq!(controller.step(), Err(Error::AdcRead));
        assert_eq!(controller.port().duty.len(), 1);
        assert_eq!(controller.port().levels.len(), 1);

        let reading = controller.step().unwrap();
        assert_eq!(reading.sample.value(), 700);
        assert_eq!(controller.port().duty.len(), 2);
        assert_eq!(controller.port().sampled.len(), 3);
    }

    #[test]
    fn warming_up_never_slows_the_fan() {
        let samples: Vec<_> = (1..=1022).rev().step_by(11).map(|s| Ok(RawSample::new(s))).collect();
        let mut controller = controller(&samples);

        let mut previous = RelativePower::MIN;
        for _ in 0..samples.len() {
            let reading = controller.step().unwrap();
            assert!(reading.power >= previous);
            previous = reading.power;
        }
    }
}
