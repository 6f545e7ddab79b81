use crate::consts::{
    FAN_POWER_OFFSET, FAN_POWER_SLOPE, MAX_RELATIVE_POWER, MIN_RELATIVE_POWER,
};

/// Fan duty cycle as a fraction of the PWM period.
///
/// Always within [`MIN_RELATIVE_POWER`, `MAX_RELATIVE_POWER`]; the lower
/// bound keeps the fan spinning.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelativePower(f32);

impl RelativePower {
    pub const MIN: Self = Self(MIN_RELATIVE_POWER);
    pub const MAX: Self = Self(MAX_RELATIVE_POWER);

    /// Clamps `fraction` into range, NaN maps to the minimum.
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() || fraction < MIN_RELATIVE_POWER {
            Self::MIN
        } else if fraction > MAX_RELATIVE_POWER {
            Self::MAX
        } else {
            Self(fraction)
        }
    }

    pub fn fraction(&self) -> f32 {
        self.0
    }
}

/// Fixed linear fan law `slope * T + offset`, clamped.
pub fn relative_power(temperature: f32) -> RelativePower {
    RelativePower::new(FAN_POWER_SLOPE * temperature + FAN_POWER_OFFSET)
}

/// PWM compare value for `power` of a counter running up to `max_duty`.
pub fn duty_for(power: RelativePower, max_duty: u16) -> u16 {
    (max_duty as f32 * power.fraction()) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cold_runs_at_minimum() {
        assert_eq!(relative_power(-10.0), RelativePower::MIN);
        assert_eq!(relative_power(-10.0).fraction(), 0.01);
        assert_eq!(relative_power(0.0).fraction(), 0.01);
    }

    #[test]
    fn hot_runs_at_full_power() {
        assert_eq!(relative_power(60.0).fraction(), 1.0);
        assert_eq!(relative_power(150.0), RelativePower::MAX);
    }

    #[test]
    fn room_temperature_follows_the_line() {
        let power = relative_power(25.0).fraction();
        assert!(power > 0.01 && power < 1.0);
        assert_abs_diff_eq!(power, 0.0278 * 25.0 - 0.667, epsilon = 1e-6);
    }

    #[test]
    fn monotonic_and_bounded() {
        let mut previous = RelativePower::MIN;
        for t in -400..=1200 {
            let power = relative_power(t as f32 / 10.0);
            assert!(power >= previous);
            assert!((0.01..=1.0).contains(&power.fraction()));
            previous = power;
        }
    }

    #[test]
    fn nan_temperature_is_minimum() {
        assert_eq!(relative_power(f32::NAN), RelativePower::MIN);
    }

    #[test]
    fn duty_scales_with_counter_period() {
        assert_eq!(duty_for(RelativePower::MAX, 146), 146);
        assert_eq!(duty_for(RelativePower::new(0.5), 2000), 1000);
        assert_eq!(duty_for(RelativePower::MIN, 2000), 20);
        assert_eq!(duty_for(RelativePower::MIN, 0), 0);
    }
}
