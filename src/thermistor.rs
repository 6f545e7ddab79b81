//! Divider sample to resistance, resistance to temperature.
//!
//! Circuit: the series resistor and the NTC form a divider, the ADC reads the
//! NTC side. `R_ntc = R_series / (MAX_SAMPLE / sample - 1)`.

use crate::{
    consts::{
        B_INV, MAX_RESISTANCE, MAX_SAMPLE, MIN_RESISTANCE, MIN_SAMPLE,
        REFERENCE_RESISTANCE,
        REFERENCE_TEMP_INV, SERIES_RESISTANCE, ZERO_K_IN_C,
    },
    math,
    ports::RawSample,
};

/// Sensor resistance in Ohms for a divider sample on the 0..=1023 scale.
///
/// The sample is clamped to [`MIN_SAMPLE`, `MAX_SAMPLE` - 1]: a full-scale
/// sample would divide by zero and a zero sample would give a zero
/// resistance, which has no logarithm.
pub fn resistance(sample: f32) -> f32 {
    let sample = clamp_sample(sample);
    trace!("sample {}", sample);

    SERIES_RESISTANCE / (MAX_SAMPLE as f32 / sample - 1.0)
}

pub fn resistance_from(sample: RawSample) -> f32 {
    resistance(sample.value() as f32)
}

fn clamp_sample(sample: f32) -> f32 {
    let lower = MIN_SAMPLE as f32;
    let upper = (MAX_SAMPLE - 1) as f32;
    if sample.is_nan() || sample < lower {
        lower
    } else if sample > upper {
        upper
    } else {
        sample
    }
}

/// Temperature in *C from the B-parameter equation
/// `1/T = 1/T_ref + 1/B * ln(R / R_ref)`.
///
/// Resistance is clamped to [`MIN_RESISTANCE`, `MAX_RESISTANCE`], NaN goes
/// to the floor. The floor keeps the logarithm in its domain and the
/// denominator positive. The ceiling keeps `ln` finite, since `exp` loops
/// once per unit of its argument.
///
/// Against the exact formula the error stays below 0.07 *C for every
/// sample, worst near the hot end of the range.
pub fn temperature(resistance: f32) -> f32 {
    let resistance = clamp_resistance(resistance);
    trace!("rt {}", resistance);

    let temp_k = 1.0
        / (REFERENCE_TEMP_INV
            + B_INV * math::ln(resistance / REFERENCE_RESISTANCE));
    trace!("k {}", temp_k);

    temp_k - ZERO_K_IN_C
}

fn clamp_resistance(resistance: f32) -> f32 {
    if resistance.is_nan() || resistance < MIN_RESISTANCE {
        MIN_RESISTANCE
    } else if resistance > MAX_RESISTANCE {
        MAX_RESISTANCE
    } else {
        resistance
    }
}
