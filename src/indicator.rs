//! Bar-graph display of the temperature, one LED per
//! [`TEMPERATURE_SCALE`] degrees.

use crate::consts::{INDICATOR_LEDS, TEMPERATURE_SCALE};

const MAX_LEVEL: u8 = INDICATOR_LEDS as u8;

/// Number of LEDs to light for `temperature`, in 0..=8.
pub fn level_for(temperature: f32) -> u8 {
    let scaled = temperature / TEMPERATURE_SCALE;
    if scaled.is_nan() || scaled < 0.0 {
        0
    } else if scaled >= MAX_LEVEL as f32 {
        MAX_LEVEL
    } else {
        scaled as u8
    }
}

/// Lowest `level` bits set, LED 0 first. Levels above 8 light everything.
pub fn bar_pattern(level: u8) -> u8 {
    let level = level.min(MAX_LEVEL);
    ((1u16 << level) - 1) as u8
}
