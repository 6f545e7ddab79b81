/// 0*C in kelvin
pub const ZERO_K_IN_C: f32 = 273.15;

// Numeric approximations
pub const EULER: f32 = 2.718282;
pub const LN_2: f32 = 0.693147;
pub const NEWTON_ITERATIONS: usize = 3;
/// Series terms used are `FRAC_EXP_ITERATIONS - 1`
pub const FRAC_EXP_ITERATIONS: usize = 15;

// IEEE-754 single precision layout
pub const F32_EXPONENT_MASK: u32 = 0x7F80_0000;
pub const F32_MANTISSA_BITS: u32 = 23;
pub const F32_EXPONENT_BIAS: i32 = 127;

/// thermistor resistance at the reference temperature, in Ohms
pub const REFERENCE_RESISTANCE: f32 = 5000.0;
/// 1 / 298.15 K
pub const REFERENCE_TEMP_INV: f32 = 0.003354016;
/// 1 / B, B-coefficient of the thermistor is 3470 K
pub const B_INV: f32 = 0.000288184;
/// resistance floor applied before taking the logarithm
pub const MIN_RESISTANCE: f32 = 1.0;
/// resistance ceiling, the divider reading at `MAX_SAMPLE - 1`
pub const MAX_RESISTANCE: f32 = SERIES_RESISTANCE * (MAX_SAMPLE - 1) as f32;

/// series resistor of the divider in Ohms
pub const SERIES_RESISTANCE: f32 = 3600.0;
pub const MAX_SAMPLE: u16 = 1023;
/// lowest sample fed to the divider formula, 0 would mean zero resistance
pub const MIN_SAMPLE: u16 = 1;

// Fan law: starts around 24*C, full duty at 60*C. Steeper than the
// 0.0202 * T - 0.485 law of the AVR board, which only reached full duty
// at 73.5*C.
pub const FAN_POWER_SLOPE: f32 = 0.0278;
pub const FAN_POWER_OFFSET: f32 = -0.667;
pub const MIN_RELATIVE_POWER: f32 = 0.01;
pub const MAX_RELATIVE_POWER: f32 = 1.0;

/// degrees per lit LED
pub const TEMPERATURE_SCALE: f32 = 12.5;
pub const INDICATOR_LEDS: usize = 8;

/// conversions averaged into one sample
pub const SAMPLES_PER_READING: usize = 16;
// Analog to digital resolution
pub const ADC_RESOLUTION_BITS: u8 = 12;
pub const SAMPLE_BITS: u8 = 10;

pub const THERMISTOR_CHANNEL: u8 = 4;
pub const PWM_FREQUENCY_KHZ: u32 = 25;
