//! Exponential and natural logarithm for targets without an FPU or libm.
//!
//! Both functions use fixed iteration counts (see [`consts`](crate::consts)).
//! The fan law and indicator scale are tuned against this accuracy:
//!
//! - [`exp`]: relative error below 1e-6 on [-5, 5]. There is no range
//!   reduction, so the integer power loop runs `|x|` times and the error
//!   grows with the magnitude of the argument.
//! - [`ln`]: absolute error below 1e-3 for arguments in [2^-24, 2^24]. The
//!   worst case is a mantissa close to 2, where the exponent guess is off by
//!   almost ln(2) and three Newton steps do not fully close the gap.

use crate::consts::{
    EULER, F32_EXPONENT_BIAS, F32_EXPONENT_MASK, F32_MANTISSA_BITS,
    FRAC_EXP_ITERATIONS, LN_2, NEWTON_ITERATIONS,
};

/// Rough natural logarithm from the IEEE-754 exponent field alone.
///
/// Single precision layout: 1 sign bit, 8 exponent bits (bias 127),
/// 23 mantissa bits. For `val = 2^e * m` with `m` in [1, 2) this returns
/// `e * ln(2)`, i.e. it ignores the mantissa.
#[inline]
pub fn exponent_estimate(val: f32) -> f32 {
    let bits = val.to_bits();
    let exponent =
        ((bits & F32_EXPONENT_MASK) >> F32_MANTISSA_BITS) as i32 - F32_EXPONENT_BIAS;

    exponent as f32 * LN_2
}

/// e^x
pub fn exp(x: f32) -> f32 {
    let negative = x < 0.0;
    let x = if negative { -x } else { x };

    let int_part = x as u32;
    let mut int_result = 1.0f32;
    for _ in 0..int_part {
        int_result *= EULER;
    }

    let frac_part = x - int_part as f32;
    let mut frac_result = 1.0f32;
    let mut power = 1.0f32;
    let mut factorial = 1.0f32;
    for k in 1..FRAC_EXP_ITERATIONS {
        power *= frac_part;
        factorial *= k as f32;
        frac_result += power / factorial;
    }

    let result = int_result * frac_result;
    if negative {
        1.0 / result
    } else {
        result
    }
}

/// Natural logarithm.
///
/// Returns NaN for `val <= 0` or NaN input.
pub fn ln(val: f32) -> f32 {
    if !(val > 0.0) {
        return f32::NAN;
    }

    // Newton converges from below on [1, inf)
    let (sign, val) = if val < 1.0 { (-1.0, 1.0 / val) } else { (1.0, val) };

    sign * newton_ln(exponent_estimate(val), val)
}

/// Newton-Raphson for `e^t = val`: `t <- t + val * e^-t - 1`
fn newton_ln(initial: f32, val: f32) -> f32 {
    let mut t = initial;
    for _ in 0..NEWTON_ITERATIONS {
        t += val * exp(-t) - 1.0;
    }
    t
}
