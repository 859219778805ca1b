use soroban_sdk::{Env, U256};

use crate::error::Error;

/// `10^exp` as `u128`; fails past `10^38`.
pub fn pow10(exp: u32) -> Result<u128, Error> {
    10u128.checked_pow(exp).ok_or(Error::ArithmeticOverflow)
}

/// Rescale `value` from `from_decimals` to `to_decimals`.
///
/// Up-scaling multiplies and fails on overflow; down-scaling truncates.
pub fn scale(value: u128, from_decimals: u32, to_decimals: u32) -> Result<u128, Error> {
    if to_decimals >= from_decimals {
        value
            .checked_mul(pow10(to_decimals - from_decimals)?)
            .ok_or(Error::ArithmeticOverflow)
    } else {
        Ok(value / pow10(from_decimals - to_decimals)?)
    }
}

/// `a * b / denominator` with a 256-bit intermediate product.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, Error> {
    mul_div_rescaled(env, a, b, denominator, 0, 0)
}

// Largest power of ten applied per step; 10^38 < 2^127
const MAX_STEP: u32 = 38;

/// `a * b / denominator`, moved from `from_decimals` to `to_decimals`, with a
/// single truncation at the end.
pub fn mul_div_rescaled(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
    from_decimals: u32,
    to_decimals: u32,
) -> Result<u128, Error> {
    if denominator == 0 {
        return Err(Error::DivisionByZero);
    }
    let denominator = U256::from_u128(env, denominator);
    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));

    if to_decimals <= from_decimals {
        // floor(floor(x / d) / 10^k) == floor(x / (d * 10^k))
        let mut quotient = product.div(&denominator);
        let mut left = from_decimals - to_decimals;
        while left > 0 {
            let step = left.min(MAX_STEP);
            quotient = quotient.div(&U256::from_u128(env, pow10(step)?));
            left -= step;
        }
        return quotient.to_u128().ok_or(Error::ArithmeticOverflow);
    }

    // Long division: whole part first, then the remainder digit block by
    // digit block, so nothing is truncated before the last step.
    let up = to_decimals - from_decimals;
    let whole = product
        .div(&denominator)
        .to_u128()
        .ok_or(Error::ArithmeticOverflow)?;
    let mut result = match whole {
        0 => 0,
        _ => whole
            .checked_mul(pow10(up)?)
            .ok_or(Error::ArithmeticOverflow)?,
    };
    let mut remainder = product.rem_euclid(&denominator);
    let mut fraction: u128 = 0;
    let mut left = up;
    while left > 0 {
        let step = left.min(MAX_STEP);
        let shifted = remainder.mul(&U256::from_u128(env, pow10(step)?));
        let digits = shifted
            .div(&denominator)
            .to_u128()
            .ok_or(Error::ArithmeticOverflow)?;
        remainder = shifted.rem_euclid(&denominator);
        fraction = fraction
            .checked_mul(pow10(step)?)
            .and_then(|f| f.checked_add(digits))
            .ok_or(Error::ArithmeticOverflow)?;
        left -= step;
    }
    result = result
        .checked_add(fraction)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(result)
}
