use soroban_sdk::Env;

use crate::atv_types::{MAX_DECIMALS, NormalizedValue, PRICE_DECIMALS};
use crate::error::Error;
use crate::fixed_point::mul_div_rescaled;

fn check_input(value: &NormalizedValue) -> Result<(), Error> {
    if value.magnitude == 0 || value.decimals > MAX_DECIMALS {
        return Err(Error::InvalidInput);
    }
    Ok(())
}

/// Combine the vault per-share value with the reference value into a price
/// with `PRICE_DECIMALS` decimals.
///
/// `price = vault * reference / 10^(vault.decimals + reference.decimals - 8)`,
/// truncated once at the end.
pub fn compute_price(
    env: &Env,
    vault: &NormalizedValue,
    reference: &NormalizedValue,
) -> Result<i128, Error> {
    check_input(vault)?;
    check_input(reference)?;

    let price = mul_div_rescaled(
        env,
        vault.magnitude,
        reference.magnitude,
        1,
        vault.decimals + reference.decimals,
        PRICE_DECIMALS,
    )?;
    if price == 0 {
        return Err(Error::InvalidInput);
    }
    i128::try_from(price).map_err(|_| Error::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_compute_price() {
        let e = Env::default();
        let vault = NormalizedValue::new(2 * ONE_18, 18);
        let reference = NormalizedValue::new(150_000_000, 8);
        assert_eq!(compute_price(&e, &vault, &reference), Ok(300_000_000));
    }

    #[test]
    fn test_compute_price_rescales_reference() {
        let e = Env::default();
        let vault = NormalizedValue::new(ONE_18 / 2, 18);
        // 1.5 at 18 decimals and at 2 decimals
        let wide = NormalizedValue::new(3 * ONE_18 / 2, 18);
        let narrow = NormalizedValue::new(150, 2);
        assert_eq!(compute_price(&e, &vault, &wide), Ok(75_000_000));
        assert_eq!(compute_price(&e, &vault, &narrow), Ok(75_000_000));
    }

    #[test]
    fn test_compute_price_low_precision_reference() {
        let e = Env::default();
        // 1.234567 per share at 1.00
        let vault = NormalizedValue::new(1_234_567 * ONE_18 / 1_000_000, 18);
        let reference = NormalizedValue::new(100, 2);
        assert_eq!(compute_price(&e, &vault, &reference), Ok(123_456_700));
        // 0.333... per share keeps 8 digits against a 0-decimal reference
        let vault = NormalizedValue::new(ONE_18 / 3, 18);
        let reference = NormalizedValue::new(3, 0);
        assert_eq!(compute_price(&e, &vault, &reference), Ok(99_999_999));
    }

    #[test]
    fn test_compute_price_is_deterministic() {
        let e = Env::default();
        let vault = NormalizedValue::new(1_234_567_891_234_567_891, 18);
        let reference = NormalizedValue::new(98_765_432_100, 10);
        let first = compute_price(&e, &vault, &reference);
        for _ in 0..5 {
            assert_eq!(compute_price(&e, &vault, &reference), first);
        }
    }

    #[test]
    fn test_compute_price_rejects_zero() {
        let e = Env::default();
        let zero = NormalizedValue::new(0, 18);
        let one = NormalizedValue::new(ONE_18, 18);
        assert_eq!(compute_price(&e, &zero, &one), Err(Error::InvalidInput));
        assert_eq!(compute_price(&e, &one, &zero), Err(Error::InvalidInput));
        // rounds down to nothing at 8 decimals
        let dust = NormalizedValue::new(1, 18);
        assert_eq!(compute_price(&e, &dust, &dust), Err(Error::InvalidInput));
    }

    #[test]
    fn test_compute_price_rejects_excess_decimals() {
        let e = Env::default();
        let one = NormalizedValue::new(ONE_18, 18);
        let bad = NormalizedValue::new(1, MAX_DECIMALS + 1);
        assert_eq!(compute_price(&e, &one, &bad), Err(Error::InvalidInput));
    }

    #[test]
    fn test_compute_price_overflow() {
        let e = Env::default();
        let vault = NormalizedValue::new(u128::MAX, 0);
        let reference = NormalizedValue::new(u128::MAX, 0);
        assert_eq!(
            compute_price(&e, &vault, &reference),
            Err(Error::ArithmeticOverflow)
        );
        // fits u128 but not i128
        let vault = NormalizedValue::new(u128::MAX / 100_000_000, 0);
        let reference = NormalizedValue::new(1, 0);
        assert_eq!(
            compute_price(&e, &vault, &reference),
            Err(Error::ArithmeticOverflow)
        );
    }
}
