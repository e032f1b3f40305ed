// 2.0: fixed-point integer arithmetic. every quantity is an unsigned integer with
// implied decimals (18 for prices and sizes). division always floors toward zero.
// overflow and zero divisors are hard errors, never clamped or saturated.
// no floating point anywhere in the core.

use primitive_types::U256;
use thiserror::Error;

/// Implied decimal places for prices, sizes, and pnl magnitudes.
pub const PRICE_DECIMALS: u32 = 18;

/// 10^18, one whole unit at price precision.
pub const PRICE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Basis point denominator. 10000 bps = 100%.
pub const MAX_BPS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}

pub fn checked_add(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_add(b).ok_or(MathError::ArithmeticOverflow)
}

pub fn checked_sub(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_sub(b).ok_or(MathError::ArithmeticOverflow)
}

pub fn checked_mul(a: u128, b: u128) -> Result<u128, MathError> {
    a.checked_mul(b).ok_or(MathError::ArithmeticOverflow)
}

// 2.1: floor(a * b / c) with a full 256-bit intermediate. 18-decimal products
// exceed u128 (1 unit * $2000 diff is already 2e39).
pub fn mul_div_floor(a: u128, b: u128, c: u128) -> Result<u128, MathError> {
    if c == 0 {
        return Err(MathError::DivisionByZero);
    }
    let quotient = U256::from(a) * U256::from(b) / U256::from(c);
    if quotient > U256::from(u128::MAX) {
        return Err(MathError::ArithmeticOverflow);
    }
    Ok(quotient.as_u128())
}

// 2.2: floor((old_size*old_price + add_size*fill_price) / (old_size + add_size)).
// the size-weighted entry price after an increase.
pub fn weighted_average_price(
    old_size: u128,
    old_price: u128,
    add_size: u128,
    fill_price: u128,
) -> Result<u128, MathError> {
    let total_size = checked_add(old_size, add_size)?;
    if total_size == 0 {
        return Err(MathError::DivisionByZero);
    }
    let weighted_sum =
        U256::from(old_size) * U256::from(old_price) + U256::from(add_size) * U256::from(fill_price);
    let average = weighted_sum / U256::from(total_size);
    if average > U256::from(u128::MAX) {
        return Err(MathError::ArithmeticOverflow);
    }
    Ok(average.as_u128())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_ops() {
        assert_eq!(checked_add(1, 2), Ok(3));
        assert_eq!(checked_add(u128::MAX, 1), Err(MathError::ArithmeticOverflow));
        assert_eq!(checked_sub(5, 3), Ok(2));
        assert_eq!(checked_sub(3, 5), Err(MathError::ArithmeticOverflow));
        assert_eq!(checked_mul(7, 6), Ok(42));
        assert_eq!(checked_mul(u128::MAX, 2), Err(MathError::ArithmeticOverflow));
    }

    #[test]
    fn mul_div_floors() {
        assert_eq!(mul_div_floor(7, 3, 2), Ok(10)); // 21/2 floors to 10
        assert_eq!(mul_div_floor(1, 1, 3), Ok(0));
        assert_eq!(mul_div_floor(10, 10, 1), Ok(100));
    }

    #[test]
    fn mul_div_zero_divisor() {
        assert_eq!(mul_div_floor(1, 1, 0), Err(MathError::DivisionByZero));
    }

    #[test]
    fn mul_div_wide_intermediate() {
        // 1e18 * 2000e18 / 40000e18 = 5e16. the product is 2e39, past u128.
        let size = PRICE_SCALE;
        let diff = 2_000 * PRICE_SCALE;
        let avg = 40_000 * PRICE_SCALE;
        assert_eq!(mul_div_floor(size, diff, avg), Ok(50_000_000_000_000_000));
    }

    #[test]
    fn mul_div_quotient_overflow() {
        assert_eq!(
            mul_div_floor(u128::MAX, u128::MAX, 1),
            Err(MathError::ArithmeticOverflow)
        );
    }

    #[test]
    fn weighted_average() {
        // 1 @ 40000 + 1 @ 42000 -> 41000
        let avg = weighted_average_price(
            PRICE_SCALE,
            40_000 * PRICE_SCALE,
            PRICE_SCALE,
            42_000 * PRICE_SCALE,
        )
        .unwrap();
        assert_eq!(avg, 41_000 * PRICE_SCALE);
    }

    #[test]
    fn weighted_average_fresh_position() {
        // zero existing size: average is just the fill price
        let avg = weighted_average_price(0, 0, PRICE_SCALE, 42_000 * PRICE_SCALE).unwrap();
        assert_eq!(avg, 42_000 * PRICE_SCALE);
    }

    #[test]
    fn weighted_average_empty() {
        assert_eq!(
            weighted_average_price(0, 0, 0, PRICE_SCALE),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn weighted_average_uneven_sizes() {
        // 3 @ 100 + 1 @ 200 -> 125
        let avg = weighted_average_price(
            3 * PRICE_SCALE,
            100 * PRICE_SCALE,
            PRICE_SCALE,
            200 * PRICE_SCALE,
        )
        .unwrap();
        assert_eq!(avg, 125 * PRICE_SCALE);
    }
}
