// 4.0: pnl math. pure and stateless: same inputs, same outputs, every time.
// delta = size * |current - average| / average, floored. the sign comes back
// as a separate has_profit flag; "no profit at equal price" and "zero loss"
// are the same (false, 0) pair.

use serde::{Deserialize, Serialize};

use crate::math::{mul_div_floor, MathError};
use crate::types::{Price, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pnl {
    pub has_profit: bool,
    pub delta: u128,
}

/// Unrealized profit/loss magnitude for a position of `size` entered at
/// `average_price`, marked at `current_price`. A zero `average_price` is a
/// precondition violation and fails with `DivisionByZero`.
pub fn calculate_pnl(
    size: u128,
    current_price: Price,
    average_price: Price,
    side: Side,
) -> Result<Pnl, MathError> {
    let current = current_price.value();
    let average = average_price.value();

    let price_diff = if current >= average {
        current - average
    } else {
        average - current
    };

    let delta = mul_div_floor(size, price_diff, average)?;

    let has_profit = match side {
        Side::Long => current > average,
        Side::Short => current < average,
    };

    Ok(Pnl { has_profit, delta })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::PRICE_SCALE;

    const SIZE: u128 = PRICE_SCALE; // 1 unit
    const AVG: u128 = 40_000 * PRICE_SCALE;

    fn px(v: u128) -> Price {
        Price::new(v)
    }

    #[test]
    fn long_profit() {
        let pnl = calculate_pnl(SIZE, px(42_000 * PRICE_SCALE), px(AVG), Side::Long).unwrap();
        assert!(pnl.has_profit);
        assert_eq!(pnl.delta, 50_000_000_000_000_000); // 5e16: 5% of size
    }

    #[test]
    fn long_loss() {
        let pnl = calculate_pnl(SIZE, px(38_000 * PRICE_SCALE), px(AVG), Side::Long).unwrap();
        assert!(!pnl.has_profit);
        assert_eq!(pnl.delta, 50_000_000_000_000_000);
    }

    #[test]
    fn short_profit() {
        let pnl = calculate_pnl(SIZE, px(38_000 * PRICE_SCALE), px(AVG), Side::Short).unwrap();
        assert!(pnl.has_profit);
        assert_eq!(pnl.delta, 50_000_000_000_000_000);
    }

    #[test]
    fn short_loss() {
        let pnl = calculate_pnl(SIZE, px(42_000 * PRICE_SCALE), px(AVG), Side::Short).unwrap();
        assert!(!pnl.has_profit);
        assert_eq!(pnl.delta, 50_000_000_000_000_000);
    }

    #[test]
    fn equal_price_no_profit() {
        for side in [Side::Long, Side::Short] {
            let pnl = calculate_pnl(SIZE, px(AVG), px(AVG), side).unwrap();
            assert!(!pnl.has_profit);
            assert_eq!(pnl.delta, 0);
        }
    }

    #[test]
    fn delta_floors() {
        // size 1 (smallest unit), diff 1, avg 3: 1*1/3 floors to 0
        let pnl = calculate_pnl(1, px(4), px(3), Side::Long).unwrap();
        assert!(pnl.has_profit);
        assert_eq!(pnl.delta, 0);
    }

    #[test]
    fn zero_average_price_is_fatal() {
        assert_eq!(
            calculate_pnl(SIZE, px(AVG), px(0), Side::Long),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn idempotent() {
        let a = calculate_pnl(SIZE, px(42_000 * PRICE_SCALE), px(AVG), Side::Long).unwrap();
        let b = calculate_pnl(SIZE, px(42_000 * PRICE_SCALE), px(AVG), Side::Long).unwrap();
        assert_eq!(a, b);
    }
}
