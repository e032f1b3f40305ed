//! Property-based tests for the accounting core math.
//!
//! These tests verify invariants hold under random inputs.

use proptest::prelude::*;
use vault_core::*;

// Strategies for generating test data
fn magnitude_strategy() -> impl Strategy<Value = u128> {
    // full wire range: [1, 2^127 - 1]
    1u128..(1u128 << 127)
}

fn size_strategy() -> impl Strategy<Value = u128> {
    // up to ~1e12 whole units at 18 decimals
    1u128..1_000_000_000_000_000_000_000_000_000_000u128
}

fn price_strategy() -> impl Strategy<Value = u128> {
    // $0.000001 to $10M at 18 decimals
    1_000_000_000_000u128..10_000_000_000_000_000_000_000_000u128
}

fn bps_strategy() -> impl Strategy<Value = u32> {
    0u32..=10_000
}

proptest! {
    /// Positive encodings decode back to the same magnitude.
    #[test]
    fn decode_roundtrip_positive(m in magnitude_strategy(), ts in any::<u64>()) {
        let report = OraclePriceReport::from_magnitude(m, false, ts);
        let decoded = report.decode();
        prop_assert_eq!(decoded.magnitude, m);
        prop_assert!(!decoded.negative);
    }

    /// Negative encodings decode to the identical magnitude: the decoder is
    /// sign-blind on output.
    #[test]
    fn decode_roundtrip_negative(m in magnitude_strategy(), ts in any::<u64>()) {
        let report = OraclePriceReport::from_magnitude(m, true, ts);
        let decoded = report.decode();
        prop_assert_eq!(decoded.magnitude, m);
        prop_assert!(decoded.negative);
    }

    /// The two fee halves always reconstruct the full fee, and the protocol
    /// half never exceeds the liquidity half.
    #[test]
    fn fee_split_reconstructs(fee in any::<u128>()) {
        let split = split_fee(fee);
        prop_assert_eq!(split.liquidity_fee + split.protocol_fee, fee);
        prop_assert!(split.liquidity_fee >= split.protocol_fee);
        prop_assert!(split.liquidity_fee - split.protocol_fee <= 1);
    }

    /// position_fee matches the literal floor formula.
    #[test]
    fn position_fee_formula(size in size_strategy(), bps in bps_strategy()) {
        let rate = Bps::new(bps).unwrap();
        let fee = position_fee(size, rate).unwrap();
        prop_assert_eq!(fee, size * bps as u128 / 10_000);
    }

    /// mul_div_floor really floors: q*c <= a*b < (q+1)*c.
    #[test]
    fn mul_div_floor_bound(a in 0u128..(1u128 << 64), b in 0u128..(1u128 << 64), c in 1u128..(1u128 << 64)) {
        let q = mul_div_floor(a, b, c).unwrap();
        prop_assert!(q * c <= a * b);
        prop_assert!(a * b - q * c < c);
    }

    /// Equal prices always produce (false, 0), both sides.
    #[test]
    fn pnl_zero_at_entry(size in size_strategy(), price in price_strategy()) {
        for side in [Side::Long, Side::Short] {
            let pnl = calculate_pnl(size, Price::new(price), Price::new(price), side).unwrap();
            prop_assert!(!pnl.has_profit);
            prop_assert_eq!(pnl.delta, 0);
        }
    }

    /// Long and short see the same magnitude with mirrored direction.
    #[test]
    fn pnl_sides_mirror(
        size in size_strategy(),
        current in price_strategy(),
        average in price_strategy(),
    ) {
        let long = calculate_pnl(size, Price::new(current), Price::new(average), Side::Long).unwrap();
        let short = calculate_pnl(size, Price::new(current), Price::new(average), Side::Short).unwrap();

        prop_assert_eq!(long.delta, short.delta);
        if current > average {
            prop_assert!(long.has_profit);
            prop_assert!(!short.has_profit);
        } else if current < average {
            prop_assert!(!long.has_profit);
            prop_assert!(short.has_profit);
        } else {
            prop_assert!(!long.has_profit);
            prop_assert!(!short.has_profit);
        }
    }

    /// The entry average after an increase always lies between the two fill
    /// prices.
    #[test]
    fn average_price_between_fills(
        old_size in 1u128..(1u128 << 80),
        add_size in 1u128..(1u128 << 80),
        old_price in price_strategy(),
        fill_price in price_strategy(),
    ) {
        let avg = weighted_average_price(old_size, old_price, add_size, fill_price).unwrap();
        let lo = old_price.min(fill_price);
        let hi = old_price.max(fill_price);
        prop_assert!(avg >= lo);
        prop_assert!(avg <= hi);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every increase credits the reserve by exactly the floored protocol half.
    #[test]
    fn reserve_tracks_protocol_half(
        size in 1u128..1_000_000_000_000_000_000_000_000u128,
        bps in bps_strategy(),
    ) {
        let admin = AccountId(0);
        let asset = AssetId(1);
        let mut vault = Vault::new(admin, VaultConfig::default());
        vault.set_asset_config(admin, AssetConfig::new(asset, "BTC-PERP", 50)).unwrap();
        vault.set_fees(admin, 30, bps, 0, 10).unwrap();
        vault.set_time(Timestamp::from_millis(1_000));
        vault.submit_price(
            asset,
            OraclePriceReport::from_magnitude(40_000 * PRICE_SCALE, false, 1_000_000_000),
        );

        let before = vault.fee_reserve();
        let result = vault.increase_position(AccountId(1), asset, size, Side::Long).unwrap();

        let expected_fee = size * bps as u128 / 10_000;
        let expected_protocol = expected_fee / 2;
        prop_assert_eq!(result.fee, expected_fee);
        prop_assert_eq!(result.protocol_fee, expected_protocol);
        prop_assert_eq!(result.liquidity_fee, expected_fee - expected_protocol);
        prop_assert_eq!(vault.fee_reserve(), before + expected_protocol);
    }
}
