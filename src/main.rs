//! Vault accounting core simulation.
//!
//! Walks the full ledger lifecycle: market configuration, oracle updates,
//! position increase/decrease, fee accumulation, and a forced liquidation.

use vault_core::*;

const ADMIN: AccountId = AccountId(0);
const BTC: AssetId = AssetId(1);

fn main() {
    println!("Vault Accounting Core Simulation");
    println!("Fixed-point ledger, oracle decode, fee routing\n");

    scenario_1_configuration();
    scenario_2_position_lifecycle();
    scenario_3_stale_price();
    scenario_4_liquidation();

    println!("\nAll simulations completed successfully.");
}

fn fresh_vault() -> Vault {
    let mut vault = Vault::new(ADMIN, VaultConfig::default());
    vault.set_time(Timestamp::from_millis(1_000_000));
    vault
        .set_asset_config(ADMIN, AssetConfig::new(BTC, "BTC-PERP", 50))
        .unwrap();
    vault
}

fn push_price(vault: &mut Vault, whole_units: u128) {
    let magnitude = whole_units * PRICE_SCALE;
    let timestamp_ns = vault.time().as_millis() as u64 * 1_000_000;
    vault.submit_price(BTC, OraclePriceReport::from_magnitude(magnitude, false, timestamp_ns));
}

/// Fee schedule defaults and reconfiguration.
fn scenario_1_configuration() {
    println!("Scenario 1: Fee Configuration\n");

    let mut vault = fresh_vault();
    println!(
        "  fresh schedule: liquidity={} increase={} decrease={} liquidation={}",
        vault.liquidity_fee_basis_points(),
        vault.increase_position_fee_basis_points(),
        vault.decrease_position_fee_basis_points(),
        vault.liquidation_fee_basis_points(),
    );

    vault.set_fees(ADMIN, 40, 20, 20, 20).unwrap();
    println!(
        "  after set_fees(40,20,20,20): liquidity={} increase={} decrease={} liquidation={}\n",
        vault.liquidity_fee_basis_points(),
        vault.increase_position_fee_basis_points(),
        vault.decrease_position_fee_basis_points(),
        vault.liquidation_fee_basis_points(),
    );
}

/// Open, average, and close a long position.
fn scenario_2_position_lifecycle() {
    println!("Scenario 2: Position Lifecycle\n");

    let mut vault = fresh_vault();
    push_price(&mut vault, 40_000);

    let alice = AccountId(1);
    let increase = vault
        .increase_position(alice, BTC, PRICE_SCALE, Side::Long)
        .unwrap();
    println!(
        "  alice opens 1 BTC long @ {} (fee {} -> lp {}, protocol {})",
        increase.price, increase.fee, increase.liquidity_fee, increase.protocol_fee
    );

    vault.advance_time(10_000);
    push_price(&mut vault, 42_000);
    let increase = vault
        .increase_position(alice, BTC, PRICE_SCALE, Side::Long)
        .unwrap();
    println!(
        "  alice adds 1 BTC @ 42000, new average entry {}",
        increase.new_average_price
    );

    let decrease = vault
        .decrease_position(alice, BTC, Price::new(0), 2 * PRICE_SCALE, Side::Long, alice)
        .unwrap();
    println!(
        "  alice closes 2 BTC @ {}: profit={} delta={}",
        decrease.price, decrease.has_profit, decrease.pnl_delta
    );
    println!("  protocol fee reserve: {}\n", vault.fee_reserve());
}

/// A stale report aborts the call and leaves state untouched.
fn scenario_3_stale_price() {
    println!("Scenario 3: Stale Price Rejection\n");

    let mut vault = fresh_vault();
    push_price(&mut vault, 40_000);
    vault.advance_time(150_000); // three 50s blocks

    let bob = AccountId(2);
    let reserve_before = vault.fee_reserve();
    let result = vault.increase_position(bob, BTC, PRICE_SCALE, Side::Long);
    println!("  increase after 150s: {:?}", result.unwrap_err());
    assert_eq!(vault.fee_reserve(), reserve_before);
    println!("  fee reserve unchanged: {}\n", vault.fee_reserve());
}

/// Forced closure at the liquidation rate.
fn scenario_4_liquidation() {
    println!("Scenario 4: Liquidation\n");

    let mut vault = fresh_vault();
    push_price(&mut vault, 40_000);

    let carol = AccountId(3);
    vault
        .increase_position(carol, BTC, PRICE_SCALE, Side::Long)
        .unwrap();

    vault.advance_time(5_000);
    push_price(&mut vault, 30_000);

    let liq = vault
        .liquidate_position(ADMIN, carol, BTC, Side::Long)
        .unwrap();
    println!(
        "  carol liquidated @ {}: loss delta {} (fee {} -> lp {}, protocol {})",
        liq.price, liq.pnl_delta, liq.fee, liq.liquidity_fee, liq.protocol_fee
    );
    println!("  open positions: {}", vault.open_positions());
}
