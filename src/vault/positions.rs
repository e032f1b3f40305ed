// 9.3: position lifecycle. each operation resolves the price, computes fees
// and pnl into locals, and only then mutates state. any failure before the
// commit point leaves the schedule, reserve, and positions untouched.

use super::core::{is_authorized, Vault};
use super::results::{DecreaseResult, IncreaseResult, LiquidationResult, VaultError};
use crate::events::{
    DecreasePositionEvent, EventPayload, IncreasePositionEvent, LiquidatePositionEvent,
};
use crate::fees::{position_fee, split_fee, FeeKind};
use crate::math::checked_add;
use crate::pnl::calculate_pnl;
use crate::position::{Position, PositionKey};
use crate::types::{AccountId, AssetId, Price, Side};

impl Vault {
    /// Add exposure for `account` in `asset`. Creates the position on first
    /// increase; afterwards the entry price is re-averaged against the fill.
    pub fn increase_position(
        &mut self,
        account: AccountId,
        asset: AssetId,
        size_delta: u128,
        side: Side,
    ) -> Result<IncreaseResult, VaultError> {
        if size_delta == 0 {
            return Err(VaultError::ZeroSizeDelta);
        }

        let asset_config = self
            .assets
            .get(&asset)
            .ok_or(VaultError::AssetNotConfigured(asset))?;
        if !asset_config.active {
            return Err(VaultError::AssetNotActive(asset));
        }

        let price = self.price_book.price(asset, self.current_time)?;

        let rate = self.fee_schedule.bps_for(FeeKind::IncreasePosition);
        let fee = position_fee(size_delta, rate)?;
        let split = split_fee(fee);

        let key = PositionKey {
            account,
            asset,
            side,
        };
        let new_position = match self.positions.get(&key) {
            Some(existing) => existing.increased(size_delta, price, self.current_time)?,
            None => Position::open(size_delta, price, self.current_time),
        };
        let new_reserve = checked_add(self.fee_reserve, split.protocol_fee)?;

        // commit point: nothing below can fail
        self.fee_reserve = new_reserve;
        self.positions.insert(key, new_position);

        self.emit_event(EventPayload::IncreasePosition(IncreasePositionEvent {
            account,
            asset,
            side,
            size_delta,
            price,
            new_size: new_position.size,
            new_average_price: new_position.average_price,
            out_liquidity_fee: split.liquidity_fee,
            out_protocol_fee: split.protocol_fee,
        }));

        Ok(IncreaseResult {
            price,
            fee,
            liquidity_fee: split.liquidity_fee,
            protocol_fee: split.protocol_fee,
            new_size: new_position.size,
            new_average_price: new_position.average_price,
        })
    }

    /// Remove exposure. Realizes pnl on the closed portion against the stored
    /// average price; settlement transfer to `receiver` happens outside this
    /// core. The position is deleted when its size reaches zero.
    pub fn decrease_position(
        &mut self,
        account: AccountId,
        asset: AssetId,
        price_limit: Price,
        size_delta: u128,
        side: Side,
        receiver: AccountId,
    ) -> Result<DecreaseResult, VaultError> {
        if size_delta == 0 {
            return Err(VaultError::ZeroSizeDelta);
        }

        if !self.assets.contains_key(&asset) {
            return Err(VaultError::AssetNotConfigured(asset));
        }

        let price = self.price_book.price(asset, self.current_time)?;

        // slippage guard: a long exit wants the price at or above the limit,
        // a short exit at or below it
        let violates_limit = match side {
            Side::Long => price < price_limit,
            Side::Short => price > price_limit,
        };
        if violates_limit {
            return Err(VaultError::SlippageExceeded {
                price,
                limit: price_limit,
                side,
            });
        }

        let key = PositionKey {
            account,
            asset,
            side,
        };
        let position = self
            .positions
            .get(&key)
            .ok_or(VaultError::PositionNotFound {
                account,
                asset,
                side,
            })?;

        if size_delta > position.size {
            return Err(VaultError::InsufficientPositionSize {
                requested: size_delta,
                available: position.size,
            });
        }

        let pnl = calculate_pnl(size_delta, price, position.average_price, side)?;

        let rate = self.fee_schedule.bps_for(FeeKind::DecreasePosition);
        let fee = position_fee(size_delta, rate)?;
        let split = split_fee(fee);

        let remaining = position.reduced(size_delta, self.current_time);
        let new_reserve = checked_add(self.fee_reserve, split.protocol_fee)?;

        // commit point
        self.fee_reserve = new_reserve;
        if remaining.is_empty() {
            self.positions.remove(&key);
        } else {
            self.positions.insert(key, remaining);
        }

        self.emit_event(EventPayload::DecreasePosition(DecreasePositionEvent {
            account,
            asset,
            side,
            size_delta,
            price,
            remaining_size: remaining.size,
            has_profit: pnl.has_profit,
            pnl_delta: pnl.delta,
            receiver,
            out_liquidity_fee: split.liquidity_fee,
            out_protocol_fee: split.protocol_fee,
        }));

        Ok(DecreaseResult {
            price,
            has_profit: pnl.has_profit,
            pnl_delta: pnl.delta,
            fee,
            liquidity_fee: split.liquidity_fee,
            protocol_fee: split.protocol_fee,
            remaining_size: remaining.size,
        })
    }

    /// Forced full closure at the liquidation rate. Admin only; the margin
    /// check that decides whether a position is liquidatable lives with the
    /// embedding host.
    pub fn liquidate_position(
        &mut self,
        caller: AccountId,
        account: AccountId,
        asset: AssetId,
        side: Side,
    ) -> Result<LiquidationResult, VaultError> {
        if !is_authorized(self, caller) {
            return Err(VaultError::Unauthorized(caller));
        }

        if !self.assets.contains_key(&asset) {
            return Err(VaultError::AssetNotConfigured(asset));
        }

        let price = self.price_book.price(asset, self.current_time)?;

        let key = PositionKey {
            account,
            asset,
            side,
        };
        let position = self
            .positions
            .get(&key)
            .ok_or(VaultError::PositionNotFound {
                account,
                asset,
                side,
            })?;
        let closed_size = position.size;

        let pnl = calculate_pnl(closed_size, price, position.average_price, side)?;

        let rate = self.fee_schedule.bps_for(FeeKind::Liquidation);
        let fee = position_fee(closed_size, rate)?;
        let split = split_fee(fee);

        let new_reserve = checked_add(self.fee_reserve, split.protocol_fee)?;

        // commit point
        self.fee_reserve = new_reserve;
        self.positions.remove(&key);

        self.emit_event(EventPayload::LiquidatePosition(LiquidatePositionEvent {
            account,
            asset,
            side,
            size: closed_size,
            price,
            has_profit: pnl.has_profit,
            pnl_delta: pnl.delta,
            out_liquidity_fee: split.liquidity_fee,
            out_protocol_fee: split.protocol_fee,
        }));

        Ok(LiquidationResult {
            price,
            closed_size,
            has_profit: pnl.has_profit,
            pnl_delta: pnl.delta,
            fee,
            liquidity_fee: split.liquidity_fee,
            protocol_fee: split.protocol_fee,
        })
    }
}
