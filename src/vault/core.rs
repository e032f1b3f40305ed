// 9.1: core vault struct. all state lives here. configuration mutators check
// the caller against the admin before touching anything.

use super::config::VaultConfig;
use super::results::VaultError;
use crate::config::AssetConfig;
use crate::events::{Event, EventId, EventPayload, SetAssetConfigEvent, SetFeesEvent};
use crate::fees::FeeSchedule;
use crate::oracle::PriceBook;
use crate::position::{Position, PositionKey};
use crate::types::{AccountId, AssetId, Side, Timestamp};
use std::collections::HashMap;

/// Capability check for configuration calls. Only the admin set at
/// construction may reconfigure the vault.
pub fn is_authorized(vault: &Vault, caller: AccountId) -> bool {
    caller == vault.admin
}

#[derive(Debug)]
pub struct Vault {
    pub(super) config: VaultConfig,
    pub(super) admin: AccountId,
    pub(super) fee_schedule: FeeSchedule,
    pub(super) fee_reserve: u128,
    pub(super) assets: HashMap<AssetId, AssetConfig>,
    pub(super) positions: HashMap<PositionKey, Position>,
    pub(super) price_book: PriceBook,
    pub(super) events: Vec<Event>,
    pub(super) next_event_id: u64,
    pub(super) current_time: Timestamp,
}

impl Vault {
    pub fn new(admin: AccountId, config: VaultConfig) -> Self {
        let price_book = PriceBook::new(config.max_price_age_ms);
        Self {
            config,
            admin,
            fee_schedule: FeeSchedule::default(),
            fee_reserve: 0,
            assets: HashMap::new(),
            positions: HashMap::new(),
            price_book,
            events: Vec::new(),
            next_event_id: 1,
            current_time: Timestamp::from_millis(0),
        }
    }

    pub fn set_time(&mut self, timestamp: Timestamp) {
        self.current_time = timestamp;
    }

    pub fn time(&self) -> Timestamp {
        self.current_time
    }

    pub fn advance_time(&mut self, millis: i64) {
        self.current_time = Timestamp::from_millis(self.current_time.as_millis() + millis);
    }

    // fee schedule getters, one per rate
    pub fn liquidity_fee_basis_points(&self) -> u32 {
        self.fee_schedule.liquidity.value()
    }

    pub fn increase_position_fee_basis_points(&self) -> u32 {
        self.fee_schedule.increase_position.value()
    }

    pub fn decrease_position_fee_basis_points(&self) -> u32 {
        self.fee_schedule.decrease_position.value()
    }

    pub fn liquidation_fee_basis_points(&self) -> u32 {
        self.fee_schedule.liquidation.value()
    }

    pub fn fee_schedule(&self) -> &FeeSchedule {
        &self.fee_schedule
    }

    /// Protocol fee reserve balance. Credited by the protocol half of every
    /// position fee; withdrawal lives outside this core.
    pub fn fee_reserve(&self) -> u128 {
        self.fee_reserve
    }

    pub fn asset_config(&self, asset: AssetId) -> Option<&AssetConfig> {
        self.assets.get(&asset)
    }

    pub fn position(&self, account: AccountId, asset: AssetId, side: Side) -> Option<&Position> {
        self.positions.get(&PositionKey {
            account,
            asset,
            side,
        })
    }

    pub fn open_positions(&self) -> usize {
        self.positions.len()
    }

    // 9.2: replace the whole fee schedule. all four rates validate before any
    // of them is applied.
    pub fn set_fees(
        &mut self,
        caller: AccountId,
        liquidity_bps: u32,
        increase_bps: u32,
        decrease_bps: u32,
        liquidation_bps: u32,
    ) -> Result<(), VaultError> {
        if !is_authorized(self, caller) {
            return Err(VaultError::Unauthorized(caller));
        }

        let schedule =
            FeeSchedule::new(liquidity_bps, increase_bps, decrease_bps, liquidation_bps)?;
        self.fee_schedule = schedule;

        self.emit_event(EventPayload::SetFees(SetFeesEvent {
            liquidity_bps,
            increase_position_bps: increase_bps,
            decrease_position_bps: decrease_bps,
            liquidation_bps,
        }));

        Ok(())
    }

    pub fn set_asset_config(
        &mut self,
        caller: AccountId,
        config: AssetConfig,
    ) -> Result<(), VaultError> {
        if !is_authorized(self, caller) {
            return Err(VaultError::Unauthorized(caller));
        }

        self.emit_event(EventPayload::SetAssetConfig(SetAssetConfigEvent {
            asset: config.asset,
            symbol: config.symbol.clone(),
            max_leverage: config.max_leverage,
        }));

        self.assets.insert(config.asset, config);
        Ok(())
    }

    pub fn recent_events(&self, count: usize) -> &[Event] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub(super) fn emit_event(&mut self, payload: EventPayload) {
        let event = Event::new(EventId(self.next_event_id), self.current_time, payload);
        self.next_event_id += 1;

        if self.config.verbose {
            println!("[Event {}] {:?}", event.id.0, event.payload);
        }

        self.events.push(event);

        if self.events.len() > self.config.max_events {
            let drain_count = self.events.len() - self.config.max_events;
            self.events.drain(0..drain_count);
        }
    }
}
