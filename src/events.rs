// 8.0: every vault mutation produces a record. used for audit trails and for
// downstream collaborators that need the fee halves of each action
// independently inspectable.

use serde::{Deserialize, Serialize};

use crate::types::{AccountId, AssetId, Price, Side, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub payload: EventPayload,
}

impl Event {
    pub fn new(id: EventId, timestamp: Timestamp, payload: EventPayload) -> Self {
        Self {
            id,
            timestamp,
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventPayload {
    // Configuration events
    SetFees(SetFeesEvent),
    SetAssetConfig(SetAssetConfigEvent),

    // Price events
    PriceUpdate(PriceUpdateEvent),

    // Position events
    IncreasePosition(IncreasePositionEvent),
    DecreasePosition(DecreasePositionEvent),
    LiquidatePosition(LiquidatePositionEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFeesEvent {
    pub liquidity_bps: u32,
    pub increase_position_bps: u32,
    pub decrease_position_bps: u32,
    pub liquidation_bps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAssetConfigEvent {
    pub asset: AssetId,
    pub symbol: String,
    pub max_leverage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceUpdateEvent {
    pub asset: AssetId,
    pub magnitude: u128,
    pub negative: bool,
    pub timestamp_ns: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncreasePositionEvent {
    pub account: AccountId,
    pub asset: AssetId,
    pub side: Side,
    pub size_delta: u128,
    pub price: Price,
    pub new_size: u128,
    pub new_average_price: Price,
    pub out_liquidity_fee: u128,
    pub out_protocol_fee: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecreasePositionEvent {
    pub account: AccountId,
    pub asset: AssetId,
    pub side: Side,
    pub size_delta: u128,
    pub price: Price,
    pub remaining_size: u128,
    pub has_profit: bool,
    pub pnl_delta: u128,
    pub receiver: AccountId,
    pub out_liquidity_fee: u128,
    pub out_protocol_fee: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiquidatePositionEvent {
    pub account: AccountId,
    pub asset: AssetId,
    pub side: Side,
    pub size: u128,
    pub price: Price,
    pub has_profit: bool,
    pub pnl_delta: u128,
    pub out_liquidity_fee: u128,
    pub out_protocol_fee: u128,
}
