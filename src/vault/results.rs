// 9.0.2: result types and errors for vault operations.

use crate::fees::FeeError;
use crate::math::MathError;
use crate::oracle::OracleError;
use crate::types::{AccountId, AssetId, Price, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncreaseResult {
    pub price: Price,
    pub fee: u128,
    pub liquidity_fee: u128,
    pub protocol_fee: u128,
    pub new_size: u128,
    pub new_average_price: Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecreaseResult {
    pub price: Price,
    pub has_profit: bool,
    pub pnl_delta: u128,
    pub fee: u128,
    pub liquidity_fee: u128,
    pub protocol_fee: u128,
    pub remaining_size: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiquidationResult {
    pub price: Price,
    pub closed_size: u128,
    pub has_profit: bool,
    pub pnl_delta: u128,
    pub fee: u128,
    pub liquidity_fee: u128,
    pub protocol_fee: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum VaultError {
    #[error("caller {0:?} is not authorized")]
    Unauthorized(AccountId),

    #[error("asset {0:?} is not configured")]
    AssetNotConfigured(AssetId),

    #[error("asset {0:?} is not active")]
    AssetNotActive(AssetId),

    #[error("no {side:?} position for account {account:?} in asset {asset:?}")]
    PositionNotFound {
        account: AccountId,
        asset: AssetId,
        side: Side,
    },

    #[error("decrease of {requested} exceeds position size {available}")]
    InsufficientPositionSize { requested: u128, available: u128 },

    #[error("size delta must be non-zero")]
    ZeroSizeDelta,

    #[error("price {price} violates limit {limit} for {side:?} decrease")]
    SlippageExceeded {
        price: Price,
        limit: Price,
        side: Side,
    },

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("math error: {0}")]
    Math(#[from] MathError),

    #[error("fee error: {0}")]
    Fee(#[from] FeeError),
}
