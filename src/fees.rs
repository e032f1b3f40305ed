// 5.0: fee engine. a bps rate per action, floor math, and the 50/50 split.
// the protocol half floors; the odd unit stays on the liquidity side so the
// two halves always reconstruct the full fee exactly.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::math::{mul_div_floor, MathError, MAX_BPS};
use crate::types::Bps;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("fee value {value} for {field} outside [0, 10000]")]
    InvalidFeeValue { field: &'static str, value: u32 },
}

/// Which schedule rate applies to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeKind {
    Liquidity,
    IncreasePosition,
    DecreasePosition,
    Liquidation,
}

// 5.1: the four configured rates. replaced whole on reconfiguration, all four
// fields together or none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub liquidity: Bps,
    pub increase_position: Bps,
    pub decrease_position: Bps,
    pub liquidation: Bps,
}

impl FeeSchedule {
    pub fn new(
        liquidity_bps: u32,
        increase_bps: u32,
        decrease_bps: u32,
        liquidation_bps: u32,
    ) -> Result<Self, FeeError> {
        let check = |field, value| {
            Bps::new(value).ok_or(FeeError::InvalidFeeValue { field, value })
        };
        Ok(Self {
            liquidity: check("liquidity", liquidity_bps)?,
            increase_position: check("increase_position", increase_bps)?,
            decrease_position: check("decrease_position", decrease_bps)?,
            liquidation: check("liquidation", liquidation_bps)?,
        })
    }

    pub fn bps_for(&self, kind: FeeKind) -> Bps {
        match kind {
            FeeKind::Liquidity => self.liquidity,
            FeeKind::IncreasePosition => self.increase_position,
            FeeKind::DecreasePosition => self.decrease_position,
            FeeKind::Liquidation => self.liquidation,
        }
    }
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            liquidity: Bps::new_unchecked(30),
            increase_position: Bps::new_unchecked(10),
            decrease_position: Bps::new_unchecked(0),
            liquidation: Bps::new_unchecked(10),
        }
    }
}

/// floor(size_delta * rate / 10000).
pub fn position_fee(size_delta: u128, rate: Bps) -> Result<u128, MathError> {
    mul_div_floor(size_delta, rate.value() as u128, MAX_BPS as u128)
}

// 5.2: split between the liquidity pool and the protocol reserve.
// liquidity_fee + protocol_fee == fee exactly, and when the fee is odd the
// spare unit goes to liquidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub liquidity_fee: u128,
    pub protocol_fee: u128,
}

pub fn split_fee(fee: u128) -> FeeSplit {
    let protocol_fee = fee / 2;
    FeeSplit {
        liquidity_fee: fee - protocol_fee,
        protocol_fee,
    }
}
