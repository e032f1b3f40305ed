// 6.0: open position state. keyed by (account, asset, side), so the long and
// short books are independent and there is no flip logic. increase averages
// the entry price; decrease never moves it.

use serde::{Deserialize, Serialize};

use crate::math::{checked_add, weighted_average_price, MathError};
use crate::types::{AccountId, AssetId, Price, Side, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PositionKey {
    pub account: AccountId,
    pub asset: AssetId,
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Units of the underlying, 18 implied decimals.
    pub size: u128,
    /// Size-weighted entry price, 18 implied decimals.
    pub average_price: Price,
    pub opened_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Position {
    pub fn open(size: u128, fill_price: Price, timestamp: Timestamp) -> Self {
        Self {
            size,
            average_price: fill_price,
            opened_at: timestamp,
            updated_at: timestamp,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // 6.1: add exposure. the new entry price is the size-weighted average of
    // the old entry and the fill.
    pub fn increased(
        &self,
        size_delta: u128,
        fill_price: Price,
        timestamp: Timestamp,
    ) -> Result<Position, MathError> {
        let new_average = weighted_average_price(
            self.size,
            self.average_price.value(),
            size_delta,
            fill_price.value(),
        )?;
        let new_size = checked_add(self.size, size_delta)?;
        Ok(Position {
            size: new_size,
            average_price: Price::new(new_average),
            opened_at: self.opened_at,
            updated_at: timestamp,
        })
    }

    // 6.2: remove exposure. caller has already checked size_delta <= size.
    pub fn reduced(&self, size_delta: u128, timestamp: Timestamp) -> Position {
        debug_assert!(size_delta <= self.size);
        Position {
            size: self.size - size_delta,
            average_price: self.average_price,
            opened_at: self.opened_at,
            updated_at: timestamp,
        }
    }
}
