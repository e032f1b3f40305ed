// 1.0: all the primitives live here. nothing in the vault works without these types.
// IDs, sides, basis points, timestamps, prices, amounts. each is a newtype so the
// compiler catches unit mixups.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::math::{MAX_BPS, PRICE_DECIMALS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u64);

// Long = profit when price goes up. Short = profit when price goes down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::Long => Side::Short,
            Side::Short => Side::Long,
        }
    }

    pub fn is_long(&self) -> bool {
        matches!(self, Side::Long)
    }
}

// 1.1: basis points. 100 bps = 1%. capped at 10000 (100%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bps(u32);

impl Bps {
    #[must_use]
    pub fn new(bps: u32) -> Option<Self> {
        if bps <= MAX_BPS {
            Some(Self(bps))
        } else {
            None
        }
    }

    pub fn new_unchecked(bps: u32) -> Self {
        debug_assert!(bps <= MAX_BPS);
        Self(bps)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Bps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bps", self.0)
    }
}

// 1.2: millisecond timestamp. oracle reports arrive in nanoseconds and are
// truncated to milliseconds on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn from_nanos(ns: u64) -> Self {
        Self((ns / 1_000_000) as i64)
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    pub fn abs_diff_millis(&self, other: Timestamp) -> i64 {
        (self.0 - other.0).abs()
    }
}

// 1.3: price magnitude in quote currency per unit of base, 18 implied decimals.
// always unsigned: the oracle decodes sign separately and consumers use magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Price(u128);

impl Price {
    pub fn new(value: u128) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_fixed(self.0, PRICE_DECIMALS))
    }
}

// renders a fixed-point integer as a decimal string with trailing zeros trimmed.
// display only. the core never converts back from strings.
pub(crate) fn format_fixed(value: u128, decimals: u32) -> String {
    let scale = 10u128.pow(decimals);
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let mut frac_str = format!("{:0width$}", frac, width = decimals as usize);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}
