// 7.0: per-asset market parameters. owned by the vault, inserted or replaced
// whole by set_asset_config, immutable in between.

use serde::{Deserialize, Serialize};

use crate::types::{AssetId, Bps};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    pub asset: AssetId,
    // Market symbol (e.g. "BTC-PERP")
    pub symbol: String,
    // Maximum leverage multiplier for positions in this market
    pub max_leverage: u32,
    // Funding inputs: rate per interval and interval length
    pub funding_rate_bps: Bps,
    pub funding_interval_ms: i64,
    // Inactive markets reject new exposure but still allow decreases
    pub active: bool,
}

impl AssetConfig {
    pub fn new(asset: AssetId, symbol: &str, max_leverage: u32) -> Self {
        Self {
            asset,
            symbol: symbol.to_string(),
            max_leverage,
            funding_rate_bps: Bps::new_unchecked(1),
            funding_interval_ms: 28_800_000, // 8 hours
            active: true,
        }
    }

    pub fn with_funding(mut self, rate_bps: Bps, interval_ms: i64) -> Self {
        self.funding_rate_bps = rate_bps;
        self.funding_interval_ms = interval_ms;
        self
    }

    pub fn paused(mut self) -> Self {
        self.active = false;
        self
    }
}
