// 3.0: oracle price decode and freshness gating. the wire format is a signed
// 128-bit fixed-point value biased by 2^127, split into two unsigned 64-bit
// halves, plus a nanosecond timestamp. decode recovers sign and magnitude;
// every downstream consumer uses magnitude only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::types::{AssetId, Price, Timestamp};

/// Bias added to the signed wire value so the encoding is always non-negative.
pub const PRICE_BIAS: u128 = 1 << 127;

/// Conservative freshness window. A 150-second-old report must be rejected.
pub const DEFAULT_MAX_PRICE_AGE_MS: i64 = 60_000;

// 3.1: one report as delivered by the feed updater. never mutated after submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OraclePriceReport {
    pub lower: u64,
    pub upper: u64,
    pub timestamp_ns: u64,
}

impl OraclePriceReport {
    /// Encode a magnitude into the biased wire format. Feed-updater side.
    /// Positive magnitudes must be < 2^127, negative ones <= 2^127.
    pub fn from_magnitude(magnitude: u128, negative: bool, timestamp_ns: u64) -> Self {
        debug_assert!(if negative {
            magnitude <= PRICE_BIAS
        } else {
            magnitude < PRICE_BIAS
        });
        let wide = if negative {
            PRICE_BIAS - magnitude
        } else {
            PRICE_BIAS + magnitude
        };
        Self {
            lower: wide as u64,
            upper: (wide >> 64) as u64,
            timestamp_ns,
        }
    }

    // 3.2: reconstruct the biased integer and branch on 2^127. no reliance on
    // native signed overflow semantics.
    pub fn decode(&self) -> DecodedPrice {
        let wide = ((self.upper as u128) << 64) | self.lower as u128;
        if wide >= PRICE_BIAS {
            DecodedPrice {
                magnitude: wide - PRICE_BIAS,
                negative: false,
            }
        } else {
            DecodedPrice {
                magnitude: PRICE_BIAS - wide,
                negative: true,
            }
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        Timestamp::from_nanos(self.timestamp_ns)
    }
}

/// Bias-removed sign and magnitude. Ephemeral, recomputed on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedPrice {
    pub magnitude: u128,
    pub negative: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("no price feed for asset {0:?}")]
    FeedNotFound(AssetId),

    #[error("stale price for asset {asset:?}: age {age_ms}ms exceeds {max_age_ms}ms")]
    StalePrice {
        asset: AssetId,
        age_ms: i64,
        max_age_ms: i64,
    },
}

// 3.3: latest report per asset. submit replaces, read decodes fresh every time.
// a stale report never falls back to anything; the read just fails.
#[derive(Debug, Clone)]
pub struct PriceBook {
    reports: HashMap<AssetId, OraclePriceReport>,
    max_age_ms: i64,
}

impl PriceBook {
    pub fn new(max_age_ms: i64) -> Self {
        Self {
            reports: HashMap::new(),
            max_age_ms,
        }
    }

    pub fn submit(&mut self, asset: AssetId, report: OraclePriceReport) {
        self.reports.insert(asset, report);
    }

    pub fn report(&self, asset: AssetId) -> Option<&OraclePriceReport> {
        self.reports.get(&asset)
    }

    pub fn max_age_ms(&self) -> i64 {
        self.max_age_ms
    }

    /// Decode the latest report for `asset`, rejecting anything older than the
    /// freshness window relative to `now`.
    pub fn price(&self, asset: AssetId, now: Timestamp) -> Result<Price, OracleError> {
        let report = self
            .reports
            .get(&asset)
            .ok_or(OracleError::FeedNotFound(asset))?;

        let age_ms = now.abs_diff_millis(report.timestamp());
        if age_ms > self.max_age_ms {
            return Err(OracleError::StalePrice {
                asset,
                age_ms,
                max_age_ms: self.max_age_ms,
            });
        }

        Ok(Price::new(report.decode().magnitude))
    }
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PRICE_AGE_MS)
    }
}
