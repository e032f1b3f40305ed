//! Price feed operations: report submission and canonical reads.

use super::core::Vault;
use super::results::VaultError;
use crate::events::{EventPayload, PriceUpdateEvent};
use crate::oracle::OraclePriceReport;
use crate::pnl::{calculate_pnl, Pnl};
use crate::types::{AssetId, Price, Side};

impl Vault {
    /// Store a new oracle report for `asset`. Replaces any previous report.
    pub fn submit_price(&mut self, asset: AssetId, report: OraclePriceReport) {
        let decoded = report.decode();

        self.price_book.submit(asset, report);

        self.emit_event(EventPayload::PriceUpdate(PriceUpdateEvent {
            asset,
            magnitude: decoded.magnitude,
            negative: decoded.negative,
            timestamp_ns: report.timestamp_ns,
        }));
    }

    /// Canonical price for `asset` at the current reference time.
    pub fn price(&self, asset: AssetId) -> Result<Price, VaultError> {
        Ok(self.price_book.price(asset, self.current_time)?)
    }

    /// Read-only pnl diagnostic. Takes every input explicitly and touches no
    /// state beyond checking the asset exists.
    pub fn calculate_pnl(
        &self,
        asset: AssetId,
        size: u128,
        current_price: Price,
        average_price: Price,
        side: Side,
    ) -> Result<Pnl, VaultError> {
        if !self.assets.contains_key(&asset) {
            return Err(VaultError::AssetNotConfigured(asset));
        }
        Ok(calculate_pnl(size, current_price, average_price, side)?)
    }
}
