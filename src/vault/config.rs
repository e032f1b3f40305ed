//! Vault configuration options.

use crate::oracle::DEFAULT_MAX_PRICE_AGE_MS;

/// Vault configuration.
#[derive(Debug, Clone)]
pub struct VaultConfig {
    /// Maximum oracle report age before a price read fails.
    pub max_price_age_ms: i64,
    /// Maximum number of events to retain in memory.
    pub max_events: usize,
    /// Enable verbose logging.
    pub verbose: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            max_price_age_ms: DEFAULT_MAX_PRICE_AGE_MS,
            max_events: 100_000,
            verbose: false,
        }
    }
}
