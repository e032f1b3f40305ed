// 9.0: vault ledger. the only holder of mutable cross-call state: fee schedule,
// fee reserve, asset configs, positions, and the oracle price book.
// deterministic and sequential with no external I/O; every call is atomic.

mod config;
mod core;
mod positions;
mod pricing;
mod results;

pub use config::VaultConfig;
pub use core::{is_authorized, Vault};
pub use results::{DecreaseResult, IncreaseResult, LiquidationResult, VaultError};
