// vault-core: perpetual position accounting engine.
// bit-exact fixed-point arithmetic; every output is a literal integer, never
// an approximation. all computation is deterministic with no external I/O.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x types.rs: primitives: AssetId, AccountId, Side, Bps, Timestamp, Price
//   2.x math.rs: checked u128 arithmetic, 256-bit mul_div, weighted averages
//   3.x oracle.rs: biased 128-bit wire decode, freshness gating, price book
//   4.x pnl.rs: profit/loss magnitude + direction, pure function
//   5.x fees.rs: bps schedule, position fees, liquidity/protocol split
//   6.x position.rs: position state, entry averaging, reduction
//   7.x config.rs: per-asset market parameters
//   8.x events.rs: mutation records for audit and downstream consumers
//   9.x vault/: the ledger: orchestration, authorization, atomic commits

pub mod config;
pub mod events;
pub mod fees;
pub mod math;
pub mod oracle;
pub mod pnl;
pub mod position;
pub mod types;
pub mod vault;

pub use config::*;
pub use events::*;
pub use fees::*;
pub use math::*;
pub use oracle::*;
pub use pnl::*;
pub use position::*;
pub use types::*;
pub use vault::{
    is_authorized, DecreaseResult, IncreaseResult, LiquidationResult, Vault, VaultConfig,
    VaultError,
};
