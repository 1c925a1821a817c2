// Tick Ledger Types - Using types from packages

use soroban_sdk::{contracttype, Address};

// Re-export types from packages
pub use belugaswap_math::Dec;
pub use belugaswap_tick::{DecCoin, FeeGrowth, PoolDescriptor, TickInfo};

// ============================================================
// LEDGER CONFIGURATION
// ============================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Position/swap manager allowed to mutate ticks and pools
    pub admin: Address,
}
