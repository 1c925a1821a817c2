#![allow(dead_code)]

use belugaswap_tick::{Dec, DecCoin, FeeGrowth, MemoryPoolRegistry, PoolDescriptor};
use soroban_sdk::{testutils::Address as _, Address, Env};

// Test constants
pub const POOL_ID: u64 = 1;
pub const OTHER_POOL_ID: u64 = 2;
pub const DEFAULT_TICK: i64 = 0;

/// Registry knowing POOL_ID and OTHER_POOL_ID at `current_tick` with `global` fee growth
pub fn setup_registry(env: &Env, current_tick: i64, global: &FeeGrowth) -> MemoryPoolRegistry {
    let mut registry = MemoryPoolRegistry::new(env);
    for pool_id in [POOL_ID, OTHER_POOL_ID] {
        registry.insert(PoolDescriptor {
            pool_id,
            current_tick,
            fee_growth_global: global.clone(),
        });
    }
    registry
}

/// Two denominations sorted so that `.0 < .1`
pub fn sorted_denoms(env: &Env) -> (Address, Address) {
    let a = Address::generate(env);
    let b = Address::generate(env);
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

pub fn coin(denom: &Address, amount: i64) -> DecCoin {
    DecCoin {
        denom: denom.clone(),
        amount: Dec::from_int(amount),
    }
}

pub fn fee_growth(env: &Env, entries: &[(&Address, i64)]) -> FeeGrowth {
    let mut out = FeeGrowth::new(env);
    for (denom, amount) in entries {
        out = out.checked_add_coin(&coin(denom, *amount)).unwrap();
    }
    out
}
