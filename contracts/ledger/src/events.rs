// Tick ledger events module for BelugaSwap
// All events use compact names to reduce storage/gas costs

use belugaswap_math::Dec;
use belugaswap_tick::FeeGrowth;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted when the ledger is initialized
/// Topics: ("LedgerInit",)
/// Data: admin
pub fn emit_initialized(env: &Env, admin: &Address) {
    env.events()
        .publish((Symbol::new(env, "LedgerInit"),), admin.clone());
}

/// Topics: ("PoolReg", pool_id)
/// Data: current_tick
pub fn emit_pool_registered(env: &Env, pool_id: u64, current_tick: i64) {
    env.events()
        .publish((Symbol::new(env, "PoolReg"), pool_id), current_tick);
}

/// Topics: ("PoolSync", pool_id)
/// Data: current_tick
pub fn emit_pool_synced(env: &Env, pool_id: u64, current_tick: i64) {
    env.events()
        .publish((Symbol::new(env, "PoolSync"), pool_id), current_tick);
}

/// Topics: ("TickUpsert", pool_id)
/// Data: (tick_index, liquidity_delta, upper, is_empty)
pub fn emit_tick_upserted(
    env: &Env,
    pool_id: u64,
    tick_index: i64,
    liquidity_delta: Dec,
    upper: bool,
    is_empty: bool,
) {
    env.events().publish(
        (Symbol::new(env, "TickUpsert"), pool_id),
        (tick_index, liquidity_delta, upper, is_empty),
    );
}

/// Topics: ("TickCross", pool_id)
/// Data: (tick_index, fee_growth)
pub fn emit_tick_crossed(env: &Env, pool_id: u64, tick_index: i64, fee_growth: &FeeGrowth) {
    env.events().publish(
        (Symbol::new(env, "TickCross"), pool_id),
        (tick_index, fee_growth.clone()),
    );
}

/// Topics: ("TickSet", pool_id)
/// Data: tick_index
pub fn emit_tick_set(env: &Env, pool_id: u64, tick_index: i64) {
    env.events()
        .publish((Symbol::new(env, "TickSet"), pool_id), tick_index);
}

/// Topics: ("TickRemove", pool_id)
/// Data: tick_index
pub fn emit_tick_removed(env: &Env, pool_id: u64, tick_index: i64) {
    env.events()
        .publish((Symbol::new(env, "TickRemove"), pool_id), tick_index);
}

/// Topics: ("TickImport",)
/// Data: count
pub fn emit_ticks_imported(env: &Env, count: u32) {
    env.events()
        .publish((Symbol::new(env, "TickImport"),), count);
}
