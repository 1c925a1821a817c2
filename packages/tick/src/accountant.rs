// Tick Accountant
//
// Owns the tick lifecycle on top of an injected TickStore, PoolRegistry and
// FeeGrowthSeeder. Every operation reads, validates, and only then writes, so
// a failed call never leaves a partial update behind.

use belugaswap_math::Dec;
use soroban_sdk::{log, Bytes, Env, Vec};

use crate::codec::{decode_tick, encode_tick};
use crate::error::TickError;
use crate::keys::{decode_tick_key, pool_tick_prefix, tick_key, tick_table_prefix};
use crate::registry::PoolRegistry;
use crate::seeder::FeeGrowthSeeder;
use crate::store::TickStore;
use crate::types::{DecCoin, FeeGrowth, TickInfo};
use crate::update::{apply_liquidity_delta, flip_fee_growth, select_next_initialized};

pub struct TickAccountant<'a, S, R, F>
where
    S: TickStore,
    R: PoolRegistry,
    F: FeeGrowthSeeder,
{
    env: Env,
    store: &'a mut S,
    registry: &'a R,
    seeder: &'a F,
}

impl<'a, S, R, F> TickAccountant<'a, S, R, F>
where
    S: TickStore,
    R: PoolRegistry,
    F: FeeGrowthSeeder,
{
    pub fn new(env: &Env, store: &'a mut S, registry: &'a R, seeder: &'a F) -> Self {
        Self {
            env: env.clone(),
            store,
            registry,
            seeder,
        }
    }

    // ========================================================
    // LIFECYCLE
    // ========================================================

    /// Zero-liquidity tick for a key that is not stored yet. Writes nothing.
    pub fn new_tick_info(&self, pool_id: u64, tick_index: i64) -> Result<TickInfo, TickError> {
        let pool = self
            .registry
            .get_pool(pool_id)
            .ok_or(TickError::PoolNotFound)?;
        let fee_growth = self
            .seeder
            .initial_fee_growth(&self.env, &pool, tick_index)?;
        fee_growth.validate()?;
        Ok(TickInfo::uninitialized(pool_id, tick_index, fee_growth))
    }

    /// Stored tick, or a freshly vivified one when the key is absent
    pub fn get_tick_info(&self, pool_id: u64, tick_index: i64) -> Result<TickInfo, TickError> {
        let key = tick_key(&self.env, pool_id, tick_index);
        match self.store.get(&key) {
            Some(bytes) => self.decode_record(&key, &bytes),
            None => self.new_tick_info(pool_id, tick_index),
        }
    }

    /// Overwrite the record under the tick's own key; fails on non-canonical fee growth
    pub fn set_tick_info(&mut self, tick: &TickInfo) -> Result<(), TickError> {
        let key = tick_key(&self.env, tick.pool_id, tick.tick_index);
        let record = encode_tick(&self.env, tick)?;
        self.store.set(&key, &record);
        Ok(())
    }

    pub fn remove_tick_info(&mut self, pool_id: u64, tick_index: i64) {
        self.store.delete(&tick_key(&self.env, pool_id, tick_index));
    }

    // ========================================================
    // LIQUIDITY
    // ========================================================

    /// Apply a signed liquidity delta to a range boundary.
    ///
    /// Returns `true` when the tick ends up empty (gross and net both zero).
    /// The tick is persisted even when empty; purging is the caller's call.
    pub fn upsert_tick(
        &mut self,
        pool_id: u64,
        tick_index: i64,
        liquidity_delta: Dec,
        upper: bool,
    ) -> Result<bool, TickError> {
        let mut tick = self.get_tick_info(pool_id, tick_index)?;

        let is_empty = apply_liquidity_delta(&mut tick, liquidity_delta, upper).map_err(|err| {
            log!(&self.env, "tick upsert rejected", pool_id, tick_index, err as u32);
            err
        })?;

        self.set_tick_info(&tick)?;
        Ok(is_empty)
    }

    // ========================================================
    // CROSSING
    // ========================================================

    /// Flip fee growth outside of a tick the active price just passed through.
    ///
    /// `tick` is updated in place and persisted. Only `fee_growth` changes.
    pub fn cross_tick(
        &mut self,
        pool_id: u64,
        tick_index: i64,
        tick: Option<&mut TickInfo>,
        active_fee_growth: &DecCoin,
        fee_growth_global: &FeeGrowth,
    ) -> Result<(), TickError> {
        let tick = match tick {
            Some(tick) => tick,
            None => {
                log!(&self.env, "cross without tick", pool_id, tick_index);
                return Err(TickError::TickInfoNil);
            }
        };
        if tick.pool_id != pool_id || tick.tick_index != tick_index {
            log!(&self.env, "cross with foreign tick", pool_id, tick_index);
            return Err(TickError::TickMismatch);
        }

        let mut crossed = tick.clone();
        flip_fee_growth(&mut crossed, active_fee_growth, fee_growth_global)?;

        self.set_tick_info(&crossed)?;
        *tick = crossed;
        Ok(())
    }

    // ========================================================
    // ITERATION
    // ========================================================

    /// Every stored tick of `pool_id`, ascending by tick index
    pub fn initialized_ticks(&self, pool_id: u64) -> Result<Vec<TickInfo>, TickError> {
        self.scan(&pool_tick_prefix(&self.env, pool_id))
    }

    /// Every stored tick, ascending by (pool_id, tick_index)
    pub fn all_ticks(&self) -> Result<Vec<TickInfo>, TickError> {
        self.scan(&tick_table_prefix(&self.env))
    }

    /// Nearest tick with liquidity in the swap direction, if any
    pub fn next_initialized_tick(
        &self,
        pool_id: u64,
        current_tick: i64,
        zero_for_one: bool,
    ) -> Result<Option<TickInfo>, TickError> {
        let ticks = self.initialized_ticks(pool_id)?;
        Ok(select_next_initialized(&ticks, current_tick, zero_for_one))
    }

    fn scan(&self, prefix: &Bytes) -> Result<Vec<TickInfo>, TickError> {
        let mut ticks = Vec::new(&self.env);
        for (key, value) in self.store.iterate_prefix(prefix).iter() {
            ticks.push_back(self.decode_record(&key, &value)?);
        }
        Ok(ticks)
    }

    /// A record must describe the key it is stored under
    fn decode_record(&self, key: &Bytes, value: &Bytes) -> Result<TickInfo, TickError> {
        let tick = decode_tick(&self.env, value)?;
        if decode_tick_key(key) != Some((tick.pool_id, tick.tick_index)) {
            log!(&self.env, "tick record stored under foreign key", tick.pool_id, tick.tick_index);
            return Err(TickError::DecodeError);
        }
        Ok(tick)
    }
}
