#![no_std]

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

// External packages
use belugaswap_math::Dec;
use belugaswap_tick::{
    get_fee_growth_inside, ActiveSideSeeder, DecCoin, FeeGrowth, PoolDescriptor, TickAccountant,
    TickError, TickInfo,
};

// Local modules
mod error;
mod events;
mod storage;
pub mod types;

pub use error::LedgerError;
use events::*;
use storage::*;
pub use types::LedgerConfig;

type LedgerAccountant<'a> =
    TickAccountant<'a, LedgerTickStore, LedgerPoolRegistry, ActiveSideSeeder>;

/// Run `op` against an accountant wired to this contract's storage
fn with_accountant<T>(
    env: &Env,
    op: impl for<'a> FnOnce(&mut LedgerAccountant<'a>) -> Result<T, TickError>,
) -> Result<T, LedgerError> {
    let mut store = LedgerTickStore::new(env);
    let registry = LedgerPoolRegistry::new(env);
    let seeder = ActiveSideSeeder;
    let mut accountant = TickAccountant::new(env, &mut store, &registry, &seeder);
    op(&mut accountant).map_err(LedgerError::from)
}

fn require_initialized(env: &Env) -> Result<LedgerConfig, LedgerError> {
    read_config(env).ok_or(LedgerError::NotInitialized)
}

fn require_admin(env: &Env) -> Result<(), LedgerError> {
    require_initialized(env)?.admin.require_auth();
    Ok(())
}

/// Checks applied to ticks written verbatim by the admin
fn validate_tick(env: &Env, tick: &TickInfo) -> Result<(), LedgerError> {
    if tick.liquidity_gross.is_negative() {
        return Err(LedgerError::NegativeLiquidity);
    }
    tick.fee_growth.validate()?;
    if read_pool(env, tick.pool_id).is_none() {
        return Err(LedgerError::PoolNotFound);
    }
    Ok(())
}

#[contract]
pub struct TickLedger;

#[contractimpl]
impl TickLedger {
    // ========================================================
    // INITIALIZATION
    // ========================================================

    /// Initialize the ledger
    ///
    /// # Arguments
    /// * `admin` - Position/swap manager allowed to mutate ticks and pools
    pub fn initialize(env: Env, admin: Address) -> Result<(), LedgerError> {
        admin.require_auth();

        if is_initialized(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        write_config(&env, &LedgerConfig { admin: admin.clone() });
        set_initialized(&env);

        emit_initialized(&env, &admin);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        require_initialized(&env)
    }

    // ========================================================
    // POOL REGISTRY
    // ========================================================

    /// Register a pool so ticks can be materialized for it
    pub fn register_pool(
        env: Env,
        pool_id: u64,
        current_tick: i64,
        fee_growth_global: FeeGrowth,
    ) -> Result<(), LedgerError> {
        require_admin(&env)?;
        fee_growth_global.validate()?;

        if read_pool(&env, pool_id).is_some() {
            return Err(LedgerError::PoolAlreadyExists);
        }

        write_pool(
            &env,
            &PoolDescriptor {
                pool_id,
                current_tick,
                fee_growth_global,
            },
        );
        emit_pool_registered(&env, pool_id, current_tick);
        Ok(())
    }

    /// Record the pool's current tick and global fee growth after a swap
    pub fn sync_pool(
        env: Env,
        pool_id: u64,
        current_tick: i64,
        fee_growth_global: FeeGrowth,
    ) -> Result<(), LedgerError> {
        require_admin(&env)?;
        fee_growth_global.validate()?;

        if read_pool(&env, pool_id).is_none() {
            return Err(LedgerError::PoolNotFound);
        }

        write_pool(
            &env,
            &PoolDescriptor {
                pool_id,
                current_tick,
                fee_growth_global,
            },
        );
        emit_pool_synced(&env, pool_id, current_tick);
        Ok(())
    }

    pub fn get_pool(env: Env, pool_id: u64) -> Result<Option<PoolDescriptor>, LedgerError> {
        require_initialized(&env)?;
        Ok(read_pool(&env, pool_id))
    }

    // ========================================================
    // TICK ACCOUNTING
    // ========================================================

    /// Apply a liquidity delta to a range boundary
    ///
    /// # Arguments
    /// * `liquidity_delta` - Signed liquidity added (+) or removed (-)
    /// * `upper` - Whether this tick is the upper boundary of the range
    ///
    /// # Returns
    /// `true` when the tick is left empty; removing it is up to the caller
    pub fn upsert_tick(
        env: Env,
        pool_id: u64,
        tick_index: i64,
        liquidity_delta: Dec,
        upper: bool,
    ) -> Result<bool, LedgerError> {
        require_admin(&env)?;

        let is_empty = with_accountant(&env, |accountant| {
            accountant.upsert_tick(pool_id, tick_index, liquidity_delta, upper)
        })?;

        emit_tick_upserted(&env, pool_id, tick_index, liquidity_delta, upper, is_empty);
        Ok(is_empty)
    }

    /// Flip fee growth outside of a tick the active price just crossed
    ///
    /// # Arguments
    /// * `tick` - Tick being crossed, as loaded by the caller
    /// * `active_fee_growth` - Fee growth of the in-flight swap step
    /// * `fee_growth_global` - Pool fee growth accumulated so far
    ///
    /// # Returns
    /// The crossed tick as persisted
    pub fn cross_tick(
        env: Env,
        pool_id: u64,
        tick_index: i64,
        tick: Option<TickInfo>,
        active_fee_growth: DecCoin,
        fee_growth_global: FeeGrowth,
    ) -> Result<TickInfo, LedgerError> {
        require_admin(&env)?;

        let mut tick = tick;
        with_accountant(&env, |accountant| {
            accountant.cross_tick(
                pool_id,
                tick_index,
                tick.as_mut(),
                &active_fee_growth,
                &fee_growth_global,
            )
        })?;
        let crossed = tick.ok_or(LedgerError::TickInfoNil)?;

        emit_tick_crossed(&env, pool_id, tick_index, &crossed.fee_growth);
        Ok(crossed)
    }

    /// Zero-liquidity tick as it would be materialized now; writes nothing
    pub fn new_tick_info(env: Env, pool_id: u64, tick_index: i64) -> Result<TickInfo, LedgerError> {
        require_initialized(&env)?;
        with_accountant(&env, |accountant| accountant.new_tick_info(pool_id, tick_index))
    }

    /// Stored tick, or a fresh zero-liquidity one when absent
    pub fn get_tick(env: Env, pool_id: u64, tick_index: i64) -> Result<TickInfo, LedgerError> {
        require_initialized(&env)?;
        with_accountant(&env, |accountant| accountant.get_tick_info(pool_id, tick_index))
    }

    /// Overwrite a tick record verbatim
    pub fn set_tick(env: Env, tick: TickInfo) -> Result<(), LedgerError> {
        require_admin(&env)?;
        validate_tick(&env, &tick)?;

        with_accountant(&env, |accountant| accountant.set_tick_info(&tick))?;

        emit_tick_set(&env, tick.pool_id, tick.tick_index);
        Ok(())
    }

    /// Delete a tick record; absent ticks are ignored
    pub fn remove_tick(env: Env, pool_id: u64, tick_index: i64) -> Result<(), LedgerError> {
        require_admin(&env)?;

        with_accountant(&env, |accountant| {
            accountant.remove_tick_info(pool_id, tick_index);
            Ok(())
        })?;

        emit_tick_removed(&env, pool_id, tick_index);
        Ok(())
    }

    // ========================================================
    // VIEW FUNCTIONS
    // ========================================================

    /// Stored ticks of a pool, ascending by tick index
    pub fn list_initialized_ticks(env: Env, pool_id: u64) -> Result<Vec<TickInfo>, LedgerError> {
        require_initialized(&env)?;
        with_accountant(&env, |accountant| accountant.initialized_ticks(pool_id))
    }

    /// Stored ticks of every pool, ascending by (pool, tick)
    pub fn list_all_ticks(env: Env) -> Result<Vec<TickInfo>, LedgerError> {
        require_initialized(&env)?;
        with_accountant(&env, |accountant| accountant.all_ticks())
    }

    /// Nearest tick holding liquidity in the swap direction
    pub fn next_initialized_tick(
        env: Env,
        pool_id: u64,
        current_tick: i64,
        zero_for_one: bool,
    ) -> Result<Option<TickInfo>, LedgerError> {
        require_initialized(&env)?;
        with_accountant(&env, |accountant| {
            accountant.next_initialized_tick(pool_id, current_tick, zero_for_one)
        })
    }

    /// Fee growth accrued inside [lower_tick, upper_tick) at the pool's current tick
    pub fn fee_growth_inside(
        env: Env,
        pool_id: u64,
        lower_tick: i64,
        upper_tick: i64,
    ) -> Result<FeeGrowth, LedgerError> {
        require_initialized(&env)?;

        if lower_tick >= upper_tick {
            return Err(LedgerError::InvalidTickRange);
        }
        let pool = read_pool(&env, pool_id).ok_or(LedgerError::PoolNotFound)?;

        with_accountant(&env, |accountant| {
            let lower = accountant.get_tick_info(pool_id, lower_tick)?;
            let upper = accountant.get_tick_info(pool_id, upper_tick)?;
            get_fee_growth_inside(&lower, &upper, pool.current_tick, &pool.fee_growth_global)
        })
    }

    // ========================================================
    // EXPORT / IMPORT
    // ========================================================

    pub fn export_ticks(env: Env) -> Result<Vec<TickInfo>, LedgerError> {
        Self::list_all_ticks(env)
    }

    /// Write a batch of exported ticks; nothing is written unless every tick is valid
    pub fn import_ticks(env: Env, ticks: Vec<TickInfo>) -> Result<u32, LedgerError> {
        require_admin(&env)?;

        for tick in ticks.iter() {
            validate_tick(&env, &tick)?;
        }

        with_accountant(&env, |accountant| {
            for tick in ticks.iter() {
                accountant.set_tick_info(&tick)?;
            }
            Ok(())
        })?;

        emit_ticks_imported(&env, ticks.len());
        Ok(ticks.len())
    }
}
