// Initial Fee Growth Seeding

use soroban_sdk::Env;

use crate::error::TickError;
use crate::types::{FeeGrowth, PoolDescriptor};

/// Decides the fee growth a tick starts with when it is first materialized
pub trait FeeGrowthSeeder {
    fn initial_fee_growth(
        &self,
        env: &Env,
        pool: &PoolDescriptor,
        tick_index: i64,
    ) -> Result<FeeGrowth, TickError>;
}

/// By convention all fee growth so far happened below the current price:
/// a tick at or below the current tick starts with the full global growth,
/// a tick above it starts empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActiveSideSeeder;

impl FeeGrowthSeeder for ActiveSideSeeder {
    fn initial_fee_growth(
        &self,
        env: &Env,
        pool: &PoolDescriptor,
        tick_index: i64,
    ) -> Result<FeeGrowth, TickError> {
        if pool.current_tick >= tick_index {
            Ok(pool.fee_growth_global.clone())
        } else {
            Ok(FeeGrowth::new(env))
        }
    }
}
