// Pool Registry Seam

use soroban_sdk::{Env, Map};

use crate::types::PoolDescriptor;

/// Resolves a pool id to what the tick accountant needs to know about it
pub trait PoolRegistry {
    fn get_pool(&self, pool_id: u64) -> Option<PoolDescriptor>;
}

/// Registry held in a host map
#[derive(Clone)]
pub struct MemoryPoolRegistry {
    pools: Map<u64, PoolDescriptor>,
}

impl MemoryPoolRegistry {
    pub fn new(env: &Env) -> Self {
        Self {
            pools: Map::new(env),
        }
    }

    /// Insert or replace the descriptor stored under `pool.pool_id`
    pub fn insert(&mut self, pool: PoolDescriptor) {
        self.pools.set(pool.pool_id, pool);
    }
}

impl PoolRegistry for MemoryPoolRegistry {
    fn get_pool(&self, pool_id: u64) -> Option<PoolDescriptor> {
        self.pools.get(pool_id)
    }
}
