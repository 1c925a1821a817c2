// Tick ledger storage module for BelugaSwap

use belugaswap_tick::{keys::has_prefix, PoolDescriptor, PoolRegistry, TickStore};
use soroban_sdk::{contracttype, Bytes, Env, Map, Vec};

use crate::types::LedgerConfig;

// ============================================================
// STORAGE KEYS
// ============================================================

#[contracttype]
pub enum DataKey {
    /// Ledger configuration
    Config,
    /// Initialization flag
    Initialized,
    /// Pool descriptor by pool id
    Pool(u64),
    /// Encoded tick record by encoded tick key
    TickRecord(Bytes),
    /// Ordered index of every stored tick key
    TickKeys,
}

// ============================================================
// TTL CONFIGURATION
// ============================================================

/// Persistent storage lifetime in ledgers (~1 year at 5s/ledger)
const PERSISTENT_LIFETIME: u32 = 6_307_200;
/// TTL bump threshold
const PERSISTENT_BUMP: u32 = 6_307_200;

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME, PERSISTENT_BUMP);
}

// ============================================================
// INITIALIZATION
// ============================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Initialized)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    extend_ttl(env, &DataKey::Initialized);
}

// ============================================================
// CONFIG
// ============================================================

pub fn write_config(env: &Env, config: &LedgerConfig) {
    env.storage().persistent().set(&DataKey::Config, config);
    extend_ttl(env, &DataKey::Config);
}

pub fn read_config(env: &Env) -> Option<LedgerConfig> {
    env.storage().persistent().get(&DataKey::Config)
}

// ============================================================
// POOL REGISTRY
// ============================================================

pub fn read_pool(env: &Env, pool_id: u64) -> Option<PoolDescriptor> {
    let key = DataKey::Pool(pool_id);
    let result = env.storage().persistent().get(&key);
    if result.is_some() {
        extend_ttl(env, &key);
    }
    result
}

pub fn write_pool(env: &Env, pool: &PoolDescriptor) {
    let key = DataKey::Pool(pool.pool_id);
    env.storage().persistent().set(&key, pool);
    extend_ttl(env, &key);
}

/// Registry view over the pools stored in this contract
pub struct LedgerPoolRegistry {
    env: Env,
}

impl LedgerPoolRegistry {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }
}

impl PoolRegistry for LedgerPoolRegistry {
    fn get_pool(&self, pool_id: u64) -> Option<PoolDescriptor> {
        read_pool(&self.env, pool_id)
    }
}

// ============================================================
// TICK RECORDS
// ============================================================

/// Tick store on persistent storage.
///
/// Each record lives under its own `TickRecord` entry; `TickKeys` keeps every
/// record key in byte order so prefix scans come back ascending.
pub struct LedgerTickStore {
    env: Env,
}

impl LedgerTickStore {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn read_index(&self) -> Map<Bytes, bool> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::TickKeys)
            .unwrap_or_else(|| Map::new(&self.env))
    }

    fn write_index(&self, index: &Map<Bytes, bool>) {
        self.env.storage().persistent().set(&DataKey::TickKeys, index);
        extend_ttl(&self.env, &DataKey::TickKeys);
    }
}

impl TickStore for LedgerTickStore {
    fn get(&self, key: &Bytes) -> Option<Bytes> {
        let record = DataKey::TickRecord(key.clone());
        let result = self.env.storage().persistent().get(&record);
        if result.is_some() {
            extend_ttl(&self.env, &record);
        }
        result
    }

    fn set(&mut self, key: &Bytes, value: &Bytes) {
        let record = DataKey::TickRecord(key.clone());
        self.env.storage().persistent().set(&record, value);
        extend_ttl(&self.env, &record);

        let mut index = self.read_index();
        if !index.contains_key(key.clone()) {
            index.set(key.clone(), true);
            self.write_index(&index);
        }
    }

    fn delete(&mut self, key: &Bytes) {
        let record = DataKey::TickRecord(key.clone());
        if !self.env.storage().persistent().has(&record) {
            return;
        }
        self.env.storage().persistent().remove(&record);

        let mut index = self.read_index();
        index.remove(key.clone());
        self.write_index(&index);
    }

    fn iterate_prefix(&self, prefix: &Bytes) -> Vec<(Bytes, Bytes)> {
        let mut out = Vec::new(&self.env);
        let mut matched = false;
        for key in self.read_index().keys().iter() {
            if !has_prefix(&key, prefix) {
                // keys sharing a prefix are contiguous
                if matched {
                    break;
                }
                continue;
            }
            matched = true;
            if let Some(value) = self.get(&key) {
                out.push_back((key, value));
            }
        }
        out
    }
}
