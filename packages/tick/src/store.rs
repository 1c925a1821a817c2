// Tick Storage Seam

use soroban_sdk::{Bytes, Env, Map, Vec};

use crate::keys::has_prefix;

/// Ordered key-value store holding encoded tick records.
///
/// `iterate_prefix` must yield entries ascending by key bytes.
pub trait TickStore {
    fn get(&self, key: &Bytes) -> Option<Bytes>;
    fn set(&mut self, key: &Bytes, value: &Bytes);
    /// Deleting an absent key is a no-op
    fn delete(&mut self, key: &Bytes);
    fn iterate_prefix(&self, prefix: &Bytes) -> Vec<(Bytes, Bytes)>;
}

/// Store backed by a host map; keys are kept in byte order by the host
#[derive(Clone)]
pub struct MemoryTickStore {
    entries: Map<Bytes, Bytes>,
}

impl MemoryTickStore {
    pub fn new(env: &Env) -> Self {
        Self {
            entries: Map::new(env),
        }
    }

    pub fn len(&self) -> u32 {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TickStore for MemoryTickStore {
    fn get(&self, key: &Bytes) -> Option<Bytes> {
        self.entries.get(key.clone())
    }

    fn set(&mut self, key: &Bytes, value: &Bytes) {
        self.entries.set(key.clone(), value.clone());
    }

    fn delete(&mut self, key: &Bytes) {
        self.entries.remove(key.clone());
    }

    fn iterate_prefix(&self, prefix: &Bytes) -> Vec<(Bytes, Bytes)> {
        let mut out = Vec::new(self.entries.env());
        for (key, value) in self.entries.iter() {
            if has_prefix(&key, prefix) {
                out.push_back((key, value));
            }
        }
        out
    }
}
