// Tick Key Encoding
//
// key = TICK_KEY_PREFIX || pool_id (u64 BE) || sortable(tick_index) (8 bytes BE)
//
// The tick index is stored with its sign bit flipped, which maps i64::MIN..=i64::MAX
// onto 0..=u64::MAX monotonically. Byte-wise comparison of keys therefore matches
// (pool_id, tick_index) numeric order, negatives before zero and positives.

use soroban_sdk::{Bytes, Env};

/// Namespace shared by every tick record
pub const TICK_KEY_PREFIX: &[u8] = b"tick_info/";

/// Length of a pool prefix: namespace + pool id
pub const POOL_PREFIX_LEN: u32 = TICK_KEY_PREFIX.len() as u32 + 8;

/// Length of a full tick key
pub const TICK_KEY_LEN: u32 = POOL_PREFIX_LEN + 8;

const SIGN_BIT: u64 = 1 << 63;

#[inline]
pub fn encode_tick_index(tick_index: i64) -> [u8; 8] {
    ((tick_index as u64) ^ SIGN_BIT).to_be_bytes()
}

#[inline]
pub fn decode_tick_index(bytes: [u8; 8]) -> i64 {
    (u64::from_be_bytes(bytes) ^ SIGN_BIT) as i64
}

/// Prefix covering every tick of every pool
pub fn tick_table_prefix(env: &Env) -> Bytes {
    Bytes::from_slice(env, TICK_KEY_PREFIX)
}

/// Prefix covering every tick of one pool
pub fn pool_tick_prefix(env: &Env, pool_id: u64) -> Bytes {
    let mut prefix = tick_table_prefix(env);
    prefix.extend_from_array(&pool_id.to_be_bytes());
    prefix
}

pub fn tick_key(env: &Env, pool_id: u64, tick_index: i64) -> Bytes {
    let mut key = pool_tick_prefix(env, pool_id);
    key.extend_from_array(&encode_tick_index(tick_index));
    key
}

/// Split a tick key back into (pool_id, tick_index); `None` if it is not a tick key
pub fn decode_tick_key(key: &Bytes) -> Option<(u64, i64)> {
    if key.len() != TICK_KEY_LEN || !has_prefix(key, &tick_table_prefix(key.env())) {
        return None;
    }

    let mut pool = [0u8; 8];
    key.slice(TICK_KEY_PREFIX.len() as u32..POOL_PREFIX_LEN)
        .copy_into_slice(&mut pool);
    let mut tick = [0u8; 8];
    key.slice(POOL_PREFIX_LEN..TICK_KEY_LEN)
        .copy_into_slice(&mut tick);

    Some((u64::from_be_bytes(pool), decode_tick_index(tick)))
}

/// Byte-wise prefix test
pub fn has_prefix(key: &Bytes, prefix: &Bytes) -> bool {
    key.len() >= prefix.len() && key.slice(0..prefix.len()) == *prefix
}
