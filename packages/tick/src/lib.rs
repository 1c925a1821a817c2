#![no_std]

pub mod accountant;
pub mod codec;
pub mod error;
pub mod fee_growth;
pub mod keys;
pub mod registry;
pub mod seeder;
pub mod store;
pub mod types;
pub mod update;

pub use accountant::TickAccountant;
pub use codec::{decode_tick, decode_tick_bytes, encode_tick, TICK_CODEC_VERSION};
pub use error::TickError;
pub use fee_growth::get_fee_growth_inside;
pub use keys::{decode_tick_key, pool_tick_prefix, tick_key, tick_table_prefix};
pub use registry::{MemoryPoolRegistry, PoolRegistry};
pub use seeder::{ActiveSideSeeder, FeeGrowthSeeder};
pub use store::{MemoryTickStore, TickStore};
pub use types::{DecCoin, FeeGrowth, PoolDescriptor, TickInfo};
pub use update::{apply_liquidity_delta, flip_fee_growth, select_next_initialized};

// Re-export from math
pub use belugaswap_math::Dec;
