// Tick Types

use belugaswap_math::Dec;
use soroban_sdk::{contracttype, Address, Env, Map};

use crate::error::TickError;

/// Fee growth for a single denomination
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecCoin {
    pub denom: Address,
    pub amount: Dec,
}

/// Per-denomination fee growth vector.
///
/// Entries are ordered by denomination and zero amounts are never stored, so
/// two vectors holding the same non-zero amounts compare equal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeGrowth {
    pub amounts: Map<Address, Dec>,
}

impl FeeGrowth {
    pub fn new(env: &Env) -> Self {
        Self {
            amounts: Map::new(env),
        }
    }

    pub fn from_coin(env: &Env, coin: &DecCoin) -> Result<Self, TickError> {
        Self::new(env).checked_add_coin(coin)
    }

    /// Amount for `denom`, zero when absent
    pub fn amount_of(&self, denom: &Address) -> Dec {
        self.amounts.get(denom.clone()).unwrap_or(Dec::ZERO)
    }

    pub fn is_zero(&self) -> bool {
        self.amounts.is_empty()
    }

    pub fn len(&self) -> u32 {
        self.amounts.len()
    }

    /// Every stored amount is strictly positive.
    ///
    /// Vectors built through the checked operations always pass; this guards
    /// vectors that arrive from outside.
    pub fn validate(&self) -> Result<(), TickError> {
        for amount in self.amounts.values().iter() {
            if !amount.is_positive() {
                return Err(TickError::InvalidFeeGrowth);
            }
        }
        Ok(())
    }

    pub fn checked_add_coin(&self, coin: &DecCoin) -> Result<Self, TickError> {
        let mut out = self.clone();
        out.apply(&coin.denom, coin.amount, false)?;
        Ok(out)
    }

    pub fn checked_add(&self, other: &FeeGrowth) -> Result<Self, TickError> {
        let mut out = self.clone();
        for (denom, amount) in other.amounts.iter() {
            out.apply(&denom, amount, false)?;
        }
        Ok(out)
    }

    /// Fails with `NegativeFeeGrowth` when any denomination would drop below zero
    pub fn checked_sub(&self, other: &FeeGrowth) -> Result<Self, TickError> {
        let mut out = self.clone();
        for (denom, amount) in other.amounts.iter() {
            out.apply(&denom, amount, true)?;
        }
        Ok(out)
    }

    fn apply(&mut self, denom: &Address, amount: Dec, subtract: bool) -> Result<(), TickError> {
        let current = self.amount_of(denom);
        let next = if subtract {
            current.checked_sub(amount)?
        } else {
            current.checked_add(amount)?
        };

        if next.is_negative() {
            return Err(TickError::NegativeFeeGrowth);
        }
        if next.is_zero() {
            self.amounts.remove(denom.clone());
        } else {
            self.amounts.set(denom.clone(), next);
        }
        Ok(())
    }
}

/// Information stored for each tick of a pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TickInfo {
    pub pool_id: u64,
    pub tick_index: i64,
    /// Total liquidity referencing this tick as a range boundary
    pub liquidity_gross: Dec,
    /// Net liquidity change when the price crosses this tick moving up
    pub liquidity_net: Dec,
    /// Fee growth on the side of this tick away from the current price
    pub fee_growth: FeeGrowth,
}

impl TickInfo {
    /// Zero-liquidity tick carrying a seeded fee growth
    pub fn uninitialized(pool_id: u64, tick_index: i64, fee_growth: FeeGrowth) -> Self {
        Self {
            pool_id,
            tick_index,
            liquidity_gross: Dec::ZERO,
            liquidity_net: Dec::ZERO,
            fee_growth,
        }
    }

    /// Both liquidity accumulators are zero; the caller may purge the record
    pub fn is_empty(&self) -> bool {
        self.liquidity_gross.is_zero() && self.liquidity_net.is_zero()
    }

    pub fn is_initialized(&self) -> bool {
        self.liquidity_gross.is_positive()
    }
}

/// What the pool registry knows about a pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolDescriptor {
    pub pool_id: u64,
    /// Tick containing the pool's current active price
    pub current_tick: i64,
    /// Fee growth per unit of liquidity accumulated over the pool's lifetime
    pub fee_growth_global: FeeGrowth,
}
