// Tick accounting errors

use belugaswap_math::DecError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TickError {
    /// Liquidity gross would drop below zero
    NegativeLiquidity = 1,
    /// Tick requested for a pool the registry does not know
    PoolNotFound = 2,
    /// Crossing requested without a tick
    TickInfoNil = 3,
    /// Crossing requested with a tick that belongs to another key
    TickMismatch = 4,
    /// Raw tick record is empty
    TickNotFound = 5,
    /// Stored bytes or numeric text are malformed
    DecodeError = 6,
    /// Decimal arithmetic overflowed
    Overflow = 7,
    /// A fee growth entry would drop below zero
    NegativeFeeGrowth = 8,
    /// A fee growth vector holds a zero or negative entry
    InvalidFeeGrowth = 9,
}

impl From<DecError> for TickError {
    fn from(err: DecError) -> Self {
        match err {
            DecError::Overflow => TickError::Overflow,
            DecError::Empty | DecError::InvalidFormat | DecError::TooPrecise => {
                TickError::DecodeError
            }
        }
    }
}
