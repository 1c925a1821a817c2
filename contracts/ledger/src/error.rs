// Tick ledger error module for BelugaSwap

use belugaswap_tick::TickError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,
    NotInitialized = 101,

    // Pool errors (200-299)
    PoolAlreadyExists = 200,
    PoolNotFound = 201,
    InvalidTickRange = 202,

    // Liquidity errors (300-399)
    NegativeLiquidity = 300,

    // Crossing errors (400-499)
    TickInfoNil = 400,
    TickMismatch = 401,

    // Record errors (500-599)
    TickNotFound = 500,
    DecodeError = 501,

    // Math errors (700-799)
    Overflow = 700,
    NegativeFeeGrowth = 701,
    InvalidFeeGrowth = 702,
}

impl From<TickError> for LedgerError {
    fn from(err: TickError) -> Self {
        match err {
            TickError::NegativeLiquidity => LedgerError::NegativeLiquidity,
            TickError::PoolNotFound => LedgerError::PoolNotFound,
            TickError::TickInfoNil => LedgerError::TickInfoNil,
            TickError::TickMismatch => LedgerError::TickMismatch,
            TickError::TickNotFound => LedgerError::TickNotFound,
            TickError::DecodeError => LedgerError::DecodeError,
            TickError::Overflow => LedgerError::Overflow,
            TickError::NegativeFeeGrowth => LedgerError::NegativeFeeGrowth,
            TickError::InvalidFeeGrowth => LedgerError::InvalidFeeGrowth,
        }
    }
}
