// BelugaSwap Math Package
//
// Fixed-precision decimal used for liquidity and fee-growth accounting.

#![no_std]

pub mod constants;
pub mod decimal;

pub use constants::*;
pub use decimal::{Dec, DecError};
