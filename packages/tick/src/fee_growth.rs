// Fee Growth Calculations

use crate::error::TickError;
use crate::types::{FeeGrowth, TickInfo};

/// Fee growth accrued inside [lower, upper) given the pool's current tick
pub fn get_fee_growth_inside(
    lower: &TickInfo,
    upper: &TickInfo,
    current_tick: i64,
    fee_growth_global: &FeeGrowth,
) -> Result<FeeGrowth, TickError> {
    fee_growth_global.validate()?;

    let fee_growth_below = if current_tick >= lower.tick_index {
        lower.fee_growth.clone()
    } else {
        fee_growth_global.checked_sub(&lower.fee_growth)?
    };

    let fee_growth_above = if current_tick < upper.tick_index {
        upper.fee_growth.clone()
    } else {
        fee_growth_global.checked_sub(&upper.fee_growth)?
    };

    fee_growth_global
        .checked_sub(&fee_growth_below)?
        .checked_sub(&fee_growth_above)
}
