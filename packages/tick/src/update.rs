// Tick Update and Crossing Logic
//
// Pure state transitions on a loaded TickInfo. Nothing here touches storage;
// on error the tick is left exactly as it was passed in.

use belugaswap_math::Dec;
use soroban_sdk::Vec;

use crate::error::TickError;
use crate::types::{DecCoin, FeeGrowth, TickInfo};

/// Apply a liquidity delta to a tick used as a range boundary.
///
/// Gross moves by `delta` either way; net moves by `-delta` for an upper
/// boundary and `+delta` for a lower one, so crossing upward removes exactly
/// the range's liquidity and crossing downward adds it back.
///
/// Returns whether the tick is empty afterwards.
pub fn apply_liquidity_delta(
    tick: &mut TickInfo,
    liquidity_delta: Dec,
    upper: bool,
) -> Result<bool, TickError> {
    let gross_after = tick.liquidity_gross.checked_add(liquidity_delta)?;
    if gross_after.is_negative() {
        return Err(TickError::NegativeLiquidity);
    }

    let net_after = if upper {
        tick.liquidity_net.checked_sub(liquidity_delta)?
    } else {
        tick.liquidity_net.checked_add(liquidity_delta)?
    };

    tick.liquidity_gross = gross_after;
    tick.liquidity_net = net_after;

    Ok(tick.is_empty())
}

/// Reflect fee growth outside when the active price passes this tick:
/// outside' = global + active - outside
///
/// Inputs must be canonical and the active amount non-negative, which keeps
/// the result canonical.
pub fn flip_fee_growth(
    tick: &mut TickInfo,
    active_fee_growth: &DecCoin,
    fee_growth_global: &FeeGrowth,
) -> Result<(), TickError> {
    if active_fee_growth.amount.is_negative() {
        return Err(TickError::InvalidFeeGrowth);
    }
    fee_growth_global.validate()?;
    tick.fee_growth.validate()?;

    let flipped = fee_growth_global
        .checked_add_coin(active_fee_growth)?
        .checked_sub(&tick.fee_growth)?;
    tick.fee_growth = flipped;
    Ok(())
}

/// Pick the next initialized tick from ticks sorted ascending by index.
///
/// Moving down (`zero_for_one`) the candidate is the greatest index at or
/// below `current_tick`; moving up it is the smallest index above it.
pub fn select_next_initialized(
    ticks: &Vec<TickInfo>,
    current_tick: i64,
    zero_for_one: bool,
) -> Option<TickInfo> {
    let mut found: Option<TickInfo> = None;
    for tick in ticks.iter() {
        if !tick.is_initialized() {
            continue;
        }
        if zero_for_one {
            if tick.tick_index > current_tick {
                break;
            }
            found = Some(tick);
        } else if tick.tick_index > current_tick {
            return Some(tick);
        }
    }
    found
}
