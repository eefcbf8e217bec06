//! Release arithmetic for purchased tokens.
//!
//! Every division floors, so rounding never hands out more than the basis.
//! Callers supply the timestamp; nothing here reads the ledger.

use crate::errors::Error;
use crate::types::{VestingConfig, PERCENT_DENOMINATOR};

/// Entitlement of a fair-launch participant: their share of `pool`
/// proportional to `contribution / total_raised`.
pub fn fair_launch_basis(contribution: i128, pool: i128, total_raised: i128) -> Result<i128, Error> {
    if contribution <= 0 || pool <= 0 || total_raised <= 0 {
        return Ok(0);
    }
    let weighted = contribution
        .checked_mul(pool)
        .ok_or(Error::ArithmeticOverflow)?;
    Ok(weighted / total_raised)
}

/// Portion of `basis` unlocked at `now`, ignoring what was already claimed.
pub fn unlocked_amount(
    basis: i128,
    vesting: &VestingConfig,
    end_time: u64,
    now: u64,
) -> Result<i128, Error> {
    if !vesting.enabled {
        return Ok(basis);
    }

    let initial_amount = basis
        .checked_mul(vesting.initial_release as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / PERCENT_DENOMINATOR;
    if now < end_time {
        return Ok(initial_amount);
    }

    let vested_amount = basis - initial_amount;
    // Capping elapsed at the duration keeps the product bounded by vested_amount * duration.
    let elapsed = (now - end_time).min(vesting.vesting_duration);
    let vested_tokens = vested_amount
        .checked_mul(elapsed as i128)
        .ok_or(Error::ArithmeticOverflow)?
        / vesting.vesting_duration as i128;

    Ok(initial_amount + vested_tokens.min(vested_amount))
}

pub fn claimable_amount(
    basis: i128,
    claimed: i128,
    vesting: &VestingConfig,
    end_time: u64,
    now: u64,
) -> Result<i128, Error> {
    let unlocked = unlocked_amount(basis, vesting, end_time, now)?;
    Ok(unlocked.saturating_sub(claimed).max(0))
}
