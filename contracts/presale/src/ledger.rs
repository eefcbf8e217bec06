//! Sale accounting: purchase acceptance, finalization, claims and refunds.
//!
//! These functions mutate already-loaded records; loading, persisting and
//! moving tokens is left to the contract entry points so that every check
//! runs before anything is written.

use crate::errors::Error;
use crate::types::*;
use crate::vesting;

/// Validates a purchase of `amount` and applies it to the aggregates and the
/// buyer's record. Returns the sale-token amount credited by this purchase.
pub fn record_purchase(
    config: &SaleConfig,
    state: &mut SaleState,
    participant: &mut Participant,
    amount: i128,
    now: u64,
) -> Result<i128, Error> {
    if state.finalized || now < config.start_time || now > config.end_time {
        return Err(Error::SaleNotActive);
    }
    if amount < config.min_purchase {
        return Err(Error::BelowMinimum);
    }
    if amount > config.max_purchase {
        return Err(Error::AboveMaximum);
    }

    let total_raised = state
        .total_raised
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if !config.fair_launch && total_raised > config.hard_cap {
        return Err(Error::HardCapExceeded);
    }

    let contribution = participant
        .contribution
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if contribution > config.max_purchase {
        return Err(Error::WalletCapExceeded);
    }

    // Fair-launch buyers only accrue weight; tokens are known after finalize.
    let token_amount = if config.fair_launch {
        0
    } else {
        amount
            .checked_mul(config.token_price)
            .ok_or(Error::ArithmeticOverflow)?
    };
    let tokens_sold = state
        .total_tokens_sold
        .checked_add(token_amount)
        .ok_or(Error::ArithmeticOverflow)?;

    if participant.contribution == 0 {
        state.total_participants += 1;
    }
    participant.contribution = contribution;
    participant.token_amount += token_amount;
    participant.last_purchase_time = now;
    state.total_raised = total_raised;
    state.total_tokens_sold = tokens_sold;

    Ok(token_amount)
}

/// One-way transition into either refund mode or distribution mode.
/// `sale_token_balance` is the sale token inventory held by the contract.
pub fn finalize(
    config: &SaleConfig,
    state: &mut SaleState,
    sale_token_balance: i128,
) -> Result<FinalizationOutcome, Error> {
    if state.finalized {
        return Err(Error::AlreadyFinalized);
    }

    state.finalized = true;
    let soft_cap_reached = state.total_raised >= config.soft_cap;
    if !soft_cap_reached {
        state.refunds_enabled = true;
    } else if config.fair_launch {
        state.total_tokens_sold = sale_token_balance;
    }

    Ok(FinalizationOutcome {
        total_raised: state.total_raised,
        soft_cap_reached,
        refunds_enabled: state.refunds_enabled,
        total_tokens_sold: state.total_tokens_sold,
    })
}

/// Fails unless the sale is finalized with its soft cap met.
pub fn ensure_successful(config: &SaleConfig, state: &SaleState) -> Result<(), Error> {
    if !state.finalized {
        return Err(Error::NotFinalized);
    }
    if state.refunds_enabled || state.total_raised < config.soft_cap {
        return Err(Error::SoftCapNotReached);
    }
    Ok(())
}

/// Total tokens a participant is entitled to, vested or not.
///
/// For fair-launch sales the pool is rebuilt from the live balance plus what
/// has already been paid out, so tokens deposited after finalization change
/// every participant's share.
pub fn entitlement(
    config: &SaleConfig,
    state: &SaleState,
    participant: &Participant,
    sale_token_balance: i128,
) -> Result<i128, Error> {
    if !config.fair_launch {
        return Ok(participant.token_amount);
    }
    let pool = sale_token_balance
        .checked_add(state.total_claimed)
        .ok_or(Error::ArithmeticOverflow)?;
    vesting::fair_launch_basis(participant.contribution, pool, state.total_raised)
}

/// Tokens the participant could claim at `now`. Zero until the sale is
/// finalized successfully.
pub fn claimable(
    config: &SaleConfig,
    vesting_config: &VestingConfig,
    state: &SaleState,
    participant: &Participant,
    sale_token_balance: i128,
    now: u64,
) -> Result<i128, Error> {
    if ensure_successful(config, state).is_err() {
        return Ok(0);
    }
    let basis = entitlement(config, state, participant, sale_token_balance)?;
    vesting::claimable_amount(
        basis,
        participant.claimed_tokens,
        vesting_config,
        config.end_time,
        now,
    )
}

/// Books a claim of everything currently unlocked and returns its size.
pub fn claim(
    config: &SaleConfig,
    vesting_config: &VestingConfig,
    state: &mut SaleState,
    participant: &mut Participant,
    sale_token_balance: i128,
    now: u64,
) -> Result<i128, Error> {
    ensure_successful(config, state)?;

    let amount = claimable(
        config,
        vesting_config,
        state,
        participant,
        sale_token_balance,
        now,
    )?;
    if amount <= 0 {
        return Err(Error::NothingToClaim);
    }

    participant.claimed_tokens += amount;
    participant.last_claim_time = now;
    state.total_claimed += amount;
    Ok(amount)
}

/// Zeroes the participant's position and returns the contribution owed back.
pub fn claim_refund(
    config: &SaleConfig,
    state: &SaleState,
    participant: &mut Participant,
) -> Result<i128, Error> {
    if !state.finalized {
        return Err(Error::NotFinalized);
    }
    if state.total_raised >= config.soft_cap {
        return Err(Error::SoftCapReached);
    }
    if !state.refunds_enabled {
        return Err(Error::RefundsDisabled);
    }
    if participant.contribution <= 0 {
        return Err(Error::NoContribution);
    }

    let amount = participant.contribution;
    participant.contribution = 0;
    participant.token_amount = 0;
    Ok(amount)
}

/// Sale tokens not owed to anyone after finalization.
pub fn unsold_tokens(
    config: &SaleConfig,
    state: &SaleState,
    sale_token_balance: i128,
) -> Result<i128, Error> {
    if !state.finalized {
        return Err(Error::NotFinalized);
    }

    let unsold = if state.refunds_enabled {
        sale_token_balance
    } else if config.fair_launch {
        0
    } else {
        let outstanding = state.total_tokens_sold - state.total_claimed;
        sale_token_balance - outstanding
    };

    if unsold <= 0 {
        return Err(Error::NothingToWithdraw);
    }
    Ok(unsold)
}
