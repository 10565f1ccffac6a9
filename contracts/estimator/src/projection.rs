use soroban_sdk::{Env, U256};

use hashkey::BPS;

use crate::error::ContractError;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const DAYS_PER_YEAR: u64 = 365;
/// Assumed block time of the chain when none is configured.
pub const DEFAULT_AVERAGE_BLOCK_TIME: u64 = 2;

/// Everything the projection formula needs, read fresh from the staking
/// contract (plus the current ledger sequence) by the caller.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectionInputs {
    pub shares_amount: i128,
    /// Total shares minted against the whole pool
    pub total_shares: i128,
    /// Total shares held in the projected bucket
    pub bucket_shares: i128,
    /// Total HSK value pooled, principal plus accrued rewards
    pub total_pooled: i128,
    /// Per-block reward emission rate
    pub hsk_per_block: i128,
    /// First block of the emission schedule
    pub start_block: u64,
    /// Rewards already paid out of the schedule
    pub total_paid: i128,
    /// Basis-point APR cap of the bucket
    pub max_apr_bps: u64,
    /// Basis-point allocation multiplier of the bucket
    pub correction_factor_bps: u64,
    pub current_block: u64,
    pub projection_days: u64,
    pub average_block_time: u64,
}

/// Outcome of a single projection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Projection {
    /// Projected total redeemable amount: `base + reward`
    pub total: i128,
    /// Current redeemable value of the shares at the live exchange rate
    pub base: i128,
    /// Capped incremental reward projected over the horizon
    pub reward: i128,
    /// Annualized return implied by `reward` over `base`, in bps
    pub apr_bps: u64,
}

/// Block number the projection targets: the current block, extrapolated by
/// `projection_days` worth of blocks at the assumed block time. Zero days
/// means "project at the current block".
pub fn target_block(
    current_block: u64,
    projection_days: u64,
    average_block_time: u64,
) -> Result<u64, ContractError> {
    if projection_days == 0 {
        return Ok(current_block);
    }

    let delta_blocks = projection_days
        .checked_mul(SECONDS_PER_DAY)
        .ok_or(ContractError::ContractMathError)?
        / average_block_time;

    current_block
        .checked_add(delta_blocks)
        .ok_or(ContractError::ContractMathError)
}

/// Estimates the redeemable HSK amount for a share balance in one bucket at
/// the projected future block.
///
/// The emission schedule is modeled as a straight line: `hsk_per_block`
/// tokens per block since `start_block`, minus what was already paid out.
/// The bucket receives its proportional cut of that unclaimed remainder,
/// scaled by the bucket's correction factor and capped at the bucket's
/// maximum APR.
pub fn project(env: &Env, input: &ProjectionInputs) -> Result<Projection, ContractError> {
    let shares = to_amount(input.shares_amount)?;
    if shares == 0 {
        return Ok(Projection {
            total: 0,
            base: 0,
            reward: 0,
            apr_bps: 0,
        });
    }

    let total_shares = to_amount(input.total_shares)?;
    let bucket_shares = to_amount(input.bucket_shares)?;
    // Bootstrap state before any shares exist: the exchange rate is defined
    // as 1:1 and no rewards can be attributed to the bucket.
    if total_shares == 0 || bucket_shares == 0 {
        return Ok(Projection {
            total: input.shares_amount,
            base: input.shares_amount,
            reward: 0,
            apr_bps: 0,
        });
    }

    let target = target_block(
        input.current_block,
        input.projection_days,
        input.average_block_time,
    )?;
    let elapsed_blocks = target.saturating_sub(input.start_block);

    let emitted = to_amount(input.hsk_per_block)?
        .checked_mul(elapsed_blocks as u128)
        .ok_or(ContractError::ContractMathError)?;
    // Clamped at zero: a schedule that already paid out more than the linear
    // emission projects no further reward instead of a negative one.
    let unclaimed = emitted.saturating_sub(to_amount(input.total_paid)?);

    let reward = {
        let numerator = U256::from_u128(env, shares)
            .mul(&U256::from_u128(env, unclaimed))
            .mul(&U256::from_u128(env, input.correction_factor_bps as u128));
        let denominator =
            U256::from_u128(env, bucket_shares).mul(&U256::from_u128(env, BPS as u128));
        numerator
            .div(&denominator)
            .to_u128()
            .ok_or(ContractError::ContractMathError)?
    };

    let base = {
        let numerator =
            U256::from_u128(env, shares).mul(&U256::from_u128(env, to_amount(input.total_pooled)?));
        numerator
            .div(&U256::from_u128(env, total_shares))
            .to_u128()
            .ok_or(ContractError::ContractMathError)?
    };

    let max_reward = shares
        .checked_mul(input.max_apr_bps as u128)
        .ok_or(ContractError::ContractMathError)?
        / BPS as u128;

    let final_reward = reward.min(max_reward);
    let apr_bps = annualized_apr_bps(final_reward, base, input.projection_days)?;

    let total = final_reward
        .checked_add(base)
        .ok_or(ContractError::ContractMathError)?;

    Ok(Projection {
        total: from_amount(total)?,
        base: from_amount(base)?,
        reward: from_amount(final_reward)?,
        apr_bps,
    })
}

/// Annualizes the return of `reward` over `base` earned across
/// `projection_days`, expressed in basis points. Zero when there is no base
/// value or no horizon to annualize over.
pub fn annualized_apr_bps(
    reward: u128,
    base: u128,
    projection_days: u64,
) -> Result<u64, ContractError> {
    if base == 0 || projection_days == 0 {
        return Ok(0);
    }

    let period_rate_bps = reward
        .checked_mul(BPS as u128)
        .ok_or(ContractError::ContractMathError)?
        / base;
    let annualized = period_rate_bps
        .checked_mul(DAYS_PER_YEAR as u128)
        .ok_or(ContractError::ContractMathError)?
        / projection_days as u128;

    u64::try_from(annualized).map_err(|_| ContractError::ContractMathError)
}

fn to_amount(value: i128) -> Result<u128, ContractError> {
    u128::try_from(value).map_err(|_| ContractError::ContractMathError)
}

fn from_amount(value: u128) -> Result<i128, ContractError> {
    i128::try_from(value).map_err(|_| ContractError::ContractMathError)
}
