use soroban_sdk::{contract, contractimpl, contractmeta, log, Address, BytesN, Env, Vec};

use hashkey::staking::{RewardStatus, StakeType, StakingClient, UserStake};
use hashkey::BPS;

use crate::{
    error::ContractError,
    msg::{BucketOverview, ConfigResponse, ProjectionResponse, StakingOverviewResponse},
    projection::{self, ProjectionInputs, DEFAULT_AVERAGE_BLOCK_TIME},
    storage::{
        get_config, save_config,
        utils::{self, get_admin},
        Config,
    },
};

// Metadata that is added on to the WASM custom section
contractmeta!(
    key = "Description",
    val = "Read-only reward and APR estimator for the HSK staking pool"
);

#[contract]
pub struct Estimator;

pub trait EstimatorTrait {
    // Sets the staking contract address all queries are made against.
    // average_block_time: assumed seconds between blocks; defaults to 2
    fn initialize(
        env: Env,
        admin: Address,
        staking_contract: Address,
        average_block_time: Option<u64>,
    ) -> Result<(), ContractError>;

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError>;

    // QUERIES

    fn query_config(env: Env) -> Result<ConfigResponse, ContractError>;

    fn query_admin(env: Env) -> Result<Address, ContractError>;

    fn query_reward_status(env: Env) -> Result<RewardStatus, ContractError>;

    fn query_user_stakes(env: Env, user: Address) -> Result<Vec<UserStake>, ContractError>;

    fn query_staking_overview(env: Env) -> Result<StakingOverviewResponse, ContractError>;

    fn query_projected_value(
        env: Env,
        shares_amount: i128,
        stake_type: StakeType,
        projection_days: u64,
    ) -> Result<ProjectionResponse, ContractError>;

    fn query_projected_stake(
        env: Env,
        hsk_amount: i128,
        stake_type: StakeType,
        projection_days: u64,
    ) -> Result<ProjectionResponse, ContractError>;
}

#[contractimpl]
impl EstimatorTrait for Estimator {
    fn initialize(
        env: Env,
        admin: Address,
        staking_contract: Address,
        average_block_time: Option<u64>,
    ) -> Result<(), ContractError> {
        if utils::is_initialized(&env) {
            log!(
                &env,
                "Estimator: Initialize: initializing contract twice is not allowed"
            );
            return Err(ContractError::AlreadyInitialized);
        }

        let average_block_time = average_block_time.unwrap_or(DEFAULT_AVERAGE_BLOCK_TIME);
        if average_block_time == 0 {
            log!(
                &env,
                "Estimator: Initialize: average block time of 0 would break block extrapolation"
            );
            return Err(ContractError::InvalidBlockTime);
        }

        utils::set_initialized(&env);
        utils::save_admin(&env, &admin);
        save_config(
            &env,
            Config {
                staking_contract: staking_contract.clone(),
                average_block_time,
            },
        );

        env.events()
            .publish(("initialize", "HSK staking estimator"), &staking_contract);

        Ok(())
    }

    fn update(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), ContractError> {
        let admin = get_admin(&env)?;
        admin.require_auth();

        env.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    // QUERIES

    fn query_config(env: Env) -> Result<ConfigResponse, ContractError> {
        Ok(ConfigResponse {
            config: get_config(&env)?,
        })
    }

    fn query_admin(env: Env) -> Result<Address, ContractError> {
        get_admin(&env)
    }

    fn query_reward_status(env: Env) -> Result<RewardStatus, ContractError> {
        let config = get_config(&env)?;
        let staking = StakingClient::new(&env, &config.staking_contract);

        Ok(staking.get_reward_status())
    }

    fn query_user_stakes(env: Env, user: Address) -> Result<Vec<UserStake>, ContractError> {
        let config = get_config(&env)?;
        let staking = StakingClient::new(&env, &config.staking_contract);

        Ok(staking.get_user_stakes(&user))
    }

    fn query_staking_overview(env: Env) -> Result<StakingOverviewResponse, ContractError> {
        let config = get_config(&env)?;
        let staking = StakingClient::new(&env, &config.staking_contract);

        let total_value_locked = staking.total_value_locked();

        let mut buckets = Vec::new(&env);
        let mut total_bonus = 0i128;
        for stake_type in StakeType::all() {
            let total_shares = staking.total_shares_by_stake_type(&stake_type);
            let max_apr_bps = staking.max_aprs(&stake_type);
            let correction_factor_bps = staking.calculate_correction_factor(&stake_type);

            let bonus = bucket_bonus(total_shares, correction_factor_bps)?;
            total_bonus = total_bonus
                .checked_add(bonus)
                .ok_or(ContractError::ContractMathError)?;

            buckets.push_back(BucketOverview {
                stake_type,
                total_shares,
                max_apr_bps,
                correction_factor_bps,
                bonus,
            });
        }

        Ok(StakingOverviewResponse {
            total_value_locked,
            buckets,
            total_bonus,
        })
    }

    fn query_projected_value(
        env: Env,
        shares_amount: i128,
        stake_type: StakeType,
        projection_days: u64,
    ) -> Result<ProjectionResponse, ContractError> {
        if shares_amount < 0 {
            log!(
                &env,
                "Estimator: Projected value: negative share amount {} is not allowed",
                shares_amount
            );
            return Err(ContractError::InvalidShareAmount);
        }

        let config = get_config(&env)?;
        projected_value(&env, &config, shares_amount, stake_type, projection_days)
    }

    fn query_projected_stake(
        env: Env,
        hsk_amount: i128,
        stake_type: StakeType,
        projection_days: u64,
    ) -> Result<ProjectionResponse, ContractError> {
        if hsk_amount < 0 {
            log!(
                &env,
                "Estimator: Projected stake: negative stake amount {} is not allowed",
                hsk_amount
            );
            return Err(ContractError::InvalidStakeAmount);
        }

        let config = get_config(&env)?;
        let staking = StakingClient::new(&env, &config.staking_contract);
        let shares_amount = staking.get_shares_for_hsk(&hsk_amount);

        projected_value(&env, &config, shares_amount, stake_type, projection_days)
    }
}

/// Issues the fresh reads the projection needs and runs the estimation. The
/// reads are siblings with no snapshot semantics of their own; within one
/// invocation they all observe the same ledger.
fn projected_value(
    env: &Env,
    config: &Config,
    shares_amount: i128,
    stake_type: StakeType,
    projection_days: u64,
) -> Result<ProjectionResponse, ContractError> {
    let staking = StakingClient::new(env, &config.staking_contract);

    let reward_status = staking.get_reward_status();
    let bucket_shares = staking.total_shares_by_stake_type(&stake_type);
    let hsk_per_block = staking.hsk_per_block();
    let start_block = staking.start_block();
    let total_paid = staking.total_paid_rewards();
    let total_pooled = staking.total_pooled_hsk();
    let max_apr_bps = staking.max_aprs(&stake_type);
    let correction_factor_bps = staking.calculate_correction_factor(&stake_type);

    let result = projection::project(
        env,
        &ProjectionInputs {
            shares_amount,
            total_shares: reward_status.total_shares,
            bucket_shares,
            total_pooled,
            hsk_per_block,
            start_block,
            total_paid,
            max_apr_bps,
            correction_factor_bps,
            current_block: env.ledger().sequence() as u64,
            projection_days,
            average_block_time: config.average_block_time,
        },
    )?;

    Ok(ProjectionResponse {
        total: result.total,
        base: result.base,
        final_reward: result.reward,
        actual_apr_bps: result.apr_bps,
    })
}

/// Extra allocation weight of a bucket: the correction factor's excess over
/// 100% applied to the bucket's share total. Buckets at or below 100% carry
/// no bonus.
fn bucket_bonus(total_shares: i128, correction_factor_bps: u64) -> Result<i128, ContractError> {
    let excess_bps = correction_factor_bps.saturating_sub(BPS);

    total_shares
        .checked_mul(excess_bps as i128)
        .map(|weighted| weighted / BPS as i128)
        .ok_or(ContractError::ContractMathError)
}
