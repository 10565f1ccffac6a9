extern crate std;

use pretty_assertions::assert_eq;
use soroban_sdk::{testutils::Address as _, vec, Address, Env};

use hashkey::staking::{StakeType, UserStake};

use super::setup::{default_mock_state, deploy_estimator, deploy_mock_staking};

use crate::msg::BucketOverview;

#[test]
fn overview_derives_bonuses_from_correction_factors() {
    let env = Env::default();
    env.mock_all_auths();

    let mut state = default_mock_state(&env);
    state.total_value_locked = 37_000;
    state.bucket_shares.set(StakeType::Fixed30Days, 5_000);
    state.bucket_shares.set(StakeType::Fixed90Days, 10_000);
    state.bucket_shares.set(StakeType::Fixed180Days, 10_000);
    state.bucket_shares.set(StakeType::Fixed365Days, 10_000);
    state.bucket_shares.set(StakeType::Flexible, 2_000);
    // long locks get an allocation multiplier above 100%
    state.correction_factors.set(StakeType::Fixed90Days, 10_080);
    state.correction_factors.set(StakeType::Fixed180Days, 10_200);
    state.correction_factors.set(StakeType::Fixed365Days, 10_400);
    state.max_aprs.set(StakeType::Fixed365Days, 3_600);

    let staking = deploy_mock_staking(&env, &state);
    let estimator = deploy_estimator(&env, None, &staking, None);

    let response = estimator.query_staking_overview();
    assert_eq!(response.total_value_locked, 37_000);
    assert_eq!(
        response.buckets,
        vec![
            &env,
            BucketOverview {
                stake_type: StakeType::Fixed30Days,
                total_shares: 5_000,
                max_apr_bps: 10_000,
                correction_factor_bps: 10_000,
                bonus: 0,
            },
            BucketOverview {
                stake_type: StakeType::Fixed90Days,
                total_shares: 10_000,
                max_apr_bps: 10_000,
                correction_factor_bps: 10_080,
                bonus: 80,
            },
            BucketOverview {
                stake_type: StakeType::Fixed180Days,
                total_shares: 10_000,
                max_apr_bps: 10_000,
                correction_factor_bps: 10_200,
                bonus: 200,
            },
            BucketOverview {
                stake_type: StakeType::Fixed365Days,
                total_shares: 10_000,
                max_apr_bps: 3_600,
                correction_factor_bps: 10_400,
                bonus: 400,
            },
            BucketOverview {
                stake_type: StakeType::Flexible,
                total_shares: 2_000,
                max_apr_bps: 10_000,
                correction_factor_bps: 10_000,
                bonus: 0,
            },
        ]
    );
    assert_eq!(response.total_bonus, 680);
}

#[test]
fn reward_status_passthrough() {
    let env = Env::default();
    env.mock_all_auths();

    let state = default_mock_state(&env);
    let staking = deploy_mock_staking(&env, &state);
    let estimator = deploy_estimator(&env, None, &staking, None);

    assert_eq!(estimator.query_reward_status(), state.reward_status);
}

#[test]
fn user_stakes_passthrough() {
    let env = Env::default();
    env.mock_all_auths();

    let user = Address::generate(&env);
    let positions = vec![
        &env,
        UserStake {
            id: 0,
            shares_amount: 1_000,
            hsk_amount: 1_000,
            start_block: 50,
            end_block: 15_768_050,
            unstaked: false,
            staking_block_length: 15_768_000,
        },
        UserStake {
            id: 1,
            shares_amount: 250,
            hsk_amount: 260,
            start_block: 80,
            end_block: 80,
            unstaked: true,
            staking_block_length: 0,
        },
    ];

    let mut state = default_mock_state(&env);
    state.user_stakes.set(user.clone(), positions.clone());

    let staking = deploy_mock_staking(&env, &state);
    let estimator = deploy_estimator(&env, None, &staking, None);

    assert_eq!(estimator.query_user_stakes(&user), positions);

    let stranger = Address::generate(&env);
    assert_eq!(estimator.query_user_stakes(&stranger), vec![&env]);
}
