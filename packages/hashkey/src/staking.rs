use soroban_sdk::{contractclient, contracttype, Address, Env, Vec};

/// Lock-duration buckets of the staking pool. Each bucket keeps its own share
/// accounting, APR cap and correction factor on the staking contract side.
///
/// The discriminants follow the deployed contract's numbering and must not be
/// reordered.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum StakeType {
    Fixed30Days = 0,
    Fixed90Days = 1,
    Fixed180Days = 2,
    Fixed365Days = 3,
    Flexible = 4,
}

impl StakeType {
    /// All buckets, in contract numbering order.
    pub const fn all() -> [StakeType; 5] {
        [
            StakeType::Fixed30Days,
            StakeType::Fixed90Days,
            StakeType::Fixed180Days,
            StakeType::Fixed365Days,
            StakeType::Flexible,
        ]
    }

    /// Lock length of the bucket in days; 0 for the flexible bucket.
    pub const fn lock_days(&self) -> u64 {
        match self {
            StakeType::Fixed30Days => 30,
            StakeType::Fixed90Days => 90,
            StakeType::Fixed180Days => 180,
            StakeType::Fixed365Days => 365,
            StakeType::Flexible => 0,
        }
    }
}

/// Snapshot of the pool-wide reward accounting as returned by
/// `get_reward_status`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardStatus {
    /// Total HSK value pooled, including accrued rewards
    pub total_pooled: i128,
    /// Total shares minted against the pool
    pub total_shares: i128,
    /// Rewards already paid out to stakers
    pub total_paid: i128,
    /// Rewards reserved for pending withdrawals
    pub reserved: i128,
    /// Raw token balance held by the staking contract
    pub contract_balance: i128,
}

/// A single staking position as returned by `get_user_stakes`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStake {
    pub id: u64,
    pub shares_amount: i128,
    pub hsk_amount: i128,
    pub start_block: u64,
    pub end_block: u64,
    pub unstaked: bool,
    pub staking_block_length: u64,
}

/// Public interface of the deployed HSK staking contract.
///
/// The staking contract is an external collaborator; no WASM artifact of it
/// is shipped with this workspace, so instead of `contractimport!` the
/// interface is declared here and `StakingClient` is generated from it.
#[contractclient(name = "StakingClient")]
pub trait HskStakingContract {
    /// Pool-wide reward accounting snapshot.
    fn get_reward_status(env: Env) -> RewardStatus;

    /// Total HSK value locked across all buckets.
    fn total_value_locked(env: Env) -> i128;

    /// Total shares currently held in the given bucket.
    fn total_shares_by_stake_type(env: Env, stake_type: StakeType) -> i128;

    /// Per-block reward emission rate.
    fn hsk_per_block(env: Env) -> i128;

    /// First block of the emission schedule.
    fn start_block(env: Env) -> u64;

    /// Cumulative rewards already distributed.
    fn total_paid_rewards(env: Env) -> i128;

    /// Total HSK value pooled (principal plus accrued rewards).
    fn total_pooled_hsk(env: Env) -> i128;

    /// Basis-point APR cap configured for the bucket.
    fn max_aprs(env: Env, stake_type: StakeType) -> u64;

    /// Basis-point allocation multiplier applied to the bucket's share of
    /// unclaimed rewards.
    fn calculate_correction_factor(env: Env, stake_type: StakeType) -> u64;

    /// Converts an HSK amount to shares at the current exchange rate.
    fn get_shares_for_hsk(env: Env, hsk_amount: i128) -> i128;

    /// Converts shares in a bucket back to an HSK amount.
    fn get_hsk_for_shares_by_type(env: Env, shares_amount: i128, stake_type: StakeType) -> i128;

    /// Converts stHSK shares back to an HSK amount.
    fn get_hsk_for_st_hsk(env: Env, shares_amount: i128) -> i128;

    /// All staking positions of the given user.
    fn get_user_stakes(env: Env, user: Address) -> Vec<UserStake>;

    /// Opens a new staking position. Submitted by the dashboard on behalf of
    /// the user; never invoked by the estimator.
    fn stake(env: Env, sender: Address, hsk_amount: i128, stake_type: StakeType);

    /// Closes the position with the given id.
    fn unstake_by_id(env: Env, sender: Address, stake_id: u64);

    /// Claims the matured withdrawal for the given position.
    fn claim(env: Env, sender: Address, stake_id: u64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StakeType::Fixed30Days, 30; "thirty days")]
    #[test_case(StakeType::Fixed90Days, 90; "ninety days")]
    #[test_case(StakeType::Fixed180Days, 180; "one hundred eighty days")]
    #[test_case(StakeType::Fixed365Days, 365; "one year")]
    #[test_case(StakeType::Flexible, 0; "flexible")]
    fn lock_days_per_bucket(stake_type: StakeType, expected: u64) {
        assert_eq!(stake_type.lock_days(), expected);
    }

    #[test]
    fn all_buckets_follow_contract_numbering() {
        let all = StakeType::all();
        assert_eq!(all.len(), 5);
        for (idx, stake_type) in all.iter().enumerate() {
            assert_eq!(*stake_type as u32, idx as u32);
        }
    }
}
