use soroban_sdk::{contracttype, Vec};

use hashkey::staking::StakeType;

use crate::storage::Config;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigResponse {
    pub config: Config,
}

/// Result of a reward projection for one share balance in one bucket.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectionResponse {
    /// Projected total redeemable HSK amount at the target block
    pub total: i128,
    /// Current redeemable value of the shares at the live exchange rate
    pub base: i128,
    /// Capped incremental reward projected over the horizon
    pub final_reward: i128,
    /// Annualized return implied by the capped reward, in bps
    pub actual_apr_bps: u64,
}

/// Per-bucket row of the staking overview.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BucketOverview {
    pub stake_type: StakeType,
    /// Total shares held in the bucket
    pub total_shares: i128,
    /// Basis-point APR cap configured for the bucket
    pub max_apr_bps: u64,
    /// Basis-point allocation multiplier of the bucket
    pub correction_factor_bps: u64,
    /// Extra allocation weight of the bucket, applied to its share total:
    /// `total_shares * (correction_factor - 10_000 bps) / 10_000 bps`
    pub bonus: i128,
}

/// The dashboard's page-load snapshot, batched into a single query.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingOverviewResponse {
    /// Total HSK value locked across all buckets
    pub total_value_locked: i128,
    /// One row per bucket, in contract numbering order
    pub buckets: Vec<BucketOverview>,
    /// Summed bonus weight across all buckets
    pub total_bonus: i128,
}
