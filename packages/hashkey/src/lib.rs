#![no_std]

pub mod staking;
pub mod ttl;

/// Basis point scale used for APRs and correction factors; 10_000 bps = 100%.
pub const BPS: u64 = 10_000;
