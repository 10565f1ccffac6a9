use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 700,
    ConfigNotSet = 701,
    AdminNotSet = 702,
    InvalidBlockTime = 703,
    InvalidShareAmount = 704,
    InvalidStakeAmount = 705,
    ContractMathError = 706,
}
