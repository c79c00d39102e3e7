use soroban_sdk::{contracttype, Address};

/// A rewards round - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Round {
    /// Round number, starting at 1
    pub number: u32,
    /// Ledger timestamp at which the round started
    pub start_time: u64,
    /// Accounting ledger snapshot taken when the round started
    pub snapshot_id: u32,
}

impl Round {
    pub fn first(start_time: u64, snapshot_id: u32) -> Self {
        Self {
            number: 1,
            start_time,
            snapshot_id,
        }
    }

    /// The round that follows this one, frozen at `snapshot_id`
    pub fn next(&self, start_time: u64, snapshot_id: u32) -> Self {
        Self {
            number: self.number + 1,
            start_time,
            snapshot_id,
        }
    }
}

/// Rewarder pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct RewarderConfig {
    /// Principal asset depositors lock in the pool
    pub liquidity_token: Address,
    /// Non-transferable ledger tracking deposit credit
    pub accounting_token: Address,
    /// Ledger the pool mints rewards on
    pub reward_token: Address,
    /// Minimum round length in seconds
    pub round_duration: u64,
    /// Rewards minted per round
    pub rewards_per_round: i128,
}
