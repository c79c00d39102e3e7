#![no_std]

mod ledger;
mod loan;
mod receiver;
mod round;

pub use ledger::*;
pub use loan::*;
pub use receiver::*;
pub use round::*;

/// One whole token at 7 decimals (the Stellar asset convention)
pub const TOKEN_UNIT: i128 = 10_000_000;

/// Decimals used by the ledgers the rewarder pool administers
pub const LEDGER_DECIMALS: u32 = 7;

/// Minimum duration of a rewards round, in seconds (5 days)
pub const REWARDS_ROUND_MIN_DURATION: u64 = 5 * 24 * 60 * 60;

/// Rewards minted per round across all depositors
pub const REWARDS_PER_ROUND: i128 = 100 * TOKEN_UNIT;
