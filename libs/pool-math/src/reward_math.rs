use soroban_fixed_point_math::FixedPoint;

/// Pro-rata reward for a snapshot balance, rounded down.
///
/// Returns `Some(0)` when either side of the ratio is empty and `None` when
/// the intermediate product overflows.
pub fn reward_share(deposited: i128, total_deposits: i128, rewards_per_round: i128) -> Option<i128> {
    if deposited <= 0 || total_deposits <= 0 || rewards_per_round <= 0 {
        return Some(0);
    }
    if deposited > total_deposits {
        // A snapshot balance can never exceed the snapshot supply
        return None;
    }
    deposited.fixed_mul_floor(rewards_per_round, total_deposits)
}

/// Least a full round of claims mints.
///
/// Every claim truncates, so a round pays at most one unit less than the
/// budget per claimant and never more than the budget.
pub fn round_payout_lower_bound(rewards_per_round: i128, claimants: u32) -> i128 {
    rewards_per_round.saturating_sub(claimants as i128).max(0)
}
