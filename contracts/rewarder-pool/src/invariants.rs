// ============================================================================
// REWARDER POOL INVARIANTS
// ============================================================================
//
// 1. ISOLATION  - a round's snapshot never changes once taken
// 2. BUDGET     - a round never mints more than its reward budget
// 3. ONE CLAIM  - an account is paid at most once per round
//
// ============================================================================

use pool_types::Round;

/// Invariant: snapshot values are immutable
///
/// Property:
///   value_at(snapshot) observed before == value_at(snapshot) observed after
pub fn snapshot_isolated(before: i128, after: i128) -> bool {
    before == after
}

/// Invariant: rewards minted in one round stay within the budget
///
/// Property:
///   0 <= minted_in_round <= rewards_per_round
pub fn round_within_budget(minted_in_round: i128, rewards_per_round: i128) -> bool {
    minted_in_round >= 0 && minted_in_round <= rewards_per_round
}

/// Invariant: one payment per account per round
///
/// Property:
///   last_claimed_round < round.number
pub fn claim_allowed(last_claimed_round: u32, round: &Round) -> bool {
    last_claimed_round < round.number
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_allowed_once_per_round() {
        let round = Round::first(0, 1).next(100, 2);
        assert!(claim_allowed(0, &round));
        assert!(claim_allowed(1, &round));
        assert!(!claim_allowed(2, &round));
    }

    #[test]
    fn test_round_budget() {
        assert!(round_within_budget(0, 100));
        assert!(round_within_budget(100, 100));
        assert!(!round_within_budget(101, 100));
        assert!(!round_within_budget(-1, 100));
    }

    #[test]
    fn test_snapshot_isolated() {
        assert!(snapshot_isolated(400, 400));
        assert!(!snapshot_isolated(400, 1_000_400));
    }
}
