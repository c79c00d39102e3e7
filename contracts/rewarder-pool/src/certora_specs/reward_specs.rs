// ============================================================================
// REWARD SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A single share never exceeds the round budget
// 2. Two holders of one snapshot never split more than the budget
// 3. A larger deposit never earns a smaller share
// 4. An account is paid at most once per round
//
// ============================================================================

use cvlr_soroban_derive::rule;

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

use crate::invariants::{claim_allowed, round_within_budget};
use pool_math::reward_share;
use pool_types::Round;

/// RULE: Sanity check - a positive share is reachable
#[rule]
pub fn sanity_positive_share(deposited: i128, total: i128, budget: i128) {
    cvlr_assume!(deposited > 0 && deposited <= total);
    cvlr_assume!(budget > 0);
    let share = reward_share(deposited, total, budget).unwrap_or(0);
    cvlr_satisfy!(share > 0);
}

/// RULE: A share stays within the round budget
#[rule]
pub fn share_within_budget(deposited: i128, total: i128, budget: i128) {
    cvlr_assume!(budget > 0);
    if let Some(share) = reward_share(deposited, total, budget) {
        cvlr_assert!(round_within_budget(share, budget));
    }
}

/// RULE: Two disjoint holders split at most the budget
#[rule]
pub fn split_within_budget(a: i128, b: i128, budget: i128) {
    cvlr_assume!(a >= 0 && b >= 0 && a <= i128::MAX - b);
    cvlr_assume!(budget > 0 && budget <= i128::MAX / 2);
    let total = a + b;
    let share_a = reward_share(a, total, budget);
    let share_b = reward_share(b, total, budget);
    if let (Some(share_a), Some(share_b)) = (share_a, share_b) {
        cvlr_assert!(round_within_budget(share_a + share_b, budget));
    }
}

/// RULE: Shares are monotonic in the deposit
#[rule]
pub fn share_monotonic(smaller: i128, larger: i128, total: i128, budget: i128) {
    cvlr_assume!(0 <= smaller && smaller <= larger && larger <= total);
    cvlr_assume!(budget > 0);
    let low = reward_share(smaller, total, budget);
    let high = reward_share(larger, total, budget);
    if let (Some(low), Some(high)) = (low, high) {
        cvlr_assert!(low <= high);
    }
}

/// RULE: Once paid for a round, no second payment in it
#[rule]
pub fn single_claim_per_round(number: u32, start_time: u64, snapshot_id: u32) {
    cvlr_assume!(number > 0);
    let round = Round {
        number,
        start_time,
        snapshot_id,
    };
    cvlr_assert!(!claim_allowed(number, &round));
}
