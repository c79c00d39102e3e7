// ============================================================================
// FLASH LOAN SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A loan that lowers liquidity is never accepted as repaid
// 2. A loan that grows depositor credit is never accepted as repaid
// 3. Credit cannot change while a loan is open
//
// ============================================================================

use cvlr_soroban_derive::rule;

use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

use crate::invariants::{credit_change_allowed, deposits_backed, loan_repaid};
use pool_types::{FlashLoanReceipt, LoanState};

/// RULE: Sanity check - an exact repayment is reachable
#[rule]
pub fn sanity_exact_repayment(liquidity: i128, deposits: i128) {
    cvlr_assume!(deposits >= 0 && deposits <= liquidity);
    let receipt = FlashLoanReceipt {
        amount: liquidity,
        liquidity_before: liquidity,
        deposits_before: deposits,
    };
    cvlr_satisfy!(loan_repaid(&receipt, liquidity, deposits));
}

/// RULE: Liquidity below the pre-loan level is never repaid
#[rule]
pub fn shortfall_never_repaid(liquidity_before: i128, liquidity_after: i128, deposits: i128) {
    cvlr_assume!(liquidity_after < liquidity_before);
    let receipt = FlashLoanReceipt {
        amount: liquidity_before,
        liquidity_before,
        deposits_before: deposits,
    };
    cvlr_assert!(!loan_repaid(&receipt, liquidity_after, deposits));
}

/// RULE: Repaying through deposit() is never repaid
#[rule]
pub fn deposit_repayment_rejected(liquidity: i128, deposits: i128, amount: i128) {
    cvlr_assume!(amount > 0);
    cvlr_assume!(deposits >= 0 && deposits <= i128::MAX - amount);
    let receipt = FlashLoanReceipt {
        amount,
        liquidity_before: liquidity,
        deposits_before: deposits,
    };
    cvlr_assert!(!loan_repaid(&receipt, liquidity, deposits + amount));
}

/// RULE: An accepted repayment keeps previously backed credit backed
#[rule]
pub fn repayment_preserves_backing(
    liquidity_before: i128,
    liquidity_after: i128,
    deposits: i128,
) {
    cvlr_assume!(deposits_backed(deposits, liquidity_before));
    let receipt = FlashLoanReceipt {
        amount: liquidity_before,
        liquidity_before,
        deposits_before: deposits,
    };
    cvlr_assume!(loan_repaid(&receipt, liquidity_after, deposits));
    cvlr_assert!(deposits_backed(deposits, liquidity_after));
}

/// RULE: No credit movement while on loan
#[rule]
pub fn credit_frozen_on_loan(amount: i128, delta: i128) {
    cvlr_assume!(delta != 0);
    let loan = LoanState::OnLoan(FlashLoanReceipt {
        amount,
        liquidity_before: amount,
        deposits_before: 0,
    });
    cvlr_assert!(!credit_change_allowed(&loan, delta));
}
