// ============================================================================
// LENDER POOL INVARIANTS
// ============================================================================
//
// Predicates the pool must satisfy after every successful call. The contract
// checks `loan_repaid` and `credit_change_allowed` itself; `deposits_backed`
// is asserted by the tests and the verification rules.
//
// 1. BACKING     - depositor credit is always covered by real liquidity
// 2. REPAYMENT   - a flash loan leaves liquidity and credit where it found them
// 3. SEPARATION  - no credit is created while liquidity is on loan
//
// ============================================================================

use pool_types::{FlashLoanReceipt, LoanState};

/// Invariant: every unit of credit is backed by a unit of liquidity
///
/// Property:
///   total_deposits <= liquidity
pub fn deposits_backed(total_deposits: i128, liquidity: i128) -> bool {
    total_deposits >= 0 && total_deposits <= liquidity
}

/// Invariant: a finished flash loan restored the pool
///
/// Property:
///   liquidity_after >= liquidity_before
///   deposits_after == deposits_before
///
/// The second clause rejects a receiver that "repays" by depositing the
/// borrowed funds: liquidity is back, but it is now owed to the receiver.
pub fn loan_repaid(receipt: &FlashLoanReceipt, liquidity_after: i128, deposits_after: i128) -> bool {
    liquidity_after >= receipt.liquidity_before && deposits_after == receipt.deposits_before
}

/// Invariant: credit may only change while no loan is open
///
/// Property:
///   credit_delta != 0 => loan == Idle
pub fn credit_change_allowed(loan: &LoanState, credit_delta: i128) -> bool {
    credit_delta == 0 || loan.is_idle()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn receipt() -> FlashLoanReceipt {
        FlashLoanReceipt {
            amount: 1_000,
            liquidity_before: 1_000,
            deposits_before: 1_000,
        }
    }

    #[test]
    fn test_deposits_backed() {
        assert!(deposits_backed(0, 0));
        assert!(deposits_backed(1_000, 1_000));
        assert!(deposits_backed(1_000, 1_500));
        assert!(!deposits_backed(1_001, 1_000));
    }

    #[test]
    fn test_loan_repaid_requires_liquidity() {
        assert!(loan_repaid(&receipt(), 1_000, 1_000));
        assert!(loan_repaid(&receipt(), 1_001, 1_000));
        assert!(!loan_repaid(&receipt(), 0, 1_000));
    }

    #[test]
    fn test_repayment_by_deposit_rejected() {
        // Liquidity restored through deposit(): credit grew by the loan amount
        assert!(!loan_repaid(&receipt(), 1_000, 2_000));
    }

    #[test]
    fn test_credit_frozen_while_on_loan() {
        let on_loan = LoanState::OnLoan(receipt());
        assert!(credit_change_allowed(&LoanState::Idle, 500));
        assert!(credit_change_allowed(&on_loan, 0));
        assert!(!credit_change_allowed(&on_loan, 1_000));
        assert!(!credit_change_allowed(&on_loan, -1_000));
    }
}
