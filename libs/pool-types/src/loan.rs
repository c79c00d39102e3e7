use soroban_sdk::contracttype;

/// Bookkeeping for a flash loan that is currently on the call stack.
///
/// Only lives inside `LoanState::OnLoan` and is cleared before the
/// post-call repayment checks run.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlashLoanReceipt {
    /// Amount handed to the receiver
    pub amount: i128,
    /// Pool balance of the lent asset before the transfer out
    pub liquidity_before: i128,
    /// Sum of depositor credit before the transfer out
    pub deposits_before: i128,
}

/// Ownership class of the pool's liquidity.
///
/// While `OnLoan`, the lent amount belongs to the open loan and no entry
/// point may turn it into depositor credit.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoanState {
    Idle,
    OnLoan(FlashLoanReceipt),
}

impl LoanState {
    pub fn is_idle(&self) -> bool {
        matches!(self, LoanState::Idle)
    }
}

impl Default for LoanState {
    fn default() -> Self {
        LoanState::Idle
    }
}
