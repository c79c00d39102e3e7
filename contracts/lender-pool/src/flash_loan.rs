use crate::invariants;
use crate::storage::{get_loan_state, get_token, get_total_deposits, set_loan_state};
use crate::LenderError;
use pool_types::{FlashLoanReceipt, FlashLoanReceiverClient, LoanState};
use soroban_sdk::{log, token, Address, Env, Symbol};

/// Lend `amount` to `receiver` for the duration of its callback.
///
/// The lent amount is tagged `OnLoan` until the callback returns, which
/// locks `deposit` and `withdraw`. Repayment is judged only after the nested
/// call has returned: pool liquidity must be back to its pre-loan level and
/// depositor credit must be exactly what it was, so borrowed funds can never
/// come back as withdrawable credit.
pub fn execute_flash_loan(
    env: &Env,
    initiator: Address,
    receiver: Address,
    amount: i128,
) -> Result<(), LenderError> {
    if amount <= 0 {
        return Err(LenderError::InvalidAmount);
    }
    if !get_loan_state(env).is_idle() {
        return Err(LenderError::LoanInFlight);
    }

    let token_address = get_token(env);
    let token_client = token::Client::new(env, &token_address);
    let pool = env.current_contract_address();

    let liquidity_before = token_client.balance(&pool);
    if amount > liquidity_before {
        return Err(LenderError::NotEnoughLiquidity);
    }

    let receipt = FlashLoanReceipt {
        amount,
        liquidity_before,
        deposits_before: get_total_deposits(env),
    };
    set_loan_state(env, &LoanState::OnLoan(receipt.clone()));

    token_client.transfer(&pool, &receiver, &amount);
    FlashLoanReceiverClient::new(env, &receiver).execute_flash_loan(
        &initiator,
        &token_address,
        &amount,
    );

    set_loan_state(env, &LoanState::Idle);

    // Post-conditions read strictly after the receiver returned
    let liquidity_after = token_client.balance(&pool);
    let deposits_after = get_total_deposits(env);
    if !invariants::loan_repaid(&receipt, liquidity_after, deposits_after) {
        log!(
            env,
            "flash loan not repaid: liquidity {} -> {}, deposits {} -> {}",
            receipt.liquidity_before,
            liquidity_after,
            receipt.deposits_before,
            deposits_after
        );
        return Err(LenderError::FlashLoanNotRepaid);
    }

    env.events().publish(
        (Symbol::new(env, "flash_loan"), initiator, receiver),
        amount,
    );
    Ok(())
}
