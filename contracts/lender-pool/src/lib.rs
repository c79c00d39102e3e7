#![no_std]

mod flash_loan;
mod invariants;
mod storage;

#[cfg(feature = "certora")]
mod certora_specs;

use pool_types::LoanState;
use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Symbol};
use storage::{
    get_balance, get_loan_state, get_token, get_total_deposits, has_token, set_balance,
    set_token, set_total_deposits,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LenderError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    NotEnoughLiquidity = 5,
    LoanInFlight = 6,
    FlashLoanNotRepaid = 7,
}

/// Single-asset pool that takes deposits and lends its whole liquidity out
/// in flash loans.
#[contract]
pub struct LenderPool;

#[contractimpl]
impl LenderPool {
    /// Initialize the pool with the asset it custodies
    pub fn initialize(env: Env, token: Address) -> Result<(), LenderError> {
        if has_token(&env) {
            return Err(LenderError::AlreadyInitialized);
        }
        set_token(&env, &token);
        set_total_deposits(&env, 0);
        Ok(())
    }

    /// Lock `amount` of the pool asset and credit it to `from`
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), LenderError> {
        from.require_auth();
        ensure_credit_change_allowed(&env, amount)?;
        if amount <= 0 {
            return Err(LenderError::InvalidAmount);
        }

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&from, &env.current_contract_address(), &amount);

        set_balance(&env, &from, get_balance(&env, &from) + amount);
        set_total_deposits(&env, get_total_deposits(&env) + amount);

        env.events()
            .publish((Symbol::new(&env, "deposit"), from), amount);
        Ok(())
    }

    /// Pay out the whole credit of `to`
    ///
    /// # Returns
    /// The amount withdrawn
    pub fn withdraw(env: Env, to: Address) -> Result<i128, LenderError> {
        to.require_auth();

        let amount = get_balance(&env, &to);
        ensure_credit_change_allowed(&env, -amount)?;
        if amount == 0 {
            return Err(LenderError::InsufficientBalance);
        }

        set_balance(&env, &to, 0);
        set_total_deposits(&env, get_total_deposits(&env) - amount);

        let token_client = token::Client::new(&env, &get_token(&env));
        token_client.transfer(&env.current_contract_address(), &to, &amount);

        env.events()
            .publish((Symbol::new(&env, "withdraw"), to), amount);
        Ok(amount)
    }

    /// Lend `amount` to `receiver`, which must hand it back before its
    /// `execute_flash_loan` callback returns
    pub fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), LenderError> {
        initiator.require_auth();
        flash_loan::execute_flash_loan(&env, initiator, receiver, amount)
    }

    // === View Functions ===

    /// Credit owed to `account`
    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    /// Sum of all depositor credit
    pub fn total_deposits(env: Env) -> i128 {
        get_total_deposits(&env)
    }

    /// Pool balance of the custodied asset
    pub fn liquidity(env: Env) -> i128 {
        token::Client::new(&env, &get_token(&env)).balance(&env.current_contract_address())
    }

    pub fn loan_state(env: Env) -> LoanState {
        get_loan_state(&env)
    }

    pub fn token(env: Env) -> Address {
        get_token(&env)
    }
}

fn ensure_credit_change_allowed(env: &Env, credit_delta: i128) -> Result<(), LenderError> {
    if !invariants::credit_change_allowed(&get_loan_state(env), credit_delta) {
        return Err(LenderError::LoanInFlight);
    }
    Ok(())
}
