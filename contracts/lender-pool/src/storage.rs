use crate::LenderError;
use pool_types::LoanState;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

/// Storage keys for the lender pool
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Native asset the pool lends (Instance storage)
    Token,
    /// Sum of depositor credit (Instance storage)
    TotalDeposits,
    /// Ownership class of the pool's liquidity (Instance storage)
    Loan,
    /// Depositor credit: account -> amount (Persistent storage)
    Balance(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn get_token(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, LenderError::NotInitialized))
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    extend_instance_ttl(env);
}

// === Deposits ===

pub fn get_total_deposits(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDeposits)
        .unwrap_or(0)
}

pub fn set_total_deposits(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::TotalDeposits, &total);
    extend_instance_ttl(env);
}

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    if amount == 0 {
        // Remove empty credit
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Loan ===

pub fn get_loan_state(env: &Env) -> LoanState {
    env.storage()
        .instance()
        .get(&DataKey::Loan)
        .unwrap_or_default()
}

pub fn set_loan_state(env: &Env, state: &LoanState) {
    env.storage().instance().set(&DataKey::Loan, state);
    extend_instance_ttl(env);
}
