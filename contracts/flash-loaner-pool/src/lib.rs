#![no_std]

use pool_types::FlashLoanReceiverClient;
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, token, Address,
    Env, Symbol,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FlashLoanerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    NotEnoughLiquidity = 4,
    FlashLoanNotRepaid = 5,
}

/// Storage keys for the flash loaner pool
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Asset the pool lends
    Token,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;

/// Liquidity source with no depositor ledger: it lends whatever it holds
/// and only checks that its balance is back when the receiver returns.
#[contract]
pub struct FlashLoanerPool;

#[contractimpl]
impl FlashLoanerPool {
    /// Initialize the pool with the asset it lends
    pub fn initialize(env: Env, token: Address) -> Result<(), FlashLoanerError> {
        if env.storage().instance().has(&DataKey::Token) {
            return Err(FlashLoanerError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Token, &token);
        extend_instance_ttl(&env);
        Ok(())
    }

    /// Lend `amount` to `receiver` for the duration of its
    /// `execute_flash_loan` callback
    pub fn flash_loan(
        env: Env,
        initiator: Address,
        receiver: Address,
        amount: i128,
    ) -> Result<(), FlashLoanerError> {
        initiator.require_auth();
        if amount <= 0 {
            return Err(FlashLoanerError::InvalidAmount);
        }

        let token_address = get_token(&env);
        let token_client = token::Client::new(&env, &token_address);
        let pool = env.current_contract_address();

        let balance_before = token_client.balance(&pool);
        if amount > balance_before {
            return Err(FlashLoanerError::NotEnoughLiquidity);
        }

        token_client.transfer(&pool, &receiver, &amount);
        FlashLoanReceiverClient::new(&env, &receiver).execute_flash_loan(
            &initiator,
            &token_address,
            &amount,
        );

        let balance_after = token_client.balance(&pool);
        if balance_after < balance_before {
            log!(&env, "flash loan not repaid: {} < {}", balance_after, balance_before);
            return Err(FlashLoanerError::FlashLoanNotRepaid);
        }

        env.events().publish(
            (Symbol::new(&env, "flash_loan"), initiator, receiver),
            amount,
        );
        Ok(())
    }

    // === View Functions ===

    pub fn token(env: Env) -> Address {
        get_token(&env)
    }

    /// Largest loan the pool can currently grant
    pub fn liquidity(env: Env) -> i128 {
        token::Client::new(&env, &get_token(&env)).balance(&env.current_contract_address())
    }
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

fn get_token(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .unwrap_or_else(|| panic_with_error!(env, FlashLoanerError::NotInitialized))
}
