#![no_std]

mod invariants;
mod rewards;
mod round;
mod storage;

#[cfg(feature = "certora")]
mod certora_specs;


use pool_math::is_round_due;
use pool_types::{AssetLedgerClient, RewarderConfig, Round};
use soroban_sdk::{contract, contracterror, contractimpl, log, token, Address, Env, Symbol};
use storage::{get_config, get_last_claimed_round, get_round, has_config, set_config};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RewarderError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    RoundNotReady = 6,
    AlreadyClaimed = 7,
    ArithmeticOverflow = 8,
}

/// Pays a fixed reward budget each round, split pro rata over the deposits
/// recorded in the accounting ledger's snapshot for that round.
///
/// Both the accounting ledger and the reward ledger must be administered by
/// this contract.
#[contract]
pub struct RewarderPool;

#[contractimpl]
impl RewarderPool {
    /// Initialize the pool and open round 1
    ///
    /// # Arguments
    /// * `liquidity_token` - Asset accepted as deposit
    /// * `accounting_token` - Non-transferable ledger of deposit credit
    /// * `reward_token` - Ledger the rewards are minted on
    /// * `round_duration` - Minimum round length in seconds
    /// * `rewards_per_round` - Budget split across each round's snapshot
    pub fn initialize(
        env: Env,
        liquidity_token: Address,
        accounting_token: Address,
        reward_token: Address,
        round_duration: u64,
        rewards_per_round: i128,
    ) -> Result<(), RewarderError> {
        if has_config(&env) {
            return Err(RewarderError::AlreadyInitialized);
        }
        if round_duration == 0 || rewards_per_round <= 0 {
            return Err(RewarderError::InvalidConfig);
        }

        let config = RewarderConfig {
            liquidity_token,
            accounting_token,
            reward_token,
            round_duration,
            rewards_per_round,
        };
        set_config(&env, &config);
        round::start_first_round(&env, &config);
        Ok(())
    }

    /// Deposit `amount` of the liquidity token and collect any rewards owed
    /// for the current round
    ///
    /// `from` must have approved this pool for `amount` on the liquidity
    /// token beforehand.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), RewarderError> {
        from.require_auth();
        if amount <= 0 {
            return Err(RewarderError::InvalidAmount);
        }
        let config = get_config(&env);
        let round = round::advance_round_if_due(&env, &config);
        let pool = env.current_contract_address();

        AssetLedgerClient::new(&env, &config.accounting_token).mint(&pool, &from, &amount);
        token::Client::new(&env, &config.liquidity_token).transfer_from(
            &pool, &from, &pool, &amount,
        );

        env.events()
            .publish((Symbol::new(&env, "deposit"), from.clone()), amount);

        rewards::distribute(&env, &config, &round, &from)?;
        Ok(())
    }

    /// Burn `amount` of credit and pay the same amount of principal back
    pub fn withdraw(env: Env, to: Address, amount: i128) -> Result<(), RewarderError> {
        to.require_auth();
        if amount <= 0 {
            return Err(RewarderError::InvalidAmount);
        }
        let config = get_config(&env);
        round::advance_round_if_due(&env, &config);
        let pool = env.current_contract_address();

        let accounting = AssetLedgerClient::new(&env, &config.accounting_token);
        let credit = accounting.balance(&to);
        if amount > credit {
            log!(&env, "withdraw exceeds credit: {} > {}", amount, credit);
            return Err(RewarderError::InsufficientBalance);
        }
        accounting.burn(&pool, &to, &amount);
        token::Client::new(&env, &config.liquidity_token).transfer(&pool, &to, &amount);

        env.events()
            .publish((Symbol::new(&env, "withdraw"), to), amount);
        Ok(())
    }

    /// Pay `account` its share of the current round
    ///
    /// # Returns
    /// The amount minted, 0 when nothing is owed or it was already paid
    pub fn distribute_rewards(env: Env, account: Address) -> Result<i128, RewarderError> {
        account.require_auth();
        let config = get_config(&env);
        let round = round::advance_round_if_due(&env, &config);
        rewards::distribute(&env, &config, &round, &account)
    }

    /// Strict form of `distribute_rewards`
    ///
    /// # Errors
    /// * `RoundNotReady` - The round's snapshot holds no deposits
    /// * `AlreadyClaimed` - `account` was already paid this round
    pub fn claim_rewards(env: Env, account: Address) -> Result<i128, RewarderError> {
        account.require_auth();
        let config = get_config(&env);
        let round = round::advance_round_if_due(&env, &config);
        rewards::claim(&env, &config, &round, &account)
    }

    // === View Functions ===

    pub fn config(env: Env) -> RewarderConfig {
        get_config(&env)
    }

    pub fn round(env: Env) -> Round {
        get_round(&env)
    }

    pub fn round_number(env: Env) -> u32 {
        get_round(&env).number
    }

    /// Time the current round's snapshot was taken
    pub fn last_snapshot_timestamp(env: Env) -> u64 {
        get_round(&env).start_time
    }

    /// True once the current round has run its minimum duration; the next
    /// state-changing call will open a new round.
    pub fn is_new_rewards_round(env: Env) -> bool {
        let config = get_config(&env);
        let round = get_round(&env);
        is_round_due(
            env.ledger().timestamp(),
            round.start_time,
            config.round_duration,
        )
    }

    /// What `distribute_rewards` would pay `account` if called now
    pub fn pending_rewards(env: Env, account: Address) -> Result<i128, RewarderError> {
        let config = get_config(&env);
        let round = get_round(&env);
        let now = env.ledger().timestamp();

        if is_round_due(now, round.start_time, config.round_duration) {
            // The rollover snapshot would capture the live balances
            let accounting = AssetLedgerClient::new(&env, &config.accounting_token);
            return rewards::share_of(
                &env,
                accounting.balance(&account),
                accounting.total_supply(),
                config.rewards_per_round,
            );
        }
        if rewards::has_claimed(&env, &account, &round) {
            return Ok(0);
        }
        rewards::owed_rewards(&env, &config, &round, &account)
    }

    /// Last round `account` was paid for, 0 if never
    pub fn last_claimed_round(env: Env, account: Address) -> u32 {
        get_last_claimed_round(&env, &account)
    }
}
