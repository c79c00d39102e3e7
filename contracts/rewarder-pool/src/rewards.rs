use crate::invariants::claim_allowed;
use crate::storage::{get_last_claimed_round, set_last_claimed_round};
use crate::RewarderError;
use pool_math::reward_share;
use pool_types::{AssetLedgerClient, RewarderConfig, Round};
use soroban_sdk::{log, Address, Env, Symbol};

/// Share of the round's rewards owed to `account`, ignoring prior claims
pub fn owed_rewards(
    env: &Env,
    config: &RewarderConfig,
    round: &Round,
    account: &Address,
) -> Result<i128, RewarderError> {
    let accounting = AssetLedgerClient::new(env, &config.accounting_token);
    let total_deposits = accounting.total_supply_at(&round.snapshot_id);
    let deposited = accounting.balance_at(account, &round.snapshot_id);
    share_of(env, deposited, total_deposits, config.rewards_per_round)
}

pub fn share_of(
    env: &Env,
    deposited: i128,
    total_deposits: i128,
    rewards_per_round: i128,
) -> Result<i128, RewarderError> {
    reward_share(deposited, total_deposits, rewards_per_round).ok_or_else(|| {
        log!(env, "reward share overflow: {} of {}", deposited, total_deposits);
        RewarderError::ArithmeticOverflow
    })
}

pub fn has_claimed(env: &Env, account: &Address, round: &Round) -> bool {
    !claim_allowed(get_last_claimed_round(env, account), round)
}

/// Pay what `account` is owed for `round`; a repeated or empty claim pays
/// nothing.
pub fn distribute(
    env: &Env,
    config: &RewarderConfig,
    round: &Round,
    account: &Address,
) -> Result<i128, RewarderError> {
    if has_claimed(env, account, round) {
        return Ok(0);
    }
    let amount = owed_rewards(env, config, round, account)?;
    if amount > 0 {
        pay(env, config, round, account, amount);
    }
    Ok(amount)
}

/// Like `distribute`, but a round without deposits or a repeated claim is an
/// error.
pub fn claim(
    env: &Env,
    config: &RewarderConfig,
    round: &Round,
    account: &Address,
) -> Result<i128, RewarderError> {
    let accounting = AssetLedgerClient::new(env, &config.accounting_token);
    if accounting.total_supply_at(&round.snapshot_id) == 0 {
        return Err(RewarderError::RoundNotReady);
    }
    if has_claimed(env, account, round) {
        return Err(RewarderError::AlreadyClaimed);
    }
    let amount = owed_rewards(env, config, round, account)?;
    if amount > 0 {
        pay(env, config, round, account, amount);
    }
    Ok(amount)
}

fn pay(env: &Env, config: &RewarderConfig, round: &Round, account: &Address, amount: i128) {
    AssetLedgerClient::new(env, &config.reward_token).mint(
        &env.current_contract_address(),
        account,
        &amount,
    );
    set_last_claimed_round(env, account, round.number);

    env.events().publish(
        (Symbol::new(env, "rewards_paid"), account.clone(), round.number),
        amount,
    );
}
