use crate::storage::{get_round, set_round};
use pool_math::is_round_due;
use pool_types::{AssetLedgerClient, RewarderConfig, Round};
use soroban_sdk::{Env, Symbol};

/// Close the current round if its minimum duration has elapsed.
///
/// Called first by every entry point that depends on the round, before the
/// entry point touches any balance. The accounting snapshot taken here
/// therefore holds balances as they stood when the previous call finished;
/// nothing the triggering call does can reach it.
pub fn advance_round_if_due(env: &Env, config: &RewarderConfig) -> Round {
    let round = get_round(env);
    let now = env.ledger().timestamp();
    if !is_round_due(now, round.start_time, config.round_duration) {
        return round;
    }

    let snapshot_id = AssetLedgerClient::new(env, &config.accounting_token)
        .snapshot(&env.current_contract_address());
    let next = round.next(now, snapshot_id);
    set_round(env, &next);

    env.events().publish(
        (Symbol::new(env, "round_started"), next.number),
        (next.start_time, next.snapshot_id),
    );
    next
}

/// Open round 1, frozen at the accounting ledger's first snapshot
pub fn start_first_round(env: &Env, config: &RewarderConfig) -> Round {
    let snapshot_id = AssetLedgerClient::new(env, &config.accounting_token)
        .snapshot(&env.current_contract_address());
    let round = Round::first(env.ledger().timestamp(), snapshot_id);
    set_round(env, &round);

    env.events().publish(
        (Symbol::new(env, "round_started"), round.number),
        (round.start_time, round.snapshot_id),
    );
    round
}
