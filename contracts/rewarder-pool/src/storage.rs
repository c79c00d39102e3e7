use crate::RewarderError;
use pool_types::{RewarderConfig, Round};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

/// Storage keys for the rewarder pool
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Current rewards round (Instance storage)
    Round,
    /// account -> last round it was paid for (Persistent storage)
    LastClaimedRound(Address),
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

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> RewarderConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, RewarderError::NotInitialized))
}

pub fn set_config(env: &Env, config: &RewarderConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Round ===

pub fn get_round(env: &Env) -> Round {
    env.storage()
        .instance()
        .get(&DataKey::Round)
        .unwrap_or_else(|| panic_with_error!(env, RewarderError::NotInitialized))
}

pub fn set_round(env: &Env, round: &Round) {
    env.storage().instance().set(&DataKey::Round, round);
    extend_instance_ttl(env);
}

// === Claims ===

pub fn get_last_claimed_round(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::LastClaimedRound(account.clone()))
        .unwrap_or(0)
}

pub fn set_last_claimed_round(env: &Env, account: &Address, round_number: u32) {
    let key = DataKey::LastClaimedRound(account.clone());
    env.storage().persistent().set(&key, &round_number);
    extend_persistent_ttl(env, &key);
}
