use pool_types::{Checkpoint, LedgerConfig, LedgerError};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};

/// Storage keys for the asset ledger
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger metadata and admin (Instance storage)
    Config,
    /// Total supply (Instance storage)
    TotalSupply,
    /// Id of the latest snapshot, 0 before the first one (Instance storage)
    SnapshotId,
    /// account -> balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> allowance (Persistent storage)
    Allowance(Address, Address),
    /// history -> number of checkpoints recorded (Persistent storage)
    CheckpointCount(History),
    /// (history, index) -> checkpoint (Persistent storage)
    Checkpoint(History, u32),
}

/// Value whose past is kept across snapshots
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum History {
    Supply,
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

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> LedgerConfig {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, LedgerError::NotInitialized))
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Supply ===

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

pub fn get_snapshot_id(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SnapshotId)
        .unwrap_or(0)
}

pub fn set_snapshot_id(env: &Env, id: u32) {
    env.storage().instance().set(&DataKey::SnapshotId, &id);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_balance(env: &Env, id: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(id.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, id: &Address, balance: i128) {
    let key = DataKey::Balance(id.clone());
    if balance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

// === Allowances ===

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent_ttl(env, &key);
    }
}

// === Checkpoints ===

pub fn get_checkpoint_count(env: &Env, history: &History) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::CheckpointCount(history.clone()))
        .unwrap_or(0)
}

pub fn get_checkpoint(env: &Env, history: &History, index: u32) -> Checkpoint {
    let key = DataKey::Checkpoint(history.clone(), index);
    let checkpoint = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, LedgerError::SnapshotNotFound));
    extend_persistent_ttl(env, &key);
    checkpoint
}

/// Store `checkpoint` after the last one of `history`
pub fn append_checkpoint(env: &Env, history: &History, checkpoint: &Checkpoint) {
    let index = get_checkpoint_count(env, history);
    let key = DataKey::Checkpoint(history.clone(), index);
    env.storage().persistent().set(&key, checkpoint);
    extend_persistent_ttl(env, &key);

    let count_key = DataKey::CheckpointCount(history.clone());
    env.storage().persistent().set(&count_key, &(index + 1));
    extend_persistent_ttl(env, &count_key);
}
