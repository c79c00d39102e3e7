#![no_std]

mod snapshot;
mod storage;

use pool_types::{AssetLedgerInterface, LedgerConfig, LedgerError};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};
use storage::{
    get_allowance, get_balance, get_config, get_snapshot_id, get_total_supply, has_config,
    set_allowance, set_balance, set_config, set_snapshot_id, set_total_supply,
};

/// Fungible ledger with admin-only issuance and balance snapshots.
///
/// The rewarder pool runs two instances: a non-transferable one for deposit
/// credit and a transferable one for rewards.
#[contract]
pub struct AssetLedger;

#[contractimpl]
impl AssetLedger {
    /// Initialize the ledger
    pub fn initialize(
        env: Env,
        admin: Address,
        decimals: u32,
        name: String,
        symbol: String,
        transferable: bool,
    ) -> Result<(), LedgerError> {
        if has_config(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }

        let config = LedgerConfig {
            admin,
            decimals,
            name,
            symbol,
            transferable,
        };
        set_config(&env, &config);
        set_total_supply(&env, 0);
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ensure_transferable(&env)?;
        check_amount(amount)?;

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) -> Result<(), LedgerError> {
        from.require_auth();
        ensure_transferable(&env)?;
        if amount < 0 {
            return Err(LedgerError::InvalidAmount);
        }

        set_allowance(&env, &from, &spender, amount);

        env.events()
            .publish((Symbol::new(&env, "approve"), from, spender), amount);
        Ok(())
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        get_allowance(&env, &from, &spender)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        spender.require_auth();
        ensure_transferable(&env)?;
        check_amount(amount)?;

        let allowance = get_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        set_allowance(&env, &from, &spender, allowance - amount);

        spend_balance(&env, &from, amount)?;
        receive_balance(&env, &to, amount);

        env.events()
            .publish((Symbol::new(&env, "transfer"), from, to), amount);
        Ok(())
    }

    // === View Functions ===

    /// Id of the latest snapshot (0 before the first one)
    pub fn current_snapshot_id(env: Env) -> u32 {
        get_snapshot_id(&env)
    }

    pub fn admin(env: Env) -> Address {
        get_config(&env).admin
    }

    pub fn decimals(env: Env) -> u32 {
        get_config(&env).decimals
    }

    pub fn name(env: Env) -> String {
        get_config(&env).name
    }

    pub fn symbol(env: Env) -> String {
        get_config(&env).symbol
    }

    pub fn transferable(env: Env) -> bool {
        get_config(&env).transferable
    }
}

#[contractimpl]
impl AssetLedgerInterface for AssetLedger {
    fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        require_admin(&env, &minter)?;
        check_amount(amount)?;

        let supply = get_total_supply(&env);
        snapshot::record_supply(&env, supply);
        set_total_supply(&env, supply + amount);
        receive_balance(&env, &to, amount);

        env.events().publish((Symbol::new(&env, "mint"), to), amount);
        Ok(())
    }

    fn burn(env: Env, burner: Address, from: Address, amount: i128) -> Result<(), LedgerError> {
        require_admin(&env, &burner)?;
        check_amount(amount)?;

        spend_balance(&env, &from, amount)?;
        let supply = get_total_supply(&env);
        snapshot::record_supply(&env, supply);
        set_total_supply(&env, supply - amount);

        env.events().publish((Symbol::new(&env, "burn"), from), amount);
        Ok(())
    }

    fn snapshot(env: Env, caller: Address) -> Result<u32, LedgerError> {
        require_admin(&env, &caller)?;

        let id = get_snapshot_id(&env) + 1;
        set_snapshot_id(&env, id);

        env.events()
            .publish((Symbol::new(&env, "snapshot"),), (id, env.ledger().timestamp()));
        Ok(id)
    }

    fn balance(env: Env, id: Address) -> i128 {
        get_balance(&env, &id)
    }

    fn total_supply(env: Env) -> i128 {
        get_total_supply(&env)
    }

    fn balance_at(env: Env, id: Address, snapshot_id: u32) -> Result<i128, LedgerError> {
        check_snapshot_id(&env, snapshot_id)?;
        Ok(snapshot::balance_at(&env, &id, snapshot_id, get_balance(&env, &id)))
    }

    fn total_supply_at(env: Env, snapshot_id: u32) -> Result<i128, LedgerError> {
        check_snapshot_id(&env, snapshot_id)?;
        Ok(snapshot::supply_at(&env, snapshot_id, get_total_supply(&env)))
    }
}

fn require_admin(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    caller.require_auth();
    if *caller != get_config(env).admin {
        log!(env, "caller {} is not the ledger admin", caller.clone());
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

fn ensure_transferable(env: &Env) -> Result<(), LedgerError> {
    if !get_config(env).transferable {
        return Err(LedgerError::NotTransferable);
    }
    Ok(())
}

fn check_amount(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

fn check_snapshot_id(env: &Env, snapshot_id: u32) -> Result<(), LedgerError> {
    if snapshot_id == 0 || snapshot_id > get_snapshot_id(env) {
        return Err(LedgerError::SnapshotNotFound);
    }
    Ok(())
}

fn spend_balance(env: &Env, from: &Address, amount: i128) -> Result<(), LedgerError> {
    let balance = get_balance(env, from);
    if balance < amount {
        return Err(LedgerError::InsufficientBalance);
    }
    snapshot::record_balance(env, from, balance);
    set_balance(env, from, balance - amount);
    Ok(())
}

fn receive_balance(env: &Env, to: &Address, amount: i128) {
    let balance = get_balance(env, to);
    snapshot::record_balance(env, to, balance);
    set_balance(env, to, balance + amount);
}
