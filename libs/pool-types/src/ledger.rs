use soroban_sdk::{contractclient, contracterror, contracttype, Address, Env, String};

/// Value of a balance (or of the total supply) as of a snapshot
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    pub snapshot_id: u32,
    pub value: i128,
}

/// Asset ledger metadata - immutable after initialization
#[contracttype]
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Only identity allowed to mint, burn and snapshot
    pub admin: Address,
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
    /// False for accounting credit, which only the admin moves
    pub transferable: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    NotTransferable = 7,
    SnapshotNotFound = 8,
}

/// Privileged and snapshot surface of an asset ledger, as consumed by the
/// pools that administer it.
#[contractclient(name = "AssetLedgerClient")]
pub trait AssetLedgerInterface {
    /// Mint `amount` to `to`; `minter` must be the admin
    fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), LedgerError>;

    /// Burn `amount` from `from`; `burner` must be the admin
    fn burn(env: Env, burner: Address, from: Address, amount: i128) -> Result<(), LedgerError>;

    /// Freeze current balances; returns the new snapshot id
    fn snapshot(env: Env, caller: Address) -> Result<u32, LedgerError>;

    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn balance_at(env: Env, id: Address, snapshot_id: u32) -> Result<i128, LedgerError>;

    fn total_supply_at(env: Env, snapshot_id: u32) -> Result<i128, LedgerError>;
}
