use soroban_sdk::{contractclient, Address, Env};

/// Callback interface a flash loan receiver must expose.
///
/// The lender invokes it after transferring `amount` of `token` to the
/// receiver; the receiver has to hand the funds back to the lender before
/// returning.
#[contractclient(name = "FlashLoanReceiverClient")]
pub trait FlashLoanReceiver {
    fn execute_flash_loan(env: Env, initiator: Address, token: Address, amount: i128);
}
