//! # Multi-Signature Wallet Contract
//!
//! A custodial wallet that holds one token on behalf of many depositors and
//! gates every privileged change behind a signer quorum.
//!
//! - **Ledger**: any identity may deposit; depositors withdraw their own
//!   balance at any time.
//! - **Signer registry**: the owner is a permanent signer; further signers
//!   and the required-signature threshold change only through executed
//!   requests.
//! - **Requests**: signers propose signer additions/removals, threshold
//!   changes and outbound transfers; each needs `required_signatures`
//!   distinct signatures before anyone can execute it, and executes once.
//!
//! Every entrypoint is atomic: it either applies all of its storage writes
//! and events or fails with a [`WalletError`] and changes nothing.

#![no_std]
#![allow(deprecated)]

use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Vec};

mod errors;
mod events;
mod governance;
mod ledger;
mod reentrancy;
mod requests;
mod signers;
mod storage;

pub use errors::{ErrorKind, WalletError};
pub use requests::{Request, RequestKind, RequestType};

use storage::{is_initialized, load_config, save_config, WalletConfig};

#[cfg(test)]
mod tests;

#[contract]
pub struct MultiSigWallet;

#[contractimpl]
impl MultiSigWallet {
    /// Initialize the wallet
    ///
    /// Records the owner and the token the wallet holds. The owner becomes
    /// the only signer and the threshold starts at one.
    ///
    /// # Arguments
    /// * `owner` - The permanent signer (must authorize)
    /// * `token` - The token contract whose value the wallet custodies
    ///
    /// # Errors
    /// - `AlreadyInitialized` - Wallet was initialized before
    /// - `InvalidTarget` - Token is the wallet itself
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), WalletError> {
        if is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }
        owner.require_auth();
        if token == env.current_contract_address() {
            return Err(WalletError::InvalidTarget);
        }

        save_config(
            &env,
            &WalletConfig {
                owner: owner.clone(),
                token,
            },
        );
        signers::initialize_signers(&env, &owner);
        Ok(())
    }

    // ── Ledger ────────────────────────────────────────────────────────────────

    /// Deposit tokens and credit the caller's balance
    ///
    /// # Returns
    /// The caller's balance after the deposit
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    pub fn deposit(env: Env, caller: Address, amount: i128) -> Result<i128, WalletError> {
        ledger::deposit(&env, caller, amount)
    }

    /// Withdraw part of the caller's balance
    ///
    /// # Returns
    /// The caller's remaining balance
    ///
    /// # Errors
    /// - `InvalidAmount` - Amount is zero or negative
    /// - `InsufficientBalance` - Amount exceeds the caller's balance
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<i128, WalletError> {
        ledger::withdraw(&env, caller, amount)
    }

    /// Withdraw the caller's entire balance
    ///
    /// # Returns
    /// The amount withdrawn
    ///
    /// # Errors
    /// - `NoBalance` - Caller has nothing deposited
    pub fn withdraw_all(env: Env, caller: Address) -> Result<i128, WalletError> {
        ledger::withdraw_all(&env, caller)
    }

    pub fn get_balance(env: Env, who: Address) -> i128 {
        ledger::get_balance(&env, &who)
    }

    /// Sum of all depositor balances
    pub fn total_deposits(env: Env) -> i128 {
        ledger::total_deposits(&env)
    }

    /// Tokens held at the wallet address
    pub fn total_held(env: Env) -> Result<i128, WalletError> {
        ledger::total_held(&env)
    }

    // ── Governance requests ───────────────────────────────────────────────────

    /// Propose adding a signer (signers only)
    ///
    /// # Returns
    /// The new request id
    pub fn add_signer_request(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<u64, WalletError> {
        governance::add_signer_request(&env, caller, target)
    }

    /// Propose removing a signer (signers only)
    ///
    /// # Errors
    /// - `OwnerNotRemovable` - Target is the owner
    /// - `UnknownSigner` - Target is not a signer
    /// - `ThresholdAtCapacity` - Removal would leave fewer signers than the threshold
    pub fn remove_signer_request(
        env: Env,
        caller: Address,
        target: Address,
    ) -> Result<u64, WalletError> {
        governance::remove_signer_request(&env, caller, target)
    }

    /// Propose raising the threshold by one (signers only)
    ///
    /// # Errors
    /// - `ThresholdAtCapacity` - Threshold already equals the signer count
    pub fn increase_threshold_request(env: Env, caller: Address) -> Result<u64, WalletError> {
        governance::increase_threshold_request(&env, caller)
    }

    /// Propose lowering the threshold by one (signers only)
    ///
    /// # Errors
    /// - `ThresholdAtFloor` - Threshold is already one
    pub fn decrease_threshold_request(env: Env, caller: Address) -> Result<u64, WalletError> {
        governance::decrease_threshold_request(&env, caller)
    }

    /// Propose sending part of the caller's balance to `target` (signers only)
    ///
    /// # Arguments
    /// * `caller` - The proposing signer; its balance funds the transfer
    /// * `target` - Recipient
    /// * `amount` - Amount to send
    /// * `payload` - Opaque memo stored with the request
    pub fn send_value_request(
        env: Env,
        caller: Address,
        target: Address,
        amount: i128,
        payload: Bytes,
    ) -> Result<u64, WalletError> {
        governance::send_value_request(&env, caller, target, amount, payload)
    }

    /// Sign a pending request (signers only)
    ///
    /// # Returns
    /// The request's signature count
    ///
    /// # Errors
    /// - `UnknownRequest` - No such request
    /// - `AlreadyExecuted` - Request was executed
    /// - `DuplicateSignature` - Caller already signed
    pub fn sign(env: Env, caller: Address, id: u64) -> Result<u32, WalletError> {
        governance::sign(&env, caller, id)
    }

    /// Withdraw the caller's signature from a pending request (signers only)
    ///
    /// # Errors
    /// - `SignatureNotFound` - Caller has not signed the request
    pub fn revoke(env: Env, caller: Address, id: u64) -> Result<u32, WalletError> {
        governance::revoke(&env, caller, id)
    }

    /// Execute a request that has reached quorum (anyone)
    ///
    /// # Errors
    /// - `NotFullySigned` - Fewer signatures than the current threshold
    /// - `AlreadyExecuted` - Request was executed
    pub fn execute(env: Env, caller: Address, id: u64) -> Result<(), WalletError> {
        governance::execute(&env, caller, id)
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn owner(env: Env) -> Result<Address, WalletError> {
        Ok(load_config(&env)?.owner)
    }

    pub fn token(env: Env) -> Result<Address, WalletError> {
        Ok(load_config(&env)?.token)
    }

    pub fn is_signer(env: Env, identity: Address) -> Result<bool, WalletError> {
        signers::is_signer(&env, &identity)
    }

    pub fn signers(env: Env) -> Result<Vec<Address>, WalletError> {
        signers::signers(&env)
    }

    pub fn required_signatures(env: Env) -> Result<u32, WalletError> {
        signers::required_signatures(&env)
    }

    pub fn get_request(env: Env, id: u64) -> Result<Request, WalletError> {
        requests::get(&env, id)
    }

    /// Number of requests created so far
    pub fn request_count(env: Env) -> u64 {
        requests::count(&env)
    }

    pub fn signature_count(env: Env, id: u64) -> Result<u32, WalletError> {
        requests::signature_count(&env, id)
    }

    /// Whether the request currently meets the threshold and is pending
    pub fn is_executable(env: Env, id: u64) -> Result<bool, WalletError> {
        governance::is_executable(&env, id)
    }
}
