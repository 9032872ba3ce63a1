//! # Ledger
//!
//! Per-depositor balance accounting for the wallet's token.
//!
//! Every balance is backed by tokens held at the contract address, so
//! `total_deposits() <= total_held()` holds in every reachable state.
//! Outbound transfers always happen after the balance has been debited and
//! while the wallet-wide [`ReentrancyGuard`] is held.

use soroban_sdk::{log, token, Address, Env};

use crate::errors::WalletError;
use crate::events::{emit_funds_deposited, emit_funds_withdrawn};
use crate::reentrancy::ReentrancyGuard;
use crate::storage::{load_config, DataKey};

/// Deposit `amount` tokens from `caller` and credit its balance.
///
/// Any identity may deposit.
///
/// # Returns
/// The caller's balance after the deposit.
///
/// # Errors
/// * `WalletError::InvalidAmount` - amount is zero or negative
/// * `WalletError::Overflow` - balance or total would overflow
pub fn deposit(env: &Env, caller: Address, amount: i128) -> Result<i128, WalletError> {
    caller.require_auth();
    let config = load_config(env)?;

    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }

    let new_balance = get_balance(env, &caller)
        .checked_add(amount)
        .ok_or(WalletError::Overflow)?;
    let new_total = total_deposits(env)
        .checked_add(amount)
        .ok_or(WalletError::Overflow)?;

    set_balance(env, &caller, new_balance);
    set_total_deposits(env, new_total);

    // Credit first; a failed transfer aborts the invocation and rolls it back.
    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(&caller, &env.current_contract_address(), &amount);

    emit_funds_deposited(env, &caller, amount);
    log!(env, "deposit {} amount={} balance={}", caller, amount, new_balance);

    Ok(new_balance)
}

/// Withdraw `amount` of the caller's own balance.
///
/// # Returns
/// The caller's remaining balance.
///
/// # Errors
/// * `WalletError::InvalidAmount` - amount is zero or negative
/// * `WalletError::InsufficientBalance` - amount exceeds the caller's balance
/// * `WalletError::Reentrancy` - called while another withdrawal is in flight
pub fn withdraw(env: &Env, caller: Address, amount: i128) -> Result<i128, WalletError> {
    caller.require_auth();
    load_config(env)?;

    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }

    settle_withdrawal(env, &caller, amount)
}

/// Withdraw the caller's entire balance.
///
/// # Returns
/// The amount withdrawn.
///
/// # Errors
/// * `WalletError::NoBalance` - the caller's balance is zero
pub fn withdraw_all(env: &Env, caller: Address) -> Result<i128, WalletError> {
    caller.require_auth();
    load_config(env)?;

    let balance = get_balance(env, &caller);
    if balance == 0 {
        return Err(WalletError::NoBalance);
    }

    settle_withdrawal(env, &caller, balance)?;
    Ok(balance)
}

fn settle_withdrawal(env: &Env, caller: &Address, amount: i128) -> Result<i128, WalletError> {
    let remaining = send_from_balance(env, caller, caller, amount)?;
    emit_funds_withdrawn(env, caller, amount);
    log!(env, "withdraw {} amount={} remaining={}", caller, amount, remaining);
    Ok(remaining)
}

/// Debit `from` and transfer `amount` tokens to `to`.
///
/// Shared by depositor withdrawals and executed SendValue requests. Fails
/// with `Reentrancy` if another outbound transfer is in flight.
pub(crate) fn send_from_balance(
    env: &Env,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<i128, WalletError> {
    let config = load_config(env)?;

    let balance = get_balance(env, from);
    if amount > balance {
        return Err(WalletError::InsufficientBalance);
    }
    let remaining = balance
        .checked_sub(amount)
        .ok_or(WalletError::Overflow)?;
    let new_total = total_deposits(env)
        .checked_sub(amount)
        .ok_or(WalletError::Overflow)?;

    let _guard = ReentrancyGuard::new(env)?;

    // Ledger first, then the external transfer.
    set_balance(env, from, remaining);
    set_total_deposits(env, new_total);

    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), to, &amount);

    Ok(remaining)
}

pub fn get_balance(env: &Env, who: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(who.clone()))
        .unwrap_or(0)
}

/// Sum of all deposited balances.
pub fn total_deposits(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalDeposits)
        .unwrap_or(0)
}

/// Tokens actually held at the wallet address.
pub fn total_held(env: &Env) -> Result<i128, WalletError> {
    let config = load_config(env)?;
    let token_client = token::Client::new(env, &config.token);
    Ok(token_client.balance(&env.current_contract_address()))
}

fn set_balance(env: &Env, who: &Address, amount: i128) {
    let key = DataKey::Balance(who.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
    }
}

fn set_total_deposits(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalDeposits, &amount);
}
