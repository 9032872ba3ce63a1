//! # Governance Engine
//!
//! Implements the request → sign → execute flow that gates every privileged
//! change to the wallet:
//!
//! 1. A signer opens a request with one of the `*_request` functions. The
//!    type-specific preconditions are checked up front and the creator's call
//!    counts as the first signature.
//! 2. Other signers call [`sign`] (or [`revoke`] to take a signature back).
//! 3. Once the signature count meets the *current* threshold, anyone may call
//!    [`execute`].
//!
//! ## Safety Guarantees
//! - Only signers can create, sign or revoke.
//! - A signer appears at most once in a request's signatures.
//! - Execution re-validates its preconditions against live state, marks the
//!   request executed, and only then applies the effect, so a request runs at
//!   most once and a failed execution leaves it pending.
//! - The engine is the only caller of the registry mutators and of the
//!   ledger's outbound transfer.

use soroban_sdk::{log, Address, Bytes, Env};

use crate::errors::WalletError;
use crate::events::{
    emit_request_created, emit_request_executed, emit_request_revoked, emit_request_signed,
    emit_value_sent,
};
use crate::ledger;
use crate::reentrancy::ReentrancyGuard;
use crate::requests::{self, Request, RequestKind};
use crate::signers;

// ============================================================================
// Request creation
// ============================================================================

/// Propose adding `target` to the signer set.
///
/// Proposing an address that already signs is allowed; executing it is a
/// no-op.
pub fn add_signer_request(
    env: &Env,
    caller: Address,
    target: Address,
) -> Result<u64, WalletError> {
    authorize_signer(env, &caller)?;
    if target == env.current_contract_address() {
        return Err(WalletError::InvalidTarget);
    }
    open_request(env, &caller, RequestKind::AddSigner(target))
}

/// Propose removing `target` from the signer set.
///
/// # Errors
/// * `WalletError::OwnerNotRemovable` - target is the owner
/// * `WalletError::UnknownSigner` - target is not a signer
/// * `WalletError::ThresholdAtCapacity` - fewer signers than the threshold would remain
pub fn remove_signer_request(
    env: &Env,
    caller: Address,
    target: Address,
) -> Result<u64, WalletError> {
    authorize_signer(env, &caller)?;
    signers::ensure_can_remove(env, &target)?;
    open_request(env, &caller, RequestKind::RemoveSigner(target))
}

/// # Errors
/// * `WalletError::ThresholdAtCapacity` - threshold already equals the signer count
pub fn increase_threshold_request(env: &Env, caller: Address) -> Result<u64, WalletError> {
    authorize_signer(env, &caller)?;
    signers::ensure_can_increase(env)?;
    open_request(env, &caller, RequestKind::IncreaseThreshold)
}

/// # Errors
/// * `WalletError::ThresholdAtFloor` - threshold is already one
pub fn decrease_threshold_request(env: &Env, caller: Address) -> Result<u64, WalletError> {
    authorize_signer(env, &caller)?;
    signers::ensure_can_decrease(env)?;
    open_request(env, &caller, RequestKind::DecreaseThreshold)
}

/// Propose sending `amount` of the caller's deposited balance to `target`.
///
/// `payload` is stored with the request as an opaque memo. The balance is
/// checked at execution, not here.
///
/// # Errors
/// * `WalletError::InvalidAmount` - amount is zero or negative
/// * `WalletError::InvalidTarget` - target is the wallet itself
pub fn send_value_request(
    env: &Env,
    caller: Address,
    target: Address,
    amount: i128,
    payload: Bytes,
) -> Result<u64, WalletError> {
    authorize_signer(env, &caller)?;
    if amount <= 0 {
        return Err(WalletError::InvalidAmount);
    }
    if target == env.current_contract_address() {
        return Err(WalletError::InvalidTarget);
    }
    open_request(env, &caller, RequestKind::SendValue(target, amount, payload))
}

// ============================================================================
// Sign / Revoke
// ============================================================================

/// Add the caller's signature. Returns the new signature count.
pub fn sign(env: &Env, caller: Address, id: u64) -> Result<u32, WalletError> {
    authorize_signer(env, &caller)?;
    let count = requests::add_signature(env, id, &caller)?;
    emit_request_signed(env, id, &caller);
    log!(env, "sign request={} signer={} count={}", id, caller, count);
    Ok(count)
}

/// Take back the caller's signature from a pending request. Returns the new
/// signature count. The caller may sign the same request again later.
///
/// Only current signers may revoke, so a signer removed after signing can no
/// longer withdraw that signature; it keeps counting toward quorum.
pub fn revoke(env: &Env, caller: Address, id: u64) -> Result<u32, WalletError> {
    authorize_signer(env, &caller)?;
    let count = requests::remove_signature(env, id, &caller)?;
    emit_request_revoked(env, id, &caller);
    log!(env, "revoke request={} signer={} count={}", id, caller, count);
    Ok(count)
}

// ============================================================================
// Execute
// ============================================================================

/// Apply a fully signed request.
///
/// Any identity may execute; `caller` only attributes the call. Every recorded
/// signature counts, including those of signers removed since they signed.
///
/// # Errors
/// * `WalletError::UnknownRequest`
/// * `WalletError::AlreadyExecuted`
/// * `WalletError::NotFullySigned` - signatures below the current threshold
/// * any precondition error of the request's kind, re-checked against live state
pub fn execute(env: &Env, caller: Address, id: u64) -> Result<(), WalletError> {
    caller.require_auth();

    let request = requests::get(env, id)?;
    if request.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    if request.signatures.len() < signers::required_signatures(env)? {
        return Err(WalletError::NotFullySigned);
    }

    validate_effect(env, &request)?;
    requests::mark_executed(env, id)?;
    apply_effect(env, &request)?;

    emit_request_executed(env, id);
    log!(env, "execute request={} executor={}", id, caller);
    Ok(())
}

/// True when `execute(id)` would pass the quorum gate right now.
pub fn is_executable(env: &Env, id: u64) -> Result<bool, WalletError> {
    let request = requests::get(env, id)?;
    Ok(!request.executed && request.signatures.len() >= signers::required_signatures(env)?)
}

fn validate_effect(env: &Env, request: &Request) -> Result<(), WalletError> {
    match &request.kind {
        RequestKind::AddSigner(_) => Ok(()),
        RequestKind::RemoveSigner(target) => {
            if signers::is_signer(env, target)? {
                signers::ensure_can_remove(env, target)
            } else {
                Ok(())
            }
        }
        RequestKind::IncreaseThreshold => signers::ensure_can_increase(env),
        RequestKind::DecreaseThreshold => signers::ensure_can_decrease(env),
        RequestKind::SendValue(_, value, _) => {
            if *value > ledger::get_balance(env, &request.proposer) {
                return Err(WalletError::InsufficientBalance);
            }
            if ReentrancyGuard::is_locked(env) {
                return Err(WalletError::Reentrancy);
            }
            Ok(())
        }
    }
}

fn apply_effect(env: &Env, request: &Request) -> Result<(), WalletError> {
    match &request.kind {
        RequestKind::AddSigner(target) => {
            signers::add_signer(env, target)?;
        }
        RequestKind::RemoveSigner(target) => {
            signers::remove_signer(env, target)?;
        }
        RequestKind::IncreaseThreshold => {
            signers::increase_threshold(env)?;
        }
        RequestKind::DecreaseThreshold => {
            signers::decrease_threshold(env)?;
        }
        RequestKind::SendValue(to, value, _) => {
            ledger::send_from_balance(env, &request.proposer, to, *value)?;
            emit_value_sent(env, to, *value);
        }
    }
    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

fn authorize_signer(env: &Env, caller: &Address) -> Result<(), WalletError> {
    caller.require_auth();
    signers::require_signer(env, caller)
}

/// Allocate the request and record the creator's implicit signature.
fn open_request(env: &Env, proposer: &Address, kind: RequestKind) -> Result<u64, WalletError> {
    let request_type = kind.request_type();
    let id = requests::allocate(env, kind, proposer)?;
    emit_request_created(env, id, request_type);

    requests::add_signature(env, id, proposer)?;
    emit_request_signed(env, id, proposer);

    log!(env, "request created id={} proposer={}", id, proposer);
    Ok(id)
}
