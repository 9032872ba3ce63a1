//! # Signer Registry
//!
//! The authoritative signer set and required-signature threshold.
//!
//! ## Invariants
//! - The owner is seeded at initialization and is never removed.
//! - `1 <= required_signatures <= signers.len()` after every mutation.
//!
//! The `ensure_*` checks run when a request is created and again when it is
//! executed, so a request that became invalid in between (for example a
//! removal racing another removal) fails at execution instead of breaking the
//! invariant. Mutators are crate-private; only the governance engine calls
//! them.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::events::{
    emit_signer_added, emit_signer_removed, emit_threshold_decreased, emit_threshold_increased,
};
use crate::storage::{load_config, load_signer_config, save_signer_config, SignerConfig};

/// Seed the registry with the owner as sole signer and a threshold of one.
pub(crate) fn initialize_signers(env: &Env, owner: &Address) {
    let mut signers = Vec::new(env);
    signers.push_back(owner.clone());
    save_signer_config(
        env,
        &SignerConfig {
            signers,
            required_signatures: 1,
        },
    );
}

pub fn is_signer(env: &Env, identity: &Address) -> Result<bool, WalletError> {
    let config = load_config(env)?;
    if *identity == config.owner {
        return Ok(true);
    }
    Ok(load_signer_config(env)?.signers.contains(identity))
}

/// Fails with `NotSigner` unless `identity` is in the signer set.
pub fn require_signer(env: &Env, identity: &Address) -> Result<(), WalletError> {
    if !is_signer(env, identity)? {
        return Err(WalletError::NotSigner);
    }
    Ok(())
}

pub fn signers(env: &Env) -> Result<Vec<Address>, WalletError> {
    Ok(load_signer_config(env)?.signers)
}

pub fn required_signatures(env: &Env) -> Result<u32, WalletError> {
    Ok(load_signer_config(env)?.required_signatures)
}

/// Removing `target` must leave at least `required_signatures` signers.
pub fn ensure_can_remove(env: &Env, target: &Address) -> Result<(), WalletError> {
    let owner = load_config(env)?.owner;
    if *target == owner {
        return Err(WalletError::OwnerNotRemovable);
    }
    let config = load_signer_config(env)?;
    if !config.signers.contains(target) {
        return Err(WalletError::UnknownSigner);
    }
    if config.signers.len() - 1 < config.required_signatures {
        return Err(WalletError::ThresholdAtCapacity);
    }
    Ok(())
}

pub fn ensure_can_increase(env: &Env) -> Result<(), WalletError> {
    let config = load_signer_config(env)?;
    if config.required_signatures >= config.signers.len() {
        return Err(WalletError::ThresholdAtCapacity);
    }
    Ok(())
}

pub fn ensure_can_decrease(env: &Env) -> Result<(), WalletError> {
    let config = load_signer_config(env)?;
    if config.required_signatures <= 1 {
        return Err(WalletError::ThresholdAtFloor);
    }
    Ok(())
}

/// Insert `identity`. Returns `false` without emitting if it already signs.
pub(crate) fn add_signer(env: &Env, identity: &Address) -> Result<bool, WalletError> {
    let mut config = load_signer_config(env)?;
    if config.signers.contains(identity) {
        return Ok(false);
    }
    config.signers.push_back(identity.clone());
    save_signer_config(env, &config);
    emit_signer_added(env, identity);
    Ok(true)
}

/// Remove `identity`. Returns `false` without emitting if it no longer signs.
pub(crate) fn remove_signer(env: &Env, identity: &Address) -> Result<bool, WalletError> {
    let mut config = load_signer_config(env)?;
    let index = match config.signers.first_index_of(identity) {
        Some(index) => index,
        None => return Ok(false),
    };
    ensure_can_remove(env, identity)?;

    config.signers.remove(index);
    save_signer_config(env, &config);
    emit_signer_removed(env, identity);
    Ok(true)
}

pub(crate) fn increase_threshold(env: &Env) -> Result<u32, WalletError> {
    ensure_can_increase(env)?;
    let mut config = load_signer_config(env)?;
    let old = config.required_signatures;
    let new = old.checked_add(1).ok_or(WalletError::Overflow)?;
    config.required_signatures = new;
    save_signer_config(env, &config);
    emit_threshold_increased(env, old, new);
    Ok(new)
}

pub(crate) fn decrease_threshold(env: &Env) -> Result<u32, WalletError> {
    ensure_can_decrease(env)?;
    let mut config = load_signer_config(env)?;
    let old = config.required_signatures;
    let new = old - 1;
    config.required_signatures = new;
    save_signer_config(env, &config);
    emit_threshold_decreased(env, old, new);
    Ok(new)
}
