//! # Request Store
//!
//! Append-only, id-indexed record of governance requests and the signatures
//! they accumulated. Ids start at 0 and follow creation order. Records are
//! never deleted and are never written again once executed.
//!
//! The store does no authorization of its own; the governance engine
//! authorizes every call before it reaches here.

use soroban_sdk::{contracttype, Address, Bytes, Env, Vec};

use crate::errors::WalletError;
use crate::storage::DataKey;

/// Discriminant of [`RequestKind`], carried in `RequestCreated` events.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RequestType {
    AddSigner = 0,
    RemoveSigner = 1,
    IncreaseThreshold = 2,
    DecreaseThreshold = 3,
    SendValue = 4,
}

/// The action a request performs once executed.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum RequestKind {
    /// Add the address to the signer set
    AddSigner(Address),
    /// Remove the address from the signer set
    RemoveSigner(Address),
    IncreaseThreshold,
    DecreaseThreshold,
    /// Send (to, value, payload) out of the proposer's balance
    SendValue(Address, i128, Bytes),
}

impl RequestKind {
    pub fn request_type(&self) -> RequestType {
        match self {
            RequestKind::AddSigner(_) => RequestType::AddSigner,
            RequestKind::RemoveSigner(_) => RequestType::RemoveSigner,
            RequestKind::IncreaseThreshold => RequestType::IncreaseThreshold,
            RequestKind::DecreaseThreshold => RequestType::DecreaseThreshold,
            RequestKind::SendValue(..) => RequestType::SendValue,
        }
    }

    pub fn target(&self) -> Option<Address> {
        match self {
            RequestKind::AddSigner(target)
            | RequestKind::RemoveSigner(target)
            | RequestKind::SendValue(target, _, _) => Some(target.clone()),
            RequestKind::IncreaseThreshold | RequestKind::DecreaseThreshold => None,
        }
    }

    pub fn value(&self) -> Option<i128> {
        match self {
            RequestKind::SendValue(_, value, _) => Some(*value),
            _ => None,
        }
    }

    pub fn payload(&self) -> Option<Bytes> {
        match self {
            RequestKind::SendValue(_, _, payload) => Some(payload.clone()),
            _ => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub id: u64,
    pub kind: RequestKind,
    /// Signer that created the request
    pub proposer: Address,
    /// Distinct signers, in signing order
    pub signatures: Vec<Address>,
    pub executed: bool,
    pub created_at: u64,
    /// Ledger timestamp of execution; 0 while pending
    pub executed_at: u64,
}

/// Create a pending request with the next id.
pub(crate) fn allocate(
    env: &Env,
    kind: RequestKind,
    proposer: &Address,
) -> Result<u64, WalletError> {
    let id = count(env);
    let next = id.checked_add(1).ok_or(WalletError::Overflow)?;

    let request = Request {
        id,
        kind,
        proposer: proposer.clone(),
        signatures: Vec::new(env),
        executed: false,
        created_at: env.ledger().timestamp(),
        executed_at: 0,
    };
    save(env, &request);
    env.storage().instance().set(&DataKey::NextRequestId, &next);

    Ok(id)
}

/// Record `signer`'s signature. Returns the new signature count.
///
/// # Errors
/// * `WalletError::UnknownRequest`
/// * `WalletError::AlreadyExecuted`
/// * `WalletError::DuplicateSignature`
pub(crate) fn add_signature(env: &Env, id: u64, signer: &Address) -> Result<u32, WalletError> {
    let mut request = load_pending(env, id)?;
    if request.signatures.contains(signer) {
        return Err(WalletError::DuplicateSignature);
    }
    request.signatures.push_back(signer.clone());
    save(env, &request);
    Ok(request.signatures.len())
}

/// Withdraw `signer`'s signature. Returns the new signature count.
///
/// # Errors
/// * `WalletError::UnknownRequest`
/// * `WalletError::AlreadyExecuted`
/// * `WalletError::SignatureNotFound`
pub(crate) fn remove_signature(env: &Env, id: u64, signer: &Address) -> Result<u32, WalletError> {
    let mut request = load_pending(env, id)?;
    let index = request
        .signatures
        .first_index_of(signer)
        .ok_or(WalletError::SignatureNotFound)?;
    request.signatures.remove(index);
    save(env, &request);
    Ok(request.signatures.len())
}

/// Flip a pending request to executed.
///
/// # Errors
/// * `WalletError::UnknownRequest`
/// * `WalletError::AlreadyExecuted`
pub(crate) fn mark_executed(env: &Env, id: u64) -> Result<(), WalletError> {
    let mut request = load_pending(env, id)?;
    request.executed = true;
    request.executed_at = env.ledger().timestamp();
    save(env, &request);
    Ok(())
}

pub fn get(env: &Env, id: u64) -> Result<Request, WalletError> {
    env.storage()
        .persistent()
        .get(&DataKey::Request(id))
        .ok_or(WalletError::UnknownRequest)
}

/// Number of requests ever created; also the next id.
pub fn count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::NextRequestId)
        .unwrap_or(0)
}

pub fn signature_count(env: &Env, id: u64) -> Result<u32, WalletError> {
    Ok(get(env, id)?.signatures.len())
}

fn load_pending(env: &Env, id: u64) -> Result<Request, WalletError> {
    let request = get(env, id)?;
    if request.executed {
        return Err(WalletError::AlreadyExecuted);
    }
    Ok(request)
}

fn save(env: &Env, request: &Request) {
    env.storage()
        .persistent()
        .set(&DataKey::Request(request.id), request);
}
