//! # Wallet Events
//!
//! One `#[contractevent]` struct per observable state change. The macro uses
//! the snake_case struct name as the leading topic (`funds_withdrawn`,
//! `request_created`, ...) and packs the fields into a map payload.
//!
//! Every state-changing entrypoint publishes its events in order, so an
//! off-chain observer replaying the stream sees exactly the sequence of
//! ledger, signer-set, threshold and request transitions.
use soroban_sdk::{contractevent, Address, Env};

use crate::requests::RequestType;

/// Emitted when an identity deposits value into the wallet.
#[contractevent]
#[derive(Clone, Debug)]
pub struct FundsDeposited {
    pub who: Address,
    pub amount: i128,
}

/// Emitted after a depositor's balance is debited and the value sent out.
#[contractevent]
#[derive(Clone, Debug)]
pub struct FundsWithdrawn {
    pub who: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SignerAdded {
    pub who: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SignerRemoved {
    pub who: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ThresholdIncreased {
    pub old: u32,
    pub new: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct ThresholdDecreased {
    pub old: u32,
    pub new: u32,
}

/// Emitted when a signer opens a new governance request.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RequestCreated {
    pub id: u64,
    pub request_type: RequestType,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RequestSigned {
    pub id: u64,
    pub signer: Address,
}

/// Emitted when a signer withdraws its signature from a pending request.
#[contractevent]
#[derive(Clone, Debug)]
pub struct RequestRevoked {
    pub id: u64,
    pub signer: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RequestExecuted {
    pub id: u64,
}

/// Emitted when an executed SendValue request transfers value out.
#[contractevent]
#[derive(Clone, Debug)]
pub struct ValueSent {
    pub to: Address,
    pub value: i128,
}

pub fn emit_funds_deposited(env: &Env, who: &Address, amount: i128) {
    FundsDeposited {
        who: who.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_funds_withdrawn(env: &Env, who: &Address, amount: i128) {
    FundsWithdrawn {
        who: who.clone(),
        amount,
    }
    .publish(env);
}

pub fn emit_signer_added(env: &Env, who: &Address) {
    SignerAdded { who: who.clone() }.publish(env);
}

pub fn emit_signer_removed(env: &Env, who: &Address) {
    SignerRemoved { who: who.clone() }.publish(env);
}

pub fn emit_threshold_increased(env: &Env, old: u32, new: u32) {
    ThresholdIncreased { old, new }.publish(env);
}

pub fn emit_threshold_decreased(env: &Env, old: u32, new: u32) {
    ThresholdDecreased { old, new }.publish(env);
}

pub fn emit_request_created(env: &Env, id: u64, request_type: RequestType) {
    RequestCreated { id, request_type }.publish(env);
}

pub fn emit_request_signed(env: &Env, id: u64, signer: &Address) {
    RequestSigned {
        id,
        signer: signer.clone(),
    }
    .publish(env);
}

pub fn emit_request_revoked(env: &Env, id: u64, signer: &Address) {
    RequestRevoked {
        id,
        signer: signer.clone(),
    }
    .publish(env);
}

pub fn emit_request_executed(env: &Env, id: u64) {
    RequestExecuted { id }.publish(env);
}

pub fn emit_value_sent(env: &Env, to: &Address, value: i128) {
    ValueSent {
        to: to.clone(),
        value,
    }
    .publish(env);
}
