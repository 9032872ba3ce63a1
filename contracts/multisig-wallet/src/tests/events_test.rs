/// # Wallet Events – Tests
///
/// Each state-changing entrypoint is driven through the client and the
/// payload of the event it published is decoded into a mirror type.
use super::test_helpers::{
    events_named, funded_depositor, last_event, mint, setup, setup_with_signers,
};
use crate::events::{emit_threshold_decreased, emit_value_sent};
use crate::RequestType;

use soroban_sdk::{
    contracttype,
    testutils::{Address as _, Events},
    Address, Bytes, Env, TryFromVal,
};

// ─────────────────────────────────────────────────────────────────────────────
// Test Types (mirroring event structures for decoding)
// ─────────────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestFundsEvent {
    pub who: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestSignerEvent {
    pub who: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestThresholdEvent {
    pub old: u32,
    pub new: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestRequestCreated {
    pub id: u64,
    pub request_type: RequestType,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestRequestSignature {
    pub id: u64,
    pub signer: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestRequestExecuted {
    pub id: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TestValueSent {
    pub to: Address,
    pub value: i128,
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper-level tests via env.as_contract()
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_value_sent_event_structure() {
    let env = Env::default();
    let to = Address::generate(&env);
    let contract_id = env.register(crate::MultiSigWallet, ());
    env.as_contract(&contract_id, || {
        emit_value_sent(&env, &to, 900);

        let all = env.events().all();
        assert_eq!(all.len(), 1, "Expected exactly 1 event");
        let (_c, _t, data) = all.get_unchecked(0);
        let decoded = TestValueSent::try_from_val(&env, &data).expect("decode ValueSent");
        assert_eq!(decoded.to, to);
        assert_eq!(decoded.value, 900);
    });
}

#[test]
fn test_threshold_decreased_event_structure() {
    let env = Env::default();
    let contract_id = env.register(crate::MultiSigWallet, ());
    env.as_contract(&contract_id, || {
        emit_threshold_decreased(&env, 3, 2);

        let all = env.events().all();
        assert_eq!(all.len(), 1);
        let (_c, _t, data) = all.get_unchecked(0);
        let decoded =
            TestThresholdEvent::try_from_val(&env, &data).expect("decode ThresholdDecreased");
        assert_eq!(decoded.old, 3);
        assert_eq!(decoded.new, 2);
    });
}

// ─────────────────────────────────────────────────────────────────────────────
// Ledger events
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_deposit_emits_funds_deposited() {
    let (env, client, _owner, token) = setup();
    let user = Address::generate(&env);
    mint(&env, &token, &user, 1_000);

    client.deposit(&user, &600);

    let event: TestFundsEvent = last_event(&env, &client.address, "funds_deposited");
    assert_eq!(event.who, user);
    assert_eq!(event.amount, 600);
}

#[test]
fn test_withdraw_emits_funds_withdrawn() {
    let (env, client, _owner, token) = setup();
    let user = funded_depositor(&env, &client, &token, 1_000);

    client.withdraw(&user, &250);

    let event: TestFundsEvent = last_event(&env, &client.address, "funds_withdrawn");
    assert_eq!(event.who, user);
    assert_eq!(event.amount, 250);
}

#[test]
fn test_withdraw_all_emits_full_amount() {
    let (env, client, _owner, token) = setup();
    let user = funded_depositor(&env, &client, &token, 1_234);

    client.withdraw_all(&user);

    let event: TestFundsEvent = last_event(&env, &client.address, "funds_withdrawn");
    assert_eq!(event.amount, 1_234);
}

// ─────────────────────────────────────────────────────────────────────────────
// Request lifecycle events
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_request_creation_emits_created_then_signed() {
    let (env, client, owner, _token) = setup();
    let candidate = Address::generate(&env);

    let id = client.add_signer_request(&owner, &candidate);

    let created: TestRequestCreated = last_event(&env, &client.address, "request_created");
    assert_eq!(created.id, id);
    assert_eq!(created.request_type, RequestType::AddSigner);

    let signed: TestRequestSignature = last_event(&env, &client.address, "request_signed");
    assert_eq!(signed.id, id);
    assert_eq!(signed.signer, owner);
}

#[test]
fn test_sign_and_revoke_events() {
    let (env, client, signers, _token) = setup_with_signers(3, 2);
    let owner = signers.get_unchecked(0);
    let second = signers.get_unchecked(1);

    let id = client.decrease_threshold_request(&owner);
    client.sign(&second, &id);
    let signed: TestRequestSignature = last_event(&env, &client.address, "request_signed");
    assert_eq!(signed.id, id);
    assert_eq!(signed.signer, second);

    client.revoke(&second, &id);
    let revoked: TestRequestSignature = last_event(&env, &client.address, "request_revoked");
    assert_eq!(revoked.id, id);
    assert_eq!(revoked.signer, second);
}

#[test]
fn test_add_signer_execution_events() {
    let (env, client, owner, _token) = setup();
    let candidate = Address::generate(&env);

    let id = client.add_signer_request(&owner, &candidate);
    client.execute(&owner, &id);

    let added: TestSignerEvent = last_event(&env, &client.address, "signer_added");
    assert_eq!(added.who, candidate);
    let executed: TestRequestExecuted = last_event(&env, &client.address, "request_executed");
    assert_eq!(executed.id, id);
}

#[test]
fn test_remove_signer_execution_event() {
    let (env, client, signers, _token) = setup_with_signers(2, 1);
    let owner = signers.get_unchecked(0);
    let second = signers.get_unchecked(1);

    let id = client.remove_signer_request(&owner, &second);
    client.execute(&owner, &id);

    let removed: TestSignerEvent = last_event(&env, &client.address, "signer_removed");
    assert_eq!(removed.who, second);
}

#[test]
fn test_threshold_events_carry_old_and_new() {
    let (env, client, signers, _token) = setup_with_signers(2, 1);
    let owner = signers.get_unchecked(0);
    let second = signers.get_unchecked(1);

    let id = client.increase_threshold_request(&owner);
    client.execute(&owner, &id);
    let raised: TestThresholdEvent = last_event(&env, &client.address, "threshold_increased");
    assert_eq!((raised.old, raised.new), (1, 2));

    let id = client.decrease_threshold_request(&owner);
    client.sign(&second, &id);
    client.execute(&second, &id);
    let lowered: TestThresholdEvent = last_event(&env, &client.address, "threshold_decreased");
    assert_eq!((lowered.old, lowered.new), (2, 1));
}

#[test]
fn test_send_value_execution_events() {
    let (env, client, owner, token) = setup();
    mint(&env, &token, &owner, 5_000);
    client.deposit(&owner, &5_000);
    let recipient = Address::generate(&env);

    let id = client.send_value_request(&owner, &recipient, &1_500, &Bytes::new(&env));
    let created: TestRequestCreated = last_event(&env, &client.address, "request_created");
    assert_eq!(created.request_type, RequestType::SendValue);

    client.execute(&owner, &id);
    let sent: TestValueSent = last_event(&env, &client.address, "value_sent");
    assert_eq!(sent.to, recipient);
    assert_eq!(sent.value, 1_500);
    let executed: TestRequestExecuted = last_event(&env, &client.address, "request_executed");
    assert_eq!(executed.id, id);
}

#[test]
fn test_idempotent_add_emits_no_signer_added() {
    let (env, client, owner, _token) = setup();

    let id = client.add_signer_request(&owner, &owner);
    client.execute(&owner, &id);

    assert_eq!(events_named(&env, &client.address, "signer_added").len(), 0);
    let executed: TestRequestExecuted = last_event(&env, &client.address, "request_executed");
    assert_eq!(executed.id, id);
}
