extern crate std;

use super::*;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{Env, IntoVal, TryIntoVal};

fn setup() -> (Env, MedicalRecordsContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    (env, client)
}

fn register_pair(env: &Env, client: &MedicalRecordsContractClient) -> (Address, Address) {
    let alice = Address::generate(env);
    client.register_patient(&alice, &String::from_str(env, "Alice"), &30);
    let bob = Address::generate(env);
    client.register_doctor(&bob, &String::from_str(env, "Bob"), &40);
    (alice, bob)
}

#[test]
fn grant_updates_both_rosters() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);

    assert!(!client.has_access(&alice, &bob));

    client.grant_access(&alice, &bob);
    let events = env.events().all();

    assert!(client.has_access(&alice, &bob));
    assert_eq!(client.get_patient(&alice).access_list.get(0).unwrap(), bob);
    assert_eq!(
        client.get_doctor(&bob).patient_access_list.get(0).unwrap(),
        alice
    );

    assert!(!events.is_empty());
    let event = events.get(events.len() - 1).unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("ACC_GRT"), alice.clone(), bob.clone()).into_val(&env)
    );
    let payload: events::AccessGrantedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.patient, alice);
    assert_eq!(payload.doctor, bob);
}

#[test]
fn grant_requires_registered_parties() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_grant_access(&alice, &stranger),
        Err(Ok(ContractError::DoctorNotFound))
    );
    assert_eq!(
        client.try_grant_access(&stranger, &bob),
        Err(Ok(ContractError::PatientNotFound))
    );
}

#[test]
fn regrant_is_a_noop() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);

    client.grant_access(&alice, &bob);
    client.grant_access(&alice, &bob);

    assert_eq!(client.get_patient(&alice).access_list.len(), 1);
    assert_eq!(client.get_doctor(&bob).patient_access_list.len(), 1);
}

#[test]
fn revoke_from_patient_side() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);

    client.grant_access(&alice, &bob);
    client.revoke_access(&alice, &bob);
    let events = env.events().all();

    assert!(!client.has_access(&alice, &bob));
    assert!(client.get_patient(&alice).access_list.is_empty());
    assert!(client.get_doctor(&bob).patient_access_list.is_empty());

    let event = events.get(events.len() - 1).unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("ACC_REV"), alice.clone(), bob.clone()).into_val(&env)
    );
    let payload: events::AccessRevokedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.revoked_by, alice);
}

#[test]
fn revoke_from_doctor_side() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);

    client.grant_access(&alice, &bob);
    // The doctor removes themselves from the patient's roster.
    client.revoke_access(&bob, &alice);
    let events = env.events().all();

    assert!(!client.has_access(&alice, &bob));
    assert!(client.get_doctor(&bob).patient_access_list.is_empty());

    let event = events.get(events.len() - 1).unwrap();
    let payload: events::AccessRevokedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.patient, alice);
    assert_eq!(payload.doctor, bob);
    assert_eq!(payload.revoked_by, bob);
}

#[test]
fn revoke_without_grant_is_a_noop() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);

    client.revoke_access(&alice, &bob);

    assert!(!client.has_access(&alice, &bob));
    assert!(client.get_patient(&alice).access_list.is_empty());
}

#[test]
fn revoke_with_unknown_counterparty_errors() {
    let (env, client) = setup();
    let (alice, _bob) = register_pair(&env, &client);
    let stranger = Address::generate(&env);

    assert_eq!(
        client.try_revoke_access(&alice, &stranger),
        Err(Ok(ContractError::DoctorNotFound))
    );
    assert_eq!(
        client.try_revoke_access(&stranger, &alice),
        Err(Ok(ContractError::PatientNotFound))
    );
}

#[test]
fn grants_are_pairwise_independent() {
    let (env, client) = setup();
    let (alice, bob) = register_pair(&env, &client);
    let carol = Address::generate(&env);
    client.register_doctor(&carol, &String::from_str(&env, "Carol"), &50);

    client.grant_access(&alice, &bob);
    client.grant_access(&alice, &carol);
    client.revoke_access(&alice, &bob);

    assert!(!client.has_access(&alice, &bob));
    assert!(client.has_access(&alice, &carol));
    assert_eq!(client.get_patient(&alice).access_list.get(0).unwrap(), carol);
}
