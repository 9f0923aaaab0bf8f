extern crate std;

use super::*;
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{Env, IntoVal, TryIntoVal};

const REPORTED_AT: &str = "1,702,857,600,000";

fn setup() -> (Env, MedicalRecordsContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    (env, client)
}

/// Registers Alice (patient) and Bob (doctor) and grants Bob access.
fn setup_granted_pair(env: &Env, client: &MedicalRecordsContractClient) -> (Address, Address) {
    let alice = Address::generate(env);
    client.register_patient(&alice, &String::from_str(env, "Alice"), &30);
    let bob = Address::generate(env);
    client.register_doctor(&bob, &String::from_str(env, "Bob"), &40);
    client.grant_access(&alice, &bob);
    (alice, bob)
}

fn generate(env: &Env, client: &MedicalRecordsContractClient, alice: &Address, bob: &Address) {
    client.generate_report(
        bob,
        alice,
        &String::from_str(env, "Alice"),
        &String::from_str(env, "Bob"),
        &String::from_str(env, "Flu, rest advised"),
        &String::from_str(env, REPORTED_AT),
    );
}

#[test]
fn generate_and_fetch_round_trip() {
    let (env, client) = setup();
    env.ledger().with_mut(|l| l.timestamp = 1_702_857_600);
    let (alice, bob) = setup_granted_pair(&env, &client);

    generate(&env, &client, &alice, &bob);

    // Both parties fetch with their own address first.
    let seen_by_doctor = client.get_report(&bob, &alice);
    let seen_by_patient = client.get_report(&alice, &bob);
    assert_eq!(seen_by_doctor, seen_by_patient);

    assert_eq!(seen_by_doctor.patient, alice);
    assert_eq!(seen_by_doctor.doctor, bob);
    assert_eq!(seen_by_doctor.patient_name, String::from_str(&env, "Alice"));
    assert_eq!(seen_by_doctor.doctor_name, String::from_str(&env, "Bob"));
    assert_eq!(
        seen_by_doctor.body,
        String::from_str(&env, "Flu, rest advised")
    );
    assert_eq!(
        seen_by_doctor.reported_at,
        String::from_str(&env, REPORTED_AT)
    );
    assert_eq!(seen_by_doctor.created_at, 1_702_857_600);
}

#[test]
fn report_publishes_event() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);

    generate(&env, &client, &alice, &bob);

    let events = env.events().all();
    assert!(!events.is_empty());
    let event = events.get(events.len() - 1).unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("REP_GEN"), alice.clone(), bob.clone()).into_val(&env)
    );
    let payload: events::ReportGeneratedEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.patient, alice);
    assert_eq!(payload.doctor, bob);
}

#[test]
fn report_requires_grant() {
    let (env, client) = setup();
    let alice = Address::generate(&env);
    client.register_patient(&alice, &String::from_str(&env, "Alice"), &30);
    let bob = Address::generate(&env);
    client.register_doctor(&bob, &String::from_str(&env, "Bob"), &40);

    assert_eq!(
        client.try_generate_report(
            &bob,
            &alice,
            &String::from_str(&env, "Alice"),
            &String::from_str(&env, "Bob"),
            &String::from_str(&env, "Flu, rest advised"),
            &String::from_str(&env, REPORTED_AT),
        ),
        Err(Ok(ContractError::AccessNotGranted))
    );
}

#[test]
fn one_report_per_pair() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);

    generate(&env, &client, &alice, &bob);

    assert_eq!(
        client.try_generate_report(
            &bob,
            &alice,
            &String::from_str(&env, "Alice"),
            &String::from_str(&env, "Bob"),
            &String::from_str(&env, "Second opinion"),
            &String::from_str(&env, REPORTED_AT),
        ),
        Err(Ok(ContractError::ReportAlreadyExists))
    );

    // The original is untouched.
    let report = client.get_report(&bob, &alice);
    assert_eq!(report.body, String::from_str(&env, "Flu, rest advised"));
}

#[test]
fn report_validates_inputs() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);

    assert_eq!(
        client.try_generate_report(
            &bob,
            &alice,
            &String::from_str(&env, "Alice"),
            &String::from_str(&env, "Bob"),
            &String::from_str(&env, "x"),
            &String::from_str(&env, REPORTED_AT),
        ),
        Err(Ok(ContractError::InvalidReport))
    );
    assert_eq!(
        client.try_generate_report(
            &bob,
            &alice,
            &String::from_str(&env, "Alice"),
            &String::from_str(&env, "Bob"),
            &String::from_str(&env, "Flu, rest advised"),
            &String::from_str(&env, "12/25/2023, 3:45:00 PM"),
        ),
        Err(Ok(ContractError::InvalidTimestamp))
    );
    assert_eq!(
        client.try_generate_report(
            &bob,
            &alice,
            &String::from_str(&env, "A"),
            &String::from_str(&env, "Bob"),
            &String::from_str(&env, "Flu, rest advised"),
            &String::from_str(&env, REPORTED_AT),
        ),
        Err(Ok(ContractError::InvalidName))
    );
}

#[test]
fn missing_report_is_not_found() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);

    assert_eq!(
        client.try_get_report(&bob, &alice),
        Err(Ok(ContractError::ReportNotFound))
    );
}

#[test]
fn third_party_cannot_reach_a_report() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);
    generate(&env, &client, &alice, &bob);

    // Another registered doctor only ever reaches their own pair with Alice,
    // which holds no report.
    let carol = Address::generate(&env);
    client.register_doctor(&carol, &String::from_str(&env, "Carol"), &50);
    assert_eq!(
        client.try_get_report(&carol, &alice),
        Err(Ok(ContractError::ReportNotFound))
    );

    // An unregistered address cannot orient a pair at all.
    let stranger = Address::generate(&env);
    assert_eq!(
        client.try_get_report(&stranger, &alice),
        Err(Ok(ContractError::PatientNotFound))
    );
}

#[test]
fn revocation_does_not_retract_a_report() {
    let (env, client) = setup();
    let (alice, bob) = setup_granted_pair(&env, &client);
    generate(&env, &client, &alice, &bob);

    client.revoke_access(&alice, &bob);

    assert!(!client.has_access(&alice, &bob));
    let report = client.get_report(&bob, &alice);
    assert_eq!(report.body, String::from_str(&env, "Flu, rest advised"));
    assert_eq!(client.get_report(&alice, &bob), report);
}
