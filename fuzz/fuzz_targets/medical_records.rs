#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use medical_records::{MedicalRecordsContract, MedicalRecordsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    RegisterPatient { user: u8, name_len: u8, age: u32 },
    RegisterDoctor { user: u8, name_len: u8, age: u32 },
    Grant { patient: u8, doctor: u8 },
    Revoke { caller: u8, counterparty: u8 },
    Report { doctor: u8, patient: u8, body_len: u8 },
    Fetch { requester: u8, counterparty: u8 },
}

const POOL: usize = 8;

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(MedicalRecordsContract, ());
    let client = MedicalRecordsContractClient::new(&env, &contract_id);

    let users: Vec<Address> = (0..POOL).map(|_| Address::generate(&env)).collect();
    let pick = |index: u8| users[index as usize % POOL].clone();
    let text = |len: u8| String::from_str(&env, &"x".repeat(len as usize % 80));

    for action in actions {
        match action {
            FuzzAction::RegisterPatient { user, name_len, age } => {
                let _ = client.try_register_patient(&pick(user), &text(name_len), &age);
            }
            FuzzAction::RegisterDoctor { user, name_len, age } => {
                let _ = client.try_register_doctor(&pick(user), &text(name_len), &age);
            }
            FuzzAction::Grant { patient, doctor } => {
                let _ = client.try_grant_access(&pick(patient), &pick(doctor));
            }
            FuzzAction::Revoke { caller, counterparty } => {
                let _ = client.try_revoke_access(&pick(caller), &pick(counterparty));
            }
            FuzzAction::Report { doctor, patient, body_len } => {
                let _ = client.try_generate_report(
                    &pick(doctor),
                    &pick(patient),
                    &String::from_str(&env, "Pat"),
                    &String::from_str(&env, "Doc"),
                    &text(body_len),
                    &String::from_str(&env, "1,702,857,600,000"),
                );
            }
            FuzzAction::Fetch { requester, counterparty } => {
                let _ = client.try_get_report(&pick(requester), &pick(counterparty));
            }
        }
    }

    // Whatever the sequence did, the mirrored rosters stay consistent.
    for patient in &users {
        if client.patient_exists(patient) {
            for doctor in client.get_patient(patient).access_list.iter() {
                assert!(client.has_access(patient, &doctor));
            }
        }
    }
});
