#![no_std]

mod access;
pub mod errors;
pub mod events;
mod report;
mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub use errors::ContractError;

/// Storage keys for the contract
const PATIENT: Symbol = symbol_short!("PATIENT");
const DOCTOR: Symbol = symbol_short!("DOCTOR");
const DOC_DIR: Symbol = symbol_short!("DOC_DIR");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// User roles. Assigned exactly once at registration, mutually exclusive.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Patient,
    Doctor,
}

/// A patient's profile. `access_list` holds the doctors this patient has
/// granted read access to their reports.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientProfile {
    pub address: Address,
    pub name: String,
    pub age: u32,
    pub role: Role,
    pub access_list: Vec<Address>,
    pub registered_at: u64,
}

/// A doctor's profile. `patient_access_list` mirrors the grants: the
/// patients who have shared their reports with this doctor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DoctorProfile {
    pub address: Address,
    pub name: String,
    pub age: u32,
    pub role: Role,
    pub patient_access_list: Vec<Address>,
    pub registered_at: u64,
}

/// A directional grant from a patient to a doctor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrant {
    pub patient: Address,
    pub doctor: Address,
    pub granted_at: u64,
}

/// An immutable medical report tied to a (patient, doctor) pair.
/// `reported_at` is the client-supplied comma-grouped epoch-milliseconds
/// string; `created_at` is the ledger timestamp at write time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    pub patient: Address,
    pub doctor: Address,
    pub patient_name: String,
    pub doctor_name: String,
    pub body: String,
    pub reported_at: String,
    pub created_at: u64,
}

pub(crate) fn read_patient(env: &Env, who: &Address) -> Option<PatientProfile> {
    env.storage().persistent().get(&(PATIENT, who.clone()))
}

pub(crate) fn write_patient(env: &Env, profile: &PatientProfile) {
    let key = (PATIENT, profile.address.clone());
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}

pub(crate) fn read_doctor(env: &Env, who: &Address) -> Option<DoctorProfile> {
    env.storage().persistent().get(&(DOCTOR, who.clone()))
}

pub(crate) fn write_doctor(env: &Env, profile: &DoctorProfile) {
    let key = (DOCTOR, profile.address.clone());
    env.storage().persistent().set(&key, profile);
    extend_ttl_address_key(env, &key);
}

fn read_doctor_directory(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DOC_DIR)
        .unwrap_or(Vec::new(env))
}

fn is_registered(env: &Env, who: &Address) -> bool {
    read_patient(env, who).is_some() || read_doctor(env, who).is_some()
}

#[contract]
pub struct MedicalRecordsContract;

#[contractimpl]
impl MedicalRecordsContract {
    /// Register the caller as a patient. An address can register exactly
    /// once, in exactly one role.
    pub fn register_patient(
        env: Env,
        patient: Address,
        name: String,
        age: u32,
    ) -> Result<(), ContractError> {
        patient.require_auth();

        validation::validate_name(&name)?;
        validation::validate_age(age)?;

        if is_registered(&env, &patient) {
            return Err(ContractError::AlreadyRegistered);
        }

        let profile = PatientProfile {
            address: patient.clone(),
            name: name.clone(),
            age,
            role: Role::Patient,
            access_list: Vec::new(&env),
            registered_at: env.ledger().timestamp(),
        };
        write_patient(&env, &profile);

        events::publish_user_registered(&env, patient, Role::Patient, name);

        Ok(())
    }

    /// Register the caller as a doctor and add them to the public roster
    /// patients browse when granting access.
    pub fn register_doctor(
        env: Env,
        doctor: Address,
        name: String,
        age: u32,
    ) -> Result<(), ContractError> {
        doctor.require_auth();

        validation::validate_name(&name)?;
        validation::validate_age(age)?;

        if is_registered(&env, &doctor) {
            return Err(ContractError::AlreadyRegistered);
        }

        let profile = DoctorProfile {
            address: doctor.clone(),
            name: name.clone(),
            age,
            role: Role::Doctor,
            patient_access_list: Vec::new(&env),
            registered_at: env.ledger().timestamp(),
        };
        write_doctor(&env, &profile);

        let mut directory = read_doctor_directory(&env);
        directory.push_back(doctor.clone());
        env.storage().persistent().set(&DOC_DIR, &directory);
        env.storage()
            .persistent()
            .extend_ttl(&DOC_DIR, TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_user_registered(&env, doctor, Role::Doctor, name);

        Ok(())
    }

    /// Check whether an address holds a patient profile.
    pub fn patient_exists(env: Env, who: Address) -> bool {
        read_patient(&env, &who).is_some()
    }

    /// Check whether an address holds a doctor profile.
    pub fn doctor_exists(env: Env, who: Address) -> bool {
        read_doctor(&env, &who).is_some()
    }

    /// Get a patient's profile, including their grant roster.
    pub fn get_patient(env: Env, who: Address) -> Result<PatientProfile, ContractError> {
        read_patient(&env, &who).ok_or(ContractError::PatientNotFound)
    }

    /// Get a doctor's profile, including the patients shared with them.
    pub fn get_doctor(env: Env, who: Address) -> Result<DoctorProfile, ContractError> {
        read_doctor(&env, &who).ok_or(ContractError::DoctorNotFound)
    }

    /// All registered doctor addresses, in registration order.
    pub fn list_doctors(env: Env) -> Vec<Address> {
        read_doctor_directory(&env)
    }

    /// Grant `doctor` read access to the caller's reports. Both parties
    /// must be registered; re-granting is a no-op.
    pub fn grant_access(env: Env, patient: Address, doctor: Address) -> Result<(), ContractError> {
        patient.require_auth();
        access::grant(&env, &patient, &doctor)
    }

    /// Revoke the grant between the caller and `counterparty`; either party
    /// may revoke. Revoking an absent grant is a no-op.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        counterparty: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        access::revoke(&env, &caller, &counterparty)
    }

    /// Check whether `doctor` currently holds a grant from `patient`.
    pub fn has_access(env: Env, patient: Address, doctor: Address) -> bool {
        access::grant_exists(&env, &patient, &doctor)
    }

    /// Write a report for `patient`. Requires the caller to be a doctor
    /// with an active grant; a pair may hold at most one report.
    #[allow(clippy::too_many_arguments)]
    pub fn generate_report(
        env: Env,
        doctor: Address,
        patient: Address,
        patient_name: String,
        doctor_name: String,
        body: String,
        reported_at: String,
    ) -> Result<(), ContractError> {
        doctor.require_auth();
        report::generate(
            &env,
            &doctor,
            &patient,
            patient_name,
            doctor_name,
            body,
            reported_at,
        )
    }

    /// Fetch the report for the pair formed by the caller and
    /// `counterparty`. Only the two parties can reach it.
    pub fn get_report(
        env: Env,
        requester: Address,
        counterparty: Address,
    ) -> Result<Report, ContractError> {
        requester.require_auth();
        report::fetch(&env, &requester, &counterparty)
    }
}


#[cfg(test)]
mod test_access;

#[cfg(test)]
mod test_report;
