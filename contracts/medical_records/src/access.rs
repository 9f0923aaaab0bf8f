//! Grant bookkeeping: the per-pair grant record plus the mirrored rosters
//! kept on both profiles so each side can enumerate its counterparties
//! without scanning storage.

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::errors::ContractError;
use crate::{events, read_doctor, read_patient, write_doctor, write_patient, AccessGrant};

const GRANT: Symbol = symbol_short!("GRANT");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

fn grant_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (GRANT, patient.clone(), doctor.clone())
}

fn extend_grant_ttl(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn grant_exists(env: &Env, patient: &Address, doctor: &Address) -> bool {
    env.storage().persistent().has(&grant_key(patient, doctor))
}

fn push_unique(list: &mut Vec<Address>, entry: &Address) {
    if list.iter().all(|existing| existing != *entry) {
        list.push_back(entry.clone());
    }
}

fn remove_entry(list: &mut Vec<Address>, entry: &Address) {
    if let Some(index) = list.iter().position(|existing| existing == *entry) {
        list.remove(index as u32);
    }
}

/// Orient an unordered pair of addresses into (patient, doctor).
/// The first address is the caller, so a successful orientation also proves
/// the caller is a party to the pair.
pub(crate) fn orient(
    env: &Env,
    caller: &Address,
    counterparty: &Address,
) -> Result<(Address, Address), ContractError> {
    if read_patient(env, caller).is_some() {
        if read_doctor(env, counterparty).is_some() {
            Ok((caller.clone(), counterparty.clone()))
        } else {
            Err(ContractError::DoctorNotFound)
        }
    } else if read_doctor(env, caller).is_some() {
        if read_patient(env, counterparty).is_some() {
            Ok((counterparty.clone(), caller.clone()))
        } else {
            Err(ContractError::PatientNotFound)
        }
    } else {
        Err(ContractError::PatientNotFound)
    }
}

/// Record a grant from `patient` to `doctor`. Re-granting an existing grant
/// is a no-op so a repeated submit cannot duplicate roster entries.
pub(crate) fn grant(env: &Env, patient: &Address, doctor: &Address) -> Result<(), ContractError> {
    let mut patient_profile = read_patient(env, patient).ok_or(ContractError::PatientNotFound)?;
    let mut doctor_profile = read_doctor(env, doctor).ok_or(ContractError::DoctorNotFound)?;

    if grant_exists(env, patient, doctor) {
        return Ok(());
    }

    let record = AccessGrant {
        patient: patient.clone(),
        doctor: doctor.clone(),
        granted_at: env.ledger().timestamp(),
    };
    let key = grant_key(patient, doctor);
    env.storage().persistent().set(&key, &record);
    extend_grant_ttl(env, &key);

    push_unique(&mut patient_profile.access_list, doctor);
    push_unique(&mut doctor_profile.patient_access_list, patient);
    write_patient(env, &patient_profile);
    write_doctor(env, &doctor_profile);

    events::publish_access_granted(env, patient.clone(), doctor.clone());

    Ok(())
}

/// Remove the grant between the caller and the counterparty, whichever way
/// round the pair is. Revoking a grant that does not exist is a no-op.
pub(crate) fn revoke(
    env: &Env,
    caller: &Address,
    counterparty: &Address,
) -> Result<(), ContractError> {
    let (patient, doctor) = orient(env, caller, counterparty)?;

    if !grant_exists(env, &patient, &doctor) {
        return Ok(());
    }

    env.storage().persistent().remove(&grant_key(&patient, &doctor));

    if let Some(mut patient_profile) = read_patient(env, &patient) {
        remove_entry(&mut patient_profile.access_list, &doctor);
        write_patient(env, &patient_profile);
    }
    if let Some(mut doctor_profile) = read_doctor(env, &doctor) {
        remove_entry(&mut doctor_profile.patient_access_list, &patient);
        write_doctor(env, &doctor_profile);
    }

    events::publish_access_revoked(env, patient, doctor, caller.clone());

    Ok(())
}
