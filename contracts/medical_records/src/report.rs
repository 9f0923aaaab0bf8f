//! Report storage: exactly one immutable report per (patient, doctor) pair,
//! readable by the two parties only.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::errors::ContractError;
use crate::{access, events, read_doctor, read_patient, validation, Report};

const REPORT: Symbol = symbol_short!("REPORT");

const TTL_THRESHOLD: u32 = 5_184_000;
const TTL_EXTEND_TO: u32 = 10_368_000;

fn report_key(patient: &Address, doctor: &Address) -> (Symbol, Address, Address) {
    (REPORT, patient.clone(), doctor.clone())
}

fn extend_report_ttl(env: &Env, key: &(Symbol, Address, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Write the report for (patient, doctor). Requires an active grant; the
/// pair may hold at most one report, ever.
#[allow(clippy::too_many_arguments)]
pub(crate) fn generate(
    env: &Env,
    doctor: &Address,
    patient: &Address,
    patient_name: String,
    doctor_name: String,
    body: String,
    reported_at: String,
) -> Result<(), ContractError> {
    read_doctor(env, doctor).ok_or(ContractError::DoctorNotFound)?;
    read_patient(env, patient).ok_or(ContractError::PatientNotFound)?;

    if !access::grant_exists(env, patient, doctor) {
        return Err(ContractError::AccessNotGranted);
    }

    validation::validate_name(&patient_name)?;
    validation::validate_name(&doctor_name)?;
    validation::validate_report_body(&body)?;
    validation::validate_reported_at(&reported_at)?;

    let key = report_key(patient, doctor);
    if env.storage().persistent().has(&key) {
        return Err(ContractError::ReportAlreadyExists);
    }

    let report = Report {
        patient: patient.clone(),
        doctor: doctor.clone(),
        patient_name,
        doctor_name,
        body,
        reported_at,
        created_at: env.ledger().timestamp(),
    };
    env.storage().persistent().set(&key, &report);
    extend_report_ttl(env, &key);

    events::publish_report_generated(env, patient.clone(), doctor.clone());

    Ok(())
}

/// Fetch the report for the pair formed by the requester and the
/// counterparty. Orientation ties the storage key to the requester, so a
/// third party can never reach another pair's report. A revoked grant does
/// not retract a report that was already written.
pub(crate) fn fetch(
    env: &Env,
    requester: &Address,
    counterparty: &Address,
) -> Result<Report, ContractError> {
    let (patient, doctor) = access::orient(env, requester, counterparty)?;
    env.storage()
        .persistent()
        .get(&report_key(&patient, &doctor))
        .ok_or(ContractError::ReportNotFound)
}
