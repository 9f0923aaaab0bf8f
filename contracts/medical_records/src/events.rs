use crate::Role;
use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when a new user registers, as patient or doctor.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRegisteredEvent {
    pub user: Address,
    pub role: Role,
    pub name: String,
    pub timestamp: u64,
}

/// Event published when a patient grants a doctor access to their reports.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessGrantedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

/// Event published when a grant is revoked, by either party.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub revoked_by: Address,
    pub timestamp: u64,
}

/// Event published when a doctor writes a report for a patient.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportGeneratedEvent {
    pub patient: Address,
    pub doctor: Address,
    pub timestamp: u64,
}

pub fn publish_user_registered(env: &Env, user: Address, role: Role, name: String) {
    let topics = (symbol_short!("USR_REG"), user.clone());
    let data = UserRegisteredEvent {
        user,
        role,
        name,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_granted(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("ACC_GRT"), patient.clone(), doctor.clone());
    let data = AccessGrantedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_access_revoked(env: &Env, patient: Address, doctor: Address, revoked_by: Address) {
    let topics = (symbol_short!("ACC_REV"), patient.clone(), doctor.clone());
    let data = AccessRevokedEvent {
        patient,
        doctor,
        revoked_by,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_report_generated(env: &Env, patient: Address, doctor: Address) {
    let topics = (symbol_short!("REP_GEN"), patient.clone(), doctor.clone());
    let data = ReportGeneratedEvent {
        patient,
        doctor,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
