//! The boundary to the ledger service.
//!
//! [`Ledger`] mirrors the contract surface one-to-one with host-side types;
//! implementations adapt it to whatever transport reaches the chain. The
//! response schemas are plain structs validated on arrival: a field the
//! ledger must populate arriving empty is a [`ClientError::MalformedResponse`],
//! never a silently blank value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ClientError;

/// A failed ledger call. `Rejected` carries the contract's stable error
/// code; the other variants are transport-level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("call rejected by the ledger (code {0})")]
    Rejected(u32),
    #[error("ledger unavailable")]
    Unavailable,
    #[error("transport failure: {0}")]
    Transport(String),
}

/// A patient profile as served by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    /// Doctors this patient has granted access to.
    pub access_list: Vec<String>,
}

/// A doctor profile as served by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub age: u32,
    /// Patients who have shared their reports with this doctor.
    pub patient_access_list: Vec<String>,
}

/// A report as served by the ledger, timestamp still in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawReport {
    pub patient_name: String,
    pub doctor_name: String,
    pub body: String,
    pub reported_at: String,
}

/// Everything `generate_report` needs, assembled by the report workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub patient: String,
    pub doctor: String,
    pub patient_name: String,
    pub doctor_name: String,
    pub body: String,
    pub reported_at: String,
}

pub trait Ledger {
    fn patient_exists(&self, address: &str) -> Result<bool, LedgerError>;
    fn doctor_exists(&self, address: &str) -> Result<bool, LedgerError>;
    fn get_patient(&self, address: &str) -> Result<PatientRecord, LedgerError>;
    fn get_doctor(&self, address: &str) -> Result<DoctorRecord, LedgerError>;
    fn list_doctors(&self) -> Result<Vec<String>, LedgerError>;
    fn register_patient(&self, address: &str, name: &str, age: u32) -> Result<(), LedgerError>;
    fn register_doctor(&self, address: &str, name: &str, age: u32) -> Result<(), LedgerError>;
    fn grant_access(&self, patient: &str, doctor: &str) -> Result<(), LedgerError>;
    fn revoke_access(&self, caller: &str, counterparty: &str) -> Result<(), LedgerError>;
    fn submit_report(&self, submission: &ReportSubmission) -> Result<(), LedgerError>;
    fn fetch_report(&self, owner: &str, counterparty: &str) -> Result<RawReport, LedgerError>;
}

impl PatientRecord {
    pub(crate) fn validated(self) -> Result<Self, ClientError> {
        if self.name.is_empty() {
            return Err(ClientError::MalformedResponse {
                field: "patient.name",
            });
        }
        Ok(self)
    }
}

impl DoctorRecord {
    pub(crate) fn validated(self) -> Result<Self, ClientError> {
        if self.name.is_empty() {
            return Err(ClientError::MalformedResponse {
                field: "doctor.name",
            });
        }
        Ok(self)
    }
}

impl RawReport {
    pub(crate) fn validated(self) -> Result<Self, ClientError> {
        if self.patient_name.is_empty() {
            return Err(ClientError::MalformedResponse {
                field: "report.patient_name",
            });
        }
        if self.doctor_name.is_empty() {
            return Err(ClientError::MalformedResponse {
                field: "report.doctor_name",
            });
        }
        if self.body.is_empty() {
            return Err(ClientError::MalformedResponse {
                field: "report.body",
            });
        }
        Ok(self)
    }
}
