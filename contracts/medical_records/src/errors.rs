use soroban_sdk::contracterror;

/// Error codes for the medical records contract.
///
/// # Code ranges
/// | Range   | Purpose               |
/// |---------|-----------------------|
/// | 1 – 9   | State conflicts       |
/// | 10 – 19 | Resource not found    |
/// | 20 – 29 | Validation / input    |
/// | 30 – 39 | Authorisation         |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum ContractError {
    /// The address already holds a profile, as patient or as doctor.
    /// Roles are assigned exactly once and are mutually exclusive.
    AlreadyRegistered = 1,

    /// A report for this (patient, doctor) pair has already been written.
    /// Reports are immutable; there is no overwrite path.
    ReportAlreadyExists = 2,

    /// No patient profile exists for the given address.
    PatientNotFound = 10,

    /// No doctor profile exists for the given address.
    DoctorNotFound = 11,

    /// No report exists for the given (patient, doctor) pair.
    ReportNotFound = 12,

    /// The display name is out of bounds or not printable ASCII.
    InvalidName = 20,

    /// The age is outside the accepted range.
    InvalidAge = 21,

    /// The report body is out of bounds.
    InvalidReport = 22,

    /// The report timestamp is not a comma-grouped decimal string.
    InvalidTimestamp = 23,

    /// The doctor holds no active grant from the patient.
    AccessNotGranted = 31,
}
