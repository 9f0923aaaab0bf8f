use common::timestamp::TimestampError;
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::session::Role;

/// A form field failed client-side validation. Nothing was sent to the
/// ledger; the caller fixes the input and retries.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("name contains unsupported characters")]
    NameNotPrintable,
    #[error("age must be a whole number")]
    AgeNotNumeric,
    #[error("age must be between {min} and {max}")]
    AgeOutOfRange { min: u32, max: u32 },
    #[error("report must be at least {min} characters")]
    ReportTooShort { min: usize },
    #[error("report must be at most {max} characters")]
    ReportTooLong { max: usize },
}

/// Everything a workflow can fail with. No variant is fatal: each one
/// leaves the caller in a retryable state with local input preserved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// No wallet address is connected; ledger calls are gated off.
    #[error("no wallet connected")]
    NotConnected,

    /// The ledger reported the address as both doctor and patient. The
    /// ledger's registration rules make this unreachable; seeing it means
    /// the ledger is misbehaving, so it is surfaced instead of being
    /// collapsed into "unregistered".
    #[error("address {address} is registered as both doctor and patient")]
    RoleConflict { address: String },

    /// The session's role does not permit this operation.
    #[error("operation requires the {required:?} role")]
    WrongRole { required: Role },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A ledger response was missing or empty where data is mandatory.
    #[error("malformed ledger response: {field}")]
    MalformedResponse { field: &'static str },

    /// A stored report timestamp did not decode as a grouped integer.
    #[error("bad report timestamp: {0}")]
    Timestamp(#[from] TimestampError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
