//! Host-side client for the medical-records ledger.
//!
//! The ledger itself is opaque behind the [`Ledger`] trait; this crate owns
//! everything the ledger does not: the connected session and its resolved
//! role, pre-submission validation, and the role-gated workflows a
//! front-end drives (registration, grant/revoke, report authoring and
//! reading).
//!
//! Two rules shape the API:
//!
//! - **Resync over patching.** Every mutation reloads the affected
//!   dashboard aggregate from the ledger instead of editing local state, so
//!   displayed rosters are always exactly as fresh as the last fetch.
//! - **Typed boundaries.** Ledger responses are validated on arrival;
//!   missing or empty fields become [`ClientError::MalformedResponse`]
//!   instead of propagating silently.

pub mod access;
pub mod error;
pub mod ledger;
pub mod registration;
pub mod report;
pub mod session;

pub use access::{DoctorDashboard, PatientDashboard};
pub use error::{ClientError, ValidationError};
pub use ledger::{DoctorRecord, Ledger, LedgerError, PatientRecord, RawReport, ReportSubmission};
pub use registration::{register, RegistrationForm};
pub use report::{Report, ReportDraft, ReportPanel};
pub use session::{Registration, Role, Route, Session};
