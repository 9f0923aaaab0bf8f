//! The connected session and its resolved role.
//!
//! A [`Session`] is created when a wallet connects and dropped when it
//! disconnects; nothing about it is ambient or persisted. Role resolution
//! issues the two existence queries and keeps their answers as an explicit
//! tri-state, so "we have not asked yet" and "the ledger says unregistered"
//! are different values.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::ledger::Ledger;

/// The two roles an address can register as, mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Patient,
    Doctor,
}

/// What the ledger has told us about the connected address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Not resolved yet, or the last resolution failed.
    Unknown,
    /// Resolved: the address holds no profile.
    Unregistered,
    /// Resolved: the address holds a profile in this role.
    Registered(Role),
}

/// Where the front-end should send the user, derived purely from session
/// state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Resolution has not completed; stay put.
    Loading,
    Register,
    PatientHome,
    DoctorHome,
}

#[derive(Debug, Clone)]
pub struct Session {
    address: String,
    registration: Registration,
}

impl Session {
    /// Open a session for a freshly connected wallet and resolve its role.
    /// Fails with [`ClientError::NotConnected`] when no address is
    /// available yet; callers must gate on wallet readiness.
    pub fn connect(ledger: &impl Ledger, address: impl Into<String>) -> Result<Self, ClientError> {
        let address = address.into();
        if address.trim().is_empty() {
            return Err(ClientError::NotConnected);
        }
        let mut session = Session {
            address,
            registration: Registration::Unknown,
        };
        session.resolve(ledger)?;
        Ok(session)
    }

    /// Re-run role resolution: one existence query per role. An address
    /// reported in both roles is a ledger fault and surfaces as
    /// [`ClientError::RoleConflict`]; the session then reports `Unknown`
    /// and routes to [`Route::Loading`] rather than misrouting the user.
    pub fn resolve(&mut self, ledger: &impl Ledger) -> Result<Registration, ClientError> {
        let is_doctor = ledger.doctor_exists(&self.address)?;
        let is_patient = ledger.patient_exists(&self.address)?;

        self.registration = match (is_doctor, is_patient) {
            (true, true) => {
                self.registration = Registration::Unknown;
                return Err(ClientError::RoleConflict {
                    address: self.address.clone(),
                });
            }
            (true, false) => Registration::Registered(Role::Doctor),
            (false, true) => Registration::Registered(Role::Patient),
            (false, false) => Registration::Unregistered,
        };
        Ok(self.registration)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn registration(&self) -> Registration {
        self.registration
    }

    pub fn role(&self) -> Option<Role> {
        match self.registration {
            Registration::Registered(role) => Some(role),
            _ => None,
        }
    }

    pub fn route(&self) -> Route {
        match self.registration {
            Registration::Unknown => Route::Loading,
            Registration::Unregistered => Route::Register,
            Registration::Registered(Role::Patient) => Route::PatientHome,
            Registration::Registered(Role::Doctor) => Route::DoctorHome,
        }
    }

    /// Tear the session down when the wallet disconnects.
    pub fn disconnect(self) {}

    pub(crate) fn require_role(&self, required: Role) -> Result<(), ClientError> {
        if self.role() == Some(required) {
            Ok(())
        } else {
            Err(ClientError::WrongRole { required })
        }
    }
}
