//! Dashboard aggregates and the grant/revoke workflow.
//!
//! Each dashboard is the full set of ledger state its view renders. After
//! any mutation the aggregate is reloaded wholesale from the ledger rather
//! than patched optimistically, so a displayed roster is exactly as fresh
//! as its last load and no local consistency protocol is needed.

use crate::error::ClientError;
use crate::ledger::{DoctorRecord, Ledger, PatientRecord};
use crate::session::{Role, Session};

/// Everything the patient view renders: the own profile (with its grant
/// roster) and the directory of all registered doctors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientDashboard {
    pub profile: PatientRecord,
    pub doctors: Vec<String>,
}

impl PatientDashboard {
    pub fn load(ledger: &impl Ledger, session: &Session) -> Result<Self, ClientError> {
        session.require_role(Role::Patient)?;
        let profile = ledger.get_patient(session.address())?.validated()?;
        let doctors = ledger.list_doctors()?;
        Ok(PatientDashboard { profile, doctors })
    }

    /// Grant `doctor` access to this patient's reports, then resync.
    pub fn grant(
        &mut self,
        ledger: &impl Ledger,
        session: &Session,
        doctor: &str,
    ) -> Result<(), ClientError> {
        session.require_role(Role::Patient)?;
        ledger.grant_access(session.address(), doctor)?;
        *self = Self::load(ledger, session)?;
        Ok(())
    }

    /// Revoke a doctor's access, then resync. Revoking a grant that no
    /// longer exists is a no-op at the ledger and therefore here too.
    pub fn revoke(
        &mut self,
        ledger: &impl Ledger,
        session: &Session,
        doctor: &str,
    ) -> Result<(), ClientError> {
        session.require_role(Role::Patient)?;
        ledger.revoke_access(session.address(), doctor)?;
        *self = Self::load(ledger, session)?;
        Ok(())
    }
}

/// Everything the doctor view renders: the own profile, whose
/// `patient_access_list` is the list of patients shared with this doctor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDashboard {
    pub profile: DoctorRecord,
}

impl DoctorDashboard {
    pub fn load(ledger: &impl Ledger, session: &Session) -> Result<Self, ClientError> {
        session.require_role(Role::Doctor)?;
        let profile = ledger.get_doctor(session.address())?.validated()?;
        Ok(DoctorDashboard { profile })
    }

    /// Resolve one roster entry to its profile. Each list row fetches
    /// independently; there is no cross-row cache.
    pub fn patient(&self, ledger: &impl Ledger, address: &str) -> Result<PatientRecord, ClientError> {
        ledger.get_patient(address)?.validated()
    }

    /// Remove this doctor from `patient`'s roster (the doctor-side revoke),
    /// then resync.
    pub fn release_patient(
        &mut self,
        ledger: &impl Ledger,
        session: &Session,
        patient: &str,
    ) -> Result<(), ClientError> {
        session.require_role(Role::Doctor)?;
        ledger.revoke_access(session.address(), patient)?;
        *self = Self::load(ledger, session)?;
        Ok(())
    }
}
