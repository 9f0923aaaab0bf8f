//! Report authoring and reading.
//!
//! Submission validates the draft before any ledger call and encodes the
//! timestamp into its wire form. Reading is lazy and memoised: a panel
//! fetches on first expansion, decodes and boundary-validates the response,
//! and serves the cached report from then on. A fetched report is
//! immutable for the panel's lifetime.

use chrono::{DateTime, NaiveDate, Utc};
use common::{timestamp, validation as limits};
use serde::{Deserialize, Serialize};

use crate::access::DoctorDashboard;
use crate::error::{ClientError, ValidationError};
use crate::ledger::{Ledger, ReportSubmission};
use crate::session::{Role, Session};

/// What the authoring dialog collects. `patient` / `patient_name` come from
/// the roster row the dialog was opened for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    pub patient: String,
    pub patient_name: String,
    pub body: String,
}

impl ReportDraft {
    /// Validate without touching the ledger.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.body.len() < limits::MIN_REPORT_LEN {
            return Err(ValidationError::ReportTooShort {
                min: limits::MIN_REPORT_LEN,
            });
        }
        if self.body.len() > limits::MAX_REPORT_LEN {
            return Err(ValidationError::ReportTooLong {
                max: limits::MAX_REPORT_LEN,
            });
        }
        Ok(())
    }
}

/// A decoded report, timestamp recovered from its wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub patient_name: String,
    pub doctor_name: String,
    pub body: String,
    pub reported_at_ms: u64,
    pub reported_on: NaiveDate,
}

impl Report {
    fn decode(raw: crate::ledger::RawReport) -> Result<Self, ClientError> {
        let raw = raw.validated()?;
        let reported_at_ms = timestamp::parse_grouped(&raw.reported_at)?;
        let reported_on = i64::try_from(reported_at_ms)
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .ok_or(ClientError::MalformedResponse {
                field: "report.reported_at",
            })?
            .date_naive();
        Ok(Report {
            patient_name: raw.patient_name,
            doctor_name: raw.doctor_name,
            body: raw.body,
            reported_at_ms,
            reported_on,
        })
    }
}

impl DoctorDashboard {
    /// Author the report for `draft.patient`, stamped with
    /// `reported_at_ms` (epoch milliseconds, supplied by the caller's
    /// clock). On failure the borrowed draft is untouched so the dialog can
    /// stay open for retry.
    pub fn submit_report(
        &self,
        ledger: &impl Ledger,
        session: &Session,
        draft: &ReportDraft,
        reported_at_ms: u64,
    ) -> Result<(), ClientError> {
        session.require_role(Role::Doctor)?;
        draft.validate()?;

        let submission = ReportSubmission {
            patient: draft.patient.clone(),
            doctor: session.address().to_owned(),
            patient_name: draft.patient_name.clone(),
            doctor_name: self.profile.name.clone(),
            body: draft.body.clone(),
            reported_at: timestamp::format_grouped(reported_at_ms),
        };
        ledger.submit_report(&submission)?;
        Ok(())
    }
}

/// One collapsible report row, keyed by the counterparty address.
#[derive(Debug, Clone)]
pub struct ReportPanel {
    counterparty: String,
    cached: Option<Report>,
}

impl ReportPanel {
    pub fn new(counterparty: impl Into<String>) -> Self {
        ReportPanel {
            counterparty: counterparty.into(),
            cached: None,
        }
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    /// The report, if a previous expansion already fetched it.
    pub fn cached(&self) -> Option<&Report> {
        self.cached.as_ref()
    }

    /// Fetch on first expansion, serve the cache afterwards.
    pub fn expand(
        &mut self,
        ledger: &impl Ledger,
        session: &Session,
    ) -> Result<&Report, ClientError> {
        match self.cached {
            Some(ref report) => Ok(report),
            None => {
                let raw = ledger.fetch_report(session.address(), &self.counterparty)?;
                Ok(self.cached.insert(Report::decode(raw)?))
            }
        }
    }
}
