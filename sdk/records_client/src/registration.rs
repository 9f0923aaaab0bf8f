//! The registration workflow: validate locally, submit, re-resolve.

use common::validation as limits;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ValidationError};
use crate::ledger::Ledger;
use crate::session::{Role, Session};

/// Raw form input. The age arrives as free-form text and is parsed here so
/// both roles submit the same integer representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub age: String,
}

/// A form that passed validation, ready to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    name: String,
    age: u32,
}

impl ValidRegistration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

impl RegistrationForm {
    /// Validate without touching the ledger. Runs before every submission;
    /// a failure here means no call was issued.
    pub fn validate(&self) -> Result<ValidRegistration, ValidationError> {
        let name = self.name.trim();
        if name.len() < limits::MIN_NAME_LEN {
            return Err(ValidationError::NameTooShort {
                min: limits::MIN_NAME_LEN,
            });
        }
        if name.len() > limits::MAX_NAME_LEN {
            return Err(ValidationError::NameTooLong {
                max: limits::MAX_NAME_LEN,
            });
        }
        if !limits::name_is_valid(name.as_bytes()) {
            return Err(ValidationError::NameNotPrintable);
        }

        let age: u32 = self
            .age
            .trim()
            .parse()
            .map_err(|_| ValidationError::AgeNotNumeric)?;
        if !limits::age_is_valid(age) {
            return Err(ValidationError::AgeOutOfRange {
                min: limits::MIN_AGE,
                max: limits::MAX_AGE,
            });
        }

        Ok(ValidRegistration {
            name: name.to_owned(),
            age,
        })
    }
}

/// Register the connected address in `role`, then re-resolve the session so
/// routing picks up the new profile. On any failure the borrowed form is
/// untouched and the caller may retry; nothing retries automatically.
pub fn register(
    ledger: &impl Ledger,
    session: &mut Session,
    role: Role,
    form: &RegistrationForm,
) -> Result<(), ClientError> {
    let valid = form.validate()?;

    match role {
        Role::Patient => ledger.register_patient(session.address(), valid.name(), valid.age())?,
        Role::Doctor => ledger.register_doctor(session.address(), valid.name(), valid.age())?,
    }

    session.resolve(ledger)?;
    Ok(())
}
